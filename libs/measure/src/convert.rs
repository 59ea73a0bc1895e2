use crate::catalog::UnitDef;
use crate::error::{Error, Result};
use crate::measure::Measure;
use std::collections::BTreeMap;

impl Measure {
    /// Rewrites units of this measure, rescaling the value.
    ///
    /// Each substitution names a unit currently in the measure and the unit to replace it
    /// with; both must share a dimension. A later substitution for the same name wins.
    ///
    /// ```
    /// use ferrum_measure::{catalog, Measure};
    ///
    /// let speed = Measure::with_units(1.0, [("m", 1.0), ("s", -1.0)]).unwrap();
    /// let cm = catalog().lookup("cm").unwrap();
    /// let minute = catalog().lookup("minute").unwrap();
    /// let out = speed.convert([("m", cm), ("s", minute)]).unwrap();
    /// assert!((out.value() - 6000.0).abs() < 1e-9);
    /// ```
    pub fn convert<'a, I>(&self, substitutions: I) -> Result<Measure>
    where
        I: IntoIterator<Item = (&'a str, &'a UnitDef)>,
    {
        let mut pending = BTreeMap::new();
        for (name, to) in substitutions {
            let Some(from) = self.units().unit_named(name) else {
                return Err(if crate::catalog().contains(name) {
                    Error::UnitNotInMeasure(name.into())
                } else {
                    Error::UnknownUnit(name.into())
                });
            };
            to.check_factor()?;
            if from.dimension() != to.dimension() {
                tracing::debug!(
                    from = from.name(),
                    to = to.name(),
                    "rejecting conversion across dimensions"
                );
                return Err(Error::IncompatibleUnits {
                    from: from.name().into(),
                    to: to.name().into(),
                });
            }
            pending.insert(*from, *to);
        }
        Ok(self.rescale(pending))
    }

    /// Converts the measure's only unit to the catalog unit called `unit_name`.
    pub fn convert_to(&self, unit_name: &str) -> Result<Measure> {
        let to = crate::catalog().lookup(unit_name)?;
        self.convert_to_unit(to)
    }

    /// Converts the measure's only unit to `to`. Fails with
    /// [`Error::AmbiguousConversion`] unless the measure has exactly one unit.
    pub fn convert_to_unit(&self, to: &UnitDef) -> Result<Measure> {
        let mut units = self.units().units();
        let (Some(from), None) = (units.next(), units.next()) else {
            return Err(Error::AmbiguousConversion(self.units().to_string()));
        };
        self.convert([(from.name(), to)])
    }

    /// Applies already-validated `(from, to)` pairs. Pairs whose `from` is absent are
    /// skipped.
    pub(crate) fn rescale<I>(&self, pairs: I) -> Measure
    where
        I: IntoIterator<Item = (UnitDef, UnitDef)>,
    {
        let mut value = self.value();
        let mut units = self.units().clone();
        for (from, to) in pairs {
            if from == to {
                continue;
            }
            let Some(exponent) = units.get(&from) else {
                continue;
            };
            let factor = (from.k() / to.k()).powf(exponent);
            tracing::trace!(
                from = from.name(),
                to = to.name(),
                exponent,
                factor,
                "substituting unit"
            );
            value *= factor;
            units.replace(&from, to);
        }
        Measure::from_parts(value, units)
    }
}

/// Re-expresses `other` in the units `reference` already uses.
///
/// Every unit of `other` whose dimension is represented by a different unit in
/// `reference` is converted to that unit. Units of dimensions `reference` lacks are left
/// alone.
pub fn to_same_units(reference: &Measure, other: &Measure) -> Measure {
    let pairs: Vec<(UnitDef, UnitDef)> = other
        .units()
        .units()
        .filter_map(|unit| {
            reference
                .units()
                .unit_for(unit.dimension())
                .filter(|target| *target != unit)
                .map(|target| (*unit, *target))
        })
        .collect();
    if !pairs.is_empty() {
        tracing::trace!(substitutions = pairs.len(), "aligning operand units");
    }
    other.rescale(pairs)
}
