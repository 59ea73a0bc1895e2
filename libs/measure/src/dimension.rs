use crate::catalog::{PhysicalDimension, UnitDef};
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Compound unit of a measure: each unit mapped to its exponent.
///
/// Invariants:
/// - no exponent is zero; entries driven to zero are removed,
/// - at most one unit per [`PhysicalDimension`].
///
/// Entries iterate in unit-name order. The empty map is adimensional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DimensionMap {
    entries: BTreeMap<UnitDef, f64>,
}

impl DimensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn single(unit: UnitDef) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(unit, 1.0);
        Self { entries }
    }

    /// Builds a map from `(unit, exponent)` pairs, checking both invariants.
    ///
    /// Exponents must be finite and nonzero. A unit listed more than once has its
    /// exponents summed, so `[(cm, 1), (cm, 1)]` is `cm^2`.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (UnitDef, f64)>,
    {
        let mut map = Self::new();
        for (unit, exponent) in pairs {
            if !exponent.is_finite() {
                return Err(Error::InvalidExponent {
                    name: unit.name().into(),
                    exponent,
                });
            }
            if exponent == 0.0 {
                return Err(Error::ZeroExponent(unit.name().into()));
            }
            if let Some(existing) = map.unit_for(unit.dimension()) {
                if *existing != unit {
                    return Err(Error::ConflictingUnits {
                        dimension: unit.dimension(),
                        first: existing.name().into(),
                        second: unit.name().into(),
                    });
                }
            }
            map.add_exponent(unit, exponent);
        }
        Ok(map)
    }

    fn add_exponent(&mut self, unit: UnitDef, exponent: f64) {
        let sum = self.entries.get(&unit).copied().unwrap_or(0.0) + exponent;
        if sum == 0.0 {
            self.entries.remove(&unit);
        } else {
            self.entries.insert(unit, sum);
        }
    }

    pub fn get(&self, unit: &UnitDef) -> Option<f64> {
        self.entries.get(unit).copied()
    }

    pub fn exponent(&self, name: &str) -> Option<f64> {
        self.unit_named(name).and_then(|u| self.get(u))
    }

    pub fn unit_named(&self, name: &str) -> Option<&UnitDef> {
        self.entries.keys().find(|u| u.name() == name)
    }

    /// The unit standing for `dimension`, unique by the one-unit-per-dimension invariant.
    pub fn unit_for(&self, dimension: PhysicalDimension) -> Option<&UnitDef> {
        self.entries.keys().find(|u| u.dimension() == dimension)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UnitDef, f64)> {
        self.entries.iter().map(|(u, &e)| (u, e))
    }

    pub fn units(&self) -> impl Iterator<Item = &UnitDef> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Swaps `from` for `to`, keeping the exponent.
    pub(crate) fn replace(&mut self, from: &UnitDef, to: UnitDef) {
        if let Some(exponent) = self.entries.remove(from) {
            debug_assert!(
                self.unit_for(to.dimension()).is_none(),
                "replacement '{}' collides with an existing unit",
                to.name()
            );
            self.entries.insert(to, exponent);
        }
    }

    /// Sums exponents key by key. Both maps must already use the same unit per dimension.
    pub(crate) fn combine(&self, other: &DimensionMap) -> DimensionMap {
        let mut out = self.clone();
        for (unit, exponent) in other.iter() {
            debug_assert!(
                self.unit_for(unit.dimension())
                    .map_or(true, |existing| existing == unit),
                "combining unaligned unit '{}'",
                unit.name()
            );
            out.add_exponent(*unit, exponent);
        }
        out
    }

    /// Multiplies every exponent by `factor`, dropping entries that land on zero.
    pub(crate) fn scaled(&self, factor: f64) -> DimensionMap {
        let entries = self
            .entries
            .iter()
            .map(|(unit, exponent)| (*unit, exponent * factor))
            .filter(|(_, exponent)| *exponent != 0.0)
            .collect();
        Self { entries }
    }
}
