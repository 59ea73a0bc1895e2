use crate::catalog::UnitDef;
use crate::dimension::DimensionMap;
use crate::error::Result;

/// A value tagged with a compound unit.
///
/// Measures are immutable: conversions and arithmetic always return a new measure.
#[derive(Clone, Debug, PartialEq)]
pub struct Measure {
    value: f64,
    units: DimensionMap,
}

/// Right-hand side of an operation that accepts either a plain number or a measure.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Measure(Measure),
}

impl Measure {
    /// `value` in the catalog unit called `unit_name`.
    pub fn new(unit_name: &str, value: f64) -> Result<Self> {
        crate::catalog().measure(unit_name, value)
    }

    pub fn from_unit(unit: UnitDef, value: f64) -> Self {
        Self::from_parts(value, DimensionMap::single(unit))
    }

    pub fn adimensional(value: f64) -> Self {
        Self::from_parts(value, DimensionMap::new())
    }

    /// Builds a compound measure from `(unit name, exponent)` pairs resolved through the
    /// global catalog, e.g. `[("m", 1.0), ("s", -2.0)]` for an acceleration.
    pub fn with_units<'a, I>(value: f64, units: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        crate::catalog().with_units(value, units)
    }

    pub(crate) fn from_parts(value: f64, units: DimensionMap) -> Self {
        Self { value, units }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn units(&self) -> &DimensionMap {
        &self.units
    }

    pub fn exponent(&self, unit_name: &str) -> Option<f64> {
        self.units.exponent(unit_name)
    }

    pub fn is_adimensional(&self) -> bool {
        self.units.is_empty()
    }

    /// Raw value, whatever the unit. Convert first if a specific unit is expected.
    pub fn to_float(&self) -> f64 {
        self.value
    }

    /// Raw value truncated toward zero, saturating at the `i64` range.
    pub fn to_int(&self) -> i64 {
        self.value as i64
    }
}

impl From<Measure> for f64 {
    fn from(measure: Measure) -> f64 {
        measure.to_float()
    }
}

impl From<&Measure> for f64 {
    fn from(measure: &Measure) -> f64 {
        measure.to_float()
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<Measure> for Operand {
    fn from(measure: Measure) -> Self {
        Operand::Measure(measure)
    }
}

impl From<&Measure> for Operand {
    fn from(measure: &Measure) -> Self {
        Operand::Measure(measure.clone())
    }
}
