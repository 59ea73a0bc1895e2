use crate::dimension::DimensionMap;
use crate::error::{Error, Result};
use crate::measure::Measure;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Category of physical quantity. Only units sharing a dimension convert into each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhysicalDimension {
    Adimensional,
    Length,
    Weight,
    Time,
}

impl PhysicalDimension {
    pub const ALL: [PhysicalDimension; 4] = [
        PhysicalDimension::Adimensional,
        PhysicalDimension::Length,
        PhysicalDimension::Weight,
        PhysicalDimension::Time,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhysicalDimension::Adimensional => "adimensional",
            PhysicalDimension::Length => "length",
            PhysicalDimension::Weight => "weight",
            PhysicalDimension::Time => "time",
        }
    }
}

/// A named unit and its scale factor `k` relative to the canonical unit of its dimension.
///
/// Identity (equality, ordering, hashing) is the unit name, which is unique within a
/// catalog.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitDef {
    name: &'static str,
    long_name: &'static str,
    dimension: PhysicalDimension,
    k: f64,
}

impl UnitDef {
    pub const fn new(
        name: &'static str,
        long_name: &'static str,
        dimension: PhysicalDimension,
        k: f64,
    ) -> Self {
        Self {
            name,
            long_name,
            dimension,
            k,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn long_name(&self) -> &'static str {
        self.long_name
    }

    pub fn dimension(&self) -> PhysicalDimension {
        self.dimension
    }

    /// Factor converting one of this unit into the canonical unit of its dimension.
    pub fn k(&self) -> f64 {
        self.k
    }

    pub(crate) fn check_factor(&self) -> Result<()> {
        if self.k.is_finite() && self.k > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidFactor {
                name: self.name.into(),
                k: self.k,
            })
        }
    }
}

impl PartialEq for UnitDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for UnitDef {}

impl Hash for UnitDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for UnitDef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnitDef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name)
    }
}

const STANDARD_UNITS: &[UnitDef] = &[
    UnitDef::new("um", "micrometres", PhysicalDimension::Length, 1e-3),
    UnitDef::new("mm", "millimetres", PhysicalDimension::Length, 1.0),
    UnitDef::new("cm", "centimetres", PhysicalDimension::Length, 10.0),
    UnitDef::new("m", "metres", PhysicalDimension::Length, 1000.0),
    UnitDef::new("km", "kilometres", PhysicalDimension::Length, 1e6),
    UnitDef::new("in", "inches", PhysicalDimension::Length, 25.4),
    UnitDef::new("gram", "grams", PhysicalDimension::Weight, 1.0),
    UnitDef::new("kg", "kilograms", PhysicalDimension::Weight, 1000.0),
    UnitDef::new("lb", "metric pounds", PhysicalDimension::Weight, 500.0),
    UnitDef::new("s", "seconds", PhysicalDimension::Time, 1.0),
    UnitDef::new("minute", "minutes", PhysicalDimension::Time, 60.0),
    UnitDef::new("hour", "hours", PhysicalDimension::Time, 3600.0),
    UnitDef::new("day", "days", PhysicalDimension::Time, 86_400.0),
    UnitDef::new("adim", "adimensional", PhysicalDimension::Adimensional, 1.0),
];

/// The built-in unit definitions, in declaration order.
pub fn standard_units() -> &'static [UnitDef] {
    STANDARD_UNITS
}

/// Read-only table of unit definitions, indexed by name.
#[derive(Clone, Debug)]
pub struct UnitCatalog {
    units: Vec<UnitDef>,
    by_name: HashMap<&'static str, usize>,
}

impl UnitCatalog {
    /// Builds a catalog from a list of definitions.
    ///
    /// Embedding applications extend the built-in table by chaining their own
    /// definitions onto [`standard_units`]. Names must be unique and every `k` must be
    /// finite and positive.
    pub fn new<I>(defs: I) -> Result<Self>
    where
        I: IntoIterator<Item = UnitDef>,
    {
        let mut units = Vec::new();
        let mut by_name = HashMap::new();
        for def in defs {
            def.check_factor()?;
            if by_name.insert(def.name, units.len()).is_some() {
                return Err(Error::DuplicateUnit(def.name.into()));
            }
            units.push(def);
        }
        Ok(Self { units, by_name })
    }

    pub fn get(&self, name: &str) -> Option<&UnitDef> {
        self.by_name.get(name).map(|&idx| &self.units[idx])
    }

    pub fn lookup(&self, name: &str) -> Result<&UnitDef> {
        self.get(name).ok_or_else(|| Error::UnknownUnit(name.into()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitDef> {
        self.units.iter()
    }

    /// Units of one dimension, in declaration order.
    pub fn units_of(&self, dimension: PhysicalDimension) -> impl Iterator<Item = &UnitDef> {
        self.units.iter().filter(move |u| u.dimension == dimension)
    }

    /// The canonical unit (`k == 1`) of a dimension.
    pub fn base_unit(&self, dimension: PhysicalDimension) -> Option<&UnitDef> {
        self.units_of(dimension).find(|u| u.k == 1.0)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// `value` expressed in the unit called `unit_name`.
    pub fn measure(&self, unit_name: &str, value: f64) -> Result<Measure> {
        let unit = self.lookup(unit_name)?;
        Ok(Measure::from_unit(*unit, value))
    }

    /// Compound measure from `(unit name, exponent)` pairs resolved in this catalog.
    pub fn with_units<'a, I>(&self, value: f64, units: I) -> Result<Measure>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let pairs = units
            .into_iter()
            .map(|(name, exponent)| Ok((*self.lookup(name)?, exponent)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Measure::from_parts(value, DimensionMap::from_pairs(pairs)?))
    }
}
