use crate::dimension::DimensionMap;
use crate::measure::Measure;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Serialized as `{"cm": 2.0, "s": -1.0}`.
impl Serialize for DimensionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (unit, exponent) in self.iter() {
            map.serialize_entry(unit.name(), &exponent)?;
        }
        map.end()
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Measure", 2)?;
        s.serialize_field("value", &self.value())?;
        s.serialize_field("units", self.units())?;
        s.end()
    }
}
