use crate::catalog::{PhysicalDimension, UnitDef};
use crate::dimension::DimensionMap;
use crate::measure::Measure;
use std::fmt;

impl fmt::Display for PhysicalDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders `cm^2.s^-1`, in unit-name order; `1` when empty.
impl fmt::Display for DimensionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("1");
        }
        for (i, (unit, exponent)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(unit.name())?;
            if exponent != 1.0 {
                write!(f, "^{exponent}")?;
            }
        }
        Ok(())
    }
}

/// Renders `<value> <units>`, e.g. `1.0 cm` or `9.8 m.s^-2`. Adimensional measures
/// render the value alone. A precision (`{:.2}`) applies to the value.
impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.value())?,
            None => write!(f, "{:?}", self.value())?,
        }
        if !self.is_adimensional() {
            write!(f, " {}", self.units())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Measure;

    #[test]
    fn integral_exponents_render_without_fraction() {
        let m = Measure::with_units(9.8, [("m", 1.0), ("s", -2.0)]).unwrap();
        assert_eq!(m.to_string(), "9.8 m.s^-2");
    }

    #[test]
    fn fractional_exponents() {
        let m = Measure::with_units(3.0, [("cm", 0.5)]).unwrap();
        assert_eq!(m.to_string(), "3.0 cm^0.5");
    }

    #[test]
    fn terms_sorted_by_name() {
        let m = Measure::with_units(2.0, [("s", -1.0), ("kg", 1.0), ("m", 2.0)]).unwrap();
        assert_eq!(m.to_string(), "2.0 kg.m^2.s^-1");
    }

    #[test]
    fn adimensional_has_no_suffix() {
        assert_eq!(Measure::adimensional(0.5).to_string(), "0.5");
        assert_eq!(Measure::adimensional(0.5).units().to_string(), "1");
    }

    #[test]
    fn precision_applies_to_value() {
        let m = Measure::new("km", 1.0 / 3.0).unwrap();
        assert_eq!(format!("{m:.3}"), "0.333 km");
    }
}
