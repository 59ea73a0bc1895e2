use crate::convert::to_same_units;
use crate::error::{Error, Result};
use crate::measure::{Measure, Operand};
use std::ops::{Add, Div, Mul};

impl Measure {
    /// Multiplies the value, keeping the units.
    pub fn scale(&self, factor: f64) -> Measure {
        Measure::from_parts(self.value() * factor, self.units().clone())
    }

    /// Product of two measures. `other` is first aligned onto this measure's units, so
    /// `cm * mm` yields `cm^2`.
    pub fn multiply(&self, other: &Measure) -> Measure {
        let aligned = to_same_units(self, other);
        Measure::from_parts(
            self.value() * aligned.value(),
            self.units().combine(aligned.units()),
        )
    }

    /// `1 / self`: inverted value, negated exponents.
    pub fn recip(&self) -> Measure {
        Measure::from_parts(1.0 / self.value(), self.units().scaled(-1.0))
    }

    pub fn divide(&self, other: &Measure) -> Measure {
        self.multiply(&other.recip())
    }

    /// Sum of two measures of the same compound unit, expressed in this measure's units.
    ///
    /// Adding a plain number fails with [`Error::InvalidOperand`]; adding a measure whose
    /// units differ after alignment fails with [`Error::IncompatibleUnits`].
    pub fn try_add(&self, rhs: impl Into<Operand>) -> Result<Measure> {
        match rhs.into() {
            Operand::Measure(other) => self.add_measure(&other),
            Operand::Scalar(value) => Err(Error::InvalidOperand(format!(
                "cannot add bare number {value} to '{self}'"
            ))),
        }
    }

    fn add_measure(&self, other: &Measure) -> Result<Measure> {
        let aligned = to_same_units(self, other);
        if aligned.units() != self.units() {
            tracing::debug!(
                lhs = %self.units(),
                rhs = %other.units(),
                "rejecting addition of unlike units"
            );
            return Err(Error::IncompatibleUnits {
                from: other.units().to_string(),
                to: self.units().to_string(),
            });
        }
        Ok(Measure::from_parts(
            self.value() + aligned.value(),
            self.units().clone(),
        ))
    }

    /// Raises value and every exponent to `exponent`.
    ///
    /// Only defined for finite exponents when the measure has units: a NaN or infinite
    /// unit exponent never cancels out. Use [`Measure::try_pow`] for unchecked input.
    pub fn powf(&self, exponent: f64) -> Measure {
        Measure::from_parts(
            self.value().powf(exponent),
            self.units().scaled(exponent),
        )
    }

    /// Like [`Measure::powf`], but fails with [`Error::InvalidOperand`] when the exponent
    /// is itself a measure, or is not finite while the measure has units.
    pub fn try_pow(&self, exponent: impl Into<Operand>) -> Result<Measure> {
        match exponent.into() {
            Operand::Scalar(n) if !n.is_finite() && !self.is_adimensional() => {
                Err(Error::InvalidOperand(format!(
                    "cannot raise '{self}' to non-finite power {n}"
                )))
            }
            Operand::Scalar(n) => Ok(self.powf(n)),
            Operand::Measure(m) => Err(Error::InvalidOperand(format!(
                "cannot raise '{self}' to measure '{m}'"
            ))),
        }
    }
}

macro_rules! measure_binop {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait<&Measure> for &Measure {
            type Output = Measure;
            fn $method(self, rhs: &Measure) -> Measure {
                self.$inherent(rhs)
            }
        }

        impl $trait<Measure> for &Measure {
            type Output = Measure;
            fn $method(self, rhs: Measure) -> Measure {
                self.$inherent(&rhs)
            }
        }

        impl $trait<&Measure> for Measure {
            type Output = Measure;
            fn $method(self, rhs: &Measure) -> Measure {
                (&self).$inherent(rhs)
            }
        }

        impl $trait<Measure> for Measure {
            type Output = Measure;
            fn $method(self, rhs: Measure) -> Measure {
                (&self).$inherent(&rhs)
            }
        }
    };
}

measure_binop!(Mul, mul, multiply);
measure_binop!(Div, div, divide);

impl Mul<f64> for &Measure {
    type Output = Measure;
    fn mul(self, rhs: f64) -> Measure {
        self.scale(rhs)
    }
}

impl Mul<f64> for Measure {
    type Output = Measure;
    fn mul(self, rhs: f64) -> Measure {
        self.scale(rhs)
    }
}

impl Mul<&Measure> for f64 {
    type Output = Measure;
    fn mul(self, rhs: &Measure) -> Measure {
        rhs.scale(self)
    }
}

impl Mul<Measure> for f64 {
    type Output = Measure;
    fn mul(self, rhs: Measure) -> Measure {
        rhs.scale(self)
    }
}

impl Div<f64> for &Measure {
    type Output = Measure;
    fn div(self, rhs: f64) -> Measure {
        self.scale(1.0 / rhs)
    }
}

impl Div<f64> for Measure {
    type Output = Measure;
    fn div(self, rhs: f64) -> Measure {
        self.scale(1.0 / rhs)
    }
}

impl Div<&Measure> for f64 {
    type Output = Measure;
    fn div(self, rhs: &Measure) -> Measure {
        rhs.recip().scale(self)
    }
}

impl Div<Measure> for f64 {
    type Output = Measure;
    fn div(self, rhs: Measure) -> Measure {
        rhs.recip().scale(self)
    }
}

impl Add<&Measure> for &Measure {
    type Output = Result<Measure>;
    fn add(self, rhs: &Measure) -> Result<Measure> {
        self.add_measure(rhs)
    }
}

impl Add<Measure> for &Measure {
    type Output = Result<Measure>;
    fn add(self, rhs: Measure) -> Result<Measure> {
        self.add_measure(&rhs)
    }
}

impl Add<&Measure> for Measure {
    type Output = Result<Measure>;
    fn add(self, rhs: &Measure) -> Result<Measure> {
        self.add_measure(rhs)
    }
}

impl Add<Measure> for Measure {
    type Output = Result<Measure>;
    fn add(self, rhs: Measure) -> Result<Measure> {
        self.add_measure(&rhs)
    }
}
