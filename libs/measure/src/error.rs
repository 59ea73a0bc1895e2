use crate::catalog::PhysicalDimension;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("incompatible units: '{from}' vs '{to}'")]
    IncompatibleUnits { from: String, to: String },

    #[error("ambiguous conversion: measure in '{0}' does not have exactly one unit")]
    AmbiguousConversion(String),

    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    #[error("unit '{0}' is not part of the measure")]
    UnitNotInMeasure(String),

    #[error("units '{first}' and '{second}' both measure {dimension}")]
    ConflictingUnits {
        dimension: PhysicalDimension,
        first: String,
        second: String,
    },

    #[error("unit '{0}' has a zero exponent")]
    ZeroExponent(String),

    #[error("unit '{name}' has non-finite exponent {exponent}")]
    InvalidExponent { name: String, exponent: f64 },

    #[error("unit catalog is already initialized")]
    CatalogInitialized,

    #[error("duplicate unit definition '{0}'")]
    DuplicateUnit(String),

    #[error("unit '{name}' has invalid scale factor {k}")]
    InvalidFactor { name: String, k: f64 },
}
