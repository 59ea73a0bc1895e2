//! Physical quantities with compound units.
//!
//! A [`Measure`] is a value paired with a [`DimensionMap`], a product of catalog units
//! raised to exponents (`m.s^-2`). Conversions and arithmetic track dimensions and keep
//! at most one unit per [`PhysicalDimension`]:
//!
//! ```
//! use ferrum_measure::Measure;
//!
//! let distance = Measure::new("km", 3.0)?;
//! let time = Measure::new("minute", 30.0)?;
//! let speed = (&distance / &time).convert_to("m").ok();
//! assert!(speed.is_none()); // two units, so the shortcut is ambiguous
//!
//! let area = Measure::new("cm", 4.0)? * Measure::new("mm", 10.0)?;
//! assert_eq!(area.to_string(), "4.0 cm^2");
//! # Ok::<(), ferrum_measure::Error>(())
//! ```
#![forbid(unsafe_code)]

mod arithmetic;
mod catalog;
mod convert;
mod dimension;
mod error;
mod format;
mod measure;

#[cfg(feature = "serde")]
mod serialize;

use once_cell::sync::OnceCell;

pub use catalog::{standard_units, PhysicalDimension, UnitCatalog, UnitDef};
pub use convert::to_same_units;
pub use dimension::DimensionMap;
pub use error::{Error, Result};
pub use measure::{Measure, Operand};

static CATALOG: OnceCell<UnitCatalog> = OnceCell::new();

/// The process-wide unit catalog.
///
/// This is the table installed by [`init_catalog`], or the built-in units if nothing was
/// installed before first use.
pub fn catalog() -> &'static UnitCatalog {
    CATALOG.get_or_init(|| {
        let catalog = UnitCatalog::new(standard_units().iter().copied())
            .expect("built-in unit table is invalid");
        tracing::debug!(units = catalog.len(), "built standard unit catalog");
        catalog
    })
}

/// Installs `catalog` as the process-wide table used by name-based operations
/// ([`Measure::new`], [`Measure::with_units`], [`Measure::convert_to`]).
///
/// Must run before the catalog is first used; afterwards it fails with
/// [`Error::CatalogInitialized`].
///
/// ```
/// use ferrum_measure::{init_catalog, standard_units, Measure, PhysicalDimension, UnitCatalog, UnitDef};
///
/// const FOOT: UnitDef = UnitDef::new("ft", "feet", PhysicalDimension::Length, 304.8);
/// let units = standard_units().iter().copied().chain([FOOT]);
/// init_catalog(UnitCatalog::new(units)?)?;
///
/// let inches = Measure::new("ft", 1.0)?.convert_to("in")?;
/// assert!((inches.value() - 12.0).abs() < 1e-9);
/// # Ok::<(), ferrum_measure::Error>(())
/// ```
pub fn init_catalog(catalog: UnitCatalog) -> Result<()> {
    let units = catalog.len();
    CATALOG.set(catalog).map_err(|_| Error::CatalogInitialized)?;
    tracing::debug!(units, "installed unit catalog");
    Ok(())
}
