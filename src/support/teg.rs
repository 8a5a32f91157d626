//! Thermoelectric module data and electrical behavior.
//!
//! - [`ModuleSpec`]: Immutable datasheet values for one module technology.
//! - [`operating_point`]: Maximum-power-point output for a face temperature difference.
//! - [`Catalog`]: Named module technologies, looked up by key.

mod catalog;
mod electrical;
mod module_spec;

pub use catalog::{Catalog, CatalogError};
pub use electrical::{OperatingPoint, operating_point};
pub use module_spec::{ModuleSpec, ModuleSpecError};
