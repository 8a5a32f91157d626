use crate::support::teg::{Catalog, ModuleSpec};

use super::SystemConfig;

/// Returns a technology from the standard catalog.
pub(crate) fn catalog_module(key: &str) -> ModuleSpec {
    Catalog::standard()
        .get(key)
        .expect("standard catalog entry")
        .clone()
}

/// 1620 Bi₂Te₃ modules at the reference operating conditions.
pub(crate) fn baseline_config() -> SystemConfig {
    SystemConfig::new(catalog_module("marlow"), 1620)
}
