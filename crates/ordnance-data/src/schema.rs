//! Serde data file structs for equipment catalogs.
//!
//! Deserialized from RON, JSON, or TOML and registered into an in-memory
//! [`ordnance_core::equipment::Catalog`] by the loader.

use ordnance_core::equipment::{EquipmentKind, EquipmentType};
use serde::Deserialize;

// ===========================================================================
// Equipment
// ===========================================================================

/// An equipment type definition in a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentData {
    /// Internal lookup name.
    pub name: String,
    /// Display name; defaults to `name`.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Extra names data files may use to refer to this equipment.
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default = "default_kind")]
    pub kind: EquipmentKind,
    #[serde(default)]
    pub tonnage: f64,
    #[serde(default)]
    pub variable_size: bool,
}

fn default_kind() -> EquipmentKind {
    EquipmentKind::Misc
}

impl EquipmentData {
    pub fn into_equipment(self) -> (EquipmentType, Vec<String>) {
        let display = self.display_name.unwrap_or_else(|| self.name.clone());
        let equipment = EquipmentType {
            internal_name: self.name,
            name: display,
            kind: self.kind,
            tonnage: self.tonnage,
            variable_size: self.variable_size,
        };
        (equipment, self.aliases)
    }
}

// ===========================================================================
// TOML wrapper
// ===========================================================================

/// TOML has no top-level arrays, so catalogs are written as
/// `[[equipment]]` tables.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlEquipment {
    pub equipment: Vec<EquipmentData>,
}
