//! Equipment types, the catalog seam and mounted equipment.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use std::collections::HashMap;

use crate::location::{Facing, Location};

new_key_type! {
    /// Identifies a piece of mounted equipment on a vehicle.
    pub struct MountId;
}

// ---------------------------------------------------------------------------
// Equipment types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    Weapon,
    Ammo,
    /// Vehicular grenade launcher. Gets a default facing when mounted.
    Vgl,
    Misc,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentType {
    pub internal_name: String,
    pub name: String,
    pub kind: EquipmentKind,
    pub tonnage: f64,
    /// Accepts a `:SIZE:` suffix (cargo space, communications gear, ...).
    pub variable_size: bool,
}

impl EquipmentType {
    pub fn is_vgl(&self) -> bool {
        self.kind == EquipmentKind::Vgl
    }
}

/// Name lookup for equipment referenced from data files.
pub trait EquipmentCatalog {
    fn lookup(&self, name: &str) -> Option<&EquipmentType>;
}

// ---------------------------------------------------------------------------
// In-memory catalog
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate equipment name: {0}")]
    DuplicateName(String),
}

/// In-memory catalog keyed by internal name and any aliases.
#[derive(Debug, Default)]
pub struct Catalog {
    types: Vec<EquipmentType>,
    name_to_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an equipment type under its internal name, display name and
    /// `aliases`. Fails without registering anything if any name is taken.
    pub fn register(
        &mut self,
        equipment: EquipmentType,
        aliases: &[String],
    ) -> Result<(), CatalogError> {
        let mut names: Vec<&str> = vec![equipment.internal_name.as_str()];
        if equipment.name != equipment.internal_name {
            names.push(equipment.name.as_str());
        }
        names.extend(aliases.iter().map(String::as_str));

        if let Some(taken) = names.iter().find(|n| self.name_to_index.contains_key(**n)) {
            return Err(CatalogError::DuplicateName((*taken).to_string()));
        }

        let index = self.types.len();
        let names: Vec<String> = names.into_iter().map(str::to_string).collect();
        self.types.push(equipment);
        for name in names {
            self.name_to_index.insert(name, index);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EquipmentType> {
        self.types.iter()
    }
}

impl EquipmentCatalog for Catalog {
    fn lookup(&self, name: &str) -> Option<&EquipmentType> {
        self.name_to_index
            .get(name)
            .and_then(|&index| self.types.get(index))
    }
}

// ---------------------------------------------------------------------------
// Mounted equipment
// ---------------------------------------------------------------------------

/// A piece of equipment attached to a vehicle location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mounted {
    pub equipment: EquipmentType,
    pub location: Location,
    pub rear_mounted: bool,
    /// Pod-mounted on an omni chassis.
    pub omni_pod: bool,
    pub size: Option<f64>,
    /// Only set for mounts with a firing arc chosen at construction (VGLs).
    pub facing: Option<Facing>,
}

impl Mounted {
    pub fn new(equipment: EquipmentType, location: Location) -> Self {
        Self {
            equipment,
            location,
            rear_mounted: false,
            omni_pod: false,
            size: None,
            facing: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vgl() -> EquipmentType {
        EquipmentType {
            internal_name: "ISVehicularGrenadeLauncher".to_string(),
            name: "Vehicular Grenade Launcher".to_string(),
            kind: EquipmentKind::Vgl,
            tonnage: 0.5,
            variable_size: false,
        }
    }

    #[test]
    fn lookup_by_internal_and_display_name() {
        let mut catalog = Catalog::new();
        catalog.register(vgl(), &[]).unwrap();

        assert!(catalog.lookup("ISVehicularGrenadeLauncher").is_some());
        assert!(catalog.lookup("Vehicular Grenade Launcher").is_some());
        assert!(catalog.lookup("Machine Gun").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn lookup_by_alias() {
        let mut catalog = Catalog::new();
        catalog.register(vgl(), &["VGL".to_string()]).unwrap();
        assert!(catalog.lookup("VGL").unwrap().is_vgl());
    }

    #[test]
    fn duplicate_name_rejected_atomically() {
        let mut catalog = Catalog::new();
        catalog.register(vgl(), &[]).unwrap();

        let mut other = vgl();
        other.internal_name = "Other".to_string();
        let result = catalog.register(other, &[]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateName(ref n)) if n == "Vehicular Grenade Launcher"
        ));
        assert!(catalog.lookup("Other").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn new_mount_has_no_facing() {
        let m = Mounted::new(vgl(), Location::Front);
        assert_eq!(m.facing, None);
        assert!(!m.rear_mounted);
    }
}
