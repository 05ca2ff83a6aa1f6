//! Shared fixtures for unit and integration tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use ordnance_core::equipment::{Catalog, EquipmentKind, EquipmentType};

use crate::block::AttributedBlock;

// ===========================================================================
// Catalog
// ===========================================================================

fn equipment(internal: &str, name: &str, kind: EquipmentKind, tonnage: f64) -> EquipmentType {
    EquipmentType {
        internal_name: internal.to_string(),
        name: name.to_string(),
        kind,
        tonnage,
        variable_size: false,
    }
}

/// A small catalog: machine gun, SRM-2 and its ammo, a VGL, searchlight and
/// variable-size cargo.
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    let entries = [
        (
            equipment("ISMachineGun", "Machine Gun", EquipmentKind::Weapon, 0.5),
            vec!["IS Machine Gun".to_string()],
        ),
        (
            equipment("ISSRM2", "SRM 2", EquipmentKind::Weapon, 1.0),
            vec![],
        ),
        (
            equipment("ISSRM2 Ammo", "SRM 2 Ammo", EquipmentKind::Ammo, 1.0),
            vec![],
        ),
        (
            equipment(
                "ISVehicularGrenadeLauncher",
                "Vehicular Grenade Launcher",
                EquipmentKind::Vgl,
                0.5,
            ),
            vec!["VGL".to_string()],
        ),
        (
            equipment("Searchlight", "Searchlight", EquipmentKind::Misc, 0.5),
            vec![],
        ),
        (
            EquipmentType {
                variable_size: true,
                ..equipment("Cargo", "Cargo", EquipmentKind::Misc, 1.0)
            },
            vec![],
        ),
    ];
    for (equipment, aliases) in entries {
        catalog
            .register(equipment, &aliases)
            .expect("sample catalog names are unique");
    }
    catalog
}

// ===========================================================================
// Blocks
// ===========================================================================

/// A complete, valid turretless support VTOL block (armor length 5).
pub fn karnov_block() -> AttributedBlock {
    AttributedBlock::new()
        .with_strings("Name", ["Karnov UR Transport"])
        .with_strings("Model", ["(Standard)"])
        .with_strings("source", ["TRO:3058"])
        .with_strings("type", ["IS Level 2"])
        .with_ints("year", [3058])
        .with_reals("tonnage", [30.0])
        .with_strings("motion_type", ["VTOL"])
        .with_ints("engine_type", [1])
        .with_ints("cruiseMP", [6])
        .with_ints("armor", [20, 15, 15, 15, 2])
        .with_ints("barrating", [8])
        .with_ints("structural_tech_rating", [3])
        .with_strings("Front Equipment", ["Machine Gun"])
        .with_strings("Body Equipment", ["Cargo:SIZE:4.0"])
}

/// Turreted variant of [`karnov_block`] (armor length 6).
pub fn karnov_turret_block() -> AttributedBlock {
    karnov_block()
        .with_strings("Model", ["(Turret)"])
        .with_ints("armor", [20, 15, 15, 15, 2, 12])
        .with_strings("Turret Equipment", ["SRM 2", "SRM 2 Ammo"])
}

/// Minimal valid block: only required fields.
pub fn minimal_block() -> AttributedBlock {
    AttributedBlock::new()
        .with_strings("Name", ["Test Rotor"])
        .with_reals("tonnage", [50.0])
        .with_strings("motion_type", ["Tracked"])
        .with_ints("cruiseMP", [4])
        .with_ints("armor", [20, 15, 15, 15, 15])
        .with_ints("barrating", [10])
        .with_ints("structural_tech_rating", [3])
}

/// Turn `block` into a patchwork-armor block with per-location fields for
/// every armored location of a vehicle with `locations` slots.
pub fn with_patchwork(block: AttributedBlock, locations: usize) -> AttributedBlock {
    let mut block = block.with_ints("armor_type", [7]);
    block.remove("barrating");
    for loc in ordnance_core::location::Location::ALL
        .iter()
        .take(locations)
        .skip(1)
    {
        block = block
            .with_ints(&format!("{loc}_armor_type"), [1])
            .with_ints(&format!("{loc}_barrating"), [6]);
    }
    block
}
