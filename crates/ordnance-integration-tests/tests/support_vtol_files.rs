//! Support VTOL scenarios driven through files on disk.
//!
//! Each test writes a vehicle block (and, where needed, a catalog and a
//! loader configuration) into its own temp directory and loads it the way
//! the CLI does.

use std::fs;
use std::path::{Path, PathBuf};

use ordnance_core::armor::ArmorType;
use ordnance_core::equipment::Catalog;
use ordnance_core::location::{Facing, Location};
use ordnance_core::movement::MovementMode;
use ordnance_core::tech::{TechBase, TechRating};
use ordnance_core::transport::TransportKind;
use ordnance_data::loader::DataLoadError;
use ordnance_data::test_utils::sample_catalog;
use ordnance_data::{
    CollaboratorError, ErrorKind, LoadError, LoadOptions, LoaderConfig, load_catalog,
    load_vehicle_file,
};

fn make_test_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "ordnance_it_{suffix}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

fn entity_error(err: DataLoadError) -> LoadError {
    match err {
        DataLoadError::Entity { source, .. } => source,
        other => panic!("expected an entity error, got {other:?}"),
    }
}

const KARNOV_TOML: &str = r#"
Name = "Karnov UR Transport"
Model = "(Standard)"
source = "TRO:3058"
type = "IS Level 2"
year = 3058
tonnage = 30
motion_type = "VTOL"
engine_type = 1
cruiseMP = 6
fuel = 1.5
armor = [20, 15, 15, 15, 2]
barrating = 8
structural_tech_rating = 3
transporters = ["troopspace:2.0", "cargobay:10.0:2", "mystery:1.0"]
history = ["Built by Kong Interstellar.", "Widely exported."]
"Front Equipment" = ["Machine Gun"]
"Right Equipment" = ["VGL"]
"Rear Equipment" = ["VGL (R)"]
"Body Equipment" = ["Cargo:SIZE:4.0 (OMNI)"]
"#;

#[test]
fn toml_vehicle_loads_fully() {
    let dir = make_test_dir("toml_full");
    let path = dir.join("karnov.toml");
    fs::write(&path, KARNOV_TOML).unwrap();

    let v = load_vehicle_file(&path, &sample_catalog(), &LoadOptions::default()).unwrap();

    assert_eq!(v.chassis, "Karnov UR Transport");
    assert_eq!(v.tech_level.base, TechBase::InnerSphere);
    assert_eq!(v.tech_level.year, Some(3058));
    assert_eq!(v.tonnage, 30.0);
    assert_eq!(v.movement_mode, MovementMode::Vtol);
    assert_eq!(v.fuel_tonnage, Some(1.5));
    assert_eq!(v.engine.rating, 40);
    assert_eq!(v.locations(), 6);
    assert_eq!(v.total_armor(), 67);
    assert_eq!(v.armor_tonnage, 3.5);
    assert_eq!(
        v.fluff.history.as_deref(),
        Some("Built by Kong Interstellar.\nWidely exported.")
    );

    // Unknown transporter kinds are skipped.
    assert_eq!(v.transports.len(), 2);
    assert_eq!(v.transports[1].kind, TransportKind::CargoBay);
    assert_eq!(v.transports[1].doors, 2);

    let right = v.equipment_at(Location::Right).next().unwrap();
    assert_eq!(right.facing, Some(Facing::FRONT_RIGHT));
    let rear = v.equipment_at(Location::Rear).next().unwrap();
    assert_eq!(rear.facing, Some(Facing::REAR));
    assert!(rear.rear_mounted);
    let cargo = v.equipment_at(Location::Body).next().unwrap();
    assert_eq!(cargo.size, Some(4.0));
    assert!(cargo.omni_pod);
    assert_eq!(cargo.facing, None);

    cleanup(&dir);
}

#[test]
fn json_turret_vehicle_with_file_catalog() {
    let dir = make_test_dir("json_turret");
    let catalog_path = dir.join("catalog.ron");
    fs::write(
        &catalog_path,
        r#"[
    (name: "ISSRM2", display_name: Some("SRM 2"), kind: weapon, tonnage: 1.0),
    (name: "ISSRM2 Ammo", display_name: Some("SRM 2 Ammo"), kind: ammo, tonnage: 1.0),
]"#,
    )
    .unwrap();
    let path = dir.join("turret.json");
    fs::write(
        &path,
        r#"{
    "Name": "Karnov UR Transport",
    "Model": "(Turret)",
    "tonnage": 30.0,
    "motion_type": "VTOL",
    "cruiseMP": 6,
    "armor": [20, 15, 15, 15, 2, 12],
    "barrating": 8,
    "structural_tech_rating": 3,
    "engine_tech_rating": 4,
    "Turret Equipment": ["SRM 2", "SRM 2 Ammo"]
}"#,
    )
    .unwrap();

    let catalog = load_catalog(&catalog_path).unwrap();
    let v = load_vehicle_file(&path, &catalog, &LoadOptions::default()).unwrap();

    assert!(!v.has_no_turret);
    assert_eq!(v.locations(), 7);
    assert_eq!(v.slot(Location::Turret).unwrap().armor, 12);
    assert_eq!(v.slot(Location::Turret).unwrap().internal, Some(3));
    assert_eq!(v.equipment_at(Location::Turret).count(), 2);
    assert_eq!(v.engine_tech_rating(), TechRating::E);
    assert_eq!(v.armor_tech_rating(), TechRating::D);
    assert_eq!(v.tech_advancement.rating, TechRating::E);

    cleanup(&dir);
}

#[test]
fn ron_patchwork_vehicle() {
    let dir = make_test_dir("ron_patchwork");
    let path = dir.join("patchwork.ron");
    fs::write(
        &path,
        r#"{
    "Name": "Patchwork Rotor",
    "tonnage": 20.0,
    "motion_type": "VTOL",
    "cruiseMP": 8,
    "armor": [10, 8, 8, 6, 2],
    "armor_type": 7,
    "structural_tech_rating": 4,
    "Front_armor_type": 1,
    "Front_barrating": 7,
    "Right_armor_type": 0,
    "Right_barrating": 6,
    "Left_armor_type": 0,
    "Left_barrating": 6,
    "Rear_armor_type": 5,
    "Rear_barrating": 5,
    "Rotor_armor_type": 0,
    "Rotor_barrating": 4,
}"#,
    )
    .unwrap();

    let v = load_vehicle_file(&path, &Catalog::new(), &LoadOptions::default()).unwrap();
    assert!(v.patchwork_armor);
    assert_eq!(v.armor_type, ArmorType::STANDARD);
    assert_eq!(
        v.slot(Location::Front).unwrap().armor_type,
        ArmorType::FERRO_FIBROUS
    );
    assert_eq!(v.slot(Location::Rear).unwrap().bar_rating, Some(5));
    assert_eq!(v.slot(Location::Rotor).unwrap().bar_rating, Some(4));
    // 8 * 20 - 95 = 65
    assert_eq!(v.engine.rating, 65);

    cleanup(&dir);
}

#[test]
fn missing_fields_name_the_field() {
    let dir = make_test_dir("missing_fields");
    let cases = [
        ("no_name.json", r#"{"tonnage": 10.0}"#, "Name"),
        (
            "no_cruise.json",
            r#"{"Name": "X", "tonnage": 10.0, "motion_type": "VTOL"}"#,
            "cruiseMP",
        ),
        (
            "no_armor.json",
            r#"{"Name": "X", "tonnage": 10.0, "motion_type": "VTOL", "cruiseMP": 5}"#,
            "armor",
        ),
    ];
    for (file, content, field) in cases {
        let path = dir.join(file);
        fs::write(&path, content).unwrap();
        let err = entity_error(
            load_vehicle_file(&path, &Catalog::new(), &LoadOptions::default()).unwrap_err(),
        );
        assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
        assert_eq!(err.to_string(), format!("could not find {field} block"));
    }
    cleanup(&dir);
}

#[test]
fn bad_armor_length_from_file() {
    let dir = make_test_dir("bad_armor");
    let path = dir.join("bad.toml");
    fs::write(
        &path,
        r#"
Name = "X"
tonnage = 10.0
motion_type = "VTOL"
cruiseMP = 5
armor = [1, 2, 3, 4]
"#,
    )
    .unwrap();
    let err = entity_error(
        load_vehicle_file(&path, &Catalog::new(), &LoadOptions::default()).unwrap_err(),
    );
    assert!(matches!(err, LoadError::InvalidArmorLength { len: 4 }));
    cleanup(&dir);
}

#[test]
fn config_drives_strict_equipment() {
    let dir = make_test_dir("config_strict");
    fs::write(
        dir.join("catalog.json"),
        r#"[{"name": "ISMachineGun", "display_name": "Machine Gun", "kind": "weapon"}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("ordnance.ron"),
        r#"(catalog: Some("catalog.json"), strict_equipment: true)"#,
    )
    .unwrap();
    let path = dir.join("karnov.toml");
    fs::write(&path, KARNOV_TOML).unwrap();

    let config = LoaderConfig::discover(&dir).unwrap();
    let catalog = load_catalog(config.catalog.as_deref().unwrap()).unwrap();
    let err = entity_error(load_vehicle_file(&path, &catalog, &config.load_options()).unwrap_err());
    assert!(matches!(
        err,
        LoadError::Collaborator(CollaboratorError::UnknownEquipment { location: Location::Right, .. })
    ));
    assert_eq!(err.kind(), ErrorKind::ExternalCollaboratorFailure);

    // The same file loads leniently, recording what it could not resolve.
    let v = load_vehicle_file(&path, &catalog, &LoadOptions::default()).unwrap();
    assert_eq!(v.failed_equipment, ["VGL", "VGL", "Cargo"]);

    cleanup(&dir);
}
