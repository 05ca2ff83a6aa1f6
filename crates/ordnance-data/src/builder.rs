//! Support-VTOL loader: builds a [`Vehicle`] from an [`AttributedBlock`].
//!
//! Stages run in a fixed order, each reading fields, applying defaults and
//! derivations, and writing into a vehicle that stays local to
//! [`SupportVtolLoader::load`] until every stage has succeeded:
//!
//! 1. Identity -- `Name`, `Model`, tech level, fluff, manual BV, `source`.
//! 2. Mass -- `tonnage`.
//! 3. Locomotion -- `motion_type`.
//! 4. Transports -- `transporters`.
//! 5. Power plant -- `engine_type`, `fuel`, `cruiseMP`.
//! 6. Structure -- `internal_type`.
//! 7. Armor -- `armor` (5 or 6 values, body slot prepended).
//! 8. Armor typing -- `armor_type`, `armor_tech`, `barrating` or the
//!    per-location patchwork fields.
//! 9. Tech ratings -- `structural_tech_rating`, `armor_tech_rating`,
//!    `engine_tech_rating`.
//! 10. Internal structure and tech advancement.
//! 11. Equipment -- `<Location> Equipment`.
//! 12. Flags -- `omni`.
//! 13. Armor tonnage.
//!
//! The first failing stage aborts the load.

use ordnance_core::armor::{ArmorType, StructureType};
use ordnance_core::engine::{Engine, EngineFlag, EngineFlags, EngineType};
use ordnance_core::equipment::EquipmentCatalog;
use ordnance_core::family::{SupportVtol, VehicleFamily};
use ordnance_core::location::Location;
use ordnance_core::movement::MovementMode;
use ordnance_core::tech::TechRating;
use ordnance_core::vehicle::Vehicle;
use tracing::{debug, warn};

use crate::block::AttributedBlock;
use crate::error::LoadError;
use crate::shared::{self, EquipmentContext, to_i32};

/// Locations whose equipment is always loaded, in load order.
const EQUIPMENT_LOCATIONS: [Location; 6] = [
    Location::Front,
    Location::Right,
    Location::Left,
    Location::Rear,
    Location::Body,
    Location::Rotor,
];

/// Knobs that change how strictly a block is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fail on equipment names missing from the catalog.
    pub strict_equipment: bool,
}

/// Engine rating for a ground vehicle: `cruise_mp * floor(tonnage)` less the
/// suspension factor, clamped at zero and rounded up to a multiple of 5.
pub fn derive_engine_rating(cruise_mp: i64, tonnage: f64, suspension_factor: i32) -> u32 {
    let raw = cruise_mp
        .saturating_mul(tonnage.floor() as i64)
        .saturating_sub(i64::from(suspension_factor))
        .max(0);
    let rating = match raw % 5 {
        0 => raw,
        rem => raw.saturating_add(5 - rem),
    };
    // u32::MAX is itself a multiple of 5.
    u32::try_from(rating).unwrap_or(u32::MAX)
}

/// Builds support-class rotorcraft from attributed data blocks.
pub struct SupportVtolLoader<'a> {
    block: &'a AttributedBlock,
    catalog: &'a dyn EquipmentCatalog,
    family: &'a dyn VehicleFamily,
    options: LoadOptions,
}

impl<'a> SupportVtolLoader<'a> {
    pub fn new(block: &'a AttributedBlock, catalog: &'a dyn EquipmentCatalog) -> Self {
        Self {
            block,
            catalog,
            family: &SupportVtol,
            options: LoadOptions::default(),
        }
    }

    /// Replace the family rules (default VGL facing).
    pub fn with_family(mut self, family: &'a dyn VehicleFamily) -> Self {
        self.family = family;
        self
    }

    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the vehicle. Either every stage succeeds and the vehicle is
    /// returned, or the first failure is returned and the partial vehicle
    /// is dropped.
    pub fn load(&self) -> Result<Vehicle, LoadError> {
        let mut v = Vehicle::new();

        self.resolve_identity(&mut v)?;
        self.resolve_mass(&mut v)?;
        self.resolve_locomotion(&mut v)?;
        shared::add_transports(self.block, &mut v)?;
        self.resolve_power_plant(&mut v)?;
        self.resolve_structure(&mut v)?;
        self.resolve_armor(&mut v)?;
        self.resolve_armor_typing(&mut v)?;
        self.resolve_tech_ratings(&mut v)?;

        v.auto_set_internal();
        v.recalculate_tech_advancement();

        self.load_all_equipment(&mut v)?;

        if self.block.exists("omni") {
            v.omni = true;
        }
        v.armor_tonnage = v.armor_weight();

        debug!(
            family = self.family.name(),
            chassis = %v.chassis,
            model = %v.model,
            armor_tonnage = v.armor_tonnage,
            equipment = v.equipment_count(),
            failed = v.failed_equipment.len(),
            "vehicle loaded"
        );
        Ok(v)
    }

    // -----------------------------------------------------------------------
    // Field helpers
    // -----------------------------------------------------------------------

    fn require_string(&self, field: &str) -> Result<&'a str, LoadError> {
        self.block
            .first_string(field)?
            .ok_or_else(|| missing(field))
    }

    fn require_int(&self, field: &str) -> Result<i64, LoadError> {
        self.block.first_int(field)?.ok_or_else(|| missing(field))
    }

    fn require_i32(&self, field: &str) -> Result<i32, LoadError> {
        to_i32(field, self.require_int(field)?)
    }

    fn optional_i32(&self, field: &str) -> Result<Option<i32>, LoadError> {
        self.block
            .first_int(field)?
            .map(|value| to_i32(field, value))
            .transpose()
    }

    fn require_patchwork(&self, location: Location, field: String) -> Result<i32, LoadError> {
        match self.block.first_int(&field)? {
            Some(value) => to_i32(&field, value),
            None => Err(LoadError::MissingPatchworkField { location, field }),
        }
    }

    // -----------------------------------------------------------------------
    // Stages
    // -----------------------------------------------------------------------

    fn resolve_identity(&self, v: &mut Vehicle) -> Result<(), LoadError> {
        let name = self.require_string("Name")?;
        if name.trim().is_empty() {
            return Err(missing("Name"));
        }
        v.chassis = name.to_string();
        v.model = self
            .block
            .first_string("Model")?
            .unwrap_or_default()
            .to_string();

        shared::set_tech_level(self.block, v)?;
        shared::set_fluff(self.block, v)?;
        shared::check_manual_bv(self.block, v)?;

        v.source = self.block.first_string("source")?.map(str::to_string);
        debug!(chassis = %v.chassis, model = %v.model, "resolved identity");
        Ok(())
    }

    fn resolve_mass(&self, v: &mut Vehicle) -> Result<(), LoadError> {
        let tonnage = self
            .block
            .first_real("tonnage")?
            .ok_or_else(|| missing("tonnage"))?;
        if !tonnage.is_finite() || tonnage <= 0.0 {
            return Err(LoadError::InvalidTonnage { value: tonnage });
        }
        v.tonnage = tonnage;
        Ok(())
    }

    fn resolve_locomotion(&self, v: &mut Vehicle) -> Result<(), LoadError> {
        let motion = self.require_string("motion_type")?;
        let mode = MovementMode::from_name(motion);
        if mode == MovementMode::None {
            return Err(LoadError::InvalidMovementType {
                value: motion.to_string(),
            });
        }
        v.movement_mode = mode;
        Ok(())
    }

    fn resolve_power_plant(&self, v: &mut Vehicle) -> Result<(), LoadError> {
        let code = self
            .block
            .first_int("engine_type")?
            .unwrap_or(EngineType::FUSION_CODE);
        let engine_type =
            EngineType::from_file_code(code).ok_or(LoadError::UnknownEngineCode { code })?;

        if let Some(fuel) = self.block.first_real("fuel")? {
            v.fuel_tonnage = Some(fuel);
        }

        let cruise_mp = self.require_int("cruiseMP")?;
        let rating = derive_engine_rating(cruise_mp, v.tonnage, v.suspension_factor());
        let flags: EngineFlags = [EngineFlag::GroundVehicle, EngineFlag::SupportVehicle]
            .into_iter()
            .collect();
        v.engine = Engine::new(rating, engine_type, flags);
        v.original_walk_mp = to_i32("cruiseMP", cruise_mp)?;

        debug!(
            rating,
            engine = engine_type.name(),
            cruise_mp,
            suspension = v.suspension_factor(),
            "built power plant"
        );
        Ok(())
    }

    fn resolve_structure(&self, v: &mut Vehicle) -> Result<(), LoadError> {
        v.structure_type = self
            .optional_i32("internal_type")?
            .map_or(StructureType::STANDARD, StructureType);
        Ok(())
    }

    fn resolve_armor(&self, v: &mut Vehicle) -> Result<(), LoadError> {
        if !self.block.exists("armor") {
            return Err(missing("armor"));
        }
        let armor = self.block.int_values("armor")?;
        if armor.len() != 5 && armor.len() != 6 {
            return Err(LoadError::InvalidArmorLength { len: armor.len() });
        }
        v.has_no_turret = armor.len() == 5;
        v.has_no_dual_turret = true;

        // Slot 0 is the body, which data files never armor.
        v.initialize_armor(0, Location::Body.index());
        for (offset, &points) in armor.iter().enumerate() {
            v.initialize_armor(to_i32("armor", points)?, offset + 1);
        }
        Ok(())
    }

    fn resolve_armor_typing(&self, v: &mut Vehicle) -> Result<(), LoadError> {
        let patchwork = match self.optional_i32("armor_type")? {
            Some(code) if ArmorType(code).is_patchwork() => true,
            Some(code) => {
                v.set_armor_type(ArmorType(code));
                false
            }
            None => {
                v.set_armor_type(ArmorType::STANDARD);
                false
            }
        };
        v.patchwork_armor = patchwork;

        if !patchwork {
            if let Some(level) = self.optional_i32("armor_tech")? {
                v.set_armor_tech_level(level);
            }
            let bar = self.require_i32("barrating")?;
            v.set_bar_rating(bar);
            return Ok(());
        }

        for location in Location::ALL.into_iter().take(v.locations()).skip(1) {
            let armor_type =
                self.require_patchwork(location, format!("{location}_armor_type"))?;
            let bar = self.require_patchwork(location, format!("{location}_barrating"))?;
            v.set_armor_type_at(location, ArmorType(armor_type));
            // The format has no per-location armor tech field; the type
            // code doubles as the tech level.
            v.set_armor_tech_level_at(location, armor_type);
            v.set_bar_rating_at(location, bar);
        }
        Ok(())
    }

    fn resolve_tech_ratings(&self, v: &mut Vehicle) -> Result<(), LoadError> {
        v.structural_tech_rating = TechRating(self.require_i32("structural_tech_rating")?);
        if let Some(rating) = self.optional_i32("armor_tech_rating")? {
            v.set_armor_tech_rating(TechRating(rating));
        }
        if let Some(rating) = self.optional_i32("engine_tech_rating")? {
            v.set_engine_tech_rating(TechRating(rating));
        }
        Ok(())
    }

    fn load_all_equipment(&self, v: &mut Vehicle) -> Result<(), LoadError> {
        let ctx = EquipmentContext {
            catalog: self.catalog,
            family: self.family,
            strict: self.options.strict_equipment,
        };
        for location in EQUIPMENT_LOCATIONS {
            shared::load_equipment(self.block, v, ctx, location)?;
        }
        if !v.has_no_turret {
            shared::load_equipment(self.block, v, ctx, Location::Turret)?;
        } else if self.block.exists("Turret Equipment") {
            warn!(chassis = %v.chassis, "ignoring turret equipment on a turretless vehicle");
        }
        Ok(())
    }
}

fn missing(field: &str) -> LoadError {
    LoadError::MissingBlock {
        field: field.to_string(),
    }
}

/// Build a support VTOL with the default family rules and options.
pub fn load_support_vtol(
    block: &AttributedBlock,
    catalog: &dyn EquipmentCatalog,
) -> Result<Vehicle, LoadError> {
    SupportVtolLoader::new(block, catalog).load()
}
