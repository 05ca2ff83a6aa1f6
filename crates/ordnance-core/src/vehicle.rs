//! The vehicle entity a loader populates.
//!
//! Fields are public so loaders can assign them directly; the setters here
//! exist where one assignment fans out to several locations or where an
//! invariant has to be checked (mounting equipment).

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::armor::{ArmorType, StructureType, support_armor_tons_per_point};
use crate::engine::Engine;
use crate::equipment::{MountId, Mounted};
use crate::location::Location;
use crate::movement::MovementMode;
use crate::tech::{TechAdvancement, TechLevel, TechRating};
use crate::transport::TransportBay;

// ---------------------------------------------------------------------------
// Supporting records
// ---------------------------------------------------------------------------

/// Armor and structure state of one location slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationState {
    pub armor: i32,
    /// `None` for locations without internal structure (the body slot).
    pub internal: Option<i32>,
    pub armor_type: ArmorType,
    pub armor_tech_level: Option<i32>,
    pub bar_rating: Option<i32>,
}

/// Descriptive text carried along with a design.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fluff {
    pub overview: Option<String>,
    pub capabilities: Option<String>,
    pub deployment: Option<String>,
    pub history: Option<String>,
    pub manufacturer: Option<String>,
    pub primary_factory: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("{equipment} cannot be mounted in {location}: location not present on this chassis")]
    MissingLocation {
        equipment: String,
        location: Location,
    },
    #[error("{equipment} does not accept a size")]
    NotVariableSize { equipment: String },
}

// ---------------------------------------------------------------------------
// Vehicle
// ---------------------------------------------------------------------------

/// A vehicle configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vehicle {
    // Identity
    pub chassis: String,
    pub model: String,
    pub source: Option<String>,
    pub tech_level: TechLevel,
    pub fluff: Fluff,
    pub manual_bv: Option<i32>,

    // Mass and locomotion
    pub tonnage: f64,
    pub movement_mode: MovementMode,
    pub original_walk_mp: i32,
    pub transports: Vec<TransportBay>,

    // Power plant
    pub engine: Engine,
    pub fuel_tonnage: Option<f64>,

    // Structure and armor
    pub structure_type: StructureType,
    /// Whole-vehicle armor type. Left at its default for patchwork armor.
    pub armor_type: ArmorType,
    pub patchwork_armor: bool,
    pub has_no_turret: bool,
    pub has_no_dual_turret: bool,
    slots: Vec<LocationState>,
    pub armor_tonnage: f64,

    // Tech ratings
    pub structural_tech_rating: TechRating,
    armor_tech_rating: Option<TechRating>,
    engine_tech_rating: Option<TechRating>,
    pub tech_advancement: TechAdvancement,

    // Equipment
    equipment: SlotMap<MountId, Mounted>,
    pub failed_equipment: Vec<String>,
    pub omni: bool,
}

impl Vehicle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of location slots: body through rotor, plus the turret when
    /// present.
    pub fn locations(&self) -> usize {
        if self.has_no_turret {
            Location::Turret.index()
        } else {
            Location::ALL.len()
        }
    }

    pub fn has_location(&self, location: Location) -> bool {
        location.index() < self.locations()
    }

    // -- Armor -------------------------------------------------------------

    /// Set the armor points of slot `index`, growing the slot table as needed.
    pub fn initialize_armor(&mut self, points: i32, index: usize) {
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, LocationState::default);
        }
        self.slots[index].armor = points;
    }

    pub fn armor_slots(&self) -> &[LocationState] {
        &self.slots
    }

    pub fn slot(&self, location: Location) -> Option<&LocationState> {
        self.slots.get(location.index())
    }

    /// Total armor points over all slots.
    pub fn total_armor(&self) -> i32 {
        self.slots.iter().map(|s| s.armor).sum()
    }

    /// Set a uniform armor type for the vehicle and every slot.
    pub fn set_armor_type(&mut self, armor_type: ArmorType) {
        self.armor_type = armor_type;
        for slot in &mut self.slots {
            slot.armor_type = armor_type;
        }
    }

    pub fn set_armor_type_at(&mut self, location: Location, armor_type: ArmorType) {
        if let Some(slot) = self.slots.get_mut(location.index()) {
            slot.armor_type = armor_type;
        }
    }

    pub fn set_armor_tech_level(&mut self, level: i32) {
        for slot in &mut self.slots {
            slot.armor_tech_level = Some(level);
        }
    }

    pub fn set_armor_tech_level_at(&mut self, location: Location, level: i32) {
        if let Some(slot) = self.slots.get_mut(location.index()) {
            slot.armor_tech_level = Some(level);
        }
    }

    pub fn set_bar_rating(&mut self, bar: i32) {
        for slot in &mut self.slots {
            slot.bar_rating = Some(bar);
        }
    }

    pub fn set_bar_rating_at(&mut self, location: Location, bar: i32) {
        if let Some(slot) = self.slots.get_mut(location.index()) {
            slot.bar_rating = Some(bar);
        }
    }

    // -- Tech ratings ------------------------------------------------------

    pub fn set_armor_tech_rating(&mut self, rating: TechRating) {
        self.armor_tech_rating = Some(rating);
    }

    pub fn set_engine_tech_rating(&mut self, rating: TechRating) {
        self.engine_tech_rating = Some(rating);
    }

    /// Armor tech rating, falling back to the structural rating when unset.
    pub fn armor_tech_rating(&self) -> TechRating {
        self.armor_tech_rating
            .unwrap_or(self.structural_tech_rating)
    }

    /// Engine tech rating, falling back to the structural rating when unset.
    pub fn engine_tech_rating(&self) -> TechRating {
        self.engine_tech_rating
            .unwrap_or(self.structural_tech_rating)
    }

    /// Whether the armor tech rating was set explicitly.
    pub fn has_explicit_armor_tech_rating(&self) -> bool {
        self.armor_tech_rating.is_some()
    }

    pub fn has_explicit_engine_tech_rating(&self) -> bool {
        self.engine_tech_rating.is_some()
    }

    // -- Derivations -------------------------------------------------------

    pub fn suspension_factor(&self) -> i32 {
        self.movement_mode.suspension_factor(self.tonnage)
    }

    /// Set internal structure points on every slot from tonnage. The body
    /// slot carries none.
    pub fn auto_set_internal(&mut self) {
        let points = (self.tonnage / 10.0).ceil() as i32;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.internal = (index != Location::Body.index()).then_some(points);
        }
    }

    pub fn recalculate_tech_advancement(&mut self) {
        let rating = self
            .structural_tech_rating
            .max(self.armor_tech_rating())
            .max(self.engine_tech_rating());
        self.tech_advancement = TechAdvancement {
            base: self.tech_level.base,
            rules: self.tech_level.rules,
            intro_year: self.tech_level.year,
            rating,
        };
    }

    /// Armor tonnage implied by the per-location armor configuration.
    ///
    /// Standard armor is weighed with the support-vehicle table for the
    /// slot's BAR and the vehicle's armor tech rating; anything else, or a
    /// combination the table does not allow, uses points per ton.
    pub fn armor_weight(&self) -> f64 {
        let rating = self.armor_tech_rating();
        let raw: f64 = self
            .slots
            .iter()
            .skip(1)
            .map(|slot| {
                let per_point = if slot.armor_type == ArmorType::STANDARD {
                    slot.bar_rating
                        .and_then(|bar| support_armor_tons_per_point(bar, rating))
                } else {
                    None
                };
                let per_point = per_point.unwrap_or(1.0 / slot.armor_type.points_per_ton());
                f64::from(slot.armor) * per_point
            })
            .sum();

        if self.tonnage < 5.0 {
            round_up(raw, 1000.0)
        } else {
            round_up(raw, 2.0)
        }
    }

    // -- Equipment ---------------------------------------------------------

    /// Attach equipment. Fails if the location does not exist on this
    /// chassis or a size is given for fixed-size equipment.
    pub fn mount(&mut self, mounted: Mounted) -> Result<MountId, MountError> {
        if !self.has_location(mounted.location) {
            return Err(MountError::MissingLocation {
                equipment: mounted.equipment.name.clone(),
                location: mounted.location,
            });
        }
        if mounted.size.is_some() && !mounted.equipment.variable_size {
            return Err(MountError::NotVariableSize {
                equipment: mounted.equipment.name.clone(),
            });
        }
        Ok(self.equipment.insert(mounted))
    }

    pub fn mounted(&self, id: MountId) -> Option<&Mounted> {
        self.equipment.get(id)
    }

    pub fn equipment(&self) -> impl Iterator<Item = (MountId, &Mounted)> {
        self.equipment.iter()
    }

    pub fn equipment_at(&self, location: Location) -> impl Iterator<Item = &Mounted> {
        self.equipment
            .values()
            .filter(move |m| m.location == location)
    }

    pub fn equipment_count(&self) -> usize {
        self.equipment.len()
    }
}

/// Round `value` up to the next multiple of `1 / steps_per_unit`, ignoring
/// float noise below a millionth of a step.
fn round_up(value: f64, steps_per_unit: f64) -> f64 {
    ((value * steps_per_unit) - 1e-6).ceil().max(0.0) / steps_per_unit
}
