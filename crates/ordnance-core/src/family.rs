//! Per-family construction rules.
//!
//! Vehicle families share one loader pipeline and differ in a handful of
//! rules. Each family implements [`VehicleFamily`]; the loader is handed one
//! at construction time.

use crate::location::{Facing, Location};

/// Rules that vary between vehicle families.
pub trait VehicleFamily {
    /// Short family name for diagnostics.
    fn name(&self) -> &'static str;

    /// Facing given to a vehicular grenade launcher mounted at `location`
    /// when the data file does not specify one.
    fn default_vgl_facing(&self, location: Location, rear_facing: bool) -> Facing;
}

/// Support-class rotorcraft.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportVtol;

impl VehicleFamily for SupportVtol {
    fn name(&self) -> &'static str {
        "support VTOL"
    }

    fn default_vgl_facing(&self, location: Location, rear_facing: bool) -> Facing {
        match location {
            Location::Right if rear_facing => Facing::REAR_RIGHT,
            Location::Right => Facing::FRONT_RIGHT,
            Location::Rear => Facing::REAR,
            Location::Left if rear_facing => Facing::REAR_LEFT,
            Location::Left => Facing::FRONT_LEFT,
            _ => Facing::FRONT,
        }
    }
}
