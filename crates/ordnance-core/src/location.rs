use serde::{Deserialize, Serialize};
use std::fmt;

/// A hit location on a rotorcraft chassis.
///
/// The discriminant is the location index used for armor and structure
/// slots. `Body` is always slot 0 and carries no armor of its own in data
/// files; `Turret` only exists on chassis that declare one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    Body = 0,
    Front = 1,
    Right = 2,
    Left = 3,
    Rear = 4,
    Rotor = 5,
    Turret = 6,
}

impl Location {
    /// All locations in index order.
    pub const ALL: [Location; 7] = [
        Location::Body,
        Location::Front,
        Location::Right,
        Location::Left,
        Location::Rear,
        Location::Rotor,
        Location::Turret,
    ];

    /// Slot index of this location.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Location for a slot index, if one exists.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display name. Also the prefix of per-location data fields
    /// (e.g. `Front_armor_type`, `Front Equipment`).
    pub const fn name(self) -> &'static str {
        match self {
            Location::Body => "Body",
            Location::Front => "Front",
            Location::Right => "Right",
            Location::Left => "Left",
            Location::Rear => "Rear",
            Location::Rotor => "Rotor",
            Location::Turret => "Turret",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hex-side firing direction, 0 (front) clockwise to 5 (front-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facing(pub u8);

impl Facing {
    pub const FRONT: Facing = Facing(0);
    pub const FRONT_RIGHT: Facing = Facing(1);
    pub const REAR_RIGHT: Facing = Facing(2);
    pub const REAR: Facing = Facing(3);
    pub const REAR_LEFT: Facing = Facing(4);
    pub const FRONT_LEFT: Facing = Facing(5);
}
