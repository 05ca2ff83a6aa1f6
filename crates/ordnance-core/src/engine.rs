//! Power plant: engine type, capability flags and rating.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Engine type
// ---------------------------------------------------------------------------

/// Engine technology. Data files refer to these by integer code; see
/// [`EngineType::from_file_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EngineType {
    #[default]
    Fusion,
    InternalCombustion,
    XlFusion,
    XxlFusion,
    LightFusion,
    CompactFusion,
    FuelCell,
    Fission,
    None,
    Maglev,
    Steam,
    Battery,
    Solar,
    External,
}

impl EngineType {
    /// File code of a standard fusion engine, used when `engine_type` is absent.
    pub const FUSION_CODE: i64 = 0;

    /// Translate a data-file engine code.
    pub fn from_file_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => EngineType::Fusion,
            1 => EngineType::InternalCombustion,
            2 => EngineType::XlFusion,
            3 => EngineType::XxlFusion,
            4 => EngineType::LightFusion,
            5 => EngineType::CompactFusion,
            6 => EngineType::FuelCell,
            7 => EngineType::Fission,
            8 => EngineType::None,
            9 => EngineType::Maglev,
            10 => EngineType::Steam,
            11 => EngineType::Battery,
            12 => EngineType::Solar,
            13 => EngineType::External,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            EngineType::Fusion => "Fusion",
            EngineType::InternalCombustion => "ICE",
            EngineType::XlFusion => "XL Fusion",
            EngineType::XxlFusion => "XXL Fusion",
            EngineType::LightFusion => "Light Fusion",
            EngineType::CompactFusion => "Compact Fusion",
            EngineType::FuelCell => "Fuel Cell",
            EngineType::Fission => "Fission",
            EngineType::None => "None",
            EngineType::Maglev => "Maglev",
            EngineType::Steam => "Steam",
            EngineType::Battery => "Battery",
            EngineType::Solar => "Solar",
            EngineType::External => "External",
        }
    }
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

/// A capability flag on an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EngineFlag {
    /// Mounted in a ground vehicle (including rotorcraft).
    GroundVehicle,
    /// Built under support-vehicle construction rules.
    SupportVehicle,
    Clan,
    Large,
}

/// Set of [`EngineFlag`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineFlags(BTreeSet<EngineFlag>);

impl EngineFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: EngineFlag) -> bool {
        self.0.insert(flag)
    }

    pub fn contains(&self, flag: EngineFlag) -> bool {
        self.0.contains(&flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = EngineFlag> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<EngineFlag> for EngineFlags {
    fn from_iter<I: IntoIterator<Item = EngineFlag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// A constructed power plant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    /// Always a non-negative multiple of 5.
    pub rating: u32,
    pub engine_type: EngineType,
    pub flags: EngineFlags,
}

impl Engine {
    pub fn new(rating: u32, engine_type: EngineType, flags: EngineFlags) -> Self {
        Self {
            rating,
            engine_type,
            flags,
        }
    }

    pub fn has_flag(&self, flag: EngineFlag) -> bool {
        self.flags.contains(flag)
    }
}
