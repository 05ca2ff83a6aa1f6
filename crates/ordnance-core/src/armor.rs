//! Armor and internal-structure type codes plus armor weight tables.

use serde::{Deserialize, Serialize};

use crate::tech::TechRating;

// ---------------------------------------------------------------------------
// Armor type
// ---------------------------------------------------------------------------

/// Armor type code as written in data files. Codes without a named
/// constant are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ArmorType(pub i32);

impl ArmorType {
    pub const STANDARD: ArmorType = ArmorType(0);
    pub const FERRO_FIBROUS: ArmorType = ArmorType(1);
    pub const LIGHT_FERRO: ArmorType = ArmorType(5);
    pub const HEAVY_FERRO: ArmorType = ArmorType(6);
    /// Sentinel: armor type, tech and BAR are given per location.
    pub const PATCHWORK: ArmorType = ArmorType(7);

    pub const fn is_patchwork(self) -> bool {
        self.0 == Self::PATCHWORK.0
    }

    /// Armor points per ton for combat-vehicle style armor weight.
    pub fn points_per_ton(self) -> f64 {
        match self {
            ArmorType::FERRO_FIBROUS => 17.92,
            ArmorType::LIGHT_FERRO => 16.96,
            ArmorType::HEAVY_FERRO => 19.2,
            _ => 16.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ArmorType::STANDARD => "Standard",
            ArmorType::FERRO_FIBROUS => "Ferro-Fibrous",
            ArmorType::LIGHT_FERRO => "Light Ferro-Fibrous",
            ArmorType::HEAVY_FERRO => "Heavy Ferro-Fibrous",
            ArmorType::PATCHWORK => "Patchwork",
            _ => "Other",
        }
    }
}

// ---------------------------------------------------------------------------
// Structure type
// ---------------------------------------------------------------------------

/// Internal structure type code as written in data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StructureType(pub i32);

impl StructureType {
    pub const STANDARD: StructureType = StructureType(0);
    pub const INDUSTRIAL: StructureType = StructureType(1);
    pub const ENDO_STEEL: StructureType = StructureType(2);

    pub fn name(self) -> &'static str {
        match self {
            StructureType::STANDARD => "Standard",
            StructureType::INDUSTRIAL => "Industrial",
            StructureType::ENDO_STEEL => "Endo Steel",
            _ => "Other",
        }
    }
}

// ---------------------------------------------------------------------------
// Support vehicle armor weight
// ---------------------------------------------------------------------------

/// Tons per armor point for standard support-vehicle armor, indexed by
/// `[BAR][tech rating]`. Zero marks a BAR that cannot be built at that
/// tech rating.
const SV_ARMOR_TONS_PER_POINT: [[f64; 6]; 11] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.040, 0.025, 0.016, 0.013, 0.012, 0.011],
    [0.060, 0.038, 0.024, 0.019, 0.017, 0.016],
    [0.0, 0.050, 0.032, 0.026, 0.023, 0.021],
    [0.0, 0.063, 0.040, 0.032, 0.028, 0.026],
    [0.0, 0.0, 0.048, 0.038, 0.034, 0.032],
    [0.0, 0.0, 0.056, 0.045, 0.040, 0.037],
    [0.0, 0.0, 0.064, 0.051, 0.045, 0.042],
    [0.0, 0.0, 0.0, 0.057, 0.051, 0.047],
    [0.0, 0.0, 0.0, 0.063, 0.056, 0.052],
];

/// Tons per point of standard support-vehicle armor at the given BAR and
/// tech rating, or `None` if that combination is not buildable.
pub fn support_armor_tons_per_point(bar: i32, rating: TechRating) -> Option<f64> {
    let row = SV_ARMOR_TONS_PER_POINT.get(usize::try_from(bar).ok()?)?;
    let value = *row.get(usize::try_from(rating.0).ok()?)?;
    (value > 0.0).then_some(value)
}
