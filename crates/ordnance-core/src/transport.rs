use serde::{Deserialize, Serialize};

/// Kind of transport bay a vehicle can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportKind {
    TroopSpace,
    CargoBay,
    LiquidCargoBay,
    RefrigeratedCargoBay,
    InsulatedCargoBay,
    LivestockCargoBay,
    InfantryBay,
}

impl TransportKind {
    /// Look up a kind by its data-file key (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key.trim().to_ascii_lowercase().as_str() {
            "troopspace" => TransportKind::TroopSpace,
            "cargobay" => TransportKind::CargoBay,
            "liquidcargobay" => TransportKind::LiquidCargoBay,
            "refrigeratedcargobay" => TransportKind::RefrigeratedCargoBay,
            "insulatedcargobay" => TransportKind::InsulatedCargoBay,
            "livestockcargobay" => TransportKind::LivestockCargoBay,
            "infantrybay" => TransportKind::InfantryBay,
            _ => return None,
        })
    }

    pub const fn key(self) -> &'static str {
        match self {
            TransportKind::TroopSpace => "troopspace",
            TransportKind::CargoBay => "cargobay",
            TransportKind::LiquidCargoBay => "liquidcargobay",
            TransportKind::RefrigeratedCargoBay => "refrigeratedcargobay",
            TransportKind::InsulatedCargoBay => "insulatedcargobay",
            TransportKind::LivestockCargoBay => "livestockcargobay",
            TransportKind::InfantryBay => "infantrybay",
        }
    }
}

/// A transport bay attached to a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportBay {
    pub kind: TransportKind,
    /// Capacity in tons.
    pub capacity: f64,
    pub doors: u32,
}
