//! Movement modes and the suspension factor that depends on them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a unit moves. `None` is the sentinel for an unrecognized mode name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MovementMode {
    #[default]
    None,
    Biped,
    Tripod,
    Quad,
    Tracked,
    Wheeled,
    Hover,
    Vtol,
    Naval,
    Hydrofoil,
    Submarine,
    Wige,
    Rail,
    Maglev,
    InfLeg,
    InfMotorized,
    InfJump,
    InfUmu,
    Aerodyne,
    Spheroid,
    StationKeeping,
}

impl MovementMode {
    /// Map a data-file mode name to a movement mode. Matching ignores case
    /// and surrounding whitespace; anything unknown yields [`MovementMode::None`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "biped" => MovementMode::Biped,
            "tripod" => MovementMode::Tripod,
            "quad" => MovementMode::Quad,
            "tracked" => MovementMode::Tracked,
            "wheeled" => MovementMode::Wheeled,
            "hover" => MovementMode::Hover,
            "vtol" => MovementMode::Vtol,
            "naval" => MovementMode::Naval,
            "hydrofoil" => MovementMode::Hydrofoil,
            "submarine" => MovementMode::Submarine,
            "wige" => MovementMode::Wige,
            "rail" => MovementMode::Rail,
            "maglev" => MovementMode::Maglev,
            "inf_leg" | "leg" => MovementMode::InfLeg,
            "inf_motorized" | "motorized" => MovementMode::InfMotorized,
            "inf_jump" | "jump" => MovementMode::InfJump,
            "inf_umu" | "umu" => MovementMode::InfUmu,
            "aerodyne" => MovementMode::Aerodyne,
            "spheroid" => MovementMode::Spheroid,
            "station_keeping" => MovementMode::StationKeeping,
            _ => MovementMode::None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MovementMode::None => "none",
            MovementMode::Biped => "biped",
            MovementMode::Tripod => "tripod",
            MovementMode::Quad => "quad",
            MovementMode::Tracked => "tracked",
            MovementMode::Wheeled => "wheeled",
            MovementMode::Hover => "hover",
            MovementMode::Vtol => "vtol",
            MovementMode::Naval => "naval",
            MovementMode::Hydrofoil => "hydrofoil",
            MovementMode::Submarine => "submarine",
            MovementMode::Wige => "wige",
            MovementMode::Rail => "rail",
            MovementMode::Maglev => "maglev",
            MovementMode::InfLeg => "inf_leg",
            MovementMode::InfMotorized => "inf_motorized",
            MovementMode::InfJump => "inf_jump",
            MovementMode::InfUmu => "inf_umu",
            MovementMode::Aerodyne => "aerodyne",
            MovementMode::Spheroid => "spheroid",
            MovementMode::StationKeeping => "station_keeping",
        }
    }

    /// Offset subtracted from `cruiseMP * tonnage` when sizing a vehicle
    /// engine. Depends on the mode and, for several modes, the tonnage
    /// bracket.
    pub fn suspension_factor(self, tonnage: f64) -> i32 {
        match self {
            MovementMode::Wheeled => 20,
            MovementMode::Naval | MovementMode::Submarine => 30,
            MovementMode::Hover => {
                if tonnage <= 10.0 {
                    40
                } else if tonnage <= 20.0 {
                    85
                } else if tonnage <= 30.0 {
                    130
                } else if tonnage <= 40.0 {
                    175
                } else {
                    235
                }
            }
            MovementMode::Vtol => {
                if tonnage <= 10.0 {
                    50
                } else if tonnage <= 20.0 {
                    95
                } else {
                    140
                }
            }
            MovementMode::Hydrofoil => {
                let bracket = (tonnage / 10.0).ceil().clamp(1.0, 10.0) as i32;
                60 + 45 * (bracket - 1)
            }
            MovementMode::Wige => {
                if tonnage <= 15.0 {
                    45
                } else if tonnage <= 30.0 {
                    80
                } else if tonnage <= 45.0 {
                    115
                } else {
                    140
                }
            }
            _ => 0,
        }
    }
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(MovementMode::from_name("VTOL"), MovementMode::Vtol);
        assert_eq!(MovementMode::from_name("Tracked"), MovementMode::Tracked);
        assert_eq!(MovementMode::from_name("  hover "), MovementMode::Hover);
    }

    #[test]
    fn infantry_aliases() {
        assert_eq!(MovementMode::from_name("leg"), MovementMode::InfLeg);
        assert_eq!(MovementMode::from_name("inf_jump"), MovementMode::InfJump);
    }

    #[test]
    fn unknown_name_is_none_sentinel() {
        assert_eq!(MovementMode::from_name("Bogus"), MovementMode::None);
        assert_eq!(MovementMode::from_name(""), MovementMode::None);
    }

    #[test]
    fn name_round_trips() {
        for mode in [
            MovementMode::Tracked,
            MovementMode::Vtol,
            MovementMode::Hydrofoil,
            MovementMode::StationKeeping,
        ] {
            assert_eq!(MovementMode::from_name(mode.name()), mode);
        }
    }

    #[test]
    fn flat_suspension_factors() {
        assert_eq!(MovementMode::Tracked.suspension_factor(50.0), 0);
        assert_eq!(MovementMode::Wheeled.suspension_factor(50.0), 20);
        assert_eq!(MovementMode::Naval.suspension_factor(300.0), 30);
    }

    #[test]
    fn vtol_brackets() {
        assert_eq!(MovementMode::Vtol.suspension_factor(5.0), 50);
        assert_eq!(MovementMode::Vtol.suspension_factor(10.0), 50);
        assert_eq!(MovementMode::Vtol.suspension_factor(10.5), 95);
        assert_eq!(MovementMode::Vtol.suspension_factor(30.0), 140);
    }

    #[test]
    fn hover_brackets() {
        assert_eq!(MovementMode::Hover.suspension_factor(20.0), 85);
        assert_eq!(MovementMode::Hover.suspension_factor(50.0), 235);
    }

    #[test]
    fn hydrofoil_brackets_cap_at_hundred_tons() {
        assert_eq!(MovementMode::Hydrofoil.suspension_factor(8.0), 60);
        assert_eq!(MovementMode::Hydrofoil.suspension_factor(25.0), 150);
        assert_eq!(MovementMode::Hydrofoil.suspension_factor(100.0), 465);
        assert_eq!(MovementMode::Hydrofoil.suspension_factor(250.0), 465);
    }
}
