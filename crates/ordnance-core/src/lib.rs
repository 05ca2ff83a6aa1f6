//! Ordnance Core -- the strongly-typed vehicle entity model.
//!
//! This crate holds everything a loader writes into when it turns an
//! attributed data block into a vehicle: identity, mass, locomotion, the
//! power plant, per-location armor and structure, tech ratings, transport
//! bays and mounted equipment.
//!
//! It also owns the derivations that depend only on an already-populated
//! entity:
//!
//! - [`movement::MovementMode::suspension_factor`] -- engine-rating offset by
//!   movement mode and tonnage.
//! - [`vehicle::Vehicle::auto_set_internal`] -- internal structure points.
//! - [`vehicle::Vehicle::armor_weight`] -- armor tonnage from the per-location
//!   armor configuration.
//! - [`vehicle::Vehicle::recalculate_tech_advancement`] -- effective tech
//!   summary.
//!
//! # Key Types
//!
//! - [`vehicle::Vehicle`] -- the target entity.
//! - [`location::Location`] -- fixed location table (Body, Front, ..., Turret).
//! - [`engine::Engine`] -- rating, type and a set of [`engine::EngineFlag`]s.
//! - [`equipment::EquipmentCatalog`] -- lookup seam for equipment names.
//! - [`family::VehicleFamily`] -- per-family rules such as default VGL facing.

pub mod armor;
pub mod engine;
pub mod equipment;
pub mod family;
pub mod location;
pub mod movement;
pub mod tech;
pub mod transport;
pub mod vehicle;
