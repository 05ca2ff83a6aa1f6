//! Ordnance Data -- turns attributed data blocks into vehicles.
//!
//! A data block is a flat map from field name to a list of strings,
//! integers or reals (see [`block::AttributedBlock`]). The support-VTOL
//! loader in [`builder`] resolves, defaults, derives and validates those
//! fields in a fixed order and returns either a complete
//! [`ordnance_core::vehicle::Vehicle`] or a [`error::LoadError`].
//!
//! [`loader`] reads blocks, equipment catalogs and configuration from RON,
//! JSON or TOML files.

pub mod block;
pub mod builder;
pub mod config;
pub mod error;
pub mod loader;
pub mod schema;
pub mod shared;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use block::AttributedBlock;
pub use builder::{LoadOptions, SupportVtolLoader, load_support_vtol};
pub use config::LoaderConfig;
pub use error::{CollaboratorError, ErrorKind, LoadError};
pub use loader::{DataLoadError, load_block, load_catalog, load_vehicle_file};
