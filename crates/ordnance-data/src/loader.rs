//! File loading: reads data blocks and equipment catalogs from disk.
//!
//! Provides format detection (RON/JSON/TOML), file discovery, and
//! deserialization helpers, plus the entry points that turn a vehicle file
//! into a [`Vehicle`].

use ordnance_core::equipment::{Catalog, CatalogError, EquipmentCatalog};
use ordnance_core::vehicle::Vehicle;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::block::AttributedBlock;
use crate::builder::{LoadOptions, SupportVtolLoader};
use crate::error::LoadError;
use crate::schema::EquipmentData;

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading data files.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A duplicate equipment name was found.
    #[error("duplicate name '{name}' in {file}")]
    DuplicateName { file: PathBuf, name: String },

    /// The file parsed but does not describe a valid vehicle.
    #[error("{file}: {source}")]
    Entity {
        file: PathBuf,
        #[source]
        source: LoadError,
    },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a data file with the given base name (without extension).
///
/// Looks for `{base_name}.ron`, `{base_name}.toml`, and `{base_name}.json`.
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// multiple formats exist for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for ext in ["ron", "toml", "json"] {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing,
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

/// Like [`find_data_file`], but returns an error if no file is found.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn parse_error(path: &Path, detail: impl ToString) -> DataLoadError {
    DataLoadError::Parse {
        file: path.to_path_buf(),
        detail: detail.to_string(),
    }
}

/// Read a file and deserialize it according to its format (detected from extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Toml => toml::from_str(&content).map_err(|e| parse_error(path, e)),
    }
}

/// Deserialize a list from a file. For TOML files, extracts the array at the
/// given `toml_key` from a top-level table. For RON and JSON, deserializes
/// directly as `Vec<T>`.
pub fn deserialize_list<T: DeserializeOwned>(
    path: &Path,
    toml_key: &str,
) -> Result<Vec<T>, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Toml => {
            let table: toml::Value = toml::from_str(&content).map_err(|e| parse_error(path, e))?;
            let array = table
                .get(toml_key)
                .ok_or_else(|| parse_error(path, format!("missing key '{toml_key}' in TOML file")))?
                .clone();
            array
                .try_into()
                .map_err(|e: toml::de::Error| parse_error(path, e))
        }
    }
}

// ===========================================================================
// Entry points
// ===========================================================================

/// Read an attributed data block from a RON, JSON or TOML file.
pub fn load_block(path: &Path) -> Result<AttributedBlock, DataLoadError> {
    let block: AttributedBlock = deserialize_file(path)?;
    debug!(path = %path.display(), fields = block.len(), "read data block");
    Ok(block)
}

/// Read an equipment catalog. TOML catalogs hold an `equipment` array.
pub fn load_catalog(path: &Path) -> Result<Catalog, DataLoadError> {
    let entries: Vec<EquipmentData> = deserialize_list(path, "equipment")?;
    let mut catalog = Catalog::new();
    for entry in entries {
        let (equipment, aliases) = entry.into_equipment();
        catalog
            .register(equipment, &aliases)
            .map_err(|CatalogError::DuplicateName(name)| DataLoadError::DuplicateName {
                file: path.to_path_buf(),
                name,
            })?;
    }
    debug!(path = %path.display(), entries = catalog.len(), "loaded equipment catalog");
    Ok(catalog)
}

/// Read a vehicle file and build a support VTOL from it.
pub fn load_vehicle_file(
    path: &Path,
    catalog: &dyn EquipmentCatalog,
    options: &LoadOptions,
) -> Result<Vehicle, DataLoadError> {
    let block = load_block(path)?;
    let vehicle = SupportVtolLoader::new(&block, catalog)
        .with_options(*options)
        .load()
        .map_err(|source| DataLoadError::Entity {
            file: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        chassis = %vehicle.chassis,
        model = %vehicle.model,
        "loaded vehicle"
    );
    Ok(vehicle)
}

// ===========================================================================
// Tests
// ===========================================================================
