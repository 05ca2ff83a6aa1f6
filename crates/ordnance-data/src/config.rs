//! Loader configuration, read from `ordnance.{ron,toml,json}`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::builder::LoadOptions;
use crate::loader::{DataLoadError, deserialize_file, find_data_file};

/// Base name of the configuration file.
pub const CONFIG_BASE_NAME: &str = "ordnance";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Equipment catalog file. Relative paths are resolved against the
    /// directory the configuration was found in.
    pub catalog: Option<PathBuf>,
    /// Treat equipment names missing from the catalog as errors.
    pub strict_equipment: bool,
}

impl LoaderConfig {
    /// Read the configuration in `dir`. A directory without one yields the
    /// defaults.
    pub fn discover(dir: &Path) -> Result<Self, DataLoadError> {
        let Some(path) = find_data_file(dir, CONFIG_BASE_NAME)? else {
            debug!(dir = %dir.display(), "no loader configuration, using defaults");
            return Ok(Self::default());
        };
        let mut config: LoaderConfig = deserialize_file(&path)?;
        if let Some(catalog) = config.catalog.take() {
            config.catalog = Some(if catalog.is_relative() {
                dir.join(catalog)
            } else {
                catalog
            });
        }
        debug!(path = %path.display(), ?config, "read loader configuration");
        Ok(config)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict_equipment: self.strict_equipment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn make_test_dir(suffix: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "ordnance_config_test_{suffix}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn absent_config_is_default() {
        let dir = make_test_dir("absent");
        let config = LoaderConfig::discover(&dir).unwrap();
        assert_eq!(config, LoaderConfig::default());
        assert!(!config.load_options().strict_equipment);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn toml_config_resolves_catalog() {
        let dir = make_test_dir("toml");
        fs::write(
            dir.join("ordnance.toml"),
            "catalog = \"equipment.ron\"\nstrict_equipment = true\n",
        )
        .unwrap();

        let config = LoaderConfig::discover(&dir).unwrap();
        assert_eq!(config.catalog, Some(dir.join("equipment.ron")));
        assert!(config.load_options().strict_equipment);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let dir = make_test_dir("partial");
        fs::write(dir.join("ordnance.json"), r#"{"strict_equipment": true}"#).unwrap();

        let config = LoaderConfig::discover(&dir).unwrap();
        assert_eq!(config.catalog, None);
        assert!(config.strict_equipment);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn conflicting_configs() {
        let dir = make_test_dir("conflict");
        fs::write(dir.join("ordnance.ron"), "()").unwrap();
        fs::write(dir.join("ordnance.json"), "{}").unwrap();

        assert!(matches!(
            LoaderConfig::discover(&dir),
            Err(DataLoadError::ConflictingFormats { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }
}
