//! Morph configuration
//!
//! Loaded from TOML; every key is optional and falls back to `Default`.

use crate::constants::MAIN_TEXTURE_SLOT;
use crate::correspondence::SearchStrategy;
use crate::error::{MorphError, MorphResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for a morph session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Recompute the derived mesh on every tick; false freezes it
    pub is_deforming: bool,

    /// Control value the session starts with
    pub initial_control_value: f32,

    /// Nearest vertex lookup used to build the correspondence tables
    pub search: SearchStrategy,

    /// Grid cell size for `SearchStrategy::Grid`, derived from density when unset
    pub grid_cell_size: Option<f32>,

    /// Use the rayon pool for table construction and interpolation
    pub parallel: bool,

    /// Texture slots hard-switched to the dominant material
    pub switched_texture_slots: Vec<String>,

    /// Run one step as part of engine creation
    pub step_on_create: bool,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            is_deforming: true,
            initial_control_value: 0.0,
            search: SearchStrategy::BruteForce,
            grid_cell_size: None,
            parallel: false,
            switched_texture_slots: vec![MAIN_TEXTURE_SLOT.to_string()],
            step_on_create: false,
        }
    }
}

impl MorphConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> MorphResult<()> {
        if !self.initial_control_value.is_finite() {
            return Err(MorphError::InvalidConfig {
                field: "initial_control_value".to_string(),
                value: self.initial_control_value.to_string(),
                reason: "must be finite".to_string(),
            });
        }

        if let Some(size) = self.grid_cell_size {
            if !(size.is_finite() && size > 0.0) {
                return Err(MorphError::InvalidConfig {
                    field: "grid_cell_size".to_string(),
                    value: size.to_string(),
                    reason: "must be a positive finite number".to_string(),
                });
            }
        }

        if let Some(slot) = self.switched_texture_slots.iter().find(|s| s.trim().is_empty()) {
            return Err(MorphError::InvalidConfig {
                field: "switched_texture_slots".to_string(),
                value: format!("{:?}", slot),
                reason: "slot names cannot be empty".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.initial_control_value) {
            log::warn!(
                "[MorphConfig] initial_control_value {} is outside [0, 1], positions will extrapolate",
                self.initial_control_value
            );
        }

        Ok(())
    }
}

/// Parse and validate a TOML configuration string
pub fn parse_config(text: &str) -> MorphResult<MorphConfig> {
    let config: MorphConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a TOML configuration file
pub fn load_config(path: &Path) -> MorphResult<MorphConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| MorphError::Io {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let config = parse_config(&text)?;
    log::info!("[load_config] Loaded morph config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = parse_config("").expect("empty config is valid");
        assert_eq!(config, MorphConfig::default());
        assert!(config.is_deforming);
        assert_eq!(config.switched_texture_slots, vec!["_MainTex".to_string()]);
    }

    #[test]
    fn test_parse_all_keys() {
        let config = parse_config(
            r#"
            is_deforming = false
            initial_control_value = 0.75
            search = "grid"
            grid_cell_size = 0.25
            parallel = true
            switched_texture_slots = ["_MainTex", "_BumpMap"]
            step_on_create = true
            "#,
        )
        .expect("valid config");

        assert!(!config.is_deforming);
        assert_eq!(config.initial_control_value, 0.75);
        assert_eq!(config.search, SearchStrategy::Grid);
        assert_eq!(config.grid_cell_size, Some(0.25));
        assert!(config.parallel);
        assert_eq!(config.switched_texture_slots.len(), 2);
        assert!(config.step_on_create);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            parse_config("grid_cell_size = -1.0"),
            Err(MorphError::InvalidConfig { .. })
        ));
        assert!(matches!(
            parse_config("switched_texture_slots = [\"\"]"),
            Err(MorphError::InvalidConfig { .. })
        ));
        assert!(matches!(
            parse_config("search = \"octree\""),
            Err(MorphError::ConfigParse(_))
        ));
        assert!(matches!(
            parse_config("initial_control_value = nan"),
            Err(MorphError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "initial_control_value = 0.5").expect("write");
        let config = load_config(file.path()).expect("valid file");
        assert_eq!(config.initial_control_value, 0.5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = load_config(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(MorphError::Io { .. })));
    }
}
