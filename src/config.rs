//! Startup configuration
//!
//! Board geometry, payout table and starting balance are fixed for the life
//! of the process. Loaded from a JSON file and/or environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ROWS, STARTING_BALANCE};
use crate::error::ConfigError;
use crate::sim::{Board, Multiplier, MultiplierTable};

/// Names a JSON config file
pub const ENV_CONFIG: &str = "PLINKO_CONFIG";
/// Overrides the RNG seed (reproducible sessions)
pub const ENV_SEED: &str = "PLINKO_SEED";
/// Overrides the starting balance
pub const ENV_BALANCE: &str = "PLINKO_BALANCE";

/// Game configuration, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Peg rows (slots = rows + 1)
    pub rows: usize,
    /// Payout per slot, edge to edge
    pub multipliers: Vec<Multiplier>,
    /// Balance a session starts with
    pub starting_balance: u64,
    /// Fixed RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            multipliers: MultiplierTable::default().iter().copied().collect(),
            starting_balance: STARTING_BALANCE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (file first, then overrides).
    ///
    /// A config path that cannot be read is an error, not a silent default.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => Self::load(Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw.trim().parse::<u64>().map_err(|_| ConfigError::Env {
                var: ENV_SEED,
                value: raw.clone(),
            })?;
            config.seed = Some(seed);
        }
        if let Some(raw) = lookup(ENV_BALANCE) {
            config.starting_balance =
                raw.trim().parse::<u64>().map_err(|_| ConfigError::Env {
                    var: ENV_BALANCE,
                    value: raw.clone(),
                })?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }

    /// Validate and build the board and table this config describes.
    pub fn validate(&self) -> Result<(Board, MultiplierTable), ConfigError> {
        let board = Board::new(self.rows)?;
        let table = MultiplierTable::new(&board, self.multipliers.clone())?;
        Ok((board, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("plinko-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        let (board, table) = config.validate().unwrap();
        assert_eq!(board.slot_count(), 17);
        assert_eq!(table.len(), 17);
        assert_eq!(config.starting_balance, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(GameConfig::default()).unwrap();
        assert_eq!(json["rows"], 16);
        assert_eq!(json["multipliers"][0], 1000.0);
        assert_eq!(json["multipliers"][8], 0.2);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "starting_balance": 50 }"#).unwrap();
        assert_eq!(config.starting_balance, 50);
        assert_eq!(config.rows, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_multiplier() {
        let result = serde_json::from_str::<GameConfig>(
            r#"{ "rows": 2, "multipliers": [2, -1, 2] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_mismatched_table() {
        let config = GameConfig {
            rows: 4,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let config = GameConfig {
            rows: 2,
            multipliers: vec![
                Multiplier::from_tenths(30),
                Multiplier::from_tenths(5),
                Multiplier::from_tenths(30),
            ],
            starting_balance: 250,
            seed: Some(9),
        };
        config.save(&path).unwrap();
        let loaded = GameConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_path("missing");
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_env_config_file_missing_is_error() {
        let path = temp_path("env_missing");
        let path_str = path.display().to_string();
        let err = GameConfig::from_vars(|k| (k == ENV_CONFIG).then(|| path_str.clone()))
            .unwrap_err();
        assert!(matches!(&err, ConfigError::FileRead { path: p, .. } if *p == path));
    }

    #[test]
    fn test_env_config_file_then_overrides() {
        let path = temp_path("env_file");
        let config = GameConfig {
            starting_balance: 77,
            seed: Some(3),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let path_str = path.display().to_string();
        let vars: HashMap<&str, String> = [
            (ENV_CONFIG, path_str),
            (ENV_SEED, "8".to_string()),
        ]
        .into();
        let loaded = GameConfig::from_vars(|k| vars.get(k).cloned());
        let _ = std::fs::remove_file(&path);

        let loaded = loaded.unwrap();
        assert_eq!(loaded.starting_balance, 77);
        assert_eq!(loaded.seed, Some(8));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [(ENV_SEED, "42"), (ENV_BALANCE, " 5 ")].into();
        let config = GameConfig::from_vars(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.starting_balance, 5);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let err = GameConfig::from_vars(|k| (k == ENV_BALANCE).then(|| "-10".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: ENV_BALANCE, .. }));
    }
}
