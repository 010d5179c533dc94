use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

/******************************************\
|==========================================|
|              Rules Config                |
|==========================================|
\******************************************/

/// # Rules configuration
///
/// Economy constants of a session. Every field is optional in a TOML file and falls back
/// to the standard value:
///
/// ```toml
/// starting_points = 12
/// king_capture_bonus = 20
/// teleport_range = 2
/// teleport_charges = 1
/// ```
///
/// Ability prices live in the static catalog and are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Points each colour holds when a game is set up
    pub starting_points: u32,

    /// Bonus on top of the king's (zero) value for capturing it
    pub king_capture_bonus: u32,

    /// Maximum king-step distance of a teleport
    pub teleport_range: u8,

    /// Teleport charges every piece starts with
    pub teleport_charges: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            starting_points: 12,
            king_capture_bonus: 20,
            teleport_range: 2,
            teleport_charges: 1,
        }
    }
}

impl RulesConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RulesConfig, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        contents.parse()
    }
}

impl std::str::FromStr for RulesConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/******************************************\
|==========================================|
|              Config Errors               |
|==========================================|
\******************************************/

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file incorrectly formatted: {0}")]
    Format(#[from] toml::de::Error),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.starting_points, 12);
        assert_eq!(config.king_capture_bonus, 20);
        assert_eq!(config.teleport_range, 2);
        assert_eq!(config.teleport_charges, 1);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!("".parse::<RulesConfig>().unwrap(), RulesConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config: RulesConfig = "starting_points = 30\nteleport_charges = 3\n".parse().unwrap();

        assert_eq!(config.starting_points, 30);
        assert_eq!(config.teleport_charges, 3);
        assert_eq!(config.king_capture_bonus, 20);
        assert_eq!(config.teleport_range, 2);
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!("starting_points = \"lots\"".parse::<RulesConfig>(), Err(ConfigError::Format(_))));
        assert!(matches!("starting_points =".parse::<RulesConfig>(), Err(ConfigError::Format(_))));
        assert!(matches!("bonus = 3".parse::<RulesConfig>(), Err(ConfigError::Format(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = RulesConfig::from_file("/definitely/not/here/rules.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("evolve-chess-rules-{}.toml", std::process::id()));
        fs::write(&path, "king_capture_bonus = 50\n").unwrap();

        let config = RulesConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.king_capture_bonus, 50);
        assert_eq!(config.starting_points, 12);
    }
}
