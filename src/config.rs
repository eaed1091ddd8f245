//! Optional JSON configuration; every field falls back to its default

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::battle::BattleParams;
use crate::error::{ForgeError, Result};
use crate::render::RenderParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub render: RenderParams,
    pub battle: BattleParams,
}

impl ForgeConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ForgeError::io(path, e))?;
        let config = Self::from_json(&text)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config = ForgeConfig::from_json(r#"{"battle": {"turn_delay_ms": 0}}"#).unwrap();
        assert_eq!(config.battle.turn_delay_ms, 0);
        assert_eq!(config.battle.crit_multiplier, 1.5);
        assert_eq!(config.render, RenderParams::default());

        assert_eq!(ForgeConfig::from_json("{}").unwrap(), ForgeConfig::default());
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(
            ForgeConfig::from_json(r#"{"battle": {"max_turns": "lots"}}"#),
            Err(ForgeError::Json(_))
        ));
        let missing = ForgeConfig::load("/nonexistent/forge.json");
        assert!(matches!(missing, Err(ForgeError::Io { .. })));
        assert_eq!(ForgeConfig::load_or_default(None).unwrap(), ForgeConfig::default());
    }
}
