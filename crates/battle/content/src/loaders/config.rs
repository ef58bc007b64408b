//! Battle tuning configuration loader.

use std::path::Path;
use std::time::Duration;

use battle_core::BattleConfig;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// TOML shape of [`BattleConfig`]. Durations are carried as integral
/// milliseconds; every field falls back to the built-in default, so partial
/// override files are fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfigFile {
    pub initiative_threshold: f32,
    pub opponent_delay_ms: u64,
    pub removal_delay_ms: u64,
    pub attack_animation_ms: u64,
    pub highlight_duration_ms: u64,
    pub capture_threshold: f32,
    pub xp_per_level: f32,
}

impl Default for BattleConfigFile {
    fn default() -> Self {
        let config = BattleConfig::default();
        Self {
            initiative_threshold: config.initiative_threshold,
            opponent_delay_ms: config.opponent_delay.as_millis() as u64,
            removal_delay_ms: config.removal_delay.as_millis() as u64,
            attack_animation_ms: config.attack_animation.as_millis() as u64,
            highlight_duration_ms: config.highlight_duration.as_millis() as u64,
            capture_threshold: config.capture_threshold,
            xp_per_level: config.xp_per_level,
        }
    }
}

impl From<BattleConfigFile> for BattleConfig {
    fn from(file: BattleConfigFile) -> Self {
        Self {
            initiative_threshold: file.initiative_threshold,
            opponent_delay: Duration::from_millis(file.opponent_delay_ms),
            removal_delay: Duration::from_millis(file.removal_delay_ms),
            attack_animation: Duration::from_millis(file.attack_animation_ms),
            highlight_duration: Duration::from_millis(file.highlight_duration_ms),
            capture_threshold: file.capture_threshold,
            xp_per_level: file.xp_per_level,
        }
    }
}

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a battle configuration from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let file: BattleConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(file.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("battle.toml");
        std::fs::write(
            &path,
            "opponent_delay_ms = 250\ncapture_threshold = 0.5\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.opponent_delay, Duration::from_millis(250));
        assert_eq!(config.capture_threshold, 0.5);
        assert_eq!(config, {
            let mut expected = BattleConfig::default();
            expected.opponent_delay = Duration::from_millis(250);
            expected.capture_threshold = 0.5;
            expected
        });
    }

    #[test]
    fn empty_file_yields_the_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("battle.toml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(ConfigLoader::load(&path).unwrap(), BattleConfig::default());
    }
}
