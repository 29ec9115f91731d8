//! Game configuration
//!
//! Built by the binary from command-line flags and validated before the first
//! piece spawns.

use thiserror::Error;

use crate::types::{ARENA_HEIGHT, ARENA_WIDTH, DROP_INTERVAL_MS, MAX_ARENA_DIM, MIN_ARENA_DIM};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub drop_interval_ms: u32,
    pub seed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("arena width {0} is outside {min}..={max}", min = MIN_ARENA_DIM, max = MAX_ARENA_DIM)]
    Width(u16),
    #[error("arena height {0} is outside {min}..={max}", min = MIN_ARENA_DIM, max = MAX_ARENA_DIM)]
    Height(u16),
    #[error("drop interval must be at least 1ms")]
    DropInterval,
}

impl GameConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ARENA_DIM..=MAX_ARENA_DIM).contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !(MIN_ARENA_DIM..=MAX_ARENA_DIM).contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::DropInterval);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            seed: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_tiny_and_huge_arenas() {
        let narrow = GameConfig { width: 3, ..GameConfig::default() };
        assert_eq!(narrow.validate(), Err(ConfigError::Width(3)));

        let tall = GameConfig { height: 65, ..GameConfig::default() };
        assert_eq!(tall.validate(), Err(ConfigError::Height(65)));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let cfg = GameConfig { drop_interval_ms: 0, ..GameConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::DropInterval));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::Width(2).to_string(),
            "arena width 2 is outside 4..=64"
        );
    }
}
