//! Difficulty presets
//!
//! Two fixed presets, selected at game start and never mutated during a run.

use serde::{Deserialize, Serialize};

use crate::consts::{GAP_MARGIN, GROUND_HEIGHT};
use crate::error::ConfigError;

/// Difficulty preset key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Hard => "HARD",
        }
    }

    /// Physics and obstacle tuning for this preset
    pub fn config(&self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig::EASY,
            Difficulty::Hard => DifficultyConfig::HARD,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Per-tick tuning. Units are pixels and ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Downward acceleration (px/tick²)
    pub gravity: f32,
    /// Velocity set by an impulse (negative = upward)
    pub jump_impulse: f32,
    /// Leftward obstacle scroll (px/tick)
    pub obstacle_speed: f32,
    /// Vertical opening between the two barriers
    pub gap_height: f32,
    /// Ticks between obstacle spawns
    pub spawn_period: u64,
}

impl DifficultyConfig {
    pub const EASY: DifficultyConfig = DifficultyConfig {
        gravity: 0.25,
        jump_impulse: -5.0,
        obstacle_speed: 2.5,
        gap_height: 180.0,
        spawn_period: 100,
    };

    pub const HARD: DifficultyConfig = DifficultyConfig {
        gravity: 0.35,
        jump_impulse: -6.0,
        obstacle_speed: 4.0,
        gap_height: 140.0,
        spawn_period: 75,
    };

    /// Valid range for an obstacle's top barrier height in a playfield of `height`
    pub fn top_edge_range(&self, height: f32) -> (f32, f32) {
        (GAP_MARGIN, height - GROUND_HEIGHT - self.gap_height - GAP_MARGIN)
    }

    /// Reject tunings whose gap cannot be placed inside the playfield
    pub fn validate(&self, height: f32) -> Result<(), ConfigError> {
        let (min, max) = self.top_edge_range(height);
        if max < min || self.spawn_period == 0 {
            return Err(ConfigError::GapDoesNotFit {
                gap_height: self.gap_height,
                playfield_height: height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layout;

    #[test]
    fn test_presets_fit_both_layouts() {
        for difficulty in Difficulty::ALL {
            for layout in [Layout::Landscape, Layout::Portrait] {
                assert!(difficulty.config().validate(layout.height()).is_ok());
            }
        }
    }

    #[test]
    fn test_top_edge_range() {
        let (min, max) = DifficultyConfig::EASY.top_edge_range(750.0);
        assert_eq!(min, 50.0);
        assert_eq!(max, 750.0 - 100.0 - 180.0 - 50.0);
    }

    #[test]
    fn test_oversized_gap_rejected() {
        let config = DifficultyConfig {
            gap_height: 500.0,
            ..DifficultyConfig::EASY
        };
        assert!(matches!(
            config.validate(600.0),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(ConfigError::UnknownDifficulty("nightmare".into()))
        );
    }
}
