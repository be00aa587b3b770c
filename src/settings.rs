//! Menu selection
//!
//! The bundle of choices a host menu collects before a run. Not persisted;
//! serialisable so a host can hand it across a JS/JSON boundary.

use serde::{Deserialize, Serialize};

use crate::Layout;
use crate::error::ConfigError;
use crate::sim::{Biome, Difficulty, RunOptions, Skin, StartParams};

/// Menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub skin: Skin,
    /// Starting biome
    pub biome: Biome,
    /// Landscape (desktop) or portrait (mobile) playfield
    pub layout: Layout,
    /// Keep the starting biome for the whole run
    pub biome_locked: bool,
    /// Autopilot toggle; only offered for skins with a controller
    autopilot: bool,
}

impl Settings {
    /// Build from string keys; any unknown key is an error
    pub fn from_keys(
        difficulty: &str,
        skin: &str,
        biome: &str,
        layout: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            difficulty: difficulty.parse()?,
            skin: skin.parse()?,
            biome: biome.parse()?,
            layout: layout.parse()?,
            biome_locked: false,
            autopilot: false,
        })
    }

    /// Whether the current skin offers an autopilot
    pub fn autopilot_available(&self) -> bool {
        self.skin == Skin::Chicken
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot && self.autopilot_available()
    }

    /// Toggle autopilot; ignored for skins without one
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled && self.autopilot_available();
    }

    /// Switch skin; drops autopilot if the new skin has none
    pub fn set_skin(&mut self, skin: Skin) {
        self.skin = skin;
        if !self.autopilot_available() {
            self.autopilot = false;
        }
    }

    pub fn to_start_params(&self) -> StartParams {
        StartParams {
            difficulty: self.difficulty,
            skin: self.skin,
            biome: self.biome,
            options: RunOptions {
                biome_locked: self.biome_locked,
                autopilot: self.autopilot(),
            },
        }
    }

    /// Parse from JSON handed over by a host page
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log::warn!("Ignoring malformed settings: {}", err);
                None
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autopilot_only_for_chicken() {
        let mut settings = Settings::default();
        settings.set_autopilot(true);
        assert!(!settings.autopilot());

        settings.set_skin(Skin::Chicken);
        settings.set_autopilot(true);
        assert!(settings.to_start_params().options.autopilot);

        settings.set_skin(Skin::Duck);
        assert!(!settings.autopilot());
        settings.set_skin(Skin::Chicken);
        assert!(!settings.autopilot(), "switching skins clears the toggle");
    }

    #[test]
    fn test_from_keys() {
        let settings = Settings::from_keys("HARD", "DUCK", "OCEAN", "mobile").unwrap();
        assert_eq!(settings.layout, Layout::Portrait);
        assert_eq!(
            Settings::from_keys("HARD", "DUCK", "END", "mobile"),
            Err(ConfigError::UnknownBiome("END".into()))
        );
    }

    #[test]
    fn test_json_roundtrip_and_garbage() {
        let mut settings = Settings::default();
        settings.biome_locked = true;
        assert_eq!(Settings::from_json(&settings.to_json()), Some(settings));
        assert_eq!(Settings::from_json("{not json"), None);
    }
}
