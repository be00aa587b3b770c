//! Configuration errors raised before a run starts

/// Invalid start configuration. Rejected before any state is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownDifficulty(String),
    UnknownSkin(String),
    UnknownBiome(String),
    UnknownLayout(String),
    /// The gap plus both margins does not fit above the ground line
    GapDoesNotFit { gap_height: f32, playfield_height: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDifficulty(key) => write!(f, "unknown difficulty: {:?}", key),
            Self::UnknownSkin(key) => write!(f, "unknown skin: {:?}", key),
            Self::UnknownBiome(key) => write!(f, "unknown biome: {:?}", key),
            Self::UnknownLayout(key) => write!(f, "unknown layout: {:?}", key),
            Self::GapDoesNotFit {
                gap_height,
                playfield_height,
            } => write!(
                f,
                "gap of {} px does not fit in a {} px playfield",
                gap_height, playfield_height
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_key() {
        let err = ConfigError::UnknownSkin("PIG".into());
        assert_eq!(err.to_string(), "unknown skin: \"PIG\"");
    }
}
