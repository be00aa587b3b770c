//! Flappy Craft - A side-scrolling obstacle-avoidance arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacles, collisions, modifiers)
//! - `clock`: Frame-driven lifecycle around the simulation engine
//! - `renderer`: Quad lists built from frame snapshots
//! - `settings`: Menu selection and start parameters
//! - `best_score`: Single numeric best score
//! - `flavor`: Boundary to the flavor-text service

pub mod best_score;
pub mod clock;
pub mod error;
pub mod flavor;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use best_score::BestScore;
pub use clock::{FrameHandle, FrameScheduler, SimulationClock};
pub use error::ConfigError;
pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Entity (bird) square size in pixels
    pub const BIRD_SIZE: f32 = 34.0;
    /// Fixed horizontal position of the entity's left edge
    pub const BIRD_X: f32 = 50.0;

    /// Obstacle (pipe) width
    pub const PIPE_WIDTH: f32 = 60.0;
    /// Minimum distance between a gap edge and the ceiling or ground
    pub const GAP_MARGIN: f32 = 50.0;
    /// Obstacles are dropped once their trailing edge is this far past the left edge
    pub const OFFSCREEN_MARGIN: f32 = 20.0;

    /// Ground strip height at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Downward velocity given after clamping at the ceiling (avoids sticking)
    pub const CEILING_NUDGE: f32 = 0.5;

    /// Shared particle gravity (px/tick²)
    pub const PARTICLE_GRAVITY: f32 = 0.1;

    pub const JUMP_PARTICLE_COUNT: usize = 5;
    pub const JUMP_PARTICLE_LIFETIME: u32 = 15;
    pub const JUMP_PARTICLE_VELOCITY_Y_MIN: f32 = -2.0;
    pub const JUMP_PARTICLE_VELOCITY_Y_MAX: f32 = -0.5;

    pub const EXPLOSION_PARTICLE_COUNT: usize = 8;
    pub const EXPLOSION_LIFETIME_MIN: u32 = 30;
    pub const EXPLOSION_LIFETIME_MAX: u32 = 60;

    /// Score interval granting global invincibility (start inclusive, end exclusive)
    pub const BOSS_WINDOW_START: u32 = 15;
    pub const BOSS_WINDOW_END: u32 = 30;

    /// Biome advances every this many points
    pub const BIOME_PERIOD: u32 = 5;
}

/// Playfield dimensions (landscape for desktop, portrait for mobile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layout {
    #[default]
    Landscape,
    Portrait,
}

impl Layout {
    pub fn width(&self) -> f32 {
        match self {
            Layout::Landscape => 1200.0,
            Layout::Portrait => 400.0,
        }
    }

    pub fn height(&self) -> f32 {
        match self {
            Layout::Landscape => 750.0,
            Layout::Portrait => 600.0,
        }
    }

    /// Y coordinate of the top of the ground strip
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.height() - consts::GROUND_HEIGHT
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Landscape => "LANDSCAPE",
            Layout::Portrait => "PORTRAIT",
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "landscape" | "desktop" => Ok(Layout::Landscape),
            "portrait" | "mobile" => Ok(Layout::Portrait),
            _ => Err(ConfigError::UnknownLayout(s.to_string())),
        }
    }
}

/// Convert a `#rrggbb` literal into linear RGBA floats
pub const fn rgb(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}
