//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed step order
//! - Seeded RNG only
//! - Stable obstacle order (by x, append at the right edge)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod engine;
pub mod events;
pub mod kinematics;
pub mod modifiers;
pub mod obstacles;
pub mod particles;
pub mod state;
pub mod tick;

pub use config::{Difficulty, DifficultyConfig};
pub use engine::{Engine, StartParams};
pub use events::{EngineObserver, GameEvent, NullObserver};
pub use kinematics::{Autopilot, GapSeeker, PilotView};
pub use modifiers::{Boundary, BoundaryOutcome, CollisionPolicy, ObstacleOutcome, resolve};
pub use state::{
    Biome, BiomeTheme, Bird, FrameSnapshot, GamePhase, GameState, Obstacle, Particle, RunOptions,
    RunState, Skin, SkinColors, is_boss_window,
};
pub use tick::tick;
