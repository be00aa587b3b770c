//! Engine facade
//!
//! Owns the [`GameState`] and the autopilot strategy, and exposes the only
//! surface hosts use: start, tick, impulse, snapshot.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::Difficulty;
use super::events::GameEvent;
use super::kinematics::{Autopilot, GapSeeker, apply_impulse};
use super::modifiers::{CollisionPolicy, resolve};
use super::particles;
use super::state::{Biome, FrameSnapshot, GamePhase, GameState, RunOptions, Skin};
use super::tick::tick;
use crate::Layout;
use crate::error::ConfigError;

/// Everything `start` needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartParams {
    pub difficulty: Difficulty,
    pub skin: Skin,
    pub biome: Biome,
    pub options: RunOptions,
}

impl StartParams {
    /// Parse string keys (as chosen in a menu); unknown keys are rejected
    pub fn from_keys(
        difficulty: &str,
        skin: &str,
        biome: &str,
        options: RunOptions,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            difficulty: difficulty.parse()?,
            skin: skin.parse()?,
            biome: biome.parse()?,
            options,
        })
    }
}

#[derive(Debug)]
pub struct Engine {
    state: GameState,
    autopilot: Box<dyn Autopilot>,
}

impl Engine {
    /// Inactive engine with the default gap-seeking autopilot
    pub fn new(layout: Layout, seed: u64) -> Self {
        Self::with_autopilot(layout, seed, Box::new(GapSeeker::default()))
    }

    pub fn with_autopilot(layout: Layout, seed: u64, autopilot: Box<dyn Autopilot>) -> Self {
        Self {
            state: GameState::new(layout, seed),
            autopilot,
        }
    }

    /// Reset all run state and enter Active. Configuration is validated
    /// first; on error nothing changes.
    pub fn start(&mut self, params: StartParams) -> Result<(), ConfigError> {
        let config = params.difficulty.config();
        if let Err(err) = config.validate(self.state.layout.height()) {
            log::warn!("Rejected start configuration: {}", err);
            return Err(err);
        }

        // Each run draws a fresh seed from the previous stream
        let seed = self.state.rng.random::<u64>();
        self.start_seeded(params, seed);
        Ok(())
    }

    /// Start with an explicit seed (replays and tests)
    pub fn start_seeded(&mut self, params: StartParams, seed: u64) {
        self.state
            .reset(params.difficulty.config(), params.skin, params.biome, params.options, seed);
        log::info!(
            "Run started: {} {} in {} (seed {}, locked={}, autopilot={})",
            params.difficulty.as_str(),
            params.skin.as_str(),
            params.biome.as_str(),
            seed,
            params.options.biome_locked,
            params.options.autopilot
        );
    }

    /// Advance one frame; returns the events emitted during it
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        tick(&mut self.state, Some(self.autopilot.as_ref()), &mut events);
        events
    }

    /// Set velocity to the jump impulse and puff a jump burst. No-op unless Active.
    pub fn trigger_impulse(&mut self) {
        if self.state.phase != GamePhase::Active {
            return;
        }
        apply_impulse(&mut self.state.bird, &self.state.config);
        let burst_seed = self.state.rng.random::<u64>();
        particles::spawn_jump_burst(
            &mut self.state.jump_particles,
            self.state.bird.y,
            self.state.skin.colors().body,
            burst_seed,
        );
    }

    /// Leave Active/Terminated for Inactive (menu return, acknowledged game over)
    pub fn stop(&mut self) {
        if self.state.phase != GamePhase::Inactive {
            log::info!("Engine stopped at score {}", self.state.run.score);
        }
        self.state.phase = GamePhase::Inactive;
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.run.score
    }

    /// Policy currently in force (for HUD banners)
    pub fn policy(&self) -> CollisionPolicy {
        resolve(self.state.skin, self.state.run.biome, self.state.run.score)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Scripted-scenario access for tests only. Hosts read state through
    /// [`Engine::snapshot`] and change it only via start, tick and impulse.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.state.snapshot()
    }
}
