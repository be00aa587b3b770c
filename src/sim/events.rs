//! Signals emitted by the engine during a tick
//!
//! Events are collected synchronously inside the tick and handed to the
//! host afterwards; observers must not block (long-running work such as
//! fetching flavor text is the host's business).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Biome;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An obstacle was cleared; carries the new score
    ScoreUpdated(u32),
    /// Biome rotated
    BiomeChanged(Biome),
    /// Fatal collision; emitted exactly once per run
    GameOver { final_score: u32 },
    /// An obstacle was destroyed by the explode modifier
    ObstacleExploded { center: Vec2 },
    /// Score entered the boss window
    BossWindowEntered,
    /// Score left the boss window
    BossWindowLeft,
}

/// Receiver for engine signals. Every method defaults to a no-op.
pub trait EngineObserver {
    fn on_score_update(&mut self, _score: u32) {}
    fn on_biome_change(&mut self, _biome: Biome) {}
    fn on_game_over(&mut self, _final_score: u32) {}
    /// Called for every event, including the ones above
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl EngineObserver for NullObserver {}

impl GameEvent {
    /// Route this event to the matching observer callback
    pub fn dispatch<O: EngineObserver + ?Sized>(&self, observer: &mut O) {
        observer.on_event(self);
        match *self {
            GameEvent::ScoreUpdated(score) => observer.on_score_update(score),
            GameEvent::BiomeChanged(biome) => observer.on_biome_change(biome),
            GameEvent::GameOver { final_score } => observer.on_game_over(final_score),
            _ => {}
        }
    }
}
