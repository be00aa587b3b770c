//! Entity kinematics and autopilot controllers

use super::config::DifficultyConfig;
use super::state::{Bird, Obstacle, Skin};
use crate::consts::{BIRD_X, PIPE_WIDTH};

/// Constant-acceleration step: velocity first, then position
#[inline]
pub fn integrate(bird: &mut Bird, gravity: f32) {
    bird.vel += gravity;
    bird.y += bird.vel;
}

/// Impulse: overwrite (not add to) the vertical velocity
#[inline]
pub fn apply_impulse(bird: &mut Bird, config: &DifficultyConfig) {
    bird.vel = config.jump_impulse;
}

/// What an autopilot gets to look at each tick
#[derive(Debug, Clone, Copy)]
pub struct PilotView<'a> {
    pub bird: &'a Bird,
    pub obstacles: &'a [Obstacle],
    pub gap_height: f32,
    pub playfield_height: f32,
}

impl PilotView<'_> {
    /// First obstacle whose trailing edge is still ahead of the entity
    pub fn next_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .find(|o| !o.exploded && o.x + PIPE_WIDTH > BIRD_X)
    }
}

/// A controller the engine consults at the top of each tick
pub trait Autopilot: std::fmt::Debug {
    /// Skins this controller drives
    fn supports(&self, skin: Skin) -> bool;

    /// Return true to fire an impulse this tick
    fn wants_impulse(&self, view: &PilotView<'_>) -> bool;
}

/// Reactive controller: flap whenever the entity sinks below the target
/// line (just above the next gap's midpoint, or the screen center).
#[derive(Debug, Clone, Copy)]
pub struct GapSeeker {
    /// Pixels above the gap center that still count as "too low"
    pub lead: f32,
}

impl Default for GapSeeker {
    fn default() -> Self {
        Self { lead: 10.0 }
    }
}

impl Autopilot for GapSeeker {
    fn supports(&self, skin: Skin) -> bool {
        skin == Skin::Chicken
    }

    fn wants_impulse(&self, view: &PilotView<'_>) -> bool {
        match view.next_obstacle() {
            Some(obstacle) => {
                let gap_center = obstacle.top + view.gap_height / 2.0;
                view.bird.y > gap_center - self.lead
            }
            None => view.bird.y > view.playfield_height / 2.0,
        }
    }
}
