//! Skin/biome collision modifiers
//!
//! Collision detection is uniform; what a collision *does* is looked up here.
//! `resolve` folds the modifier table and the boss window into a
//! [`CollisionPolicy`], which then picks exactly one outcome per collision in
//! a fixed precedence:
//!
//! boss invincibility > explode obstacle > pass through > float/clip > fatal

use serde::{Deserialize, Serialize};

use super::state::{Biome, Skin, is_boss_window};

/// Resolved exemptions for one (skin, biome, score) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollisionPolicy {
    /// Score in the boss window: nothing is fatal
    pub boss_invincible: bool,
    /// Ground contact clamps instead of killing
    pub ground_floats: bool,
    /// Ceiling contact clamps instead of killing
    pub ceiling_floats: bool,
    /// Obstacle contact destroys the obstacle
    pub explodes_obstacles: bool,
    /// Obstacle contact is ignored
    pub obstacle_pass_through: bool,
}

/// What happens when the entity hits an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleOutcome {
    /// Boss window absorbs the hit
    Invincible,
    Explode,
    PassThrough,
    Fatal,
}

/// What happens when the entity crosses the ground or ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryOutcome {
    /// Clamp to the boundary and keep playing
    Clamp,
    Fatal,
}

/// Which boundary was crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Ground,
    Ceiling,
}

/// One row of the modifier table
#[derive(Debug, Clone, Copy)]
struct ModifierRule {
    skin: Skin,
    biome: Biome,
    ground_floats: bool,
    ceiling_floats: bool,
    explodes_obstacles: bool,
    obstacle_pass_through: bool,
}

const MODIFIER_TABLE: [ModifierRule; 3] = [
    // Creeper in the plains blows pipes up
    ModifierRule {
        skin: Skin::Creeper,
        biome: Biome::Plains,
        ground_floats: false,
        ceiling_floats: false,
        explodes_obstacles: true,
        obstacle_pass_through: false,
    },
    // Chicken cooked into steak in the nether: ground and ceiling are safe
    ModifierRule {
        skin: Skin::Chicken,
        biome: Biome::Nether,
        ground_floats: true,
        ceiling_floats: true,
        explodes_obstacles: false,
        obstacle_pass_through: false,
    },
    // Duck in the ocean floats on the ground line and clips through pipes
    ModifierRule {
        skin: Skin::Duck,
        biome: Biome::Ocean,
        ground_floats: true,
        ceiling_floats: false,
        explodes_obstacles: false,
        obstacle_pass_through: true,
    },
];

/// Look up the effective collision policy
pub fn resolve(skin: Skin, biome: Biome, score: u32) -> CollisionPolicy {
    let mut policy = CollisionPolicy {
        boss_invincible: is_boss_window(score),
        ..Default::default()
    };
    for rule in MODIFIER_TABLE
        .iter()
        .filter(|r| r.skin == skin && r.biome == biome)
    {
        policy.ground_floats |= rule.ground_floats;
        policy.ceiling_floats |= rule.ceiling_floats;
        policy.explodes_obstacles |= rule.explodes_obstacles;
        policy.obstacle_pass_through |= rule.obstacle_pass_through;
    }
    policy
}

impl CollisionPolicy {
    pub fn obstacle_outcome(&self) -> ObstacleOutcome {
        if self.boss_invincible {
            ObstacleOutcome::Invincible
        } else if self.explodes_obstacles {
            ObstacleOutcome::Explode
        } else if self.obstacle_pass_through {
            ObstacleOutcome::PassThrough
        } else {
            ObstacleOutcome::Fatal
        }
    }

    pub fn boundary_outcome(&self, boundary: Boundary) -> BoundaryOutcome {
        let floats = match boundary {
            Boundary::Ground => self.ground_floats,
            Boundary::Ceiling => self.ceiling_floats,
        };
        if self.boss_invincible || floats {
            BoundaryOutcome::Clamp
        } else {
            BoundaryOutcome::Fatal
        }
    }

    /// Any rule active beyond the default
    pub fn is_modified(&self) -> bool {
        *self != CollisionPolicy::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fatal() {
        let policy = resolve(Skin::Creeper, Biome::Desert, 3);
        assert!(!policy.is_modified());
        assert_eq!(policy.obstacle_outcome(), ObstacleOutcome::Fatal);
        assert_eq!(policy.boundary_outcome(Boundary::Ground), BoundaryOutcome::Fatal);
        assert_eq!(policy.boundary_outcome(Boundary::Ceiling), BoundaryOutcome::Fatal);
    }

    #[test]
    fn test_boss_window_overrides_everything() {
        for skin in Skin::ALL {
            for biome in Biome::ALL {
                let policy = resolve(skin, biome, 20);
                assert_eq!(policy.obstacle_outcome(), ObstacleOutcome::Invincible);
                assert_eq!(policy.boundary_outcome(Boundary::Ground), BoundaryOutcome::Clamp);
                assert_eq!(policy.boundary_outcome(Boundary::Ceiling), BoundaryOutcome::Clamp);
            }
        }
    }

    #[test]
    fn test_creeper_plains_explodes() {
        let policy = resolve(Skin::Creeper, Biome::Plains, 0);
        assert!(policy.explodes_obstacles);
        assert_eq!(policy.obstacle_outcome(), ObstacleOutcome::Explode);
        assert_eq!(policy.boundary_outcome(Boundary::Ground), BoundaryOutcome::Fatal);
    }

    #[test]
    fn test_duck_ocean_floats_and_clips() {
        let policy = resolve(Skin::Duck, Biome::Ocean, 0);
        assert_eq!(policy.obstacle_outcome(), ObstacleOutcome::PassThrough);
        assert_eq!(policy.boundary_outcome(Boundary::Ground), BoundaryOutcome::Clamp);
        assert_eq!(policy.boundary_outcome(Boundary::Ceiling), BoundaryOutcome::Fatal);
    }

    #[test]
    fn test_chicken_nether_boundaries_safe() {
        let policy = resolve(Skin::Chicken, Biome::Nether, 0);
        assert_eq!(policy.obstacle_outcome(), ObstacleOutcome::Fatal);
        assert_eq!(policy.boundary_outcome(Boundary::Ground), BoundaryOutcome::Clamp);
        assert_eq!(policy.boundary_outcome(Boundary::Ceiling), BoundaryOutcome::Clamp);
    }

    #[test]
    fn test_precedence_boss_beats_explode() {
        let policy = resolve(Skin::Creeper, Biome::Plains, 15);
        assert!(policy.explodes_obstacles);
        assert_eq!(policy.obstacle_outcome(), ObstacleOutcome::Invincible);
    }

    #[test]
    fn test_precedence_explode_beats_pass_through() {
        let policy = CollisionPolicy {
            explodes_obstacles: true,
            obstacle_pass_through: true,
            ..Default::default()
        };
        assert_eq!(policy.obstacle_outcome(), ObstacleOutcome::Explode);
    }

    #[test]
    fn test_modifier_only_in_matching_biome() {
        assert!(!resolve(Skin::Duck, Biome::Plains, 0).is_modified());
        assert!(!resolve(Skin::Chicken, Biome::Ocean, 0).is_modified());
    }
}
