//! Per-frame simulation tick
//!
//! One call advances the run by exactly one frame in a fixed order:
//! autopilot, kinematics, boundaries, particles, spawning, obstacle
//! collisions, scoring, pruning, frame counter. A fatal collision stops the
//! tick at the step where it was detected.

use rand::Rng;

use super::collision::{boundary_crossed, has_cleared, hits_obstacle};
use super::events::GameEvent;
use super::kinematics::{Autopilot, PilotView, apply_impulse, integrate};
use super::modifiers::{Boundary, BoundaryOutcome, ObstacleOutcome, resolve};
use super::obstacles::maybe_spawn;
use super::particles;
use super::state::{GamePhase, GameState, is_boss_window};
use crate::consts::*;

/// Advance the game state by one frame. No-op unless Active.
pub fn tick(state: &mut GameState, autopilot: Option<&dyn Autopilot>, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Active {
        return;
    }

    // 1. Autopilot
    if let Some(pilot) = autopilot.filter(|p| state.options.autopilot && p.supports(state.skin)) {
        let view = PilotView {
            bird: &state.bird,
            obstacles: &state.obstacles,
            gap_height: state.config.gap_height,
            playfield_height: state.layout.height(),
        };
        if pilot.wants_impulse(&view) {
            apply_impulse(&mut state.bird, &state.config);
        }
    }

    // 2. Kinematics
    integrate(&mut state.bird, state.config.gravity);

    // 3. Boundaries
    let ground_line = state.layout.ground_line();
    if let Some(boundary) = boundary_crossed(&state.bird, ground_line) {
        let policy = resolve(state.skin, state.run.biome, state.run.score);
        match policy.boundary_outcome(boundary) {
            BoundaryOutcome::Fatal => {
                terminate(state, events);
                return;
            }
            BoundaryOutcome::Clamp => match boundary {
                Boundary::Ground => {
                    state.bird.y = ground_line - BIRD_SIZE;
                    state.bird.vel = 0.0;
                }
                Boundary::Ceiling => {
                    state.bird.y = 0.0;
                    state.bird.vel = CEILING_NUDGE;
                }
            },
        }
    }

    // 4. Particles
    particles::step(&mut state.jump_particles);
    particles::step(&mut state.explosion_particles);

    // 5. Spawning (tick numbers start at 1, so the first obstacle arrives
    //    after one full spawn period)
    maybe_spawn(
        &mut state.obstacles,
        state.run.frame_counter + 1,
        &state.config,
        state.layout.width(),
        state.layout.height(),
        &mut state.rng,
    );

    // 6. Scroll and collide
    let gap_height = state.config.gap_height;
    for idx in 0..state.obstacles.len() {
        state.obstacles[idx].x -= state.config.obstacle_speed;

        if !hits_obstacle(&state.bird, &state.obstacles[idx], gap_height) {
            continue;
        }

        let policy = resolve(state.skin, state.run.biome, state.run.score);
        match policy.obstacle_outcome() {
            ObstacleOutcome::Explode => {
                let obstacle = &mut state.obstacles[idx];
                obstacle.exploded = true;
                let center = obstacle.gap_center(gap_height);
                let burst_seed = state.rng.random::<u64>();
                particles::spawn_explosion(&mut state.explosion_particles, center, burst_seed);
                log::debug!("Obstacle exploded at ({:.0}, {:.0})", center.x, center.y);
                events.push(GameEvent::ObstacleExploded { center });
            }
            ObstacleOutcome::PassThrough | ObstacleOutcome::Invincible => {}
            ObstacleOutcome::Fatal => {
                terminate(state, events);
                return;
            }
        }
    }

    // 7. Scoring
    let old_score = state.run.score;
    for obstacle in state.obstacles.iter_mut() {
        if !obstacle.passed && !obstacle.exploded && has_cleared(obstacle) {
            obstacle.passed = true;
            state.run.score += 1;
        }
    }
    if state.run.score != old_score {
        let score = state.run.score;
        events.push(GameEvent::ScoreUpdated(score));

        if is_boss_window(score) && !is_boss_window(old_score) {
            log::info!("Boss window entered at score {}", score);
            events.push(GameEvent::BossWindowEntered);
        } else if !is_boss_window(score) && is_boss_window(old_score) {
            log::info!("Boss window left at score {}", score);
            events.push(GameEvent::BossWindowLeft);
        }

        if !state.options.biome_locked && score / BIOME_PERIOD != old_score / BIOME_PERIOD {
            let next = state.run.biome.next();
            log::info!("Biome {} -> {} at score {}", state.run.biome.as_str(), next.as_str(), score);
            state.run.biome = next;
            events.push(GameEvent::BiomeChanged(next));
        }
    }

    // 8. Prune
    state
        .obstacles
        .retain(|o| !o.exploded && o.x + PIPE_WIDTH > -OFFSCREEN_MARGIN);

    // 9. Frame counter
    state.run.frame_counter += 1;
}

/// Freeze the run at the current frame and report the final score once
fn terminate(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::Terminated;
    log::info!("Game over with score {}", state.run.score);
    events.push(GameEvent::GameOver {
        final_score: state.run.score,
    });
}
