//! Jump trail and explosion particles
//!
//! Purely visual. Both kinds share one integrator; each spawned particle gets
//! its own RNG derived from the burst seed and its index, so no randomness is
//! shared between particles of a burst.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Particle;
use crate::consts::*;
use crate::rgb;

/// Explosion debris colors (white / light grey)
const DEBRIS_COLORS: [[f32; 4]; 2] = [rgb(0xffffff), rgb(0xcccccc)];

/// RNG for the `index`-th particle of a burst
fn particle_rng(burst_seed: u64, index: usize) -> Pcg32 {
    let mixed = burst_seed ^ (index as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    Pcg32::seed_from_u64(mixed)
}

/// Advance every particle one tick and drop the expired ones
pub fn step(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel.y += PARTICLE_GRAVITY;
        particle.lifetime = particle.lifetime.saturating_sub(1);
    }
    particles.retain(|p| p.lifetime > 0);
}

/// Spawn the small puff under the entity on each impulse
pub fn spawn_jump_burst(
    particles: &mut Vec<Particle>,
    bird_y: f32,
    color: [f32; 4],
    burst_seed: u64,
) {
    for i in 0..JUMP_PARTICLE_COUNT {
        let mut rng = particle_rng(burst_seed, i);
        let pos = Vec2::new(
            BIRD_X + BIRD_SIZE / 2.0 + rng.random_range(-5.0..5.0),
            bird_y + BIRD_SIZE - rng.random_range(0.0..5.0),
        );
        let vel = Vec2::new(
            rng.random_range(-0.75..0.75),
            rng.random_range(JUMP_PARTICLE_VELOCITY_Y_MIN..JUMP_PARTICLE_VELOCITY_Y_MAX),
        );
        particles.push(Particle {
            pos,
            vel,
            size: rng.random_range(2.0..5.0),
            color,
            lifetime: JUMP_PARTICLE_LIFETIME,
        });
    }
}

/// Spawn debris at a destroyed obstacle's gap center
pub fn spawn_explosion(particles: &mut Vec<Particle>, center: Vec2, burst_seed: u64) {
    for i in 0..EXPLOSION_PARTICLE_COUNT {
        let mut rng = particle_rng(burst_seed, i);
        let pos = center
            + Vec2::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            );
        let vel = Vec2::new(rng.random_range(-2.0..2.0), rng.random_range(-3.0..1.0));
        let color = DEBRIS_COLORS[rng.random_range(0..DEBRIS_COLORS.len())];
        particles.push(Particle {
            pos,
            vel,
            size: rng.random_range(3.0..8.0),
            color,
            lifetime: rng.random_range(EXPLOSION_LIFETIME_MIN..EXPLOSION_LIFETIME_MAX),
        });
    }
}
