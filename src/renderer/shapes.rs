//! Quad generation for a frame snapshot
//!
//! Draw order: sky, sun, clouds, obstacles, explosion debris, ground, jump
//! puffs, entity, progress bar.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_8};

use super::vertex::{Quad, colors};
use crate::consts::*;
use crate::sim::{Biome, BiomeTheme, FrameSnapshot, Obstacle, Particle, Skin, resolve};

/// Height of the lip drawn at each barrier's gap end
const CAP_HEIGHT: f32 = 20.0;
const SUN_SIZE: f32 = 50.0;
const BORDER_WIDTH: f32 = 2.0;

/// Entity tilt from vertical velocity
pub fn bird_rotation(vel: f32, steak: bool) -> f32 {
    if steak {
        (vel * 0.05).clamp(-FRAC_PI_8, FRAC_PI_8)
    } else {
        (vel * 0.1).clamp(-FRAC_PI_4, FRAC_PI_4)
    }
}

/// Alpha applied to obstacles (and the entity) while a modifier is active
fn obstacle_alpha(snapshot: &FrameSnapshot) -> f32 {
    let policy = resolve(snapshot.skin, snapshot.biome, snapshot.score);
    if policy.boss_invincible {
        0.5
    } else if policy.ceiling_floats {
        0.8
    } else if policy.obstacle_pass_through {
        0.7
    } else {
        1.0
    }
}

fn is_steak(snapshot: &FrameSnapshot) -> bool {
    snapshot.skin == Skin::Chicken && snapshot.biome == Biome::Nether
}

/// Top and bottom barrier plus their lips, each drawn as an outline quad
/// followed by its fill
pub fn obstacle(pipe: &Obstacle, gap_height: f32, ground_line: f32, theme: &BiomeTheme) -> Vec<Quad> {
    let bottom_y = pipe.gap_bottom(gap_height);
    [
        Quad::new(pipe.x, 0.0, PIPE_WIDTH, pipe.top, theme.pipe),
        Quad::new(pipe.x - 5.0, pipe.top - CAP_HEIGHT, PIPE_WIDTH + 10.0, CAP_HEIGHT, theme.pipe),
        Quad::new(pipe.x, bottom_y, PIPE_WIDTH, ground_line - bottom_y, theme.pipe),
        Quad::new(pipe.x - 5.0, bottom_y, PIPE_WIDTH + 10.0, CAP_HEIGHT, theme.pipe),
    ]
    .into_iter()
    .flat_map(|fill| [outline(&fill, theme.pipe_border), fill])
    .collect()
}

fn outline(fill: &Quad, color: [f32; 4]) -> Quad {
    let [x, y] = fill.position;
    let [w, h] = fill.size;
    Quad::new(
        x - BORDER_WIDTH,
        y - BORDER_WIDTH,
        w + 2.0 * BORDER_WIDTH,
        h + 2.0 * BORDER_WIDTH,
        color,
    )
}

fn particle(p: &Particle) -> Quad {
    Quad::new(p.pos.x, p.pos.y, p.size, p.size, p.color)
}

/// Entity quads (body plus face details)
pub fn bird(snapshot: &FrameSnapshot) -> Vec<Quad> {
    let x = BIRD_X;
    let y = snapshot.bird.y;
    let s = BIRD_SIZE;
    let steak = is_steak(snapshot);
    let rotation = bird_rotation(snapshot.bird.vel, steak);
    let pivot = [x + s / 2.0, y + s / 2.0];

    let mut quads = if steak {
        vec![
            Quad::new(x, y + s / 4.0, s, s * 0.75, colors::STEAK_BODY),
            Quad::new(x + s / 4.0, y, s / 2.0, s / 2.0, colors::STEAK_BODY),
            Quad::new(x + s / 8.0, y + s / 2.0, s * 0.75, s / 4.0, colors::STEAK_DETAIL),
            Quad::new(x + s / 2.0, y + s / 8.0, s / 4.0, s / 2.0, colors::STEAK_DETAIL),
        ]
    } else {
        let palette = snapshot.skin.colors();
        let eye = if snapshot.invincible {
            colors::GLOW_EYE
        } else {
            colors::EYE
        };
        let mut quads = vec![Quad::new(x, y, s, s, palette.body)];
        if snapshot.skin == Skin::Creeper {
            quads.push(Quad::new(x + 12.0, y + 14.0, 10.0, 8.0, palette.head));
            quads.push(Quad::new(x + 8.0, y + 18.0, 4.0, 10.0, palette.head));
            quads.push(Quad::new(x + 22.0, y + 18.0, 4.0, 10.0, palette.head));
            quads.push(Quad::new(x + 6.0, y + 6.0, 8.0, 8.0, eye));
            quads.push(Quad::new(x + 20.0, y + 6.0, 8.0, 8.0, eye));
        } else {
            quads.push(Quad::new(x + s - 4.0, y + 15.0, 6.0, 8.0, palette.detail));
            quads.push(Quad::new(x + 4.0, y + 15.0, 12.0, 10.0, [0.0, 0.0, 0.0, 0.1]));
            quads.push(Quad::new(x + s - 10.0, y + 8.0, 4.0, 4.0, eye));
        }
        quads
    };

    let policy = resolve(snapshot.skin, snapshot.biome, snapshot.score);
    let alpha = if steak {
        0.9
    } else if policy.obstacle_pass_through {
        0.8
    } else {
        1.0
    };
    for quad in quads.iter_mut() {
        *quad = quad.rotated_about(rotation, pivot).faded(alpha);
    }
    quads
}

/// Score progress bar just above the ground: biome progress, or the
/// draining boss timer while invincible
pub fn progress_bar(snapshot: &FrameSnapshot) -> Vec<Quad> {
    let width = snapshot.layout.width();
    let bar_y = snapshot.layout.ground_line() - 15.0;
    let bar_width = width - 40.0;
    let mut quads = vec![Quad::new(20.0, bar_y, bar_width, 8.0, colors::BAR_TRACK)];

    if snapshot.invincible {
        let elapsed = snapshot.score.saturating_sub(BOSS_WINDOW_START) as f32;
        let span = (BOSS_WINDOW_END - BOSS_WINDOW_START) as f32;
        quads.push(Quad::new(
            20.0,
            bar_y,
            bar_width * (1.0 - elapsed / span),
            8.0,
            colors::BAR_BOSS,
        ));
    } else {
        let progress = (snapshot.score % BIOME_PERIOD) as f32 / BIOME_PERIOD as f32;
        let color = if (snapshot.score + 1).is_multiple_of(BIOME_PERIOD) {
            colors::BAR_ALMOST
        } else {
            colors::BAR_PROGRESS
        };
        quads.push(Quad::new(20.0, bar_y, bar_width * progress, 8.0, color));
    }
    quads
}

/// Build every quad for one frame, back to front
pub fn build_frame(snapshot: &FrameSnapshot) -> Vec<Quad> {
    let theme = snapshot.biome.theme();
    let width = snapshot.layout.width();
    let height = snapshot.layout.height();
    let ground_line = snapshot.layout.ground_line();
    let frame = snapshot.frame_counter as f32;

    let mut quads = Vec::with_capacity(
        32 + snapshot.obstacles.len() * 4
            + snapshot.jump_particles.len()
            + snapshot.explosion_particles.len(),
    );

    // Sky (flickers dark during the boss window)
    let sky = if snapshot.invincible && snapshot.frame_counter % 60 < 5 {
        colors::BOSS_FLASH
    } else {
        theme.background
    };
    quads.push(Quad::new(0.0, 0.0, width, height, sky));

    // Sun (none in the nether)
    if snapshot.biome != Biome::Nether {
        let (sun, glow, pad) = if snapshot.invincible {
            (colors::BOSS_SUN, colors::BOSS_SUN_GLOW, 10.0)
        } else {
            (colors::SUN, colors::SUN_GLOW, 5.0)
        };
        let sun_x = width - 100.0;
        let sun_y = 50.0;
        quads.push(Quad::new(sun_x - pad, sun_y - pad, SUN_SIZE + 2.0 * pad, SUN_SIZE + 2.0 * pad, glow));
        quads.push(Quad::new(sun_x, sun_y, SUN_SIZE, SUN_SIZE, sun));
    }

    // Clouds drift right, wrapping
    let wrap = width + 100.0;
    let cloud1_x = (50.0 + frame * 0.2) % wrap - 50.0;
    let cloud2_x = (width - 100.0 + frame * 0.1) % wrap - 50.0;
    quads.push(Quad::new(cloud1_x, 80.0, 40.0, 20.0, colors::CLOUD));
    quads.push(Quad::new(cloud2_x, 120.0, 60.0, 30.0, colors::CLOUD));

    let alpha = obstacle_alpha(snapshot);
    for pipe in snapshot.obstacles.iter().filter(|p| !p.exploded) {
        quads.extend(
            obstacle(pipe, snapshot.gap_height, ground_line, &theme)
                .into_iter()
                .map(|q| q.faded(alpha)),
        );
    }

    quads.extend(snapshot.explosion_particles.iter().map(particle));

    // Ground: grass strip over a darker base
    quads.push(Quad::new(0.0, ground_line, width, GROUND_HEIGHT, theme.ground_dark));
    quads.push(Quad::new(0.0, ground_line, width, 15.0, theme.ground));

    quads.extend(snapshot.jump_particles.iter().map(particle));
    quads.extend(bird(snapshot));
    quads.extend(progress_bar(snapshot));
    quads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layout;
    use crate::sim::{DifficultyConfig, GameState, RunOptions};

    fn snapshot(skin: Skin, biome: Biome) -> FrameSnapshot {
        let mut state = GameState::new(Layout::Landscape, 3);
        state.reset(DifficultyConfig::EASY, skin, biome, RunOptions::default(), 3);
        state.snapshot()
    }

    #[test]
    fn test_exploded_obstacles_skipped() {
        let mut snap = snapshot(Skin::Duck, Biome::Desert);
        let base = build_frame(&snap).len();
        snap.obstacles.push(Obstacle::new(400.0, 200.0));
        let mut gone = Obstacle::new(600.0, 200.0);
        gone.exploded = true;
        snap.obstacles.push(gone);
        assert_eq!(build_frame(&snap).len(), base + 8);
    }

    #[test]
    fn test_obstacle_spans_to_ground() {
        let theme = Biome::Plains.theme();
        let quads = obstacle(&Obstacle::new(100.0, 200.0), 180.0, 650.0, &theme);
        assert_eq!(quads[1].size, [PIPE_WIDTH, 200.0]);
        assert_eq!(quads[5].position, [100.0, 380.0]);
        assert_eq!(quads[5].size, [PIPE_WIDTH, 270.0]);
    }

    #[test]
    fn test_obstacle_outlined_in_border_color() {
        let theme = Biome::Nether.theme();
        let quads = obstacle(&Obstacle::new(100.0, 200.0), 180.0, 650.0, &theme);
        assert_eq!(quads.len(), 8);
        for pair in quads.chunks(2) {
            let (border, fill) = (pair[0], pair[1]);
            assert_eq!(border.color, theme.pipe_border);
            assert_eq!(fill.color, theme.pipe);
            assert_eq!(border.position[0], fill.position[0] - BORDER_WIDTH);
            assert_eq!(border.size[0], fill.size[0] + 2.0 * BORDER_WIDTH);
        }
    }

    #[test]
    fn test_bird_parts_tilt_together() {
        let mut snap = snapshot(Skin::Duck, Biome::Desert);
        snap.bird.vel = 0.0;
        let level = bird(&snap);
        snap.bird.vel = 100.0;
        let tilted = bird(&snap);

        // Body is centered on the pivot and stays put
        assert_eq!(tilted[0].position, level[0].position);
        // The eye sits right of center, so a nose-down tilt carries it lower
        let eye = level.len() - 1;
        assert!(tilted[eye].position[1] > level[eye].position[1]);
        assert!(tilted.iter().all(|q| q.rotation == FRAC_PI_4));
    }

    #[test]
    fn test_no_sun_in_nether() {
        let nether = build_frame(&snapshot(Skin::Duck, Biome::Nether)).len();
        let desert = build_frame(&snapshot(Skin::Duck, Biome::Desert)).len();
        assert_eq!(desert, nether + 2);
    }

    #[test]
    fn test_rotation_clamped() {
        assert_eq!(bird_rotation(100.0, false), FRAC_PI_4);
        assert_eq!(bird_rotation(-100.0, true), -FRAC_PI_8);
        assert_eq!(bird_rotation(0.0, false), 0.0);
    }

    #[test]
    fn test_boss_bar_drains() {
        let mut snap = snapshot(Skin::Duck, Biome::Desert);
        snap.score = 15;
        snap.invincible = true;
        let full = progress_bar(&snap)[1].size[0];
        snap.score = 25;
        let drained = progress_bar(&snap)[1].size[0];
        assert!(drained < full);
    }
}
