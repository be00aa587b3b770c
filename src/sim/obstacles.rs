//! Procedural obstacle generation

use rand::Rng;

use super::config::DifficultyConfig;
use super::state::Obstacle;

/// Spawn one obstacle at the right edge when `tick_number` lands on the
/// spawn cadence. Returns true if an obstacle was appended.
///
/// The gap's top edge is uniform over the valid range, so the gap never
/// touches the ceiling or the ground.
pub fn maybe_spawn<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    tick_number: u64,
    config: &DifficultyConfig,
    playfield_width: f32,
    playfield_height: f32,
    rng: &mut R,
) -> bool {
    if config.spawn_period == 0 || !tick_number.is_multiple_of(config.spawn_period) {
        return false;
    }

    let (min, max) = config.top_edge_range(playfield_height);
    let top = if max > min {
        rng.random_range(min..=max)
    } else {
        min
    };
    obstacles.push(Obstacle::new(playfield_width, top));
    log::trace!("Spawned obstacle at tick {} (top={:.1})", tick_number, top);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_cadence() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut obstacles = Vec::new();
        let config = DifficultyConfig::EASY;
        let mut spawned = 0;
        for tick in 1..=1000u64 {
            if maybe_spawn(&mut obstacles, tick, &config, 1200.0, 750.0, &mut rng) {
                spawned += 1;
                assert_eq!(tick % 100, 0);
            }
        }
        assert_eq!(spawned, 10);
        assert_eq!(obstacles.len(), 10);
    }

    #[test]
    fn test_gap_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut obstacles = Vec::new();
        let config = DifficultyConfig::HARD;
        for i in 1..=500u64 {
            maybe_spawn(&mut obstacles, i * 75, &config, 400.0, 600.0, &mut rng);
        }
        let (min, max) = config.top_edge_range(600.0);
        assert!(obstacles.iter().all(|o| o.top >= min && o.top <= max));
        assert!(obstacles.iter().all(|o| o.x == 400.0 && !o.passed && !o.exploded));
    }
}
