//! Collision detection
//!
//! Axis-aligned tests between the square entity, obstacle barrier pairs and
//! the playfield boundaries. Detection only: consequences are decided by
//! the modifier policy.

use super::modifiers::Boundary;
use super::state::{Bird, Obstacle};
use crate::consts::{BIRD_SIZE, BIRD_X, PIPE_WIDTH};

/// Entity's horizontal extent overlaps the obstacle column
#[inline]
pub fn overlaps_horizontally(obstacle: &Obstacle) -> bool {
    BIRD_X + BIRD_SIZE > obstacle.x && BIRD_X < obstacle.x + PIPE_WIDTH
}

/// Entity's vertical extent pokes outside the gap
#[inline]
pub fn outside_gap(bird: &Bird, obstacle: &Obstacle, gap_height: f32) -> bool {
    bird.y < obstacle.top || bird.bottom() > obstacle.gap_bottom(gap_height)
}

/// Entity touches a barrier of a live obstacle
pub fn hits_obstacle(bird: &Bird, obstacle: &Obstacle, gap_height: f32) -> bool {
    !obstacle.exploded && overlaps_horizontally(obstacle) && outside_gap(bird, obstacle, gap_height)
}

/// Which boundary, if any, the entity has crossed. Ground is checked first.
pub fn boundary_crossed(bird: &Bird, ground_line: f32) -> Option<Boundary> {
    if bird.bottom() > ground_line {
        Some(Boundary::Ground)
    } else if bird.y < 0.0 {
        Some(Boundary::Ceiling)
    } else {
        None
    }
}

/// Trailing edge has moved past the entity's leading edge
#[inline]
pub fn has_cleared(obstacle: &Obstacle) -> bool {
    obstacle.x + PIPE_WIDTH < BIRD_X
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(y: f32) -> Bird {
        Bird { y, vel: 0.0 }
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let pipe = Obstacle::new(40.0, 300.0);
        assert!(!hits_obstacle(&bird_at(350.0), &pipe, 180.0));
        // Flush with the top edge still fits
        assert!(!hits_obstacle(&bird_at(300.0), &pipe, 180.0));
    }

    #[test]
    fn test_outside_gap_hits() {
        let pipe = Obstacle::new(40.0, 300.0);
        assert!(hits_obstacle(&bird_at(100.0), &pipe, 180.0));
        // Bottom edge 34px below y: 460 + 34 > 480
        assert!(hits_obstacle(&bird_at(460.0), &pipe, 180.0));
    }

    #[test]
    fn test_no_hit_without_horizontal_overlap() {
        let ahead = Obstacle::new(84.0, 300.0);
        let behind = Obstacle::new(-10.0, 300.0);
        assert!(!hits_obstacle(&bird_at(100.0), &ahead, 180.0));
        assert!(!hits_obstacle(&bird_at(100.0), &behind, 180.0));
    }

    #[test]
    fn test_exploded_never_hits() {
        let mut pipe = Obstacle::new(40.0, 300.0);
        pipe.exploded = true;
        assert!(!hits_obstacle(&bird_at(100.0), &pipe, 180.0));
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(boundary_crossed(&bird_at(617.0), 650.0), Some(Boundary::Ground));
        assert_eq!(boundary_crossed(&bird_at(616.0), 650.0), None);
        assert_eq!(boundary_crossed(&bird_at(-0.1), 650.0), Some(Boundary::Ceiling));
        assert_eq!(boundary_crossed(&bird_at(0.0), 650.0), None);
    }

    #[test]
    fn test_cleared() {
        assert!(has_cleared(&Obstacle::new(-10.5, 200.0)));
        assert!(!has_cleared(&Obstacle::new(-10.0, 200.0)));
    }
}
