//! Hit tests for in-flight pins
//!
//! Pins travel along -y, so "reaching the target" is a single coordinate
//! compare against the target's near (bottom) edge.

use glam::Vec2;

use super::state::{Pin, Target};

/// Whether a pin tip has reached the near edge of the target
#[inline]
pub fn tip_reached_target(tip: Vec2, target: &Target) -> bool {
    tip.y <= target.position.y + target.radius()
}

/// Whether a pin tip touches another pin's head
#[inline]
pub fn tip_hits_pin(tip: Vec2, other: &Pin) -> bool {
    tip.distance(other.position) <= other.tip_radius
}

/// Index of the first pin (other than `moving`) whose head the tip touches
pub fn first_pin_hit(pins: &[Pin], moving: usize) -> Option<usize> {
    let tip = pins.get(moving)?.tip;
    pins.iter()
        .enumerate()
        .find(|&(i, other)| i != moving && tip_hits_pin(tip, other))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_tip_reached_target_edge_inclusive() {
        let tuning = Tuning::default();
        let target = Target::new(&tuning);
        let edge = target.position.y + target.radius();

        assert!(tip_reached_target(Vec2::new(160.0, edge), &target));
        assert!(tip_reached_target(Vec2::new(160.0, edge - 1.0), &target));
        assert!(!tip_reached_target(Vec2::new(160.0, edge + 0.5), &target));
    }

    #[test]
    fn test_tip_hits_pin_within_head_radius() {
        let tuning = Tuning::default();
        let other = Pin::new(tuning.source_position, &tuning);

        let touching = other.position + Vec2::new(other.tip_radius - 0.01, 0.0);
        assert!(tip_hits_pin(touching, &other));

        let clear = other.position + Vec2::new(other.tip_radius + 0.1, 0.0);
        assert!(!tip_hits_pin(clear, &other));
    }

    #[test]
    fn test_pin_never_hits_itself() {
        let tuning = Tuning::default();
        let mut pin = Pin::new(tuning.source_position, &tuning);
        // Even a degenerate pin whose tip sits on its own head
        pin.tip = pin.position;
        let pins = vec![pin];
        assert_eq!(first_pin_hit(&pins, 0), None);
    }

    #[test]
    fn test_first_pin_hit_finds_resolved_obstacle() {
        let tuning = Tuning::default();
        let mut obstacle = Pin::new(tuning.source_position, &tuning);
        obstacle.resolved = true;
        obstacle.position = Vec2::new(160.0, 230.0);

        let mut moving = Pin::new(tuning.source_position, &tuning);
        moving.tip = Vec2::new(161.0, 231.0);

        let pins = vec![obstacle, moving];
        assert_eq!(first_pin_hit(&pins, 1), Some(0));
        assert_eq!(first_pin_hit(&pins, 5), None);
    }
}
