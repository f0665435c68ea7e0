//! Bubble target entity
//!
//! A bubble grows from radius 0 to its maximum, then shrinks. Once the radius
//! drops to zero or below it has collapsed and counts as a miss.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Growth phase of a bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BubblePhase {
    /// Radius increases each tick
    Expanding,
    /// Radius decreases each tick (never returns to Expanding)
    Contracting,
}

/// Ring scale factors, outermost first
pub const RING_SCALES: [f32; 4] = [1.0, 0.8, 0.6, 0.4];

/// A clickable, time-limited circular target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub phase: BubblePhase,
}

impl Bubble {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            radius: 0.0,
            phase: BubblePhase::Expanding,
        }
    }

    /// Apply one tick of growth or shrinkage.
    ///
    /// Flips to Contracting when the next step would reach `max_radius`. No
    /// clamping: the radius may end slightly negative, which marks collapse.
    pub fn advance(&mut self, max_radius: f32, growth_rate: f32) {
        if self.radius + growth_rate >= max_radius {
            self.phase = BubblePhase::Contracting;
        }
        match self.phase {
            BubblePhase::Expanding => self.radius += growth_rate,
            BubblePhase::Contracting => self.radius -= growth_rate,
        }
    }

    /// Hit test: distance from `point` to center within radius
    pub fn contains_point(&self, point: Vec2) -> bool {
        if self.radius <= 0.0 {
            return false;
        }
        self.pos.distance(point) <= self.radius
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.radius <= 0.0
    }

    /// Concentric ring radii for drawing, outermost first
    pub fn rings(&self) -> [f32; 4] {
        RING_SCALES.map(|s| self.radius.max(0.0) * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bubble_is_empty() {
        let b = Bubble::new(1, Vec2::new(100.0, 100.0));
        assert_eq!(b.radius, 0.0);
        assert_eq!(b.phase, BubblePhase::Expanding);
        assert!(b.is_collapsed());
        assert!(!b.contains_point(b.pos));
    }

    #[test]
    fn test_expand_then_contract() {
        let mut b = Bubble::new(1, Vec2::ZERO);
        for _ in 0..9 {
            b.advance(10.0, 1.0);
        }
        assert_eq!(b.radius, 9.0);
        assert_eq!(b.phase, BubblePhase::Expanding);

        // 9 + 1 >= 10 flips before applying the step
        b.advance(10.0, 1.0);
        assert_eq!(b.phase, BubblePhase::Contracting);
        assert_eq!(b.radius, 8.0);

        b.advance(10.0, 1.0);
        assert_eq!(b.radius, 7.0);
        assert_eq!(b.phase, BubblePhase::Contracting);
    }

    #[test]
    fn test_never_exceeds_max_and_collapses() {
        let mut b = Bubble::new(1, Vec2::ZERO);
        let mut flips = 0;
        let mut last = b.phase;
        let mut ticks = 0;
        while ticks == 0 || !b.is_collapsed() {
            b.advance(33.0, 0.23);
            assert!(b.radius <= 33.0);
            assert!(b.radius >= -0.23);
            if b.phase != last {
                flips += 1;
                last = b.phase;
            }
            ticks += 1;
            assert!(ticks < 1000, "bubble never collapsed");
        }
        assert_eq!(flips, 1);
        assert_eq!(b.phase, BubblePhase::Contracting);
    }

    #[test]
    fn test_contains_point() {
        let mut b = Bubble::new(1, Vec2::new(100.0, 100.0));
        b.radius = 10.0;
        assert!(b.contains_point(Vec2::new(100.0, 100.0)));
        assert!(b.contains_point(Vec2::new(110.0, 100.0)));
        assert!(b.contains_point(Vec2::new(106.0, 108.0)));
        assert!(!b.contains_point(Vec2::new(110.1, 100.0)));

        b.radius = -0.1;
        assert!(!b.contains_point(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_rings() {
        let mut b = Bubble::new(1, Vec2::ZERO);
        b.radius = 10.0;
        let rings = b.rings();
        assert_eq!(rings[0], 10.0);
        assert!((rings[3] - 4.0).abs() < 1e-6);

        b.radius = -0.5;
        assert_eq!(b.rings(), [0.0; 4]);
    }
}
