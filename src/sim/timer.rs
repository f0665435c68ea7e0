//! Fixed-interval spawn timer
//!
//! Converts host frame deltas into the per-tick "spawn due" signal.

use serde::{Deserialize, Serialize};

use crate::error::{SimResult, require_non_negative};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnTimer {
    /// Interval between spawns in seconds
    pub interval: f32,
    /// Time accumulated since the last spawn
    pub accumulated: f32,
}

impl SpawnTimer {
    /// Timer firing every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Accumulate `dt` seconds; returns true if a spawn is due this tick.
    ///
    /// At most one spawn fires per call. Whole intervals beyond the first are
    /// dropped, the partial remainder carries over.
    pub fn advance(&mut self, dt: f32) -> SimResult<bool> {
        require_non_negative("dt", dt)?;
        self.accumulated += dt;
        if self.accumulated < self.interval {
            return Ok(false);
        }
        self.accumulated %= self.interval;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_hz_cadence() {
        let mut timer = SpawnTimer::new(0.3);
        let fired = (0..60)
            .filter(|_| timer.advance(1.0 / 60.0).unwrap())
            .count();
        assert_eq!(fired, 3);
    }

    #[test]
    fn test_exact_interval_steps() {
        let mut timer = SpawnTimer::new(0.25);
        assert!(!timer.advance(0.125).unwrap());
        assert!(timer.advance(0.125).unwrap());
        assert!(!timer.advance(0.125).unwrap());
        assert!(timer.advance(0.125).unwrap());
    }

    #[test]
    fn test_long_frame_fires_once() {
        let mut timer = SpawnTimer::new(0.25);
        assert!(timer.advance(1.125).unwrap());
        assert!((timer.accumulated - 0.125).abs() < 1e-5);
        assert!(timer.advance(0.125).unwrap());
    }

    #[test]
    fn test_rejects_negative_dt() {
        let mut timer = SpawnTimer::new(0.3);
        assert!(timer.advance(-0.01).is_err());
        assert!(timer.advance(f32::NAN).is_err());
        assert_eq!(timer.accumulated, 0.0);
    }
}
