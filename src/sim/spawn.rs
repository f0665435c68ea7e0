//! Spawn position sources
//!
//! The session asks a [`SpawnSource`] where the next bubble goes. Production
//! runs use a seeded PCG stream; tests script exact positions.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::PlayArea;

/// Supplies spawn positions inside the play area
pub trait SpawnSource: std::fmt::Debug {
    fn next_position(&mut self, area: &PlayArea) -> Vec2;
}

/// Uniform random positions from a seeded PCG32 stream.
///
/// Coordinates are whole pixels, matching integer mouse positions.
#[derive(Debug, Clone)]
pub struct RandomSpawner {
    rng: Pcg32,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl SpawnSource for RandomSpawner {
    fn next_position(&mut self, area: &PlayArea) -> Vec2 {
        let x = self
            .rng
            .random_range(area.min.x.ceil() as i32..=area.max.x.floor() as i32);
        let y = self
            .rng
            .random_range(area.min.y.ceil() as i32..=area.max.y.floor() as i32);
        Vec2::new(x as f32, y as f32)
    }
}

/// Replays a fixed list of positions, then repeats the last one.
///
/// Positions are clamped into the play area so scripted spawns obey the
/// same bounds as random ones.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpawner {
    queue: VecDeque<Vec2>,
    last: Option<Vec2>,
}

impl ScriptedSpawner {
    pub fn new(positions: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            queue: positions.into_iter().collect(),
            last: None,
        }
    }
}

impl SpawnSource for ScriptedSpawner {
    fn next_position(&mut self, area: &PlayArea) -> Vec2 {
        let pos = self
            .queue
            .pop_front()
            .or(self.last)
            .unwrap_or((area.min + area.max) * 0.5);
        self.last = Some(pos);
        pos.clamp(area.min, area.max)
    }
}
