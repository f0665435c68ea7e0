//! Session state and the per-tick update
//!
//! A session owns every live bubble plus the run's counters. The host calls
//! [`Session::on_tick`] once per frame with the elapsed time, the frame delta,
//! any clicks, and whether the spawn timer fired.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bubble::Bubble;
use super::spawn::{RandomSpawner, SpawnSource};
use super::stats::Stats;
use crate::error::{SimResult, require_finite, require_non_negative};
use crate::settings::GameConfig;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Bubbles spawn, grow and can be clicked
    Active,
    /// Lives exhausted; counters are frozen (absorbing)
    Terminal,
}

/// Inputs for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Seconds since the session started
    pub elapsed: f32,
    /// Seconds since the previous tick
    pub dt: f32,
    /// Click positions received this tick, in arrival order
    pub clicks: Vec<Vec2>,
    /// Spawn timer fired this tick
    pub spawn_due: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// ID of the bubble spawned this tick
    pub spawned: Option<u32>,
    pub hits: u32,
    pub misses: u32,
    /// Clicks that matched no bubble
    pub stray_clicks: u32,
    pub became_terminal: bool,
}

/// One game run
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    spawner: Box<dyn SpawnSource>,
    /// Live bubbles in spawn order
    bubbles: Vec<Bubble>,
    hits: u32,
    total_clicks: u32,
    misses: u32,
    total_spawned: u32,
    elapsed: f32,
    phase: SessionPhase,
    next_id: u32,
}

impl Session {
    /// Create a session spawning at seeded random positions
    pub fn new(config: GameConfig, seed: u64) -> SimResult<Self> {
        Self::with_spawner(config, Box::new(RandomSpawner::new(seed)))
    }

    /// Create a session with a custom position source
    pub fn with_spawner(config: GameConfig, spawner: Box<dyn SpawnSource>) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            spawner,
            bubbles: Vec::new(),
            hits: 0,
            total_clicks: 0,
            misses: 0,
            total_spawned: 0,
            elapsed: 0.0,
            phase: SessionPhase::Active,
            next_id: 1,
        })
    }

    /// Advance the session by one tick.
    ///
    /// Order: spawn, advance, collapse (misses), clicks (hits), terminal check.
    /// Calling this on a terminal session is a no-op that returns an empty
    /// report; malformed input is rejected before anything changes.
    pub fn on_tick(&mut self, input: &TickInput) -> SimResult<TickReport> {
        require_non_negative("elapsed", input.elapsed)?;
        require_non_negative("dt", input.dt)?;
        for click in &input.clicks {
            require_finite("click.x", click.x)?;
            require_finite("click.y", click.y)?;
        }

        let mut report = TickReport::default();
        if self.phase == SessionPhase::Terminal {
            return Ok(report);
        }

        self.elapsed = input.elapsed;

        if input.spawn_due {
            report.spawned = Some(self.spawn_bubble());
        }

        for bubble in &mut self.bubbles {
            bubble.advance(self.config.max_radius, self.config.growth_rate);
        }

        // Collapsed bubbles are misses, removed before any click can match them
        let before = self.bubbles.len();
        self.bubbles.retain(|b| !b.is_collapsed());
        report.misses = (before - self.bubbles.len()) as u32;
        if report.misses > 0 {
            self.misses += report.misses;
            log::info!(
                "Missed {} bubble(s), lives left: {}",
                report.misses,
                self.config.lives.saturating_sub(self.misses)
            );
        }

        for &click in &input.clicks {
            self.total_clicks += 1;
            match self.bubbles.iter().position(|b| b.contains_point(click)) {
                Some(index) => {
                    let bubble = self.bubbles.remove(index);
                    self.hits += 1;
                    report.hits += 1;
                    log::debug!("Hit bubble {} at r={:.1}", bubble.id, bubble.radius);
                }
                None => report.stray_clicks += 1,
            }
        }

        if self.misses >= self.config.lives {
            self.phase = SessionPhase::Terminal;
            report.became_terminal = true;
            log::info!(
                "Session over after {:.1}s: {} hits from {} clicks",
                self.elapsed,
                self.hits,
                self.total_clicks
            );
        }

        Ok(report)
    }

    fn spawn_bubble(&mut self) -> u32 {
        let area = self.config.play_area();
        let pos = self.spawner.next_position(&area);
        let id = self.next_id;
        self.next_id += 1;
        self.total_spawned += 1;
        self.bubbles.push(Bubble::new(id, pos));
        log::debug!("Spawned bubble {} at ({}, {})", id, pos.x, pos.y);
        id
    }

    /// Counter snapshot for the HUD and summary screen
    pub fn stats(&self) -> Stats {
        Stats {
            elapsed: self.elapsed,
            hits: self.hits,
            total_clicks: self.total_clicks,
            misses: self.misses,
            lives: self.config.lives,
            is_terminal: self.is_terminal(),
        }
    }

    /// Live bubbles in spawn order
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == SessionPhase::Terminal
    }

    pub fn total_spawned(&self) -> u32 {
        self.total_spawned
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
