//! Session statistics snapshot and display formatting

use serde::{Deserialize, Serialize};

use crate::round1;

/// Read-only snapshot of a session's counters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Seconds since the session started
    pub elapsed: f32,
    pub hits: u32,
    pub total_clicks: u32,
    pub misses: u32,
    /// Configured life count
    pub lives: u32,
    pub is_terminal: bool,
}

impl Stats {
    /// Percentage of clicks that hit, one decimal (0 with no clicks)
    pub fn accuracy(&self) -> f32 {
        if self.total_clicks == 0 {
            return 0.0;
        }
        round1(self.hits as f32 / self.total_clicks as f32 * 100.0)
    }

    /// Hits per second, one decimal (0 before any time has passed)
    pub fn speed(&self) -> f32 {
        if self.elapsed <= 0.0 {
            return 0.0;
        }
        round1(self.hits as f32 / self.elapsed)
    }

    pub fn lives_remaining(&self) -> u32 {
        self.lives.saturating_sub(self.misses)
    }

    /// HUD bar labels, left to right
    pub fn hud_lines(&self) -> [String; 4] {
        [
            format!("Time: {}", format_clock(self.elapsed)),
            format!("Speed: {:.1} t/s", self.speed()),
            format!("Hits: {}", self.hits),
            format!("Lives: {}", self.lives_remaining()),
        ]
    }

    /// End-of-run summary labels, top to bottom
    pub fn summary_lines(&self) -> [String; 6] {
        [
            "Game Over".to_string(),
            format!("Time Played: {}", format_clock(self.elapsed)),
            format!("Total Hits: {}", self.hits),
            format!("Accuracy: {:.1}%", self.accuracy()),
            format!("Speed: {:.1} bubbles/sec", self.speed()),
            "Press any key to exit".to_string(),
        ]
    }
}

/// Format seconds as `MM:SS.t` (minutes, whole seconds, tenths)
pub fn format_clock(seconds: f32) -> String {
    let seconds = seconds.max(0.0);
    let tenths_total = (seconds * 10.0).floor() as u64;
    let tenths = tenths_total % 10;
    let whole = tenths_total / 10;
    format!("{:02}:{:02}.{}", whole / 60, whole % 60, tenths)
}
