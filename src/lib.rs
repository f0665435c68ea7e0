//! Bubble Pop - A reflex/aim trainer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bubble lifecycle, scoring, session state)
//! - `app`: Host-side screen flow driving the simulation once per frame
//! - `renderer`: Vertex generation and the WebGPU pipeline
//! - `settings`: Launch-time game configuration
//! - `error`: Error types shared by the simulation and configuration

pub mod app;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, Autoplay, Screen};
pub use error::{SimError, SimResult};
pub use settings::GameConfig;

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Fixed host timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Screen dimensions in pixels
    pub const SCREEN_W: f32 = 800.0;
    pub const SCREEN_H: f32 = 600.0;

    /// Height of the HUD bar along the top edge
    pub const UI_BAR_HEIGHT: f32 = 55.0;
    /// Inset of the play area from the screen edges
    pub const MARGIN: f32 = 35.0;

    /// Time between bubble spawns
    pub const SPAWN_INTERVAL_MS: u32 = 300;

    /// Bubble defaults - radius grows by GROWTH_RATE per tick up to MAX_RADIUS, then shrinks
    pub const MAX_RADIUS: f32 = 33.0;
    pub const GROWTH_RATE: f32 = 0.23;

    /// Collapsed bubbles allowed before the run ends
    pub const LIVES: u32 = 4;
}

/// Round half away from zero to one decimal place
#[inline]
pub fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
