//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes from the host (`dt`, elapsed), never from a clock
//! - Seeded or scripted spawn positions only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod bubble;
pub mod session;
pub mod spawn;
pub mod stats;
pub mod timer;

pub use bubble::{Bubble, BubblePhase, RING_SCALES};
pub use session::{Session, SessionPhase, TickInput, TickReport};
pub use spawn::{RandomSpawner, ScriptedSpawner, SpawnSource};
pub use stats::{Stats, format_clock};
pub use timer::SpawnTimer;
