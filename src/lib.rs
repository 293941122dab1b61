//! Blastwave - a top-down arena shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input polling and asset loading are the host's job: the sim
//! consumes a [`sim::TickInput`] snapshot once per tick and exposes
//! renderer-agnostic draw intents via [`sim::draw_intents`].

pub mod sim;
pub mod tuning;

pub use tuning::{LevelEntry, Tuning};

/// Game configuration constants
pub mod consts {
    /// Nominal fixed simulation timestep (60 Hz)
    ///
    /// Movement speeds are expressed in pixels per tick at this rate;
    /// timers and cooldowns decay in seconds of elapsed `dt`.
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Burst fires one projectile every 10 degrees around a full circle
    pub const BURST_SHOT_COUNT: u32 = 36;
}
