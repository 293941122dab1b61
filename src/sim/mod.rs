//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod draw;
pub mod effects;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, resolve_collisions};
pub use draw::{DrawIntent, DrawKind, Hud, draw_intents, hud};
pub use state::{
    ActiveEffect, Enemy, GamePhase, GameState, Pickup, PickupKind, Player, Projectile,
};
pub use tick::{TickInput, tick};
