//! Renderer-agnostic draw intents
//!
//! The sim never names a sprite, texture or font. Each frame the host
//! pulls a flat list of intents (what is where, how big, and an optional
//! health fraction for bar overlays) plus a HUD snapshot, and maps them to
//! whatever visuals it owns.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, PickupKind};

/// What an intent depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawKind {
    Player,
    Enemy,
    PlayerShot,
    EnemyShot,
    Pickup(PickupKind),
}

/// One drawable record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawIntent {
    /// Top-left corner in arena coordinates
    pub pos: Vec2,
    pub size: f32,
    pub kind: DrawKind,
    /// Health bar fraction in 0..=1 where the entity shows one
    pub health: Option<f32>,
}

/// HUD snapshot, one per frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub level: u32,
    pub lives: u32,
    pub health: f32,
    pub enemies_killed: u32,
    /// Seconds until the next spawn batch
    pub wave_timer: f32,
    /// Zero means the burst is ready
    pub burst_cooldown: f32,
}

/// Collect draw intents for every live entity
///
/// Inactive projectiles are never emitted. Paused and game-over frames
/// still emit the frozen scene.
pub fn draw_intents(state: &GameState) -> Vec<DrawIntent> {
    let mut intents = Vec::with_capacity(
        1 + state.enemies.len()
            + state.player_shots.len()
            + state.enemy_shots.len()
            + state.pickups.len(),
    );

    intents.push(DrawIntent {
        pos: state.player.pos,
        size: state.player.size,
        kind: DrawKind::Player,
        health: Some((state.player.health / state.tuning.player_health).clamp(0.0, 1.0)),
    });

    for enemy in &state.enemies {
        intents.push(DrawIntent {
            pos: enemy.pos,
            size: enemy.size,
            kind: DrawKind::Enemy,
            health: Some(enemy.health_fraction(&state.tuning)),
        });
    }

    for shot in &state.player_shots {
        if shot.active {
            intents.push(DrawIntent {
                pos: shot.pos,
                size: shot.size,
                kind: DrawKind::PlayerShot,
                health: None,
            });
        }
    }

    for shot in &state.enemy_shots {
        if shot.active {
            intents.push(DrawIntent {
                pos: shot.pos,
                size: shot.size,
                kind: DrawKind::EnemyShot,
                health: None,
            });
        }
    }

    for pickup in &state.pickups {
        intents.push(DrawIntent {
            pos: pickup.pos,
            size: pickup.size,
            kind: DrawKind::Pickup(pickup.kind),
            health: None,
        });
    }

    intents
}

/// Snapshot the HUD counters
pub fn hud(state: &GameState) -> Hud {
    Hud {
        score: state.score,
        level: state.level,
        lives: state.player.lives,
        health: state.player.health,
        enemies_killed: state.enemies_killed,
        wave_timer: (state.tuning.wave_interval - state.wave_timer).max(0.0),
        burst_cooldown: state.player.burst_cooldown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Projectile;
    use crate::tuning::Tuning;

    #[test]
    fn test_intents_cover_all_live_entities() {
        let mut state = GameState::new(42, Tuning::default());
        state
            .player_shots
            .push(Projectile::new(Vec2::new(100.0, 100.0), Vec2::X, 10.0, 10.0, 10.0));

        let intents = draw_intents(&state);
        assert_eq!(intents.len(), 2);
        assert_eq!(intents[0].kind, DrawKind::Player);
        assert_eq!(intents[0].health, Some(1.0));
        assert_eq!(intents[1].kind, DrawKind::PlayerShot);
        assert_eq!(intents[1].health, None);
    }

    #[test]
    fn test_inactive_projectiles_not_drawn() {
        let mut state = GameState::new(42, Tuning::default());
        let mut shot = Projectile::new(Vec2::new(100.0, 100.0), Vec2::X, 10.0, 10.0, 10.0);
        shot.active = false;
        state.player_shots.push(shot);

        let intents = draw_intents(&state);
        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].kind, DrawKind::Player);
    }

    #[test]
    fn test_hud_counts_down_to_next_wave() {
        let mut state = GameState::new(42, Tuning::default());
        state.wave_timer = 3.0;
        let hud = hud(&state);
        assert!((hud.wave_timer - 2.0).abs() < 1e-5);
        assert_eq!(hud.lives, 3);
        assert_eq!(hud.score, 0);
    }
}
