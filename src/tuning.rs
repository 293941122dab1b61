//! Data-driven game balance
//!
//! Everything the simulation treats as a knob lives here so the host can
//! construct a session with custom balance. Arena bounds are part of the
//! tuning because the sim never talks to a window.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One row of the wave escalation table
///
/// `enemy_count` is both the batch size for a spawn and the kill target
/// that clears the level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelEntry {
    pub enemy_count: u32,
    /// Movement speed for enemies of this level (pixels per tick)
    pub enemy_speed: f32,
}

/// Game balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Arena rectangle (pixels); the player wraps at these bounds and
    /// projectiles deactivate outside them
    pub arena: Vec2,

    // Player
    pub player_size: f32,
    pub player_health: f32,
    /// Pixels per tick; diagonal movement is normalized to this magnitude
    pub player_speed: f32,
    pub player_lives: u32,
    pub projectile_speed: f32,
    pub projectile_damage: f32,
    pub projectile_size: f32,
    /// Time-units the burst attack needs to recharge
    pub burst_cooldown: f32,

    // Enemies
    pub enemy_size: f32,
    pub enemy_health: f32,
    pub enemy_contact_damage: f32,
    pub enemy_shot_speed: f32,
    pub enemy_shot_damage: f32,
    pub enemy_shot_size: f32,
    /// Seconds between aimed shots for shooter enemies
    pub enemy_shoot_interval: f32,
    /// Distance from the player at which wave batches materialize
    pub enemy_spawn_radius: f32,

    // Waves
    /// Seconds between spawn batches
    pub wave_interval: f32,
    /// Escalation table, indexed by the 1-based level counter
    pub levels: Vec<LevelEntry>,

    // Power-ups
    pub pickup_size: f32,
    pub heal_amount: f32,
    pub speed_bonus: f32,
    pub damage_bonus: f32,
    /// Seconds a timed effect lasts; picking up the same kind again
    /// refreshes the timer
    pub effect_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena: Vec2::new(640.0, 480.0),

            player_size: 32.0,
            player_health: 100.0,
            player_speed: 5.0,
            player_lives: 3,
            projectile_speed: 10.0,
            projectile_damage: 10.0,
            projectile_size: 10.0,
            burst_cooldown: 30.0,

            enemy_size: 32.0,
            enemy_health: 100.0,
            enemy_contact_damage: 25.0,
            enemy_shot_speed: 6.0,
            enemy_shot_damage: 10.0,
            enemy_shot_size: 10.0,
            enemy_shoot_interval: 2.5,
            enemy_spawn_radius: 700.0,

            wave_interval: 5.0,
            levels: vec![
                LevelEntry { enemy_count: 4, enemy_speed: 2.0 },
                LevelEntry { enemy_count: 6, enemy_speed: 2.5 },
                LevelEntry { enemy_count: 8, enemy_speed: 3.0 },
                LevelEntry { enemy_count: 10, enemy_speed: 3.5 },
                LevelEntry { enemy_count: 12, enemy_speed: 4.0 },
            ],

            pickup_size: 16.0,
            heal_amount: 25.0,
            speed_bonus: 2.0,
            damage_bonus: 10.0,
            effect_duration: 8.0,
        }
    }
}

impl Tuning {
    /// Look up the escalation entry for a 1-based level counter
    ///
    /// Past the end of the table this returns `None`: spawning and
    /// level-ups simply stop, it is not an error.
    pub fn level(&self, level: u32) -> Option<&LevelEntry> {
        if level == 0 {
            return None;
        }
        self.levels.get(level as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_lookup_is_one_based() {
        let tuning = Tuning::default();
        assert_eq!(tuning.level(1).unwrap().enemy_count, 4);
        assert_eq!(tuning.level(5).unwrap().enemy_count, 12);
    }

    #[test]
    fn test_level_lookup_out_of_range() {
        let tuning = Tuning::default();
        assert!(tuning.level(0).is_none());
        assert!(tuning.level(6).is_none());
        assert!(tuning.level(u32::MAX).is_none());
    }
}
