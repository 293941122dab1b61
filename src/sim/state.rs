//! Game state and core simulation types
//!
//! Everything the session owns lives here: the player, the live entity
//! collections, timers and the phase machine. One `GameState` is updated
//! serially once per tick; nothing is shared across mutators.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Clock stopped, every entity frozen in place
    Paused,
    /// Lives exhausted; only restart and quit are accepted
    GameOver,
    /// Terminal; the host should tear down the frame loop
    Closing,
}

/// The player-controlled square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub health: f32,
    /// Pixels per tick
    pub speed: f32,
    pub projectile_damage: f32,
    pub lives: u32,
    /// Time-units until the burst attack is ready again
    pub burst_cooldown: f32,
}

impl Player {
    /// Spawn at arena center with tuning defaults
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: (tuning.arena - Vec2::splat(tuning.player_size)) / 2.0,
            size: tuning.player_size,
            health: tuning.player_health,
            speed: tuning.player_speed,
            projectile_damage: tuning.projectile_damage,
            lives: tuning.player_lives,
            burst_cooldown: 0.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

/// A pursuing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub health: f32,
    /// Pixels per tick, scaled by the level it spawned at
    pub speed: f32,
    /// Damage dealt to the player when the enemy reaches it
    pub contact_damage: f32,
    /// Shooter enemies fire aimed projectiles on a cooldown
    pub can_shoot: bool,
    pub shoot_cooldown: f32,
}

impl Enemy {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn health_fraction(&self, tuning: &Tuning) -> f32 {
        (self.health / tuning.enemy_health).clamp(0.0, 1.0)
    }
}

/// A straight-line projectile
///
/// Direction is a unit vector fixed at spawn. `active` goes false the
/// moment the projectile leaves the arena or is consumed by a hit;
/// inactive projectiles never collide or draw again and are compacted out
/// at the end of the frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Top-left corner
    pub pos: Vec2,
    /// Unit direction
    pub dir: Vec2,
    /// Pixels per tick
    pub speed: f32,
    pub damage: f32,
    pub size: f32,
    pub active: bool,
}

impl Projectile {
    /// Spawn centered on `center`, travelling along unit vector `dir`
    pub fn new(center: Vec2, dir: Vec2, speed: f32, damage: f32, size: f32) -> Self {
        Self {
            pos: center - Vec2::splat(size / 2.0),
            dir,
            speed,
            damage,
            size,
            active: true,
        }
    }

    /// Constant-velocity advance, one tick
    pub fn advance(&mut self) {
        self.pos += self.dir * self.speed;
    }

    /// True while the projectile box overlaps the arena rectangle
    pub fn in_arena(&self, arena: Vec2) -> bool {
        self.pos.x + self.size >= 0.0
            && self.pos.x <= arena.x
            && self.pos.y + self.size >= 0.0
            && self.pos.y <= arena.y
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Instant heal, clamped at max health
    Health,
    /// Timed movement speed bonus
    Speed,
    /// Timed projectile damage bonus
    Damage,
    /// Instantly recharges the burst attack
    Burst,
}

impl PickupKind {
    pub const ALL: [PickupKind; 4] = [
        PickupKind::Health,
        PickupKind::Speed,
        PickupKind::Damage,
        PickupKind::Burst,
    ];
}

/// A positional power-up, consumed once on contact with the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
}

/// A timed stat modification; the delta is reverted when `remaining`
/// crosses zero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: PickupKind,
    pub remaining: f32,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// 1-based level counter; monotonically increasing
    pub level: u32,
    /// Kills toward the current level's target
    pub enemies_killed: u32,
    pub score: u64,
    /// Accumulated running time, stops while paused
    pub game_time: f32,
    /// Accumulates toward the next spawn batch
    pub wave_timer: f32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub player_shots: Vec<Projectile>,
    pub enemy_shots: Vec<Projectile>,
    pub pickups: Vec<Pickup>,
    pub effects: Vec<ActiveEffect>,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new session with the given seed and balance
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            level: 1,
            enemies_killed: 0,
            score: 0,
            game_time: 0.0,
            // Saturated so the first batch spawns on the first tick
            wave_timer: tuning.wave_interval,
            player: Player::new(&tuning),
            enemies: Vec::new(),
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            pickups: Vec::new(),
            effects: Vec::new(),
            tuning,
        }
    }

    /// Wholesale restart: collections cleared, counters zeroed, player
    /// stats back to tuning defaults. Keeps the seed so a restarted run
    /// replays the same randomness.
    pub fn reset(&mut self) {
        *self = GameState::new(self.seed, self.tuning.clone());
    }

    pub fn should_close(&self) -> bool {
        self.phase == GamePhase::Closing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_running_and_empty() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.level, 1);
        assert!(state.enemies.is_empty());
        assert!(state.player_shots.is_empty());
        assert_eq!(state.player.lives, 3);
        assert_eq!(state.player.health, 100.0);
    }

    #[test]
    fn test_player_spawns_centered() {
        let tuning = Tuning::default();
        let state = GameState::new(7, tuning.clone());
        let center = state.player.center();
        assert_eq!(center, tuning.arena / 2.0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = GameState::new(7, Tuning::default());
        state.score = 500;
        state.level = 3;
        state.player.health = 1.0;
        state.player.lives = 1;
        state.enemies.push(Enemy {
            pos: Vec2::ZERO,
            size: 32.0,
            health: 100.0,
            speed: 2.0,
            contact_damage: 25.0,
            can_shoot: false,
            shoot_cooldown: 0.0,
        });
        state.phase = GamePhase::GameOver;

        state.reset();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.lives, 3);
        assert_eq!(state.player.health, 100.0);
    }

    #[test]
    fn test_projectile_arena_exit() {
        let arena = Vec2::new(640.0, 480.0);
        let mut shot = Projectile::new(Vec2::new(635.0, 100.0), Vec2::X, 10.0, 10.0, 10.0);
        assert!(shot.in_arena(arena));
        shot.advance();
        shot.advance();
        assert!(!shot.in_arena(arena));
    }
}
