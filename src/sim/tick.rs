//! Per-tick simulation update
//!
//! One call to [`tick`] advances the session by one frame. Subsystems run
//! in a fixed order: player input/move/fire, enemy pursuit and shooting,
//! projectile advance, collision resolution, timed-effect decay, wave
//! spawning, projectile compaction. The order is load-bearing: it decides
//! tie-breaks like "an enemy consumed on contact never also shoots".

use glam::Vec2;
use rand::Rng;

use super::collision::resolve_collisions;
use super::effects;
use super::state::{Enemy, GamePhase, GameState, Projectile};
use crate::consts::BURST_SHOT_COUNT;

/// Input snapshot for a single tick
///
/// The host samples its event source once per frame and hands the result
/// over; `fire`, `burst`, `pause`, `restart` and `quit` are edge-triggered
/// (true only on the frame the command was issued).
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Fire one aimed projectile
    pub fire: bool,
    /// Fire the radial burst if off cooldown
    pub burst: bool,
    /// Aim target in arena coordinates (pointer position)
    pub aim: Vec2,
    /// Pause toggle
    pub pause: bool,
    /// Restart from game over
    pub restart: bool,
    /// Quit the session
    pub quit: bool,
}

/// Advance the session by one tick
///
/// `dt` is the elapsed time since the previous tick in seconds, used for
/// all timers and cooldowns. Movement advances in pixels per tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.quit {
        state.phase = GamePhase::Closing;
    }

    match state.phase {
        GamePhase::Closing => return,
        GamePhase::GameOver => {
            if input.restart {
                state.reset();
                log::info!("session restarted");
            }
            return;
        }
        GamePhase::Running | GamePhase::Paused => {
            if input.pause {
                state.phase = if state.phase == GamePhase::Running {
                    GamePhase::Paused
                } else {
                    GamePhase::Running
                };
            }
        }
    }

    // Frozen: no clock, no movement, no timers
    if state.phase != GamePhase::Running {
        return;
    }

    state.game_time += dt;

    update_player(state, input, dt);
    update_enemies(state, dt);
    update_projectiles(state);
    resolve_collisions(state);
    if state.phase == GamePhase::GameOver {
        // Lives ran out mid-pass; the frame ends here and every
        // subsystem stays frozen until restart
        compact_projectiles(state);
        return;
    }
    effects::update_effects(state, dt);
    update_waves(state, dt);
    compact_projectiles(state);
}

/// Player movement, boundary wrap, firing and burst cooldown
fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let mut dir = Vec2::ZERO;
    if input.move_up {
        dir.y -= 1.0;
    }
    if input.move_down {
        dir.y += 1.0;
    }
    if input.move_left {
        dir.x -= 1.0;
    }
    if input.move_right {
        dir.x += 1.0;
    }

    // Normalized sum: diagonal displacement equals axial displacement
    let speed = state.player.speed;
    state.player.pos += dir.normalize_or_zero() * speed;
    wrap_position(&mut state.player.pos, state.tuning.arena);

    if state.player.burst_cooldown > 0.0 {
        state.player.burst_cooldown = (state.player.burst_cooldown - dt).max(0.0);
    }

    if input.fire {
        fire_at(state, input.aim);
    }
    if input.burst {
        fire_burst(state);
    }
}

/// Teleport a coordinate that crossed a bound to the opposite edge
fn wrap_position(pos: &mut Vec2, arena: Vec2) {
    if pos.x < 0.0 {
        pos.x = arena.x;
    } else if pos.x > arena.x {
        pos.x = 0.0;
    }
    if pos.y < 0.0 {
        pos.y = arena.y;
    } else if pos.y > arena.y {
        pos.y = 0.0;
    }
}

/// Spawn one aimed projectile from the player center
///
/// An aim target exactly on the player center has no direction; the shot
/// is skipped rather than spawning a NaN projectile.
fn fire_at(state: &mut GameState, aim: Vec2) {
    let origin = state.player.center();
    let dir = (aim - origin).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    state.player_shots.push(Projectile::new(
        origin,
        dir,
        state.tuning.projectile_speed,
        state.player.projectile_damage,
        state.tuning.projectile_size,
    ));
}

/// Radial burst: one projectile every 10 degrees, then a fixed cooldown
fn fire_burst(state: &mut GameState) {
    if state.player.burst_cooldown > 0.0 {
        return;
    }
    let origin = state.player.center();
    for i in 0..BURST_SHOT_COUNT {
        let angle = (i as f32) * std::f32::consts::TAU / BURST_SHOT_COUNT as f32;
        let dir = Vec2::new(angle.cos(), angle.sin());
        state.player_shots.push(Projectile::new(
            origin,
            dir,
            state.tuning.projectile_speed,
            state.player.projectile_damage,
            state.tuning.projectile_size,
        ));
    }
    state.player.burst_cooldown = state.tuning.burst_cooldown;
}

/// Pure pursuit toward the player's current position, plus ranged attacks
fn update_enemies(state: &mut GameState, dt: f32) {
    let target = state.player.center();
    let arena = state.tuning.arena;
    let mut shots = Vec::new();

    for enemy in &mut state.enemies {
        // Zero distance has no direction; the enemy holds still this tick
        let dir = (target - enemy.center()).normalize_or_zero();
        enemy.pos += dir * enemy.speed;

        if !enemy.can_shoot {
            continue;
        }
        enemy.shoot_cooldown = (enemy.shoot_cooldown - dt).max(0.0);
        if enemy.shoot_cooldown > 0.0 {
            continue;
        }
        // Enemies walking in from the spawn annulus hold fire until they
        // are inside the arena, where their shots can actually live
        let center = enemy.center();
        let inside = center.x >= 0.0 && center.x <= arena.x && center.y >= 0.0 && center.y <= arena.y;
        if !inside {
            continue;
        }
        let dir = (target - center).normalize_or_zero();
        if dir != Vec2::ZERO {
            shots.push(Projectile::new(
                center,
                dir,
                state.tuning.enemy_shot_speed,
                state.tuning.enemy_shot_damage,
                state.tuning.enemy_shot_size,
            ));
        }
        enemy.shoot_cooldown = state.tuning.enemy_shoot_interval;
    }

    state.enemy_shots.extend(shots);
}

/// Advance all projectiles and deactivate those that left the arena
fn update_projectiles(state: &mut GameState) {
    let arena = state.tuning.arena;
    for shot in state
        .player_shots
        .iter_mut()
        .chain(state.enemy_shots.iter_mut())
    {
        if !shot.active {
            continue;
        }
        shot.advance();
        if !shot.in_arena(arena) {
            shot.active = false;
        }
    }
}

/// Timer-driven spawn escalation
///
/// When the wave timer crosses the interval, a batch sized and
/// speed-scaled by the current level's table entry materializes on an
/// annulus around the player. The batch is skipped when the live enemy
/// count already meets the level target, and silently skipped when the
/// level counter has run past the table.
fn update_waves(state: &mut GameState, dt: f32) {
    state.wave_timer += dt;
    if state.wave_timer < state.tuning.wave_interval {
        return;
    }
    state.wave_timer = 0.0;

    let Some(entry) = state.tuning.level(state.level).copied() else {
        return;
    };
    if state.enemies.len() as u32 >= entry.enemy_count {
        return;
    }

    let origin = state.player.center();
    let spawn_radius = state.tuning.enemy_spawn_radius;
    for i in 0..entry.enemy_count {
        let base = (i as f32) * std::f32::consts::TAU / entry.enemy_count as f32;
        let jitter: f32 = state.rng.random_range(-0.2..0.2);
        let angle = base + jitter;
        let center = origin + Vec2::new(angle.cos(), angle.sin()) * spawn_radius;
        state.enemies.push(Enemy {
            pos: center - Vec2::splat(state.tuning.enemy_size / 2.0),
            size: state.tuning.enemy_size,
            health: state.tuning.enemy_health,
            speed: entry.enemy_speed,
            contact_damage: state.tuning.enemy_contact_damage,
            // From level 2 on, every second enemy in a batch is a shooter
            can_shoot: state.level >= 2 && i % 2 == 1,
            shoot_cooldown: state.tuning.enemy_shoot_interval,
        });
    }

    log::info!(
        "wave spawned: level {} count {} speed {}",
        state.level,
        entry.enemy_count,
        entry.enemy_speed
    );
}

/// Prune consumed and out-of-bounds projectiles (stable order not needed)
fn compact_projectiles(state: &mut GameState) {
    state.player_shots.retain(|s| s.active);
    state.enemy_shots.retain(|s| s.active);
}
