//! Pairwise collision resolution
//!
//! Box overlap with each entity's position as top-left corner and its size
//! as extent. The four passes run in a fixed order; player death is
//! handled inline in whichever pass detects it, so later passes in the
//! same frame already see the post-reset health and can never
//! double-decrement lives.
//!
//! Removal while scanning is structural: enemies and pickups use
//! index-rewind loops (`swap_remove` without advancing the index),
//! projectiles flip their active flag and are compacted after the frame.
//! Nothing here can skip or double-process an entry.

use glam::Vec2;
use rand::Rng;

use super::effects;
use super::state::{GamePhase, GameState, Pickup, PickupKind};

/// Score awarded per enemy kill
const KILL_SCORE: u64 = 10;

/// Axis-aligned box overlap (top-left corner + square extent)
pub fn aabb_overlap(pos_a: Vec2, size_a: f32, pos_b: Vec2, size_b: f32) -> bool {
    pos_a.x < pos_b.x + size_b
        && pos_b.x < pos_a.x + size_a
        && pos_a.y < pos_b.y + size_b
        && pos_b.y < pos_a.y + size_a
}

/// Run all four collision passes for the frame
pub fn resolve_collisions(state: &mut GameState) {
    contact_pass(state);
    player_shot_pass(state);
    enemy_shot_pass(state);
    pickup_pass(state);
}

/// Pass 1: player vs enemies
///
/// An enemy that reaches the player is consumed on contact; it deals its
/// contact damage once and never survives to deal it again.
fn contact_pass(state: &mut GameState) {
    let mut i = 0;
    while i < state.enemies.len() {
        let enemy = &state.enemies[i];
        if aabb_overlap(state.player.pos, state.player.size, enemy.pos, enemy.size) {
            let damage = enemy.contact_damage;
            state.enemies.swap_remove(i);
            damage_player(state, damage);
        } else {
            i += 1;
        }
    }
}

/// Pass 2: player-fired projectiles vs surviving enemies
///
/// A projectile is consumed by its first hit. A kill removes the enemy,
/// advances the kill counter, drops a pickup at the kill position and
/// checks the level target inline.
fn player_shot_pass(state: &mut GameState) {
    let mut si = 0;
    'shots: while si < state.player_shots.len() {
        if !state.player_shots[si].active {
            si += 1;
            continue;
        }
        let (shot_pos, shot_size, shot_damage) = {
            let shot = &state.player_shots[si];
            (shot.pos, shot.size, shot.damage)
        };

        let mut ei = 0;
        while ei < state.enemies.len() {
            let enemy = &mut state.enemies[ei];
            if aabb_overlap(shot_pos, shot_size, enemy.pos, enemy.size) {
                enemy.health = (enemy.health - shot_damage).max(0.0);
                state.player_shots[si].active = false;
                if state.enemies[ei].is_dead() {
                    let killed = state.enemies.swap_remove(ei);
                    on_enemy_killed(state, killed.center());
                }
                si += 1;
                continue 'shots;
            }
            ei += 1;
        }
        si += 1;
    }
}

/// Pass 3: enemy-fired projectiles vs the player
fn enemy_shot_pass(state: &mut GameState) {
    for si in 0..state.enemy_shots.len() {
        let shot = &state.enemy_shots[si];
        if !shot.active {
            continue;
        }
        if aabb_overlap(shot.pos, shot.size, state.player.pos, state.player.size) {
            let damage = shot.damage;
            state.enemy_shots[si].active = false;
            damage_player(state, damage);
        }
    }
}

/// Pass 4: player vs positional power-ups
fn pickup_pass(state: &mut GameState) {
    let mut i = 0;
    while i < state.pickups.len() {
        let pickup = &state.pickups[i];
        if aabb_overlap(state.player.pos, state.player.size, pickup.pos, pickup.size) {
            let collected = state.pickups.swap_remove(i);
            effects::apply_pickup(state, collected.kind);
        } else {
            i += 1;
        }
    }
}

/// Apply damage to the player and handle death inline
///
/// Health is clamped at zero. Dropping to zero costs a life; with lives
/// remaining the health resets to full right here, so the rest of the
/// resolution pass runs against the reset value. At zero lives the
/// session goes to game over.
fn damage_player(state: &mut GameState, amount: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.player.health = (state.player.health - amount).max(0.0);
    if !state.player.is_dead() {
        return;
    }

    state.player.lives = state.player.lives.saturating_sub(1);
    if state.player.lives > 0 {
        state.player.health = state.tuning.player_health;
        log::info!("life lost, {} remaining", state.player.lives);
    } else {
        state.phase = GamePhase::GameOver;
        log::info!("game over at level {} with score {}", state.level, state.score);
    }
}

/// Kill bookkeeping: score, pickup drop, level progression
///
/// Reaching the level's kill target exactly advances one level, zeroes
/// the counter and restores player health and lives to defaults.
fn on_enemy_killed(state: &mut GameState, at: Vec2) {
    state.enemies_killed += 1;
    state.score += KILL_SCORE;

    let kind = PickupKind::ALL[state.rng.random_range(0..PickupKind::ALL.len())];
    state.pickups.push(Pickup {
        kind,
        pos: at - Vec2::splat(state.tuning.pickup_size / 2.0),
        size: state.tuning.pickup_size,
    });

    // A run that already ended this frame stays ended; no level-up may
    // resurrect the stat bar behind the game-over screen
    if state.phase == GamePhase::GameOver {
        return;
    }
    let Some(entry) = state.tuning.level(state.level) else {
        return;
    };
    if state.enemies_killed >= entry.enemy_count {
        state.level += 1;
        state.enemies_killed = 0;
        state.player.health = state.tuning.player_health;
        state.player.lives = state.tuning.player_lives;
        log::info!("level {} reached", state.level);
    }
}
