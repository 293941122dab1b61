//! Power-up application and timed-effect expiry
//!
//! Health and Burst pickups apply instantly and need no reversal. Speed
//! and Damage are timed: the stat delta is applied once when the effect
//! arms and reverted exactly once when its timer crosses zero. Picking up
//! the same kind while it is active refreshes the timer instead of
//! stacking the delta.

use super::state::{ActiveEffect, GameState, PickupKind};

/// Apply a collected pickup to the player
pub fn apply_pickup(state: &mut GameState, kind: PickupKind) {
    match kind {
        PickupKind::Health => {
            state.player.health =
                (state.player.health + state.tuning.heal_amount).min(state.tuning.player_health);
        }
        PickupKind::Burst => {
            state.player.burst_cooldown = 0.0;
        }
        PickupKind::Speed | PickupKind::Damage => arm_timed(state, kind),
    }
    log::debug!("pickup applied: {kind:?}");
}

/// Arm a timed effect, or refresh its timer if already active
fn arm_timed(state: &mut GameState, kind: PickupKind) {
    let duration = state.tuning.effect_duration;
    if let Some(effect) = state.effects.iter_mut().find(|e| e.kind == kind) {
        effect.remaining = duration;
        return;
    }
    match kind {
        PickupKind::Speed => state.player.speed += state.tuning.speed_bonus,
        PickupKind::Damage => state.player.projectile_damage += state.tuning.damage_bonus,
        _ => {}
    }
    state.effects.push(ActiveEffect { kind, remaining: duration });
}

/// Decay all timed effects by the elapsed tick time, reverting expired ones
pub fn update_effects(state: &mut GameState, dt: f32) {
    let mut i = 0;
    while i < state.effects.len() {
        state.effects[i].remaining -= dt;
        if state.effects[i].remaining <= 0.0 {
            let expired = state.effects.swap_remove(i);
            revert(state, expired.kind);
        } else {
            i += 1;
        }
    }
}

fn revert(state: &mut GameState, kind: PickupKind) {
    match kind {
        PickupKind::Speed => state.player.speed -= state.tuning.speed_bonus,
        PickupKind::Damage => state.player.projectile_damage -= state.tuning.damage_bonus,
        _ => {}
    }
    log::debug!("effect expired: {kind:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn new_state() -> GameState {
        GameState::new(42, Tuning::default())
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut state = new_state();
        state.player.health = 90.0;
        apply_pickup(&mut state, PickupKind::Health);
        assert_eq!(state.player.health, 100.0);
    }

    #[test]
    fn test_burst_pickup_resets_cooldown() {
        let mut state = new_state();
        state.player.burst_cooldown = 12.0;
        apply_pickup(&mut state, PickupKind::Burst);
        assert_eq!(state.player.burst_cooldown, 0.0);
    }

    #[test]
    fn test_speed_boost_applies_and_reverts_once() {
        let mut state = new_state();
        let base = state.player.speed;
        let duration = state.tuning.effect_duration;
        apply_pickup(&mut state, PickupKind::Speed);
        assert_eq!(state.player.speed, base + 2.0);

        // Decay just past the duration: reverted exactly once
        update_effects(&mut state, duration + 0.1);
        assert_eq!(state.player.speed, base);
        assert!(state.effects.is_empty());

        update_effects(&mut state, 10.0);
        assert_eq!(state.player.speed, base);
    }

    #[test]
    fn test_same_kind_refreshes_instead_of_stacking() {
        let mut state = new_state();
        let base = state.player.speed;
        apply_pickup(&mut state, PickupKind::Speed);
        update_effects(&mut state, 6.0);

        // Second pickup: delta unchanged, timer back to full
        apply_pickup(&mut state, PickupKind::Speed);
        assert_eq!(state.player.speed, base + 2.0);
        assert_eq!(state.effects.len(), 1);
        assert_eq!(state.effects[0].remaining, state.tuning.effect_duration);
    }

    #[test]
    fn test_different_kinds_stack_independently() {
        let mut state = new_state();
        let base_speed = state.player.speed;
        let base_damage = state.player.projectile_damage;
        let duration = state.tuning.effect_duration;
        apply_pickup(&mut state, PickupKind::Speed);
        apply_pickup(&mut state, PickupKind::Damage);
        assert_eq!(state.effects.len(), 2);
        assert_eq!(state.player.speed, base_speed + 2.0);
        assert_eq!(state.player.projectile_damage, base_damage + 10.0);

        update_effects(&mut state, duration + 0.1);
        assert_eq!(state.player.speed, base_speed);
        assert_eq!(state.player.projectile_damage, base_damage);
        assert!(state.effects.is_empty());
    }

    #[test]
    fn test_partial_decay_keeps_effect() {
        let mut state = new_state();
        apply_pickup(&mut state, PickupKind::Damage);
        update_effects(&mut state, 3.0);
        assert_eq!(state.effects.len(), 1);
        assert!((state.effects[0].remaining - 5.0).abs() < 1e-5);
    }
}
