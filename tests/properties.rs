//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use blastwave::consts::SIM_DT;
use blastwave::sim::{GameState, TickInput, tick};
use blastwave::tuning::Tuning;

/// A fresh session whose wave timer will stay quiet during the test
fn quiet_state(seed: u64) -> GameState {
    let mut state = GameState::new(seed, Tuning::default());
    state.wave_timer = 0.0;
    state
}

proptest! {
    /// Any combination of move intents displaces the player by exactly
    /// the configured speed, or not at all when the intents cancel out
    #[test]
    fn diagonal_movement_magnitude(
        up in any::<bool>(),
        down in any::<bool>(),
        left in any::<bool>(),
        right in any::<bool>(),
    ) {
        let mut state = quiet_state(1);
        let start = state.player.pos;
        let input = TickInput {
            move_up: up,
            move_down: down,
            move_left: left,
            move_right: right,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        let moved = (state.player.pos - start).length();
        let any_axis = (up != down) || (left != right);
        if any_axis {
            prop_assert!((moved - state.tuning.player_speed).abs() < 1e-3);
        } else {
            prop_assert!(moved < 1e-6);
        }
    }

    /// Every spawned projectile direction is a unit vector, for any
    /// off-center aim target in the arena
    #[test]
    fn projectile_direction_is_normalized(
        x in 0.0f32..640.0,
        y in 0.0f32..480.0,
    ) {
        let mut state = quiet_state(2);
        prop_assume!(Vec2::new(x, y).distance(state.player.center()) > 0.5);

        let input = TickInput {
            fire: true,
            aim: Vec2::new(x, y),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        prop_assert_eq!(state.player_shots.len(), 1);
        let len = state.player_shots[0].dir.length();
        prop_assert!((len - 1.0).abs() < 1e-4);
    }

    /// The burst cooldown decays by exactly the elapsed time and never
    /// goes negative, whatever the tick lengths are
    #[test]
    fn burst_cooldown_monotone_and_clamped(
        dts in prop::collection::vec(0.001f32..0.5, 1..200),
    ) {
        let mut state = quiet_state(3);
        let burst = TickInput { burst: true, ..Default::default() };
        tick(&mut state, &burst, SIM_DT);
        let mut expected = state.player.burst_cooldown;

        for dt in dts {
            tick(&mut state, &TickInput::default(), dt);
            expected = (expected - dt).max(0.0);
            prop_assert!(state.player.burst_cooldown >= 0.0);
            prop_assert!((state.player.burst_cooldown - expected).abs() < 1e-3);
        }
    }

    /// Ticking never panics and never leaves dead projectiles behind,
    /// for arbitrary input streams
    #[test]
    fn tick_keeps_collections_compacted(
        seeds in prop::collection::vec(any::<u8>(), 1..60),
    ) {
        let mut state = GameState::new(4, Tuning::default());
        for (i, byte) in seeds.iter().enumerate() {
            let input = TickInput {
                move_up: byte & 1 != 0,
                move_down: byte & 2 != 0,
                move_left: byte & 4 != 0,
                move_right: byte & 8 != 0,
                fire: byte & 16 != 0,
                burst: byte & 32 != 0,
                aim: Vec2::new((i as f32 * 37.0) % 640.0, (i as f32 * 53.0) % 480.0),
                ..Default::default()
            };
            tick(&mut state, &input, SIM_DT);
            prop_assert!(state.player_shots.iter().all(|s| s.active));
            prop_assert!(state.enemy_shots.iter().all(|s| s.active));
        }
    }
}
