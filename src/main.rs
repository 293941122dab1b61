//! Headless autoplay driver
//!
//! Runs the simulation at the fixed timestep with a scripted pilot so the
//! whole loop can be exercised (and profiled) without a renderer. A real
//! frontend would sample its input devices into a `TickInput` the same
//! way and hand `draw_intents` to its drawing code.

use glam::Vec2;

use blastwave::consts::SIM_DT;
use blastwave::sim::{self, GameState, TickInput, draw_intents, hud};
use blastwave::tuning::Tuning;

/// Ticks to simulate before giving up (10 minutes of game time)
const MAX_TICKS: u64 = 60 * 600;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xB1A57);
    log::info!("starting autoplay run with seed {seed}");

    let mut state = GameState::new(seed, Tuning::default());
    let mut ticks = 0u64;

    while !state.should_close() && ticks < MAX_TICKS {
        let input = pilot(&state, ticks);
        sim::tick(&mut state, &input, SIM_DT);

        // A frontend would consume these; here they just size the frame
        let intents = draw_intents(&state);

        if ticks % 600 == 0 {
            let hud = hud(&state);
            log::info!(
                "t={:.0}s level={} score={} lives={} health={:.0} drawables={}",
                state.game_time,
                hud.level,
                hud.score,
                hud.lives,
                hud.health,
                intents.len()
            );
        }

        if state.phase == sim::GamePhase::GameOver {
            break;
        }
        ticks += 1;
    }

    let hud = hud(&state);
    println!(
        "run finished: {:.1}s survived, level {}, score {}, {} lives left",
        state.game_time, hud.level, hud.score, hud.lives
    );
}

/// Scripted pilot: strafe in a slow circle, shoot the nearest enemy,
/// burst when the swarm gets thick
fn pilot(state: &GameState, ticks: u64) -> TickInput {
    let mut input = TickInput::default();

    // Orbit the arena center to stay away from the walls
    let phase = ticks as f32 * 0.01;
    input.move_right = phase.cos() > 0.0;
    input.move_left = phase.cos() < -0.5;
    input.move_down = phase.sin() > 0.0;
    input.move_up = phase.sin() < -0.5;

    let player = state.player.center();
    let nearest = state
        .enemies
        .iter()
        .map(|e| e.center())
        .min_by(|a, b| {
            a.distance_squared(player)
                .partial_cmp(&b.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(target) = nearest {
        input.aim = target;
        input.fire = ticks % 6 == 0;
        input.burst = state.enemies.len() >= 8 && state.player.burst_cooldown <= 0.0;
    } else {
        input.aim = Vec2::ZERO;
    }

    input
}
