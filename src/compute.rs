/// Simulation step orchestrator.
///
/// `tick` takes an immutable reference to the current `GameState` (plus the
/// input snapshot, tuning and an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG and logging.

use std::time::Duration;

use log::info;
use rand::Rng;

use crate::collision::resolve_collisions;
use crate::config::SimConfig;
use crate::entities::{GameMode, GameState, Player};
use crate::movement::{
    advance_hostiles, advance_projectiles, fire, move_player, park_boss, prune_offscreen,
};
use crate::spawner::{boss_shoot, enemies_shoot, spawn_boss_if_due, spawn_enemy};

/// Input snapshot for one tick, read by the host just before stepping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub pause: bool,
    /// Monotonic clock reading, used only by the weapon cooldown.
    pub now: Duration,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh state sitting at the main menu.
pub fn init_state(config: &SimConfig) -> GameState {
    GameState {
        mode: GameMode::MainMenu,
        score: 0,
        level: 1,
        boss_spawned: false,
        last_fire: None,
        fire_latched: false,
        player: Player::new(config.player_health),
        projectiles: Vec::new(),
        enemies: Vec::new(),
        enemy_bullets: Vec::new(),
        boss: None,
        events: Vec::new(),
        frame: 0,
        width: config.width,
        height: config.height,
    }
}

/// Back to initial values, keeping the current mode.  Callers decide which
/// mode the reset run starts in.
pub fn reset(state: &GameState, config: &SimConfig) -> GameState {
    GameState {
        mode: state.mode,
        ..init_state(config)
    }
}

// ── Per-frame tick ──────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  Only `Playing` advances; in every
/// other mode the state comes back unchanged apart from an empty event list.
pub fn tick(
    state: &GameState,
    input: &TickInput,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> GameState {
    if state.mode != GameMode::Playing {
        return GameState { events: Vec::new(), ..state.clone() };
    }

    let s = GameState {
        events: Vec::new(),
        frame: state.frame + 1,
        ..state.clone()
    };

    // ── 1. Player input ──────────────────────────────────────────────────────
    let s = move_player(&s, input);
    let s = fire(&s, input, config, rng);

    // ── 2. Spawner ───────────────────────────────────────────────────────────
    let s = spawn_enemy(&s, config, rng);
    let s = enemies_shoot(&s, config, rng);
    let s = boss_shoot(&s, config, rng);

    // ── 3. Hostile movement, boss parking, boss arrival ──────────────────────
    let s = advance_hostiles(&s);
    let s = park_boss(&s, config);
    let s = spawn_boss_if_due(&s, config);

    // ── 4. Rockets, pruning, collisions ─────────────────────────────────────
    let s = advance_projectiles(&s);
    let s = prune_offscreen(&s);
    let mut s = resolve_collisions(&s, config);

    // ── 5. Pause request, honoured after the frame's work is done ───────────
    if input.pause && s.mode == GameMode::Playing {
        info!("paused at frame {}", s.frame);
        s.mode = GameMode::Paused;
    }
    s
}
