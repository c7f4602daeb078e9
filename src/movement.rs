/// Per-tick movement: player input, firing, entity advance and off-screen
/// pruning.  Each function returns a new `GameState`.

use rand::Rng;

use crate::compute::TickInput;
use crate::config::SimConfig;
use crate::entities::{
    Boss, GameEvent, GameState, Player, Projectile, PROJECTILE_HEIGHT, PROJECTILE_WIDTH,
};
use crate::weapons::SCATTER_OFFSETS;

// ── Player ────────────────────────────────────────────────────────────────────

/// Apply held up/down input, clamped to the canvas.  Up and down together cancel.
pub fn move_player(state: &GameState, input: &TickInput) -> GameState {
    let p = &state.player;
    let mut dy = 0.0;
    if input.up {
        dy -= p.speed;
    }
    if input.down {
        dy += p.speed;
    }
    let max_y = state.height - p.height;
    GameState {
        player: Player {
            y: (p.y + dy).clamp(0.0, max_y),
            ..p.clone()
        },
        ..state.clone()
    }
}

/// Whether the equipped weapon's cooldown has elapsed at `now`.
pub fn fire_ready(state: &GameState, input: &TickInput) -> bool {
    let interval = state.player.weapon.stats().fire_interval;
    match state.last_fire {
        None => true,
        Some(last) => input.now.saturating_sub(last) > interval,
    }
}

/// Fire the equipped weapon.  Two gates apply: the fire input must be a fresh
/// press and the weapon cooldown must have elapsed.  Any held tick latches
/// the input until release, so a press that lands in the cooldown is spent.
pub fn fire(state: &GameState, input: &TickInput, config: &SimConfig, rng: &mut impl Rng) -> GameState {
    if !input.fire {
        return GameState { fire_latched: false, ..state.clone() };
    }
    if state.fire_latched {
        return state.clone();
    }
    if !fire_ready(state, input) {
        return GameState { fire_latched: true, ..state.clone() };
    }

    let weapon = state.player.weapon.stats();
    let p = &state.player;
    let muzzle_x = p.x + p.width;
    let muzzle_y = p.y + p.height / 2.0 - PROJECTILE_HEIGHT / 2.0;
    let offsets: &[f32] = if weapon.scatter { &SCATTER_OFFSETS } else { &[0.0] };

    let mut projectiles = state.projectiles.clone();
    for &dy in offsets {
        projectiles.push(Projectile {
            x: muzzle_x,
            y: muzzle_y + dy,
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            speed: weapon.speed,
            damage: weapon.damage,
            color: weapon.color,
            weapon: weapon.id,
            glitch: rng.gen_bool(config.glitch_chance),
        });
    }

    let mut events = state.events.clone();
    events.push(GameEvent::Fire);
    GameState {
        projectiles,
        last_fire: Some(input.now),
        fire_latched: true,
        events,
        ..state.clone()
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Enemies, hostile bullets and the boss all drift leftward.
pub fn advance_hostiles(state: &GameState) -> GameState {
    let mut next = state.clone();
    for enemy in &mut next.enemies {
        enemy.x -= enemy.speed;
    }
    for bullet in &mut next.enemy_bullets {
        bullet.x -= bullet.speed;
    }
    if let Some(boss) = &mut next.boss {
        boss.x -= boss.speed;
    }
    next
}

/// Stop the boss once it is far enough onto the screen.
pub fn park_boss(state: &GameState, config: &SimConfig) -> GameState {
    match &state.boss {
        Some(boss) if boss.x < config.boss_park_x && boss.speed != 0.0 => GameState {
            boss: Some(Boss { speed: 0.0, ..boss.clone() }),
            ..state.clone()
        },
        _ => state.clone(),
    }
}

/// Rockets travel rightward, except glitched ones which stay put.
pub fn advance_projectiles(state: &GameState) -> GameState {
    let projectiles = state
        .projectiles
        .iter()
        .map(|r| {
            if r.glitch {
                r.clone()
            } else {
                Projectile { x: r.x + r.speed, ..r.clone() }
            }
        })
        .collect();
    GameState { projectiles, ..state.clone() }
}

/// Drop everything that has left the visible x-range.
pub fn prune_offscreen(state: &GameState) -> GameState {
    let width = state.width;
    GameState {
        projectiles: state.projectiles.iter().filter(|r| r.x < width).cloned().collect(),
        enemies: state.enemies.iter().filter(|e| e.x > 0.0).cloned().collect(),
        enemy_bullets: state
            .enemy_bullets
            .iter()
            .filter(|b| b.x > 0.0 && b.x < width)
            .cloned()
            .collect(),
        ..state.clone()
    }
}
