/// Enemy, bullet and boss creation.
///
/// Every chance is a plain per-tick Bernoulli draw from the injected RNG,
/// so the expected rate follows the host's tick rate.

use log::info;
use rand::Rng;

use crate::config::SimConfig;
use crate::entities::{
    Boss, Enemy, EnemyBullet, EnemyKind, GameEvent, GameState, BOSS_SIZE, ENEMY_SIZE,
};

/// Possibly add one enemy at the right edge.  Suppressed while a boss is out.
pub fn spawn_enemy(state: &GameState, config: &SimConfig, rng: &mut impl Rng) -> GameState {
    if state.boss.is_some() || !rng.gen_bool(config.enemy_spawn_chance) {
        return state.clone();
    }
    let y = rng.gen::<f32>() * (state.height - ENEMY_SIZE);
    let kind = if rng.gen_bool(config.shooter_chance) {
        EnemyKind::Shooter
    } else {
        EnemyKind::Normal
    };
    let mut enemies = state.enemies.clone();
    enemies.push(Enemy::new(state.width, y, kind));
    GameState { enemies, ..state.clone() }
}

/// Each shooter gets its own draw; a hit fires from its centre-left point.
pub fn enemies_shoot(state: &GameState, config: &SimConfig, rng: &mut impl Rng) -> GameState {
    let mut enemy_bullets = state.enemy_bullets.clone();
    for enemy in state.enemies.iter().filter(|e| e.kind == EnemyKind::Shooter) {
        if rng.gen_bool(config.enemy_fire_chance) {
            enemy_bullets.push(EnemyBullet::from_enemy(enemy.x, enemy.y + enemy.height / 2.0));
        }
    }
    GameState { enemy_bullets, ..state.clone() }
}

pub fn boss_shoot(state: &GameState, config: &SimConfig, rng: &mut impl Rng) -> GameState {
    let Some(boss) = &state.boss else {
        return state.clone();
    };
    if !rng.gen_bool(config.boss_fire_chance) {
        return state.clone();
    }
    let mut enemy_bullets = state.enemy_bullets.clone();
    enemy_bullets.push(EnemyBullet::from_boss(boss.x, boss.y + boss.height / 2.0));
    GameState { enemy_bullets, ..state.clone() }
}

/// Summon a boss when none is out, none has come this level, and the score
/// has reached `boss_score`.  Arrival advances the level.
pub fn spawn_boss_if_due(state: &GameState, config: &SimConfig) -> GameState {
    if state.boss_spawned || state.boss.is_some() || state.score < config.boss_score {
        return state.clone();
    }
    let boss = Boss::new(state.width, state.height / 2.0 - BOSS_SIZE / 2.0, config.boss_health);
    let level = state.level + 1;
    info!("boss arrives at score {}, level {} -> {}", state.score, state.level, level);

    let mut events = state.events.clone();
    events.push(GameEvent::BossSpawned { level });
    GameState {
        boss: Some(boss),
        boss_spawned: true,
        level,
        events,
        ..state.clone()
    }
}
