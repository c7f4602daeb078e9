/// Collision detection and resolution.
///
/// `resolve_collisions` is a pure function of the incoming state.  Each phase
/// marks what it consumes in one pass and removes it afterwards, so no entity
/// takes part in more than one removal per tick.

use log::info;

use crate::config::SimConfig;
use crate::entities::{Bounds, GameEvent, GameMode, GameState};

/// Strict AABB intersection.  Boxes that only share an edge do not overlap.
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}

/// Knock one point off the player.  The GameOver transition happens on the
/// hit that reaches zero and only while still playing, so it fires once.
fn hurt_player(state: &mut GameState) {
    state.player.health = state.player.health.saturating_sub(1);
    state.events.push(GameEvent::PlayerHurt);
    if state.player.health == 0 && state.mode == GameMode::Playing {
        info!("player destroyed at score {}, level {}", state.score, state.level);
        state.mode = GameMode::GameOver;
        state.events.push(GameEvent::GameOver);
    }
}

/// Keep the elements whose flag is false.
fn retain_unmarked<T>(items: Vec<T>, removed: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(removed)
        .filter(|&(_, &gone)| !gone)
        .map(|(item, _)| item)
        .collect()
}

/// Run every collision phase, in order:
/// player×enemy, enemy×projectile, player×bullet, player×boss, boss×projectile.
pub fn resolve_collisions(state: &GameState, config: &SimConfig) -> GameState {
    let mut next = state.clone();
    player_vs_enemies(&mut next);
    enemies_vs_projectiles(&mut next, config);
    player_vs_bullets(&mut next);
    player_vs_boss(&mut next);
    boss_vs_projectiles(&mut next, config);
    next
}

// ── Phases ────────────────────────────────────────────────────────────────────

fn player_vs_enemies(state: &mut GameState) {
    let player = state.player.bounds();
    let hits: Vec<bool> = state
        .enemies
        .iter()
        .map(|e| overlaps(&player, &e.bounds()))
        .collect();
    for _ in hits.iter().filter(|&&hit| hit) {
        hurt_player(state);
    }
    state.enemies = retain_unmarked(std::mem::take(&mut state.enemies), &hits);
}

/// Each enemy takes the first unused rocket that overlaps it.
fn enemies_vs_projectiles(state: &mut GameState, config: &SimConfig) {
    let mut dead_enemies = vec![false; state.enemies.len()];
    let mut used_rockets = vec![false; state.projectiles.len()];

    for (ei, enemy) in state.enemies.iter().enumerate() {
        let eb = enemy.bounds();
        let hit = state
            .projectiles
            .iter()
            .enumerate()
            .find(|(ri, r)| !used_rockets[*ri] && overlaps(&eb, &r.bounds()));
        if let Some((ri, _)) = hit {
            dead_enemies[ei] = true;
            used_rockets[ri] = true;
        }
    }

    let kills = dead_enemies.iter().filter(|&&dead| dead).count();
    for _ in 0..kills {
        state.score = state.score.saturating_add(config.kill_score);
        state.events.push(GameEvent::EnemyHit);
    }
    state.enemies = retain_unmarked(std::mem::take(&mut state.enemies), &dead_enemies);
    state.projectiles = retain_unmarked(std::mem::take(&mut state.projectiles), &used_rockets);
}

fn player_vs_bullets(state: &mut GameState) {
    let player = state.player.bounds();
    let hits: Vec<bool> = state
        .enemy_bullets
        .iter()
        .map(|b| overlaps(&player, &b.bounds()))
        .collect();
    for _ in hits.iter().filter(|&&hit| hit) {
        hurt_player(state);
    }
    state.enemy_bullets = retain_unmarked(std::mem::take(&mut state.enemy_bullets), &hits);
}

/// Ramming the boss hurts the player but leaves the boss in place.
fn player_vs_boss(state: &mut GameState) {
    let touching = state
        .boss
        .as_ref()
        .is_some_and(|boss| overlaps(&state.player.bounds(), &boss.bounds()));
    if touching {
        hurt_player(state);
    }
}

/// Each overlapping rocket chips one point off the boss.  Rockets that
/// arrive after the killing blow are left alone.
fn boss_vs_projectiles(state: &mut GameState, config: &SimConfig) {
    let Some(mut boss) = state.boss.take() else {
        return;
    };
    let bb = boss.bounds();
    let mut used = vec![false; state.projectiles.len()];
    let mut defeated = false;

    for (ri, rocket) in state.projectiles.iter().enumerate() {
        if defeated {
            break;
        }
        if overlaps(&bb, &rocket.bounds()) {
            used[ri] = true;
            boss.health = boss.health.saturating_sub(1);
            state.events.push(GameEvent::BossHit);
            defeated = boss.health == 0;
        }
    }
    state.projectiles = retain_unmarked(std::mem::take(&mut state.projectiles), &used);

    if defeated {
        info!("boss defeated at level {}", state.level);
        state.boss_spawned = false;
        state.score = state.score.saturating_add(config.kill_score);
        state.events.push(GameEvent::BossDefeated);
    } else {
        state.boss = Some(boss);
    }
}
