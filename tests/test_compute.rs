use std::time::Duration;

use side_shooter::compute::*;
use side_shooter::config::SimConfig;
use side_shooter::entities::*;
use side_shooter::weapons::{Color, WeaponId};

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    let mut s = init_state(&SimConfig::default());
    s.mode = GameMode::Playing;
    s
}

fn never() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn idle() -> TickInput {
    TickInput::default()
}

fn rocket(x: f32, y: f32) -> Projectile {
    Projectile {
        x,
        y,
        width: PROJECTILE_WIDTH,
        height: PROJECTILE_HEIGHT,
        speed: 5.0,
        damage: 1,
        color: Color::Yellow,
        weapon: WeaponId::Basic,
        glitch: false,
    }
}

// ── init_state / reset ────────────────────────────────────────────────────────

#[test]
fn init_state_defaults() {
    let s = init_state(&SimConfig::default());
    assert_eq!(s.mode, GameMode::MainMenu);
    assert_eq!(s.score, 0);
    assert_eq!(s.level, 1);
    assert!(!s.boss_spawned);
    assert!(s.boss.is_none());
    assert_eq!(s.last_fire, None);
    assert_eq!(s.player.health, 3);
    assert_eq!((s.width, s.height), (800.0, 600.0));
    assert!(s.projectiles.is_empty() && s.enemies.is_empty() && s.enemy_bullets.is_empty());
}

#[test]
fn reset_restores_everything_but_mode() {
    let config = SimConfig::default();
    let mut s = make_state();
    s.score = 340;
    s.level = 4;
    s.boss_spawned = true;
    s.boss = Some(Boss::new(99.0, 270.0, 3));
    s.last_fire = Some(Duration::from_secs(9));
    s.fire_latched = true;
    s.player.y = 12.0;
    s.player.health = 1;
    s.player.weapon = WeaponId::Scatter;
    s.enemies.push(Enemy::new(300.0, 40.0, EnemyKind::Shooter));
    s.projectiles.push(rocket(200.0, 200.0));
    s.enemy_bullets.push(EnemyBullet::from_boss(90.0, 300.0));
    s.events.push(GameEvent::Fire);
    s.frame = 1234;

    let r = reset(&s, &config);
    let fresh = init_state(&config);
    assert_eq!(r.mode, GameMode::Playing);
    assert_eq!(r.score, 0);
    assert_eq!(r.level, 1);
    assert!(!r.boss_spawned);
    assert!(r.boss.is_none());
    assert_eq!(r.last_fire, None);
    assert!(!r.fire_latched);
    assert_eq!(r.player, fresh.player);
    assert!(r.enemies.is_empty() && r.projectiles.is_empty() && r.enemy_bullets.is_empty());
    assert!(r.events.is_empty());
    assert_eq!(r.frame, 0);
}

// ── tick: mode gating ─────────────────────────────────────────────────────────

#[test]
fn tick_is_frozen_outside_playing() {
    for mode in [GameMode::MainMenu, GameMode::Paused, GameMode::GameOver] {
        let mut s = make_state();
        s.mode = mode;
        s.enemies.push(Enemy::new(500.0, 100.0, EnemyKind::Normal));
        s.events.push(GameEvent::EnemyHit);
        let input = TickInput { up: true, fire: true, ..idle() };
        let s2 = tick(&s, &input, &SimConfig::default(), &mut never());
        assert_eq!(s2.mode, mode);
        assert_eq!(s2.frame, s.frame);
        assert_eq!(s2.enemies[0].x, 500.0);
        assert_eq!(s2.player.y, 300.0);
        assert!(s2.projectiles.is_empty());
        assert!(s2.events.is_empty());
    }
}

#[test]
fn tick_increments_frame_and_clears_events() {
    let mut s = make_state();
    s.frame = 5;
    s.events.push(GameEvent::Fire);
    let s2 = tick(&s, &idle(), &SimConfig::default(), &mut never());
    assert_eq!(s2.frame, 6);
    assert!(s2.events.is_empty());
}

#[test]
fn tick_moves_fires_and_advances() {
    let s = make_state();
    let input = TickInput { up: true, fire: true, ..idle() };
    let s2 = tick(&s, &input, &SimConfig::default(), &mut never());
    assert_eq!(s2.player.y, 295.0);
    // fired from the moved position, then advanced once
    assert_eq!(s2.projectiles.len(), 1);
    assert_eq!(s2.projectiles[0].x, 125.0);
    assert_eq!(s2.projectiles[0].y, 302.5);
    assert_eq!(s2.events, vec![GameEvent::Fire]);
}

// ── tick: pause ───────────────────────────────────────────────────────────────

#[test]
fn pause_is_honoured_after_the_frame() {
    let mut s = make_state();
    s.enemies.push(Enemy::new(500.0, 100.0, EnemyKind::Normal));
    let input = TickInput { pause: true, ..idle() };
    let s2 = tick(&s, &input, &SimConfig::default(), &mut never());
    assert_eq!(s2.mode, GameMode::Paused);
    // the frame still ran
    assert_eq!(s2.enemies[0].x, 498.0);
    assert_eq!(s2.frame, 1);
}

#[test]
fn pause_does_not_override_game_over() {
    let mut s = make_state();
    s.player.health = 1;
    s.enemies.push(Enemy::new(104.0, 300.0, EnemyKind::Normal));
    let input = TickInput { pause: true, ..idle() };
    let s2 = tick(&s, &input, &SimConfig::default(), &mut never());
    assert_eq!(s2.mode, GameMode::GameOver);
}

// ── tick: ordering scenarios ──────────────────────────────────────────────────

#[test]
fn kill_to_threshold_summons_boss_next_tick() {
    let config = SimConfig::default();
    let mut s = make_state();
    s.score = 90;
    // after one tick: enemy 498..518, rocket 495..505 → overlap
    s.enemies.push(Enemy::new(500.0, 300.0, EnemyKind::Normal));
    s.projectiles.push(rocket(490.0, 305.0));

    let s1 = tick(&s, &idle(), &config, &mut never());
    assert_eq!(s1.score, 100);
    assert!(s1.boss.is_none());
    assert_eq!(s1.level, 1);

    let s2 = tick(&s1, &idle(), &config, &mut never());
    assert!(s2.boss.is_some());
    assert!(s2.boss_spawned);
    assert_eq!(s2.level, 2);
    assert_eq!(s2.events, vec![GameEvent::BossSpawned { level: 2 }]);

    let s3 = tick(&s2, &idle(), &config, &mut never());
    assert_eq!(s3.level, 2);
    assert_eq!(s3.boss.as_ref().map(|b| b.x), Some(799.0));
}

#[test]
fn defeated_boss_is_followed_by_the_next_one() {
    let config = SimConfig::default();
    let mut s = make_state();
    s.score = 100;
    s.level = 2;
    s.boss_spawned = true;
    // after one tick: boss 699..759, rocket 695..705 → overlap
    s.boss = Some(Boss::new(700.0, 270.0, 1));
    s.projectiles.push(rocket(690.0, 290.0));

    let s1 = tick(&s, &idle(), &config, &mut never());
    assert_eq!(s1.score, 110);
    assert!(s1.boss.is_none());
    assert!(!s1.boss_spawned);
    assert_eq!(s1.level, 2);

    let s2 = tick(&s1, &idle(), &config, &mut never());
    assert!(s2.boss.is_some());
    assert!(s2.boss_spawned);
    assert_eq!(s2.level, 3);
    assert_eq!(s2.events, vec![GameEvent::BossSpawned { level: 3 }]);
}

#[test]
fn boss_blocks_enemy_spawns() {
    let config = SimConfig { enemy_spawn_chance: 1.0, ..SimConfig::default() };
    let mut s = make_state();
    s.boss = Some(Boss::new(700.0, 0.0, 20));
    s.boss_spawned = true;
    let s2 = tick(&s, &idle(), &config, &mut never());
    assert!(s2.enemies.is_empty());
}

#[test]
fn boss_parks_and_stays() {
    let config = SimConfig::default();
    let mut s = make_state();
    s.player.y = 0.0;
    s.boss = Some(Boss::new(101.0, 400.0, 20));
    s.boss_spawned = true;
    for _ in 0..10 {
        s = tick(&s, &idle(), &config, &mut never());
    }
    let boss = s.boss.as_ref().expect("boss stays");
    assert_eq!(boss.speed, 0.0);
    assert_eq!(boss.x, 99.0);
}

#[test]
fn enemies_walk_off_the_left_edge() {
    let mut s = make_state();
    s.enemies.push(Enemy::new(2.0, 100.0, EnemyKind::Normal));
    let s2 = tick(&s, &idle(), &SimConfig::default(), &mut never());
    assert!(s2.enemies.is_empty());
    assert_eq!(s2.player.health, 3);
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = SimConfig { enemy_spawn_chance: 0.2, ..SimConfig::default() };
    let run = || {
        let mut rng = StdRng::seed_from_u64(42);
        let mut s = make_state();
        for frame in 0..600u64 {
            let input = TickInput {
                up: frame % 90 < 30,
                down: frame % 90 > 60,
                fire: frame % 4 == 0,
                now: Duration::from_millis(frame * 16),
                ..idle()
            };
            s = tick(&s, &input, &config, &mut rng);
        }
        s
    };
    let a = run();
    let b = run();
    assert_eq!(a.score, b.score);
    assert_eq!(a.player, b.player);
    assert_eq!(a.enemies, b.enemies);
    assert_eq!(a.projectiles, b.projectiles);
    assert_eq!(a.mode, b.mode);
}
