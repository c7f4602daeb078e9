use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use side_shooter::compute::{init_state, reset, tick, TickInput};
use side_shooter::config::SimConfig;
use side_shooter::entities::*;
use side_shooter::movement::move_player;

fn busy_config() -> SimConfig {
    SimConfig {
        enemy_spawn_chance: 0.2,
        enemy_fire_chance: 0.1,
        boss_fire_chance: 0.1,
        boss_score: 30,
        ..SimConfig::default()
    }
}

fn input_strategy() -> impl Strategy<Value = (bool, bool, bool)> {
    (any::<bool>(), any::<bool>(), any::<bool>())
}

proptest! {
    #[test]
    fn player_stays_on_canvas(moves in prop::collection::vec((any::<bool>(), any::<bool>()), 0..400)) {
        let mut s = init_state(&SimConfig::default());
        s.mode = GameMode::Playing;
        for (up, down) in moves {
            s = move_player(&s, &TickInput { up, down, ..TickInput::default() });
            prop_assert!(s.player.y >= 0.0);
            prop_assert!(s.player.y <= s.height - s.player.height);
        }
    }

    #[test]
    fn health_and_score_are_monotonic(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let config = busy_config();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state(&config);
        s.mode = GameMode::Playing;
        let mut game_overs = 0;

        for (frame, (up, down, fire)) in inputs.into_iter().enumerate() {
            let input = TickInput {
                up,
                down,
                fire,
                pause: false,
                now: Duration::from_millis(frame as u64 * 16),
            };
            let next = tick(&s, &input, &config, &mut rng);
            prop_assert!(next.player.health <= s.player.health);
            prop_assert!(next.score >= s.score);
            let hurts = next.events.iter().filter(|e| **e == GameEvent::PlayerHurt).count() as u32;
            prop_assert_eq!(s.player.health.saturating_sub(hurts), next.player.health);
            game_overs += next.events.iter().filter(|e| **e == GameEvent::GameOver).count();
            prop_assert!(next.boss.is_none() || next.boss_spawned);
            s = next;
        }

        prop_assert!(game_overs <= 1);
        prop_assert_eq!(game_overs == 1, s.mode == GameMode::GameOver);
    }

    #[test]
    fn reset_always_yields_initial_values(
        seed in any::<u64>(),
        frames in 0usize..200,
    ) {
        let config = busy_config();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state(&config);
        s.mode = GameMode::Playing;
        for frame in 0..frames {
            let input = TickInput {
                fire: frame % 3 == 0,
                down: frame % 50 < 25,
                now: Duration::from_millis(frame as u64 * 16),
                ..TickInput::default()
            };
            s = tick(&s, &input, &config, &mut rng);
        }

        let r = reset(&s, &config);
        let fresh = init_state(&config);
        prop_assert_eq!(r.score, 0);
        prop_assert_eq!(r.level, 1);
        prop_assert_eq!(&r.player, &fresh.player);
        prop_assert!(r.boss.is_none());
        prop_assert!(!r.boss_spawned);
        prop_assert_eq!(r.last_fire, None);
        prop_assert!(r.projectiles.is_empty());
        prop_assert!(r.enemies.is_empty());
        prop_assert!(r.enemy_bullets.is_empty());
    }
}
