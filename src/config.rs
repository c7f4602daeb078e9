//! Simulation tuning.
//!
//! Defaults reproduce the stock game; a JSON file may override any subset
//! of fields.

use serde::{Deserialize, Serialize};

use crate::entities::{BOSS_SIZE, PLAYER_SIZE};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Canvas width in world units.
    pub width: f32,
    /// Canvas height in world units.
    pub height: f32,
    /// Per-tick chance of an enemy appearing while no boss is active.
    pub enemy_spawn_chance: f64,
    /// Chance a freshly spawned enemy is a shooter.
    pub shooter_chance: f64,
    /// Per-tick chance each shooter fires.
    pub enemy_fire_chance: f64,
    /// Per-tick chance the boss fires.
    pub boss_fire_chance: f64,
    /// Chance a projectile is created stuck in place.
    pub glitch_chance: f64,
    /// Score for an enemy kill and for a boss kill.
    pub kill_score: u32,
    /// Score at which a boss is summoned, once per level.
    pub boss_score: u32,
    /// The boss stops advancing once its x drops below this.
    pub boss_park_x: f32,
    pub player_health: u32,
    pub boss_health: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            enemy_spawn_chance: 0.01,
            shooter_chance: 0.2,
            enemy_fire_chance: 0.02,
            boss_fire_chance: 0.01,
            glitch_chance: 0.1,
            kill_score: 10,
            boss_score: 100,
            boss_park_x: 100.0,
            player_health: 3,
            boss_health: 20,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.  Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let chances = [
            ("enemy_spawn_chance", self.enemy_spawn_chance),
            ("shooter_chance", self.shooter_chance),
            ("enemy_fire_chance", self.enemy_fire_chance),
            ("boss_fire_chance", self.boss_fire_chance),
            ("glitch_chance", self.glitch_chance),
        ];
        for (field, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { field, value });
            }
        }

        let min_side = PLAYER_SIZE.max(BOSS_SIZE);
        if !(self.width > min_side && self.height > min_side) {
            return Err(ConfigError::CanvasTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        if self.player_health == 0 {
            return Err(ConfigError::NonPositive { field: "player_health" });
        }
        if self.boss_health == 0 {
            return Err(ConfigError::NonPositive { field: "boss_health" });
        }
        if self.boss_score == 0 {
            return Err(ConfigError::NonPositive { field: "boss_score" });
        }
        Ok(())
    }
}
