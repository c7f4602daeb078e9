//! Menu/session controller.
//!
//! Menu buttons and hotkeys never touch `GameState` directly; they issue a
//! `Command` and `Session::apply` decides what it means in the current mode.

use log::{debug, info};
use rand::Rng;

use crate::compute::{init_state, reset, tick, TickInput};
use crate::config::SimConfig;
use crate::entities::{GameMode, GameState};
use crate::error::{ConfigError, PurchaseError};
use crate::weapons::WeaponId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Main menu "play".
    Start,
    Pause,
    Resume,
    /// Start over from the pause menu.
    Restart,
    /// "Try again" from the game-over screen.
    Retry,
    QuitToMenu,
    /// Spend score on a weapon from the shop.
    Purchase(WeaponId),
}

#[derive(Clone, Debug)]
pub struct Session {
    pub state: GameState,
    pub config: SimConfig,
}

impl Session {
    /// Fails unless `config` passes `SimConfig::validate`.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { state: init_state(&config), config })
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    /// Advance one frame with the given input snapshot.
    pub fn step(&mut self, input: &TickInput, rng: &mut impl Rng) {
        self.state = tick(&self.state, input, &self.config, rng);
    }

    /// Apply a menu command.  Commands that make no sense in the current mode
    /// are ignored; only a purchase can fail.
    pub fn apply(&mut self, command: Command) -> Result<(), PurchaseError> {
        use GameMode::*;

        match (self.state.mode, command) {
            (_, Command::Purchase(weapon)) => return self.purchase(weapon),
            (MainMenu, Command::Start) | (Paused, Command::Restart) | (GameOver, Command::Retry) => {
                self.restart_in(Playing);
            }
            (Paused | GameOver, Command::QuitToMenu) => self.restart_in(MainMenu),
            (Playing, Command::Pause) => self.state.mode = Paused,
            (Paused, Command::Resume) => self.state.mode = Playing,
            (mode, command) => {
                debug!("ignoring {command:?} while {mode:?}");
                return Ok(());
            }
        }
        info!("{command:?} -> {:?}", self.state.mode);
        Ok(())
    }

    fn restart_in(&mut self, mode: GameMode) {
        self.state = GameState { mode, ..reset(&self.state, &self.config) };
    }

    fn purchase(&mut self, weapon: WeaponId) -> Result<(), PurchaseError> {
        if self.state.player.weapon == weapon {
            debug!("{weapon:?} already equipped");
            return Ok(());
        }
        let cost = weapon.stats().cost;
        let score = self.state.score;
        if score < cost {
            debug!("cannot afford {weapon:?}: cost {cost}, score {score}");
            return Err(PurchaseError::InsufficientFunds { weapon, cost, score });
        }
        self.state.score = score - cost;
        self.state.player.weapon = weapon;
        info!("bought {weapon:?} for {cost}, score now {}", self.state.score);
        Ok(())
    }
}
