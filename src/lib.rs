//! Side-scrolling shooter simulation core.
//!
//! - `entities`: plain data for every on-screen object and the game state
//! - `weapons`: the read-only weapon catalog
//! - `spawner`, `movement`, `collision`: the per-tick stages
//! - `compute`: the orchestrator that runs one tick
//! - `session`: menu/session commands layered over `compute`

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod movement;
pub mod session;
pub mod spawner;
pub mod weapons;

pub use compute::{init_state, reset, tick, TickInput};
pub use config::SimConfig;
pub use entities::{GameEvent, GameMode, GameState};
pub use error::{ConfigError, PurchaseError};
pub use session::{Command, Session};
pub use weapons::{Weapon, WeaponId};
