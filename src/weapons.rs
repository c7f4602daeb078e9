/// Weapon catalog: fixed reference data, never mutated during a run.

use std::time::Duration;

/// Display colour carried by projectiles.  The core only names colours;
/// the renderer decides how to show them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Yellow,
    Cyan,
    Orange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeaponId {
    Basic,
    Laser,
    Scatter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: &'static str,
    /// Score spent to equip this weapon from the shop.
    pub cost: u32,
    /// Rightward distance travelled per tick by its projectiles.
    pub speed: f32,
    pub color: Color,
    pub damage: u32,
    /// Minimum wall-clock gap between two shots.
    pub fire_interval: Duration,
    /// Fires a fan of projectiles at `SCATTER_OFFSETS` instead of one.
    pub scatter: bool,
}

/// Vertical offsets of a scatter volley, relative to the muzzle.
pub const SCATTER_OFFSETS: [f32; 3] = [-5.0, 0.0, 5.0];

/// Every weapon, in shop order.
pub static WEAPONS: [Weapon; 3] = [
    Weapon {
        id: WeaponId::Basic,
        name: "Basic",
        cost: 0,
        speed: 5.0,
        color: Color::Yellow,
        damage: 1,
        fire_interval: Duration::from_millis(250),
        scatter: false,
    },
    Weapon {
        id: WeaponId::Laser,
        name: "Laser",
        cost: 50,
        speed: 10.0,
        color: Color::Cyan,
        damage: 2,
        fire_interval: Duration::from_millis(150),
        scatter: false,
    },
    Weapon {
        id: WeaponId::Scatter,
        name: "Scatter",
        cost: 100,
        speed: 6.0,
        color: Color::Orange,
        damage: 1,
        fire_interval: Duration::from_millis(400),
        scatter: true,
    },
];

impl WeaponId {
    pub fn stats(self) -> &'static Weapon {
        match self {
            WeaponId::Basic => &WEAPONS[0],
            WeaponId::Laser => &WEAPONS[1],
            WeaponId::Scatter => &WEAPONS[2],
        }
    }

    /// Shop slot (1-based) → weapon.
    pub fn from_slot(slot: usize) -> Option<Self> {
        WEAPONS.get(slot.checked_sub(1)?).map(|w| w.id)
    }
}
