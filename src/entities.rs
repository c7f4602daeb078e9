/// All game entity types.  Pure data, no logic.

use std::time::Duration;

use crate::weapons::{Color, WeaponId};

// ── Fixed sizes ───────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: f32 = 20.0;
pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_START_Y: f32 = 300.0;

pub const PROJECTILE_WIDTH: f32 = 10.0;
pub const PROJECTILE_HEIGHT: f32 = 5.0;

pub const ENEMY_SIZE: f32 = 20.0;
pub const ENEMY_SPEED: f32 = 2.0;

pub const ENEMY_BULLET_SIZE: f32 = 5.0;
pub const ENEMY_BULLET_SPEED: f32 = 4.0;
pub const BOSS_BULLET_SIZE: f32 = 10.0;
pub const BOSS_BULLET_SPEED: f32 = 2.0;

pub const BOSS_SIZE: f32 = 60.0;
pub const BOSS_SPEED: f32 = 1.0;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn left(&self) -> f32 {
        self.x
    }
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
    pub fn top(&self) -> f32 {
        self.y
    }
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// ── Modes & events ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    MainMenu,
    Playing,
    Paused,
    GameOver,
}

/// Discrete notifications raised during a tick.  The host turns them into
/// tones; the core never plays audio itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Fire,
    EnemyHit,
    PlayerHurt,
    BossHit,
    BossDefeated,
    BossSpawned { level: u32 },
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Fixed; the ship only moves vertically.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub health: u32,
    pub weapon: WeaponId,
    pub speed: f32,
}

impl Player {
    pub fn new(health: u32) -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            health,
            weapon: WeaponId::Basic,
            speed: PLAYER_SPEED,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player rocket.  Always travels rightward.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub damage: u32,
    pub color: Color,
    pub weapon: WeaponId,
    /// Stuck rocket: never advances, so it is never pruned either.
    pub glitch: bool,
}

impl Projectile {
    pub fn bounds(&self) -> Bounds {
        Bounds { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletSource {
    Enemy,
    Boss,
}

/// A hostile bullet.  Always travels leftward.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyBullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub source: BulletSource,
}

impl EnemyBullet {
    /// Small, fast bullet fired by a shooter; `(x, y)` is its centre-left point.
    pub fn from_enemy(x: f32, y: f32) -> Self {
        Self {
            x,
            y: y - ENEMY_BULLET_SIZE / 2.0,
            width: ENEMY_BULLET_SIZE,
            height: ENEMY_BULLET_SIZE,
            speed: ENEMY_BULLET_SPEED,
            source: BulletSource::Enemy,
        }
    }

    /// Larger, slower bullet fired by the boss.
    pub fn from_boss(x: f32, y: f32) -> Self {
        Self {
            x,
            y: y - BOSS_BULLET_SIZE / 2.0,
            width: BOSS_BULLET_SIZE,
            height: BOSS_BULLET_SIZE,
            speed: BOSS_BULLET_SPEED,
            source: BulletSource::Boss,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

// ── Enemies & boss ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Normal,
    /// Occasionally fires an `EnemyBullet`.
    Shooter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn new(x: f32, y: f32, kind: EnemyKind) -> Self {
        Self { x, y, width: ENEMY_SIZE, height: ENEMY_SIZE, speed: ENEMY_SPEED, kind }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Leftward speed; dropped to zero once the boss parks.
    pub speed: f32,
    pub health: u32,
}

impl Boss {
    pub fn new(x: f32, y: f32, health: u32) -> Self {
        Self { x, y, width: BOSS_SIZE, height: BOSS_SIZE, speed: BOSS_SPEED, health }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so the stage functions can return a
/// new copy without mutating their input.
#[derive(Clone, Debug)]
pub struct GameState {
    pub mode: GameMode,
    pub score: u32,
    /// Starts at 1; each boss arrival bumps it.
    pub level: u32,
    /// Set when the boss for the current level arrives, cleared on its defeat.
    pub boss_spawned: bool,
    /// Clock reading of the last shot; `None` until the first shot of a run.
    pub last_fire: Option<Duration>,
    /// Fire was held and already acted on; cleared when fire is released.
    pub fire_latched: bool,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub boss: Option<Boss>,
    /// Events raised by the most recent tick.
    pub events: Vec<GameEvent>,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}
