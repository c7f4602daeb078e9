use std::fmt;

use crate::weapons::WeaponId;

/// A shop purchase the session refused.  State is left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PurchaseError {
    InsufficientFunds {
        weapon: WeaponId,
        cost: u32,
        score: u32,
    },
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientFunds { weapon, cost, score } => write!(
                f,
                "insufficient funds for {}: costs {cost}, score is {score}",
                weapon.stats().name
            ),
        }
    }
}

impl std::error::Error for PurchaseError {}

/// Rejected simulation configuration.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    CanvasTooSmall { width: f32, height: f32 },
    NonPositive { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::ProbabilityOutOfRange { field, value } => {
                write!(f, "{field} must be within [0, 1], got {value}")
            }
            Self::CanvasTooSmall { width, height } => {
                write!(f, "canvas {width}x{height} cannot fit the player and boss")
            }
            Self::NonPositive { field } => write!(f, "{field} must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
