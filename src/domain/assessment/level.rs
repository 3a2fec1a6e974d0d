//! Assessment level definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::payment::{PriceTable, PurchasableService};

/// One of the three sequential assessment tiers.
///
/// Level 1 is free. Levels 2 and 3 are unlocked by a completed payment
/// for the matching `level_{N}` service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// Returns the level number (1, 2 or 3).
    pub fn number(&self) -> u32 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    /// Looks up a level by a requested number of any sign or size.
    pub fn from_number(number: i64) -> Option<Level> {
        u32::try_from(number)
            .ok()
            .and_then(|n| Level::try_from(n).ok())
    }

    /// Returns true if this level is locked behind a payment.
    pub fn requires_payment(&self) -> bool {
        !matches!(self, Level::One)
    }

    /// The purchasable service that unlocks this level, if any.
    pub fn unlocking_service(&self) -> Option<PurchasableService> {
        match self {
            Level::One => None,
            Level::Two => Some(PurchasableService::LevelTwo),
            Level::Three => Some(PurchasableService::LevelThree),
        }
    }

    /// Price of the level in every supported currency. Free levels cost zero.
    pub fn prices(&self) -> PriceTable {
        self.unlocking_service()
            .map(|service| service.prices())
            .unwrap_or(PriceTable::FREE)
    }
}

/// Error returned when a number does not name an assessment level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownLevel(pub u32);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {} does not exist", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl TryFrom<u32> for Level {
    type Error = UnknownLevel;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            other => Err(UnknownLevel(other)),
        }
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
