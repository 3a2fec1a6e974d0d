//! Purchasable services and pricing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Currency;

/// Builds the service key a payment for a given level is recorded under.
///
/// Works for any number, including ones with no matching service, so that
/// access checks can be asked about levels that do not exist.
pub fn service_type_for_level(level: i64) -> String {
    format!("level_{}", level)
}

/// Price of a service in every supported currency, in major units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    #[serde(rename = "INR")]
    pub inr: u32,
    #[serde(rename = "GBP")]
    pub gbp: u32,
    #[serde(rename = "USD")]
    pub usd: u32,
}

impl PriceTable {
    pub const FREE: PriceTable = PriceTable {
        inr: 0,
        gbp: 0,
        usd: 0,
    };

    /// Price in the given currency.
    pub fn amount(&self, currency: Currency) -> u32 {
        match currency {
            Currency::Inr => self.inr,
            Currency::Gbp => self.gbp,
            Currency::Usd => self.usd,
        }
    }
}

/// Something a user can pay for.
///
/// Each service is identified by a level number: 2 and 3 unlock the
/// matching assessment level, 4 is a one-to-one coaching consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchasableService {
    LevelTwo,
    LevelThree,
    Consultation,
}

impl PurchasableService {
    /// Looks up a service by the level number used in order requests.
    pub fn from_level_number(level: u32) -> Option<Self> {
        match level {
            2 => Some(PurchasableService::LevelTwo),
            3 => Some(PurchasableService::LevelThree),
            4 => Some(PurchasableService::Consultation),
            _ => None,
        }
    }

    /// Parses a stored `level_{N}` key.
    pub fn from_service_type(service_type: &str) -> Option<Self> {
        service_type
            .strip_prefix("level_")
            .and_then(|n| n.parse::<u32>().ok())
            .and_then(Self::from_level_number)
    }

    pub fn level_number(&self) -> u32 {
        match self {
            PurchasableService::LevelTwo => 2,
            PurchasableService::LevelThree => 3,
            PurchasableService::Consultation => 4,
        }
    }

    /// Key stored on payment records, e.g. `level_2`.
    pub fn service_type(&self) -> String {
        service_type_for_level(i64::from(self.level_number()))
    }

    pub fn description(&self) -> &'static str {
        match self {
            PurchasableService::LevelTwo => "Level 2 Assessment - Extended Evaluation",
            PurchasableService::LevelThree => {
                "Level 3 Assessment - Intensive Evaluation + 30-Day Roadmap"
            }
            PurchasableService::Consultation => "1:1 Premium Consultation with Coach",
        }
    }

    pub fn prices(&self) -> PriceTable {
        match self {
            PurchasableService::LevelTwo => PriceTable {
                inr: 500,
                gbp: 5,
                usd: 5,
            },
            PurchasableService::LevelThree => PriceTable {
                inr: 1000,
                gbp: 10,
                usd: 10,
            },
            PurchasableService::Consultation => PriceTable {
                inr: 1500,
                gbp: 15,
                usd: 15,
            },
        }
    }
}

impl fmt::Display for PurchasableService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.service_type())
    }
}
