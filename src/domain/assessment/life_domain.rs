//! The twelve life-balance domains.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the twelve fixed life-balance categories.
///
/// Variant order is presentation order; `Ord` follows it so that
/// `BTreeMap<LifeDomain, _>` iterates the way reports are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeDomain {
    #[serde(rename = "Career & Vocation")]
    CareerAndVocation,
    #[serde(rename = "Financial Well-Being")]
    FinancialWellBeing,
    #[serde(rename = "Physical Health")]
    PhysicalHealth,
    #[serde(rename = "Emotional Well-Being")]
    EmotionalWellBeing,
    #[serde(rename = "Family")]
    Family,
    #[serde(rename = "Friends")]
    Friends,
    #[serde(rename = "Relationships & Love")]
    RelationshipsAndLove,
    #[serde(rename = "Community & Giving")]
    CommunityAndGiving,
    #[serde(rename = "Fun & Recreation")]
    FunAndRecreation,
    #[serde(rename = "Physical Environment")]
    PhysicalEnvironment,
    #[serde(rename = "Personal Growth")]
    PersonalGrowth,
    #[serde(rename = "Spirituality")]
    Spirituality,
}

impl LifeDomain {
    /// All domains in presentation order.
    pub const ALL: [LifeDomain; 12] = [
        LifeDomain::CareerAndVocation,
        LifeDomain::FinancialWellBeing,
        LifeDomain::PhysicalHealth,
        LifeDomain::EmotionalWellBeing,
        LifeDomain::Family,
        LifeDomain::Friends,
        LifeDomain::RelationshipsAndLove,
        LifeDomain::CommunityAndGiving,
        LifeDomain::FunAndRecreation,
        LifeDomain::PhysicalEnvironment,
        LifeDomain::PersonalGrowth,
        LifeDomain::Spirituality,
    ];

    /// Returns the display name, which is also the stored and serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            LifeDomain::CareerAndVocation => "Career & Vocation",
            LifeDomain::FinancialWellBeing => "Financial Well-Being",
            LifeDomain::PhysicalHealth => "Physical Health",
            LifeDomain::EmotionalWellBeing => "Emotional Well-Being",
            LifeDomain::Family => "Family",
            LifeDomain::Friends => "Friends",
            LifeDomain::RelationshipsAndLove => "Relationships & Love",
            LifeDomain::CommunityAndGiving => "Community & Giving",
            LifeDomain::FunAndRecreation => "Fun & Recreation",
            LifeDomain::PhysicalEnvironment => "Physical Environment",
            LifeDomain::PersonalGrowth => "Personal Growth",
            LifeDomain::Spirituality => "Spirituality",
        }
    }

    /// Looks up a domain by its exact display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for LifeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
