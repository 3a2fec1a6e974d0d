//! Qualitative interpretation of scores.
//!
//! Both resolvers are total step functions over `i64`. Scores above the
//! nominal ranges (3-12 per domain, 36-144 overall) are possible after
//! resubmission and land in the top bucket.

use serde::Serialize;
use std::fmt;

/// Highest domain score still considered low.
pub const DOMAIN_LOW_MAX: i64 = 5;
/// Highest domain score still considered moderate.
pub const DOMAIN_MODERATE_MAX: i64 = 8;
/// Highest overall score in the foundation stage.
pub const STAGE_FOUNDATION_MAX: i64 = 71;
/// Highest overall score in the growth stage.
pub const STAGE_GROWTH_MAX: i64 = 107;

/// Alignment band of a single domain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainBand {
    Low,
    Moderate,
    High,
}

impl DomainBand {
    pub fn for_score(score: i64) -> Self {
        if score <= DOMAIN_LOW_MAX {
            DomainBand::Low
        } else if score <= DOMAIN_MODERATE_MAX {
            DomainBand::Moderate
        } else {
            DomainBand::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainBand::Low => "low",
            DomainBand::Moderate => "moderate",
            DomainBand::High => "high",
        }
    }

    pub fn feedback(&self) -> &'static DomainFeedback {
        match self {
            DomainBand::Low => &LOW,
            DomainBand::Moderate => &MODERATE,
            DomainBand::High => &HIGH,
        }
    }
}

impl fmt::Display for DomainBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Growth stage of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStage {
    Foundation,
    Growth,
    Transformation,
}

impl OverallStage {
    pub fn for_score(score: i64) -> Self {
        if score <= STAGE_FOUNDATION_MAX {
            OverallStage::Foundation
        } else if score <= STAGE_GROWTH_MAX {
            OverallStage::Growth
        } else {
            OverallStage::Transformation
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStage::Foundation => "foundation",
            OverallStage::Growth => "growth",
            OverallStage::Transformation => "transformation",
        }
    }

    pub fn feedback(&self) -> &'static StageFeedback {
        match self {
            OverallStage::Foundation => &FOUNDATION,
            OverallStage::Growth => &GROWTH,
            OverallStage::Transformation => &TRANSFORMATION,
        }
    }
}

impl fmt::Display for OverallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text shown for a domain band.
#[derive(Debug, PartialEq, Eq)]
pub struct DomainFeedback {
    pub band: DomainBand,
    pub title: &'static str,
    pub general: &'static str,
    pub recommendations: &'static str,
}

/// Text shown for an overall stage.
#[derive(Debug, PartialEq, Eq)]
pub struct StageFeedback {
    pub stage: OverallStage,
    pub title: &'static str,
    pub description: &'static str,
    pub focus_areas: &'static str,
    pub recommendation: &'static str,
}

/// Interpretation of a cumulative domain score.
pub fn domain_feedback(score: i64) -> &'static DomainFeedback {
    DomainBand::for_score(score).feedback()
}

/// Interpretation of an overall score.
pub fn overall_stage(score: i64) -> &'static StageFeedback {
    OverallStage::for_score(score).feedback()
}

static LOW: DomainFeedback = DomainFeedback {
    band: DomainBand::Low,
    title: "Low Alignment",
    general: "You may feel disconnected from purpose.",
    recommendations: "Try NLP journaling to uncover limiting beliefs and practice grounding yoga (Mountain Pose) with daily breathwork.",
};

static MODERATE: DomainFeedback = DomainFeedback {
    band: DomainBand::Moderate,
    title: "Moderate Alignment",
    general: "You're stable but seeking deeper fulfillment.",
    recommendations: "Use NLP reframing to align work with values and add heart-opening yoga poses (Camel Pose) with mindfulness breaks.",
};

static HIGH: DomainFeedback = DomainFeedback {
    band: DomainBand::High,
    title: "High Alignment",
    general: "You're thriving in alignment with purpose.",
    recommendations: "Deepen integration with visualization meditations and flow yoga sequences that reinforce clarity.",
};

static FOUNDATION: StageFeedback = StageFeedback {
    stage: OverallStage::Foundation,
    title: "Foundation Stage (Awareness)",
    description: "Score 36-71: Awareness Stage",
    focus_areas: "Basic NLP journaling, beginner yoga, short meditations.",
    recommendation: "Focus on building awareness with guided NLP journaling, beginner yoga flows, and short meditations.",
};

static GROWTH: StageFeedback = StageFeedback {
    stage: OverallStage::Growth,
    title: "Growth Stage (Pattern Building)",
    description: "Score 72-107: Growth Stage",
    focus_areas: "Reframing beliefs, balancing yoga, structured mindfulness.",
    recommendation: "Focus on building new patterns by reframing beliefs, practicing structured yoga sequences, and using breathwork meditations.",
};

static TRANSFORMATION: StageFeedback = StageFeedback {
    stage: OverallStage::Transformation,
    title: "Transformation Stage (Integration)",
    description: "Score 108-144: Transformation Stage",
    focus_areas: "Anchoring identity, advanced yoga flows, transcendental meditations.",
    recommendation: "Focus on deep integration with advanced NLP anchoring, meditative yoga flows, and deep mindfulness practices.",
};
