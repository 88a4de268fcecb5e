//! Pure field projections from upstream-supplied enums to display
//! buckets.
//!
//! The upstream engine picks these strings in its own workflows, so
//! every mapping is total: any value outside the known set lands in a
//! defined fallback bucket instead of crashing the view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extraction confidence, bucketed from the upstream `confidenceColor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceBucket {
    High,
    Medium,
    Low,
    Unknown,
}

impl ConfidenceBucket {
    pub fn from_color(color: &str) -> Self {
        match color {
            "green" => ConfidenceBucket::High,
            "yellow" => ConfidenceBucket::Medium,
            "red" => ConfidenceBucket::Low,
            _ => ConfidenceBucket::Unknown,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ConfidenceBucket::High => "green",
            ConfidenceBucket::Medium => "yellow",
            ConfidenceBucket::Low => "red",
            ConfidenceBucket::Unknown => "gray",
        }
    }
}

/// Email priority as a severity rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityRank {
    Unspecified = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl PriorityRank {
    pub fn from_label(priority: &str) -> Self {
        match priority {
            "high" => PriorityRank::High,
            "medium" => PriorityRank::Medium,
            "low" => PriorityRank::Low,
            _ => PriorityRank::Unspecified,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PriorityRank::High => "red",
            PriorityRank::Medium => "yellow",
            PriorityRank::Low => "green",
            PriorityRank::Unspecified => "gray",
        }
    }
}

/// Email sentiment; anything unrecognized reads as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentTone {
    Positive,
    Neutral,
    Negative,
}

impl SentimentTone {
    pub fn from_label(sentiment: &str) -> Self {
        match sentiment {
            "positive" => SentimentTone::Positive,
            "negative" => SentimentTone::Negative,
            _ => SentimentTone::Neutral,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SentimentTone::Positive => "green",
            SentimentTone::Neutral => "gray",
            SentimentTone::Negative => "red",
        }
    }
}

/// Badge color for an email category; unknown colors fall back to gray.
pub fn category_badge_color(color: &str) -> &'static str {
    match color {
        "green" => "green",
        "blue" => "blue",
        "red" => "red",
        "purple" => "purple",
        _ => "gray",
    }
}

/// Phishing verdict bucket, selected deterministically from the
/// upstream `prediction_class`. An unrecognized class gets the neutral
/// bucket rather than reading as safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatBucket {
    Threat,
    Caution,
    Safe,
    Unknown,
}

impl ThreatBucket {
    pub fn from_prediction_class(class: &str) -> Self {
        match class {
            "PHISHING" => ThreatBucket::Threat,
            "SUSPICIOUS" => ThreatBucket::Caution,
            "LEGITIMATE" => ThreatBucket::Safe,
            _ => ThreatBucket::Unknown,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ThreatBucket::Threat => "⚠️",
            ThreatBucket::Caution => "⚡",
            ThreatBucket::Safe => "✅",
            ThreatBucket::Unknown => "❔",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThreatBucket::Threat => "THREAT DETECTED",
            ThreatBucket::Caution => "CAUTION ADVISED",
            ThreatBucket::Safe => "SAFE",
            ThreatBucket::Unknown => "UNVERIFIED",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ThreatBucket::Threat => "red",
            ThreatBucket::Caution => "yellow",
            ThreatBucket::Safe => "green",
            ThreatBucket::Unknown => "gray",
        }
    }
}

impl fmt::Display for ThreatBucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
