use serde::{Deserialize, Serialize};

/// Percentage at or above which a match counts as high confidence.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 70.0;
/// Percentage at or above which a match counts as medium confidence.
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 40.0;

/// Qualitative confidence label derived from a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBucket {
    High,
    Medium,
    Low,
}

impl ConfidenceBucket {
    /// Buckets a percentage score: High at 70 and above, Medium from 40 up
    /// to but excluding 70, Low below 40.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceBucket::High
        } else if percent >= MEDIUM_CONFIDENCE_THRESHOLD {
            ConfidenceBucket::Medium
        } else {
            ConfidenceBucket::Low
        }
    }
}

impl std::fmt::Display for ConfidenceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceBucket::High => write!(f, "high"),
            ConfidenceBucket::Medium => write!(f, "medium"),
            ConfidenceBucket::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for ConfidenceBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(ConfidenceBucket::High),
            "medium" => Ok(ConfidenceBucket::Medium),
            "low" => Ok(ConfidenceBucket::Low),
            _ => Err(format!("Invalid confidence bucket: {}", s)),
        }
    }
}
