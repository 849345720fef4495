use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::ConfidenceBucket;
use super::model::SpeciesMatch;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summary statistics over everything the classifier returned, not just the
/// displayed entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Match count before truncation.
    pub total_matches: usize,
    pub best_score_percent: f64,
    pub mean_score_percent: f64,
}

impl AggregateStats {
    fn from_matches(matches: &[SpeciesMatch]) -> Self {
        let percents: Vec<f64> = matches.iter().map(|m| m.score_percent()).collect();
        let best = percents.iter().copied().fold(f64::MIN, f64::max);
        let mean = percents.iter().sum::<f64>() / percents.len() as f64;

        Self {
            total_matches: matches.len(),
            best_score_percent: round2(best),
            mean_score_percent: round2(mean),
        }
    }
}

/// One displayed entry: a species match with its rank and confidence label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// 1-based position in the classifier's ranking.
    pub rank: usize,
    pub species: SpeciesMatch,
    pub score_percent: f64,
    pub confidence: ConfidenceBucket,
}

/// Interpreted result set for one identification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentificationReport {
    pub entries: Vec<RankedMatch>,
    pub stats: Option<AggregateStats>,
    pub completed_at: DateTime<Utc>,
}

impl IdentificationReport {
    /// Builds the displayed report from the full match list.
    ///
    /// Keeps the classifier's ranking order, truncates the displayed entries
    /// to `max_results`, and computes stats over the full untruncated list.
    /// `matches` must not be empty; an empty classifier answer is classified
    /// as its own outcome before interpretation ever runs.
    pub fn compile(matches: Vec<SpeciesMatch>, max_results: usize, include_stats: bool) -> Self {
        debug_assert!(!matches.is_empty());

        let stats = include_stats.then(|| AggregateStats::from_matches(&matches));
        let entries = matches
            .into_iter()
            .take(max_results)
            .enumerate()
            .map(|(i, species)| {
                let score_percent = species.score_percent();
                RankedMatch {
                    rank: i + 1,
                    score_percent,
                    confidence: ConfidenceBucket::from_percent(score_percent),
                    species,
                }
            })
            .collect();

        Self {
            entries,
            stats,
            completed_at: Utc::now(),
        }
    }
}

/// Terminal result of one identification attempt. Closed over every way a
/// request can end so callers handle each case explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum IdentificationOutcome {
    /// The classifier returned at least one match.
    Success(IdentificationReport),
    /// The classifier answered but found no candidate species.
    Empty,
    /// The classifier answered with a non-200 status; body kept verbatim.
    ApiError { status: u16, body: String },
    /// The request never completed (DNS, connection reset, TLS).
    NetworkError(String),
    /// The deadline elapsed before a response arrived.
    Timeout,
}
