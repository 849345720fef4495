use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::identification::confidence::ConfidenceBucket;
use business::domain::identification::report::{AggregateStats, IdentificationReport, RankedMatch};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ConfidenceBucketDto {
    #[oai(rename = "high")]
    High,
    #[oai(rename = "medium")]
    Medium,
    #[oai(rename = "low")]
    Low,
}

impl From<ConfidenceBucket> for ConfidenceBucketDto {
    fn from(bucket: ConfidenceBucket) -> Self {
        match bucket {
            ConfidenceBucket::High => ConfidenceBucketDto::High,
            ConfidenceBucket::Medium => ConfidenceBucketDto::Medium,
            ConfidenceBucket::Low => ConfidenceBucketDto::Low,
        }
    }
}

/// Request to identify a plant from one or two photos.
#[derive(Debug, Clone, Object)]
pub struct IdentifyPlantRequest {
    /// Base64-encoded primary image data
    pub primary_image_base64: String,
    /// Encoding of the primary image (jpeg or png)
    pub primary_image_format: String,
    /// Base64-encoded secondary image of the same plant
    #[oai(skip_serializing_if_is_none)]
    pub secondary_image_base64: Option<String>,
    /// Encoding of the secondary image (jpeg or png)
    #[oai(skip_serializing_if_is_none)]
    pub secondary_image_format: Option<String>,
    /// How many matches to display, 1 to 10 (default 5)
    #[oai(skip_serializing_if_is_none)]
    pub max_results: Option<u32>,
    /// Whether to include aggregate stats (default true)
    #[oai(skip_serializing_if_is_none)]
    pub show_details: Option<bool>,
}

/// One displayed species match.
#[derive(Debug, Clone, Object)]
pub struct RankedMatchResponse {
    /// 1-based position in the classifier's ranking
    pub rank: u32,
    /// Scientific name without author
    pub scientific_name: String,
    /// Common names, possibly empty
    pub common_names: Vec<String>,
    /// Botanical family
    pub family: String,
    /// Botanical genus
    pub genus: String,
    /// Match score as a percentage, rounded to 2 decimals
    pub score_percent: f64,
    /// Confidence label derived from the score
    pub confidence: ConfidenceBucketDto,
}

impl From<RankedMatch> for RankedMatchResponse {
    fn from(entry: RankedMatch) -> Self {
        Self {
            rank: entry.rank as u32,
            scientific_name: entry.species.scientific_name,
            common_names: entry.species.common_names,
            family: entry.species.family,
            genus: entry.species.genus,
            score_percent: entry.score_percent,
            confidence: entry.confidence.into(),
        }
    }
}

/// Summary statistics over the full match list.
#[derive(Debug, Clone, Object)]
pub struct AggregateStatsResponse {
    /// Match count before truncation
    pub total_matches: u32,
    pub best_score_percent: f64,
    pub mean_score_percent: f64,
}

impl From<AggregateStats> for AggregateStatsResponse {
    fn from(stats: AggregateStats) -> Self {
        Self {
            total_matches: stats.total_matches as u32,
            best_score_percent: stats.best_score_percent,
            mean_score_percent: stats.mean_score_percent,
        }
    }
}

/// Identification result set.
#[derive(Debug, Clone, Object)]
pub struct IdentificationReportResponse {
    /// Displayed matches in the classifier's ranking order
    pub matches: Vec<RankedMatchResponse>,
    /// Aggregate stats, present when requested
    #[oai(skip_serializing_if_is_none)]
    pub stats: Option<AggregateStatsResponse>,
    /// When the analysis completed
    pub completed_at: DateTime<Utc>,
}

impl From<IdentificationReport> for IdentificationReportResponse {
    fn from(report: IdentificationReport) -> Self {
        Self {
            matches: report.entries.into_iter().map(|e| e.into()).collect(),
            stats: report.stats.map(|s| s.into()),
            completed_at: report.completed_at,
        }
    }
}

/// Upstream classifier failure, preserved verbatim for diagnostics.
#[derive(Debug, Clone, Object)]
pub struct UpstreamErrorResponse {
    pub name: String,
    pub message: String,
    /// HTTP status the classifier answered with
    pub status: u16,
    /// Response body, untouched
    pub body: String,
}
