use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::domain::RankedCandidate;

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCandidatesResponse {
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "matchRunId")]
    pub match_run_id: String,
    pub matches: Vec<RankedCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "matchedAt")]
    pub matched_at: chrono::DateTime<chrono::Utc>,
}

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "matchPercentage")]
    pub match_percentage: f64,
}

/// Response for the refilter endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefilterResponse {
    pub matches: Vec<RankedCandidate>,
}

/// Response for the search filter endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilterResponse {
    pub records: Vec<Value>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
