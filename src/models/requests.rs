use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use validator::Validate;

use crate::models::domain::{
    CandidateProfile, MatchOptions, RankedCandidate, RequiredSkill, SearchOptions,
};

/// Request to rank a candidate pool against a job's requirements
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCandidatesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "job_id", rename = "jobId")]
    pub job_id: String,
    #[serde(alias = "required_skills", rename = "requiredSkills")]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default, alias = "min_match_percentage", rename = "minMatchPercentage")]
    pub min_match_percentage: Option<f64>,
    #[serde(default)]
    pub options: Option<MatchOptions>,
}

/// Request to score one candidate skill set against a requirement list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default, alias = "candidate_skills", rename = "candidateSkills")]
    pub candidate_skills: Vec<String>,
    #[serde(default, alias = "required_skills", rename = "requiredSkills")]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(default)]
    pub options: Option<MatchOptions>,
}

/// Request to classify a single skill pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckSkillRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "candidate_skill", rename = "candidateSkill")]
    pub candidate_skill: String,
    #[validate(length(min = 1))]
    #[serde(alias = "required_skill", rename = "requiredSkill")]
    pub required_skill: String,
    #[serde(default, alias = "fuzzy_threshold", rename = "fuzzyThreshold")]
    pub fuzzy_threshold: Option<f64>,
}

/// Request to re-filter an already ranked list against a new threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefilterRequest {
    pub matches: Vec<RankedCandidate>,
    #[serde(alias = "min_match_percentage", rename = "minMatchPercentage")]
    pub min_match_percentage: f64,
}

/// Request to fuzzy-filter a collection of JSON records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilterRequest {
    #[serde(default)]
    pub records: Vec<Value>,
    #[serde(default)]
    pub filters: HashMap<String, Value>,
    #[serde(default)]
    pub options: Option<SearchOptions>,
}
