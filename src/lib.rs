//! TalentLink Matcher - skill matching service for the TalentLink marketplace
//!
//! This library provides the skill matching core used when a job is
//! posted: candidate skill lists are scored against a job's required
//! skills (exact, abbreviation, partial, and fuzzy matching) and a
//! ranked shortlist is produced. The core is pure and stateless; the
//! HTTP layer in `routes` is a thin face over it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match_percentage, check_skill_match, similarity, SkillMatcher};
pub use crate::models::{
    CandidateProfile, MatchCategory, MatchOptions, RankedCandidate, RequiredSkill, SearchOptions,
    SkillMatch,
};
