// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, MatchCategory, MatchOptions, RankedCandidate, RequiredSkill, SearchOptions,
    SkillMatch,
};
pub use requests::{
    CheckSkillRequest, RankCandidatesRequest, RefilterRequest, ScoreRequest, SearchFilterRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, RankCandidatesResponse, RefilterResponse, ScoreResponse,
    SearchFilterResponse,
};
