// Core algorithm exports
pub mod canonical;
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use canonical::{normalize, SynonymTable};
pub use filters::{fuzzy_filter, fuzzy_text_match};
pub use matcher::{filter_by_percentage, MatchResult, SkillMatcher};
pub use scoring::{calculate_match_percentage, check_skill_match};
pub use similarity::{edit_distance, similarity};
