use serde::{Deserialize, Serialize};

/// Category assigned to a skill pair comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchCategory {
    Exact,
    Abbreviation,
    Partial,
    Fuzzy,
    None,
}

/// Outcome of comparing one candidate skill to one required skill
///
/// When `is_match` is false the score still carries the raw similarity
/// of the pair, which lets callers inspect near-misses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkillMatch {
    #[serde(rename = "isMatch")]
    pub is_match: bool,
    pub score: f64,
    pub category: MatchCategory,
}

/// One entry in a job's requirement list
///
/// Jobs send either a bare name or a structured record carrying at
/// least a skill name. Extra fields on the structured form are
/// accepted and ignored by the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequiredSkill {
    Name(String),
    Detailed {
        skill: String,
        #[serde(default)]
        proficiency: Option<String>,
    },
}

impl RequiredSkill {
    /// The skill name used for matching
    pub fn skill_name(&self) -> &str {
        match self {
            RequiredSkill::Name(name) => name,
            RequiredSkill::Detailed { skill, .. } => skill,
        }
    }
}

/// Candidate record as supplied by the caller
///
/// Callers pre-filter visibility (only open-to-work candidates should
/// reach the matcher); the matcher itself only reads `skills`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(rename = "candidateId", alias = "id")]
    pub candidate_id: String,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One ranked entry for a candidate that cleared the threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: f64,
    pub candidate: CandidateProfile,
}

/// Tunable thresholds and category weights for skill matching
///
/// Values are taken as-is, without range validation. Out-of-range
/// weights produce correspondingly skewed scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchOptions {
    #[serde(rename = "fuzzyThreshold", default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    #[serde(rename = "exactMatchWeight", default = "default_exact_weight")]
    pub exact_match_weight: f64,
    #[serde(
        rename = "abbreviationMatchWeight",
        default = "default_abbreviation_weight"
    )]
    pub abbreviation_match_weight: f64,
    #[serde(rename = "partialMatchWeight", default = "default_partial_weight")]
    pub partial_match_weight: f64,
    #[serde(rename = "fuzzyMatchWeight", default = "default_fuzzy_weight")]
    pub fuzzy_match_weight: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            exact_match_weight: default_exact_weight(),
            abbreviation_match_weight: default_abbreviation_weight(),
            partial_match_weight: default_partial_weight(),
            fuzzy_match_weight: default_fuzzy_weight(),
        }
    }
}

fn default_fuzzy_threshold() -> f64 { 0.85 }
fn default_exact_weight() -> f64 { 1.0 }
fn default_abbreviation_weight() -> f64 { 0.98 }
fn default_partial_weight() -> f64 { 0.85 }
fn default_fuzzy_weight() -> f64 { 0.6 }

/// Options for the free-text fuzzy filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(rename = "fuzzyThreshold", default = "default_search_threshold")]
    pub fuzzy_threshold: f64,
    #[serde(rename = "enableFuzzySearch", default = "default_true")]
    pub enable_fuzzy_search: bool,
    #[serde(rename = "caseSensitive", default)]
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_search_threshold(),
            enable_fuzzy_search: true,
            case_sensitive: false,
        }
    }
}

fn default_search_threshold() -> f64 { 0.6 }

fn default_true() -> bool { true }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_skill_accepts_both_wire_shapes() {
        let bare: RequiredSkill = serde_json::from_str(r#""javascript""#).unwrap();
        assert_eq!(bare.skill_name(), "javascript");

        let detailed: RequiredSkill =
            serde_json::from_str(r#"{"skill": "sql", "proficiency": "expert"}"#).unwrap();
        assert_eq!(detailed.skill_name(), "sql");
    }

    #[test]
    fn test_candidate_profile_accepts_id_alias() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{"id": "c-1", "skills": ["rust"]}"#).unwrap();
        assert_eq!(profile.candidate_id, "c-1");
        assert_eq!(profile.skills.as_deref(), Some(&["rust".to_string()][..]));
    }

    #[test]
    fn test_match_options_defaults_fill_missing_fields() {
        let options: MatchOptions = serde_json::from_str(r#"{"fuzzyThreshold": 0.9}"#).unwrap();
        assert_eq!(options.fuzzy_threshold, 0.9);
        assert_eq!(options.exact_match_weight, 1.0);
        assert_eq!(options.abbreviation_match_weight, 0.98);
        assert_eq!(options.partial_match_weight, 0.85);
        assert_eq!(options.fuzzy_match_weight, 0.6);
    }

    #[test]
    fn test_match_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&MatchCategory::Abbreviation).unwrap(),
            r#""abbreviation""#
        );
        assert_eq!(serde_json::to_string(&MatchCategory::None).unwrap(), r#""none""#);
    }
}
