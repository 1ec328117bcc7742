use crate::core::canonical::{self, SynonymTable};
use crate::core::scoring::calculate_match_percentage;
use crate::models::{CandidateProfile, MatchOptions, RankedCandidate, RequiredSkill};

/// Result of ranking a candidate pool against one job
#[derive(Debug)]
pub struct MatchResult {
    pub ranked: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Candidate ranking orchestrator
///
/// # Pipeline Stages
/// 1. Skip candidates without a usable skill list
/// 2. Score each remaining candidate against the requirements
/// 3. Keep scores at or above the minimum percentage
/// 4. Sort descending by percentage (ties keep pool order)
#[derive(Debug, Clone)]
pub struct SkillMatcher<'a> {
    options: MatchOptions,
    synonyms: &'a SynonymTable,
}

impl<'a> SkillMatcher<'a> {
    pub fn new(options: MatchOptions, synonyms: &'a SynonymTable) -> Self {
        Self { options, synonyms }
    }

    /// Rank a candidate pool against a job's requirement list
    ///
    /// Candidates with a missing skill list are skipped silently (they
    /// still count toward `total_candidates`). The kept entries are
    /// sorted descending by percentage with a stable sort, so equal
    /// scores keep their pool order.
    ///
    /// # Arguments
    /// * `candidates` - Pre-filtered candidate pool (visibility policy
    ///   is the caller's job)
    /// * `required_skills` - The job's requirement list
    /// * `min_match_percentage` - Scores below this are dropped
    ///
    /// # Returns
    /// MatchResult with the ranked shortlist and the pool size scanned
    pub fn rank_candidates(
        &self,
        candidates: Vec<CandidateProfile>,
        required_skills: &[RequiredSkill],
        min_match_percentage: f64,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let skills = candidate.skills.as_deref()?;
                let percentage = calculate_match_percentage(
                    skills,
                    required_skills,
                    &self.options,
                    self.synonyms,
                );

                if percentage >= min_match_percentage {
                    Some(RankedCandidate {
                        candidate_id: candidate.candidate_id.clone(),
                        match_percentage: percentage,
                        candidate,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable descending sort
        ranked.sort_by(|a, b| {
            b.match_percentage
                .partial_cmp(&a.match_percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        MatchResult {
            ranked,
            total_candidates,
        }
    }
}

impl SkillMatcher<'static> {
    pub fn with_default_options() -> Self {
        Self {
            options: MatchOptions::default(),
            synonyms: canonical::shared(),
        }
    }
}

impl Default for SkillMatcher<'static> {
    fn default() -> Self {
        Self::with_default_options()
    }
}

/// Re-filter an already ranked list against a new threshold
///
/// Scores are not recomputed; entries below the threshold are dropped
/// and the surviving order is preserved.
pub fn filter_by_percentage(
    ranked: Vec<RankedCandidate>,
    min_match_percentage: f64,
) -> Vec<RankedCandidate> {
    ranked
        .into_iter()
        .filter(|entry| entry.match_percentage >= min_match_percentage)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequiredSkill;

    fn create_candidate(id: &str, skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            candidate_id: id.to_string(),
            skills: Some(skills.iter().map(|s| (*s).to_string()).collect()),
            name: Some(format!("Candidate {}", id)),
        }
    }

    fn required(names: &[&str]) -> Vec<RequiredSkill> {
        names
            .iter()
            .map(|name| RequiredSkill::Name((*name).to_string()))
            .collect()
    }

    #[test]
    fn test_rank_candidates_basic() {
        let matcher = SkillMatcher::with_default_options();
        let job = required(&["javascript", "node"]);

        let candidates = vec![
            create_candidate("full", &["JavaScript", "nodejs"]),
            create_candidate("half", &["javascript"]),
            create_candidate("none", &["cooking"]),
        ];

        let result = matcher.rank_candidates(candidates, &job, 30.0);

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.ranked.len(), 2);
        assert_eq!(result.ranked[0].candidate_id, "full");
        assert_eq!(result.ranked[1].candidate_id, "half");
        assert_eq!(result.ranked[1].match_percentage, 50.0);
    }

    #[test]
    fn test_rank_sorts_descending() {
        let matcher = SkillMatcher::with_default_options();
        let job = required(&["python", "sql", "docker"]);

        let candidates = vec![
            create_candidate("one-of-three", &["python"]),
            create_candidate("all-three", &["python", "sql", "docker"]),
            create_candidate("two-of-three", &["python", "docker"]),
        ];

        let result = matcher.rank_candidates(candidates, &job, 30.0);

        let ids: Vec<&str> = result
            .ranked
            .iter()
            .map(|entry| entry.candidate_id.as_str())
            .collect();
        assert_eq!(ids, vec!["all-three", "two-of-three", "one-of-three"]);
    }

    #[test]
    fn test_rank_ties_keep_pool_order() {
        let matcher = SkillMatcher::with_default_options();
        let job = required(&["rust"]);

        let candidates = vec![
            create_candidate("first", &["rust"]),
            create_candidate("second", &["rust"]),
            create_candidate("third", &["rust"]),
        ];

        let result = matcher.rank_candidates(candidates, &job, 30.0);

        let ids: Vec<&str> = result
            .ranked
            .iter()
            .map(|entry| entry.candidate_id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_skips_missing_skill_lists() {
        let matcher = SkillMatcher::with_default_options();
        let job = required(&["python"]);

        let candidates = vec![
            CandidateProfile {
                candidate_id: "no-skills".to_string(),
                skills: None,
                name: None,
            },
            create_candidate("with-skills", &["python"]),
        ];

        let result = matcher.rank_candidates(candidates, &job, 30.0);

        // The skill-less record is skipped, not an error
        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.ranked.len(), 1);
        assert_eq!(result.ranked[0].candidate_id, "with-skills");
    }

    #[test]
    fn test_rank_empty_pool() {
        let matcher = SkillMatcher::with_default_options();
        let result = matcher.rank_candidates(vec![], &required(&["python"]), 30.0);

        assert_eq!(result.total_candidates, 0);
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_rank_empty_requirements() {
        let matcher = SkillMatcher::with_default_options();
        let candidates = vec![create_candidate("a", &["python"])];

        let result = matcher.rank_candidates(candidates, &[], 30.0);

        // Every candidate scores zero, none clears the default floor
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_filter_by_percentage() {
        let matcher = SkillMatcher::with_default_options();
        let job = required(&["python", "sql"]);

        let candidates = vec![
            create_candidate("both", &["python", "sql"]),
            create_candidate("one", &["python"]),
        ];

        let ranked = matcher.rank_candidates(candidates, &job, 0.0).ranked;
        assert_eq!(ranked.len(), 2);

        let refiltered = filter_by_percentage(ranked, 75.0);
        assert_eq!(refiltered.len(), 1);
        assert_eq!(refiltered[0].candidate_id, "both");
    }
}
