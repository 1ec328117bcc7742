use crate::core::canonical::{normalize, SynonymTable};
use crate::core::similarity::similarity;
use crate::models::{MatchCategory, MatchOptions, RequiredSkill, SkillMatch};

/// Score assigned to a known abbreviation or synonym pair
const ABBREVIATION_SCORE: f64 = 0.98;

/// Containment only counts when the shorter/longer length ratio
/// reaches this floor
const PARTIAL_RATIO_FLOOR: f64 = 0.7;

/// Discount applied to partial containment scores
const PARTIAL_SCALE: f64 = 0.9;

/// Discount applied to fuzzy scores so a typo match never outranks a
/// structural match of equal raw similarity
const FUZZY_SCALE: f64 = 0.8;

/// Classify the relationship between one candidate skill and one
/// required skill
///
/// Both names are normalized (trimmed, lower-cased) before comparison,
/// then the rules run in priority order and the first hit wins:
/// 1. exact: normalized names are equal -> score 1.0
/// 2. abbreviation: names share a synonym group -> score 0.98
/// 3. partial: one name contains the other and the length ratio is at
///    least 0.7 -> score 0.9 * ratio
/// 4. fuzzy: similarity clears `fuzzy_threshold` -> score similarity * 0.8
///
/// Anything else is a non-match whose score carries the raw similarity
/// of the pair. Exact and synonym checks run first so a coincidentally
/// high fuzzy score can never shadow them.
pub fn check_skill_match(
    candidate_skill: &str,
    required_skill: &str,
    fuzzy_threshold: f64,
    synonyms: &SynonymTable,
) -> SkillMatch {
    let candidate = normalize(candidate_skill);
    let required = normalize(required_skill);

    if candidate == required {
        return SkillMatch {
            is_match: true,
            score: 1.0,
            category: MatchCategory::Exact,
        };
    }

    if synonyms.are_synonyms(&candidate, &required) {
        return SkillMatch {
            is_match: true,
            score: ABBREVIATION_SCORE,
            category: MatchCategory::Abbreviation,
        };
    }

    if candidate.contains(&required) || required.contains(&candidate) {
        let candidate_len = candidate.chars().count();
        let required_len = required.chars().count();
        let shorter = candidate_len.min(required_len);
        let longer = candidate_len.max(required_len);

        // Containment of a very short name inside a long one says
        // little, so those fall through to the fuzzy check.
        let ratio = shorter as f64 / longer as f64;
        if ratio >= PARTIAL_RATIO_FLOOR {
            return SkillMatch {
                is_match: true,
                score: PARTIAL_SCALE * ratio,
                category: MatchCategory::Partial,
            };
        }
    }

    let score = similarity(&candidate, &required);
    if score >= fuzzy_threshold {
        SkillMatch {
            is_match: true,
            score: score * FUZZY_SCALE,
            category: MatchCategory::Fuzzy,
        }
    } else {
        SkillMatch {
            is_match: false,
            score,
            category: MatchCategory::None,
        }
    }
}

/// Overall match percentage (0-100) of a candidate's skills against a
/// job's requirement list
///
/// For every required skill the best-scoring match across all candidate
/// skills is kept, weighted by its category weight from `options`, and
/// summed:
///
/// percentage = sum(best_score * category_weight) / required_count * 100
///
/// Required skills nobody matches contribute zero. The result is
/// rounded to 2 decimal places. Empty or blank-only input on either
/// side yields 0 rather than an error; scoring must never block the
/// job-posting flow.
pub fn calculate_match_percentage(
    candidate_skills: &[String],
    required_skills: &[RequiredSkill],
    options: &MatchOptions,
    synonyms: &SynonymTable,
) -> f64 {
    if candidate_skills.is_empty() || required_skills.is_empty() {
        return 0.0;
    }

    let candidate_names = normalize_names(candidate_skills);
    let required_names: Vec<String> = required_skills
        .iter()
        .map(|entry| normalize(entry.skill_name()))
        .filter(|name| !name.is_empty())
        .collect();

    if candidate_names.is_empty() || required_names.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for required in &required_names {
        let mut best: Option<SkillMatch> = None;

        for candidate in &candidate_names {
            let result = check_skill_match(candidate, required, options.fuzzy_threshold, synonyms);
            if !result.is_match {
                continue;
            }

            let improves = match best {
                Some(current) => result.score > current.score,
                None => true,
            };
            if improves {
                best = Some(result);
            }
        }

        if let Some(found) = best {
            total += found.score * weight_for(found.category, options);
        }
    }

    round2(total / required_names.len() as f64 * 100.0)
}

/// Category weight from the caller-supplied options
#[inline]
fn weight_for(category: MatchCategory, options: &MatchOptions) -> f64 {
    match category {
        MatchCategory::Exact => options.exact_match_weight,
        MatchCategory::Abbreviation => options.abbreviation_match_weight,
        MatchCategory::Partial => options.partial_match_weight,
        MatchCategory::Fuzzy => options.fuzzy_match_weight,
        MatchCategory::None => 0.0,
    }
}

/// Drop blank entries and normalize the rest
fn normalize_names(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|name| normalize(name))
        .filter(|name| !name.is_empty())
        .collect()
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
