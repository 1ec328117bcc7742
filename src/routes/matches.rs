use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::canonical::SynonymTable;
use crate::core::matcher::{filter_by_percentage, SkillMatcher};
use crate::core::scoring::{calculate_match_percentage, check_skill_match};
use crate::models::{
    CheckSkillRequest, ErrorResponse, HealthResponse, MatchOptions, RankCandidatesRequest,
    RankCandidatesResponse, RefilterRequest, RefilterResponse, ScoreRequest, ScoreResponse,
    SearchOptions,
};

/// Application state shared across all handlers
///
/// Holds the configured defaults; per-request overrides in the body
/// take precedence over these.
#[derive(Clone)]
pub struct AppState {
    pub options: MatchOptions,
    pub min_match_percentage: f64,
    pub search: SearchOptions,
    pub synonyms: &'static SynonymTable,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_candidates))
        .route("/matches/score", web::post().to(score_candidate))
        .route("/matches/check", web::post().to(check_skill_pair))
        .route("/matches/refilter", web::post().to(refilter_matches))
        .route("/debug/echo", web::post().to(debug_echo));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Debug endpoint to echo raw JSON for debugging
async fn debug_echo(body: web::Bytes, req: actix_web::HttpRequest) -> impl Responder {
    let body_str = String::from_utf8_lossy(&body);
    tracing::info!(
        "DEBUG echo - path: {}, method: {}, body: {}",
        req.path(),
        req.method(),
        body_str
    );
    HttpResponse::Ok().json(serde_json::json!({
        "path": req.path(),
        "method": req.method().to_string(),
        "body": body_str,
    }))
}

/// Rank a candidate pool against a job's requirements
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "jobId": "string",
///   "requiredSkills": ["string" | {"skill": "string"}],
///   "candidates": [{"candidateId": "string", "skills": ["string"]}],
///   "minMatchPercentage": 30.0,
///   "options": { "fuzzyThreshold": 0.85 }
/// }
/// ```
///
/// Empty skill lists and skill-less candidates flow through the core
/// and come back as an empty shortlist, never as an error.
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let options = req.options.unwrap_or(state.options);
    let threshold = req
        .min_match_percentage
        .unwrap_or(state.min_match_percentage);

    tracing::info!(
        "Ranking {} candidates against {} required skills for job {}",
        req.candidates.len(),
        req.required_skills.len(),
        req.job_id
    );

    let matcher = SkillMatcher::new(options, state.synonyms);
    let result = matcher.rank_candidates(req.candidates, &req.required_skills, threshold);

    tracing::info!(
        "Job {}: {} of {} candidates cleared {}%",
        req.job_id,
        result.ranked.len(),
        result.total_candidates,
        threshold
    );

    HttpResponse::Ok().json(RankCandidatesResponse {
        job_id: req.job_id,
        match_run_id: uuid::Uuid::new_v4().to_string(),
        matches: result.ranked,
        total_candidates: result.total_candidates,
        matched_at: chrono::Utc::now(),
    })
}

/// Score one candidate skill set against a requirement list
///
/// POST /api/v1/matches/score
async fn score_candidate(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let req = req.into_inner();
    let options = req.options.unwrap_or(state.options);

    let match_percentage = calculate_match_percentage(
        &req.candidate_skills,
        &req.required_skills,
        &options,
        state.synonyms,
    );

    tracing::debug!(
        "Scored {} candidate skills against {} requirements: {}%",
        req.candidate_skills.len(),
        req.required_skills.len(),
        match_percentage
    );

    HttpResponse::Ok().json(ScoreResponse { match_percentage })
}

/// Classify a single skill pair
///
/// POST /api/v1/matches/check
async fn check_skill_pair(
    state: web::Data<AppState>,
    req: web::Json<CheckSkillRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let threshold = req.fuzzy_threshold.unwrap_or(state.options.fuzzy_threshold);
    let result = check_skill_match(
        &req.candidate_skill,
        &req.required_skill,
        threshold,
        state.synonyms,
    );

    HttpResponse::Ok().json(result)
}

/// Re-filter an already ranked list against a new threshold
///
/// POST /api/v1/matches/refilter
///
/// Pure list filter; scores are not recomputed.
async fn refilter_matches(req: web::Json<RefilterRequest>) -> impl Responder {
    let req = req.into_inner();
    let matches = filter_by_percentage(req.matches, req.min_match_percentage);

    HttpResponse::Ok().json(RefilterResponse { matches })
}
