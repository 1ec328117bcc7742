use actix_web::{web, HttpResponse, Responder};

use crate::core::filters::fuzzy_filter;
use crate::models::{SearchFilterRequest, SearchFilterResponse};
use crate::routes::matches::AppState;

/// Configure search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/search/filter", web::post().to(filter_records));
}

/// Fuzzy-filter a collection of JSON records
///
/// POST /api/v1/search/filter
///
/// Request body:
/// ```json
/// {
///   "records": [{"title": "Backend Engineer"}],
///   "filters": {"title": "enginer"},
///   "options": { "fuzzyThreshold": 0.6 }
/// }
/// ```
///
/// An empty filter map returns the records unchanged.
async fn filter_records(
    state: web::Data<AppState>,
    req: web::Json<SearchFilterRequest>,
) -> impl Responder {
    let req = req.into_inner();
    let options = req.options.unwrap_or(state.search);
    let total_before = req.records.len();

    let records = fuzzy_filter(req.records, &req.filters, &options);

    tracing::debug!(
        "Fuzzy filter kept {} of {} records across {} criteria",
        records.len(),
        total_before,
        req.filters.len()
    );

    let total_results = records.len();
    HttpResponse::Ok().json(SearchFilterResponse {
        records,
        total_results,
    })
}
