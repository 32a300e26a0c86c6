use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, HealthResponse, MatchesQuery, NoMatchResponse};
use crate::services::{PostgresClient, PostgresError};
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
    /// Score a match needs before a notification is stored
    pub notify_min_score: u32,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches", web::get().to(find_matches))
        .route("/matches/request/{request_id}", web::get().to(best_match_for_request));
}

/// Map a storage failure to a JSON error response
pub(crate) fn storage_error(context: &str, err: PostgresError) -> HttpResponse {
    match err {
        PostgresError::NotFound(what) => {
            tracing::info!("{}: {} not found", context, what);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: format!("{} not found", what),
                status_code: 404,
            })
        }
        PostgresError::SqlxError(e) => {
            tracing::error!("{}: {}", context, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: context.to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Batch matches endpoint
///
/// GET /api/v1/matches?minScore=30
///
/// Pairs every awaiting parent request with every unprocessed nanny
/// application and returns the pairs reaching `minScore`, best first.
async fn find_matches(
    state: web::Data<AppState>,
    query: web::Query<MatchesQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for find_matches query: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let requests = match state.postgres.get_parent_requests().await {
        Ok(requests) => requests,
        Err(e) => return storage_error("Failed to load parent requests", e),
    };

    let nannies = match state.postgres.get_nanny_applications().await {
        Ok(nannies) => nannies,
        Err(e) => return storage_error("Failed to load nanny applications", e),
    };

    let matches = state.matcher.find_matches(&requests, &nannies, query.min_score);

    tracing::info!(
        "Returning {} matches (min score {}) from {} requests x {} applications",
        matches.len(),
        query.min_score.unwrap_or(state.matcher.default_min_score()),
        requests.len(),
        nannies.len()
    );

    HttpResponse::Ok().json(matches)
}

/// Best match for one parent request
///
/// GET /api/v1/matches/request/{requestId}
async fn best_match_for_request(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let request_id = path.into_inner();

    let request = match state.postgres.get_parent_request(&request_id).await {
        Ok(request) => request,
        Err(e) => return storage_error("Failed to load parent request", e),
    };

    let nannies = match state.postgres.get_nanny_applications().await {
        Ok(nannies) => nannies,
        Err(e) => return storage_error("Failed to load nanny applications", e),
    };

    match state.matcher.best_match_for(&request, &nannies) {
        Some(best) => {
            tracing::info!(
                "Best match for request {}: nanny {} ({})",
                request_id,
                best.score.nanny_id,
                best.score.score
            );
            HttpResponse::Ok().json(best)
        }
        None => {
            tracing::debug!("No suitable match for request {}", request_id);
            HttpResponse::Ok().json(NoMatchResponse::default())
        }
    }
}
