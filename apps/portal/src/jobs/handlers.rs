//! Axum route handlers for the job board: listings, cards, skill match and filters.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api_client::fallback::DataSource;
use crate::errors::AppError;
use crate::jobs::cards::{enhanced_card, parse_skill_list, EnhancedJobCard};
use crate::jobs::filters::{filter_options, FilterField, FilterOptions, Filters};
use crate::jobs::listings::{build_listings, fetch_jobs, ListingsView};
use crate::jobs::query::JobQuery;
use crate::jobs::skill_match::{skill_match, MatchTier};
use crate::market::dashboard::{demo_banner, DemoBanner};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CardsParams {
    #[serde(flatten)]
    pub query: JobQuery,
    /// Comma-separated visitor skills.
    pub skills: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CardsResponse {
    pub source: DataSource,
    pub banner: Option<DemoBanner>,
    pub user_skills: Vec<String>,
    pub cards: Vec<EnhancedJobCard>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub job_id: String,
    pub match_percent: u32,
    pub recommendation: String,
    pub confidence: f64,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub required: Vec<String>,
    #[serde(default)]
    pub user: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub score: u32,
    pub tier: MatchTier,
}

#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub filters: Filters,
    pub options: FilterOptions,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub filters: Filters,
    pub field: FilterField,
    pub value: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
///
/// One upstream search per request. Falls back to the demo catalogue.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Result<Json<ListingsView>, AppError> {
    query.validate().map_err(AppError::Validation)?;

    let resolved = fetch_jobs(&state.api, &query).await;
    Ok(Json(build_listings(&resolved)))
}

/// GET /api/v1/jobs/cards?skills=a,b
pub async fn handle_job_cards(
    State(state): State<AppState>,
    Query(params): Query<CardsParams>,
) -> Result<Json<CardsResponse>, AppError> {
    params.query.validate().map_err(AppError::Validation)?;

    let user_skills = parse_skill_list(params.skills.as_deref());
    let resolved = fetch_jobs(&state.api, &params.query).await;

    let cards = resolved
        .data
        .iter()
        .map(|job| enhanced_card(job, &user_skills))
        .collect();

    Ok(Json(CardsResponse {
        source: resolved.source,
        banner: demo_banner(resolved.source),
        user_skills,
        cards,
    }))
}

/// POST /api/v1/jobs/:id/analyze
///
/// Asks the upstream recommender for a match score. There is no demo
/// fallback: failures surface as 502/504.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if job_id.trim().is_empty() {
        return Err(AppError::Validation("job id cannot be empty".to_string()));
    }

    let recommendation = state.api.recommend(&job_id).await?;
    let match_percent = (recommendation.match_score * 100.0).round().clamp(0.0, 100.0) as u32;
    info!(job_id = %job_id, match_percent, "Recommendation received");

    Ok(Json(AnalyzeResponse {
        job_id: recommendation.job_id,
        match_percent,
        recommendation: recommendation.recommendation,
        confidence: recommendation.confidence,
    }))
}

/// POST /api/v1/jobs/match
pub async fn handle_skill_match(Json(request): Json<MatchRequest>) -> Json<MatchResponse> {
    let score = skill_match(&request.required, &request.user);
    Json(MatchResponse {
        score,
        tier: MatchTier::for_score(score),
    })
}

/// GET /api/v1/filters
///
/// Default filter state plus the option lists of the filter panel.
pub async fn handle_get_filters() -> Json<FiltersResponse> {
    Json(FiltersResponse {
        filters: Filters::default(),
        options: filter_options(),
    })
}

/// POST /api/v1/filters/toggle
pub async fn handle_toggle_filter(
    Json(request): Json<ToggleRequest>,
) -> Result<Json<Filters>, AppError> {
    let value = request.value.trim();
    if value.is_empty() {
        return Err(AppError::Validation("value cannot be empty".to_string()));
    }
    Ok(Json(request.filters.toggle(request.field, value)))
}

/// POST /api/v1/filters/reset
///
/// Body is optional; whatever filters are sent come back at their defaults.
pub async fn handle_reset_filters(body: Option<Json<Filters>>) -> Json<Filters> {
    let mut filters = body.map(|Json(f)| f).unwrap_or_default();
    filters.reset();
    Json(filters)
}

/// POST /api/v1/filters/search
///
/// Runs the listings fetch with the advanced filters.
pub async fn handle_filter_search(
    State(state): State<AppState>,
    Json(filters): Json<Filters>,
) -> Result<Json<ListingsView>, AppError> {
    if filters.salary_min > filters.salary_max {
        return Err(AppError::Validation(
            "salary_min cannot exceed salary_max".to_string(),
        ));
    }
    let resolved = fetch_jobs(&state.api, &filters).await;
    Ok(Json(build_listings(&resolved)))
}
