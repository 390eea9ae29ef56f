//! Axum route handlers for the dashboard and analytics views.

use axum::{extract::State, Json};
use tracing::debug;

use crate::market::analytics::{build_analytics, AnalyticsView};
use crate::market::dashboard::{build_dashboard, DashboardView};
use crate::market::stats::{fetch_analytics_stats, fetch_dashboard_stats};
use crate::state::AppState;

/// GET /api/v1/dashboard
///
/// Fetches the job stats once and renders the dashboard. Never fails: an
/// unreachable upstream yields the demo snapshot with the banner raised.
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let resolved = fetch_dashboard_stats(&state.api).await;
    Json(build_dashboard(&resolved))
}

/// POST /api/v1/dashboard/refresh
pub async fn handle_dashboard_refresh(State(state): State<AppState>) -> Json<DashboardView> {
    let resolved = fetch_dashboard_stats(&state.api).await;
    debug!(demo = resolved.is_demo(), "Dashboard refreshed");
    Json(build_dashboard(&resolved))
}

/// GET /api/v1/analytics
pub async fn handle_analytics(State(state): State<AppState>) -> Json<AnalyticsView> {
    let resolved = fetch_analytics_stats(&state.api).await;
    Json(build_analytics(&resolved))
}

/// POST /api/v1/analytics/refresh
pub async fn handle_analytics_refresh(State(state): State<AppState>) -> Json<AnalyticsView> {
    let resolved = fetch_analytics_stats(&state.api).await;
    debug!(demo = resolved.is_demo(), "Analytics refreshed");
    Json(build_analytics(&resolved))
}
