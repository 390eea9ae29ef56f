//! Stats fetcher: one upstream call per request, mock snapshot on any failure.

use crate::api_client::fallback::{resolve_or_fallback, Resolved};
use crate::api_client::ApiClient;
use crate::config::mock::{mock_admin_stats, mock_stats};
use crate::models::stats::{AdminStats, StatsSnapshot};

/// Always returns a fully-populated snapshot.
pub async fn fetch_dashboard_stats(api: &ApiClient) -> Resolved<StatsSnapshot> {
    resolve_or_fallback("job stats", api.fetch_stats(), mock_stats).await
}

pub async fn fetch_analytics_stats(api: &ApiClient) -> Resolved<AdminStats> {
    resolve_or_fallback("admin stats", api.fetch_admin_stats(), mock_admin_stats).await
}
