//! Job list fetcher: forwards the active filters upstream, and on any failure
//! narrows the bundled demo catalogue with the same filters instead.

use serde::Serialize;

use crate::api_client::fallback::{resolve_or_fallback, DataSource, Resolved};
use crate::api_client::ApiClient;
use crate::config::mock::mock_jobs;
use crate::jobs::cards::{basic_card, JobCard};
use crate::jobs::query::JobSearch;
use crate::market::dashboard::{demo_banner, DemoBanner};
use crate::models::job::Job;

pub const EMPTY_STATE: &str = "No jobs found. Try adjusting your filters.";

pub async fn fetch_jobs<S>(api: &ApiClient, search: &S) -> Resolved<Vec<Job>>
where
    S: JobSearch + ?Sized,
{
    let pairs = search.query_pairs();
    resolve_or_fallback("jobs", api.search_jobs(&pairs), || {
        mock_jobs()
            .into_iter()
            .filter(|job| search.matches(job))
            .collect()
    })
    .await
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingsView {
    pub source: DataSource,
    pub banner: Option<DemoBanner>,
    pub total: usize,
    pub jobs: Vec<JobCard>,
    /// Set only when the resolved list is empty.
    pub empty_state: Option<&'static str>,
}

pub fn build_listings(resolved: &Resolved<Vec<Job>>) -> ListingsView {
    let jobs: Vec<JobCard> = resolved.data.iter().map(basic_card).collect();
    ListingsView {
        source: resolved.source,
        banner: demo_banner(resolved.source),
        total: jobs.len(),
        empty_state: jobs.is_empty().then_some(EMPTY_STATE),
        jobs,
    }
}
