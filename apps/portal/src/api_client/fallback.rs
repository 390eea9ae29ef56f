use std::future::Future;

use serde::Serialize;
use tracing::error;

use crate::api_client::ApiError;

/// Where a view's data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Demo,
}

/// Data that is always fully populated: either the upstream payload as-is or
/// the bundled demo value, never a mix of the two.
#[derive(Debug, Clone, Serialize)]
pub struct Resolved<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Resolved<T> {
    pub fn is_demo(&self) -> bool {
        self.source == DataSource::Demo
    }
}

/// Awaits `call` once. On any failure (transport, status, parse or timeout) the
/// error is logged once and `fallback` is substituted wholesale.
pub async fn resolve_or_fallback<T, Fut, F>(what: &str, call: Fut, fallback: F) -> Resolved<T>
where
    Fut: Future<Output = Result<T, ApiError>>,
    F: FnOnce() -> T,
{
    match call.await {
        Ok(data) => Resolved {
            data,
            source: DataSource::Live,
        },
        Err(e) => {
            error!("Failed to fetch {what}, falling back to demo data: {e}");
            Resolved {
                data: fallback(),
                source: DataSource::Demo,
            }
        }
    }
}
