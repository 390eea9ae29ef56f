use std::sync::Arc;
use std::time::Duration;

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::contact::submission::MessageTransport;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    /// Pluggable contact transport. Default: SimulatedTransport, which sends nothing.
    pub transport: Arc<dyn MessageTransport>,
    /// How long a submitted contact form keeps its confirmation visible.
    pub contact_display: Duration,
}
