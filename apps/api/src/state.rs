use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::job_source::JobSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<JobCatalog>,
    /// Where refreshes fetch from. Default: `HttpJobSource` on `JOBS_API_URL`.
    pub job_source: Arc<dyn JobSource>,
    pub config: Config,
}
