//! Job catalog: the job collection currently on offer and its derived facets.
//!
//! A snapshot is replaced wholesale on every successful refresh and never
//! mutated in place, so handlers can filter a snapshot without holding the lock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::filter::facets::{compute_facets, FacetDefinition};
use crate::job_source::{JobSource, JobSourceError};
use crate::models::job::JobPosting;

#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    pub keyword: String,
    pub jobs: Vec<JobPosting>,
    pub facets: Vec<FacetDefinition>,
    /// Ticket of the fetch that produced this snapshot; 0 before the first one.
    pub generation: u64,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    fn build(keyword: String, jobs: Vec<JobPosting>, generation: u64) -> Self {
        let facets = compute_facets(&jobs);
        Self {
            keyword,
            jobs,
            facets,
            generation,
            fetched_at: Some(Utc::now()),
        }
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            keyword: self.keyword.clone(),
            job_count: self.jobs.len(),
            generation: self.generation,
            fetched_at: self.fetched_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub keyword: String,
    pub job_count: usize,
    pub generation: u64,
    pub fetched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshOutcome {
    /// False when a newer refresh had already landed.
    pub applied: bool,
    pub catalog: CatalogSummary,
}

#[derive(Debug, Default)]
pub struct JobCatalog {
    current: RwLock<Arc<CatalogSnapshot>>,
    tickets: AtomicU64,
}

impl JobCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.current.read().await.clone()
    }

    /// Reserves the ordering slot for a fetch that is about to start.
    pub fn issue_ticket(&self) -> u64 {
        self.tickets.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Installs `jobs` unless a fetch issued after `ticket` has already been
    /// applied. Returns whether the collection was replaced.
    pub async fn apply(&self, ticket: u64, keyword: &str, jobs: Vec<JobPosting>) -> bool {
        let mut current = self.current.write().await;
        if ticket <= current.generation {
            debug!(
                "Dropping stale job list (ticket {ticket}, catalog at {})",
                current.generation
            );
            return false;
        }
        *current = Arc::new(CatalogSnapshot::build(keyword.to_string(), jobs, ticket));
        info!(
            "Catalog updated: {} jobs for keyword '{}' ({} facets)",
            current.jobs.len(),
            keyword,
            current.facets.len()
        );
        true
    }

    /// Fetches the collection for `keyword` and installs it. On failure the
    /// previous collection is left untouched.
    pub async fn refresh(
        &self,
        source: &dyn JobSource,
        keyword: &str,
    ) -> Result<RefreshOutcome, JobSourceError> {
        let ticket = self.issue_ticket();
        let jobs = match source.fetch_jobs(keyword).await {
            Ok(jobs) => jobs,
            Err(e) => {
                warn!("Job fetch for keyword '{keyword}' failed, keeping current catalog: {e}");
                return Err(e);
            }
        };
        let applied = self.apply(ticket, keyword, jobs).await;
        Ok(RefreshOutcome {
            applied,
            catalog: self.snapshot().await.summary(),
        })
    }
}
