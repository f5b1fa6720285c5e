//! Job source: fetches the job collection from the job listing service.
//!
//! The listing service owns the postings; this service only ever reads them in
//! bulk, once per keyword. There is no retry: a failed fetch is reported to the
//! caller and the catalog keeps whatever it held before.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::job::{JobListResponse, JobPosting};

#[derive(Debug, Error)]
pub enum JobSourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Listing service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Listing service reported failure: {0}")]
    Unsuccessful(String),
}

/// Anything that can hand back the job collection for a keyword.
///
/// Carried in `AppState` as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self, keyword: &str) -> Result<Vec<JobPosting>, JobSourceError>;
}

/// `JobSource` backed by `GET {url}?keyword=...` on the job listing service.
#[derive(Clone)]
pub struct HttpJobSource {
    client: Client,
    url: String,
}

impl HttpJobSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, JobSourceError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_jobs(&self, keyword: &str) -> Result<Vec<JobPosting>, JobSourceError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("keyword", keyword)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body));
        }

        let listing: JobListResponse = response.json().await?;
        into_jobs(listing)
    }
}

/// Error for a non-2xx reply, preferring the listing's own `message` over the
/// raw body.
fn api_error(status: u16, body: String) -> JobSourceError {
    let message = serde_json::from_str::<JobListResponse>(&body)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or(body);
    JobSourceError::Api { status, message }
}

fn into_jobs(listing: JobListResponse) -> Result<Vec<JobPosting>, JobSourceError> {
    if !listing.success {
        return Err(JobSourceError::Unsuccessful(
            listing
                .message
                .unwrap_or_else(|| "success: false".to_string()),
        ));
    }
    debug!("Listing service returned {} jobs", listing.jobs.len());
    Ok(listing.jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(json: &str) -> JobListResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_successful_listing_yields_jobs() {
        let jobs = into_jobs(listing(
            r#"{"success": true, "jobs": [{"title": "Dev"}, {"title": "QA"}]}"#,
        ))
        .unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].title.as_deref(), Some("QA"));
    }

    #[test]
    fn test_unsuccessful_listing_is_an_error() {
        let err = into_jobs(listing(r#"{"success": false, "message": "Jobs not found"}"#))
            .unwrap_err();
        assert!(matches!(err, JobSourceError::Unsuccessful(ref m) if m == "Jobs not found"));
    }

    #[test]
    fn test_missing_success_flag_counts_as_failure() {
        assert!(into_jobs(listing(r#"{"jobs": []}"#)).is_err());
    }

    #[test]
    fn test_api_error_uses_listing_message() {
        let err = api_error(
            404,
            r#"{"message": "Jobs not found", "success": false}"#.to_string(),
        );
        assert!(matches!(
            err,
            JobSourceError::Api { status: 404, ref message } if message == "Jobs not found"
        ));
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = api_error(502, "Bad Gateway".to_string());
        assert!(matches!(
            err,
            JobSourceError::Api { status: 502, ref message } if message == "Bad Gateway"
        ));

        let err = api_error(500, r#"{"success": false}"#.to_string());
        assert!(matches!(
            err,
            JobSourceError::Api { ref message, .. } if message == r#"{"success": false}"#
        ));
    }

    #[test]
    fn test_http_source_builds_with_timeout() {
        let source =
            HttpJobSource::new("http://localhost:4000/api/v1/job/get", Duration::from_secs(5));
        assert!(source.is_ok());
    }
}
