//! Facet kinds and facet extraction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::filter::salary::{self, BucketUnits, SalaryRange};
use crate::models::job::JobPosting;

/// Maximum number of distinct titles offered as facet values.
pub const TITLE_FACET_LIMIT: usize = 10;

/// A filterable attribute of a job posting. Serialized as its display label,
/// which is also the key used in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FacetKind {
    #[serde(rename = "Job Type")]
    JobType,
    #[serde(rename = "Location")]
    Location,
    #[serde(rename = "Title")]
    Title,
    #[serde(rename = "Work Mode")]
    WorkMode,
    #[serde(rename = "Job Level")]
    JobLevel,
    #[serde(rename = "Duration")]
    Duration,
    #[serde(rename = "Salary")]
    Salary,
    #[serde(rename = "Experience Level")]
    ExperienceLevel,
}

impl FacetKind {
    /// Display order of the facets.
    pub const ALL: [FacetKind; 8] = [
        FacetKind::JobType,
        FacetKind::Location,
        FacetKind::Title,
        FacetKind::WorkMode,
        FacetKind::JobLevel,
        FacetKind::Duration,
        FacetKind::Salary,
        FacetKind::ExperienceLevel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FacetKind::JobType => "Job Type",
            FacetKind::Location => "Location",
            FacetKind::Title => "Title",
            FacetKind::WorkMode => "Work Mode",
            FacetKind::JobLevel => "Job Level",
            FacetKind::Duration => "Duration",
            FacetKind::Salary => "Salary",
            FacetKind::ExperienceLevel => "Experience Level",
        }
    }

    /// The categorical field this facet reads. `None` for Salary, which is
    /// matched on numeric bounds instead.
    fn field(self, job: &JobPosting) -> Option<&str> {
        let value = match self {
            FacetKind::JobType => &job.job_type,
            FacetKind::Location => &job.location,
            FacetKind::Title => &job.title,
            FacetKind::WorkMode => &job.work_mode,
            FacetKind::JobLevel => &job.job_level,
            FacetKind::Duration => &job.duration,
            FacetKind::ExperienceLevel => &job.experience_level,
            FacetKind::Salary => return None,
        };
        value.as_deref()
    }

    /// True when any of `selected` matches `job` for this facet.
    pub fn matches(self, job: &JobPosting, selected: &[String], units: BucketUnits) -> bool {
        match self {
            FacetKind::Salary => selected
                .iter()
                .any(|bucket| SalaryRange::parse(bucket, units).matches(job)),
            _ => {
                let Some(field) = self.field(job) else {
                    return false;
                };
                let field = field.to_lowercase();
                selected
                    .iter()
                    .any(|value| field.contains(&value.to_lowercase()))
            }
        }
    }

    fn values(self, jobs: &[JobPosting]) -> Vec<String> {
        match self {
            FacetKind::Salary => salary::bucket_labels(jobs),
            FacetKind::Title => {
                let mut titles = distinct_values(jobs, self);
                titles.truncate(TITLE_FACET_LIMIT);
                titles
            }
            _ => distinct_values(jobs, self),
        }
    }
}

/// A facet offered to the user together with its selectable values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetDefinition {
    pub facet_type: FacetKind,
    pub values: Vec<String>,
}

/// Derives the facets for a job collection. Facets without any observed value
/// are left out.
pub fn compute_facets(jobs: &[JobPosting]) -> Vec<FacetDefinition> {
    FacetKind::ALL
        .iter()
        .map(|&kind| FacetDefinition {
            facet_type: kind,
            values: kind.values(jobs),
        })
        .filter(|facet| !facet.values.is_empty())
        .collect()
}

/// Distinct non-empty values of a categorical field, in first-seen order.
fn distinct_values(jobs: &[JobPosting], kind: FacetKind) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .filter_map(|job| kind.field(job))
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
