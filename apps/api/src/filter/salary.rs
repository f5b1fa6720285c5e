//! Salary buckets: derives the bucket labels offered for a job collection and
//! parses a selected label back into numeric bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::job::JobPosting;

const FORTY_K: f64 = 40_000.0;
const ONE_LAKH: f64 = 100_000.0;
const FIVE_LAKH: f64 = 500_000.0;

const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;

/// Label whose upper bound is never parseable; see [`SalaryRange::matches`].
pub const OPEN_ENDED_BUCKET: &str = "50lakh+";

const FULL_LADDER: [&str; 8] = [
    "0-40k",
    "40k-1lakh",
    "1-10lakh",
    "10-20lakh",
    "20-30lakh",
    "30-40lakh",
    "40-50lakh",
    OPEN_ENDED_BUCKET,
];

/// How the digits of a bucket label are turned into rupee amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketUnits {
    /// Digits are scaled by their `k` / `lakh` suffix: `"0-40k"` is 0..=40 000.
    #[default]
    Scaled,
    /// Digits are taken verbatim after stripping everything but digits and
    /// hyphens: `"0-40k"` is 0..=40.
    Raw,
}

#[derive(Debug, Error)]
#[error("unknown salary bucket units '{0}' (expected 'scaled' or 'raw')")]
pub struct UnknownBucketUnits(String);

impl FromStr for BucketUnits {
    type Err = UnknownBucketUnits;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scaled" => Ok(BucketUnits::Scaled),
            "raw" => Ok(BucketUnits::Raw),
            other => Err(UnknownBucketUnits(other.to_string())),
        }
    }
}

impl fmt::Display for BucketUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketUnits::Scaled => f.write_str("scaled"),
            BucketUnits::Raw => f.write_str("raw"),
        }
    }
}

/// Bucket labels for the salary facet, or an empty list when the collection
/// carries no usable salary bounds.
///
/// Zero bounds are skipped along with absent ones, the same way the listing
/// UI has always treated them.
pub fn bucket_labels(jobs: &[JobPosting]) -> Vec<String> {
    let overall_min = jobs
        .iter()
        .filter_map(|j| j.salary_min)
        .filter(|v| is_present(*v))
        .reduce(f64::min);
    let overall_max = jobs
        .iter()
        .filter_map(|j| j.salary_max)
        .filter(|v| is_present(*v))
        .reduce(f64::max);

    let (Some(min), Some(max)) = (overall_min, overall_max) else {
        return Vec::new();
    };

    let labels: &[&str] = if max <= FORTY_K {
        &FULL_LADDER[..1]
    } else if min < FORTY_K && max <= ONE_LAKH {
        &FULL_LADDER[..2]
    } else if min < ONE_LAKH && max <= FIVE_LAKH {
        &["0-40k", "40k-1lakh", "1lakh-5lakh"]
    } else {
        &FULL_LADDER
    };

    labels.iter().map(|l| l.to_string()).collect()
}

fn is_present(v: f64) -> bool {
    v != 0.0 && !v.is_nan()
}

/// Numeric bounds parsed from a bucket label. A `None` side is unparseable and
/// fails every comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl SalaryRange {
    pub fn parse(label: &str, units: BucketUnits) -> Self {
        match units {
            BucketUnits::Scaled => parse_scaled(label),
            BucketUnits::Raw => parse_raw(label),
        }
    }

    /// `salaryMin >= min && salaryMax <= max`; any missing side is a non-match.
    pub fn matches(&self, job: &JobPosting) -> bool {
        match (job.salary_min, job.salary_max, self.min, self.max) {
            (Some(job_min), Some(job_max), Some(min), Some(max)) => {
                job_min >= min as f64 && job_max <= max as f64
            }
            _ => false,
        }
    }
}

fn parse_raw(label: &str) -> SalaryRange {
    let cleaned: String = label
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    let mut parts = cleaned.split('-').map(leading_int);
    SalaryRange {
        min: parts.next().flatten(),
        max: parts.next().flatten(),
    }
}

fn parse_scaled(label: &str) -> SalaryRange {
    let label = label.to_ascii_lowercase();
    let Some((low, high)) = label.split_once('-') else {
        // No hyphen: the label names a floor only ("50lakh+").
        return SalaryRange {
            min: scaled_side(&label, None),
            max: None,
        };
    };

    let high_unit = unit_of(high);
    SalaryRange {
        min: scaled_side(low, high_unit),
        max: scaled_side(high, None),
    }
}

fn scaled_side(side: &str, inherited_unit: Option<u64>) -> Option<u64> {
    let digits: String = side.chars().filter(|c| c.is_ascii_digit()).collect();
    let value = digits.parse::<u64>().ok()?;
    let unit = unit_of(side).or(inherited_unit).unwrap_or(1);
    value.checked_mul(unit)
}

fn unit_of(side: &str) -> Option<u64> {
    if side.contains("lakh") {
        Some(LAKH)
    } else if side.trim_end_matches('+').ends_with('k') {
        Some(THOUSAND)
    } else {
        None
    }
}

/// Integer prefix of `s`, `None` when it does not start with a digit.
fn leading_int(s: &str) -> Option<u64> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salaried(min: f64, max: f64) -> JobPosting {
        JobPosting {
            salary_min: Some(min),
            salary_max: Some(max),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_bucket_when_max_under_forty_k() {
        let jobs = vec![salaried(10_000.0, 25_000.0), salaried(15_000.0, 40_000.0)];
        assert_eq!(bucket_labels(&jobs), vec!["0-40k"]);
    }

    #[test]
    fn test_two_buckets_for_twenty_to_forty_five_k() {
        let jobs = vec![salaried(30_000.0, 45_000.0), salaried(20_000.0, 35_000.0)];
        assert_eq!(bucket_labels(&jobs), vec!["0-40k", "40k-1lakh"]);
    }

    #[test]
    fn test_three_buckets_up_to_five_lakh() {
        let jobs = vec![salaried(50_000.0, 300_000.0)];
        assert_eq!(
            bucket_labels(&jobs),
            vec!["0-40k", "40k-1lakh", "1lakh-5lakh"]
        );
    }

    #[test]
    fn test_full_ladder_above_five_lakh() {
        let jobs = vec![salaried(200_000.0, 900_000.0)];
        let labels = bucket_labels(&jobs);
        assert_eq!(labels.len(), 8);
        assert_eq!(labels.last().map(String::as_str), Some(OPEN_ENDED_BUCKET));
    }

    #[test]
    fn test_min_above_forty_k_skips_second_rule() {
        // overallMin 50k, overallMax 90k: rule 2 needs min < 40k, rule 3 applies.
        let jobs = vec![salaried(50_000.0, 90_000.0)];
        assert_eq!(bucket_labels(&jobs).len(), 3);
    }

    #[test]
    fn test_no_buckets_without_salary_data() {
        let jobs = vec![JobPosting::default()];
        assert!(bucket_labels(&jobs).is_empty());
    }

    #[test]
    fn test_zero_bounds_are_ignored() {
        let jobs = vec![salaried(0.0, 0.0)];
        assert!(bucket_labels(&jobs).is_empty());

        let jobs = vec![salaried(0.0, 30_000.0), salaried(45_000.0, 60_000.0)];
        // min ignores the 0, so overallMin = 45k and rule 3 applies.
        assert_eq!(bucket_labels(&jobs).len(), 3);
    }

    #[test]
    fn test_scaled_parse_of_known_labels() {
        let p = |l| SalaryRange::parse(l, BucketUnits::Scaled);
        assert_eq!(p("0-40k"), SalaryRange { min: Some(0), max: Some(40_000) });
        assert_eq!(
            p("40k-1lakh"),
            SalaryRange { min: Some(40_000), max: Some(100_000) }
        );
        assert_eq!(
            p("1-10lakh"),
            SalaryRange { min: Some(100_000), max: Some(1_000_000) }
        );
        assert_eq!(
            p("1lakh-5lakh"),
            SalaryRange { min: Some(100_000), max: Some(500_000) }
        );
        assert_eq!(
            p(OPEN_ENDED_BUCKET),
            SalaryRange { min: Some(5_000_000), max: None }
        );
    }

    #[test]
    fn test_raw_parse_strips_units() {
        let p = |l| SalaryRange::parse(l, BucketUnits::Raw);
        assert_eq!(p("0-40k"), SalaryRange { min: Some(0), max: Some(40) });
        assert_eq!(p("40k-1lakh"), SalaryRange { min: Some(40), max: Some(1) });
        assert_eq!(p(OPEN_ENDED_BUCKET), SalaryRange { min: Some(50), max: None });
        assert_eq!(p("lots"), SalaryRange { min: None, max: None });
    }

    #[test]
    fn test_zero_to_forty_k_matches_twenty_to_thirty_five_k() {
        let range = SalaryRange::parse("0-40k", BucketUnits::Scaled);
        assert!(range.matches(&salaried(20_000.0, 35_000.0)));
        assert!(!range.matches(&salaried(20_000.0, 45_000.0)));
    }

    #[test]
    fn test_open_ended_bucket_never_matches() {
        let range = SalaryRange::parse(OPEN_ENDED_BUCKET, BucketUnits::Scaled);
        assert!(!range.matches(&salaried(6_000_000.0, 7_000_000.0)));
    }

    #[test]
    fn test_missing_job_bound_never_matches() {
        let range = SalaryRange::parse("0-40k", BucketUnits::Scaled);
        let job = JobPosting {
            salary_min: Some(10_000.0),
            ..Default::default()
        };
        assert!(!range.matches(&job));
    }

    #[test]
    fn test_bucket_units_from_str() {
        assert_eq!("Scaled".parse::<BucketUnits>().unwrap(), BucketUnits::Scaled);
        assert_eq!("raw".parse::<BucketUnits>().unwrap(), BucketUnits::Raw);
        assert!("lakh".parse::<BucketUnits>().is_err());
    }
}
