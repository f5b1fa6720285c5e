use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job posting as returned by the job listing service.
///
/// Every field is optional and read leniently: a field that is missing, `null`
/// or of an unexpected type decodes as `None`, so one odd posting only fails
/// the filters that reference that field instead of the whole listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub requirements: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub salary_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub salary_max: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub salary_currency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub experience_level: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub work_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub job_level: Option<String>,
    /// Open positions; Mongoose `Number`, so not necessarily integral.
    #[serde(default, deserialize_with = "lenient")]
    pub position: Option<f64>,
    /// Company id, or the populated company document.
    #[serde(default)]
    pub company: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Decodes any JSON value, keeping it only if it fits `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Body of `GET <jobs url>?keyword=...`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    pub message: Option<String>,
}
