use chrono::{DateTime, NaiveDate, Utc};
use serde_derive::{Deserialize, Serialize};

/// Progress photo record. Carries no financial fields and never triggers a
/// recompute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPhoto {
    #[serde(default)]
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    pub date: NaiveDate,
    pub description: String,
    /// Ordered sequence of photo URLs.
    pub photo_urls: Vec<String>,
    pub uploaded_by_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Set-or-keep update for a progress photo.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_urls: Option<Vec<String>>,
}
