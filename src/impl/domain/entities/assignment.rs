use chrono::{DateTime, NaiveDate, Utc};
use serde_derive::{Deserialize, Serialize};

/// Staff task assignment. Carries no status field -- every assignment always
/// counts toward its project's labor cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssignment {
    #[serde(default)]
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    pub staff_id: String,
    pub staff_name: String,
    pub daily_rate: f64,
    pub date: NaiveDate,
    pub task_description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Set-or-keep update for a task assignment. `None` fields are left untouched
/// by the store's partial merge.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,
}
