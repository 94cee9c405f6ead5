use chrono::{DateTime, NaiveDate, Utc};
use serde_derive::{Deserialize, Serialize};

/// Project document. The derived financial fields (`actual_cost`,
/// `labor_cost`, `reimbursement_cost`, `actual_revenue`) are never hand-edited
/// -- they are only overwritten wholesale by a recompute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub budget: f64,
    #[serde(default)]
    pub actual_cost: f64,
    #[serde(default)]
    pub labor_cost: f64,
    #[serde(default)]
    pub reimbursement_cost: f64,
    #[serde(default)]
    pub actual_revenue: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial-merge payload for a project's derived fields. Only the fields set
/// by the writing aggregator are serialized; the store merges them into the
/// existing document and stamps `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFinancialsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reimbursement_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_revenue: Option<f64>,
}
