use chrono::{DateTime, NaiveDate, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::errors::ValidationError;
use fractic_server_error::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Pending,
    Approved,
    Rejected,
}

impl ExpenseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "pending",
            ExpenseStatus::Approved => "approved",
            ExpenseStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ServerError> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ExpenseStatus::Pending),
            "approved" => Ok(ExpenseStatus::Approved),
            "rejected" => Ok(ExpenseStatus::Rejected),
            _ => Err(ValidationError::new("expense", "unknown status")),
        }
    }
}

/// Expense (a.k.a. reimbursement) record. Only `Approved` expenses count
/// toward a project's reimbursement cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default)]
    pub id: String,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub staff_id: Option<String>,
    pub staff_name: Option<String>,
    /// Subcategory name; doubles as the usage-counter key.
    pub subcategory: String,
    pub item_description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: ExpenseStatus,
    pub receipt_url: Option<String>,
    pub vendor: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Set-or-keep update for an expense. Outer `None` leaves the field
/// untouched; `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExpenseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}
