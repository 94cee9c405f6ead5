use chrono::{DateTime, NaiveDate, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::errors::ValidationError;
use fractic_server_error::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeStatus {
    Pending,
    Received,
    Cancelled,
}

impl IncomeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IncomeStatus::Pending => "pending",
            IncomeStatus::Received => "received",
            IncomeStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ServerError> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(IncomeStatus::Pending),
            "received" => Ok(IncomeStatus::Received),
            "cancelled" => Ok(IncomeStatus::Cancelled),
            _ => Err(ValidationError::new("income", "unknown status")),
        }
    }
}

/// Income record. Only `Received` incomes count toward a project's actual
/// revenue, symmetric with the approved-only rule on the expense side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    #[serde(default)]
    pub id: String,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub staff_id: Option<String>,
    pub staff_name: Option<String>,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: IncomeStatus,
    pub invoice_url: Option<String>,
    pub client: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Set-or-keep update for an income. Outer `None` leaves the field untouched;
/// `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IncomeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Option<String>>,
}
