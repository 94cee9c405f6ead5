use chrono::{DateTime, NaiveDate, Utc};

use super::{
    assignment::TaskAssignment,
    expense::{Expense, ExpenseStatus},
    income::{Income, IncomeStatus},
    photo::ProjectPhoto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Assignment,
    Expense,
    Income,
    Photo,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Assignment => "assignment",
            ActivityKind::Expense => "expense",
            ActivityKind::Income => "income",
            ActivityKind::Photo => "photo",
        }
    }
}

/// One entry of the merged activity ledger: common fields shared by all four
/// record kinds, plus a kind-specific payload resolved by exhaustive
/// matching.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub id: String,
    pub date: NaiveDate,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub payload: ActivityPayload,
}

#[derive(Debug, Clone)]
pub enum ActivityPayload {
    Assignment {
        staff_id: String,
        staff_name: String,
        daily_rate: f64,
        task_description: String,
    },
    Expense {
        staff_id: Option<String>,
        staff_name: Option<String>,
        subcategory: String,
        item_description: String,
        amount: f64,
        status: ExpenseStatus,
        receipt_url: Option<String>,
        vendor: Option<String>,
        notes: Option<String>,
    },
    Income {
        staff_id: Option<String>,
        staff_name: Option<String>,
        category: String,
        amount: f64,
        status: IncomeStatus,
        invoice_url: Option<String>,
        client: Option<String>,
    },
    Photo {
        description: String,
        photo_urls: Vec<String>,
        uploaded_by_name: String,
    },
}

impl ActivityEntry {
    pub fn kind(&self) -> ActivityKind {
        match &self.payload {
            ActivityPayload::Assignment { .. } => ActivityKind::Assignment,
            ActivityPayload::Expense { .. } => ActivityKind::Expense,
            ActivityPayload::Income { .. } => ActivityKind::Income,
            ActivityPayload::Photo { .. } => ActivityKind::Photo,
        }
    }

    pub fn staff_id(&self) -> Option<&str> {
        match &self.payload {
            ActivityPayload::Assignment { staff_id, .. } => Some(staff_id),
            ActivityPayload::Expense { staff_id, .. } => staff_id.as_deref(),
            ActivityPayload::Income { staff_id, .. } => staff_id.as_deref(),
            ActivityPayload::Photo { .. } => None,
        }
    }

    pub fn staff_name(&self) -> Option<&str> {
        match &self.payload {
            ActivityPayload::Assignment { staff_name, .. } => Some(staff_name),
            ActivityPayload::Expense { staff_name, .. } => staff_name.as_deref(),
            ActivityPayload::Income { staff_name, .. } => staff_name.as_deref(),
            ActivityPayload::Photo { .. } => None,
        }
    }

    /// Monetary value backing the entry: expense/income amount, assignment
    /// daily rate. Photos carry none.
    pub fn amount(&self) -> Option<f64> {
        match &self.payload {
            ActivityPayload::Assignment { daily_rate, .. } => Some(*daily_rate),
            ActivityPayload::Expense { amount, .. } => Some(*amount),
            ActivityPayload::Income { amount, .. } => Some(*amount),
            ActivityPayload::Photo { .. } => None,
        }
    }

    /// Status label for expense/income entries. Assignments and photos have
    /// no status and always pass a status filter.
    pub fn status_label(&self) -> Option<&'static str> {
        match &self.payload {
            ActivityPayload::Expense { status, .. } => Some(status.label()),
            ActivityPayload::Income { status, .. } => Some(status.label()),
            _ => None,
        }
    }

    pub fn description(&self) -> &str {
        match &self.payload {
            ActivityPayload::Assignment {
                task_description, ..
            } => task_description,
            ActivityPayload::Expense {
                item_description, ..
            } => item_description,
            ActivityPayload::Income { category, .. } => category,
            ActivityPayload::Photo { description, .. } => description,
        }
    }
}

impl From<TaskAssignment> for ActivityEntry {
    fn from(a: TaskAssignment) -> Self {
        ActivityEntry {
            id: a.id,
            date: a.date,
            project_id: Some(a.project_id),
            project_name: Some(a.project_name),
            created_at: a.created_at,
            payload: ActivityPayload::Assignment {
                staff_id: a.staff_id,
                staff_name: a.staff_name,
                daily_rate: a.daily_rate,
                task_description: a.task_description,
            },
        }
    }
}

impl From<Expense> for ActivityEntry {
    fn from(e: Expense) -> Self {
        ActivityEntry {
            id: e.id,
            date: e.date,
            project_id: e.project_id,
            project_name: e.project_name,
            created_at: e.created_at,
            payload: ActivityPayload::Expense {
                staff_id: e.staff_id,
                staff_name: e.staff_name,
                subcategory: e.subcategory,
                item_description: e.item_description,
                amount: e.amount,
                status: e.status,
                receipt_url: e.receipt_url,
                vendor: e.vendor,
                notes: e.notes,
            },
        }
    }
}

impl From<Income> for ActivityEntry {
    fn from(i: Income) -> Self {
        ActivityEntry {
            id: i.id,
            date: i.date,
            project_id: i.project_id,
            project_name: i.project_name,
            created_at: i.created_at,
            payload: ActivityPayload::Income {
                staff_id: i.staff_id,
                staff_name: i.staff_name,
                category: i.category,
                amount: i.amount,
                status: i.status,
                invoice_url: i.invoice_url,
                client: i.client,
            },
        }
    }
}

impl From<ProjectPhoto> for ActivityEntry {
    fn from(p: ProjectPhoto) -> Self {
        ActivityEntry {
            id: p.id,
            date: p.date,
            project_id: Some(p.project_id),
            project_name: Some(p.project_name),
            created_at: p.created_at,
            payload: ActivityPayload::Photo {
                description: p.description,
                photo_urls: p.photo_urls,
                uploaded_by_name: p.uploaded_by_name,
            },
        }
    }
}
