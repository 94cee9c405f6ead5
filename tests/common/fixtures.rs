use std::sync::Arc;

use chrono::NaiveDate;
use project_books::{
    entities::{
        Expense, ExpenseStatus, Income, IncomeStatus, Project, ProjectPhoto, TaskAssignment,
    },
    stores::MemoryStore,
    util::ProjectBooksUtil,
};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Fresh facade over an empty in-memory store.
pub fn new_books() -> ProjectBooksUtil<MemoryStore> {
    ProjectBooksUtil::new(Arc::new(MemoryStore::new()))
}

pub fn make_project(budget: f64) -> Project {
    Project {
        id: String::new(),
        budget,
        actual_cost: 0.0,
        labor_cost: 0.0,
        reimbursement_cost: 0.0,
        actual_revenue: 0.0,
        start_date: day(2026, 1, 15),
        end_date: None,
        updated_at: None,
    }
}

pub fn make_assignment(
    project_id: &str,
    staff_id: &str,
    staff_name: &str,
    daily_rate: f64,
    date: NaiveDate,
) -> TaskAssignment {
    TaskAssignment {
        id: String::new(),
        project_id: project_id.to_string(),
        project_name: "Harbor Office Fit-out".to_string(),
        staff_id: staff_id.to_string(),
        staff_name: staff_name.to_string(),
        daily_rate,
        date,
        task_description: "Drywall installation".to_string(),
        created_at: None,
        updated_at: None,
    }
}

pub fn make_expense(
    project_id: Option<&str>,
    subcategory: &str,
    item_description: &str,
    amount: f64,
    status: ExpenseStatus,
    date: NaiveDate,
) -> Expense {
    Expense {
        id: String::new(),
        project_id: project_id.map(str::to_string),
        project_name: project_id.map(|_| "Harbor Office Fit-out".to_string()),
        staff_id: None,
        staff_name: None,
        subcategory: subcategory.to_string(),
        item_description: item_description.to_string(),
        amount,
        date,
        status,
        receipt_url: None,
        vendor: None,
        notes: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn make_income(
    project_id: Option<&str>,
    category: &str,
    amount: f64,
    status: IncomeStatus,
    date: NaiveDate,
) -> Income {
    Income {
        id: String::new(),
        project_id: project_id.map(str::to_string),
        project_name: project_id.map(|_| "Harbor Office Fit-out".to_string()),
        staff_id: None,
        staff_name: None,
        category: category.to_string(),
        amount,
        date,
        status,
        invoice_url: None,
        client: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn make_photo(
    project_id: &str,
    uploaded_by_name: &str,
    description: &str,
    date: NaiveDate,
) -> ProjectPhoto {
    ProjectPhoto {
        id: String::new(),
        project_id: project_id.to_string(),
        project_name: "Harbor Office Fit-out".to_string(),
        date,
        description: description.to_string(),
        photo_urls: vec!["https://photos.example/1.jpg".to_string()],
        uploaded_by_name: uploaded_by_name.to_string(),
        created_at: None,
    }
}
