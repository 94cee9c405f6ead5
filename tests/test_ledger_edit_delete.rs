//! Integration tests for uniform edit/delete dispatch through the ledger.
//!
//! Tests cover:
//! - Projecting an entry into the shared draft shape
//! - Kind-specific save validation (required fields, status, date format)
//! - Saves and deletes re-triggering the affected aggregates
//! - Unknown entry ids

mod common;

use common::*;
use fractic_server_error::ServerError;
use project_books::entities::{ExpenseStatus, IncomeStatus};

#[tokio::test]
async fn test_start_edit_projects_expense_fields() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    let expense = books
        .create_expense(make_expense(
            Some(&project.id),
            "Materials",
            "Site materials",
            125.0,
            ExpenseStatus::Approved,
            day(2026, 3, 12),
        ))
        .await?;

    let draft = books.start_edit(&expense.id).await?;
    assert_eq!(draft.description.as_deref(), Some("Site materials"));
    assert_eq!(draft.amount, Some(125.0));
    assert_eq!(draft.status.as_deref(), Some("approved"));
    assert_eq!(draft.subcategory.as_deref(), Some("Materials"));
    assert_eq!(draft.date.as_deref(), Some("2026-03-12"));
    Ok(())
}

#[tokio::test]
async fn test_save_edit_updates_expense_and_aggregate() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    let expense = books
        .create_expense(make_expense(
            Some(&project.id),
            "Materials",
            "Site materials",
            125.0,
            ExpenseStatus::Approved,
            day(2026, 3, 12),
        ))
        .await?;

    let mut draft = books.start_edit(&expense.id).await?;
    draft.amount = Some(200.0);
    books.save_edit(&expense.id, &draft).await?;

    let stored = books
        .store()
        .get_expense(&expense.id)
        .await?
        .expect("expense should exist");
    assert_eq!(stored.amount, 200.0);

    let project = books
        .store()
        .get_project(&project.id)
        .await?
        .expect("project should exist");
    assert_eq!(project.reimbursement_cost, 200.0);
    assert_eq!(project.actual_cost, 200.0);
    Ok(())
}

#[tokio::test]
async fn test_save_edit_requires_expense_description() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    let expense = books
        .create_expense(make_expense(
            Some(&project.id),
            "Materials",
            "Site materials",
            125.0,
            ExpenseStatus::Approved,
            day(2026, 3, 12),
        ))
        .await?;

    let mut draft = books.start_edit(&expense.id).await?;
    draft.description = None;
    assert!(books.save_edit(&expense.id, &draft).await.is_err());

    // Validation failed before any write.
    let stored = books
        .store()
        .get_expense(&expense.id)
        .await?
        .expect("expense should exist");
    assert_eq!(stored.amount, 125.0);
    Ok(())
}

#[tokio::test]
async fn test_save_edit_rejects_unknown_status_and_bad_date() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    let expense = books
        .create_expense(make_expense(
            Some(&project.id),
            "Materials",
            "Site materials",
            125.0,
            ExpenseStatus::Approved,
            day(2026, 3, 12),
        ))
        .await?;

    let mut draft = books.start_edit(&expense.id).await?;
    draft.status = Some("maybe".to_string());
    assert!(books.save_edit(&expense.id, &draft).await.is_err());

    let mut draft = books.start_edit(&expense.id).await?;
    draft.date = Some("03/12/2026".to_string());
    assert!(books.save_edit(&expense.id, &draft).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_save_edit_moving_assignment_recomputes_both_projects() -> Result<(), ServerError> {
    let books = new_books();
    let source = books.create_project(make_project(5_000.0)).await?;
    let target = books.create_project(make_project(5_000.0)).await?;
    let assignment = books
        .create_assignment(make_assignment(
            &source.id,
            "staff-1",
            "Alice",
            400.0,
            day(2026, 3, 10),
        ))
        .await?;

    let mut draft = books.start_edit(&assignment.id).await?;
    draft.project_id = Some(target.id.clone());
    draft.project_name = Some("Depot Renovation".to_string());
    books.save_edit(&assignment.id, &draft).await?;

    let source = books
        .store()
        .get_project(&source.id)
        .await?
        .expect("source project should exist");
    let target = books
        .store()
        .get_project(&target.id)
        .await?
        .expect("target project should exist");
    assert_eq!(source.labor_cost, 0.0);
    assert_eq!(target.labor_cost, 400.0);
    Ok(())
}

#[tokio::test]
async fn test_save_edit_photo_requires_project() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    let photo = books
        .create_photo(make_photo(
            &project.id,
            "Carol",
            "Framing complete",
            day(2026, 4, 2),
        ))
        .await?;

    let mut draft = books.start_edit(&photo.id).await?;
    draft.project_id = None;
    assert!(books.save_edit(&photo.id, &draft).await.is_err());

    let mut draft = books.start_edit(&photo.id).await?;
    draft.description = Some("Roof framing complete".to_string());
    books.save_edit(&photo.id, &draft).await?;
    let stored = books
        .store()
        .get_photo(&photo.id)
        .await?
        .expect("photo should exist");
    assert_eq!(stored.description, "Roof framing complete");
    Ok(())
}

#[tokio::test]
async fn test_delete_entry_recomputes_revenue() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    let income = books
        .create_income(make_income(
            Some(&project.id),
            "Milestone payment",
            2000.0,
            IncomeStatus::Received,
            day(2026, 3, 15),
        ))
        .await?;

    let before = books
        .store()
        .get_project(&project.id)
        .await?
        .expect("project should exist");
    assert_eq!(before.actual_revenue, 2000.0);

    books.delete_entry(&income.id).await?;

    assert!(books.store().get_income(&income.id).await?.is_none());
    let after = books
        .store()
        .get_project(&project.id)
        .await?
        .expect("project should exist");
    assert_eq!(after.actual_revenue, 0.0);
    Ok(())
}

#[tokio::test]
async fn test_delete_entry_decrements_usage_counter() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    let subcategory = books.create_subcategory("Materials", None).await?;
    let expense = books
        .create_expense(make_expense(
            Some(&project.id),
            "Materials",
            "Site materials",
            125.0,
            ExpenseStatus::Approved,
            day(2026, 3, 12),
        ))
        .await?;

    books.delete_entry(&expense.id).await?;

    let stored = books
        .store()
        .find_subcategory_by_name("Materials")
        .await?
        .expect("subcategory should exist");
    assert_eq!(stored.id, subcategory.id);
    assert_eq!(stored.usage_count, 0);
    Ok(())
}

#[tokio::test]
async fn test_unknown_entry_id_is_an_error() -> Result<(), ServerError> {
    let books = new_books();
    assert!(books.start_edit("no-such-entry").await.is_err());
    assert!(books.delete_entry("no-such-entry").await.is_err());
    Ok(())
}
