//! Integration tests for the derived project financials.
//!
//! Tests cover:
//! - Labor and reimbursement costs rolling up into actualCost
//! - Status rules (approved-only expenses, received-only incomes)
//! - Recompute triggering on create/update/delete and project moves
//! - Recompute idempotency and non-blocking failure

mod common;

use common::*;
use fractic_server_error::ServerError;
use project_books::entities::{ExpensePatch, ExpenseStatus, IncomeStatus};

#[tokio::test]
async fn test_cost_rolls_up_labor_and_approved_expenses() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(10_000.0)).await?;

    books
        .create_assignment(make_assignment(
            &project.id,
            "staff-1",
            "Alice",
            350.0,
            day(2026, 3, 10),
        ))
        .await?;
    books
        .create_assignment(make_assignment(
            &project.id,
            "staff-2",
            "Bob",
            120.25,
            day(2026, 3, 11),
        ))
        .await?;
    books
        .create_expense(make_expense(
            Some(&project.id),
            "Materials",
            "Drywall sheets",
            99.99,
            ExpenseStatus::Approved,
            day(2026, 3, 12),
        ))
        .await?;
    // Pending expenses never count.
    books
        .create_expense(make_expense(
            Some(&project.id),
            "Materials",
            "Paint",
            50.0,
            ExpenseStatus::Pending,
            day(2026, 3, 13),
        ))
        .await?;

    let stored = books
        .store()
        .get_project(&project.id)
        .await?
        .expect("project should exist");
    assert_eq!(stored.labor_cost, 470.25);
    assert_eq!(stored.reimbursement_cost, 99.99);
    assert_eq!(stored.actual_cost, 570.24);
    Ok(())
}

#[tokio::test]
async fn test_revenue_counts_only_received_incomes() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(10_000.0)).await?;

    books
        .create_income(make_income(
            Some(&project.id),
            "Milestone payment",
            1500.5,
            IncomeStatus::Received,
            day(2026, 3, 15),
        ))
        .await?;
    books
        .create_income(make_income(
            Some(&project.id),
            "Final invoice",
            999.0,
            IncomeStatus::Pending,
            day(2026, 3, 20),
        ))
        .await?;
    books
        .create_income(make_income(
            Some(&project.id),
            "Change order",
            200.0,
            IncomeStatus::Cancelled,
            day(2026, 3, 22),
        ))
        .await?;

    let stored = books
        .store()
        .get_project(&project.id)
        .await?
        .expect("project should exist");
    assert_eq!(stored.actual_revenue, 1500.5);
    Ok(())
}

#[tokio::test]
async fn test_status_flip_recomputes_cost() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    let expense = books
        .create_expense(make_expense(
            Some(&project.id),
            "Transport",
            "Van rental",
            80.0,
            ExpenseStatus::Pending,
            day(2026, 4, 1),
        ))
        .await?;

    let before = books
        .store()
        .get_project(&project.id)
        .await?
        .expect("project should exist");
    assert_eq!(before.actual_cost, 0.0);

    books
        .update_expense(
            &expense.id,
            ExpensePatch {
                status: Some(ExpenseStatus::Approved),
                ..Default::default()
            },
        )
        .await?;

    let after = books
        .store()
        .get_project(&project.id)
        .await?
        .expect("project should exist");
    assert_eq!(after.reimbursement_cost, 80.0);
    assert_eq!(after.actual_cost, 80.0);
    Ok(())
}

#[tokio::test]
async fn test_deleting_assignment_recomputes_labor() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    let kept = books
        .create_assignment(make_assignment(
            &project.id,
            "staff-1",
            "Alice",
            300.0,
            day(2026, 4, 2),
        ))
        .await?;
    let removed = books
        .create_assignment(make_assignment(
            &project.id,
            "staff-2",
            "Bob",
            200.0,
            day(2026, 4, 3),
        ))
        .await?;

    books.delete_assignment(&removed.id).await?;

    let stored = books
        .store()
        .get_project(&project.id)
        .await?
        .expect("project should exist");
    assert_eq!(stored.labor_cost, 300.0);
    assert_eq!(stored.actual_cost, 300.0);

    // The kept assignment is untouched.
    let kept = books.store().get_assignment(&kept.id).await?;
    assert!(kept.is_some());
    Ok(())
}

#[tokio::test]
async fn test_moving_expense_recomputes_both_projects() -> Result<(), ServerError> {
    let books = new_books();
    let source = books.create_project(make_project(5_000.0)).await?;
    let target = books.create_project(make_project(5_000.0)).await?;
    let expense = books
        .create_expense(make_expense(
            Some(&source.id),
            "Materials",
            "Tile adhesive",
            60.0,
            ExpenseStatus::Approved,
            day(2026, 4, 5),
        ))
        .await?;

    books
        .update_expense(
            &expense.id,
            ExpensePatch {
                project_id: Some(Some(target.id.clone())),
                ..Default::default()
            },
        )
        .await?;

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
    assert_eq!(source.actual_cost, 0.0);
    assert_eq!(target.actual_cost, 60.0);
    Ok(())
}

#[tokio::test]
async fn test_recompute_is_idempotent() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    books
        .create_assignment(make_assignment(
            &project.id,
            "staff-1",
            "Alice",
            275.75,
            day(2026, 4, 6),
        ))
        .await?;

    books.recompute_project_cost(&project.id).await?;
    books.recompute_project_cost(&project.id).await?;

    let stored = books
        .store()
        .get_project(&project.id)
        .await?
        .expect("project should exist");
    assert_eq!(stored.labor_cost, 275.75);
    assert_eq!(stored.actual_cost, 275.75);
    Ok(())
}

#[tokio::test]
async fn test_deleting_assignment_of_deleted_project_leaves_no_document() -> Result<(), ServerError> {
    let books = new_books();
    let project = books.create_project(make_project(5_000.0)).await?;
    let assignment = books
        .create_assignment(make_assignment(
            &project.id,
            "staff-1",
            "Alice",
            300.0,
            day(2026, 4, 8),
        ))
        .await?;

    // Project goes first; the assignment delete's recompute then finds no
    // project, is swallowed, and must not resurrect a project document.
    books.store().delete_project(&project.id).await?;
    books.delete_assignment(&assignment.id).await?;

    assert!(books.store().get_assignment(&assignment.id).await?.is_none());
    assert!(books.store().get_project(&project.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_recompute_failure_never_blocks_the_write() -> Result<(), ServerError> {
    let books = new_books();

    // No such project: the recompute fails and is swallowed, but the record
    // write itself succeeds.
    let expense = books
        .create_expense(make_expense(
            Some("ghost-project"),
            "Materials",
            "Orphaned receipt",
            15.0,
            ExpenseStatus::Approved,
            day(2026, 4, 7),
        ))
        .await?;

    let stored = books.store().get_expense(&expense.id).await?;
    assert!(stored.is_some());
    Ok(())
}
