use crate::entities::{Expense, ExpenseStatus, Income, IncomeStatus, TaskAssignment};

use super::money::round2;

// Pure sum logic backing the cost and revenue aggregators. Each addend is
// rounded to cents before summing, and the sum is rounded once more.
// ---

/// Labor cost: every assignment counts (assignments have no status).
pub(crate) fn labor_cost(assignments: &[TaskAssignment]) -> f64 {
    round2(assignments.iter().map(|a| round2(a.daily_rate)).sum())
}

/// Reimbursement cost: approved expenses only.
pub(crate) fn reimbursement_cost(expenses: &[Expense]) -> f64 {
    round2(
        expenses
            .iter()
            .filter(|e| e.status == ExpenseStatus::Approved)
            .map(|e| round2(e.amount))
            .sum(),
    )
}

/// Actual revenue: received incomes only (symmetric with the approved-only
/// rule on the cost side).
pub(crate) fn actual_revenue(incomes: &[Income]) -> f64 {
    round2(
        incomes
            .iter()
            .filter(|i| i.status == IncomeStatus::Received)
            .map(|i| round2(i.amount))
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn assignment(daily_rate: f64) -> TaskAssignment {
        TaskAssignment {
            id: "a".to_string(),
            project_id: "p".to_string(),
            project_name: "P".to_string(),
            staff_id: "s".to_string(),
            staff_name: "S".to_string(),
            daily_rate,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            task_description: "work".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn expense(amount: f64, status: ExpenseStatus) -> Expense {
        Expense {
            id: "e".to_string(),
            project_id: Some("p".to_string()),
            project_name: Some("P".to_string()),
            staff_id: None,
            staff_name: None,
            subcategory: "Materials".to_string(),
            item_description: "paint".to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            status,
            receipt_url: None,
            vendor: None,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn labor_cost_sums_all_assignments() {
        let assignments = vec![assignment(100.0), assignment(150.51)];
        assert_eq!(labor_cost(&assignments), 250.51);
    }

    #[test]
    fn reimbursement_cost_counts_approved_only() {
        let expenses = vec![
            expense(50.0, ExpenseStatus::Approved),
            expense(30.0, ExpenseStatus::Pending),
            expense(20.0, ExpenseStatus::Rejected),
        ];
        assert_eq!(reimbursement_cost(&expenses), 50.0);
    }

    #[test]
    fn sums_are_order_independent() {
        let mut expenses = vec![
            expense(10.105, ExpenseStatus::Approved),
            expense(20.204, ExpenseStatus::Approved),
            expense(30.001, ExpenseStatus::Approved),
        ];
        let forward = reimbursement_cost(&expenses);
        expenses.reverse();
        assert_eq!(forward, reimbursement_cost(&expenses));
    }
}
