mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from project-books for tests
pub use project_books::entities::{
    ActivityFilter, ActivityKind, ExpenseStatus, IncomeStatus, SortField, SortState,
};
pub use project_books::stores::*;
pub use project_books::util::ProjectBooksUtil;
