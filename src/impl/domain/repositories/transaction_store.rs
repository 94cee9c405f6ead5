use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{
    AssignmentPatch, Expense, ExpensePatch, Income, IncomePatch, PhotoPatch, Project,
    ProjectFinancialsPatch, ProjectPhoto, Subcategory, TaskAssignment,
};

// Document store collaborator contract: named collections queryable by
// equality filters, create / partial-merge update / delete per document, and
// store-assigned write-time timestamps. Creates assign the id (if empty) and
// stamp `created_at`/`updated_at`; partial-merge updates re-stamp
// `updated_at` and leave unset fields untouched.
// ---

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn get_project(&self, id: &str) -> Result<Option<Project>, ServerError>;

    async fn create_project(&self, project: Project) -> Result<Project, ServerError>;

    /// Overwrites the project's derived financial fields. Fails with
    /// `ProjectNotFound` if the project document no longer exists.
    async fn merge_project_financials(
        &self,
        id: &str,
        patch: ProjectFinancialsPatch,
    ) -> Result<(), ServerError>;

    async fn delete_project(&self, id: &str) -> Result<(), ServerError>;
}

#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// All assignments, or only those of one project when `project_id` is
    /// set (server-side equality filter).
    async fn list_assignments(
        &self,
        project_id: Option<&str>,
    ) -> Result<Vec<TaskAssignment>, ServerError>;

    async fn get_assignment(&self, id: &str) -> Result<Option<TaskAssignment>, ServerError>;

    async fn create_assignment(
        &self,
        assignment: TaskAssignment,
    ) -> Result<TaskAssignment, ServerError>;

    async fn update_assignment(
        &self,
        id: &str,
        patch: AssignmentPatch,
    ) -> Result<TaskAssignment, ServerError>;

    async fn delete_assignment(&self, id: &str) -> Result<(), ServerError>;
}

#[async_trait]
pub trait ExpenseStore: Send + Sync {
    async fn list_expenses(&self, project_id: Option<&str>) -> Result<Vec<Expense>, ServerError>;

    async fn get_expense(&self, id: &str) -> Result<Option<Expense>, ServerError>;

    async fn create_expense(&self, expense: Expense) -> Result<Expense, ServerError>;

    async fn update_expense(&self, id: &str, patch: ExpensePatch) -> Result<Expense, ServerError>;

    async fn delete_expense(&self, id: &str) -> Result<(), ServerError>;
}

#[async_trait]
pub trait IncomeStore: Send + Sync {
    async fn list_incomes(&self, project_id: Option<&str>) -> Result<Vec<Income>, ServerError>;

    async fn get_income(&self, id: &str) -> Result<Option<Income>, ServerError>;

    async fn create_income(&self, income: Income) -> Result<Income, ServerError>;

    async fn update_income(&self, id: &str, patch: IncomePatch) -> Result<Income, ServerError>;

    async fn delete_income(&self, id: &str) -> Result<(), ServerError>;
}

#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn list_photos(&self, project_id: Option<&str>)
        -> Result<Vec<ProjectPhoto>, ServerError>;

    async fn get_photo(&self, id: &str) -> Result<Option<ProjectPhoto>, ServerError>;

    async fn create_photo(&self, photo: ProjectPhoto) -> Result<ProjectPhoto, ServerError>;

    async fn update_photo(&self, id: &str, patch: PhotoPatch)
        -> Result<ProjectPhoto, ServerError>;

    async fn delete_photo(&self, id: &str) -> Result<(), ServerError>;
}

#[async_trait]
pub trait SubcategoryStore: Send + Sync {
    async fn list_subcategories(&self) -> Result<Vec<Subcategory>, ServerError>;

    /// Exact-name match, as used by the usage counter.
    async fn find_subcategory_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Subcategory>, ServerError>;

    async fn create_subcategory(&self, subcategory: Subcategory)
        -> Result<Subcategory, ServerError>;

    async fn set_usage_count(&self, id: &str, usage_count: u64) -> Result<(), ServerError>;
}

/// The full store seam consumed by the usecases. One backing implementation
/// (e.g. `MemoryStore`) implements every per-collection trait.
pub trait TransactionStore:
    ProjectStore + AssignmentStore + ExpenseStore + IncomeStore + PhotoStore + SubcategoryStore
{
}

impl<T> TransactionStore for T where
    T: ProjectStore + AssignmentStore + ExpenseStore + IncomeStore + PhotoStore + SubcategoryStore
{
}
