use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::dirty::DirtyQueue,
        usecases::{
            ledger_usecase::{LedgerUsecase as _, LedgerUsecaseImpl},
            recompute_usecase::{RecomputeHandler as _, RecomputeHandlerImpl},
            record_usecase::{RecordMutationUsecase as _, RecordMutationUsecaseImpl},
        },
    },
    entities::{
        ActivityDraft, ActivityEntry, ActivityFilter, ActivityMonthGroup, AssignmentPatch,
        Expense, ExpensePatch, Income, IncomePatch, Project, ProjectPhoto, SortState, Subcategory,
        TaskAssignment,
    },
    stores::{ProjectStore as _, TransactionStore},
};

/// Facade over the project-books core: record mutations, the activity
/// ledger, and the financial aggregators, wired over one injected store
/// instance. Construct one per store; there are no ambient singletons.
pub struct ProjectBooksUtil<S: TransactionStore> {
    store: Arc<S>,
    recompute: RecomputeHandlerImpl<S>,
    records: RecordMutationUsecaseImpl<S>,
    ledger: LedgerUsecaseImpl<S>,
}

impl<S: TransactionStore> ProjectBooksUtil<S> {
    pub fn new(store: Arc<S>) -> Self {
        let dirty = Arc::new(DirtyQueue::new());
        Self {
            recompute: RecomputeHandlerImpl::new(store.clone()),
            records: RecordMutationUsecaseImpl::new(store.clone(), dirty.clone()),
            ledger: LedgerUsecaseImpl::new(store.clone(), dirty),
            store,
        }
    }

    /// The injected store, for direct reads (e.g. inspecting a project's
    /// derived financials).
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    // Aggregators.
    // ---

    pub async fn recompute_project_cost(&self, project_id: &str) -> Result<(), ServerError> {
        self.recompute.recompute_project_cost(project_id).await
    }

    pub async fn recompute_project_revenue(&self, project_id: &str) -> Result<(), ServerError> {
        self.recompute.recompute_project_revenue(project_id).await
    }

    // Activity ledger.
    // ---

    pub async fn list_activities(
        &self,
        filter: &ActivityFilter,
        sort: Option<&SortState>,
    ) -> Result<Vec<ActivityEntry>, ServerError> {
        self.ledger.list_activities(filter, sort).await
    }

    pub async fn grouped_activities(
        &self,
        filter: &ActivityFilter,
        sort: Option<&SortState>,
    ) -> Result<Vec<ActivityMonthGroup>, ServerError> {
        self.ledger.grouped_activities(filter, sort).await
    }

    pub async fn start_edit(&self, entry_id: &str) -> Result<ActivityDraft, ServerError> {
        self.ledger.start_edit(entry_id).await
    }

    pub async fn save_edit(
        &self,
        entry_id: &str,
        draft: &ActivityDraft,
    ) -> Result<(), ServerError> {
        self.ledger.save_edit(entry_id, draft).await
    }

    pub async fn delete_entry(&self, entry_id: &str) -> Result<(), ServerError> {
        self.ledger.delete_entry(entry_id).await
    }

    // Record mutations.
    // ---

    pub async fn create_project(&self, project: Project) -> Result<Project, ServerError> {
        self.store.create_project(project).await
    }

    pub async fn create_assignment(
        &self,
        assignment: TaskAssignment,
    ) -> Result<TaskAssignment, ServerError> {
        self.records.create_assignment(assignment).await
    }

    pub async fn update_assignment(
        &self,
        id: &str,
        patch: AssignmentPatch,
    ) -> Result<TaskAssignment, ServerError> {
        self.records.update_assignment(id, patch).await
    }

    pub async fn delete_assignment(&self, id: &str) -> Result<(), ServerError> {
        self.records.delete_assignment(id).await
    }

    pub async fn create_expense(&self, expense: Expense) -> Result<Expense, ServerError> {
        self.records.create_expense(expense).await
    }

    pub async fn update_expense(
        &self,
        id: &str,
        patch: ExpensePatch,
    ) -> Result<Expense, ServerError> {
        self.records.update_expense(id, patch).await
    }

    pub async fn delete_expense(&self, id: &str) -> Result<(), ServerError> {
        self.records.delete_expense(id).await
    }

    pub async fn create_income(&self, income: Income) -> Result<Income, ServerError> {
        self.records.create_income(income).await
    }

    pub async fn update_income(&self, id: &str, patch: IncomePatch) -> Result<Income, ServerError> {
        self.records.update_income(id, patch).await
    }

    pub async fn delete_income(&self, id: &str) -> Result<(), ServerError> {
        self.records.delete_income(id).await
    }

    pub async fn create_photo(&self, photo: ProjectPhoto) -> Result<ProjectPhoto, ServerError> {
        self.records.create_photo(photo).await
    }

    pub async fn delete_photo(&self, id: &str) -> Result<(), ServerError> {
        self.records.delete_photo(id).await
    }

    pub async fn create_subcategory(
        &self,
        name: &str,
        category_id: Option<String>,
    ) -> Result<Subcategory, ServerError> {
        self.records.create_subcategory(name, category_id).await
    }
}
