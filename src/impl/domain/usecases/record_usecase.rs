use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::{
            dirty::{DirtyQueue, ProjectFinancialsDirty},
            usage_counter::{self, CounterStep},
        },
        repositories::transaction_store::TransactionStore,
        usecases::recompute_usecase::{RecomputeHandler as _, RecomputeHandlerImpl},
    },
    entities::{
        AssignmentPatch, Expense, ExpensePatch, Income, IncomePatch, ProjectPhoto, Subcategory,
        TaskAssignment,
    },
    errors::{DuplicateName, RecordNotFound, ValidationError},
};

/// Record mutations. Each mutation runs the sequential chain: write the
/// record, drain the dirty queue through the recompute handler, then (for
/// expenses) apply the usage-counter steps. No step is transactional across
/// documents; an interrupted chain leaves aggregates stale until the next
/// recompute for the same project.
#[async_trait]
pub trait RecordMutationUsecase: Send + Sync {
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

    async fn create_expense(&self, expense: Expense) -> Result<Expense, ServerError>;

    async fn update_expense(&self, id: &str, patch: ExpensePatch) -> Result<Expense, ServerError>;

    async fn delete_expense(&self, id: &str) -> Result<(), ServerError>;

    async fn create_income(&self, income: Income) -> Result<Income, ServerError>;

    async fn update_income(&self, id: &str, patch: IncomePatch) -> Result<Income, ServerError>;

    async fn delete_income(&self, id: &str) -> Result<(), ServerError>;

    async fn create_photo(&self, photo: ProjectPhoto) -> Result<ProjectPhoto, ServerError>;

    async fn delete_photo(&self, id: &str) -> Result<(), ServerError>;

    /// Creates a subcategory/vendor after a case-insensitive duplicate-name
    /// check. Usage count starts at zero.
    async fn create_subcategory(
        &self,
        name: &str,
        category_id: Option<String>,
    ) -> Result<Subcategory, ServerError>;
}

pub(crate) struct RecordMutationUsecaseImpl<S: TransactionStore> {
    store: Arc<S>,
    dirty: Arc<DirtyQueue>,
    recompute: RecomputeHandlerImpl<S>,
}

impl<S: TransactionStore> RecordMutationUsecaseImpl<S> {
    pub(crate) fn new(store: Arc<S>, dirty: Arc<DirtyQueue>) -> Self {
        RecordMutationUsecaseImpl {
            recompute: RecomputeHandlerImpl::new(store.clone()),
            store,
            dirty,
        }
    }

    async fn drain_dirty(&self) {
        self.recompute.drain(&self.dirty).await;
    }

    async fn apply_counter_steps(&self, steps: Vec<CounterStep>) {
        apply_counter_steps(self.store.as_ref(), steps).await;
    }
}

/// Applies counter steps best-effort: a failed or unmatched step is logged
/// and skipped, accepting counter drift over blocking the primary mutation.
pub(crate) async fn apply_counter_steps<S: TransactionStore>(store: &S, steps: Vec<CounterStep>) {
    for step in steps {
        if let Err(e) = apply_counter_step(store, &step).await {
            log::warn!(
                "usage counter step for subcategory '{}' skipped: {}",
                step.subcategory_name(),
                e
            );
        }
    }
}

async fn apply_counter_step<S: TransactionStore>(
    store: &S,
    step: &CounterStep,
) -> Result<(), ServerError> {
    let subcategory = match store.find_subcategory_by_name(step.subcategory_name()).await? {
        Some(subcategory) => subcategory,
        None => return Ok(()),
    };
    store
        .set_usage_count(&subcategory.id, step.apply(subcategory.usage_count))
        .await
}

pub(crate) fn require(kind: &str, field: &str, value: Option<&str>) -> Result<(), ServerError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new(
            kind,
            &format!("{} is required", field),
        )),
    }
}

pub(crate) fn require_positive_amount(kind: &str, amount: f64) -> Result<(), ServerError> {
    if amount > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(kind, "amount must be greater than 0"))
    }
}

#[async_trait]
impl<S: TransactionStore> RecordMutationUsecase for RecordMutationUsecaseImpl<S> {
    async fn create_assignment(
        &self,
        assignment: TaskAssignment,
    ) -> Result<TaskAssignment, ServerError> {
        require("assignment", "staffId", Some(&assignment.staff_id))?;
        let stored = self.store.create_assignment(assignment).await?;
        self.dirty
            .emit(ProjectFinancialsDirty::cost(&stored.project_id))
            .await;
        self.drain_dirty().await;
        Ok(stored)
    }

    async fn update_assignment(
        &self,
        id: &str,
        patch: AssignmentPatch,
    ) -> Result<TaskAssignment, ServerError> {
        let old = self
            .store
            .get_assignment(id)
            .await?
            .ok_or_else(|| RecordNotFound::new(id))?;
        let updated = self.store.update_assignment(id, patch).await?;
        self.dirty
            .emit(ProjectFinancialsDirty::cost(&old.project_id))
            .await;
        if updated.project_id != old.project_id {
            self.dirty
                .emit(ProjectFinancialsDirty::cost(&updated.project_id))
                .await;
        }
        self.drain_dirty().await;
        Ok(updated)
    }

    async fn delete_assignment(&self, id: &str) -> Result<(), ServerError> {
        let old = self
            .store
            .get_assignment(id)
            .await?
            .ok_or_else(|| RecordNotFound::new(id))?;
        self.store.delete_assignment(id).await?;
        self.dirty
            .emit(ProjectFinancialsDirty::cost(&old.project_id))
            .await;
        self.drain_dirty().await;
        Ok(())
    }

    async fn create_expense(&self, expense: Expense) -> Result<Expense, ServerError> {
        require("expense", "itemDescription", Some(&expense.item_description))?;
        require_positive_amount("expense", expense.amount)?;
        let stored = self.store.create_expense(expense).await?;
        if let Some(project_id) = &stored.project_id {
            self.dirty
                .emit(ProjectFinancialsDirty::cost(project_id))
                .await;
        }
        self.drain_dirty().await;
        self.apply_counter_steps(usage_counter::steps_for_create(&stored.subcategory))
            .await;
        Ok(stored)
    }

    async fn update_expense(&self, id: &str, patch: ExpensePatch) -> Result<Expense, ServerError> {
        let old = self
            .store
            .get_expense(id)
            .await?
            .ok_or_else(|| RecordNotFound::new(id))?;
        if let Some(amount) = patch.amount {
            require_positive_amount("expense", amount)?;
        }
        let financially_relevant = patch.amount.is_some() || patch.status.is_some();
        let updated = self.store.update_expense(id, patch).await?;
        if financially_relevant || updated.project_id != old.project_id {
            for project_id in [&old.project_id, &updated.project_id].into_iter().flatten() {
                self.dirty
                    .emit(ProjectFinancialsDirty::cost(project_id))
                    .await;
            }
        }
        self.drain_dirty().await;
        self.apply_counter_steps(usage_counter::steps_for_edit(
            &old.subcategory,
            &updated.subcategory,
        ))
        .await;
        Ok(updated)
    }

    async fn delete_expense(&self, id: &str) -> Result<(), ServerError> {
        let old = self
            .store
            .get_expense(id)
            .await?
            .ok_or_else(|| RecordNotFound::new(id))?;
        self.store.delete_expense(id).await?;
        if let Some(project_id) = &old.project_id {
            self.dirty
                .emit(ProjectFinancialsDirty::cost(project_id))
                .await;
        }
        self.drain_dirty().await;
        self.apply_counter_steps(usage_counter::steps_for_delete(&old.subcategory))
            .await;
        Ok(())
    }

    async fn create_income(&self, income: Income) -> Result<Income, ServerError> {
        require("income", "category", Some(&income.category))?;
        let stored = self.store.create_income(income).await?;
        if let Some(project_id) = &stored.project_id {
            self.dirty
                .emit(ProjectFinancialsDirty::revenue(project_id))
                .await;
        }
        self.drain_dirty().await;
        Ok(stored)
    }

    async fn update_income(&self, id: &str, patch: IncomePatch) -> Result<Income, ServerError> {
        let old = self
            .store
            .get_income(id)
            .await?
            .ok_or_else(|| RecordNotFound::new(id))?;
        let financially_relevant = patch.amount.is_some() || patch.status.is_some();
        let updated = self.store.update_income(id, patch).await?;
        if financially_relevant || updated.project_id != old.project_id {
            for project_id in [&old.project_id, &updated.project_id].into_iter().flatten() {
                self.dirty
                    .emit(ProjectFinancialsDirty::revenue(project_id))
                    .await;
            }
        }
        self.drain_dirty().await;
        Ok(updated)
    }

    async fn delete_income(&self, id: &str) -> Result<(), ServerError> {
        let old = self
            .store
            .get_income(id)
            .await?
            .ok_or_else(|| RecordNotFound::new(id))?;
        self.store.delete_income(id).await?;
        if let Some(project_id) = &old.project_id {
            self.dirty
                .emit(ProjectFinancialsDirty::revenue(project_id))
                .await;
        }
        self.drain_dirty().await;
        Ok(())
    }

    async fn create_photo(&self, photo: ProjectPhoto) -> Result<ProjectPhoto, ServerError> {
        require("photo", "projectId", Some(&photo.project_id))?;
        // Photos carry no financial fields; no recompute is triggered.
        self.store.create_photo(photo).await
    }

    async fn delete_photo(&self, id: &str) -> Result<(), ServerError> {
        self.store
            .get_photo(id)
            .await?
            .ok_or_else(|| RecordNotFound::new(id))?;
        self.store.delete_photo(id).await
    }

    async fn create_subcategory(
        &self,
        name: &str,
        category_id: Option<String>,
    ) -> Result<Subcategory, ServerError> {
        require("subcategory", "name", Some(name))?;
        let duplicate = self
            .store
            .list_subcategories()
            .await?
            .into_iter()
            .any(|s| s.name.eq_ignore_ascii_case(name));
        if duplicate {
            return Err(DuplicateName::new(name));
        }
        self.store
            .create_subcategory(Subcategory {
                id: String::new(),
                name: name.to_string(),
                category_id,
                usage_count: 0,
                created_at: None,
                updated_at: None,
            })
            .await
    }
}
