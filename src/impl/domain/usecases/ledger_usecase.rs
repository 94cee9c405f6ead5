use std::{str::FromStr as _, sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fractic_server_error::ServerError;

use crate::{
    data::models::business_date_model::BusinessDateModel,
    domain::{
        logic::{
            activity_feed,
            dirty::{DirtyQueue, ProjectFinancialsDirty},
            usage_counter,
        },
        repositories::transaction_store::TransactionStore,
        usecases::{
            record_usecase::{apply_counter_steps, require, require_positive_amount},
            recompute_usecase::{RecomputeHandler as _, RecomputeHandlerImpl},
        },
    },
    entities::{
        ActivityDraft, ActivityEntry, ActivityFilter, ActivityMonthGroup, AssignmentPatch,
        Expense, ExpensePatch, ExpenseStatus, Income, IncomePatch, IncomeStatus, PhotoPatch,
        ProjectPhoto, SortState, TaskAssignment,
    },
    errors::{RecordNotFound, StoreError, ValidationError},
};

/// Timeout for the bulk reads populating display lists. The recompute and
/// validation paths are never subject to a timeout.
const BULK_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// The merged activity ledger: one polymorphic feed over the four record
/// collections, with composable filtering, user sorting, month grouping, and
/// uniform edit/delete dispatch that re-triggers the aggregators.
#[async_trait]
pub trait LedgerUsecase: Send + Sync {
    /// Flat feed: merged, filtered, then sorted (baseline write-time order
    /// when `sort` is `None`).
    async fn list_activities(
        &self,
        filter: &ActivityFilter,
        sort: Option<&SortState>,
    ) -> Result<Vec<ActivityEntry>, ServerError>;

    /// Same feed bucketed by calendar month, most recent month first.
    async fn grouped_activities(
        &self,
        filter: &ActivityFilter,
        sort: Option<&SortState>,
    ) -> Result<Vec<ActivityMonthGroup>, ServerError>;

    /// Projects the entry's kind-specific fields into the shared draft shape.
    async fn start_edit(&self, entry_id: &str) -> Result<ActivityDraft, ServerError>;

    /// Validates the draft for the entry's kind, dispatches the write to
    /// exactly one collection, and re-triggers the relevant aggregator(s) --
    /// both the old and new project when the save changed the project
    /// association.
    async fn save_edit(&self, entry_id: &str, draft: &ActivityDraft) -> Result<(), ServerError>;

    /// Deletes the underlying document, then best-effort recomputes the
    /// affected aggregate. A recompute failure (e.g. the project was deleted
    /// first) is logged and never blocks the deletion.
    async fn delete_entry(&self, entry_id: &str) -> Result<(), ServerError>;
}

enum StoredRecord {
    Assignment(TaskAssignment),
    Expense(Expense),
    Income(Income),
    Photo(ProjectPhoto),
}

pub(crate) struct LedgerUsecaseImpl<S: TransactionStore> {
    store: Arc<S>,
    dirty: Arc<DirtyQueue>,
    recompute: RecomputeHandlerImpl<S>,
}

impl<S: TransactionStore> LedgerUsecaseImpl<S> {
    pub(crate) fn new(store: Arc<S>, dirty: Arc<DirtyQueue>) -> Self {
        LedgerUsecaseImpl {
            recompute: RecomputeHandlerImpl::new(store.clone()),
            store,
            dirty,
        }
    }

    /// Resolves an entry id against the four collections. Ids are probed in
    /// feed order; an id present in no collection is a `RecordNotFound`.
    async fn fetch_record(&self, id: &str) -> Result<StoredRecord, ServerError> {
        if let Some(assignment) = self.store.get_assignment(id).await? {
            return Ok(StoredRecord::Assignment(assignment));
        }
        if let Some(expense) = self.store.get_expense(id).await? {
            return Ok(StoredRecord::Expense(expense));
        }
        if let Some(income) = self.store.get_income(id).await? {
            return Ok(StoredRecord::Income(income));
        }
        if let Some(photo) = self.store.get_photo(id).await? {
            return Ok(StoredRecord::Photo(photo));
        }
        Err(RecordNotFound::new(id))
    }

    async fn drain_dirty(&self) {
        self.recompute.drain(&self.dirty).await;
    }
}

fn parse_draft_date(draft: &ActivityDraft) -> Result<Option<NaiveDate>, ServerError> {
    draft
        .date
        .as_deref()
        .map(BusinessDateModel::from_str)
        .transpose()
        .map(|date| date.map(Into::into))
}

impl From<StoredRecord> for ActivityEntry {
    fn from(record: StoredRecord) -> Self {
        match record {
            StoredRecord::Assignment(a) => a.into(),
            StoredRecord::Expense(e) => e.into(),
            StoredRecord::Income(i) => i.into(),
            StoredRecord::Photo(p) => p.into(),
        }
    }
}

#[async_trait]
impl<S: TransactionStore> LedgerUsecase for LedgerUsecaseImpl<S> {
    async fn list_activities(
        &self,
        filter: &ActivityFilter,
        sort: Option<&SortState>,
    ) -> Result<Vec<ActivityEntry>, ServerError> {
        let project_id = filter.project_id.as_deref();
        let reads = async {
            futures::try_join!(
                self.store.list_assignments(project_id),
                self.store.list_expenses(project_id),
                self.store.list_incomes(project_id),
                self.store.list_photos(project_id),
            )
        };
        let (assignments, expenses, incomes, photos) =
            tokio::time::timeout(BULK_READ_TIMEOUT, reads)
                .await
                .map_err(|_| StoreError::new("bulk activity read timed out"))??;
        let merged = activity_feed::merge_entries(assignments, expenses, incomes, photos);
        let mut entries = activity_feed::apply_filter(merged, filter);
        if let Some(sort) = sort {
            activity_feed::apply_sort(&mut entries, sort);
        }
        Ok(entries)
    }

    async fn grouped_activities(
        &self,
        filter: &ActivityFilter,
        sort: Option<&SortState>,
    ) -> Result<Vec<ActivityMonthGroup>, ServerError> {
        let entries = self.list_activities(filter, sort).await?;
        Ok(activity_feed::group_by_month(
            entries,
            Utc::now().date_naive(),
        ))
    }

    async fn start_edit(&self, entry_id: &str) -> Result<ActivityDraft, ServerError> {
        let entry: ActivityEntry = self.fetch_record(entry_id).await?.into();
        Ok(ActivityDraft::from_entry(&entry))
    }

    async fn save_edit(&self, entry_id: &str, draft: &ActivityDraft) -> Result<(), ServerError> {
        let date = parse_draft_date(draft)?;
        match self.fetch_record(entry_id).await? {
            StoredRecord::Assignment(old) => {
                require("assignment", "staffId", draft.staff_id.as_deref())?;
                let updated = self
                    .store
                    .update_assignment(
                        entry_id,
                        AssignmentPatch {
                            project_id: draft.project_id.clone(),
                            project_name: draft.project_name.clone(),
                            staff_id: draft.staff_id.clone(),
                            staff_name: draft.staff_name.clone(),
                            daily_rate: draft.daily_rate,
                            date,
                            task_description: draft.description.clone(),
                        },
                    )
                    .await?;
                self.dirty
                    .emit(ProjectFinancialsDirty::cost(&old.project_id))
                    .await;
                if updated.project_id != old.project_id {
                    self.dirty
                        .emit(ProjectFinancialsDirty::cost(&updated.project_id))
                        .await;
                }
                self.drain_dirty().await;
            }
            StoredRecord::Expense(old) => {
                require("expense", "itemDescription", draft.description.as_deref())?;
                let amount = draft
                    .amount
                    .ok_or_else(|| ValidationError::new("expense", "amount is required"))?;
                require_positive_amount("expense", amount)?;
                let status = draft
                    .status
                    .as_deref()
                    .map(ExpenseStatus::parse)
                    .transpose()?;
                let updated = self
                    .store
                    .update_expense(
                        entry_id,
                        ExpensePatch {
                            project_id: draft.project_id.clone().map(Some),
                            project_name: draft.project_name.clone().map(Some),
                            staff_id: draft.staff_id.clone().map(Some),
                            staff_name: draft.staff_name.clone().map(Some),
                            subcategory: draft.subcategory.clone(),
                            item_description: draft.description.clone(),
                            amount: Some(amount),
                            date,
                            status,
                            receipt_url: draft.receipt_url.clone().map(Some),
                            vendor: draft.vendor.clone().map(Some),
                            notes: draft.notes.clone().map(Some),
                        },
                    )
                    .await?;
                for project_id in [&old.project_id, &updated.project_id].into_iter().flatten()
                {
                    self.dirty
                        .emit(ProjectFinancialsDirty::cost(project_id))
                        .await;
                }
                self.drain_dirty().await;
                apply_counter_steps(
                    self.store.as_ref(),
                    usage_counter::steps_for_edit(&old.subcategory, &updated.subcategory),
                )
                .await;
            }
            StoredRecord::Income(old) => {
                require("income", "itemDescription", draft.description.as_deref())?;
                let status = draft
                    .status
                    .as_deref()
                    .map(IncomeStatus::parse)
                    .transpose()?;
                let updated = self
                    .store
                    .update_income(
                        entry_id,
                        IncomePatch {
                            project_id: draft.project_id.clone().map(Some),
                            project_name: draft.project_name.clone().map(Some),
                            category: draft.description.clone(),
                            amount: draft.amount,
                            date,
                            status,
                            invoice_url: draft.invoice_url.clone().map(Some),
                            client: draft.client.clone().map(Some),
                        },
                    )
                    .await?;
                for project_id in [&old.project_id, &updated.project_id].into_iter().flatten()
                {
                    self.dirty
                        .emit(ProjectFinancialsDirty::revenue(project_id))
                        .await;
                }
                self.drain_dirty().await;
            }
            StoredRecord::Photo(_) => {
                require("photo", "projectId", draft.project_id.as_deref())?;
                self.store
                    .update_photo(
                        entry_id,
                        PhotoPatch {
                            project_id: draft.project_id.clone(),
                            project_name: draft.project_name.clone(),
                            date,
                            description: draft.description.clone(),
                            photo_urls: draft.photo_urls.clone(),
                        },
                    )
                    .await?;
            }
        }
        Ok(())
    }

    async fn delete_entry(&self, entry_id: &str) -> Result<(), ServerError> {
        match self.fetch_record(entry_id).await? {
            StoredRecord::Assignment(old) => {
                self.store.delete_assignment(entry_id).await?;
                self.dirty
                    .emit(ProjectFinancialsDirty::cost(&old.project_id))
                    .await;
                self.drain_dirty().await;
            }
            StoredRecord::Expense(old) => {
                self.store.delete_expense(entry_id).await?;
                if let Some(project_id) = &old.project_id {
                    self.dirty
                        .emit(ProjectFinancialsDirty::cost(project_id))
                        .await;
                }
                self.drain_dirty().await;
                apply_counter_steps(
                    self.store.as_ref(),
                    usage_counter::steps_for_delete(&old.subcategory),
                )
                .await;
            }
            StoredRecord::Income(old) => {
                self.store.delete_income(entry_id).await?;
                if let Some(project_id) = &old.project_id {
                    self.dirty
                        .emit(ProjectFinancialsDirty::revenue(project_id))
                        .await;
                }
                self.drain_dirty().await;
            }
            StoredRecord::Photo(_) => {
                self.store.delete_photo(entry_id).await?;
            }
        }
        Ok(())
    }
}
