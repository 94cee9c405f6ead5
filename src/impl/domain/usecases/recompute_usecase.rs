use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::{
            aggregation,
            dirty::{AggregateSide, DirtyQueue, ProjectFinancialsDirty},
            money::round2,
        },
        repositories::transaction_store::TransactionStore,
    },
    entities::ProjectFinancialsPatch,
};

/// Consumes `ProjectFinancialsDirty` signals by re-deriving the affected
/// aggregate from current store contents. Recomputes are full re-scans and
/// pure functions of store state, so handling a signal twice (at-least-once
/// delivery) writes the same values twice.
#[async_trait]
pub trait RecomputeHandler: Send + Sync {
    async fn recompute_project_cost(&self, project_id: &str) -> Result<(), ServerError>;

    async fn recompute_project_revenue(&self, project_id: &str) -> Result<(), ServerError>;

    async fn handle(&self, signal: &ProjectFinancialsDirty) -> Result<(), ServerError>;

    /// Drains all pending signals. Per-signal failures (most commonly a
    /// project deleted mid-chain) are logged and swallowed: they never roll
    /// back the primary mutation, and the aggregate self-heals on the next
    /// recompute for the same project.
    async fn drain(&self, queue: &DirtyQueue);
}

pub(crate) struct RecomputeHandlerImpl<S: TransactionStore> {
    store: Arc<S>,
}

impl<S: TransactionStore> RecomputeHandlerImpl<S> {
    pub(crate) fn new(store: Arc<S>) -> Self {
        RecomputeHandlerImpl { store }
    }
}

#[async_trait]
impl<S: TransactionStore> RecomputeHandler for RecomputeHandlerImpl<S> {
    async fn recompute_project_cost(&self, project_id: &str) -> Result<(), ServerError> {
        let assignments = self.store.list_assignments(Some(project_id)).await?;
        let expenses = self.store.list_expenses(Some(project_id)).await?;
        let labor_cost = aggregation::labor_cost(&assignments);
        let reimbursement_cost = aggregation::reimbursement_cost(&expenses);
        self.store
            .merge_project_financials(
                project_id,
                ProjectFinancialsPatch {
                    actual_cost: Some(round2(labor_cost + reimbursement_cost)),
                    labor_cost: Some(labor_cost),
                    reimbursement_cost: Some(reimbursement_cost),
                    ..Default::default()
                },
            )
            .await
    }

    async fn recompute_project_revenue(&self, project_id: &str) -> Result<(), ServerError> {
        let incomes = self.store.list_incomes(Some(project_id)).await?;
        self.store
            .merge_project_financials(
                project_id,
                ProjectFinancialsPatch {
                    actual_revenue: Some(aggregation::actual_revenue(&incomes)),
                    ..Default::default()
                },
            )
            .await
    }

    async fn handle(&self, signal: &ProjectFinancialsDirty) -> Result<(), ServerError> {
        match signal.side {
            AggregateSide::Cost => self.recompute_project_cost(&signal.project_id).await,
            AggregateSide::Revenue => self.recompute_project_revenue(&signal.project_id).await,
        }
    }

    async fn drain(&self, queue: &DirtyQueue) {
        for signal in queue.drain_signals().await {
            if let Err(e) = self.handle(&signal).await {
                log::warn!(
                    "recompute of {:?} aggregate for project '{}' failed; aggregate stays stale until the next recompute: {}",
                    signal.side,
                    signal.project_id,
                    e
                );
            }
        }
    }
}
