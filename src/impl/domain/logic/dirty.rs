use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateSide {
    Cost,
    Revenue,
}

/// Signal that a project's derived financials no longer match its records.
/// Emitted by every mutation that changes an amount, a status, or a project
/// association; consumed by the idempotent recompute handler. At-least-once:
/// emitting the same signal twice is harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFinancialsDirty {
    pub project_id: String,
    pub side: AggregateSide,
}

impl ProjectFinancialsDirty {
    pub fn cost(project_id: impl Into<String>) -> Self {
        ProjectFinancialsDirty {
            project_id: project_id.into(),
            side: AggregateSide::Cost,
        }
    }

    pub fn revenue(project_id: impl Into<String>) -> Self {
        ProjectFinancialsDirty {
            project_id: project_id.into(),
            side: AggregateSide::Revenue,
        }
    }
}

/// Queue of pending dirty signals, deduplicated on drain. Mutations emit into
/// the queue and the recompute handler drains it at the end of the same
/// operation, making the eventual-consistency chain explicit.
#[derive(Debug, Default)]
pub struct DirtyQueue {
    signals: Mutex<Vec<ProjectFinancialsDirty>>,
}

impl DirtyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn emit(&self, signal: ProjectFinancialsDirty) {
        self.signals.lock().await.push(signal);
    }

    /// Takes all pending signals, first occurrence order, duplicates removed.
    pub async fn drain_signals(&self) -> Vec<ProjectFinancialsDirty> {
        let mut pending = self.signals.lock().await;
        let mut unique: Vec<ProjectFinancialsDirty> = Vec::with_capacity(pending.len());
        for signal in pending.drain(..) {
            if !unique.contains(&signal) {
                unique.push(signal);
            }
        }
        unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn drain_deduplicates_and_clears() {
        let queue = DirtyQueue::new();
        queue.emit(ProjectFinancialsDirty::cost("p1")).await;
        queue.emit(ProjectFinancialsDirty::cost("p1")).await;
        queue.emit(ProjectFinancialsDirty::revenue("p1")).await;
        let drained = queue.drain_signals().await;
        assert_eq!(drained.len(), 2);
        assert!(queue.drain_signals().await.is_empty());
    }
}
