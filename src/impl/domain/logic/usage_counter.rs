// Usage-counter steps for subcategory/vendor popularity counts. The counter
// is denormalized and maintained incrementally -- it is never recomputed by
// scanning the expense collection, so a skipped step leaves drift. Decrements
// floor at zero.
// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CounterStep {
    Increment(String),
    Decrement(String),
}

impl CounterStep {
    /// New count after applying this step to `current`.
    pub(crate) fn apply(&self, current: u64) -> u64 {
        match self {
            CounterStep::Increment(_) => current + 1,
            CounterStep::Decrement(_) => current.saturating_sub(1),
        }
    }

    pub(crate) fn subcategory_name(&self) -> &str {
        match self {
            CounterStep::Increment(name) => name,
            CounterStep::Decrement(name) => name,
        }
    }
}

pub(crate) fn steps_for_create(subcategory: &str) -> Vec<CounterStep> {
    vec![CounterStep::Increment(subcategory.to_string())]
}

/// Edit steps: nothing when the name is unchanged, otherwise decrement the
/// old subcategory and increment the new one.
pub(crate) fn steps_for_edit(old: &str, new: &str) -> Vec<CounterStep> {
    if old == new {
        vec![]
    } else {
        vec![
            CounterStep::Decrement(old.to_string()),
            CounterStep::Increment(new.to_string()),
        ]
    }
}

pub(crate) fn steps_for_delete(subcategory: &str) -> Vec<CounterStep> {
    vec![CounterStep::Decrement(subcategory.to_string())]
}
