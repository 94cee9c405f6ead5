use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

/// Named expense subcategory (or vendor). `usage_count` is a denormalized
/// popularity count maintained incrementally by the usage counter; it is
/// never recomputed from the expense collection and can drift if a counter
/// step is skipped. It never goes below zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(default)]
    pub id: String,
    /// Unique, case-insensitively, across the collection.
    pub name: String,
    /// Present for subcategories, absent for vendors.
    pub category_id: Option<String>,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
