use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        RwLock, RwLockReadGuard, RwLockWriteGuard,
    },
};

use async_trait::async_trait;
use chrono::Utc;
use fractic_server_error::ServerError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::{
    domain::repositories::transaction_store::{
        AssignmentStore, ExpenseStore, IncomeStore, PhotoStore, ProjectStore, SubcategoryStore,
    },
    entities::{
        AssignmentPatch, Expense, ExpensePatch, Income, IncomePatch, PhotoPatch, Project,
        ProjectFinancialsPatch, ProjectPhoto, Subcategory, TaskAssignment,
    },
    errors::{ProjectNotFound, RecordNotFound, StoreError},
};

const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

#[derive(Debug, Default)]
struct Collections {
    projects: HashMap<String, Value>,
    assignments: HashMap<String, Value>,
    expenses: HashMap<String, Value>,
    incomes: HashMap<String, Value>,
    photos: HashMap<String, Value>,
    subcategories: HashMap<String, Value>,
}

/// In-memory document store: documents are JSON objects, updates are partial
/// merges, and write-time timestamps are stamped by the store. Reference
/// implementation of the collaborator contract, used by tests and local
/// consumers; durability is out of scope.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
    next_id: AtomicU64,
}

// Document helpers.
// ---

fn doc_of<T: Serialize>(record: &T) -> Result<Map<String, Value>, ServerError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(doc)) => Ok(doc),
        Ok(_) => Err(StoreError::new("record did not serialize to a document")),
        Err(e) => Err(StoreError::with_debug("failed to serialize record", &e)),
    }
}

fn record_of<T: DeserializeOwned>(doc: &Map<String, Value>) -> Result<T, ServerError> {
    serde_json::from_value(Value::Object(doc.clone()))
        .map_err(|e| StoreError::with_debug("failed to deserialize document", &e))
}

/// Server-assigned write-time timestamp sentinel.
fn stamp(doc: &mut Map<String, Value>, key: &str) {
    doc.insert(key.to_string(), Value::String(Utc::now().to_rfc3339()));
}

/// Partial merge: fields present in the patch overwrite the document's
/// (explicit nulls clear); everything else is untouched.
fn merge<P: Serialize>(doc: &mut Map<String, Value>, patch: &P) -> Result<(), ServerError> {
    for (key, value) in doc_of(patch)? {
        doc.insert(key, value);
    }
    Ok(())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, ServerError> {
        self.collections
            .read()
            .map_err(|_| StoreError::new("store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, ServerError> {
        self.collections
            .write()
            .map_err(|_| StoreError::new("store lock poisoned"))
    }

    fn ensure_id(&self, doc: &mut Map<String, Value>, prefix: &str) -> String {
        let existing = doc.get("id").and_then(Value::as_str).unwrap_or("");
        if !existing.is_empty() {
            return existing.to_string();
        }
        let id = format!("{}-{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        doc.insert("id".to_string(), Value::String(id.clone()));
        id
    }

    fn create_doc<T>(
        &self,
        record: &T,
        prefix: &str,
        stamp_updated: bool,
    ) -> Result<(String, Map<String, Value>, T), ServerError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut doc = doc_of(record)?;
        let id = self.ensure_id(&mut doc, prefix);
        stamp(&mut doc, CREATED_AT);
        if stamp_updated {
            stamp(&mut doc, UPDATED_AT);
        }
        let stored = record_of(&doc)?;
        Ok((id, doc, stored))
    }
}

fn update_doc<T, P>(
    map: &mut HashMap<String, Value>,
    id: &str,
    patch: &P,
) -> Result<T, ServerError>
where
    T: DeserializeOwned,
    P: Serialize,
{
    let doc = match map.get_mut(id) {
        Some(Value::Object(doc)) => doc,
        _ => return Err(RecordNotFound::new(id)),
    };
    merge(doc, patch)?;
    stamp(doc, UPDATED_AT);
    record_of(doc)
}

fn get_doc<T: DeserializeOwned>(
    map: &HashMap<String, Value>,
    id: &str,
) -> Result<Option<T>, ServerError> {
    match map.get(id) {
        Some(Value::Object(doc)) => Ok(Some(record_of(doc)?)),
        _ => Ok(None),
    }
}

fn list_docs<T, F>(map: &HashMap<String, Value>, keep: F) -> Result<Vec<T>, ServerError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> bool,
{
    let mut records = Vec::with_capacity(map.len());
    for value in map.values() {
        if let Value::Object(doc) = value {
            let record: T = record_of(doc)?;
            if keep(&record) {
                records.push(record);
            }
        }
    }
    Ok(records)
}

// Store trait implementations.
// ---

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn get_project(&self, id: &str) -> Result<Option<Project>, ServerError> {
        get_doc(&self.read()?.projects, id)
    }

    async fn create_project(&self, project: Project) -> Result<Project, ServerError> {
        let (id, doc, stored) = self.create_doc(&project, "proj", true)?;
        self.write()?.projects.insert(id, Value::Object(doc));
        Ok(stored)
    }

    async fn merge_project_financials(
        &self,
        id: &str,
        patch: ProjectFinancialsPatch,
    ) -> Result<(), ServerError> {
        let mut collections = self.write()?;
        let doc = match collections.projects.get_mut(id) {
            Some(Value::Object(doc)) => doc,
            _ => return Err(ProjectNotFound::new(id)),
        };
        merge(doc, &patch)?;
        stamp(doc, UPDATED_AT);
        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<(), ServerError> {
        self.write()?.projects.remove(id);
        Ok(())
    }
}

#[async_trait]
impl AssignmentStore for MemoryStore {
    async fn list_assignments(
        &self,
        project_id: Option<&str>,
    ) -> Result<Vec<TaskAssignment>, ServerError> {
        list_docs(&self.read()?.assignments, |a: &TaskAssignment| {
            project_id.map_or(true, |p| a.project_id == p)
        })
    }

    async fn get_assignment(&self, id: &str) -> Result<Option<TaskAssignment>, ServerError> {
        get_doc(&self.read()?.assignments, id)
    }

    async fn create_assignment(
        &self,
        assignment: TaskAssignment,
    ) -> Result<TaskAssignment, ServerError> {
        let (id, doc, stored) = self.create_doc(&assignment, "ta", true)?;
        self.write()?.assignments.insert(id, Value::Object(doc));
        Ok(stored)
    }

    async fn update_assignment(
        &self,
        id: &str,
        patch: AssignmentPatch,
    ) -> Result<TaskAssignment, ServerError> {
        update_doc(&mut self.write()?.assignments, id, &patch)
    }

    async fn delete_assignment(&self, id: &str) -> Result<(), ServerError> {
        self.write()?.assignments.remove(id);
        Ok(())
    }
}

#[async_trait]
impl ExpenseStore for MemoryStore {
    async fn list_expenses(&self, project_id: Option<&str>) -> Result<Vec<Expense>, ServerError> {
        list_docs(&self.read()?.expenses, |e: &Expense| {
            project_id.map_or(true, |p| e.project_id.as_deref() == Some(p))
        })
    }

    async fn get_expense(&self, id: &str) -> Result<Option<Expense>, ServerError> {
        get_doc(&self.read()?.expenses, id)
    }

    async fn create_expense(&self, expense: Expense) -> Result<Expense, ServerError> {
        let (id, doc, stored) = self.create_doc(&expense, "exp", true)?;
        self.write()?.expenses.insert(id, Value::Object(doc));
        Ok(stored)
    }

    async fn update_expense(&self, id: &str, patch: ExpensePatch) -> Result<Expense, ServerError> {
        update_doc(&mut self.write()?.expenses, id, &patch)
    }

    async fn delete_expense(&self, id: &str) -> Result<(), ServerError> {
        self.write()?.expenses.remove(id);
        Ok(())
    }
}

#[async_trait]
impl IncomeStore for MemoryStore {
    async fn list_incomes(&self, project_id: Option<&str>) -> Result<Vec<Income>, ServerError> {
        list_docs(&self.read()?.incomes, |i: &Income| {
            project_id.map_or(true, |p| i.project_id.as_deref() == Some(p))
        })
    }

    async fn get_income(&self, id: &str) -> Result<Option<Income>, ServerError> {
        get_doc(&self.read()?.incomes, id)
    }

    async fn create_income(&self, income: Income) -> Result<Income, ServerError> {
        let (id, doc, stored) = self.create_doc(&income, "inc", true)?;
        self.write()?.incomes.insert(id, Value::Object(doc));
        Ok(stored)
    }

    async fn update_income(&self, id: &str, patch: IncomePatch) -> Result<Income, ServerError> {
        update_doc(&mut self.write()?.incomes, id, &patch)
    }

    async fn delete_income(&self, id: &str) -> Result<(), ServerError> {
        self.write()?.incomes.remove(id);
        Ok(())
    }
}

#[async_trait]
impl PhotoStore for MemoryStore {
    async fn list_photos(
        &self,
        project_id: Option<&str>,
    ) -> Result<Vec<ProjectPhoto>, ServerError> {
        list_docs(&self.read()?.photos, |p: &ProjectPhoto| {
            project_id.map_or(true, |pid| p.project_id == pid)
        })
    }

    async fn get_photo(&self, id: &str) -> Result<Option<ProjectPhoto>, ServerError> {
        get_doc(&self.read()?.photos, id)
    }

    async fn create_photo(&self, photo: ProjectPhoto) -> Result<ProjectPhoto, ServerError> {
        let (id, doc, stored) = self.create_doc(&photo, "ph", false)?;
        self.write()?.photos.insert(id, Value::Object(doc));
        Ok(stored)
    }

    async fn update_photo(
        &self,
        id: &str,
        patch: PhotoPatch,
    ) -> Result<ProjectPhoto, ServerError> {
        update_doc(&mut self.write()?.photos, id, &patch)
    }

    async fn delete_photo(&self, id: &str) -> Result<(), ServerError> {
        self.write()?.photos.remove(id);
        Ok(())
    }
}

#[async_trait]
impl SubcategoryStore for MemoryStore {
    async fn list_subcategories(&self) -> Result<Vec<Subcategory>, ServerError> {
        list_docs(&self.read()?.subcategories, |_: &Subcategory| true)
    }

    async fn find_subcategory_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Subcategory>, ServerError> {
        let subcategories = self.list_subcategories().await?;
        Ok(subcategories.into_iter().find(|s| s.name == name))
    }

    async fn create_subcategory(
        &self,
        subcategory: Subcategory,
    ) -> Result<Subcategory, ServerError> {
        let (id, doc, stored) = self.create_doc(&subcategory, "sub", true)?;
        self.write()?.subcategories.insert(id, Value::Object(doc));
        Ok(stored)
    }

    async fn set_usage_count(&self, id: &str, usage_count: u64) -> Result<(), ServerError> {
        let mut collections = self.write()?;
        let doc = match collections.subcategories.get_mut(id) {
            Some(Value::Object(doc)) => doc,
            _ => return Err(RecordNotFound::new(id)),
        };
        doc.insert(
            "usageCount".to_string(),
            Value::Number(usage_count.into()),
        );
        stamp(doc, UPDATED_AT);
        Ok(())
    }
}
