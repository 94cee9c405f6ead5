use super::activity::{ActivityEntry, ActivityPayload};

/// Shared mutable draft shape that every entry kind projects into for
/// editing. All fields are optional; which ones are required is decided by
/// the save-time validation for the entry's kind. Values arrive from the
/// surrounding UI loosely typed (dates and statuses as strings) and are
/// parsed on save.
#[derive(Debug, Clone, Default)]
pub struct ActivityDraft {
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub staff_id: Option<String>,
    pub staff_name: Option<String>,
    /// Business date, "YYYY-MM-DD".
    pub date: Option<String>,
    /// Task description, item description, income category, or photo
    /// description, depending on kind.
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub daily_rate: Option<f64>,
    pub subcategory: Option<String>,
    pub status: Option<String>,
    pub receipt_url: Option<String>,
    pub invoice_url: Option<String>,
    pub vendor: Option<String>,
    pub client: Option<String>,
    pub notes: Option<String>,
    pub photo_urls: Option<Vec<String>>,
}

impl ActivityDraft {
    /// Projects the entry's kind-specific subset into the shared draft.
    pub fn from_entry(entry: &ActivityEntry) -> Self {
        let mut draft = ActivityDraft {
            project_id: entry.project_id.clone(),
            project_name: entry.project_name.clone(),
            date: Some(entry.date.format("%Y-%m-%d").to_string()),
            description: Some(entry.description().to_string()),
            ..Default::default()
        };
        match &entry.payload {
            ActivityPayload::Assignment {
                staff_id,
                staff_name,
                daily_rate,
                ..
            } => {
                draft.staff_id = Some(staff_id.clone());
                draft.staff_name = Some(staff_name.clone());
                draft.daily_rate = Some(*daily_rate);
            }
            ActivityPayload::Expense {
                staff_id,
                staff_name,
                subcategory,
                amount,
                status,
                receipt_url,
                vendor,
                notes,
                ..
            } => {
                draft.staff_id = staff_id.clone();
                draft.staff_name = staff_name.clone();
                draft.subcategory = Some(subcategory.clone());
                draft.amount = Some(*amount);
                draft.status = Some(status.label().to_string());
                draft.receipt_url = receipt_url.clone();
                draft.vendor = vendor.clone();
                draft.notes = notes.clone();
            }
            ActivityPayload::Income {
                staff_id,
                staff_name,
                amount,
                status,
                invoice_url,
                client,
                ..
            } => {
                draft.staff_id = staff_id.clone();
                draft.staff_name = staff_name.clone();
                draft.amount = Some(*amount);
                draft.status = Some(status.label().to_string());
                draft.invoice_url = invoice_url.clone();
                draft.client = client.clone();
            }
            ActivityPayload::Photo { photo_urls, .. } => {
                draft.photo_urls = Some(photo_urls.clone());
            }
        }
        draft
    }
}
