use chrono::{Datelike, NaiveDate};
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

use crate::entities::ActivityEntry;

/// Ledger amounts are presented in a single currency.
pub(crate) const LEDGER_CURRENCY: Currency = Currency::USD;

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format a cash amount with currency symbol, correct number of decimal
/// places, and proper thousands separators. Uses the en locale ('.' as
/// decimal mark, i.e. $1,000.00) regardless of the user's locale.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    if decimal_places == 0 {
        let amount_rounded = (amount.round() as i64).to_formatted_string(&Locale::en);
        format!("{}{}", currency.symbol(), amount_rounded)
    } else {
        let amount_integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::en);
        let amount_fractional_part = format!("{:.decimal_places$}", amount.fract())
            .split('.')
            .nth(1)
            .map(|f| f.to_string())
            .unwrap_or_default();
        format!(
            "{}{}.{:0decimal_places$}",
            currency.symbol(),
            amount_integer_part,
            amount_fractional_part,
        )
    }
}

/// Month bucket label, e.g. "Mar 2026".
pub(crate) fn month_label(month: NaiveDate) -> String {
    month.format("%b %Y").to_string()
}

/// The date representations a free-text query may match: short format, ISO,
/// month-year, and full.
pub(crate) fn date_representations(date: NaiveDate) -> [String; 4] {
    [
        date.format("%m/%d/%Y").to_string(),
        date.format("%Y-%m-%d").to_string(),
        date.format("%b %Y").to_string(),
        format!("{} {}, {}", date.format("%b"), date.day(), date.year()),
    ]
}

/// Every string a free-text search query is matched against for one entry:
/// description, staff name, uploaded-by name, amount / daily rate (raw
/// numeric and formatted currency), and the date representations.
pub(crate) fn search_terms(entry: &ActivityEntry) -> Vec<String> {
    let mut terms = vec![entry.description().to_string()];
    if let Some(staff_name) = entry.staff_name() {
        terms.push(staff_name.to_string());
    }
    if let crate::entities::ActivityPayload::Photo {
        uploaded_by_name, ..
    } = &entry.payload
    {
        terms.push(uploaded_by_name.clone());
    }
    if let Some(amount) = entry.amount() {
        terms.push(amount.to_string());
        terms.push(format!("{:.2}", amount));
        terms.push(format_amount(amount, LEDGER_CURRENCY));
    }
    terms.extend(date_representations(entry.date));
    terms
}
