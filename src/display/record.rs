//! Record display formatting
//!
//! Renders ledger records as a plain-text table for terminal output outside
//! the TUI.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Record;

/// One row of the record table
#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl RecordRow {
    fn new(record: &Record, currency_symbol: &str, date_format: &str) -> Self {
        Self {
            date: record.date.format(date_format).to_string(),
            kind: record.kind.to_string(),
            category: record.category.clone(),
            amount: record.signed_amount(currency_symbol),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }
}

/// Format records as a table, in the order given
pub fn format_record_table<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    let rows: Vec<RecordRow> = records
        .into_iter()
        .map(|r| RecordRow::new(r, currency_symbol, date_format))
        .collect();

    if rows.is_empty() {
        return "No records.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordKind};
    use chrono::NaiveDate;

    fn groceries() -> Record {
        Record::new(
            Money::from_cents(4000),
            RecordKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            "Groceries",
            Some("market".into()),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_record_table(Vec::new(), "$", "%Y-%m-%d"), "No records.\n");
    }

    #[test]
    fn test_table_contains_rows() {
        let record = groceries();
        let output = format_record_table([&record], "$", "%d/%m/%Y");
        assert!(output.contains("Category"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("-$40.00"));
        assert!(output.contains("02/01/2024"));
        assert!(output.contains("market"));
    }
}
