//! Entry form for new ledger records
//!
//! The form holds raw user input. Submitting it validates the required
//! fields, builds a [`Record`], hands it to the caller and clears the form.
//! A failed submission leaves every field exactly as it was.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategoryChoice, Money, Record, RecordId, RecordKind};

/// Date format accepted by the date field
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Field values of the entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    /// Amount as typed
    pub amount: String,

    /// Income or expense
    pub kind: RecordKind,

    /// Date as typed, `YYYY-MM-DD`
    pub date: String,

    /// Selected category, if any
    pub category: Option<CategoryChoice>,

    /// Optional free text
    pub notes: String,

    /// Labels offered by the category selector
    category_options: Vec<String>,
}

impl EntryForm {
    /// Create an empty form offering the given category labels
    pub fn new(category_options: Vec<String>) -> Self {
        Self {
            amount: String::new(),
            kind: RecordKind::default(),
            date: String::new(),
            category: None,
            notes: String::new(),
            category_options,
        }
    }

    pub fn category_options(&self) -> &[String] {
        &self.category_options
    }

    /// Whether the custom-category text field should be shown
    pub fn shows_custom_field(&self) -> bool {
        matches!(self.category, Some(CategoryChoice::Custom(_)))
    }

    /// The category label a submission would use (empty if none)
    pub fn resolved_category(&self) -> &str {
        self.category.as_ref().map(CategoryChoice::resolve).unwrap_or("")
    }

    /// Validate the fields and build a record without touching the form
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if the amount, date or effective
    /// category is missing, or if the amount or date cannot be parsed.
    pub fn build_record(&self) -> LedgerResult<Record> {
        let amount_input = self.amount.trim();
        let date_input = self.date.trim();
        let category = self.resolved_category();

        let mut missing = Vec::new();
        if amount_input.is_empty() {
            missing.push("amount");
        }
        if date_input.is_empty() {
            missing.push("date");
        }
        if category.is_empty() {
            missing.push("category");
        }
        if !missing.is_empty() {
            return Err(LedgerError::missing_fields(&missing));
        }

        let amount = Money::parse(amount_input)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let date = NaiveDate::parse_from_str(date_input, DATE_INPUT_FORMAT).map_err(|_| {
            LedgerError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", date_input))
        })?;

        let notes = Some(self.notes.trim().to_string()).filter(|n| !n.is_empty());

        Record::new(amount, self.kind, date, category, notes)
    }

    /// Submit the form
    ///
    /// On success the new record is passed to `on_new_record`, the form is
    /// reset and the record's id is returned. On failure the callback is not
    /// invoked and the form keeps its input.
    pub fn submit<F>(&mut self, on_new_record: F) -> LedgerResult<RecordId>
    where
        F: FnOnce(Record),
    {
        let record = self.build_record().inspect_err(|e| {
            warn!(error = %e, "entry form submission rejected");
        })?;

        let id = record.id;
        on_new_record(record);
        self.reset();

        Ok(id)
    }

    /// Return every field to its initial empty state
    pub fn reset(&mut self) {
        self.amount.clear();
        self.kind = RecordKind::default();
        self.date.clear();
        self.category = None;
        self.notes.clear();
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new(crate::models::default_categories())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EntryForm {
        let mut form = EntryForm::default();
        form.amount = "40".into();
        form.kind = RecordKind::Expense;
        form.date = "2024-01-02".into();
        form.category = Some(CategoryChoice::Known("Groceries".into()));
        form
    }

    #[test]
    fn test_submit_emits_record_and_resets() {
        let mut form = filled_form();
        form.notes = "weekly shop".into();

        let mut received = Vec::new();
        let id = form.submit(|record| received.push(record)).unwrap();

        assert_eq!(received.len(), 1);
        let record = &received[0];
        assert_eq!(record.id, id);
        assert_eq!(record.amount, Money::from_cents(4000));
        assert_eq!(record.kind, RecordKind::Expense);
        assert_eq!(record.category, "Groceries");
        assert_eq!(record.notes.as_deref(), Some("weekly shop"));

        assert_eq!(form, EntryForm::default());
        assert!(!form.shows_custom_field());
    }

    #[test]
    fn test_missing_amount_blocks_submission() {
        let mut form = filled_form();
        form.amount.clear();
        let before = form.clone();

        let mut called = false;
        let err = form.submit(|_| called = true).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.message(), "Please fill in all required fields: amount");
        assert!(!called);
        assert_eq!(form, before);
    }

    #[test]
    fn test_reports_every_missing_field() {
        let form = EntryForm::default();
        let err = form.build_record().unwrap_err();
        assert_eq!(
            err.message(),
            "Please fill in all required fields: amount, date, category"
        );
    }

    #[test]
    fn test_custom_category_is_resolved() {
        let mut form = filled_form();
        form.category = Some(CategoryChoice::Custom("  Gifts ".into()));
        assert!(form.shows_custom_field());
        assert_eq!(form.resolved_category(), "Gifts");

        let record = form.build_record().unwrap();
        assert_eq!(record.category, "Gifts");
    }

    #[test]
    fn test_empty_custom_category_is_missing() {
        let mut form = filled_form();
        form.category = Some(CategoryChoice::Custom(String::new()));
        let err = form.build_record().unwrap_err();
        assert_eq!(err.message(), "Please fill in all required fields: category");
    }

    #[test]
    fn test_empty_notes_are_absent() {
        let mut form = filled_form();
        form.notes = "  ".into();
        assert_eq!(form.build_record().unwrap().notes, None);
    }

    #[test]
    fn test_unparseable_input_is_rejected() {
        let mut form = filled_form();
        form.amount = "forty".into();
        assert!(form.build_record().unwrap_err().is_validation());

        let mut form = filled_form();
        form.date = "02/01/2024".into();
        let err = form.build_record().unwrap_err();
        assert!(err.message().contains("YYYY-MM-DD"));

        let mut form = filled_form();
        form.amount = "-5".into();
        assert_eq!(
            form.build_record().unwrap_err().message(),
            "Amount cannot be negative"
        );
    }

    #[test]
    fn test_category_options_survive_reset() {
        let mut form = EntryForm::new(vec!["Rent".into()]);
        form.amount = "1".into();
        form.reset();
        assert_eq!(form.category_options(), ["Rent".to_string()]);
    }
}
