//! Ledger record model
//!
//! A record is a single income or expense entry. Records are created by the
//! entry form and never modified afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

use super::ids::RecordId;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Whether a record adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordKind {
    #[default]
    Income,
    Expense,
}

impl RecordKind {
    /// The other kind
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Sign shown in front of amounts of this kind
    pub fn sign(self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unique identifier
    pub id: RecordId,

    /// Amount, never negative; the kind carries the sign
    pub amount: Money,

    /// Income or expense
    pub kind: RecordKind,

    /// Calendar date of the entry
    pub date: NaiveDate,

    /// Category label, never empty
    pub category: String,

    /// Optional free text; empty input is stored as `None`
    pub notes: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Create a record with a fresh id
    ///
    /// # Errors
    ///
    /// Returns a validation error if the amount is negative or above
    /// [`Money::MAX_AMOUNT`], or if the category is blank.
    pub fn new(
        amount: Money,
        kind: RecordKind,
        date: NaiveDate,
        category: impl Into<String>,
        notes: Option<String>,
    ) -> LedgerResult<Self> {
        if amount.is_negative() {
            return Err(LedgerError::Validation(
                "Amount cannot be negative".to_string(),
            ));
        }

        if amount > Money::MAX_AMOUNT {
            return Err(LedgerError::Validation(format!(
                "Amount cannot exceed {}",
                Money::MAX_AMOUNT
            )));
        }

        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(LedgerError::missing_fields(&["category"]));
        }

        let notes = notes.filter(|n| !n.trim().is_empty());

        Ok(Self {
            id: RecordId::new(),
            amount,
            kind,
            date,
            category,
            notes,
            created_at: Utc::now(),
        })
    }

    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == RecordKind::Expense
    }

    /// The amount with the sign implied by the kind, e.g. `-$40.00`
    pub fn signed_amount(&self, currency_symbol: &str) -> String {
        format!(
            "{}{}",
            self.kind.sign(),
            self.amount.format_with_symbol(currency_symbol)
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.signed_amount("$")
        )
    }
}
