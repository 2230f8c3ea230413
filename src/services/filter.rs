//! Filtering and sorting of ledger records
//!
//! Filters narrow the ledger by kind and by category; a [`SortSpec`] orders
//! what remains. Neither touches the underlying collection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::models::{Record, RecordKind};

/// Filter on the record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(RecordKind),
}

impl KindFilter {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => record.kind == *kind,
        }
    }

    /// Next value in the cycle All -> Income -> Expense -> All
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(RecordKind::Income),
            Self::Only(RecordKind::Income) => Self::Only(RecordKind::Expense),
            Self::Only(RecordKind::Expense) => Self::All,
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(kind) => write!(f, "{}", kind.as_str()),
        }
    }
}

/// Filter on the exact category label
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => record.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Both filter dimensions, applied conjunctively
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFilter {
    pub kind: KindFilter,
    pub category: CategoryFilter,
}

impl RecordFilter {
    /// Create a filter that keeps every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only records of one kind
    pub fn kind(mut self, kind: RecordKind) -> Self {
        self.kind = KindFilter::Only(kind);
        self
    }

    /// Keep only records of one category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Only(category.into());
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.kind.matches(record) && self.category.matches(record)
    }

    pub fn is_empty(&self) -> bool {
        self.kind == KindFilter::All && self.category == CategoryFilter::All
    }
}

/// Field the ledger is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Category,
}

impl SortKey {
    /// Compare two records on this key alone
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Date => a.date.cmp(&b.date),
            Self::Amount => a.amount.cmp(&b.amount),
            Self::Category => a.category.cmp(&b.category),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to the active sort key
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Sort key plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Sort in place. `sort_by` is stable, so equal keys keep insertion order
    /// in both directions.
    pub fn sort(&self, records: &mut [&Record]) {
        records.sort_by(|a, b| self.compare(a, b));
    }

    /// Apply the toggle rule: the same key flips the order, a new key starts
    /// descending.
    pub fn toggled(self, requested: SortKey) -> Self {
        if requested == self.key {
            Self::new(self.key, self.order.flipped())
        } else {
            Self::new(requested, SortOrder::Descending)
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.order.arrow())
    }
}

/// Filter then sort, returning references into `records`
pub fn filter_and_sort<'a>(
    records: &'a [Record],
    filter: &RecordFilter,
    sort: &SortSpec,
) -> Vec<&'a Record> {
    let mut selected: Vec<&Record> = records.iter().filter(|r| filter.matches(r)).collect();
    sort.sort(&mut selected);
    selected
}
