//! Ledger view: the session's record collection and everything derived from it
//!
//! The ledger is append-only. Totals, the category set and the visible
//! projection are recomputed from the collection every time they are asked
//! for; nothing derived is cached.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info, warn};

use super::filter::{filter_and_sort, CategoryFilter, KindFilter, RecordFilter, SortKey, SortSpec};
use super::summary::Totals;
use crate::models::{Record, RecordId};

/// Every derived value of the ledger, computed in one pass
#[derive(Debug, Clone)]
pub struct LedgerSnapshot<'a> {
    pub totals: Totals,
    pub categories: Vec<String>,
    pub visible: Vec<&'a Record>,
}

/// Owns the records and the current filter/sort settings
#[derive(Debug, Clone)]
pub struct LedgerView {
    records: Vec<Record>,
    ids: HashSet<RecordId>,
    baseline_categories: Vec<String>,
    filter: RecordFilter,
    sort: SortSpec,
}

impl LedgerView {
    /// Create an empty ledger with the given baseline categories
    pub fn new(baseline_categories: Vec<String>) -> Self {
        Self {
            records: Vec::new(),
            ids: HashSet::new(),
            baseline_categories,
            filter: RecordFilter::default(),
            sort: SortSpec::default(),
        }
    }

    /// Start with a sort order other than newest-first
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Append a record to the end of the collection
    ///
    /// A record whose id is already present is ignored.
    pub fn append(&mut self, record: Record) {
        if !self.ids.insert(record.id) {
            warn!(id = %record.id, "ignoring record with duplicate id");
            return;
        }

        info!(
            id = %record.id,
            kind = record.kind.as_str(),
            category = %record.category,
            "record added"
        );
        self.records.push(record);
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn baseline_categories(&self) -> &[String] {
        &self.baseline_categories
    }

    /// Total income, total expenses and balance over the whole collection
    pub fn aggregate(&self) -> Totals {
        Totals::from_records(&self.records)
    }

    /// Sorted, deduplicated union of the baseline and every used category
    pub fn distinct_categories(&self) -> Vec<String> {
        self.baseline_categories
            .iter()
            .chain(self.records.iter().map(|r| &r.category))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Filter and sort with explicit settings, leaving the collection alone
    pub fn filter_and_sort(&self, filter: &RecordFilter, sort: &SortSpec) -> Vec<&Record> {
        filter_and_sort(&self.records, filter, sort)
    }

    /// Filter and sort with the current settings
    pub fn visible(&self) -> Vec<&Record> {
        self.filter_and_sort(&self.filter, &self.sort)
    }

    /// Recompute every derived value from the collection
    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            totals: self.aggregate(),
            categories: self.distinct_categories(),
            visible: self.visible(),
        }
    }

    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn set_kind_filter(&mut self, kind: KindFilter) {
        debug!(%kind, "kind filter changed");
        self.filter.kind = kind;
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        debug!(%category, "category filter changed");
        self.filter.category = category;
    }

    /// Reset both filter dimensions to "all"
    pub fn clear_filters(&mut self) {
        debug!("filters cleared");
        self.filter = RecordFilter::default();
    }

    /// Same key flips the order; a different key is adopted, descending
    pub fn toggle_sort(&mut self, requested: SortKey) {
        self.sort = self.sort.toggled(requested);
        debug!(sort = %self.sort, "sort changed");
    }
}

impl Default for LedgerView {
    fn default() -> Self {
        Self::new(crate::models::default_categories())
    }
}
