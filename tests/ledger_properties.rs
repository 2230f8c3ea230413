//! Cross-module properties of the ledger: aggregation, the category set and
//! the filtered, sorted listing.

use chrono::NaiveDate;
use pocket_ledger::models::{CategoryChoice, Money, Record, RecordKind};
use pocket_ledger::services::{
    CategoryFilter, EntryForm, KindFilter, LedgerView, RecordFilter, SortKey, SortOrder, SortSpec,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(cents: i64, kind: RecordKind, category: &str, on: NaiveDate) -> Record {
    Record::new(Money::from_cents(cents), kind, on, category, None).unwrap()
}

/// A deterministic mix of records with repeated dates, amounts and categories
fn mixed_records(count: usize) -> Vec<Record> {
    let categories = ["Rent", "Groceries", "Salary", "Books", "Gifts"];
    let mut state: u64 = 0x5eed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let bits = state >> 33;
            let kind = if bits % 3 == 0 {
                RecordKind::Income
            } else {
                RecordKind::Expense
            };
            let cents = ((bits >> 2) % 50) as i64 * 250;
            let category = categories[((bits >> 8) % 5) as usize];
            let day = ((bits >> 12) % 5) as u32 + 1;
            record(cents, kind, category, date(2024, 3, day))
        })
        .collect()
}

fn ledger_with(records: &[Record]) -> LedgerView {
    let mut ledger = LedgerView::default();
    for r in records {
        ledger.append(r.clone());
    }
    ledger
}

#[test]
fn balance_is_income_minus_expenses_after_every_append() {
    let mut ledger = LedgerView::default();
    for r in mixed_records(40) {
        ledger.append(r);
        let totals = ledger.aggregate();
        assert_eq!(totals.balance, totals.income - totals.expenses);
    }
}

#[test]
fn distinct_categories_cover_baseline_and_records_once_sorted() {
    let records = mixed_records(30);
    let ledger = ledger_with(&records);
    let categories = ledger.distinct_categories();

    for baseline in ledger.baseline_categories() {
        assert!(categories.contains(baseline));
    }
    for r in &records {
        assert!(categories.contains(&r.category));
    }

    let mut expected = categories.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(categories, expected);
}

#[test]
fn filtered_listing_is_consistent_with_both_filters() {
    let records = mixed_records(50);
    let ledger = ledger_with(&records);
    let sort = SortSpec::default();

    let filter = RecordFilter::new()
        .kind(RecordKind::Expense)
        .category("Rent");
    let visible = ledger.filter_and_sort(&filter, &sort);

    let expected = records
        .iter()
        .filter(|r| r.kind == RecordKind::Expense && r.category == "Rent")
        .count();
    assert_eq!(visible.len(), expected);
    assert!(visible
        .iter()
        .all(|r| r.is_expense() && r.category == "Rent"));
}

#[test]
fn unfiltered_listing_only_reorders() {
    let records = mixed_records(25);
    let ledger = ledger_with(&records);

    for key in [SortKey::Date, SortKey::Amount, SortKey::Category] {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let visible = ledger.filter_and_sort(&RecordFilter::new(), &SortSpec::new(key, order));
            let mut ids: Vec<_> = visible.iter().map(|r| r.id.as_uuid()).collect();
            let mut expected: Vec<_> = records.iter().map(|r| r.id.as_uuid()).collect();
            ids.sort();
            expected.sort();
            assert_eq!(ids, expected);
        }
    }
}

#[test]
fn sorting_is_idempotent_and_ordered() {
    let records = mixed_records(25);
    let ledger = ledger_with(&records);
    let sort = SortSpec::new(SortKey::Amount, SortOrder::Ascending);

    let once: Vec<Record> = ledger
        .filter_and_sort(&RecordFilter::new(), &sort)
        .into_iter()
        .cloned()
        .collect();
    let twice = ledger_with(&once);
    let again: Vec<&Record> = twice.filter_and_sort(&RecordFilter::new(), &sort);

    let first_ids: Vec<_> = once.iter().map(|r| r.id).collect();
    let second_ids: Vec<_> = again.iter().map(|r| r.id).collect();
    assert_eq!(first_ids, second_ids);
    assert!(once.windows(2).all(|w| w[0].amount <= w[1].amount));
}

#[test]
fn toggling_the_same_key_twice_restores_the_order() {
    let mut ledger = ledger_with(&mixed_records(20));
    let before: Vec<_> = ledger.visible().iter().map(|r| r.id).collect();

    ledger.toggle_sort(SortKey::Date);
    assert_eq!(ledger.sort().order, SortOrder::Ascending);
    ledger.toggle_sort(SortKey::Date);

    let after: Vec<_> = ledger.visible().iter().map(|r| r.id).collect();
    assert_eq!(before, after);

    ledger.toggle_sort(SortKey::Category);
    assert_eq!(
        ledger.sort(),
        SortSpec::new(SortKey::Category, SortOrder::Descending)
    );
}

#[test]
fn salary_and_groceries_example() {
    let mut ledger = LedgerView::default();
    ledger.append(record(10000, RecordKind::Income, "Salary", date(2024, 1, 1)));
    ledger.append(record(4000, RecordKind::Expense, "Groceries", date(2024, 1, 2)));

    let totals = ledger.aggregate();
    assert_eq!(totals.income, Money::from_cents(10000));
    assert_eq!(totals.expenses, Money::from_cents(4000));
    assert_eq!(totals.balance, Money::from_cents(6000));

    ledger.set_kind_filter(KindFilter::Only(RecordKind::Expense));
    ledger.set_category_filter(CategoryFilter::All);
    let visible = ledger.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].category, "Groceries");
}

#[test]
fn blocked_submission_leaves_ledger_and_form_unchanged() {
    let mut ledger = LedgerView::default();
    let mut form = EntryForm::default();
    form.date = "2024-01-02".into();
    form.kind = RecordKind::Expense;
    form.category = Some(CategoryChoice::Known("Groceries".into()));
    let before = form.clone();

    assert!(form.submit(|r| ledger.append(r)).is_err());
    assert!(ledger.is_empty());
    assert_eq!(form, before);
}

#[test]
fn submitted_custom_category_joins_the_category_set() {
    let mut ledger = LedgerView::default();
    let mut form = EntryForm::default();
    form.amount = "12".into();
    form.date = "2024-01-03".into();
    form.kind = RecordKind::Expense;
    form.category = Some(CategoryChoice::Custom("Books".into()));

    form.submit(|r| ledger.append(r)).unwrap();
    assert!(ledger.distinct_categories().contains(&"Books".to_string()));
    assert_eq!(form.category, None);
}

#[test]
fn largest_amounts_still_aggregate_exactly() {
    let mut ledger = LedgerView::default();
    for _ in 0..2 {
        let mut form = EntryForm::default();
        form.amount = "10000000000".into();
        form.date = "2024-01-01".into();
        form.category = Some(CategoryChoice::Known("Salary".into()));
        form.submit(|r| ledger.append(r)).unwrap();
    }

    let totals = ledger.aggregate();
    assert_eq!(totals.income.cents(), 2 * Money::MAX_AMOUNT.cents());
    assert_eq!(totals.balance, totals.income - totals.expenses);
}

#[test]
fn amounts_above_the_maximum_are_rejected() {
    let mut ledger = LedgerView::default();
    let mut form = EntryForm::default();
    form.amount = "92233720368547758.07".into();
    form.date = "2024-01-01".into();
    form.category = Some(CategoryChoice::Known("Salary".into()));

    let err = form.submit(|r| ledger.append(r)).unwrap_err();
    assert!(err.is_validation());
    assert!(ledger.is_empty());
    assert_eq!(form.amount, "92233720368547758.07");
}
