//! Aggregate totals over a set of records

use crate::models::{Money, Record, RecordKind};

/// Income, expenses and the resulting balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

impl Totals {
    /// Sum amounts partitioned by kind
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut income = Money::zero();
        let mut expenses = Money::zero();

        for record in records {
            match record.kind {
                RecordKind::Income => income += record.amount,
                RecordKind::Expense => expenses += record.amount,
            }
        }

        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    /// True when the balance is zero or positive
    pub fn is_solvent(&self) -> bool {
        !self.balance.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(cents: i64, kind: RecordKind) -> Record {
        Record::new(
            Money::from_cents(cents),
            kind,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Misc",
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_totals() {
        let totals = Totals::from_records(&Vec::<Record>::new());
        assert_eq!(totals, Totals::default());
        assert!(totals.is_solvent());
    }

    #[test]
    fn test_negative_balance() {
        let records = vec![
            record(5000, RecordKind::Income),
            record(7500, RecordKind::Expense),
            record(500, RecordKind::Expense),
        ];
        let totals = Totals::from_records(&records);
        assert_eq!(totals.income, Money::from_cents(5000));
        assert_eq!(totals.expenses, Money::from_cents(8000));
        assert_eq!(totals.balance, Money::from_cents(-3000));
        assert!(!totals.is_solvent());
    }
}
