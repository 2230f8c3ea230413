//! Totals and session summary formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::services::{LedgerView, Totals};

use super::record::format_record_table;

#[derive(Tabled)]
struct TotalsRow {
    #[tabled(rename = "Total Income")]
    income: String,
    #[tabled(rename = "Total Expenses")]
    expenses: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format income, expenses and balance as a one-row table
pub fn format_totals(totals: &Totals, currency_symbol: &str) -> String {
    let row = TotalsRow {
        income: totals.income.format_with_symbol(currency_symbol),
        expenses: totals.expenses.format_with_symbol(currency_symbol),
        balance: totals.balance.format_with_symbol(currency_symbol),
    };

    let mut table = Table::new([row]);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format everything recorded in a session, in insertion order
pub fn format_session_summary(ledger: &LedgerView, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Session records: {}\n", ledger.len()));
    output.push_str(&format_record_table(
        ledger.records(),
        &settings.currency_symbol,
        &settings.date_format,
    ));
    output.push_str(&format_totals(&ledger.aggregate(), &settings.currency_symbol));
    output.push_str("Records are not saved between sessions.\n");

    output
}
