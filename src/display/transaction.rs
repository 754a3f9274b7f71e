//! Transaction display formatting

use crate::config::Settings;
use crate::models::RecordedTransaction;
use crate::services::LedgerSummary;

/// Format a signed amount with two decimals and an explicit sign
pub fn format_amount(signed: f64) -> String {
    if signed < 0.0 {
        format!("-{:.2}", -signed)
    } else {
        format!("+{:.2}", signed)
    }
}

/// Format a single recorded transaction as a register row
///
/// `date_width` is the width of the date column, so that rows line up under
/// a shared header.
pub fn format_transaction_row(
    recorded: &RecordedTransaction,
    settings: &Settings,
    date_width: usize,
) -> String {
    let txn = &recorded.transaction;
    let mut row = format!(
        "{:date_width$} {:7} {:20} {:>12} {:>10}",
        settings.format_date(txn.date),
        txn.kind.label(),
        truncate(txn.category.name(), 20),
        format_amount(txn.signed_amount()),
        format!("{:.0}", (txn.amount * settings.exchange_rate).round()),
    );

    if !txn.note.is_empty() {
        row.push_str("  ");
        row.push_str(&truncate(&txn.note, 30));
    }

    if txn.tax.is_some() || txn.superannuation.is_some() {
        let mut parts = vec![format!("gross {:.2}", txn.gross_amount())];
        if let Some(tax) = txn.tax {
            parts.push(format!("tax {:.2}", tax));
        }
        if let Some(sup) = txn.superannuation {
            parts.push(format!("super {:.2}", sup));
        }
        row.push_str(&format!("  [{}]", parts.join(", ")));
    }

    if !txn.items.is_empty() {
        row.push_str(&format!("  ({} items)", txn.items.len()));
    }
    row
}

/// Format recorded transactions as a register, oldest first
pub fn format_register(transactions: &[RecordedTransaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let date_width = transactions
        .iter()
        .map(|recorded| settings.format_date(recorded.transaction.date).chars().count())
        .max()
        .unwrap_or(0)
        .max("Date".len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:date_width$} {:7} {:20} {:>12} {:>10}\n",
        "Date", "Type", "Category", settings.entry_currency, settings.display_currency
    ));
    output.push_str(&"-".repeat(date_width + 53));
    output.push('\n');

    for recorded in transactions {
        output.push_str(&format_transaction_row(recorded, settings, date_width));
        output.push('\n');
    }

    output
}

/// One-line totals
pub fn format_summary(summary: &LedgerSummary, settings: &Settings) -> String {
    format!(
        "{} transactions | spent {} {:.2} | earned {} {:.2} | net {}",
        summary.count,
        settings.entry_currency,
        summary.expense_total,
        settings.entry_currency,
        summary.income_total,
        format_amount(summary.net()),
    )
}

/// Truncate to `max_len` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
