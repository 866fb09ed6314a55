use crate::api::Transaction;
use crate::utils::{format_amount, Align, Table};

use super::pager::Pager;

/// Render the transaction history as a table.
///
/// Pure rendering: one row per transaction in input order, columns fixed as
/// Receiver | Description | Amount | Currency. An empty slice renders a
/// header-only table rather than failing.
pub fn render(transactions: &[Transaction]) -> String {
    let mut table = Table::with_alignments(
        vec!["Receiver", "Description", "Amount", "Currency"],
        vec![Align::Left, Align::Left, Align::Right, Align::Left],
    );

    for tx in transactions {
        table.add_row(vec![
            tx.receiver_id.to_string(),
            tx.description.clone(),
            format_amount(tx.amount),
            tx.currency.clone(),
        ]);
    }

    format!("My Transactions\n\n{}", table.render())
}

/// Paginated variant: the table plus the page-selector line underneath.
pub fn render_page(transactions: &[Transaction], page_count: usize, current_page: usize) -> String {
    let pager = Pager::new(page_count);
    let mut output = render(transactions);
    let selector = pager.render(current_page);
    if !selector.is_empty() {
        output.push('\n');
        output.push_str(&selector);
        output.push('\n');
    }
    output
}
