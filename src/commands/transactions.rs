use crate::api::PaymentsApi;
use crate::app::App;
use crate::views::{transaction_list, Pager, SendMoneyForm};

/// Show the transaction history. `all` switches to the un-paginated
/// endpoint; the default renders the page currently held by the coordinator.
pub async fn execute_list<C: PaymentsApi + Sync>(app: &App<C>, all: bool) -> Result<(), String> {
    if all {
        let transactions = app
            .fetch_all_transactions()
            .await
            .map_err(|e| format!("Failed to fetch transactions: {}", e))?;
        println!("{}", transaction_list::render(&transactions));
    } else {
        println!(
            "{}",
            transaction_list::render_page(app.transactions(), app.page_count(), app.current_page())
        );
    }
    Ok(())
}

/// Page navigation: `page <n>` with the displayed one-based label, or
/// `page next` / `page prev`. The pager validates the pick and the
/// coordinator performs the refetch.
pub async fn execute_page<C: PaymentsApi + Sync>(
    app: &mut App<C>,
    arg: &str,
) -> Result<(), String> {
    let pager = Pager::new(app.page_count());

    let event = match arg {
        "next" => pager.next(app.current_page()),
        "prev" | "previous" => pager.previous(app.current_page()),
        label => label
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| pager.select(index)),
    };

    let selected = event.ok_or_else(|| {
        format!(
            "No such page '{}' (this history has {} page(s))",
            arg,
            app.page_count()
        )
    })?;

    app.change_page(selected.0).await;
    println!(
        "{}",
        transaction_list::render_page(app.transactions(), app.page_count(), app.current_page())
    );
    Ok(())
}

/// Look up a single transaction by id.
pub async fn execute_detail<C: PaymentsApi + Sync>(
    app: &App<C>,
    id_arg: &str,
) -> Result<(), String> {
    let id = id_arg
        .parse::<u64>()
        .map_err(|_| format!("Invalid transaction id '{}'", id_arg))?;

    let tx = app
        .fetch_transaction(id)
        .await
        .map_err(|e| format!("Failed to fetch transaction {}: {}", id, e))?;

    println!("Transaction #{}", tx.id);
    if let Some(sender) = tx.sender_id {
        println!("  Sender:      {}", sender);
    }
    println!("  Receiver:    {}", tx.receiver_id);
    println!("  Description: {}", tx.description);
    println!("  Amount:      {} {}", crate::utils::format_amount(tx.amount), tx.currency);
    if let Some(timestamp) = tx.timestamp {
        println!("  Timestamp:   {}", timestamp);
    }
    Ok(())
}

/// Reload transactions and connections from the backend, then push the new
/// connections list into the form's selector.
pub async fn execute_refresh<C: PaymentsApi + Sync>(
    app: &mut App<C>,
    form: &mut SendMoneyForm,
) -> Result<(), String> {
    app.load_initial().await;
    form.set_connections(app.connections().to_vec());
    println!(
        "Loaded {} transaction(s) across {} page(s), {} connection(s)",
        app.transactions().len(),
        app.page_count(),
        app.connections().len()
    );
    Ok(())
}
