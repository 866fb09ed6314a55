use crate::api::PaymentsApi;
use crate::app::App;
use crate::views::{transaction_list, Currency, SendMoneyForm};

/// Apply a form-field command: `select`, `amount`, `currency`, `sender`,
/// `describe`. Numeric fields clamp rather than error, matching the form's
/// contract.
pub fn execute_field(
    form: &mut SendMoneyForm,
    command: &str,
    args: &[&str],
) -> Result<(), String> {
    let value = args.join(" ");
    if value.is_empty() {
        return Err(format!("Usage: {} <value>", command));
    }

    match command {
        "select" => {
            let user_id = value
                .parse::<u64>()
                .map_err(|_| format!("Invalid connection id '{}'", value))?;
            if !form.select_connection(user_id) {
                return Err(format!("{} is not one of your connections", user_id));
            }
            println!("Receiver set to {}", user_id);
        }
        "amount" => {
            form.set_amount(&value);
            println!("Amount set to {}", crate::utils::format_amount(form.amount()));
        }
        "currency" => {
            let currency = value.parse::<Currency>()?;
            form.set_currency(currency);
            println!("Currency set to {}", currency);
        }
        "sender" => {
            form.set_sender_id(&value);
            println!("Sender id set to {}", form.sender_id());
        }
        "describe" => {
            form.set_description(&value);
            println!("Description set to '{}'", form.description());
        }
        other => return Err(format!("Unknown field '{}'", other)),
    }
    Ok(())
}

/// Submit the form. On success the coordinator refetches the current page
/// so the new payment shows up immediately.
pub async fn execute_send<C: PaymentsApi + Sync>(
    app: &mut App<C>,
    form: &SendMoneyForm,
) -> Result<(), String> {
    let mut payment_succeeded = false;
    let result = form
        .submit(app.client(), || payment_succeeded = true)
        .await;

    if payment_succeeded {
        app.on_payment_succeeded().await;
    }

    match result {
        Ok(Some(body)) => {
            println!("{}", body);
            println!(
                "{}",
                transaction_list::render_page(
                    app.transactions(),
                    app.page_count(),
                    app.current_page()
                )
            );
            Ok(())
        }
        Ok(None) => Err("Select a connection first (`select <id>`)".to_string()),
        Err(e) => Err(format!("Payment failed: {}", e)),
    }
}

/// Show the form as it currently stands.
pub fn execute_show(form: &SendMoneyForm) -> Result<(), String> {
    println!("{}", form.render());
    Ok(())
}

/// The "Add Connection" affordance. Stub: logs only.
pub fn execute_add_connection(form: &SendMoneyForm) -> Result<(), String> {
    form.add_connection();
    println!("Adding connections is not available yet");
    Ok(())
}
