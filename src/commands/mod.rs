pub mod connections;
pub mod help;
pub mod send;
pub mod transactions;

use crate::api::PaymentsApi;
use crate::app::App;
use crate::views::SendMoneyForm;

/// What the REPL should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Dispatch one input line to its command handler. Command errors are
/// printed, never propagated; the loop always continues unless the user
/// quits.
pub async fn handle_line<C: PaymentsApi + Sync>(
    app: &mut App<C>,
    form: &mut SendMoneyForm,
    line: &str,
) -> Outcome {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Outcome::Continue;
    }

    let command = parts[0];
    let args = &parts[1..];

    let result = match command {
        "list" | "tx" => transactions::execute_list(app, args.first() == Some(&"all")).await,
        "page" => match args.first() {
            Some(arg) => transactions::execute_page(app, arg).await,
            None => Err("Usage: page <n>|next|prev".to_string()),
        },
        "detail" => match args.first() {
            Some(arg) => transactions::execute_detail(app, arg).await,
            None => Err("Usage: detail <transaction id>".to_string()),
        },
        "connections" | "conn" => connections::execute(app),
        "form" => send::execute_show(form),
        "select" | "amount" | "currency" | "sender" | "describe" => {
            send::execute_field(form, command, args)
        }
        "send" | "pay" => send::execute_send(app, form).await,
        "add-connection" => send::execute_add_connection(form),
        "refresh" => transactions::execute_refresh(app, form).await,
        "help" | "?" => help::execute(),
        "quit" | "exit" => return Outcome::Quit,
        unknown => Err(format!("Unknown command '{}' (try `help`)", unknown)),
    };

    if let Err(message) = result {
        println!("{}", message);
    }

    Outcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockPaymentsApi, TransactionPage};

    fn quiet_app() -> App<MockPaymentsApi> {
        App::new(MockPaymentsApi::new())
    }

    fn empty_form() -> SendMoneyForm {
        SendMoneyForm::new(vec![])
    }

    #[tokio::test]
    async fn quit_ends_the_loop() {
        let mut app = quiet_app();
        let mut form = empty_form();
        assert_eq!(handle_line(&mut app, &mut form, "quit").await, Outcome::Quit);
        assert_eq!(handle_line(&mut app, &mut form, "exit").await, Outcome::Quit);
    }

    #[tokio::test]
    async fn blank_and_unknown_lines_continue() {
        let mut app = quiet_app();
        let mut form = empty_form();
        assert_eq!(handle_line(&mut app, &mut form, "").await, Outcome::Continue);
        assert_eq!(
            handle_line(&mut app, &mut form, "frobnicate").await,
            Outcome::Continue
        );
    }

    #[tokio::test]
    async fn page_command_routes_through_the_pager() {
        let mut client = MockPaymentsApi::new();
        client
            .expect_my_transactions_page()
            .times(1)
            .returning(|_| {
                Ok(TransactionPage {
                    content: vec![],
                    total_pages: 3,
                })
            });
        client.expect_my_connections().times(1).returning(|| Ok(vec![]));

        let mut app = App::new(client);
        app.load_initial().await;
        let mut form = empty_form();

        // Out-of-range label: the pager rejects it before any refetch, so
        // no further client expectation is needed.
        assert_eq!(
            handle_line(&mut app, &mut form, "page 9").await,
            Outcome::Continue
        );
        assert_eq!(app.current_page(), 0);
    }

    #[tokio::test]
    async fn form_fields_are_editable_from_the_repl() {
        let mut app = quiet_app();
        let mut form = SendMoneyForm::new(vec![crate::api::Connection {
            user_id: 9,
            name: None,
            email: None,
        }]);

        handle_line(&mut app, &mut form, "select 9").await;
        handle_line(&mut app, &mut form, "amount -5").await;
        handle_line(&mut app, &mut form, "currency eur").await;
        handle_line(&mut app, &mut form, "sender 3").await;

        assert_eq!(form.selected_connection(), Some(9));
        assert_eq!(form.amount(), 0.0);
        assert_eq!(form.currency(), crate::views::Currency::Eur);
        assert_eq!(form.sender_id(), 3);
    }
}
