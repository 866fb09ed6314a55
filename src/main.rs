use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod commands;
mod utils;
mod views;

use api::PayBuddyClient;
use app::App;
use views::{transaction_list, SendMoneyForm};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("paybuddy=info".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("💸 Starting PayBuddy client...");

    let client = match std::env::var("PAYBUDDY_API_URL") {
        Ok(base_url) => {
            info!("Backend: {}", base_url);
            PayBuddyClient::with_base_url(base_url)
        }
        Err(_) => PayBuddyClient::new(),
    };
    let mut app = App::new(client);

    // Initial load; failures are logged and the client starts with empty
    // state rather than refusing to run.
    app.load_initial().await;

    let mut form = SendMoneyForm::new(app.connections().to_vec());

    println!(
        "{}",
        transaction_list::render_page(app.transactions(), app.page_count(), app.current_page())
    );
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        match lines.next_line().await {
            Ok(Some(line)) => {
                if commands::handle_line(&mut app, &mut form, &line).await == commands::Outcome::Quit
                {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    info!("Goodbye");
}
