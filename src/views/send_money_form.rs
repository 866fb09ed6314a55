use std::fmt;
use std::str::FromStr;

use tracing::{error, info, warn};

use crate::api::{ApiError, Connection, PaymentRequest, PaymentsApi, UserRef};
use crate::utils::format_amount;

/// Currencies offered by the send-money form.
///
/// This is the form's choice set only; fetched transactions keep whatever
/// currency string the backend sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Eur];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(format!("Unknown currency '{}'", other)),
        }
    }
}

const DEFAULT_DESCRIPTION: &str = "payment for services";

/// The send-money form: connection selector, amount/currency inputs, sender
/// id, and submission.
///
/// Numeric inputs are clamped, never rejected with a visible error: a
/// negative or unparseable amount collapses to zero, an invalid sender id
/// clamps to zero with a logged error. Fields keep their last value across a
/// failed submission.
pub struct SendMoneyForm {
    connections: Vec<Connection>,
    selected_connection: Option<u64>,
    amount: f64,
    currency: Currency,
    sender_id: u64,
    description: String,
}

impl SendMoneyForm {
    pub fn new(connections: Vec<Connection>) -> Self {
        SendMoneyForm {
            connections,
            selected_connection: None,
            amount: 0.0,
            currency: Currency::default(),
            sender_id: 0,
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    /// Replace the selector's option set. A selection that is no longer
    /// among the options is cleared, keeping the selected value a subset of
    /// the fetched connections.
    pub fn set_connections(&mut self, connections: Vec<Connection>) {
        self.connections = connections;
        if let Some(selected) = self.selected_connection {
            if !self.connections.iter().any(|c| c.user_id == selected) {
                self.selected_connection = None;
            }
        }
    }

    /// Select a receiver from the connections list. Unknown ids are refused
    /// and logged, leaving the previous selection in place.
    pub fn select_connection(&mut self, user_id: u64) -> bool {
        if self.connections.iter().any(|c| c.user_id == user_id) {
            self.selected_connection = Some(user_id);
            true
        } else {
            warn!("Connection {} is not in the connections list", user_id);
            false
        }
    }

    pub fn selected_connection(&self) -> Option<u64> {
        self.selected_connection
    }

    /// Set the amount from raw input. Negative or non-numeric entries
    /// collapse to zero.
    pub fn set_amount(&mut self, input: &str) {
        match input.trim().parse::<f64>() {
            Ok(value) if value >= 0.0 && value.is_finite() => self.amount = value,
            _ => self.amount = 0.0,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Set the sender id from raw input. Invalid entries clamp to zero with
    /// a logged error rather than a visible one.
    pub fn set_sender_id(&mut self, input: &str) {
        match input.trim().parse::<u64>() {
            Ok(value) => self.sender_id = value,
            Err(e) => {
                error!("Invalid sender id '{}': {}", input, e);
                self.sender_id = 0;
            }
        }
    }

    pub fn sender_id(&self) -> u64 {
        self.sender_id
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Build the outbound request body from current field state.
    fn payment_request(&self, receiver_id: u64) -> PaymentRequest {
        PaymentRequest {
            amount: self.amount,
            currency: self.currency.as_str().to_string(),
            description: self.description.clone(),
            sender: UserRef {
                user_id: self.sender_id,
            },
            receiver: UserRef {
                user_id: receiver_id,
            },
        }
    }

    /// Submit the form: exactly one POST per call.
    ///
    /// On HTTP success the response body (plain text) is returned and
    /// `on_success` is invoked exactly once; the coordinator uses it to
    /// refresh the transaction list. On failure nothing is reset and the
    /// callback is not invoked. Without a selected connection no request is
    /// issued and `Ok(None)` is returned.
    pub async fn submit<C, F>(&self, client: &C, on_success: F) -> Result<Option<String>, ApiError>
    where
        C: PaymentsApi + Sync,
        F: FnOnce(),
    {
        let receiver_id = match self.selected_connection {
            Some(id) => id,
            None => {
                warn!("Submit refused: no connection selected");
                return Ok(None);
            }
        };

        let request = self.payment_request(receiver_id);
        info!(
            "Sending {} {} to {}",
            format_amount(request.amount),
            request.currency,
            receiver_id
        );

        match client.make_payment(&request).await {
            Ok(body) => {
                on_success();
                Ok(Some(body))
            }
            Err(e) => {
                error!("Payment failed: {}", e);
                Err(e)
            }
        }
    }

    /// "Add Connection" affordance. Not wired to the backend yet.
    pub fn add_connection(&self) {
        // TODO: POST to the users add-connection endpoint once the form
        // grows an input for the peer's email.
        info!("adding connection");
    }

    /// Render the form state: the selector options with the current pick
    /// marked, then the input fields.
    pub fn render(&self) -> String {
        let mut output = String::from("Send Money\n\n");

        output.push_str("Select A Connection:\n");
        if self.connections.is_empty() {
            output.push_str("  (no connections)\n");
        }
        for connection in &self.connections {
            let marker = if self.selected_connection == Some(connection.user_id) {
                '*'
            } else {
                ' '
            };
            match &connection.name {
                Some(name) => {
                    output.push_str(&format!("{} {} ({})\n", marker, connection.user_id, name))
                }
                None => output.push_str(&format!("{} {}\n", marker, connection.user_id)),
            }
        }

        let options: Vec<&str> = Currency::ALL.iter().map(Currency::as_str).collect();
        output.push_str(&format!("\nAmount:      {}\n", format_amount(self.amount)));
        output.push_str(&format!(
            "Currency:    {} (options: {})\n",
            self.currency,
            options.join(", ")
        ));
        output.push_str(&format!("Sender id:   {}\n", self.sender_id));
        output.push_str(&format!("Description: {}\n", self.description));
        output
    }
}
