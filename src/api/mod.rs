pub mod client;
pub mod models;

pub use client::{PayBuddyClient, PaymentsApi};
pub use models::{ApiError, Connection, PaymentRequest, Transaction, TransactionPage, UserRef};

#[cfg(test)]
pub use client::MockPaymentsApi;
