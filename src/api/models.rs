use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A recorded payment between two users, as returned by the backend.
///
/// Amount and currency are opaque pass-through values; the client never
/// performs arithmetic or conversion on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    #[serde(default)]
    pub sender_id: Option<u64>,
    pub receiver_id: u64,
    pub description: String,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

/// One page of the paginated transaction history.
///
/// The backend sends more fields than these (size, number, sort metadata);
/// only `content` and `totalPages` are part of the client contract, the rest
/// is ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    #[serde(default)]
    pub content: Vec<Transaction>,
    #[serde(default)]
    pub total_pages: usize,
}

/// Another user the current user is permitted to send money to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub user_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Party reference inside a payment request body.
///
/// The backend expects the nested objects keyed `userID`, not `userId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "userID")]
    pub user_id: u64,
}

/// Request body for POST make-payment. Built fresh per submission and
/// discarded once the request resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub sender: UserRef,
    pub receiver: UserRef,
}

/// Error type for all backend API operations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    #[error("HTTP Error ({0}): {1}")]
    Http(u16, String),
    #[error("Transport Error: {0}")]
    Transport(String),
    #[error("Deserialization Error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_request_serializes_with_user_id_keys() {
        let request = PaymentRequest {
            amount: 50.0,
            currency: "EUR".to_string(),
            description: "payment for services".to_string(),
            sender: UserRef { user_id: 3 },
            receiver: UserRef { user_id: 9 },
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "amount": 50.0,
                "currency": "EUR",
                "description": "payment for services",
                "sender": { "userID": 3 },
                "receiver": { "userID": 9 },
            })
        );
    }

    #[test]
    fn transaction_page_tolerates_extra_fields() {
        let body = r#"{
            "content": [
                {"id": 1, "receiverId": 7, "description": "lunch", "amount": 12.5, "currency": "USD"}
            ],
            "totalPages": 4,
            "totalElements": 31,
            "size": 10,
            "number": 0,
            "sort": {"sorted": false}
        }"#;

        let page: TransactionPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].receiver_id, 7);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn transaction_deserializes_camel_case() {
        let body = r#"{"id": 42, "senderId": 3, "receiverId": 9, "description": "rent",
                       "amount": 800.0, "currency": "EUR", "timestamp": "2024-03-01T12:30:00"}"#;
        let tx: Transaction = serde_json::from_str(body).unwrap();
        assert_eq!(tx.id, 42);
        assert_eq!(tx.sender_id, Some(3));
        assert_eq!(tx.receiver_id, 9);
        assert_eq!(tx.currency, "EUR");
        assert!(tx.timestamp.is_some());
    }

    #[test]
    fn empty_page_deserializes_to_defaults() {
        let page: TransactionPage = serde_json::from_str("{}").unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
