use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod config;
pub mod controllers;
pub mod dashboard;
pub mod filter;
pub mod forms;
pub mod routing;
pub mod service;
pub mod shell;
pub mod store;

pub use config::ClientConfig;
pub use dashboard::{DashboardModel, TransactionRow};
pub use filter::{filter_transactions, FilterCriteria, FilterForm, FilterOutcome, RecordIssue, RejectedRecord};
pub use forms::{FormError, NewAccount, NewTransaction, RegisterForm, TransactionForm};
pub use routing::{EnterHook, History, MemoryHistory, Page, RenderInstruction, Route, RouteTable, ViewId};
pub use service::{AccountService, ApiError, ServiceReply};
pub use shell::Shell;
pub use store::{AppState, MemoryStorage, StateUpdate, StorageBackend, StorageError, Store};

/// Account as served by `GET /api/accounts/{user}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique user name, also the path segment of the account URL
    pub user: String,
    #[serde(default)]
    pub description: String,
    pub balance: f64,
    /// ISO-ish currency label, displayed verbatim
    #[serde(default)]
    pub currency: String,
    /// Transaction history in server order. A freshly created account may
    /// omit the field entirely.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Balance rendered with two decimals
    pub fn formatted_balance(&self) -> String {
        format!("{:.2}", self.balance)
    }
}

/// A single entry of an account's history.
///
/// Every field is lenient on the way in: the service is not trusted to send
/// well-formed records, and the filter engine classifies the broken ones
/// instead of failing the whole account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    /// Short label shown in the history table
    #[serde(default)]
    pub object: String,
    /// Free text searched by the keyword filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Amount,
}

/// Transaction amount as it arrived on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    /// Anything that is not a JSON number (strings, null, objects...)
    Malformed(Value),
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Malformed(Value::Null)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl Amount {
    /// Numeric value, if there is a usable one. Numeric strings are accepted
    /// the same way the search form accepts them.
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Number(value) if value.is_finite() => Some(*value),
            Amount::Number(_) => None,
            Amount::Malformed(Value::String(text)) => filter::parse_amount(text),
            Amount::Malformed(_) => None,
        }
    }

    /// Two-decimal rendering; unusable amounts are shown as received
    pub fn display(&self) -> String {
        match (self.value(), self) {
            (Some(value), _) => format!("{:.2}", value),
            (None, Amount::Malformed(Value::String(text))) => text.clone(),
            (None, Amount::Malformed(Value::Null)) => String::new(),
            (None, Amount::Malformed(other)) => other.to_string(),
            (None, Amount::Number(value)) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserializes_from_service_payload() {
        let json = r#"{
            "user": "alice",
            "description": "Savings",
            "balance": 120.5,
            "currency": "EUR",
            "transactions": [
                {"date": "2024-01-05", "object": "Rent", "description": "Rent payment", "amount": -500},
                {"date": "2024-01-06", "object": "Salary", "amount": 2000.25}
            ]
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.user, "alice");
        assert_eq!(account.formatted_balance(), "120.50");
        assert_eq!(account.transactions.len(), 2);
        assert_eq!(account.transactions[0].amount.value(), Some(-500.0));
        assert_eq!(account.transactions[1].description, None);
    }

    #[test]
    fn test_account_without_transactions_gets_empty_history() {
        let account: Account =
            serde_json::from_str(r#"{"user": "bob", "balance": 0, "currency": "USD"}"#).unwrap();
        assert!(account.transactions.is_empty());
        assert_eq!(account.description, "");
    }

    #[test]
    fn test_account_rejects_non_list_transactions() {
        let result = serde_json::from_str::<Account>(
            r#"{"user": "bob", "balance": 0, "transactions": "nope"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_amount_survives_deserialization() {
        let transaction: Transaction =
            serde_json::from_str(r#"{"date": "2024-02-01", "object": "Gift", "amount": "lots"}"#).unwrap();
        assert_eq!(transaction.amount, Amount::Malformed(Value::String("lots".to_string())));
        assert_eq!(transaction.amount.value(), None);
        assert_eq!(transaction.amount.display(), "lots");

        let missing: Transaction = serde_json::from_str(r#"{"object": "Gift"}"#).unwrap();
        assert_eq!(missing.amount, Amount::default());
        assert_eq!(missing.amount.display(), "");
    }

    #[test]
    fn test_numeric_string_amount_is_usable() {
        let amount = Amount::Malformed(Value::String(" 12.5 ".to_string()));
        assert_eq!(amount.value(), Some(12.5));
        assert_eq!(amount.display(), "12.50");
    }

    #[test]
    fn test_amount_display_uses_two_decimals() {
        assert_eq!(Amount::from(40.0).display(), "40.00");
        assert_eq!(Amount::from(-3.456).display(), "-3.46");
    }
}
