//! Contract with the remote account service.
//!
//! The service answers with JSON. A body carrying an `error` field is a
//! domain-level refusal the user should see ("user already exists",
//! "account not found"); everything else that goes wrong on the way is an
//! [`ApiError`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::forms::{NewAccount, NewTransaction};
use crate::{Account, Transaction};

/// Successful exchange with the service
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceReply<T> {
    Ok(T),
    /// The service refused the request and said why
    Rejected(String),
}

/// Transport-level failure
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error. Status: {0}")]
    Status(u16),
    #[error("response is not valid JSON: {0}")]
    Decode(String),
    #[error("unexpected response shape: {0}")]
    Schema(String),
}

#[async_trait(?Send)]
pub trait AccountService {
    /// `POST /api/accounts`
    async fn create_account(&self, account: &NewAccount) -> Result<ServiceReply<Account>, ApiError>;

    /// `GET /api/accounts/{user}`
    async fn get_account(&self, user: &str) -> Result<ServiceReply<Account>, ApiError>;

    /// `POST /api/accounts/{user}/transactions`
    async fn create_transaction(
        &self,
        user: &str,
        transaction: &NewTransaction,
    ) -> Result<ServiceReply<Transaction>, ApiError>;
}

pub fn accounts_path() -> String {
    "/api/accounts".to_string()
}

pub fn account_path(user: &str) -> String {
    format!("/api/accounts/{}", urlencoding::encode(user))
}

pub fn transactions_path(user: &str) -> String {
    format!("{}/transactions", account_path(user))
}

/// Refusal message carried by a response body, if any
pub fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// Turn a raw response into a reply.
///
/// With `lenient_status`, a non-2xx response that still carries an `error`
/// body is treated as a refusal (account lookups answer "not found" that
/// way); otherwise any non-2xx status is an [`ApiError::Status`].
pub fn decode_reply<T: DeserializeOwned>(
    status: u16,
    body: &str,
    lenient_status: bool,
) -> Result<ServiceReply<T>, ApiError> {
    let ok = (200..300).contains(&status);
    if !ok && !lenient_status {
        return Err(ApiError::Status(status));
    }

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !ok => return Err(ApiError::Status(status)),
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    if let Some(message) = error_message(&value) {
        return Ok(ServiceReply::Rejected(message));
    }
    if !ok {
        return Err(ApiError::Status(status));
    }

    serde_json::from_value(value)
        .map(ServiceReply::Ok)
        .map_err(|e| ApiError::Schema(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_encode_user() {
        assert_eq!(accounts_path(), "/api/accounts");
        assert_eq!(account_path("alice"), "/api/accounts/alice");
        assert_eq!(account_path("jean luc/x"), "/api/accounts/jean%20luc%2Fx");
        assert_eq!(transactions_path("a b"), "/api/accounts/a%20b/transactions");
    }

    #[test]
    fn test_decode_account() {
        let reply: ServiceReply<Account> =
            decode_reply(200, r#"{"user":"alice","balance":3,"currency":"EUR"}"#, false).unwrap();
        match reply {
            ServiceReply::Ok(account) => assert_eq!(account.user, "alice"),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_error_body_is_a_refusal() {
        let reply: ServiceReply<Account> = decode_reply(200, r#"{"error":"User already exists"}"#, false).unwrap();
        assert_eq!(reply, ServiceReply::Rejected("User already exists".to_string()));
    }

    #[test]
    fn test_strict_status() {
        let result = decode_reply::<Account>(409, r#"{"error":"User already exists"}"#, false);
        assert_eq!(result, Err(ApiError::Status(409)));
    }

    #[test]
    fn test_lenient_status_keeps_refusal() {
        let reply = decode_reply::<Account>(404, r#"{"error":"User does not exist"}"#, true).unwrap();
        assert_eq!(reply, ServiceReply::Rejected("User does not exist".to_string()));

        let result = decode_reply::<Account>(500, "<html>oops</html>", true);
        assert_eq!(result, Err(ApiError::Status(500)));

        let result = decode_reply::<Account>(502, "{}", true);
        assert_eq!(result, Err(ApiError::Status(502)));
    }

    #[test]
    fn test_bad_bodies_are_hard_failures() {
        assert!(matches!(decode_reply::<Account>(200, "not json", false), Err(ApiError::Decode(_))));
        assert!(matches!(
            decode_reply::<Account>(200, r#"{"user":"x","balance":"lots"}"#, false),
            Err(ApiError::Schema(_))
        ));
    }

    #[test]
    fn test_decode_created_transaction() {
        let reply: ServiceReply<Transaction> =
            decode_reply(201, r#"{"id":"1","date":"2024-01-01","object":"Rent","amount":-500}"#, false).unwrap();
        match reply {
            ServiceReply::Ok(transaction) => assert_eq!(transaction.object, "Rent"),
            other => panic!("unexpected reply: {:?}", other),
        }
    }
}
