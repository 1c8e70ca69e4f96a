//! Submit flows for the registration, login and new-transaction forms.
//!
//! These functions only talk to the service. Applying the result to the
//! [`Shell`](crate::shell::Shell) happens afterwards, synchronously, so the
//! shell is never borrowed across an `.await`.

use log::{error, info};

use crate::forms::{RegisterForm, TransactionForm};
use crate::service::{AccountService, ApiError, ServiceReply};
use crate::{Account, Transaction};

/// Result of a submit flow
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Done(T),
    /// Shown inline next to the form; the user stays on the view
    Rejected(String),
    /// Shown as a blocking notice
    Failed(ApiError),
}

impl<T> Outcome<T> {
    fn from_reply(reply: Result<ServiceReply<T>, ApiError>, context: &str) -> Self {
        match reply {
            Ok(ServiceReply::Ok(value)) => Outcome::Done(value),
            Ok(ServiceReply::Rejected(message)) => {
                info!("{} rejected: {}", context, message);
                Outcome::Rejected(message)
            }
            Err(e) => {
                error!("{} failed: {}", context, e);
                Outcome::Failed(e)
            }
        }
    }
}

/// A created transaction together with the refreshed account.
///
/// `account` is `None` when the transaction was stored but the account could
/// not be fetched again; the creation itself still succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedTransaction {
    pub transaction: Transaction,
    pub account: Option<Account>,
}

pub const GENERIC_FAILURE: &str = "An unexpected error occurred. Please try again.";

pub const TRANSACTION_FAILURE: &str = "Failed to create new transaction!";

pub const REFRESH_FAILURE: &str = "The transaction was saved but the account could not be reloaded.";

pub fn welcome_message(account: &Account) -> String {
    format!("Welcome, {}. Your account has been created.", account.user)
}

pub fn transaction_created_message(transaction: &Transaction) -> String {
    format!("Successfully created new transaction: {}!", transaction.object)
}

pub async fn register<S: AccountService + ?Sized>(service: &S, form: &RegisterForm) -> Outcome<Account> {
    let new_account = match form.validate() {
        Ok(new_account) => new_account,
        Err(e) => return Outcome::Rejected(e.to_string()),
    };
    let outcome = Outcome::from_reply(service.create_account(&new_account).await, "Account creation");
    if let Outcome::Done(account) = &outcome {
        info!("Account created for '{}'", account.user);
    }
    outcome
}

pub async fn login<S: AccountService + ?Sized>(service: &S, user: &str) -> Outcome<Account> {
    let user = user.trim();
    if user.is_empty() {
        return Outcome::Rejected("User name is required".to_string());
    }
    Outcome::from_reply(service.get_account(user).await, "Login")
}

/// Create a transaction for `user`, then fetch the account again so the
/// new balance and history can replace the stored one. Once the creation
/// succeeds the flow is `Done` whatever the refresh returns.
pub async fn create_transaction<S: AccountService + ?Sized>(
    service: &S,
    user: &str,
    form: &TransactionForm,
) -> Outcome<CreatedTransaction> {
    let new_transaction = match form.validate() {
        Ok(new_transaction) => new_transaction,
        Err(e) => return Outcome::Rejected(e.to_string()),
    };

    let transaction = match Outcome::from_reply(
        service.create_transaction(user, &new_transaction).await,
        "Transaction creation",
    ) {
        Outcome::Done(transaction) => transaction,
        Outcome::Rejected(message) => return Outcome::Rejected(message),
        Outcome::Failed(e) => return Outcome::Failed(e),
    };

    let account = match Outcome::from_reply(service.get_account(user).await, "Account refresh") {
        Outcome::Done(account) => Some(account),
        Outcome::Rejected(_) | Outcome::Failed(_) => None,
    };
    Outcome::Done(CreatedTransaction { transaction, account })
}
