//! Form schemas for the registration and new-transaction forms.
//!
//! Raw form values are validated here before anything is sent to the
//! account service. Validation failures are shown next to the form, the
//! same way service-reported errors are.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::{parse_amount, parse_date};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be a date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { field: &'static str, value: String },
}

/// Raw registration form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub user: String,
    pub currency: String,
    pub description: String,
    pub balance: String,
}

/// Body of `POST /api/accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    pub user: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub balance: f64,
}

/// Raw new-transaction form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub date: String,
    pub object: String,
    pub description: String,
    pub amount: String,
}

/// Body of `POST /api/accounts/{user}/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: String,
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim()).filter(|text| !text.is_empty()).map(str::to_string)
}

fn number(value: &str, field: &'static str) -> Result<f64, FormError> {
    parse_amount(value).ok_or_else(|| FormError::InvalidNumber {
        field,
        value: value.trim().to_string(),
    })
}

impl RegisterForm {
    pub fn validate(&self) -> Result<NewAccount, FormError> {
        let user = required(&self.user, "User name")?;
        let currency = required(&self.currency, "Currency")?;
        let description = optional(&self.description);
        let balance = if self.balance.trim().is_empty() {
            0.0
        } else {
            number(&self.balance, "Balance")?
        };

        Ok(NewAccount {
            user,
            currency,
            description,
            balance,
        })
    }
}

impl TransactionForm {
    pub fn validate(&self) -> Result<NewTransaction, FormError> {
        let raw_date = required(&self.date, "Date")?;
        let date = parse_date(&raw_date).ok_or_else(|| FormError::InvalidDate {
            field: "Date",
            value: raw_date.clone(),
        })?;
        let object = required(&self.object, "Object")?;
        let description = optional(&self.description);
        required(&self.amount, "Amount")?;
        let amount = number(&self.amount, "Amount")?;

        Ok(NewTransaction {
            date: date.format("%Y-%m-%d").to_string(),
            object,
            description,
            amount,
        })
    }
}
