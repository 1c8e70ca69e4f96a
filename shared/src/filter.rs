//! Client-side search over an account's transaction history.
//!
//! The dashboard search form is turned into a [`FilterCriteria`] on every
//! input event, then applied to the account's transactions. Bad form input
//! never fails: a field that does not parse simply stops constraining the
//! result.

use chrono::{DateTime, NaiveDate};
use std::fmt;

use crate::Transaction;

/// Raw values of the dashboard search form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub date_from: String,
    pub date_to: String,
    pub amount_min: String,
    pub amount_max: String,
    pub description: String,
}

/// Normalized search constraints.
///
/// When both bounds of a range are set, the lower one is never greater
/// than the upper one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    /// Lowercased, non-empty, in the order they were typed
    pub keywords: Vec<String>,
}

/// Why a record was excluded without being compared
#[derive(Debug, Clone, PartialEq)]
pub enum RecordIssue {
    MissingDate,
    MalformedDate(String),
    MalformedAmount(String),
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIssue::MissingDate => write!(f, "transaction has no date"),
            RecordIssue::MalformedDate(raw) => write!(f, "unparsable transaction date '{}'", raw),
            RecordIssue::MalformedAmount(raw) => write!(f, "non-numeric transaction amount '{}'", raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Position in the input list
    pub index: usize,
    pub issue: RecordIssue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    pub matches: Vec<Transaction>,
    pub rejected: Vec<RejectedRecord>,
}

/// Parse a date bound. Accepts `YYYY-MM-DD` and full RFC 3339 timestamps
/// (reduced to their calendar date).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Parse an amount bound. Empty, non-numeric and non-finite input all
/// yield `None`.
pub fn parse_amount(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

fn ordered<T: PartialOrd>(low: Option<T>, high: Option<T>) -> (Option<T>, Option<T>) {
    match (low, high) {
        (Some(low), Some(high)) if low > high => (Some(high), Some(low)),
        other => other,
    }
}

impl FilterCriteria {
    /// Derive criteria from the raw search form. Never fails.
    pub fn from_form(form: &FilterForm) -> Self {
        let (from_date, to_date) = ordered(parse_date(&form.date_from), parse_date(&form.date_to));
        let (min_amount, max_amount) =
            ordered(parse_amount(&form.amount_min), parse_amount(&form.amount_max));

        let keywords = form
            .description
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        Self {
            from_date,
            to_date,
            min_amount,
            max_amount,
            keywords,
        }
    }

    pub fn has_date_range(&self) -> bool {
        self.from_date.is_some() || self.to_date.is_some()
    }

    pub fn has_amount_range(&self) -> bool {
        self.min_amount.is_some() || self.max_amount.is_some()
    }

    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        !self.has_date_range() && !self.has_amount_range() && !self.has_keywords()
    }

    /// Select the transactions passing every active constraint, keeping
    /// input order. Records that cannot be compared against an active
    /// constraint are excluded and reported in `rejected`.
    pub fn apply(&self, transactions: &[Transaction]) -> FilterOutcome {
        if self.is_empty() {
            return FilterOutcome {
                matches: transactions.to_vec(),
                rejected: Vec::new(),
            };
        }

        let mut outcome = FilterOutcome::default();
        for (index, transaction) in transactions.iter().enumerate() {
            match self.check(transaction) {
                Ok(true) => outcome.matches.push(transaction.clone()),
                Ok(false) => {}
                Err(issue) => outcome.rejected.push(RejectedRecord { index, issue }),
            }
        }
        outcome
    }

    fn check(&self, transaction: &Transaction) -> Result<bool, RecordIssue> {
        if self.has_date_range() {
            let date = match parse_date(&transaction.date) {
                Some(date) => date,
                None if transaction.date.trim().is_empty() => return Err(RecordIssue::MissingDate),
                None => return Err(RecordIssue::MalformedDate(transaction.date.clone())),
            };
            if self.from_date.is_some_and(|from| date < from) || self.to_date.is_some_and(|to| date > to) {
                return Ok(false);
            }
        }

        if self.has_amount_range() {
            let amount = transaction
                .amount
                .value()
                .ok_or_else(|| RecordIssue::MalformedAmount(transaction.amount.display()))?;
            if self.min_amount.is_some_and(|min| amount < min) || self.max_amount.is_some_and(|max| amount > max) {
                return Ok(false);
            }
        }

        if self.has_keywords() {
            let description = transaction
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            if description.is_empty() {
                return Ok(false);
            }
            if !self.keywords.iter().all(|keyword| description.contains(keyword.as_str())) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// Transactions passing every active constraint of `criteria`, in input
/// order. The input is left untouched.
pub fn filter_transactions(criteria: &FilterCriteria, transactions: &[Transaction]) -> Vec<Transaction> {
    criteria.apply(transactions).matches
}
