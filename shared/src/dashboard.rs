use log::warn;

use crate::filter::{FilterCriteria, FilterForm};
use crate::{Account, Transaction};

/// One row of the history table
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub date: String,
    pub object: String,
    pub amount: String,
    /// Sign of the amount, for styling. `None` when it is not a number.
    pub positive: Option<bool>,
}

impl From<&Transaction> for TransactionRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            date: transaction.date.clone(),
            object: transaction.object.clone(),
            amount: transaction.amount.display(),
            positive: transaction.amount.value().map(|value| value >= 0.0),
        }
    }
}

/// Everything the dashboard view renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub user: String,
    pub description: String,
    pub balance: String,
    pub currency: String,
    pub rows: Vec<TransactionRow>,
    /// Records left out because they could not be compared
    pub skipped: usize,
}

impl DashboardModel {
    /// Apply the search form to the account's history
    pub fn build(account: &Account, filters: &FilterForm) -> Self {
        let outcome = FilterCriteria::from_form(filters).apply(&account.transactions);
        for rejected in &outcome.rejected {
            warn!("Skipping transaction #{}: {}", rejected.index, rejected.issue);
        }

        Self {
            user: account.user.clone(),
            description: account.description.clone(),
            balance: account.formatted_balance(),
            currency: account.currency.clone(),
            rows: outcome.matches.iter().map(TransactionRow::from).collect(),
            skipped: outcome.rejected.len(),
        }
    }
}
