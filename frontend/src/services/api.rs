use async_trait::async_trait;
use bank_shared::service::{self, decode_reply};
use bank_shared::{Account, AccountService, ApiError, ClientConfig, NewAccount, NewTransaction, ServiceReply, Transaction};
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// API client for the account service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn read<T: DeserializeOwned>(response: Response, lenient_status: bool) -> Result<ServiceReply<T>, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
        decode_reply(status, &body, lenient_status)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<ServiceReply<T>, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.config.endpoint(path))
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response, false).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[async_trait(?Send)]
impl AccountService for ApiClient {
    async fn create_account(&self, account: &NewAccount) -> Result<ServiceReply<Account>, ApiError> {
        self.post(&service::accounts_path(), account).await
    }

    async fn get_account(&self, user: &str) -> Result<ServiceReply<Account>, ApiError> {
        let response = Request::get(&self.config.endpoint(&service::account_path(user)))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response, true).await
    }

    async fn create_transaction(
        &self,
        user: &str,
        transaction: &NewTransaction,
    ) -> Result<ServiceReply<Transaction>, ApiError> {
        self.post(&service::transactions_path(user), transaction).await
    }
}
