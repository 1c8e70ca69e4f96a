/// Default location of the account service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Local storage key holding the saved account
pub const DEFAULT_STORAGE_KEY: &str = "savedAccount";

/// Client settings shared by the service client and the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub storage_key: String,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Override the service location. A trailing slash is dropped so paths
    /// can be appended directly; a blank value keeps the current one.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base_url = base_url.trim().trim_end_matches('/');
        if !base_url.is_empty() {
            self.api_base_url = base_url.to_string();
        }
        self
    }

    /// Absolute URL for a service path such as `/api/accounts`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
