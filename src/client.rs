use serde::de::DeserializeOwned;

use crate::{config::Config, error::CommonsError};

/// Commons API client
///
/// The client is generic over a [`Config`] implementation that provides the
/// API endpoint and protocol-level query parameters.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::CommonsConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses the `COMMONS_BASE_URL` environment variable for a custom API
    /// endpoint, falling back to the Wikimedia Commons production API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::CommonsConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Issues one parameterized GET request and deserializes the JSON body.
    ///
    /// Timeout expiry and transport failures surface as
    /// [`CommonsError::Http`]; a non-2xx status as [`CommonsError::Api`].
    /// There is no retry: a single failure is terminal for the request.
    pub(crate) async fn get<O>(&self, params: &[(&str, &str)]) -> Result<O, CommonsError>
    where
        O: DeserializeOwned,
    {
        let bytes = self.get_raw(params).await?;
        let resp: O =
            serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))?;
        Ok(resp)
    }

    async fn get_raw(&self, params: &[(&str, &str)]) -> Result<bytes::Bytes, CommonsError> {
        let response = self
            .http
            .get(self.config.endpoint())
            .query(&self.config.query())
            .query(params)
            .send()
            .await
            .map_err(CommonsError::Http)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(CommonsError::Http)?;

        if status.is_success() {
            return Ok(bytes);
        }

        Err(crate::error::deserialize_api_error(status, &bytes))
    }
}
