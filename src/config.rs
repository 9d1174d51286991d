/// Default Commons API endpoint
pub const COMMONS_DEFAULT_BASE: &str = "https://commons.wikimedia.org/w/api.php";

/// Configuration for the Commons client
#[derive(Clone, Debug)]
pub struct CommonsConfig {
    api_base: String,
}

impl Default for CommonsConfig {
    fn default() -> Self {
        let api_base = std::env::var("COMMONS_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| COMMONS_DEFAULT_BASE.into());

        Self { api_base }
    }
}

impl CommonsConfig {
    /// Creates a new configuration with default settings
    ///
    /// Reads `COMMONS_BASE_URL` from the environment for a custom API
    /// endpoint (defaults to `https://commons.wikimedia.org/w/api.php`).
    /// The API is queried anonymously; no credentials are needed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API endpoint URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Returns the configured API endpoint URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Configuration trait for the Commons client
///
/// Implement this trait to point the client at a different MediaWiki
/// installation or to adjust the protocol-level query parameters.
pub trait Config: Send + Sync {
    /// Returns the full URL of the MediaWiki API endpoint
    fn endpoint(&self) -> String;

    /// Returns protocol-level query parameters included in every request
    fn query(&self) -> Vec<(&'static str, &'static str)>;
}

impl Config for CommonsConfig {
    fn endpoint(&self) -> String {
        self.api_base.trim_end_matches('/').to_string()
    }

    fn query(&self) -> Vec<(&'static str, &'static str)> {
        vec![("format", "json"), ("origin", "*")]
    }
}
