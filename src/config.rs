/// Backend origin used when `API_BASE_URL` is not set at build time.
const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Startup configuration for the HTTP layer. The base URL is resolved once
/// here and injected into `ApiClient`; fetch call sites never read the
/// environment themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("API_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
        }
    }
}
