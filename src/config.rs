use crate::error::{Make2OasError, Result};
use reqwest::Url;

/// Host fragments accepted for Make instances
const ALLOWED_DOMAINS: [&str; 2] = ["make.com", "make.celonis.com"];

/// Raw connection parameters as entered by the user
#[derive(Debug, Clone, Default)]
pub struct ConnectionInput {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub team_id: Option<String>,
    pub organization_id: Option<String>,
    /// Skip the Make domain check (local mocks, gateways)
    pub allow_any_host: bool,
}

impl ConnectionInput {
    /// Fill unset values from `MAKE_BASE_URL`, `MAKE_API_KEY`, `MAKE_TEAM_ID`
    /// and `MAKE_ORGANIZATION_ID`
    pub fn with_env_fallback(mut self) -> Self {
        fn env(name: &str) -> Option<String> {
            std::env::var(name).ok().filter(|v| !v.trim().is_empty())
        }

        self.base_url = self.base_url.or_else(|| env("MAKE_BASE_URL"));
        self.api_key = self.api_key.or_else(|| env("MAKE_API_KEY"));
        self.team_id = self.team_id.or_else(|| env("MAKE_TEAM_ID"));
        self.organization_id = self
            .organization_id
            .or_else(|| env("MAKE_ORGANIZATION_ID"));
        self
    }
}

/// Validated connection to a Make instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// `scheme://host[:port]` of the Make instance
    pub origin: String,
    pub api_key: String,
    pub team_id: Option<String>,
    pub organization_id: Option<String>,
}

impl ConnectionConfig {
    /// Validate user input before any network call is made
    pub fn from_input(input: ConnectionInput) -> Result<Self> {
        let base_url = non_empty(input.base_url).ok_or_else(|| {
            Make2OasError::InvalidConnectionInput("Please enter a valid Dashboard URL".to_string())
        })?;
        let api_key = non_empty(input.api_key).ok_or_else(|| {
            Make2OasError::InvalidConnectionInput("Please enter your API key".to_string())
        })?;

        let origin = parse_origin(&base_url, input.allow_any_host)?;

        Ok(Self {
            origin,
            api_key,
            team_id: non_empty(input.team_id),
            organization_id: non_empty(input.organization_id),
        })
    }

    /// Root of the Make REST API, e.g. `https://eu1.make.com/api/v2`
    pub fn api_root(&self) -> String {
        format!("{}/api/v2", self.origin)
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        format!("Token {}", self.api_key)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalize a dashboard URL to its origin, prepending `https://` when no
/// scheme is given
pub fn parse_origin(base_url: &str, allow_any_host: bool) -> Result<String> {
    let formatted = if base_url.starts_with("http") {
        base_url.to_string()
    } else {
        format!("https://{}", base_url)
    };

    let url = Url::parse(&formatted).map_err(|_| {
        Make2OasError::InvalidConnectionInput(format!(
            "Please enter a valid URL (e.g., https://eu1.make.com), got '{}'",
            base_url
        ))
    })?;

    let host = url.host_str().ok_or_else(|| {
        Make2OasError::InvalidConnectionInput(format!("URL '{}' has no host", base_url))
    })?;

    if !allow_any_host && !ALLOWED_DOMAINS.iter().any(|domain| host.contains(domain)) {
        return Err(Make2OasError::InvalidConnectionInput(
            "URL must be from make.com or make.celonis.com domains".to_string(),
        ));
    }

    Ok(url.origin().ascii_serialization())
}

/// Paging parameters for scenario listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub page_size: usize,
    /// Upper bound on full pages before giving up with `FetchExhausted`
    pub max_pages: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_pages: 1000,
        }
    }
}
