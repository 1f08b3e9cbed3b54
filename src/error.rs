use thiserror::Error;

#[derive(Error, Debug)]
pub enum Make2OasError {
    #[error("Invalid connection input: {0}")]
    InvalidConnectionInput(String),

    #[error("Failed to fetch scenarios (status {status}, offset {offset}): {message}")]
    RemoteListingFailed {
        status: u16,
        offset: usize,
        message: String,
    },

    #[error("Failed to fetch interface of scenario {scenario_id} (status {status}): {message}")]
    RemoteInterfaceFailed {
        status: u16,
        scenario_id: i64,
        message: String,
    },

    #[error("Pagination did not terminate after {pages} full pages of {page_size} scenarios")]
    FetchExhausted { pages: usize, page_size: usize },

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(i64),

    #[error("Invalid scenario interface: {0}")]
    InvalidInterface(String),

    #[error("Invalid session transition: {0}")]
    InvalidTransition(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to load OpenAPI file: {0}")]
    OpenApiLoadError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Make2OasError {
    /// Whether the remote rejected the credentials
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::RemoteListingFailed { status, .. }
            | Self::RemoteInterfaceFailed { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Make2OasError>;
