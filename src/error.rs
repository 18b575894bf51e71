use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Upstream failure taxonomy handled at the pipeline boundary
    #[error("Upstream unavailable: {source_name} - {message}")]
    UpstreamUnavailable {
        source_name: String,
        message: String,
    },

    #[error("Upstream rate limit exceeded (429): {source_name}")]
    UpstreamRateLimited {
        source_name: String,
        retry_after: Option<u64>,
    },

    #[error("Upstream returned malformed data: {message} ({source_name})")]
    UpstreamMalformed {
        message: String,
        source_name: String,
    },

    #[error("Upstream HTTP error ({status}): {message} ({source_name})")]
    UpstreamHttp {
        status: u16,
        message: String,
        source_name: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a render error with context
    pub fn render_error(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Create an upstream unavailable error (network, DNS, connect, unreadable file)
    pub fn upstream_unavailable(
        source_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::UpstreamUnavailable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create an upstream rate limit error, keeping the Retry-After hint if any
    pub fn upstream_rate_limited(source_name: impl Into<String>, retry_after: Option<u64>) -> Self {
        Self::UpstreamRateLimited {
            source_name: source_name.into(),
            retry_after,
        }
    }

    /// Create a malformed payload error (not JSON, or JSON of an unknown shape)
    pub fn upstream_malformed(message: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self::UpstreamMalformed {
            message: message.into(),
            source_name: source_name.into(),
        }
    }

    /// Create an upstream HTTP error for non-2xx statuses other than 429
    pub fn upstream_http(
        status: u16,
        message: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        Self::UpstreamHttp {
            status,
            message: message.into(),
            source_name: source_name.into(),
        }
    }

    /// Check if the listing should fall back to the built-in sample set.
    /// Every failure does, except a rate limit.
    pub fn falls_back_to_sample(&self) -> bool {
        !matches!(self, AppError::UpstreamRateLimited { .. })
    }

    /// Retry-After hint carried by a rate limit error
    pub fn retry_after_seconds(&self) -> Option<u64> {
        match self {
            AppError::UpstreamRateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Short user-facing description of the failure kind
    pub fn short_reason(&self) -> &'static str {
        match self {
            AppError::UpstreamUnavailable { .. } | AppError::ApiFetch(_) | AppError::Io(_) => {
                "source unreachable"
            }
            AppError::UpstreamRateLimited { .. } => "rate limited",
            AppError::UpstreamMalformed { .. } | AppError::ApiParse(_) => "unexpected data",
            AppError::UpstreamHttp { .. } => "server error",
            _ => "unexpected error",
        }
    }
}
