/// Errors that can occur while finalizing a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No host was set, or it was set to an empty string
    MissingHost,
    /// Host carries a `/` or a single `:` (smuggled scheme, path or port)
    ForbiddenHostSymbols,
    /// Port is above 65535
    InvalidPort(u32),
    /// The assembled `scheme://host[:port]` base was rejected.
    /// `None` means it parsed, but into more than a scheme, host and port.
    MalformedUrl(Option<url::ParseError>),
    /// Credentials were set with an empty user
    MissingUser,
    /// Credentials were set with an empty password
    MissingPassword,
    /// Empty query key under [`QueryPolicy::Strict`](crate::QueryPolicy::Strict)
    EmptyQueryKey,
    /// Empty query value under [`QueryPolicy::Strict`](crate::QueryPolicy::Strict)
    EmptyQueryValue {
        /// Key the empty value was added under
        key: String,
    },
}

impl core::fmt::Display for BuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingHost => f.write_str("Host is required"),
            Self::ForbiddenHostSymbols => f.write_str("Host contains forbidden symbols"),
            Self::InvalidPort(port) => {
                write!(f, "Port must be in range [1, 65535], got {port}")
            }
            Self::MalformedUrl(Some(err)) => write!(f, "Malformed URL: {err}"),
            Self::MalformedUrl(None) => {
                f.write_str("Malformed URL: host carries extra URL components")
            }
            Self::MissingUser => f.write_str("User not set"),
            Self::MissingPassword => f.write_str("Password not set"),
            Self::EmptyQueryKey => f.write_str("Query key is empty"),
            Self::EmptyQueryValue { key } => write!(f, "Empty query value for key {key}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedUrl(Some(err)) => Some(err),
            _ => None,
        }
    }
}

impl From<url::ParseError> for BuildError {
    fn from(err: url::ParseError) -> Self {
        Self::MalformedUrl(Some(err))
    }
}

/// Result type for URL building operations
pub type Result<T> = core::result::Result<T, BuildError>;
