//! Social platform errors.

/// X API-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum XErrorKind {
    /// Transport-level failure before a response was received
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// X API returned a non-success status
    #[display("API error: status {} - {}", status, message)]
    ApiError {
        /// HTTP status code from the API
        status: u16,
        /// Response body returned with the error
        message: String,
    },

    /// Response body could not be decoded
    #[display("Parse error: {}", _0)]
    Parse(String),
}

/// Social platform error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum SocialErrorKind {
    /// X-specific error
    #[display("X: {}", _0)]
    X(XErrorKind),

    /// Content validation failed before any network call
    #[display("Content validation failed: {}", _0)]
    #[from(ignore)]
    ValidationFailed(String),

    /// Platform credentials rejected or malformed
    #[display("Authentication failed: {}", _0)]
    #[from(ignore)]
    AuthenticationFailed(String),
}

/// Social platform error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Social Error: {} at {}:{}", kind, file, line)]
pub struct SocialError {
    /// The specific error kind
    pub kind: SocialErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl SocialError {
    /// Create a new social error.
    #[track_caller]
    pub fn new(kind: SocialErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for social platform operations.
pub type SocialResult<T> = Result<T, SocialError>;
