//! Model provider errors.

/// Anthropic-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnthropicErrorKind {
    /// Transport-level failure before a response was received
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Anthropic API returned a non-success status
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

    /// The model returned no usable completion text
    #[display("Empty completion from model")]
    EmptyCompletion,

    /// Builder error when constructing requests
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ModelsErrorKind {
    /// Anthropic-specific error
    #[display("Anthropic: {}", _0)]
    Anthropic(AnthropicErrorKind),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
