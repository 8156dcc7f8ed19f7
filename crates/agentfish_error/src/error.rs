//! Top-level error wrapper types.

use crate::{ConfigError, ModelsError, SocialError};

/// This is the foundation error enum covering every failure domain in the
/// AgentFish workspace.
///
/// # Examples
///
/// ```
/// use agentfish_error::{AgentfishError, ConfigError};
///
/// let cfg_err = ConfigError::new("POST_INTERVAL is not a number");
/// let err: AgentfishError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AgentfishErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Social platform error
    #[from(SocialError)]
    Social(SocialError),
}

/// AgentFish error with kind discrimination.
///
/// # Examples
///
/// ```
/// use agentfish_error::{AgentfishResult, ConfigError};
///
/// fn might_fail() -> AgentfishResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("AgentFish Error: {}", _0)]
pub struct AgentfishError(Box<AgentfishErrorKind>);

impl AgentfishError {
    /// Create a new error from a kind.
    pub fn new(kind: AgentfishErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AgentfishErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AgentfishErrorKind
impl<T> From<T> for AgentfishError
where
    T: Into<AgentfishErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for AgentFish operations.
pub type AgentfishResult<T> = std::result::Result<T, AgentfishError>;
