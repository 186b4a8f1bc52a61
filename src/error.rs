//! Error handling for template management
//!
//! Two error kinds, each carrying a stable code and an optional cause:
//! client errors (caller supplied bad input) and server errors (the catalog
//! itself is broken or unavailable). The code strings are part of the public
//! template-management contract and are never renumbered.

use std::error::Error as StdError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TemplateMgtError>;

/// Boxed underlying cause carried by a [`TemplateMgtError`]
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Stable error codes and their messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorMessage {
    /// `ERROR_CODE_INVALID_ARGUMENTS_FOR_LIMIT_OFFSET`
    InvalidArgumentsForLimitOffset,
    InvalidTemplateId,
    TemplateIdMissing,
    CatalogNotInitialized,
    CatalogAlreadyInstalled,
}

impl ErrorMessage {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgumentsForLimitOffset => "TM_00013",
            Self::InvalidTemplateId => "TM_00014",
            Self::TemplateIdMissing => "TM_00015",
            Self::CatalogNotInitialized => "TM_00016",
            Self::CatalogAlreadyInstalled => "TM_00017",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidArgumentsForLimitOffset => "Limit or offset values cannot be negative",
            Self::InvalidTemplateId => "Template identifier is not a valid integer",
            Self::TemplateIdMissing => "Template has no identifier",
            Self::CatalogNotInitialized => "File based template catalog is not initialized",
            Self::CatalogAlreadyInstalled => "File based template catalog is already initialized",
        }
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

#[derive(Debug, Error)]
pub enum TemplateMgtError {
    #[error("client error {error}")]
    Client {
        error: ErrorMessage,
        #[source]
        cause: Option<Cause>,
    },

    #[error("server error {error}")]
    Server {
        error: ErrorMessage,
        #[source]
        cause: Option<Cause>,
    },
}

impl TemplateMgtError {
    pub fn client(error: ErrorMessage, cause: Option<Cause>) -> Self {
        Self::Client { error, cause }
    }

    pub fn server(error: ErrorMessage, cause: Option<Cause>) -> Self {
        Self::Server { error, cause }
    }

    pub fn error_message(&self) -> ErrorMessage {
        match self {
            Self::Client { error, .. } | Self::Server { error, .. } => *error,
        }
    }

    pub fn code(&self) -> &'static str {
        self.error_message().code()
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Client { .. })
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::Client { .. } => 400,
            Self::Server { .. } => 500,
        }
    }
}
