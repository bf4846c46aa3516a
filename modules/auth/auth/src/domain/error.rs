use auth_sdk::IdentityStoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown principal")]
    UnknownPrincipal,

    #[error("Bad credentials")]
    BadCredentials,

    #[error("Login '{login}' already exists")]
    DuplicateLogin { login: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Identity store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for the two failures that must look identical to the caller.
    #[must_use]
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, Self::UnknownPrincipal | Self::BadCredentials)
    }
}

impl From<IdentityStoreError> for DomainError {
    fn from(e: IdentityStoreError) -> Self {
        match e {
            IdentityStoreError::DuplicateLogin { login } => Self::DuplicateLogin { login },
            IdentityStoreError::Unavailable(message) => Self::Store { message },
        }
    }
}
