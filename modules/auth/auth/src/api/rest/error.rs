use bustation_http::Problem;
use http::StatusCode;

use crate::domain::error::DomainError;

/// Map domain errors to RFC 9457 problems.
///
/// Unknown logins and wrong secrets produce byte-identical responses.
pub fn domain_error_to_problem(err: DomainError) -> Problem {
    match err {
        DomainError::UnknownPrincipal | DomainError::BadCredentials => Problem::new(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Invalid credentials",
        ),

        DomainError::DuplicateLogin { login } => Problem::new(
            StatusCode::CONFLICT,
            "Conflict",
            format!("Login '{login}' already exists"),
        ),

        DomainError::Validation { field, message } => Problem::new(
            StatusCode::BAD_REQUEST,
            "Validation Failed",
            format!("{field}: {message}"),
        )
        .with_violation(field, message),

        DomainError::Store { message } | DomainError::Internal { message } => {
            tracing::error!(error = %message, "auth request failed");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An internal error occurred",
            )
        }
    }
}

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_failures_are_indistinguishable() {
        let unknown = domain_error_to_problem(DomainError::UnknownPrincipal);
        let bad = domain_error_to_problem(DomainError::BadCredentials);
        assert_eq!(unknown, bad);
        assert_eq!(unknown.status, 401);
    }

    #[test]
    fn duplicate_login_names_the_login() {
        let p = domain_error_to_problem(DomainError::DuplicateLogin {
            login: "u2".to_owned(),
        });
        assert_eq!(p.status, 409);
        assert!(p.detail.contains("u2"));
    }

    #[test]
    fn internal_details_are_hidden() {
        let p = domain_error_to_problem(DomainError::Store {
            message: "shard 3 poisoned".to_owned(),
        });
        assert_eq!(p.status, 500);
        assert!(!p.detail.contains("shard"));
    }
}
