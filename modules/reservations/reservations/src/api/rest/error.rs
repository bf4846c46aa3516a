use bustation_http::Problem;
use http::StatusCode;

use crate::domain::error::DomainError;

/// Map domain errors to RFC 9457 problems.
pub fn domain_error_to_problem(err: DomainError) -> Problem {
    match err {
        DomainError::NotFound { kind, id } => Problem::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            format!("{kind} not found with id: {id}"),
        ),

        DomainError::Validation { kind, violations } => {
            let mut problem = Problem::new(
                StatusCode::BAD_REQUEST,
                "Validation Failed",
                format!("Invalid {kind}"),
            );
            for v in violations {
                problem = problem.with_violation(v.field, v.message);
            }
            problem
        }

        DomainError::Storage { message } => {
            tracing::error!(error = %message, "reservations storage failure");
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
    use crate::domain::error::Violation;

    #[test]
    fn validation_lists_every_field() {
        let p = domain_error_to_problem(DomainError::Validation {
            kind: "Bus",
            violations: vec![
                Violation {
                    field: "plate",
                    message: "must match ABC-1234".to_owned(),
                },
                Violation {
                    field: "capacity",
                    message: "must be between 10 and 100".to_owned(),
                },
            ],
        });

        assert_eq!(p.status, 400);
        assert_eq!(p.errors.len(), 2);
        assert_eq!(p.errors[1].field, "capacity");
    }

    #[test]
    fn not_found_names_kind_and_id() {
        let p = domain_error_to_problem(DomainError::not_found("Trip", "t-9"));
        assert_eq!(p.status, 404);
        assert_eq!(p.detail, "Trip not found with id: t-9");
    }
}
