use std::fmt;

/// Role assigned when registration does not name one.
pub const DEFAULT_ROLE: &str = "ROLE_USER";

/// A registered identity.
///
/// `secret_hash` is a salted one-way hash in PHC string format and is left out
/// of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub login: String,
    pub secret_hash: String,
    pub role: String,
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("login", &self.login)
            .field("secret_hash", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// A principal that has not been stored yet. The store assigns the id.
#[derive(Clone)]
pub struct NewPrincipal {
    pub login: String,
    pub secret_hash: String,
    pub role: String,
}

impl fmt::Debug for NewPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewPrincipal")
            .field("login", &self.login)
            .field("secret_hash", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}
