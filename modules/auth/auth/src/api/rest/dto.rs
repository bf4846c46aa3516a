use std::fmt;

use auth_sdk::Principal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginReq {
    pub login: String,
    pub secret: String,
}

impl fmt::Debug for LoginReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginReq")
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RegisterReq {
    pub login: String,
    pub secret: String,
    /// Defaults to `ROLE_USER` when omitted.
    #[serde(default)]
    pub role: Option<String>,
}

impl fmt::Debug for RegisterReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterReq")
            .field("login", &self.login)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Public shape of a principal. The secret hash never leaves the module.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrincipalDto {
    pub id: String,
    pub login: String,
    pub role: String,
}

impl From<Principal> for PrincipalDto {
    fn from(p: Principal) -> Self {
        Self {
            id: p.id,
            login: p.login,
            role: p.role,
        }
    }
}
