use secrecy::SecretString;
use serde::Deserialize;

/// Auth module configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    pub token: TokenConfig,

    /// Role stored when registration omits one.
    pub default_role: String,

    pub min_login_len: usize,
    pub max_login_len: usize,
    pub min_secret_len: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: TokenConfig::default(),
            default_role: auth_sdk::DEFAULT_ROLE.to_owned(),
            min_login_len: 1,
            max_login_len: 50,
            min_secret_len: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    /// Base64-encoded HMAC key. Must decode to at least 32 bytes.
    pub secret: SecretString,

    /// Token lifetime in humantime syntax, e.g. `"1h"` or `"15m"`.
    #[serde(default = "default_ttl")]
    pub ttl: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: SecretString::from(String::new()),
            ttl: default_ttl(),
        }
    }
}

fn default_ttl() -> String {
    "1h".to_owned()
}
