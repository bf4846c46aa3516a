use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_owned()
}

fn default_require_auth_by_default() -> bool {
    true
}

fn default_public_prefixes() -> Vec<String> {
    ["/auth", "/openapi.json", "/health", "/healthz"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn default_request_timeout() -> String {
    "30s".to_owned()
}

fn default_body_limit_bytes() -> usize {
    16 * 1024 * 1024
}

/// API gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiGatewayConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path prefixes served without authentication. Matching is segment-aware:
    /// `/auth` covers `/auth` and `/auth/login` but not `/authors`.
    #[serde(default = "default_public_prefixes")]
    pub public_prefixes: Vec<String>,

    /// When false, protected paths accept anonymous callers too. The
    /// authenticator still resolves tokens that are presented.
    #[serde(default = "default_require_auth_by_default")]
    pub require_auth_by_default: bool,

    /// Per-request timeout in humantime syntax.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: String,

    /// Request body size limit in bytes
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,

    /// `OpenAPI` document metadata
    #[serde(default)]
    pub openapi: OpenApiConfig,
}

impl Default for ApiGatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            public_prefixes: default_public_prefixes(),
            require_auth_by_default: default_require_auth_by_default(),
            request_timeout: default_request_timeout(),
            body_limit_bytes: default_body_limit_bytes(),
            openapi: OpenApiConfig::default(),
        }
    }
}

/// `OpenAPI` document metadata configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct OpenApiConfig {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            title: "Bus Station API".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            description: Some("Drivers, buses, passengers, trips and bookings".to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_uses_defaults() {
        let cfg: ApiGatewayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
        assert!(cfg.require_auth_by_default);
        assert_eq!(cfg.public_prefixes, ["/auth", "/openapi.json", "/health", "/healthz"]);
        assert_eq!(cfg.request_timeout, "30s");
        assert_eq!(cfg.body_limit_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn rejects_unknown_fields() {
        let res: Result<ApiGatewayConfig, _> =
            serde_json::from_str(r#"{"bind_addr": "0.0.0.0:80", "cors_enabled": true}"#);
        assert!(res.is_err());
    }
}
