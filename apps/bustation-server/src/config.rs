use std::path::Path;

use anyhow::Context as _;
use api_gateway::ApiGatewayConfig;
use auth::AuthConfig;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use reservations::ReservationsConfig;
use serde::Deserialize;

/// Environment variables with this prefix override file values;
/// `__` separates nesting levels (`BUSTATION__AUTH__TOKEN__TTL`).
pub const ENV_PREFIX: &str = "BUSTATION__";

/// Whole-process configuration, one section per component.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub api_gateway: ApiGatewayConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub reservations: ReservationsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

fn figment(path: Option<&Path>) -> Figment {
    let mut figment = Figment::new();
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }
    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load configuration from an optional YAML file layered under the environment.
///
/// # Errors
/// Returns an error if the file cannot be read or a value has the wrong shape.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = path {
        anyhow::ensure!(path.is_file(), "config file {} does not exist", path.display());
    }
    figment(path)
        .extract()
        .with_context(|| match path {
            Some(path) => format!("failed to load configuration from {}", path.display()),
            None => "failed to load configuration from environment".to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_yaml(
            r#"
api_gateway:
  bind_addr: "0.0.0.0:9000"
  public_prefixes: ["/auth"]
logging:
  level: debug
auth:
  token:
    secret: "dGhpcy1pcy1hLXRlc3Qtc2VjcmV0LXdpdGgtMzItYnl0ZXMhIQ=="
    ttl: 15m
reservations:
  max_page_size: 50
"#,
        );

        let cfg = load(Some(file.path())).unwrap();

        assert_eq!(cfg.api_gateway.bind_addr, "0.0.0.0:9000");
        assert_eq!(cfg.api_gateway.public_prefixes, ["/auth"]);
        assert!(cfg.api_gateway.require_auth_by_default);
        assert_eq!(cfg.logging.level, "debug");
        assert!(!cfg.logging.json);
        assert_eq!(cfg.auth.token.ttl, "15m");
        assert!(cfg.auth.token.secret.expose_secret().starts_with("dGhp"));
        assert_eq!(cfg.auth.default_role, "ROLE_USER");
        assert_eq!(cfg.reservations.max_page_size, 50);
        assert_eq!(cfg.reservations.default_page_size, 20);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_yaml("logging:\n  colour: true\n");
        assert!(load(Some(file.path())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(&dir.path().join("absent.yaml"))).is_err());
    }

    #[test]
    fn debug_output_redacts_token_secret() {
        let file = write_yaml("auth:\n  token:\n    secret: \"c3VwZXItc2VjcmV0LXNpZ25pbmcta2V5LXZhbHVlLTEyMzQ=\"\n");

        let cfg = load(Some(file.path())).unwrap();

        assert!(!format!("{cfg:?}").contains("c3VwZXItc2VjcmV0"));
    }
}
