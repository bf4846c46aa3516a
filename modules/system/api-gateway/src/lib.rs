//! API gateway
//!
//! Mounts the module routers behind one middleware stack. Every request
//! passes the request authenticator exactly once and the access policy
//! right after it.

pub mod auth;
pub mod config;
pub mod middleware;
mod module;
mod web;

pub use config::{ApiGatewayConfig, OpenApiConfig};
pub use module::ApiGateway;
