//! API gateway definition
//!
//! Owns the HTTP server, merges module routers and their `OpenAPI`
//! documents, and wraps everything in the shared middleware stack.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use auth_sdk::{IdentityStore, TokenVerifier};
use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::{Router, routing::get};
use http::StatusCode;
use tokio_util::sync::CancellationToken;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::field::Empty;
use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder};

use crate::auth::{self, AuthState, RoutePolicy};
use crate::config::ApiGatewayConfig;
use crate::middleware;
use crate::web;

/// HTTP front door for the module routers.
pub struct ApiGateway {
    config: ApiGatewayConfig,
    request_timeout: Duration,
    auth: AuthState,
    routes: Vec<Router>,
    docs: Vec<OpenApi>,
}

impl ApiGateway {
    /// Create a gateway that authenticates callers with the given verifier and store.
    ///
    /// # Errors
    /// Returns an error if `request_timeout` is not a valid duration.
    pub fn new(
        config: ApiGatewayConfig,
        tokens: Arc<dyn TokenVerifier>,
        identities: Arc<dyn IdentityStore>,
    ) -> Result<Self> {
        let request_timeout = humantime::parse_duration(&config.request_timeout)
            .with_context(|| format!("invalid request_timeout '{}'", config.request_timeout))?;
        let policy = RoutePolicy::from_config(&config);

        if !config.require_auth_by_default {
            tracing::warn!(
                "require_auth_by_default is off: protected routes accept anonymous callers"
            );
        }

        Ok(Self {
            config,
            request_timeout,
            auth: AuthState {
                tokens,
                identities,
                policy,
            },
            routes: Vec::new(),
            docs: Vec::new(),
        })
    }

    /// Mount a module router together with its `OpenAPI` document.
    #[must_use]
    pub fn with_module(mut self, router: Router, doc: OpenApi) -> Self {
        self.routes.push(router);
        self.docs.push(doc);
        self
    }

    pub fn config(&self) -> &ApiGatewayConfig {
        &self.config
    }

    /// Merge every mounted document under the configured title and version.
    pub fn build_openapi(&self) -> OpenApi {
        let info = InfoBuilder::new()
            .title(self.config.openapi.title.clone())
            .version(self.config.openapi.version.clone())
            .description(self.config.openapi.description.clone())
            .build();
        let mut doc = OpenApiBuilder::new().info(info).build();
        for module_doc in &self.docs {
            doc.merge(module_doc.clone());
        }
        doc
    }

    /// Build the full application router: health, docs, modules, middleware.
    pub fn build_router(&self) -> Router {
        let doc = Arc::new(self.build_openapi());

        let mut router = Router::new()
            .route("/health", get(web::health_check))
            .route("/healthz", get(web::healthz))
            .route(
                "/openapi.json",
                get(move || {
                    let doc = Arc::clone(&doc);
                    async move { web::openapi_json(&doc) }
                }),
            );
        for module_router in &self.routes {
            router = router.merge(module_router.clone());
        }

        self.apply_middleware_stack(router)
    }

    /// Apply all middleware layers to a router.
    fn apply_middleware_stack(&self, mut router: Router) -> Router {
        // `Router::layer` wraps: the last layer added runs first on the request path.
        //
        // Request order (outermost -> innermost):
        // SetRequestId -> PropagateRequestId -> Trace -> push_req_id_to_extensions
        // -> Timeout -> BodyLimit -> Authn -> Authz -> Router
        //
        // Layers are therefore added innermost first.

        // 6) Access policy
        router = router.layer(from_fn_with_state(
            self.auth.policy.clone(),
            auth::authz_middleware,
        ));

        // 5) Request authenticator (outer to the policy so it runs first, once)
        router = router.layer(from_fn_with_state(
            self.auth.clone(),
            auth::authn_middleware,
        ));

        // 4) Body limit
        router = router.layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes));
        router = router.layer(DefaultBodyLimit::max(self.config.body_limit_bytes));

        // 3) Timeout
        router = router.layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            self.request_timeout,
        ));

        // 2) Request id into extensions, then trace around it
        router = router.layer(from_fn(middleware::request_id::push_req_id_to_extensions));
        router = router.layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                    let rid = req
                        .headers()
                        .get(middleware::request_id::X_REQUEST_ID)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("n/a");

                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        version = ?req.version(),
                        request_id = %rid,
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(
                    |res: &axum::http::Response<axum::body::Body>,
                     latency: Duration,
                     span: &tracing::Span| {
                        span.record("status", res.status().as_u16());
                        span.record("latency_ms", latency.as_millis());
                    },
                ),
        );

        // 1) Request ID handling
        let x_request_id = middleware::request_id::header();
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router = router.layer(SetRequestIdLayer::new(
            x_request_id,
            middleware::request_id::MakeReqId,
        ));

        router
    }

    fn parse_bind_address(bind_addr: &str) -> Result<SocketAddr> {
        bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{bind_addr}': {e}"))
    }

    /// Bind and serve until `cancel` fires, then drain in-flight requests.
    ///
    /// # Errors
    /// Returns an error if the address is invalid, binding fails or the server fails.
    pub async fn serve(self, cancel: CancellationToken) -> Result<()> {
        let addr = Self::parse_bind_address(&self.config.bind_addr)?;
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!(addr = %listener.local_addr()?, "HTTP server bound");

        let shutdown = async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully (cancellation)");
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}
