//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with one handler per documented endpoint
//! - Send everything else, wrong methods included, to the 404 fallback
//! - Wire up middleware (CORS, body parsing, access log, tracing, request
//!   ID, limits)
//! - Serve on a listener until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    handler::Handler,
    middleware,
    routing::{get, post, put, MethodRouter},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::validation::{validate_config, ValidationError};
use crate::config::{ConfigError, StubConfig};
use crate::http::handlers;
use crate::http::middleware::{
    access_log_middleware, cors_middleware, json_body_middleware, CorsPolicy,
};
use crate::routing::table::{self, Endpoint, Verb};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub log_payloads: bool,
    pub cors_enabled: bool,
}

/// HTTP server for the device stub.
pub struct HttpServer {
    router: Router,
    config: StubConfig,
}

impl HttpServer {
    /// Validate the configuration and build the router.
    pub fn new(config: StubConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let state = AppState {
            log_payloads: config.observability.log_payloads,
            cors_enabled: config.cors.enabled,
        };

        let router = Self::build_router(&config, state)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &StubConfig, state: AppState) -> Result<Router, ConfigError> {
        let router = Router::new()
            .route(
                "/",
                get(handlers::index_page).fallback(handlers::route_not_found),
            )
            .route(table::DEVICES.path, endpoint(table::DEVICES, handlers::list_devices))
            .route(
                table::WORK_SHIFT.path,
                endpoint(table::WORK_SHIFT, handlers::toggle_work_shift),
            )
            .route(
                table::RECEIPTS.path,
                endpoint(table::RECEIPTS, handlers::print_receipt),
            )
            .route(
                table::NON_FISCALS.path,
                endpoint(table::NON_FISCALS, handlers::print_non_fiscal),
            )
            .route(
                table::PAYMENTS.path,
                endpoint(table::PAYMENTS, handlers::process_payment),
            )
            .route(
                table::REFUNDS.path,
                endpoint(table::REFUNDS, handlers::process_refund),
            )
            .route(
                table::POS_Z_REPORT.path,
                endpoint(table::POS_Z_REPORT, handlers::pos_z_report),
            )
            .route(
                table::CASH_REGISTER_X_REPORT.path,
                endpoint(table::CASH_REGISTER_X_REPORT, handlers::cash_register_x_report),
            )
            .route(
                table::POS_X_REPORT.path,
                endpoint(table::POS_X_REPORT, handlers::pos_x_report),
            )
            .route(
                table::SHIFT_TOTALS.path,
                endpoint(table::SHIFT_TOTALS, handlers::shift_totals),
            )
            .route(table::HEALTH.path, endpoint(table::HEALTH, handlers::health))
            .fallback(handlers::route_not_found)
            .with_state(state);

        with_middleware(router, config)
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            cors = self.config.cors.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    /// The assembled router, for in-process use.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Route one endpoint's verb to `handler`; any other method on the same
/// path falls through to the 404 handler instead of axum's 405.
fn endpoint<H, T>(route: Endpoint, handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    let method_router = match route.verb {
        Verb::Get => get(handler),
        Verb::Put => put(handler),
        Verb::Post => post(handler),
    };
    method_router.fallback(handlers::route_not_found)
}

/// Wrap `router` in the middleware stack. Listed outermost first:
/// CORS, request id + trace + timeout, body limit, body parsing, access log.
///
/// CORS sits outside the timeout so a 408 still carries its headers.
/// Requests rejected by the body parser never reach the access log.
#[allow(deprecated)]
fn with_middleware(router: Router, config: &StubConfig) -> Result<Router, ConfigError> {
    let router = router
        .layer(middleware::from_fn(access_log_middleware))
        .layer(middleware::from_fn(json_body_middleware))
        .layer(DefaultBodyLimit::max(config.limits.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                ))),
        );

    if !config.cors.enabled {
        return Ok(router);
    }

    let policy = CorsPolicy::from_config(&config.cors)
        .map_err(|e| ConfigError::Validation(vec![ValidationError::new("cors", e.to_string())]))?;
    Ok(router.layer(middleware::from_fn_with_state(
        Arc::new(policy),
        cors_middleware,
    )))
}
