//! # HTTP Server
//!
//! Main HTTP server combining the endpoint routers with CORS and request
//! tracing layers.

use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::employee_routes::employee_routes;
use super::observability_routes::health_routes;
use crate::employee::EmployeeService;

/// HTTP server for the employee API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(service: EmployeeService) -> Self {
        Self::with_config(HttpServerConfig::default(), service)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, service: EmployeeService) -> Self {
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, service: EmployeeService) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(employee_routes(service))
            .layer(Self::cors_layer(config))
            .layer(TraceLayer::new_for_http())
    }

    /// Cross-origin access for the single configured caller origin
    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);

        match config.cors_origin_header() {
            Some(origin) => cors.allow_origin(AllowOrigin::list([origin])),
            None => {
                tracing::warn!(
                    origin = %config.cors_origin,
                    "invalid CORS origin, cross-origin requests will be rejected"
                );
                cors
            }
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        tracing::info!(%addr, cors_origin = %self.config.cors_origin, "HTTP server listening");
        tracing::info!("employee API available at http://{}/api/employees", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repository::InMemoryEmployeeRepository;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()))
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(service());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9090);
        let server = HttpServer::with_config(config, service());
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds_with_invalid_origin() {
        let config = HttpServerConfig {
            cors_origin: "not\na header".to_string(),
            ..Default::default()
        };
        let _router = HttpServer::with_config(config, service()).router();
    }
}
