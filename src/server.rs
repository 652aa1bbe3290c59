// ABOUTME: HTTP server assembly: merges domain routers and applies shared layers
// ABOUTME: Runs the Axum server with graceful shutdown on SIGINT/SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Server assembly and lifecycle

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{AnalysisRoutes, HealthRoutes, ScanRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// The Earlyrisk HTTP server
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create the server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete router with all routes and layers
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(AnalysisRoutes::routes(self.resources.clone()))
            .merge(ScanRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(setup_cors(&self.resources.config))
    }

    /// Bind and serve until shutdown is requested
    ///
    /// # Errors
    ///
    /// Returns an error when binding the listen address fails or the server
    /// itself fails while running.
    pub async fn run(&self, port: u16) -> Result<()> {
        let app = self.router();
        let addr = format!("0.0.0.0:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("Listening on {addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        info!("Server shut down cleanly");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
