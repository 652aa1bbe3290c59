// ABOUTME: Earlyrisk server binary: loads config, initializes logging, serves the API
// ABOUTME: Production entry point with environment-driven configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! # Earlyrisk API Server Binary
//!
//! Starts the health screening API: rule-based risk scoring, advice, alerts,
//! trend data, and document scanning behind a single HTTP port.

use anyhow::Result;
use clap::Parser;
use earlyrisk::{config::ServerConfig, logging, resources::ServerResources, server::HttpServer};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "earlyrisk-server")]
#[command(about = "Earlyrisk API - rule-based health screening service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Earlyrisk API");
    info!("{}", config.summary());

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(Arc::new(config))?);
    let server = HttpServer::new(resources);

    display_available_endpoints(http_port);

    if let Err(e) = server.run(http_port).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

fn display_available_endpoints(port: u16) {
    info!("Available endpoints on port {port}:");
    info!("  GET  /health                        - Liveness check");
    info!("  GET  /ready                         - Readiness check");
    info!("  POST /api/analyze                   - Analyze health metrics");
    info!("  GET  /api/patient-history/:user_id  - Stored history with trend data");
    info!("  GET  /api/patient-latest/:user_id   - Latest record, re-analyzed");
    info!("  GET  /api/insights/:user_id         - Alerts and contributors");
    info!("  POST /api/scan-document             - Scan a remote document");
    info!("  POST /api/scan-text                 - Scan inline text");
}
