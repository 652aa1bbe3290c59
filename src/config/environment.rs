// ABOUTME: Environment variable configuration loading for the Earlyrisk server
// ABOUTME: Defines ServerConfig and its nested sections with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Environment-based configuration
//!
//! Every setting has a default suitable for local development; production
//! deployments override through environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// CORS settings
    pub cors: CorsConfig,
    /// Guest mode settings
    pub guest: GuestConfig,
    /// Document scan settings
    pub scan: ScanConfig,
}

/// Cross-origin request policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or "*" for any
    pub allowed_origins: String,
}

/// Unauthenticated usage policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestConfig {
    /// Analyses allowed per guest id before requiring an account
    pub analysis_limit: u32,
}

/// Remote document fetching policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Maximum accepted document size in bytes
    pub max_document_bytes: usize,
    /// Fetch timeout in seconds
    pub fetch_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but fails to parse.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", "8081")?
                .parse()
                .context("Invalid HTTP_PORT value")?,
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*")?,
            },
            guest: GuestConfig {
                analysis_limit: env_var_or("GUEST_ANALYSIS_LIMIT", "3")?
                    .parse()
                    .context("Invalid GUEST_ANALYSIS_LIMIT value")?,
            },
            scan: ScanConfig {
                max_document_bytes: env_var_or("SCAN_MAX_DOCUMENT_BYTES", "5242880")?
                    .parse()
                    .context("Invalid SCAN_MAX_DOCUMENT_BYTES value")?,
                fetch_timeout_secs: env_var_or("SCAN_FETCH_TIMEOUT_SECS", "30")?
                    .parse()
                    .context("Invalid SCAN_FETCH_TIMEOUT_SECS value")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.guest.analysis_limit > 0,
            "GUEST_ANALYSIS_LIMIT must be at least 1"
        );
        anyhow::ensure!(
            self.scan.max_document_bytes > 0,
            "SCAN_MAX_DOCUMENT_BYTES must be positive"
        );
        Ok(())
    }

    /// Human-readable configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Earlyrisk Server Configuration:\n\
             - HTTP Port: {}\n\
             - CORS Origins: {}\n\
             - Guest Analysis Limit: {}\n\
             - Scan Max Document Bytes: {}\n\
             - Scan Fetch Timeout: {}s",
            self.http_port,
            self.cors.allowed_origins,
            self.guest.analysis_limit,
            self.scan.max_document_bytes,
            self.scan.fetch_timeout_secs,
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8081,
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            guest: GuestConfig { analysis_limit: 3 },
            scan: ScanConfig {
                max_document_bytes: 5 * 1024 * 1024,
                fetch_timeout_secs: 30,
            },
        }
    }
}

fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(env::var(key).unwrap_or_else(|_| default.to_owned()))
}
