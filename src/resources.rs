// ABOUTME: Shared server resources injected into every route handler
// ABOUTME: Bundles config, history store, guest quota, and the HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Shared server resources
//!
//! One `Arc<ServerResources>` is built at startup and cloned into every
//! router; handlers never construct their own stores or clients.

use crate::config::ServerConfig;
use crate::history::{GuestQuota, HistoryStore, InMemoryHistoryStore};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

/// Everything a route handler needs, built once at startup
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Assessment history store
    pub history: Arc<dyn HistoryStore>,
    /// Guest analysis quota
    pub guest_quota: Arc<GuestQuota>,
    /// HTTP client for fetching remote documents
    pub http_client: reqwest::Client,
}

impl ServerResources {
    /// Build resources with the default in-memory history store
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client fails to initialize.
    pub fn new(config: Arc<ServerConfig>) -> Result<Self> {
        let history: Arc<dyn HistoryStore> = Arc::new(InMemoryHistoryStore::new());
        Self::with_history(config, history)
    }

    /// Build resources with an injected history store
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client fails to initialize.
    pub fn with_history(
        config: Arc<ServerConfig>,
        history: Arc<dyn HistoryStore>,
    ) -> Result<Self> {
        let guest_quota = Arc::new(GuestQuota::new(config.guest.analysis_limit));
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.scan.fetch_timeout_secs))
            .build()
            .context("Failed to build the document fetch HTTP client")?;

        Ok(Self {
            config,
            history,
            guest_quota,
            http_client,
        })
    }
}
