// ABOUTME: Shared test utilities and record builders for integration tests
// ABOUTME: Provides healthy/risky record fixtures and server resource setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

#![allow(
    dead_code,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

//! Shared test utilities for the Earlyrisk server

use earlyrisk::config::environment::GuestConfig;
use earlyrisk::config::ServerConfig;
use earlyrisk::resources::ServerResources;
use earlyrisk_core::models::{Gender, HealthRecord};
use earlyrisk_intelligence::{MetricValue, RawHealthInput};
use std::sync::Arc;

/// A record with every metric in its healthy band
pub fn healthy_record() -> HealthRecord {
    HealthRecord {
        age: 30.0,
        gender: Gender::Other,
        height_cm: 170.0,
        weight_kg: 65.0,
        bp_systolic: 115.0,
        bp_diastolic: 75.0,
        sugar_mgdl: 90.0,
        hba1c_pct: 5.0,
        cholesterol_mgdl: 170.0,
        sleep_hours: 8.0,
        exercise_mins_per_week: 180.0,
        stress_level: 2.0,
        family_history: false,
    }
}

/// A record with most metrics in risk bands
pub fn risky_record() -> HealthRecord {
    HealthRecord {
        age: 58.0,
        gender: Gender::Male,
        height_cm: 170.0,
        weight_kg: 95.0,
        bp_systolic: 150.0,
        bp_diastolic: 95.0,
        sugar_mgdl: 160.0,
        hba1c_pct: 7.2,
        cholesterol_mgdl: 260.0,
        sleep_hours: 4.0,
        exercise_mins_per_week: 20.0,
        stress_level: 9.0,
        family_history: true,
    }
}

/// Raw input mirroring `healthy_record`, as a client would send it
pub fn healthy_raw_input() -> RawHealthInput {
    RawHealthInput::from(&healthy_record())
}

/// Raw input mirroring `risky_record`, as a client would send it
pub fn risky_raw_input() -> RawHealthInput {
    RawHealthInput::from(&risky_record())
}

/// Raw input with string-typed numbers, as noisy clients send them
pub fn stringly_raw_input() -> RawHealthInput {
    RawHealthInput {
        age: Some(MetricValue::Text("45".to_owned())),
        sugar_mgdl: Some(MetricValue::Text("105.5".to_owned())),
        family_history: Some(MetricValue::Text("yes".to_owned())),
        ..RawHealthInput::default()
    }
}

/// Server resources over a fresh in-memory store and default config
pub fn server_resources() -> Arc<ServerResources> {
    let resources =
        ServerResources::new(Arc::new(ServerConfig::default())).expect("server resources");
    Arc::new(resources)
}

/// Server resources with a specific guest analysis limit
pub fn server_resources_with_guest_limit(limit: u32) -> Arc<ServerResources> {
    let config = ServerConfig {
        guest: GuestConfig {
            analysis_limit: limit,
        },
        ..ServerConfig::default()
    };
    Arc::new(ServerResources::new(Arc::new(config)).expect("server resources"))
}
