// ABOUTME: Test helper modules shared across integration tests
// ABOUTME: Axum request utilities for exercising routers without a server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

#![allow(dead_code)]

pub mod axum_test;
