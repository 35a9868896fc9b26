// ABOUTME: Core types and reference data for the NutriSync supplement recommender
// ABOUTME: Foundation crate with error handling, domain models, and nutrient reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

#![deny(unsafe_code)]

//! # NutriSync Core
//!
//! Foundation crate providing shared types for the NutriSync supplement
//! recommendation engine. Everything here is immutable data or plain value
//! types, so the crate changes rarely and compiles once for the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Service names and input limits
//! - **models**: Demographics, supplement records, ranked results, wearable samples
//! - **reference**: Symptom, deficiency, nutrient column, RDI, and adjustment tables

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (demographics, supplements, recommendations, wearables)
pub mod models;

/// Static nutrient reference tables
pub mod reference;
