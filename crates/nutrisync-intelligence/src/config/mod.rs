// ABOUTME: Configuration module for nutrisync-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

/// Engine configuration (ranking, affinity, explanation, wearable targets)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
