// ABOUTME: Wearable metrics configuration with daily targets
// ABOUTME: Targets for sleep, steps, active minutes, and vitamin C intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use serde::{Deserialize, Serialize};

/// Daily targets the wearable analyzer compares averages against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WearableConfig {
    /// Sleep per night (hours)
    pub sleep_target_hours: f64,
    /// Steps per day
    pub daily_steps_target: f64,
    /// Active minutes per day
    pub active_minutes_target: f64,
    /// Vitamin C intake per day (mg)
    pub vitamin_c_target_mg: f64,
}

impl Default for WearableConfig {
    fn default() -> Self {
        Self {
            sleep_target_hours: 9.0,
            daily_steps_target: 10_000.0,
            active_minutes_target: 60.0,
            vitamin_c_target_mg: 45.0,
        }
    }
}
