// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identity and demographic input limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Constants module
//!
//! Small, stable values shared by every crate in the workspace. Nutrient
//! tables live in [`crate::reference`] instead.

/// Service names used in structured logs
pub mod service_names {
    /// Name reported by the command-line front end
    pub const NUTRISYNC_CLI: &str = "nutrisync-cli";
}

/// Demographic input limits
pub mod limits {
    /// Oldest accepted age in years
    pub const MAX_AGE_YEARS: u32 = 120;
    /// Upper bound (inclusive) of the child age bracket
    pub const CHILD_MAX_AGE: u32 = 12;
    /// Upper bound (inclusive) of the teen age bracket
    pub const TEEN_MAX_AGE: u32 = 17;
}

/// Ranking defaults
pub mod ranking {
    /// Number of supplements returned when not configured otherwise
    pub const DEFAULT_TOP_N: usize = 2;
    /// Normalized scores must be strictly above this to be shown
    pub const DEFAULT_MIN_NORMALIZED_SCORE: f64 = 10.0;
    /// Upper end of the normalized score range
    pub const NORMALIZED_SCALE: f64 = 100.0;
}
