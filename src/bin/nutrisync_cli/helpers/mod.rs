// ABOUTME: Re-exports helper modules for nutrisync-cli
// ABOUTME: Provides display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

pub mod display;
