// ABOUTME: Re-exports command modules for nutrisync-cli
// ABOUTME: Provides the symptoms, recommend, and wearable subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

pub mod recommend;
pub mod symptoms;
pub mod wearable;
