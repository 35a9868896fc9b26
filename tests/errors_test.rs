// ABOUTME: Tests for error classification and conversion into AppError
// ABOUTME: Covers wire names of error codes, source chaining, and context builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisync::errors::{AppError, ErrorCode};
use nutrisync::intelligence::config::intelligence::ConfigError;
use std::error::Error;
use std::io;

#[test]
fn test_error_codes_serialize_to_stable_names() {
    let codes = [
        (ErrorCode::InvalidInput, "\"INVALID_INPUT\""),
        (ErrorCode::InvalidFormat, "\"INVALID_FORMAT\""),
        (ErrorCode::ValueOutOfRange, "\"VALUE_OUT_OF_RANGE\""),
        (ErrorCode::ConfigInvalid, "\"CONFIG_INVALID\""),
        (ErrorCode::StorageError, "\"STORAGE_ERROR\""),
        (ErrorCode::SerializationError, "\"SERIALIZATION_ERROR\""),
    ];
    for (code, name) in codes {
        assert_eq!(serde_json::to_string(&code).unwrap(), name);
    }
}

#[test]
fn test_io_error_becomes_storage_error_with_source() {
    let error: AppError = io::Error::new(io::ErrorKind::NotFound, "catalog.json").into();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(error.source().is_some());
    assert!(error.to_string().starts_with("Storage operation failed: "));
}

#[test]
fn test_json_error_becomes_serialization_error() {
    let json_error = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
    let error: AppError = json_error.into();

    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(error.source().is_some());
}

#[test]
fn test_config_error_maps_to_config_invalid() {
    let error: AppError = ConfigError::InvalidMultiplier("affinity multipliers must be positive").into();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("Invalid multiplier"));
}

#[test]
fn test_context_builders() {
    let error = AppError::invalid_format("Catalog row 3 has no name")
        .with_resource_id("3")
        .with_request_id("req-1");

    assert_eq!(error.context.resource_id.as_deref(), Some("3"));
    assert_eq!(error.context.request_id.as_deref(), Some("req-1"));

    let context = serde_json::to_value(&error.context).unwrap();
    assert_eq!(context["resource_id"], "3");
}
