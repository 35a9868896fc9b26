// ABOUTME: Symptoms subcommand listing the vocabulary the engine understands
// ABOUTME: Output is numbered in presentation order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use nutrisync::reference::Symptom;

/// Print the numbered symptom vocabulary
pub fn list() {
    println!("Known symptoms:");
    for (number, symptom) in Symptom::ALL.iter().enumerate() {
        println!("{:>3}. {symptom}", number + 1);
    }
}
