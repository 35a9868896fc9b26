// ABOUTME: Supplement catalog rows and ranked recommendation entries
// ABOUTME: SupplementRecord holds nullable nutrient amounts keyed by typed column
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use crate::reference::NutrientColumn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One product row from the supplement catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementRecord {
    /// Unique display name
    pub name: String,
    /// Nutrient amounts per serving; `None` marks a missing or malformed cell
    #[serde(default)]
    pub nutrients: BTreeMap<NutrientColumn, Option<f64>>,
    /// Where to buy the product
    #[serde(default)]
    pub purchase_link: String,
    /// Product image URL
    #[serde(default)]
    pub image_link: String,
    /// Price as displayed by the retailer (e.g. "86.55AUD")
    #[serde(default)]
    pub price: String,
}

impl SupplementRecord {
    /// Create a record with no nutrients and empty links
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nutrients: BTreeMap::new(),
            purchase_link: String::new(),
            image_link: String::new(),
            price: String::new(),
        }
    }

    /// Set a nutrient amount (builder style)
    #[must_use]
    pub fn with_nutrient(mut self, column: NutrientColumn, amount: Option<f64>) -> Self {
        self.nutrients.insert(column, amount);
        self
    }

    /// Set the purchase link (builder style)
    #[must_use]
    pub fn with_purchase_link(mut self, link: impl Into<String>) -> Self {
        self.purchase_link = link.into();
        self
    }

    /// Set the image link (builder style)
    #[must_use]
    pub fn with_image_link(mut self, link: impl Into<String>) -> Self {
        self.image_link = link.into();
        self
    }

    /// Set the price string (builder style)
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Amount recorded for a column, `None` when absent or null
    #[must_use]
    pub fn amount(&self, column: NutrientColumn) -> Option<f64> {
        self.nutrients.get(&column).copied().flatten()
    }
}

/// A supplement in the final short-list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSupplement {
    /// Product display name
    pub name: String,
    /// Normalized score in `[0, 100]`
    pub score: f64,
    /// Where to buy the product
    pub purchase_link: String,
    /// Product image URL
    pub image_link: String,
    /// Price string
    pub price: String,
}
