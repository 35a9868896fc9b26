// ABOUTME: Nutrient column and deficiency vocabularies from the AUSNUT supplement database
// ABOUTME: Maps each deficiency to the measured nutrient columns that can remedy it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use serde::{Deserialize, Serialize};
use std::fmt;

/// A measured nutrient column in the supplement catalog.
///
/// Header strings are the AUSNUT 2011-13 dietary supplement headers verbatim,
/// including the double space in the B12 and folate headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NutrientColumn {
    /// Preformed vitamin A (retinol)
    #[serde(rename = "Preformed vitamin A (retinol) (µg)")]
    PreformedVitaminA,
    /// Beta-carotene
    #[serde(rename = "Beta-carotene (µg)")]
    BetaCarotene,
    /// Provitamin A (beta-carotene equivalents)
    #[serde(rename = "Provitamin A (b-carotene equivalents) (µg)")]
    ProvitaminA,
    /// Vitamin A retinol equivalents
    #[serde(rename = "Vitamin A retinol equivalents (µg)")]
    VitaminARetinolEquivalents,
    /// Thiamin (B1)
    #[serde(rename = "Thiamin (B1) (mg)")]
    Thiamin,
    /// Riboflavin (B2)
    #[serde(rename = "Riboflavin (B2) (mg)")]
    Riboflavin,
    /// Niacin (B3)
    #[serde(rename = "Niacin (B3) (mg)")]
    Niacin,
    /// Niacin derived equivalents
    #[serde(rename = "Niacin derived equivalents (mg)")]
    NiacinDerivedEquivalents,
    /// Folic acid
    #[serde(rename = "Folic acid  (µg)")]
    FolicAcid,
    /// Dietary folate equivalents
    #[serde(rename = "Dietary folate equivalents  (µg)")]
    DietaryFolateEquivalents,
    /// Vitamin B6
    #[serde(rename = "Vitamin B6 (mg)")]
    VitaminB6,
    /// Vitamin B12
    #[serde(rename = "Vitamin B12  (µg)")]
    VitaminB12,
    /// Vitamin C
    #[serde(rename = "Vitamin C (mg)")]
    VitaminC,
    /// Vitamin D
    #[serde(rename = "Vitamin D (µg)")]
    VitaminD,
    /// Vitamin E
    #[serde(rename = "Vitamin E (mg)")]
    VitaminE,
    /// Calcium
    #[serde(rename = "Calcium (Ca) (mg)")]
    Calcium,
    /// Iodine
    #[serde(rename = "Iodine (I) (µg)")]
    Iodine,
    /// Iron
    #[serde(rename = "Iron (Fe) (mg)")]
    Iron,
    /// Magnesium
    #[serde(rename = "Magnesium (Mg) (mg)")]
    Magnesium,
    /// Phosphorus
    #[serde(rename = "Phosphorus (P) (mg)")]
    Phosphorus,
    /// Potassium
    #[serde(rename = "Potassium (K) (mg)")]
    Potassium,
    /// Selenium
    #[serde(rename = "Selenium (Se) (µg)")]
    Selenium,
    /// Zinc
    #[serde(rename = "Zinc (Zn) (mg)")]
    Zinc,
    /// Protein
    #[serde(rename = "Protein (g)")]
    Protein,
    /// Dietary fibre
    #[serde(rename = "Dietary fibre (g)")]
    DietaryFibre,
    /// Total long chain omega 3 fatty acids
    #[serde(rename = "Total long chain omega 3 fatty acids (mg)")]
    LongChainOmega3,
}

impl NutrientColumn {
    /// Every known column, in catalog header order
    pub const ALL: [Self; 26] = [
        Self::PreformedVitaminA,
        Self::BetaCarotene,
        Self::ProvitaminA,
        Self::VitaminARetinolEquivalents,
        Self::Thiamin,
        Self::Riboflavin,
        Self::Niacin,
        Self::NiacinDerivedEquivalents,
        Self::FolicAcid,
        Self::DietaryFolateEquivalents,
        Self::VitaminB6,
        Self::VitaminB12,
        Self::VitaminC,
        Self::VitaminD,
        Self::VitaminE,
        Self::Calcium,
        Self::Iodine,
        Self::Iron,
        Self::Magnesium,
        Self::Phosphorus,
        Self::Potassium,
        Self::Selenium,
        Self::Zinc,
        Self::Protein,
        Self::DietaryFibre,
        Self::LongChainOmega3,
    ];

    /// Catalog header for this column
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::PreformedVitaminA => "Preformed vitamin A (retinol) (µg)",
            Self::BetaCarotene => "Beta-carotene (µg)",
            Self::ProvitaminA => "Provitamin A (b-carotene equivalents) (µg)",
            Self::VitaminARetinolEquivalents => "Vitamin A retinol equivalents (µg)",
            Self::Thiamin => "Thiamin (B1) (mg)",
            Self::Riboflavin => "Riboflavin (B2) (mg)",
            Self::Niacin => "Niacin (B3) (mg)",
            Self::NiacinDerivedEquivalents => "Niacin derived equivalents (mg)",
            Self::FolicAcid => "Folic acid  (µg)",
            Self::DietaryFolateEquivalents => "Dietary folate equivalents  (µg)",
            Self::VitaminB6 => "Vitamin B6 (mg)",
            Self::VitaminB12 => "Vitamin B12  (µg)",
            Self::VitaminC => "Vitamin C (mg)",
            Self::VitaminD => "Vitamin D (µg)",
            Self::VitaminE => "Vitamin E (mg)",
            Self::Calcium => "Calcium (Ca) (mg)",
            Self::Iodine => "Iodine (I) (µg)",
            Self::Iron => "Iron (Fe) (mg)",
            Self::Magnesium => "Magnesium (Mg) (mg)",
            Self::Phosphorus => "Phosphorus (P) (mg)",
            Self::Potassium => "Potassium (K) (mg)",
            Self::Selenium => "Selenium (Se) (µg)",
            Self::Zinc => "Zinc (Zn) (mg)",
            Self::Protein => "Protein (g)",
            Self::DietaryFibre => "Dietary fibre (g)",
            Self::LongChainOmega3 => "Total long chain omega 3 fatty acids (mg)",
        }
    }

    /// Resolve a catalog header to a column, if it is one the engine uses
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL.into_iter().find(|column| column.header() == header)
    }
}

impl fmt::Display for NutrientColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A named nutrient shortfall that symptoms can point to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Deficiency {
    /// Vitamin A
    #[serde(rename = "Vitamin A")]
    VitaminA,
    /// Vitamin B1 (thiamin)
    #[serde(rename = "Vitamin B1")]
    VitaminB1,
    /// Vitamin B2 (riboflavin)
    #[serde(rename = "Vitamin B2")]
    VitaminB2,
    /// Vitamin B3 (niacin)
    #[serde(rename = "Vitamin B3")]
    VitaminB3,
    /// Folate
    Folate,
    /// Vitamin B6
    #[serde(rename = "Vitamin B6")]
    VitaminB6,
    /// Vitamin B12
    #[serde(rename = "Vitamin B12")]
    VitaminB12,
    /// Vitamin C
    #[serde(rename = "Vitamin C")]
    VitaminC,
    /// Vitamin D
    #[serde(rename = "Vitamin D")]
    VitaminD,
    /// Vitamin E
    #[serde(rename = "Vitamin E")]
    VitaminE,
    /// Calcium
    Calcium,
    /// Iodine
    Iodine,
    /// Iron
    Iron,
    /// Magnesium
    Magnesium,
    /// Phosphorus
    Phosphorus,
    /// Potassium
    Potassium,
    /// Selenium
    Selenium,
    /// Zinc
    Zinc,
    /// Protein
    Protein,
    /// Dietary fiber
    #[serde(rename = "Dietary Fiber")]
    DietaryFiber,
    /// Long chain omega-3 fatty acids
    #[serde(rename = "Omega-3 Fatty Acids")]
    Omega3FattyAcids,
    /// Biotin
    Biotin,
}

impl Deficiency {
    /// Every deficiency in the vocabulary
    pub const ALL: [Self; 22] = [
        Self::VitaminA,
        Self::VitaminB1,
        Self::VitaminB2,
        Self::VitaminB3,
        Self::Folate,
        Self::VitaminB6,
        Self::VitaminB12,
        Self::VitaminC,
        Self::VitaminD,
        Self::VitaminE,
        Self::Calcium,
        Self::Iodine,
        Self::Iron,
        Self::Magnesium,
        Self::Phosphorus,
        Self::Potassium,
        Self::Selenium,
        Self::Zinc,
        Self::Protein,
        Self::DietaryFiber,
        Self::Omega3FattyAcids,
        Self::Biotin,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::VitaminA => "Vitamin A",
            Self::VitaminB1 => "Vitamin B1",
            Self::VitaminB2 => "Vitamin B2",
            Self::VitaminB3 => "Vitamin B3",
            Self::Folate => "Folate",
            Self::VitaminB6 => "Vitamin B6",
            Self::VitaminB12 => "Vitamin B12",
            Self::VitaminC => "Vitamin C",
            Self::VitaminD => "Vitamin D",
            Self::VitaminE => "Vitamin E",
            Self::Calcium => "Calcium",
            Self::Iodine => "Iodine",
            Self::Iron => "Iron",
            Self::Magnesium => "Magnesium",
            Self::Phosphorus => "Phosphorus",
            Self::Potassium => "Potassium",
            Self::Selenium => "Selenium",
            Self::Zinc => "Zinc",
            Self::Protein => "Protein",
            Self::DietaryFiber => "Dietary Fiber",
            Self::Omega3FattyAcids => "Omega-3 Fatty Acids",
            Self::Biotin => "Biotin",
        }
    }

    /// Catalog columns whose amounts count toward this deficiency.
    ///
    /// Vitamin D and biotin have no measured column in the catalog and
    /// therefore never contribute to a supplement score.
    #[must_use]
    pub const fn nutrient_columns(self) -> &'static [NutrientColumn] {
        use NutrientColumn as C;
        match self {
            Self::VitaminA => &[
                C::PreformedVitaminA,
                C::BetaCarotene,
                C::ProvitaminA,
                C::VitaminARetinolEquivalents,
            ],
            Self::VitaminB1 => &[C::Thiamin],
            Self::VitaminB2 => &[C::Riboflavin],
            Self::VitaminB3 => &[C::Niacin, C::NiacinDerivedEquivalents],
            Self::Folate => &[C::FolicAcid, C::DietaryFolateEquivalents],
            Self::VitaminB6 => &[C::VitaminB6],
            Self::VitaminB12 => &[C::VitaminB12],
            Self::VitaminC => &[C::VitaminC],
            Self::VitaminE => &[C::VitaminE],
            Self::Calcium => &[C::Calcium],
            Self::Iodine => &[C::Iodine],
            Self::Iron => &[C::Iron],
            Self::Magnesium => &[C::Magnesium],
            Self::Phosphorus => &[C::Phosphorus],
            Self::Potassium => &[C::Potassium],
            Self::Selenium => &[C::Selenium],
            Self::Zinc => &[C::Zinc],
            Self::Protein => &[C::Protein],
            Self::DietaryFiber => &[C::DietaryFibre],
            Self::Omega3FattyAcids => &[C::LongChainOmega3],
            Self::VitaminD | Self::Biotin => &[],
        }
    }

    /// Dietary advice sentence used in the general recommendation
    #[must_use]
    pub const fn dietary_advice(self) -> Option<&'static str> {
        let advice = match self {
            Self::Protein => "Consider increasing protein intake. Consult a nutritionist for a balanced diet plan.",
            Self::Iron => "Iron supplementation may be beneficial. Consider iron-rich foods like lean meats, beans, and leafy greens.",
            Self::Zinc => "Increase zinc intake through foods like oysters, beef, and pumpkin seeds, or consider zinc supplements.",
            Self::Folate => "Increase folate intake. Good sources include leafy greens, legumes, and fortified cereals.",
            Self::VitaminB12 => "Increase Vitamin B12 intake. Consider fortified cereals and B12 supplementation, especially for vegetarians/vegans.",
            Self::Calcium => "Ensure adequate calcium intake. Consider dairy products and fortified plant milks.",
            Self::VitaminD => "Ensure adequate Vitamin D intake. Consider fortified foods and safe sun exposure.",
            Self::VitaminA => "Increase Vitamin A intake. Consider foods like carrots, sweet potatoes, and leafy greens.",
            Self::Omega3FattyAcids => "Consider increasing intake of omega-3 fatty acids through foods like fatty fish, flaxseeds, and walnuts.",
            Self::VitaminC => "Increase Vitamin C intake. Consider citrus fruits, strawberries, and bell peppers.",
            Self::VitaminB3 => "Increase Vitamin B3 intake. Consider foods like chicken, tuna, and whole grains.",
            Self::VitaminB2 => "Increase Vitamin B2 intake. Consider foods like eggs, almonds, and dairy products.",
            Self::VitaminB1 => "Increase Vitamin B1 intake. Consider foods like whole grains, pork, and legumes.",
            Self::Magnesium => "Increase magnesium intake. Good sources include nuts, seeds, and leafy greens.",
            Self::Selenium => "Ensure adequate selenium intake. Brazil nuts, fish, and poultry are good sources.",
            Self::Iodine => "Consider iodine-rich foods like seaweed, fish, and iodized salt.",
            Self::DietaryFiber => "Increase fiber intake through whole grains, fruits, vegetables, and legumes.",
            Self::VitaminB6
            | Self::VitaminE
            | Self::Phosphorus
            | Self::Potassium
            | Self::Biotin => return None,
        };
        Some(advice)
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
