// ABOUTME: Symptom vocabulary and the deficiencies each symptom points to
// ABOUTME: Also holds the per-symptom supplement advice shown with recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use super::nutrients::Deficiency;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A self-reported symptom the engine knows how to interpret
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symptom {
    /// Persistent tiredness
    Fatigue,
    /// Frequent infections
    #[serde(rename = "Weakened immune system")]
    WeakenedImmuneSystem,
    /// Reduced muscle strength
    #[serde(rename = "Muscle weakness")]
    MuscleWeakness,
    /// Difficulty seeing in low light
    #[serde(rename = "Poor night vision")]
    PoorNightVision,
    /// Brittle hair and nails
    #[serde(rename = "Brittle hair and nails")]
    BrittleHairAndNails,
    /// Bone pain
    #[serde(rename = "Bone pain")]
    BonePain,
    /// Dry skin
    #[serde(rename = "Dry skin")]
    DrySkin,
    /// Slow wound healing
    #[serde(rename = "Poor wound healing")]
    PoorWoundHealing,
    /// Palpitations or arrhythmia
    #[serde(rename = "Irregular heartbeats")]
    IrregularHeartbeats,
    /// Reduced concentration
    #[serde(rename = "Brain fog")]
    BrainFog,
}

impl Symptom {
    /// Symptom vocabulary in presentation order
    pub const ALL: [Self; 10] = [
        Self::Fatigue,
        Self::WeakenedImmuneSystem,
        Self::MuscleWeakness,
        Self::PoorNightVision,
        Self::BrittleHairAndNails,
        Self::BonePain,
        Self::DrySkin,
        Self::PoorWoundHealing,
        Self::IrregularHeartbeats,
        Self::BrainFog,
    ];

    /// Display name, also the identifier callers submit
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fatigue => "Fatigue",
            Self::WeakenedImmuneSystem => "Weakened immune system",
            Self::MuscleWeakness => "Muscle weakness",
            Self::PoorNightVision => "Poor night vision",
            Self::BrittleHairAndNails => "Brittle hair and nails",
            Self::BonePain => "Bone pain",
            Self::DrySkin => "Dry skin",
            Self::PoorWoundHealing => "Poor wound healing",
            Self::IrregularHeartbeats => "Irregular heartbeats",
            Self::BrainFog => "Brain fog",
        }
    }

    /// Parse a symptom identifier, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|symptom| symptom.name().eq_ignore_ascii_case(name))
    }

    /// Deficiencies suggested by this symptom, in reference order
    #[must_use]
    pub const fn deficiencies(self) -> &'static [Deficiency] {
        use Deficiency as D;
        match self {
            Self::Fatigue => &[D::Iron, D::VitaminB12, D::VitaminB6, D::Magnesium],
            Self::WeakenedImmuneSystem => &[D::VitaminC, D::Zinc, D::VitaminD, D::Selenium],
            Self::MuscleWeakness => &[D::VitaminD, D::Magnesium, D::Potassium],
            Self::PoorNightVision => &[D::VitaminA],
            Self::BrittleHairAndNails => &[D::Biotin, D::Iron, D::Zinc],
            Self::BonePain => &[D::VitaminD, D::Calcium, D::Magnesium],
            Self::DrySkin => &[D::VitaminE, D::Omega3FattyAcids],
            Self::PoorWoundHealing => &[D::VitaminC, D::Zinc, D::Protein],
            Self::IrregularHeartbeats => &[D::Magnesium, D::Potassium],
            Self::BrainFog => &[D::VitaminB12, D::Iron, D::Omega3FattyAcids],
        }
    }

    /// Supplement advice for this symptom. Bone pain has none.
    #[must_use]
    pub const fn supplement_advice(self) -> Option<&'static str> {
        let advice = match self {
            Self::Fatigue => "To address fatigue, look for supplements rich in iron, vitamin B12, vitamin B6, and magnesium.",
            Self::WeakenedImmuneSystem => "To support your immune system, consider supplements with vitamin C, zinc, vitamin D, and selenium.",
            Self::MuscleWeakness => "For muscle strength, ensure adequate intake of vitamin D, magnesium, and potassium.",
            Self::PoorNightVision => "To support eye health, look for supplements containing vitamin A.",
            Self::BrittleHairAndNails => "For healthier hair and nails, consider supplements with biotin, iron, and zinc.",
            Self::DrySkin => "For skin health, consider supplements with vitamin E and omega-3 fatty acids.",
            Self::PoorWoundHealing => "To improve wound healing, ensure adequate intake of vitamin C, zinc, and protein.",
            Self::IrregularHeartbeats => "For heart health, consider supplements with magnesium and potassium, but consult a doctor first.",
            Self::BrainFog => "To improve cognitive function, look for supplements containing vitamin B12, iron, and omega-3 fatty acids.",
            Self::BonePain => return None,
        };
        Some(advice)
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
