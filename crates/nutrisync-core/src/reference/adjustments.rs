// ABOUTME: Ordered demographic severity multipliers applied after symptom analysis
// ABOUTME: Each rule pairs a demographic condition with per-deficiency factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use super::nutrients::Deficiency;
use crate::models::Demographics;

/// Demographic condition that activates an adjustment rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCondition {
    /// Female, strictly older than 12 and younger than 51
    FemaleReproductiveAge,
    /// Female and pregnant
    Pregnant,
    /// Younger than 9
    YoungChild,
    /// Between 9 and 18 inclusive
    Adolescent,
    /// Older than 50
    OlderAdult,
    /// Older than 70
    Elderly,
    /// Male and older than 50
    OlderMale,
}

impl RuleCondition {
    /// Whether the profile satisfies this condition
    #[must_use]
    pub fn matches(self, profile: &Demographics) -> bool {
        let age = profile.age;
        match self {
            Self::FemaleReproductiveAge => profile.is_female() && age > 12 && age < 51,
            Self::Pregnant => profile.is_female() && profile.pregnant,
            Self::YoungChild => age < 9,
            Self::Adolescent => (9..=18).contains(&age),
            Self::OlderAdult => age > 50,
            Self::Elderly => age > 70,
            Self::OlderMale => profile.is_male() && age > 50,
        }
    }
}

/// One row of the adjustment table
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentRule {
    /// Condition that activates the rule
    pub condition: RuleCondition,
    /// Multipliers applied to the current severity of each deficiency
    pub factors: &'static [(Deficiency, f64)],
}

use Deficiency as D;

/// Adjustment rules in application order. Every matching rule applies and
/// multiplies the value left by the rules before it.
pub const DEMOGRAPHIC_ADJUSTMENTS: [AdjustmentRule; 7] = [
    AdjustmentRule {
        condition: RuleCondition::FemaleReproductiveAge,
        factors: &[(D::Iron, 1.5)],
    },
    AdjustmentRule {
        condition: RuleCondition::Pregnant,
        factors: &[
            (D::Iron, 1.8),
            (D::Folate, 1.6),
            (D::Calcium, 1.2),
            (D::VitaminD, 1.2),
            (D::Omega3FattyAcids, 1.3),
        ],
    },
    AdjustmentRule {
        condition: RuleCondition::YoungChild,
        factors: &[(D::Calcium, 1.2), (D::Iron, 1.1), (D::VitaminD, 1.3)],
    },
    AdjustmentRule {
        condition: RuleCondition::Adolescent,
        factors: &[
            (D::Calcium, 1.5),
            (D::Iron, 1.2),
            (D::VitaminD, 1.4),
            (D::Magnesium, 1.1),
        ],
    },
    AdjustmentRule {
        condition: RuleCondition::OlderAdult,
        factors: &[
            (D::Calcium, 1.2),
            (D::VitaminB12, 1.3),
            (D::VitaminD, 1.2),
            (D::Omega3FattyAcids, 1.2),
        ],
    },
    AdjustmentRule {
        condition: RuleCondition::Elderly,
        factors: &[(D::Calcium, 1.3), (D::VitaminD, 1.5), (D::VitaminB12, 1.4)],
    },
    AdjustmentRule {
        condition: RuleCondition::OlderMale,
        factors: &[(D::Zinc, 1.1)],
    },
];
