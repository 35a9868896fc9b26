// ABOUTME: Resolves per-nutrient daily intake targets for an age, gender, and pregnancy profile
// ABOUTME: Base table plus one exclusive override branch and two stacked adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! RDI resolver
//!
//! Resolution order:
//!
//! 1. Start from [`BASE_RDI`].
//! 2. Apply the first matching [`RdiOverride`] in [`RdiOverride::PRECEDENCE`]
//!    (child, then pregnancy, then older adult). At most one applies.
//! 3. Apply every matching [`RdiAdjustment`]; these stack with step 2.

use nutrisync_core::models::Demographics;
use nutrisync_core::reference::rdi::{
    BASE_RDI, CHILD_RDI, CHILD_RDI_MAX_AGE_EXCLUSIVE, ELDERLY_VITAMIN_D_MIN_AGE,
    ELDERLY_VITAMIN_D_UG, FERTILE_FEMALE_IRON_MG, OLDER_ADULT_CALCIUM_MG, OLDER_ADULT_MIN_AGE,
    OLDER_ADULT_VITAMIN_D_UG, OLDER_MALE_ZINC_MG, PREGNANCY_RDI,
};
use nutrisync_core::reference::NutrientColumn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily targets keyed by nutrient column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdiTable {
    targets: BTreeMap<NutrientColumn, f64>,
}

impl RdiTable {
    fn from_base() -> Self {
        Self {
            targets: BASE_RDI.into_iter().collect(),
        }
    }

    fn overlay(&mut self, values: &[(NutrientColumn, f64)]) {
        self.targets.extend(values.iter().copied());
    }

    fn set(&mut self, column: NutrientColumn, target: f64) {
        self.targets.insert(column, target);
    }

    /// Target for a column, `None` when the column has no enforceable target
    #[must_use]
    pub fn target(&self, column: NutrientColumn) -> Option<f64> {
        self.targets.get(&column).copied()
    }

    /// All targets in column order
    pub fn iter(&self) -> impl Iterator<Item = (NutrientColumn, f64)> + '_ {
        self.targets.iter().map(|(c, t)| (*c, *t))
    }

    /// Number of columns with a target
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Mutually exclusive override branches; the first match wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdiOverride {
    /// Younger than 9: child table
    Child,
    /// Pregnant: pregnancy table
    Pregnancy,
    /// 51 and older: calcium and vitamin D
    OlderAdult,
}

impl RdiOverride {
    /// Evaluation order
    pub const PRECEDENCE: [Self; 3] = [Self::Child, Self::Pregnancy, Self::OlderAdult];

    /// Whether this branch applies to the profile
    #[must_use]
    pub fn matches(self, profile: &Demographics) -> bool {
        match self {
            Self::Child => profile.age < CHILD_RDI_MAX_AGE_EXCLUSIVE,
            Self::Pregnancy => profile.pregnant,
            Self::OlderAdult => profile.age >= OLDER_ADULT_MIN_AGE,
        }
    }

    fn apply(self, table: &mut RdiTable, profile: &Demographics) {
        match self {
            Self::Child => table.overlay(&CHILD_RDI),
            Self::Pregnancy => table.overlay(&PREGNANCY_RDI),
            Self::OlderAdult => {
                let vitamin_d = if profile.age >= ELDERLY_VITAMIN_D_MIN_AGE {
                    ELDERLY_VITAMIN_D_UG
                } else {
                    OLDER_ADULT_VITAMIN_D_UG
                };
                table.set(NutrientColumn::Calcium, OLDER_ADULT_CALCIUM_MG);
                table.set(NutrientColumn::VitaminD, vitamin_d);
            }
        }
    }
}

/// Adjustments applied after the override branch, all that match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdiAdjustment {
    /// Women aged 19 to 50: iron 18 mg
    FertileFemaleIron,
    /// Men over 50: zinc 11 mg
    OlderMaleZinc,
}

impl RdiAdjustment {
    /// Application order
    pub const ALL: [Self; 2] = [Self::FertileFemaleIron, Self::OlderMaleZinc];

    /// Whether this adjustment applies to the profile
    #[must_use]
    pub fn matches(self, profile: &Demographics) -> bool {
        match self {
            Self::FertileFemaleIron => profile.is_female() && (19..=50).contains(&profile.age),
            Self::OlderMaleZinc => profile.is_male() && profile.age > 50,
        }
    }

    fn apply(self, table: &mut RdiTable) {
        match self {
            Self::FertileFemaleIron => table.set(NutrientColumn::Iron, FERTILE_FEMALE_IRON_MG),
            Self::OlderMaleZinc => table.set(NutrientColumn::Zinc, OLDER_MALE_ZINC_MG),
        }
    }
}

/// Daily targets for a profile. Derived fresh on every call.
#[must_use]
pub fn get_rdi(profile: &Demographics) -> RdiTable {
    let mut table = RdiTable::from_base();
    if let Some(branch) = RdiOverride::PRECEDENCE
        .into_iter()
        .find(|branch| branch.matches(profile))
    {
        branch.apply(&mut table, profile);
    }
    for adjustment in RdiAdjustment::ALL
        .into_iter()
        .filter(|adjustment| adjustment.matches(profile))
    {
        adjustment.apply(&mut table);
    }
    table
}
