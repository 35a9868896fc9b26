// ABOUTME: Demographic inputs for recommendations: gender, age bracket, and catalog buckets
// ABOUTME: Validates caller input once so downstream stages can assume well-formed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

use crate::constants::limits::{CHILD_MAX_AGE, MAX_AGE_YEARS, TEEN_MAX_AGE};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used for RDI overrides and catalog selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Lowercase identifier ("male" / "female")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Gender must be 'male' or 'female', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse age bracket used for catalog selection and advice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// 0 to 12 years
    Child,
    /// 13 to 17 years
    Teen,
    /// 18 years and older
    Adult,
}

impl AgeGroup {
    /// Bracket for an age in years. Ages past the table fall back to adult.
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        if age <= CHILD_MAX_AGE {
            Self::Child
        } else if age <= TEEN_MAX_AGE {
            Self::Teen
        } else {
            Self::Adult
        }
    }
}

/// Demographic partition of the supplement catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DemographicBucket {
    /// Products for children
    Child,
    /// Products for teenagers
    Teen,
    /// Products for women, plus gender-neutral products
    Women,
    /// Products for men, plus gender-neutral products
    Men,
    /// Prenatal products
    Pregnancy,
}

impl DemographicBucket {
    /// Name keywords checked in priority order; the first bucket with a hit wins
    const KEYWORDS: [(Self, &'static [&'static str]); 5] = [
        (Self::Child, &["children", "kids"]),
        (Self::Teen, &["teen"]),
        (Self::Women, &["women", "woman"]),
        (Self::Men, &["men", "man"]),
        (Self::Pregnancy, &["pregnancy", "prenatal"]),
    ];

    /// Bucket implied by a product name, or `None` for a generic product
    #[must_use]
    pub fn from_product_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
            .map(|(bucket, _)| *bucket)
    }
}

/// Validated demographic profile of the person asking for a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Demographics {
    /// Age in whole years (0 to 120)
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Pregnancy flag, only ever true for female profiles
    pub pregnant: bool,
}

impl Demographics {
    /// Build a profile from already-typed values
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the age exceeds 120 and `InvalidInput`
    /// when a male profile is flagged as pregnant.
    pub fn new(age: u32, gender: Gender, pregnant: bool) -> AppResult<Self> {
        if age > MAX_AGE_YEARS {
            return Err(AppError::value_out_of_range(format!(
                "Age must be between 0 and {MAX_AGE_YEARS} years, got {age}"
            )));
        }
        if pregnant && gender == Gender::Male {
            return Err(AppError::invalid_input(
                "Pregnancy can only be set for female profiles",
            ));
        }
        Ok(Self {
            age,
            gender,
            pregnant,
        })
    }

    /// Build a profile from raw caller input
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for ages outside 0 to 120 and `InvalidInput`
    /// for an unknown gender or a pregnant male profile.
    pub fn parse(age: i64, gender: &str, pregnant: bool) -> AppResult<Self> {
        let age = u32::try_from(age).map_err(|_| {
            AppError::value_out_of_range(format!(
                "Age must be between 0 and {MAX_AGE_YEARS} years, got {age}"
            ))
        })?;
        Self::new(age, gender.parse()?, pregnant)
    }

    /// Age bracket of this profile
    #[must_use]
    pub const fn age_group(&self) -> AgeGroup {
        AgeGroup::from_age(self.age)
    }

    /// Whether the profile is female
    #[must_use]
    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }

    /// Whether the profile is male
    #[must_use]
    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }
}
