// ABOUTME: Supplement catalog indexed once into demographic buckets by product name
// ABOUTME: Selects the candidate rows relevant to an age bracket, gender, and pregnancy flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSync

//! Supplement catalog indexer
//!
//! Rows are partitioned into [`DemographicBucket`]s when the catalog is built
//! and the partition is never touched again, so a catalog can be shared by
//! reference across concurrent requests. Buckets store row indices rather
//! than copies of the rows.

use nutrisync_core::models::{AgeGroup, DemographicBucket, Demographics, SupplementRecord};
use std::collections::BTreeMap;
use tracing::debug;

/// Bucket index: bucket to catalog row positions, in catalog order
pub type BucketIndex = BTreeMap<DemographicBucket, Vec<usize>>;

/// Immutable supplement catalog with its demographic partition
#[derive(Debug, Clone, Default)]
pub struct SupplementCatalog {
    records: Vec<SupplementRecord>,
    buckets: BucketIndex,
}

impl SupplementCatalog {
    /// Build the catalog and its bucket index
    #[must_use]
    pub fn new(records: Vec<SupplementRecord>) -> Self {
        let buckets = categorize(&records);
        debug!(
            total = records.len(),
            child = bucket_len(&buckets, DemographicBucket::Child),
            teen = bucket_len(&buckets, DemographicBucket::Teen),
            women = bucket_len(&buckets, DemographicBucket::Women),
            men = bucket_len(&buckets, DemographicBucket::Men),
            pregnancy = bucket_len(&buckets, DemographicBucket::Pregnancy),
            "Indexed supplement catalog"
        );
        Self { records, buckets }
    }

    /// All rows in catalog order
    #[must_use]
    pub fn records(&self) -> &[SupplementRecord] {
        &self.records
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows assigned to a bucket, in catalog order
    pub fn bucket(&self, bucket: DemographicBucket) -> impl Iterator<Item = &SupplementRecord> {
        self.buckets
            .get(&bucket)
            .into_iter()
            .flatten()
            .filter_map(|&index| self.records.get(index))
    }

    /// Candidate rows for a profile.
    ///
    /// Children and teens only see their own bucket. Adult women see the
    /// women bucket, followed by the pregnancy bucket when pregnant; adult
    /// men see the men bucket.
    #[must_use]
    pub fn relevant_supplements(&self, profile: &Demographics) -> Vec<&SupplementRecord> {
        let buckets: &[DemographicBucket] = match profile.age_group() {
            AgeGroup::Child => &[DemographicBucket::Child],
            AgeGroup::Teen => &[DemographicBucket::Teen],
            AgeGroup::Adult if profile.is_female() && profile.pregnant => {
                &[DemographicBucket::Women, DemographicBucket::Pregnancy]
            }
            AgeGroup::Adult if profile.is_female() => &[DemographicBucket::Women],
            AgeGroup::Adult => &[DemographicBucket::Men],
        };
        buckets
            .iter()
            .flat_map(|&bucket| self.bucket(bucket))
            .collect()
    }
}

/// Partition rows by the keywords in their names.
///
/// The first matching keyword group decides the bucket. Rows with no
/// keyword are generic and land in both the women and the men bucket.
#[must_use]
pub fn categorize(records: &[SupplementRecord]) -> BucketIndex {
    let mut buckets = BucketIndex::new();
    for (index, record) in records.iter().enumerate() {
        match DemographicBucket::from_product_name(&record.name) {
            Some(bucket) => buckets.entry(bucket).or_default().push(index),
            None => {
                buckets
                    .entry(DemographicBucket::Women)
                    .or_default()
                    .push(index);
                buckets.entry(DemographicBucket::Men).or_default().push(index);
            }
        }
    }
    buckets
}

fn bucket_len(buckets: &BucketIndex, bucket: DemographicBucket) -> usize {
    buckets.get(&bucket).map_or(0, Vec::len)
}
