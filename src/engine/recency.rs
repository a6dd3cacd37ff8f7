// ==========================================
// 拖缆清洁维护系统 - 清洁时效分档
// ==========================================
// 职责: 距上次清洁天数 → 时效分档
// 分档 (等级制):
//   None → never
//   <= 3 → fresh (含 0 及负数)
//   4..=6 → 4plus
//   7..=9 → 7plus
//   10..=13 → 10plus
//   >= 14 → 14plus
// ==========================================

use crate::domain::types::AgeBucket;
use crate::engine::coverage::LastCleanedMap;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const SECONDS_PER_DAY: i64 = 86_400;

pub struct RecencyClassifier;

impl RecencyClassifier {
    /// 时效分档
    pub fn age_bucket(days: Option<i64>) -> AgeBucket {
        match days {
            None => AgeBucket::Never,
            Some(d) if d <= 3 => AgeBucket::Fresh,
            Some(d) if d <= 6 => AgeBucket::FourPlus,
            Some(d) if d <= 9 => AgeBucket::SevenPlus,
            Some(d) if d <= 13 => AgeBucket::TenPlus,
            Some(_) => AgeBucket::FourteenPlus,
        }
    }

    /// 距上次清洁的整天数 (向下取整)
    ///
    /// reference 早于 cleaned_at 时结果为负
    pub fn days_since(reference: DateTime<Utc>, cleaned_at: DateTime<Utc>) -> i64 {
        reference
            .signed_duration_since(cleaned_at)
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY)
    }

    /// 单个槽位的分档
    pub fn classify(reference: DateTime<Utc>, last_cleaned: Option<DateTime<Utc>>) -> AgeBucket {
        Self::age_bucket(last_cleaned.map(|at| Self::days_since(reference, at)))
    }

    /// 全表分档
    pub fn age_matrix(
        map: &LastCleanedMap,
        reference: DateTime<Utc>,
    ) -> BTreeMap<u32, Vec<AgeBucket>> {
        map.iter()
            .map(|(&streamer_id, row)| {
                let buckets = row
                    .iter()
                    .map(|cell| Self::classify(reference, *cell))
                    .collect();
                (streamer_id, buckets)
            })
            .collect()
    }

    /// 各分档槽位数 (所有分档均出现, 无槽位时为 0)
    pub fn bucket_counts(
        map: &LastCleanedMap,
        reference: DateTime<Utc>,
    ) -> BTreeMap<AgeBucket, usize> {
        let mut counts: BTreeMap<AgeBucket, usize> =
            AgeBucket::ALL.iter().map(|&bucket| (bucket, 0)).collect();

        for cell in map.values().flatten() {
            *counts.entry(Self::classify(reference, *cell)).or_insert(0) += 1;
        }

        counts
    }
}
