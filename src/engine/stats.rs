// ==========================================
// 拖缆清洁维护系统 - 清洁统计
// ==========================================
// 职责: 事件快照 → 汇总统计
// 口径:
//   total_events = 命中过滤的事件数
//   total_distance = Σ (end - start + 1) * section_length_meters
//   unique/active/tail_cleaned_sections = 最近清洁表中非空槽位数
//   by_method_distance = 按清洁方式汇总距离
// 覆盖率 (cleaned / total) 由调用方计算
// ==========================================

use crate::domain::cleaning_event::CleaningEvent;
use crate::domain::topology::Topology;
use crate::domain::types::CleaningMethod;
use crate::engine::coverage::{CoverageAggregator, EventFilter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// CleaningStats - 汇总统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningStats {
    pub total_events: usize,
    pub total_distance: u64, // 米
    pub unique_cleaned_sections: usize,
    pub active_cleaned_sections: usize,
    pub tail_cleaned_sections: usize,
    pub by_method_distance: BTreeMap<CleaningMethod, u64>,
}

pub struct StatsEngine;

impl StatsEngine {
    /// 计算汇总统计
    #[instrument(skip(events, topology, filter), fields(events = events.len()))]
    pub fn compute_stats(
        events: &[CleaningEvent],
        topology: &Topology,
        filter: &EventFilter,
    ) -> CleaningStats {
        let section_length = u64::from(topology.section_length_meters);

        let mut total_events = 0;
        let mut total_distance = 0u64;
        let mut by_method_distance: BTreeMap<CleaningMethod, u64> = BTreeMap::new();

        for event in CoverageAggregator::matching(events, filter) {
            let distance = event.section_count() * section_length;
            total_events += 1;
            total_distance += distance;
            *by_method_distance.entry(event.cleaning_method).or_insert(0) += distance;
        }

        let map = CoverageAggregator::last_cleaned_map(events, topology, filter);
        let (active_cleaned_sections, tail_cleaned_sections) = map
            .values()
            .map(|row| CoverageAggregator::partition_counts(row, topology))
            .fold((0, 0), |(a, t), (row_a, row_t)| (a + row_a, t + row_t));

        tracing::debug!(
            total_events,
            total_distance,
            active_cleaned_sections,
            tail_cleaned_sections,
            "清洁统计完成"
        );

        CleaningStats {
            total_events,
            total_distance,
            unique_cleaned_sections: active_cleaned_sections + tail_cleaned_sections,
            active_cleaned_sections,
            tail_cleaned_sections,
            by_method_distance,
        }
    }
}
