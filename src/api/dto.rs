// ==========================================
// 拖缆清洁维护系统 - API 数据传输对象
// ==========================================
// 职责: API 层对外返回的值对象
// 序列化格式: camelCase
// ==========================================

use crate::domain::types::{AgeBucket, CleaningMethod, SectionType};
use crate::engine::stats::CleaningStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// EventDraft - 待写入事件 (UI 输入, 1-based 连续编号)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub streamer_id: i64,
    pub start_section: i64,
    pub end_section: i64,
    pub cleaning_method: CleaningMethod,
    pub cleaned_at: DateTime<Utc>,
    #[serde(default)]
    pub project_number: Option<String>,
    #[serde(default)]
    pub vessel_tag: String,
}

// ==========================================
// SectionRow - 单段概览
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRow {
    pub slot: usize,
    pub section_type: SectionType,
    pub index: u32,
    pub label: String,
    pub eb_range: String,
    pub channel_range: Option<(u64, u64)>,
    pub last_cleaned: Option<DateTime<Utc>>,
    pub days_since_cleaned: Option<i64>,
    pub age_bucket: AgeBucket,
}

// ==========================================
// EventRow - 事件历史行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub id: String,
    pub streamer_id: u32,
    pub section_type: SectionType,
    pub section_range: String, // 例: "AS01 - AS06" / "T1 - T3"
    pub eb_range: String,
    pub cleaning_method: CleaningMethod,
    pub cleaned_at: DateTime<Utc>,
    pub distance: u64,
    pub project_number: Option<String>,
}

// ==========================================
// CoverageSummary - 覆盖汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    pub stats: CleaningStats,
    pub total_available_sections: usize,
    pub total_active_sections: usize,
    pub total_tail_sections: usize,
    pub coverage_ratio: f64,
    pub active_coverage_ratio: f64,
    pub tail_coverage_ratio: f64,
    pub bucket_counts: BTreeMap<AgeBucket, usize>,
}
