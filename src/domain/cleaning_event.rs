// ==========================================
// 拖缆清洁维护系统 - 清洁事件领域模型
// ==========================================
// 职责: 单次清洁记录 + 分段范围换算
// 索引约定: 内部 0-based, 仅 UI 边界(校验器/SectionSpan)使用 1-based
// ==========================================

use crate::domain::topology::Topology;
use crate::domain::types::{CleaningMethod, SectionType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// CleaningEvent - 清洁事件
// ==========================================
// 作用域: project_number 为 None 表示全局事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningEvent {
    pub id: String,                      // 事件ID
    pub streamer_id: u32,                // 拖缆编号 (1..=num_streamers)
    pub section_index_start: u32,        // 起始段 (0-based, 含)
    pub section_index_end: u32,          // 结束段 (0-based, 含)
    pub section_type: SectionType,       // 分段类型
    pub cleaning_method: CleaningMethod, // 清洁方式
    pub cleaned_at: DateTime<Utc>,       // 清洁时间
    #[serde(default)]
    pub project_number: Option<String>, // 项目编号 (None = 全局)
    #[serde(default)]
    pub vessel_tag: String, // 船舶标识
}

impl CleaningEvent {
    /// 创建新事件 (自动生成ID)
    pub fn new(
        streamer_id: u32,
        section_type: SectionType,
        section_index_start: u32,
        section_index_end: u32,
        cleaning_method: CleaningMethod,
        cleaned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            streamer_id,
            section_index_start,
            section_index_end,
            section_type,
            cleaning_method,
            cleaned_at,
            project_number: None,
            vessel_tag: String::new(),
        }
    }

    /// 设置项目作用域
    pub fn in_project(mut self, project_number: impl Into<String>) -> Self {
        self.project_number = Some(project_number.into());
        self
    }

    /// 设置船舶标识
    pub fn on_vessel(mut self, vessel_tag: impl Into<String>) -> Self {
        self.vessel_tag = vessel_tag.into();
        self
    }

    /// 是否为全局作用域事件
    pub fn is_global(&self) -> bool {
        self.project_number.is_none()
    }

    /// 覆盖段数 (start > end 时为 0)
    pub fn section_count(&self) -> u64 {
        if self.section_index_end < self.section_index_start {
            0
        } else {
            u64::from(self.section_index_end - self.section_index_start) + 1
        }
    }

    /// 分区内的起止索引
    ///
    /// 兼容旧数据: 部分尾段事件以 `sections_per_streamer + 偏移` 编码,
    /// 起始索引落在工作段范围之外时换算回尾段 0-based 索引
    pub fn partition_range(&self, topology: &Topology) -> (u32, u32) {
        let sps = topology.sections_per_streamer;
        match self.section_type {
            SectionType::Tail if self.section_index_start >= sps => (
                self.section_index_start - sps,
                self.section_index_end.saturating_sub(sps),
            ),
            _ => (self.section_index_start, self.section_index_end),
        }
    }

    /// 返回索引已规范化的事件副本
    pub fn normalized(&self, topology: &Topology) -> CleaningEvent {
        let (start, end) = self.partition_range(topology);
        CleaningEvent {
            section_index_start: start,
            section_index_end: end,
            ..self.clone()
        }
    }
}

// ==========================================
// SectionSpan - UI 范围拆分
// ==========================================
// UI 使用连续的 1-based 编号 (工作段 1..=sps, 尾段 sps+1..=total)
// 拆分为工作段/尾段两个 0-based 分区范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpan {
    pub active: Option<(u32, u32)>,
    pub tail: Option<(u32, u32)>,
}

impl SectionSpan {
    /// 从 1-based 连续编号拆分
    ///
    /// 起止顺序不限 (内部取 min/max); 超出总段数的部分被截断
    pub fn from_one_based(start: u32, end: u32, topology: &Topology) -> Self {
        let lo = start.min(end).max(1) - 1;
        let hi = start.max(end).max(1) - 1;
        let sps = topology.sections_per_streamer;
        let total = topology.total_sections();

        let active = if lo < sps {
            Some((lo, hi.min(sps - 1)))
        } else {
            None
        };

        let tail = if total > sps && hi >= sps && lo < total {
            let tail_lo = lo.max(sps) - sps;
            let tail_hi = hi.min(total - 1) - sps;
            Some((tail_lo, tail_hi))
        } else {
            None
        };

        Self { active, tail }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.tail.is_none()
    }

    /// 按分段类型遍历非空部分
    pub fn parts(&self) -> impl Iterator<Item = (SectionType, u32, u32)> {
        let active = self.active.map(|(s, e)| (SectionType::Active, s, e));
        let tail = self.tail.map(|(s, e)| (SectionType::Tail, s, e));
        active.into_iter().chain(tail)
    }
}
