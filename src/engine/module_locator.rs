// ==========================================
// 拖缆清洁维护系统 - EB 模块定位
// ==========================================
// 职责: 工作段范围 → 设备箱 (EB) 模块范围标签
// 模块位置 (1-based 段号 n, 1..=sections_per_streamer):
//   - n = 1 (首)
//   - n > 1 且 (n-1) mod module_frequency = 0 (常规)
//   - n = sections_per_streamer (尾)
//   同一位置只计一个模块
// 模块编号: floor((n-1) / module_frequency) + 1
// ==========================================

use crate::domain::cleaning_event::CleaningEvent;
use crate::domain::topology::Topology;
use crate::domain::types::SectionType;
use serde::{Deserialize, Serialize};

/// 无法定位模块
pub const NO_MODULE: &str = "-";
/// 尾段事件不适用 EB 范围
pub const NOT_APPLICABLE: &str = "—";
/// 范围之后没有模块时, 以尾部适配器作为上界
pub const TAIL_ADAPTOR: &str = "Tail Adaptor";

// ==========================================
// ModulePosition - 模块位置
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePosition {
    pub section: u32, // 所在段号 (1-based)
    pub number: u32,  // 模块编号
}

impl ModulePosition {
    pub fn label(&self) -> String {
        ModuleLocator::module_label(self.number)
    }
}

pub struct ModuleLocator;

impl ModuleLocator {
    /// 模块标签 "EB" + 两位补零编号
    pub fn module_label(number: u32) -> String {
        format!("EB{:02}", number)
    }

    /// 段号 n (1-based) 对应的模块编号
    pub fn module_number(section: u32, module_frequency: u32) -> u32 {
        section.saturating_sub(1) / module_frequency.max(1) + 1
    }

    /// 工作段上的全部模块位置 (按段号升序, 无重复)
    pub fn module_positions(topology: &Topology) -> Vec<ModulePosition> {
        let sps = topology.sections_per_streamer;
        let freq = topology.module_frequency.max(1);

        (1..=sps)
            .filter(|&n| n == 1 || (n - 1) % freq == 0 || n == sps)
            .map(|n| ModulePosition {
                section: n,
                number: Self::module_number(n, freq),
            })
            .collect()
    }

    /// EB 范围标签
    ///
    /// # 参数
    /// - start_section / end_section: 工作段 0-based 索引 (顺序不限)
    ///
    /// # 规则
    /// 1. 范围内存在模块 → "EB最大 - EB最小" (仅一个编号时只返回该标签)
    /// 2. 范围落在两个模块之间 → 取起点之前最近模块 before, 终点之后最近模块 after:
    ///    - 两者都有 → "EBafter - EBbefore"
    ///    - 只有 before → "Tail Adaptor - EBbefore"
    ///    - 只有 after → "EBafter"
    ///    - 都没有 → "-"
    pub fn eb_range(start_section: u32, end_section: u32, topology: &Topology) -> String {
        let first = start_section.min(end_section).saturating_add(1);
        let last = start_section.max(end_section).saturating_add(1);
        let positions = Self::module_positions(topology);

        let inside = positions
            .iter()
            .filter(|p| p.section >= first && p.section <= last)
            .map(|p| p.number);
        let lowest = inside.clone().min();
        let highest = inside.max();

        if let (Some(lowest), Some(highest)) = (lowest, highest) {
            return if lowest == highest {
                Self::module_label(highest)
            } else {
                format!(
                    "{} - {}",
                    Self::module_label(highest),
                    Self::module_label(lowest)
                )
            };
        }

        let before = positions.iter().rev().find(|p| p.section < first);
        let after = positions.iter().find(|p| p.section > last);

        match (before, after) {
            (Some(before), Some(after)) => format!("{} - {}", after.label(), before.label()),
            (Some(before), None) => format!("{} - {}", TAIL_ADAPTOR, before.label()),
            (None, Some(after)) => after.label(),
            (None, None) => NO_MODULE.to_string(),
        }
    }

    /// 事件的 EB 范围标签; 尾段事件返回 "—"
    pub fn eb_range_for_event(event: &CleaningEvent, topology: &Topology) -> String {
        match event.section_type {
            SectionType::Active => {
                Self::eb_range(event.section_index_start, event.section_index_end, topology)
            }
            SectionType::Tail => NOT_APPLICABLE.to_string(),
        }
    }
}
