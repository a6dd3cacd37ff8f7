// ==========================================
// 拖缆清洁维护系统 - 分段编址
// ==========================================
// 职责: 分段索引 → 显示标签 / 通道范围
// 标签: 工作段 AS01..AS107, 尾段 T1..T5 (两者互不重叠)
// ==========================================

use crate::domain::topology::Topology;
use crate::domain::types::SectionType;

pub struct SectionAddressing;

impl SectionAddressing {
    /// 分段显示标签
    ///
    /// # 规则
    /// - 工作段 i → "AS" + 两位补零(i+1)
    /// - 尾段 i → "T" + (i+1)
    pub fn section_label(index: u32, section_type: SectionType) -> String {
        match section_type {
            SectionType::Active => format!("AS{:02}", u64::from(index) + 1),
            SectionType::Tail => format!("T{}", u64::from(index) + 1),
        }
    }

    /// 合并槽位的显示标签
    pub fn slot_label(slot: usize, topology: &Topology) -> Option<String> {
        topology
            .partition_of_slot(slot)
            .map(|(section_type, index)| Self::section_label(index, section_type))
    }

    /// 工作段通道范围 (1-based, 含两端)
    ///
    /// # 规则
    /// - start = index * channels_per_section + 1
    /// - end = start + channels_per_section - 1
    ///
    /// 尾段无通道, 调用方传入尾段时应使用 [`Self::channel_range_for`]
    pub fn channel_range(active_index: u32, topology: &Topology) -> (u64, u64) {
        let per_section = u64::from(topology.channels_per_section.max(1));
        let start = u64::from(active_index) * per_section + 1;
        (start, start + per_section - 1)
    }

    /// 按分段类型取通道范围, 尾段返回 None
    pub fn channel_range_for(
        index: u32,
        section_type: SectionType,
        topology: &Topology,
    ) -> Option<(u64, u64)> {
        match section_type {
            SectionType::Active => Some(Self::channel_range(index, topology)),
            SectionType::Tail => None,
        }
    }
}
