// ==========================================
// 拖缆清洁维护系统 - 拖缆拓扑领域模型
// ==========================================
// 职责: 拖缆数量、分段数、段长、模块(EB)间隔、通道数、尾段配置
// 红线: 拓扑是派生值,不持久化; 每次调用由解析器重新生成
// ==========================================

use crate::domain::types::{Override, SectionType};
use serde::{Deserialize, Serialize};

/// 未使用尾绳时的尾段数量
pub const TAIL_SECTION_COUNT: u32 = 5;

// ==========================================
// Topology - 有效拓扑
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    pub num_streamers: u32,         // 拖缆数量 (>=1)
    pub sections_per_streamer: u32, // 每缆工作段数 (>=1)
    pub section_length_meters: u32, // 段长 (m, >0)
    pub module_frequency: u32,      // 每隔多少段一个 EB 模块 (>=1)
    pub channels_per_section: u32,  // 每段通道数 (>=1)
    pub use_rope_for_tail: bool,    // 使用尾绳代替尾段
}

impl Topology {
    /// 尾段数量: 使用尾绳时为 0, 否则固定 5
    pub fn tail_section_count(&self) -> u32 {
        if self.use_rope_for_tail {
            0
        } else {
            TAIL_SECTION_COUNT
        }
    }

    /// 总段数 (工作段 + 尾段), 溢出时饱和到 u32::MAX
    pub fn total_sections(&self) -> u32 {
        self.sections_per_streamer
            .saturating_add(self.tail_section_count())
    }

    /// 指定分段类型的段数
    pub fn partition_len(&self, section_type: SectionType) -> u32 {
        match section_type {
            SectionType::Active => self.sections_per_streamer,
            SectionType::Tail => self.tail_section_count(),
        }
    }

    /// 分区内索引 -> 合并槽位索引 (工作段在前,尾段紧随其后)
    ///
    /// 越界时返回 None
    pub fn slot_index(&self, section_type: SectionType, index: u32) -> Option<usize> {
        if index >= self.partition_len(section_type) {
            return None;
        }
        let slot = match section_type {
            SectionType::Active => index,
            SectionType::Tail => self.sections_per_streamer.saturating_add(index),
        };
        Some(slot as usize)
    }

    /// 合并槽位索引 -> (分段类型, 分区内索引)
    pub fn partition_of_slot(&self, slot: usize) -> Option<(SectionType, u32)> {
        let slot = u32::try_from(slot).ok()?;
        if slot < self.sections_per_streamer {
            Some((SectionType::Active, slot))
        } else if slot < self.total_sections() {
            Some((SectionType::Tail, slot - self.sections_per_streamer))
        } else {
            None
        }
    }

    /// 拖缆编号是否有效 (1..=num_streamers)
    pub fn contains_streamer(&self, streamer_id: u32) -> bool {
        streamer_id >= 1 && streamer_id <= self.num_streamers
    }

    /// 检查所有计数字段 >= 1
    ///
    /// # 返回
    /// 第一个非法字段名
    pub fn first_invalid_field(&self) -> Option<&'static str> {
        if self.num_streamers == 0 {
            Some("numStreamers")
        } else if self.sections_per_streamer == 0 {
            Some("sectionsPerStreamer")
        } else if self.section_length_meters == 0 {
            Some("sectionLengthMeters")
        } else if self.module_frequency == 0 {
            Some("moduleFrequency")
        } else if self.channels_per_section == 0 {
            Some("channelsPerSection")
        } else {
            None
        }
    }
}

// ==========================================
// TopologyOverride - 项目级拓扑覆写
// ==========================================
// 逐字段覆写: Set 完全替换全局值, Inherit 继承
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopologyOverride {
    pub num_streamers: Override<u32>,
    pub sections_per_streamer: Override<u32>,
    pub section_length_meters: Override<u32>,
    pub module_frequency: Override<u32>,
    pub channels_per_section: Override<u32>,
    pub use_rope_for_tail: Override<bool>,
}

impl TopologyOverride {
    /// 将覆写应用到基础拓扑上
    pub fn apply_to(&self, base: &Topology) -> Topology {
        Topology {
            num_streamers: self.num_streamers.or(base.num_streamers),
            sections_per_streamer: self.sections_per_streamer.or(base.sections_per_streamer),
            section_length_meters: self.section_length_meters.or(base.section_length_meters),
            module_frequency: self.module_frequency.or(base.module_frequency),
            channels_per_section: self.channels_per_section.or(base.channels_per_section),
            use_rope_for_tail: self.use_rope_for_tail.or(base.use_rope_for_tail),
        }
    }

    /// 是否没有任何覆写
    pub fn is_empty(&self) -> bool {
        !(self.num_streamers.is_set()
            || self.sections_per_streamer.is_set()
            || self.section_length_meters.is_set()
            || self.module_frequency.is_set()
            || self.channels_per_section.is_set()
            || self.use_rope_for_tail.is_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Topology {
        Topology {
            num_streamers: 12,
            sections_per_streamer: 107,
            section_length_meters: 75,
            module_frequency: 4,
            channels_per_section: 6,
            use_rope_for_tail: false,
        }
    }

    #[test]
    fn test_total_sections_with_tail() {
        let t = base();
        assert_eq!(t.tail_section_count(), 5);
        assert_eq!(t.total_sections(), 112);
    }

    #[test]
    fn test_total_sections_with_rope() {
        let t = Topology {
            use_rope_for_tail: true,
            ..base()
        };
        assert_eq!(t.tail_section_count(), 0);
        assert_eq!(t.total_sections(), 107);
        assert_eq!(t.slot_index(SectionType::Tail, 0), None);
    }

    #[test]
    fn test_slot_index_round_trip_boundaries() {
        let t = base();
        assert_eq!(t.slot_index(SectionType::Active, 106), Some(106));
        assert_eq!(t.slot_index(SectionType::Active, 107), None);
        assert_eq!(t.slot_index(SectionType::Tail, 0), Some(107));
        assert_eq!(t.slot_index(SectionType::Tail, 4), Some(111));
        assert_eq!(t.slot_index(SectionType::Tail, 5), None);

        assert_eq!(t.partition_of_slot(107), Some((SectionType::Tail, 0)));
        assert_eq!(t.partition_of_slot(112), None);
    }

    #[test]
    fn test_override_deserializes_missing_and_null_as_inherit() {
        let json = r#"{ "sectionLengthMeters": 50, "moduleFrequency": null }"#;
        let ov: TopologyOverride = serde_json::from_str(json).unwrap();
        assert_eq!(ov.section_length_meters, Override::Set(50));
        assert_eq!(ov.module_frequency, Override::Inherit);
        assert_eq!(ov.num_streamers, Override::Inherit);

        let resolved = ov.apply_to(&base());
        assert_eq!(resolved.section_length_meters, 50);
        assert_eq!(resolved.module_frequency, 4);
    }

    #[test]
    fn test_huge_section_count_saturates() {
        let t = Topology {
            sections_per_streamer: u32::MAX,
            ..base()
        };
        assert_eq!(t.total_sections(), u32::MAX);
        assert_eq!(t.partition_of_slot(0), Some((SectionType::Active, 0)));
        assert_eq!(t.partition_of_slot(u32::MAX as usize), None);
    }

    #[test]
    fn test_first_invalid_field() {
        assert_eq!(base().first_invalid_field(), None);
        let bad = Topology {
            module_frequency: 0,
            ..base()
        };
        assert_eq!(bad.first_invalid_field(), Some("moduleFrequency"));
    }
}
