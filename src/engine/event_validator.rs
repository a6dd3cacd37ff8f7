// ==========================================
// 拖缆清洁维护系统 - 维护事件校验器
// ==========================================
// 职责: 校验候选事件的拖缆编号/分段范围是否在有效拓扑内
// 编号: 对外 1-based, 工作段+尾段视为连续编号 1..=total_sections
// 规则: 全有全无, 不读取事件数据, 无副作用
// 起止顺序: 不重排; 两端独立校验, 顺序不影响结论
// ==========================================

use crate::domain::project::Project;
use crate::domain::topology::Topology;
use crate::engine::topology_resolver::TopologyResolver;
use serde::{Deserialize, Serialize};

// ==========================================
// ValidationResult - 校验结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub max_streamer: u32,
    pub max_section: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ==========================================
// EventValidator - 校验器
// ==========================================
pub struct EventValidator<'a> {
    global_defaults: &'a Topology,
    projects: &'a [Project],
}

impl<'a> EventValidator<'a> {
    pub fn new(global_defaults: &'a Topology, projects: &'a [Project]) -> Self {
        Self {
            global_defaults,
            projects,
        }
    }

    /// 校验候选事件
    ///
    /// # 参数
    /// - streamer_id: 拖缆编号 (1-based)
    /// - start_section / end_section: 分段编号 (1-based, 顺序不限)
    /// - project_number: 项目编号, 用于解析拓扑
    pub fn validate(
        &self,
        streamer_id: i64,
        start_section: i64,
        end_section: i64,
        project_number: Option<&str>,
    ) -> ValidationResult {
        let topology = TopologyResolver::resolve(self.global_defaults, self.projects, project_number);
        Self::validate_against(&topology, streamer_id, start_section, end_section)
    }

    /// 针对已解析拓扑校验
    pub fn validate_against(
        topology: &Topology,
        streamer_id: i64,
        start_section: i64,
        end_section: i64,
    ) -> ValidationResult {
        let max_streamer = topology.num_streamers;
        let max_section = topology.total_sections();

        let in_range = |value: i64, max: u32| value >= 1 && value <= i64::from(max);
        let valid = in_range(streamer_id, max_streamer)
            && in_range(start_section, max_section)
            && in_range(end_section, max_section);

        let message = if valid {
            None
        } else {
            tracing::debug!(
                streamer_id,
                start_section,
                end_section,
                max_streamer,
                max_section,
                "维护事件校验未通过"
            );
            Some(format!(
                "拖缆编号须在 1-{} 之间，分段编号须在 1-{} 之间",
                max_streamer, max_section
            ))
        };

        ValidationResult {
            valid,
            max_streamer,
            max_section,
            message,
        }
    }
}
