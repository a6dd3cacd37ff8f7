// ==========================================
// 拖缆清洁维护系统 - 项目领域模型
// ==========================================
// 职责: 项目作用域 + 项目级拓扑覆写
// 生命周期: 创建后 project_number 不可变, is_active 由持久层切换
// ==========================================

use crate::domain::topology::TopologyOverride;
use serde::{Deserialize, Serialize};

// ==========================================
// Project - 勘探项目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_number: String, // 项目编号 (唯一键)
    #[serde(default)]
    pub vessel_tag: String, // 船舶标识

    // ===== 拓扑覆写 (null = 继承全局) =====
    #[serde(flatten)]
    pub overrides: TopologyOverride,

    #[serde(default)]
    pub is_active: bool, // 是否为当前激活项目
}

impl Project {
    /// 创建无覆写的项目
    pub fn new(project_number: impl Into<String>, vessel_tag: impl Into<String>) -> Self {
        Self {
            project_number: project_number.into(),
            vessel_tag: vessel_tag.into(),
            overrides: TopologyOverride::default(),
            is_active: false,
        }
    }

    /// 设置拓扑覆写
    pub fn with_overrides(mut self, overrides: TopologyOverride) -> Self {
        self.overrides = overrides;
        self
    }

    /// 设置激活状态
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}
