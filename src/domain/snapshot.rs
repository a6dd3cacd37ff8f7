// ==========================================
// 拖缆清洁维护系统 - 请求快照
// ==========================================
// 职责: 一次请求所需的只读数据 (项目列表 + 事件列表)
// 红线: 核心不持有全局可变状态, 每次调用传入完整快照
// ==========================================

use crate::domain::cleaning_event::CleaningEvent;
use crate::domain::project::Project;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub events: Vec<CleaningEvent>,
}

impl Snapshot {
    pub fn new(projects: Vec<Project>, events: Vec<CleaningEvent>) -> Self {
        Self { projects, events }
    }

    /// 按项目编号查找项目
    pub fn find_project(&self, project_number: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.project_number == project_number)
    }
}
