// ==========================================
// 拖缆清洁维护系统 - 拓扑解析器
// ==========================================
// 职责: 全局默认 + 项目覆写 → 有效拓扑
// 规则: 逐字段合并, 非全有全无
// 红线: 全函数, 永不失败; 未知项目静默回退到全局默认
// ==========================================

use crate::domain::project::Project;
use crate::domain::topology::Topology;
use tracing::instrument;

// ==========================================
// TopologyResolver - 纯函数工具类
// ==========================================
pub struct TopologyResolver;

impl TopologyResolver {
    /// 解析有效拓扑
    ///
    /// # 规则
    /// - project_number 为空或找不到对应项目 → 原样返回全局默认
    /// - 否则逐字段: 项目覆写存在则使用覆写, 否则使用全局默认
    ///
    /// # 参数
    /// - global_defaults: 全局默认拓扑
    /// - projects: 项目列表
    /// - project_number: 项目编号 (可选)
    #[instrument(skip(global_defaults, projects), fields(projects = projects.len()))]
    pub fn resolve(
        global_defaults: &Topology,
        projects: &[Project],
        project_number: Option<&str>,
    ) -> Topology {
        let Some(project_number) = project_number else {
            return *global_defaults;
        };

        match projects.iter().find(|p| p.project_number == project_number) {
            Some(project) => project.overrides.apply_to(global_defaults),
            None => {
                tracing::debug!("项目不存在，使用全局默认拓扑");
                *global_defaults
            }
        }
    }

    /// 当前激活项目 (取列表中第一个 is_active 的项目)
    pub fn active_project(projects: &[Project]) -> Option<&Project> {
        projects.iter().find(|p| p.is_active)
    }

    /// 按激活项目解析有效拓扑; 无激活项目时返回全局默认
    pub fn resolve_active(global_defaults: &Topology, projects: &[Project]) -> Topology {
        let active = Self::active_project(projects).map(|p| p.project_number.as_str());
        Self::resolve(global_defaults, projects, active)
    }
}
