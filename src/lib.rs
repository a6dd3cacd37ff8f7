// ==========================================
// 拖缆清洁维护系统 - 核心库
// ==========================================
// 系统定位: 分段覆盖与维护核算引擎
// 输入: 请求时快照 (项目列表 + 清洁事件列表 + 全局默认拓扑)
// 输出: 拓扑、标签、最近清洁表、统计、校验结果等值对象
// 红线: 无 I/O, 无全局可变状态
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 全局默认拓扑
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 组合入口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    AgeBucket, CleaningEvent, CleaningMethod, Override, Project, SectionSpan, SectionType,
    Snapshot, Topology, TopologyOverride,
};

pub use engine::{
    CleaningStats, CoverageAggregator, DateRange, EventFilter, EventValidator, LastCleanedMap,
    ModuleLocator, ProjectScope, RecencyClassifier, SectionAddressing, StatsEngine,
    TopologyResolver, ValidationResult,
};

pub use api::{ApiError, ApiResult, MaintenanceApi};
pub use config::{ConfigError, TopologyConfig};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
