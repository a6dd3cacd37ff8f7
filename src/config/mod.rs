// ==========================================
// 拖缆清洁维护系统 - 配置层
// ==========================================
// 职责: 全局默认拓扑的构造与校验
// 项目级覆写由 engine::TopologyResolver 合并
// ==========================================

pub mod error;
pub mod topology_config;

pub use error::{ConfigError, ConfigResult};
pub use topology_config::{config_keys, TopologyConfig};
