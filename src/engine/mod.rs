// ==========================================
// 拖缆清洁维护系统 - 引擎层
// ==========================================
// 职责: 分段覆盖与维护核算的纯逻辑
// 红线: 无 I/O, 无全局可变状态; 相同输入必须得到相同输出
// ==========================================

pub mod coverage;
pub mod event_validator;
pub mod module_locator;
pub mod recency;
pub mod section_addressing;
pub mod stats;
pub mod topology_resolver;

// 重导出核心引擎
pub use coverage::{CoverageAggregator, DateRange, EventFilter, LastCleanedMap, ProjectScope};
pub use event_validator::{EventValidator, ValidationResult};
pub use module_locator::{ModuleLocator, ModulePosition};
pub use recency::RecencyClassifier;
pub use section_addressing::SectionAddressing;
pub use stats::{CleaningStats, StatsEngine};
pub use topology_resolver::TopologyResolver;
