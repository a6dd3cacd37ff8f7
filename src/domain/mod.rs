// ==========================================
// 拖缆清洁维护系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、值类型
// 红线: 不含 I/O, 不含引擎逻辑
// ==========================================

pub mod cleaning_event;
pub mod project;
pub mod snapshot;
pub mod topology;
pub mod types;

// 重导出核心类型
pub use cleaning_event::{CleaningEvent, SectionSpan};
pub use project::Project;
pub use snapshot::Snapshot;
pub use topology::{Topology, TopologyOverride, TAIL_SECTION_COUNT};
pub use types::{AgeBucket, CleaningMethod, Override, SectionType};
