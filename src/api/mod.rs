// ==========================================
// 拖缆清洁维护系统 - API 层
// ==========================================
// 职责: 面向外部接口层的组合入口, 将引擎结果组装为 DTO
// 鉴权/持久化/HTTP 路由由外部系统负责
// ==========================================

pub mod dto;
pub mod error;
pub mod maintenance_api;

// 重导出核心类型
pub use dto::{CoverageSummary, EventDraft, EventRow, SectionRow};
pub use error::{ApiError, ApiResult};
pub use maintenance_api::MaintenanceApi;
