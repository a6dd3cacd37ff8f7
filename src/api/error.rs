// ==========================================
// 拖缆清洁维护系统 - API层错误类型
// ==========================================
// 职责: 将引擎结构化结果映射为调用方可见的错误
// 引擎本身不抛错, 校验失败以 ValidationResult 返回, 由本层转换
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("数据验证失败: {0}")]
    ValidationError(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ApiError::ValidationError("拖缆编号须在 1-12 之间".to_string());
        assert_eq!(err.to_string(), "数据验证失败: 拖缆编号须在 1-12 之间");

        let err: ApiError = ConfigError::InvalidValue {
            field: "numStreamers".to_string(),
        }
        .into();
        assert!(err.to_string().contains("numStreamers"));
    }
}
