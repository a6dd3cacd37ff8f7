// ==========================================
// 拖缆清洁维护系统 - 全局拓扑默认值
// ==========================================
// 职责: 构造全局默认 Topology (内置值 / 键值表 / JSON 文件)
// 存储: 由外部持久层提供, 本模块不做 I/O 以外的持久化
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::topology::Topology;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const NUM_STREAMERS: &str = "num_streamers";
    pub const SECTIONS_PER_STREAMER: &str = "sections_per_streamer";
    pub const SECTION_LENGTH_METERS: &str = "section_length_meters";
    pub const MODULE_FREQUENCY: &str = "module_frequency";
    pub const CHANNELS_PER_SECTION: &str = "channels_per_section";
    pub const USE_ROPE_FOR_TAIL: &str = "use_rope_for_tail";
}

// ==========================================
// TopologyConfig - 全局默认值加载器
// ==========================================
pub struct TopologyConfig;

impl TopologyConfig {
    /// 内置默认拓扑
    ///
    /// 12 缆 x 107 段, 段长 75m, 每 4 段一个 EB, 每段 6 通道, 带尾段
    pub fn builtin_defaults() -> Topology {
        Topology {
            num_streamers: 12,
            sections_per_streamer: 107,
            section_length_meters: 75,
            module_frequency: 4,
            channels_per_section: 6,
            use_rope_for_tail: false,
        }
    }

    /// 从键值表构造 (与 config_kv 表同构)
    ///
    /// # 规则
    /// - 键缺失 → 使用内置默认值
    /// - 值无法解析或为 0 → 记录警告, 使用内置默认值
    ///
    /// 永不失败
    pub fn from_kv(values: &HashMap<String, String>) -> Topology {
        let defaults = Self::builtin_defaults();

        Topology {
            num_streamers: read_count(values, config_keys::NUM_STREAMERS, defaults.num_streamers),
            sections_per_streamer: read_count(
                values,
                config_keys::SECTIONS_PER_STREAMER,
                defaults.sections_per_streamer,
            ),
            section_length_meters: read_count(
                values,
                config_keys::SECTION_LENGTH_METERS,
                defaults.section_length_meters,
            ),
            module_frequency: read_count(
                values,
                config_keys::MODULE_FREQUENCY,
                defaults.module_frequency,
            ),
            channels_per_section: read_count(
                values,
                config_keys::CHANNELS_PER_SECTION,
                defaults.channels_per_section,
            ),
            use_rope_for_tail: read_bool(
                values,
                config_keys::USE_ROPE_FOR_TAIL,
                defaults.use_rope_for_tail,
            ),
        }
    }

    /// 从 JSON 字符串严格加载
    pub fn from_json_str(raw: &str) -> ConfigResult<Topology> {
        let topology: Topology = serde_json::from_str(raw)?;
        Self::check(&topology)?;
        Ok(topology)
    }

    /// 从 JSON 文件严格加载
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Topology> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let topology = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), ?topology, "已加载全局拓扑配置");
        Ok(topology)
    }

    /// 校验计数字段
    pub fn check(topology: &Topology) -> ConfigResult<()> {
        match topology.first_invalid_field() {
            Some(field) => Err(ConfigError::InvalidValue {
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn read_count(values: &HashMap<String, String>, key: &str, default: u32) -> u32 {
    match parse_value::<u32>(values, key) {
        Some(Ok(v)) if v >= 1 => v,
        Some(_) => {
            tracing::warn!(
                config_key = key,
                raw_value = values.get(key).map(String::as_str).unwrap_or_default(),
                default,
                "拓扑配置值非法，使用默认值"
            );
            default
        }
        None => default,
    }
}

fn read_bool(values: &HashMap<String, String>, key: &str, default: bool) -> bool {
    let Some(raw) = values.get(key) else {
        return default;
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        _ => {
            tracing::warn!(config_key = key, raw_value = %raw, default, "拓扑配置值非法，使用默认值");
            default
        }
    }
}

fn parse_value<T: FromStr>(
    values: &HashMap<String, String>,
    key: &str,
) -> Option<Result<T, T::Err>> {
    values.get(key).map(|raw| raw.trim().parse::<T>())
}
