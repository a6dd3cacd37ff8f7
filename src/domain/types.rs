// ==========================================
// 拖缆清洁维护系统 - 领域类型定义
// ==========================================
// 职责: 分段类型、清洁方式、时效分档、覆写标记
// 红线: 纯值类型,不含业务计算
// ==========================================

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ==========================================
// 分段类型 (Section Type)
// ==========================================
// active: 带传感器通道的工作段
// tail: 尾段(固定5段,使用尾绳时为0),索引独立从0开始
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Active, // 工作段
    Tail,   // 尾段
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SectionType {
    /// 从字符串解析分段类型
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(SectionType::Active),
            "tail" => Some(SectionType::Tail),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Active => "active",
            SectionType::Tail => "tail",
        }
    }
}

// ==========================================
// 清洁方式 (Cleaning Method)
// ==========================================
// 序列化格式: kebab-case (rope / scraper / scraper-rope / scue / knife)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningMethod {
    Rope,        // 绳洗
    Scraper,     // 刮刀
    ScraperRope, // 刮刀+绳洗
    Scue,        // SCUE 清洁器
    Knife,       // 刀具
}

impl fmt::Display for CleaningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CleaningMethod {
    pub const ALL: [CleaningMethod; 5] = [
        CleaningMethod::Rope,
        CleaningMethod::Scraper,
        CleaningMethod::ScraperRope,
        CleaningMethod::Scue,
        CleaningMethod::Knife,
    ];

    /// 从字符串解析清洁方式
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rope" => Some(CleaningMethod::Rope),
            "scraper" => Some(CleaningMethod::Scraper),
            "scraper-rope" | "scraper_rope" => Some(CleaningMethod::ScraperRope),
            "scue" => Some(CleaningMethod::Scue),
            "knife" => Some(CleaningMethod::Knife),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CleaningMethod::Rope => "rope",
            CleaningMethod::Scraper => "scraper",
            CleaningMethod::ScraperRope => "scraper-rope",
            CleaningMethod::Scue => "scue",
            CleaningMethod::Knife => "knife",
        }
    }
}

// ==========================================
// 时效分档 (Age Bucket)
// ==========================================
// 顺序: Fresh < 4plus < 7plus < 10plus < 14plus < Never
// Never 排在最后: 从未清洁视为风险最高
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBucket {
    #[serde(rename = "fresh")]
    Fresh, // 0-3 天
    #[serde(rename = "4plus")]
    FourPlus, // 4-6 天
    #[serde(rename = "7plus")]
    SevenPlus, // 7-9 天
    #[serde(rename = "10plus")]
    TenPlus, // 10-13 天
    #[serde(rename = "14plus")]
    FourteenPlus, // >= 14 天
    #[serde(rename = "never")]
    Never, // 从未清洁
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 6] = [
        AgeBucket::Fresh,
        AgeBucket::FourPlus,
        AgeBucket::SevenPlus,
        AgeBucket::TenPlus,
        AgeBucket::FourteenPlus,
        AgeBucket::Never,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBucket::Fresh => "fresh",
            AgeBucket::FourPlus => "4plus",
            AgeBucket::SevenPlus => "7plus",
            AgeBucket::TenPlus => "10plus",
            AgeBucket::FourteenPlus => "14plus",
            AgeBucket::Never => "never",
        }
    }
}

// ==========================================
// 覆写标记 (Override)
// ==========================================
// 项目级拓扑字段: Inherit 继承全局默认, Set 完全替换
// 序列化为可空值: null / 缺省 => Inherit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Override<T> {
    #[default]
    Inherit,
    Set(T),
}

impl<T: Copy> Override<T> {
    /// 取覆写值,未覆写时取默认值
    pub fn or(&self, default: T) -> T {
        match self {
            Override::Inherit => default,
            Override::Set(v) => *v,
        }
    }
}

impl<T> Override<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Override::Set(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Override::Inherit => None,
            Override::Set(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for Override<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Override::Set(v),
            None => Override::Inherit,
        }
    }
}

impl<T: Serialize> Serialize for Override<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Override<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
