//! 组合层配置

use di_abstractions::ContainerConfig;
use serde::{Deserialize, Deserializer};

/// 配置文件的完整结构
///
/// ```toml
/// [container]
/// cycle_guard_depth = 1
/// trace_resolutions = false
///
/// [logging]
/// level = "info"
/// json_format = false
/// ```
///
/// 省略 `[logging]` 时不初始化日志。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    /// 容器配置
    pub container: ContainerConfig,
    /// 日志配置
    pub logging: Option<LoggingConfig>,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(deserialize_with = "deserialize_level")]
    pub level: tracing::Level,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 创建开发环境日志配置
    pub fn development() -> Self {
        Self {
            level: tracing::Level::DEBUG,
            show_target: true,
            show_thread_ids: true,
            show_file: true,
            show_line_number: true,
            json_format: false,
        }
    }

    /// 创建生产环境日志配置
    pub fn production() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: false,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
            json_format: true,
        }
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<tracing::Level, D::Error>
where
    D: Deserializer<'de>,
{
    let level = String::deserialize(deserializer)?;
    level
        .parse()
        .map_err(|_| serde::de::Error::custom(format!("无效的日志级别: {level}")))
}
