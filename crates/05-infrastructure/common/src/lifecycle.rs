//! 组件生命周期

use serde::{Deserialize, Serialize};
use std::fmt;

/// 组件生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// 单例模式 - 注册时创建实例，每次解析返回同一个实例
    #[default]
    Singleton,
    /// 瞬时模式 - 每次解析都创建新实例，注册时提供的实例会被忽略
    Transient,
}

impl Lifetime {
    /// 是否为单例
    pub fn is_singleton(self) -> bool {
        matches!(self, Self::Singleton)
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton => f.write_str("singleton"),
            Self::Transient => f.write_str("transient"),
        }
    }
}
