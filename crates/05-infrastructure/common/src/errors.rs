//! 错误类型定义

use crate::metadata::TypeInfo;
use thiserror::Error;

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("接口 {interface} 已注册实现类型 {implementation}")]
    DuplicateRegistration {
        interface: TypeInfo,
        implementation: TypeInfo,
    },

    #[error("接口 {interface} {}未注册", registration_name_message(.registration_name))]
    UnregisteredType {
        interface: TypeInfo,
        registration_name: Option<String>,
    },

    #[error("构造参数不匹配: {parameter}, 期望类型 {expected}")]
    ArgumentMismatch { parameter: String, expected: String },

    #[error("实例类型不匹配: 期望 {expected}, 实际 {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("构造函数循环依赖: {path}")]
    CyclicConstruction {
        implementation: TypeInfo,
        path: String,
    },
}

impl DependencyError {
    /// 创建重复注册错误
    pub fn duplicate_registration(interface: TypeInfo, implementation: TypeInfo) -> Self {
        Self::DuplicateRegistration {
            interface,
            implementation,
        }
    }

    /// 创建未注册错误
    pub fn unregistered_type(interface: TypeInfo, registration_name: Option<&str>) -> Self {
        Self::UnregisteredType {
            interface,
            registration_name: registration_name.map(str::to_string),
        }
    }

    /// 创建构造函数循环依赖错误，`path` 为从最外层开始的构造链
    pub fn cyclic_construction(implementation: TypeInfo, path: &[TypeInfo]) -> Self {
        let path = path
            .iter()
            .chain(std::iter::once(&implementation))
            .map(|info| info.name.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        Self::CyclicConstruction {
            implementation,
            path,
        }
    }

    /// 创建构造参数不匹配错误
    pub fn argument_mismatch(parameter: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::ArgumentMismatch {
            parameter: parameter.into(),
            expected: expected.into(),
        }
    }
}

fn registration_name_message(registration_name: &Option<String>) -> String {
    registration_name
        .as_ref()
        .map(|name| format!("(注册名 {name}) "))
        .unwrap_or_default()
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {message}")]
    ParseError { message: String },
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
