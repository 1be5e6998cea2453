//! # Infrastructure Common
//!
//! 这个 crate 提供了 Lorn Injector 各层共享的基础类型。
//!
//! ## 核心类型
//!
//! - [`DependencyError`] - 注册与解析错误
//! - [`TypeInfo`] - 类型标识（同时支持具体类型与 `dyn Trait`）
//! - [`Lifetime`] - 组件生命周期
//!
//! ## 设计原则
//!
//! - 容器是显式构造的值，不存在全局注册表
//! - 错误在失败点同步返回，不做重试或降级

pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
