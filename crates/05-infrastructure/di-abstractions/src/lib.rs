//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件描述、注册请求和容器的核心接口。
//! 反射式注入在这里被替换为显式描述：每个实现类型通过 [`Component`]
//! 声明自己的构造函数和需要注入的属性，容器只解释这些描述。
//!
//! ## 核心接口
//!
//! - [`Component`] - 可由容器构造和注入的实现类型
//! - [`Provides`] - 实现类型到接口的转换
//! - [`Constructor`] / [`Parameter`] - 构造函数注入描述
//! - [`Property`] / [`Injected`] - 属性注入描述
//! - [`TypeDescriptor`] / [`ContainerModule`] - 自动注册清单
//! - [`DiContainer`] - 依赖注入容器接口

pub mod component;
pub mod container;
pub mod factory;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use component::*;
pub use container::*;
pub use factory::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;

pub use infrastructure_common::{DependencyError, DependencyResult, Lifetime, TypeInfo};
