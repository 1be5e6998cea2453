//! # 容器组合层
//!
//! 把配置、日志和组件模块组装成一个可用的依赖注入容器。
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use di_abstractions::{ContainerModule, TypeDescriptor};
//! use infrastructure_composition::{ContainerBuilder, LoggingConfig};
//!
//! struct AppModule;
//!
//! impl ContainerModule for AppModule {
//!     fn descriptors(&self) -> Vec<TypeDescriptor> {
//!         Vec::new()
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let container = ContainerBuilder::new()
//!         .with_config_toml("./injector.toml")?
//!         .with_logging(LoggingConfig::development())
//!         .add_module(Box::new(AppModule))
//!         .build()?;
//!
//!     println!("已注册 {} 个组件", container.len());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;

pub use builder::ContainerBuilder;
pub use config::{CompositionConfig, LoggingConfig};

// 重新导出错误类型
pub use infrastructure_common::{InfrastructureError, InfrastructureResult};
