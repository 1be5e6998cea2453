//! # 依赖注入具体实现
//!
//! 提供具体的依赖注入容器、组件注册表、解析器和属性注入器实现
//!
//! - [`Registry`] - 接口到实现列表的注册表，负责重复检测和优先级查找
//! - [`Resolution`] - 单次解析过程：生命周期策略、构造函数参数解析和属性注入
//! - [`AutoRegistrationScanner`] - 按自动注册标记扫描模块
//! - [`DiContainerImpl`] - 容器实现

pub mod container;
pub mod injector;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use container::DiContainerImpl;
pub use registry::{RegistrationRecord, Registry, RegistryEntry};
pub use resolver::Resolution;
pub use scanner::AutoRegistrationScanner;
