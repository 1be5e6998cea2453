//! 组件注册抽象
//!
//! 注册选项、注册请求以及注册表条目的只读视图

use crate::component::Provides;
use crate::factory::Activator;
use crate::resolver::Instance;
use infrastructure_common::{Lifetime, TypeInfo};
use std::fmt;
use std::sync::Arc;

/// 注册键
///
/// 同一接口下，解析后的注册名必须唯一。
/// 未显式指定注册名时使用实现类型的短名称。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationKey {
    pub interface: TypeInfo,
    pub name: String,
    pub priority: i32,
    pub lifetime: Lifetime,
}

impl RegistrationKey {
    /// 创建注册键，`name` 为空时回退到实现类型名称
    pub fn new(
        interface: TypeInfo,
        implementation: &TypeInfo,
        name: Option<&str>,
        priority: i32,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            interface,
            name: name.map_or_else(|| implementation.name.clone(), str::to_string),
            priority,
            lifetime,
        }
    }

    /// 是否匹配指定接口和注册名
    pub fn matches(&self, interface: &TypeInfo, name: Option<&str>) -> bool {
        self.interface == *interface && name.map_or(true, |name| self.name == name)
    }
}

/// 已注册组件的描述信息
#[derive(Debug, Clone)]
pub struct RegistrationInfo {
    pub key: RegistrationKey,
    pub implementation: TypeInfo,
    pub has_instance: bool,
}

/// 注册选项
///
/// 默认值：单例、无预置实例、优先级 0、无注册名。
pub struct RegisterOptions<T> {
    pub lifetime: Lifetime,
    pub instance: Option<Arc<T>>,
    pub priority: i32,
    pub name: Option<String>,
}

impl<T> RegisterOptions<T> {
    /// 默认选项
    pub fn new() -> Self {
        Self::default()
    }

    /// 单例注册
    pub fn singleton() -> Self {
        Self::new().with_lifetime(Lifetime::Singleton)
    }

    /// 瞬时注册
    pub fn transient() -> Self {
        Self::new().with_lifetime(Lifetime::Transient)
    }

    /// 设置生命周期
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// 设置预置实例，瞬时注册会丢弃它
    pub fn with_instance(mut self, instance: impl Into<Arc<T>>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// 设置优先级，数值越小越优先
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// 设置注册名
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<T> Default for RegisterOptions<T> {
    fn default() -> Self {
        Self {
            lifetime: Lifetime::Singleton,
            instance: None,
            priority: 0,
            name: None,
        }
    }
}

impl<T> fmt::Debug for RegisterOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterOptions")
            .field("lifetime", &self.lifetime)
            .field("has_instance", &self.instance.is_some())
            .field("priority", &self.priority)
            .field("name", &self.name)
            .finish()
    }
}

/// 类型擦除后的注册请求
///
/// 显式注册和自动注册扫描都会产生注册请求，由容器统一处理。
#[derive(Debug)]
pub struct RegistrationRequest {
    pub activator: Activator,
    pub lifetime: Lifetime,
    pub instance: Option<Instance>,
    pub priority: i32,
    pub name: Option<String>,
}

impl RegistrationRequest {
    /// 以接口 `I` 注册实现 `T`
    pub fn new<I, T>(options: RegisterOptions<T>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
        T: Provides<I>,
    {
        Self {
            activator: Activator::of::<I, T>(),
            lifetime: options.lifetime,
            instance: options.instance.map(Instance::new::<I, T>),
            priority: options.priority,
            name: options.name,
        }
    }

    /// 接口类型
    pub fn interface(&self) -> &TypeInfo {
        self.activator.interface()
    }

    /// 实现类型
    pub fn implementation(&self) -> &TypeInfo {
        self.activator.implementation()
    }

    /// 生成注册键
    pub fn key(&self) -> RegistrationKey {
        RegistrationKey::new(
            self.interface().clone(),
            self.implementation(),
            self.name.as_deref(),
            self.priority,
            self.lifetime,
        )
    }
}
