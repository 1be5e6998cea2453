//! 组件扫描器抽象接口
//!
//! 运行时没有反射，模块通过 [`ContainerModule`] 列出自己包含的类型，
//! 扫描器只处理带有 [`AutoRegister`] 标记的类型。

use crate::component::{Component, Provides};
use crate::factory::Activator;
use crate::registry::RegistrationRequest;
use infrastructure_common::{Lifetime, TypeInfo};
use std::fmt;

/// 自动注册标记
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoRegister {
    pub lifetime: Lifetime,
    pub priority: i32,
    pub name: Option<String>,
}

impl AutoRegister {
    /// 以指定生命周期创建标记
    pub fn new(lifetime: Lifetime) -> Self {
        Self {
            lifetime,
            ..Self::default()
        }
    }

    /// 设置优先级
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

impl Default for AutoRegister {
    fn default() -> Self {
        Self {
            lifetime: Lifetime::Singleton,
            priority: 0,
            name: None,
        }
    }
}

/// 自动注册信息：标记、接口以及实现的工厂
#[derive(Clone)]
pub struct AutoRegistration {
    interface: TypeInfo,
    marker: AutoRegister,
    activator: fn() -> Activator,
}

impl AutoRegistration {
    /// 接口类型
    pub fn interface(&self) -> &TypeInfo {
        &self.interface
    }

    /// 自动注册标记
    pub fn marker(&self) -> &AutoRegister {
        &self.marker
    }

    /// 生成不带预置实例的注册请求
    pub fn request(&self) -> RegistrationRequest {
        RegistrationRequest {
            activator: (self.activator)(),
            lifetime: self.marker.lifetime,
            instance: None,
            priority: self.marker.priority,
            name: self.marker.name.clone(),
        }
    }
}

impl fmt::Debug for AutoRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoRegistration")
            .field("interface", &self.interface)
            .field("marker", &self.marker)
            .finish()
    }
}

/// 模块中的类型描述
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    type_info: TypeInfo,
    auto_registration: Option<AutoRegistration>,
}

impl TypeDescriptor {
    /// 不带自动注册标记的类型
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            auto_registration: None,
        }
    }

    /// 带自动注册标记的类型，注册到接口 `I`
    pub fn auto_registered<I, T>(marker: AutoRegister) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
        T: Provides<I>,
    {
        Self {
            type_info: TypeInfo::of::<T>(),
            auto_registration: Some(AutoRegistration {
                interface: TypeInfo::of::<I>(),
                marker,
                activator: Activator::of::<I, T>,
            }),
        }
    }

    /// 类型信息
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 自动注册信息
    pub fn auto_registration(&self) -> Option<&AutoRegistration> {
        self.auto_registration.as_ref()
    }
}

/// 带自动注册标记的组件
///
/// 由 `#[derive(Component)]` 在遇到 `#[auto_register(...)]` 时生成。
pub trait AutoRegistered: Component {
    /// 该类型的描述
    fn descriptor() -> TypeDescriptor;
}

/// 容器模块
///
/// 模块列出自己包含的类型，相当于一个可扫描的程序集清单。
pub trait ContainerModule {
    /// 模块名称
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// 模块中的所有类型
    fn descriptors(&self) -> Vec<TypeDescriptor>;
}

/// 组件扫描器 trait
///
/// 把模块中的类型描述转换为注册请求
pub trait ComponentScanner: Send + Sync {
    /// 扫描器名称
    fn name(&self) -> &str;

    /// 扫描模块
    fn scan(&self, module: &dyn ContainerModule) -> Vec<RegistrationRequest>;
}
