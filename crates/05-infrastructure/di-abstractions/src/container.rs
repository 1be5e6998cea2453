//! 依赖注入容器抽象接口
//!
//! 提供依赖注入容器的核心抽象

use crate::component::Provides;
use crate::registry::{RegisterOptions, RegistrationInfo, RegistrationRequest};
use crate::resolver::Instance;
use crate::scanner::ContainerModule;
use infrastructure_common::{DependencyResult, TypeInfo};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 属性注入时同一具体类型允许的最大访问次数，超过后停止继续注入
    pub cycle_guard_depth: usize,
    /// 是否以 trace 级别记录每一步解析
    pub trace_resolutions: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            cycle_guard_depth: 1,
            trace_resolutions: false,
        }
    }
}

/// 依赖注入容器 trait
///
/// 类型擦除的方法构成对象安全的核心，泛型方法基于它们提供。
pub trait DiContainer: Send + Sync {
    /// 处理注册请求
    fn register_activator(&self, request: RegistrationRequest) -> DependencyResult<()>;

    /// 按接口和可选的注册名解析实例，并完成属性注入
    fn resolve_instance(
        &self,
        interface: &TypeInfo,
        registration_name: Option<&str>,
    ) -> DependencyResult<Instance>;

    /// 扫描模块，注册所有带自动注册标记的类型，返回注册数量
    fn initialize(&self, module: &dyn ContainerModule) -> DependencyResult<usize>;

    /// 清空所有注册
    fn clear(&self);

    /// 检查接口是否已注册
    fn is_registered_by_type(&self, interface: &TypeInfo, registration_name: Option<&str>)
        -> bool;

    /// 获取所有注册信息
    fn registrations(&self) -> Vec<RegistrationInfo>;

    /// 以接口 `I` 注册实现 `T`
    fn register<I, T>(&self, options: RegisterOptions<T>) -> DependencyResult<()>
    where
        Self: Sized,
        I: ?Sized + Send + Sync + 'static,
        T: Provides<I>,
    {
        self.register_activator(RegistrationRequest::new::<I, T>(options))
    }

    /// 解析接口 `I`，多个实现时取优先级最高者
    fn resolve<I>(&self) -> DependencyResult<Arc<I>>
    where
        Self: Sized,
        I: ?Sized + Send + Sync + 'static,
    {
        self.resolve_instance(&TypeInfo::of::<I>(), None)?
            .downcast::<I>()
    }

    /// 按注册名解析接口 `I`
    fn resolve_named<I>(&self, registration_name: &str) -> DependencyResult<Arc<I>>
    where
        Self: Sized,
        I: ?Sized + Send + Sync + 'static,
    {
        self.resolve_instance(&TypeInfo::of::<I>(), Some(registration_name))?
            .downcast::<I>()
    }

    /// 检查接口 `I` 是否已注册
    fn is_registered<I>(&self, registration_name: Option<&str>) -> bool
    where
        Self: Sized,
        I: ?Sized + 'static,
    {
        self.is_registered_by_type(&TypeInfo::of::<I>(), registration_name)
    }
}
