//! 组件解析抽象接口
//!
//! 提供类型擦除后的解析结果以及属性注入的回调接口

use crate::component::{Component, Provides};
use infrastructure_common::{DependencyError, DependencyResult, TypeInfo};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 可被注入器遍历的组件实例
///
/// 为所有 [`Component`] 自动实现，注入器通过它访问具体类型声明的属性。
pub trait Wireable: Send + Sync {
    /// 具体实现类型
    fn implementation(&self) -> TypeInfo;

    /// 解析并写入所有标记的属性，每写入一个属性后交给注入器递归处理
    fn wire(&self, injector: &mut dyn PropertyInjector) -> DependencyResult<()>;

    /// 清空所有标记的属性，断开注入形成的引用环
    fn release(&self);
}

impl<T: Component> Wireable for T {
    fn implementation(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn wire(&self, injector: &mut dyn PropertyInjector) -> DependencyResult<()> {
        let owner = TypeInfo::of::<T>();
        for property in T::properties() {
            let resolved = injector.resolve(property.interface(), property.registration_name())?;
            property.assign(self, &resolved)?;
            injector.descend(&owner, &resolved)?;
        }
        Ok(())
    }

    fn release(&self) {
        for property in T::properties() {
            property.release(self);
        }
    }
}

/// 属性注入器 trait
///
/// 由容器在单次解析过程中实现，持有该次解析的访问计数
pub trait PropertyInjector {
    /// 解析属性声明的接口
    fn resolve(
        &mut self,
        interface: &TypeInfo,
        registration_name: Option<&str>,
    ) -> DependencyResult<Instance>;

    /// 以 `owner` 的身份进入刚写入的依赖，继续注入它自己的属性
    fn descend(&mut self, owner: &TypeInfo, value: &Instance) -> DependencyResult<()>;
}

/// 解析得到的实例
///
/// 同时保存接口视图（`Arc<I>`）与具体组件视图，两者指向同一个对象。
#[derive(Clone)]
pub struct Instance {
    service: Arc<dyn Any + Send + Sync>,
    component: Arc<dyn Wireable>,
    interface: TypeInfo,
}

impl Instance {
    /// 以接口 `I` 包装实现实例
    pub fn new<I, T>(component: Arc<T>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
        T: Provides<I>,
    {
        let service: Arc<I> = <T as Provides<I>>::provide(Arc::clone(&component));
        Self {
            service: Arc::new(service),
            component,
            interface: TypeInfo::of::<I>(),
        }
    }

    /// 获取接口视图
    pub fn downcast<I>(&self) -> DependencyResult<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        (*self.service)
            .downcast_ref::<Arc<I>>()
            .cloned()
            .ok_or_else(|| DependencyError::TypeMismatch {
                expected: std::any::type_name::<I>().to_string(),
                actual: self.interface.full_name.to_string(),
            })
    }

    /// 注册时的接口类型
    pub fn interface(&self) -> &TypeInfo {
        &self.interface
    }

    /// 具体实现类型
    pub fn implementation(&self) -> TypeInfo {
        self.component.implementation()
    }

    /// 具体组件视图
    pub fn component(&self) -> &Arc<dyn Wireable> {
        &self.component
    }

    /// 是否与另一个实例指向同一个对象
    pub fn same_as(&self, other: &Self) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.component).cast::<()>(),
            Arc::as_ptr(&other.component).cast::<()>(),
        )
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("interface", &self.interface)
            .field("implementation", &self.implementation())
            .finish()
    }
}
