//! 组件描述接口
//!
//! 实现类型通过 [`Component`] 向容器描述自己如何被构造、哪些属性需要注入

use crate::factory::Constructor;
use crate::resolver::Instance;
use infrastructure_common::{DependencyResult, TypeInfo};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// 组件 trait
///
/// 所有可被容器构造的实现类型都必须实现此 trait。
/// [`Default`] 充当无参构造函数：单例在注册时、以及没有标记构造函数的瞬时组件都用它创建。
pub trait Component: Default + Send + Sync + 'static {
    /// 标记的注入构造函数，每个类型最多一个
    fn constructor() -> Option<Constructor<Self>> {
        None
    }

    /// 需要在构造后注入的属性
    fn properties() -> Vec<Property<Self>> {
        Vec::new()
    }
}

/// 实现类型到接口的转换
///
/// `I` 通常是 `dyn Trait`，实现方式一般就是返回 `self`，见 [`provides!`](crate::provides)。
pub trait Provides<I: ?Sized + Send + Sync + 'static>: Component {
    /// 把共享的实现实例转换为接口
    fn provide(self: Arc<Self>) -> Arc<I>;
}

impl<T: Component> Provides<T> for T {
    fn provide(self: Arc<Self>) -> Arc<T> {
        self
    }
}

/// 为实现类型声明它提供的接口
///
/// ```rust
/// use di_abstractions::{provides, Component};
///
/// pub trait Greeter: Send + Sync {}
///
/// #[derive(Default)]
/// pub struct ConsoleGreeter;
///
/// impl Greeter for ConsoleGreeter {}
/// impl Component for ConsoleGreeter {}
///
/// provides!(ConsoleGreeter => dyn Greeter);
/// ```
#[macro_export]
macro_rules! provides {
    ($component:ty => $($interface:ty),+ $(,)?) => {
        $(
            impl $crate::Provides<$interface> for $component {
                fn provide(
                    self: ::std::sync::Arc<Self>,
                ) -> ::std::sync::Arc<$interface> {
                    self
                }
            }
        )+
    };
}

/// 属性注入槽位
///
/// 单例实例在构造后仍需被写入依赖，因此槽位具有内部可变性。
/// 互相引用的单例会通过槽位形成 `Arc` 环，容器清空或销毁时会清空
/// 所持单例的槽位来打破环。
pub struct Injected<I: ?Sized> {
    slot: RwLock<Option<Arc<I>>>,
}

impl<I: ?Sized> Injected<I> {
    /// 创建空槽位
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// 获取已注入的依赖
    pub fn get(&self) -> Option<Arc<I>> {
        self.slot.read().clone()
    }

    /// 写入依赖
    pub fn set(&self, value: Arc<I>) {
        *self.slot.write() = Some(value);
    }

    /// 是否已注入
    pub fn is_set(&self) -> bool {
        self.slot.read().is_some()
    }

    /// 清空槽位，返回原来注入的依赖
    pub fn take(&self) -> Option<Arc<I>> {
        self.slot.write().take()
    }
}

impl<I: ?Sized> Default for Injected<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized> fmt::Debug for Injected<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injected")
            .field("interface", &std::any::type_name::<I>())
            .field("is_set", &self.is_set())
            .finish()
    }
}

type PropertyAssigner<T> = Box<dyn Fn(&T, &Instance) -> DependencyResult<()> + Send + Sync>;
type PropertyReleaser<T> = Box<dyn Fn(&T) + Send + Sync>;

/// 属性注入描述
pub struct Property<T> {
    name: &'static str,
    interface: TypeInfo,
    registration_name: Option<String>,
    assign: PropertyAssigner<T>,
    release: PropertyReleaser<T>,
}

impl<T: 'static> Property<T> {
    /// 创建属性描述，`slot` 返回目标实例上的注入槽位
    pub fn new<I>(name: &'static str, slot: fn(&T) -> &Injected<I>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        Self {
            name,
            interface: TypeInfo::of::<I>(),
            registration_name: None,
            assign: Box::new(move |target, instance| {
                slot(target).set(instance.downcast::<I>()?);
                Ok(())
            }),
            release: Box::new(move |target| {
                slot(target).take();
            }),
        }
    }

    /// 指定依赖的注册名
    pub fn named(mut self, registration_name: impl Into<String>) -> Self {
        self.registration_name = Some(registration_name.into());
        self
    }

    /// 属性名称
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 属性声明的接口类型
    pub fn interface(&self) -> &TypeInfo {
        &self.interface
    }

    /// 指定的注册名
    pub fn registration_name(&self) -> Option<&str> {
        self.registration_name.as_deref()
    }

    /// 把解析出的实例写入目标的槽位
    pub fn assign(&self, target: &T, instance: &Instance) -> DependencyResult<()> {
        (self.assign)(target, instance)
    }

    /// 清空目标上的注入槽位
    pub fn release(&self, target: &T) {
        (self.release)(target)
    }
}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("interface", &self.interface)
            .field("registration_name", &self.registration_name)
            .finish()
    }
}
