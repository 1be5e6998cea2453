//! 组件工厂抽象
//!
//! 描述构造函数注入：参数列表、参数标记以及按参数构造实例的闭包。
//! [`Activator`] 是类型擦除后的工厂，注册表中的每个条目持有一个。

use crate::component::Provides;
use crate::resolver::Instance;
use infrastructure_common::{DependencyError, DependencyResult, TypeInfo};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

type BoxedValue = Box<dyn Any + Send + Sync>;
type DefaultValueFn = Arc<dyn Fn() -> BoxedValue + Send + Sync>;
type BuildFn<T> = Box<dyn Fn(&mut Arguments) -> DependencyResult<T> + Send + Sync>;

/// 参数种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// 引用类型（服务接口），未注入时为 `None`
    Service,
    /// 值类型，未注入时为 `Default::default()`
    Value,
}

/// 参数标记
///
/// 默认值是显式的三态：未设置、或设置为某个值（包括零值）。
#[derive(Clone, Default)]
pub struct ParameterMarker {
    registration_name: Option<String>,
    default_value: Option<DefaultValueFn>,
}

impl ParameterMarker {
    /// 指定的注册名
    pub fn registration_name(&self) -> Option<&str> {
        self.registration_name.as_deref()
    }

    /// 是否提供了默认值
    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    /// 生成默认值参数
    pub fn default_value(&self) -> Option<Argument> {
        self.default_value
            .as_ref()
            .map(|value| Argument::Value(value()))
    }
}

impl fmt::Debug for ParameterMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterMarker")
            .field("registration_name", &self.registration_name)
            .field("has_default_value", &self.has_default_value())
            .finish()
    }
}

/// 构造函数参数描述
#[derive(Clone)]
pub struct Parameter {
    name: &'static str,
    type_info: TypeInfo,
    kind: ParameterKind,
    marker: Option<ParameterMarker>,
    zero: fn() -> Argument,
}

impl Parameter {
    /// 服务参数，类型为接口 `I`
    pub fn service<I>(name: &'static str) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        Self {
            name,
            type_info: TypeInfo::of::<I>(),
            kind: ParameterKind::Service,
            marker: None,
            zero: || Argument::Null,
        }
    }

    /// 值参数
    pub fn value<V>(name: &'static str) -> Self
    where
        V: Default + Send + Sync + 'static,
    {
        Self {
            name,
            type_info: TypeInfo::of::<V>(),
            kind: ParameterKind::Value,
            marker: None,
            zero: zero_value::<V>,
        }
    }

    /// 标记参数需要从容器解析（不指定注册名）
    pub fn injected(mut self) -> Self {
        self.marker.get_or_insert_with(ParameterMarker::default);
        self
    }

    /// 标记参数按注册名解析
    pub fn named(mut self, registration_name: impl Into<String>) -> Self {
        self.marker
            .get_or_insert_with(ParameterMarker::default)
            .registration_name = Some(registration_name.into());
        self
    }

    /// 标记参数使用显式默认值，不再从容器解析
    ///
    /// 服务参数的默认值类型为 `Arc<I>`。
    pub fn with_default<V>(mut self, value: V) -> Self
    where
        V: Clone + Send + Sync + 'static,
    {
        self.marker
            .get_or_insert_with(ParameterMarker::default)
            .default_value = Some(Arc::new(move || Box::new(value.clone()) as BoxedValue));
        self
    }

    /// 参数名称
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 参数类型
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 参数种类
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// 是否为服务参数
    pub fn is_service(&self) -> bool {
        self.kind == ParameterKind::Service
    }

    /// 参数标记
    pub fn marker(&self) -> Option<&ParameterMarker> {
        self.marker.as_ref()
    }

    /// 参数类型的零值
    pub fn zero_value(&self) -> Argument {
        (self.zero)()
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("type_info", &self.type_info)
            .field("kind", &self.kind)
            .field("marker", &self.marker)
            .finish()
    }
}

fn zero_value<V: Default + Send + Sync + 'static>() -> Argument {
    Argument::Value(Box::new(V::default()))
}

/// 组装好的单个参数
pub enum Argument {
    /// 从容器解析得到的实例
    Instance(Instance),
    /// 值
    Value(BoxedValue),
    /// 空引用
    Null,
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(instance) => f.debug_tuple("Instance").field(instance).finish(),
            Self::Value(_) => f.write_str("Value(..)"),
            Self::Null => f.write_str("Null"),
        }
    }
}

/// 构造函数的实参列表，按声明顺序依次取出
#[derive(Debug)]
pub struct Arguments {
    owner: &'static str,
    position: usize,
    values: std::vec::IntoIter<(&'static str, Argument)>,
}

impl Arguments {
    /// 创建实参列表，`owner` 仅用于错误信息
    pub fn new(owner: &'static str, values: Vec<(&'static str, Argument)>) -> Self {
        Self {
            owner,
            position: 0,
            values: values.into_iter(),
        }
    }

    /// 取出下一个服务参数，空引用返回 `None`
    pub fn service<I>(&mut self) -> DependencyResult<Option<Arc<I>>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let (name, argument) = self.next_argument::<I>()?;
        match argument {
            Argument::Instance(instance) => instance.downcast::<I>().map(Some),
            Argument::Null => Ok(None),
            // 服务参数的显式默认值以 `Arc<I>` 保存
            Argument::Value(value) => value
                .downcast::<Arc<I>>()
                .map(|value| Some(*value))
                .map_err(|_| self.mismatch::<I>(name)),
        }
    }

    /// 取出下一个值参数
    pub fn value<V>(&mut self) -> DependencyResult<V>
    where
        V: Clone + Send + Sync + 'static,
    {
        let (name, argument) = self.next_argument::<V>()?;
        match argument {
            Argument::Value(value) => value
                .downcast::<V>()
                .map(|value| *value)
                .map_err(|_| self.mismatch::<V>(name)),
            // 值类型也可以注册到容器中
            Argument::Instance(instance) => instance.downcast::<V>().map(|value| (*value).clone()),
            Argument::Null => Err(self.mismatch::<V>(name)),
        }
    }

    /// 剩余参数数量
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn next_argument<T: ?Sized>(&mut self) -> DependencyResult<(&'static str, Argument)> {
        self.position += 1;
        self.values.next().ok_or_else(|| {
            DependencyError::argument_mismatch(
                format!("{}#{}", self.owner, self.position),
                std::any::type_name::<T>(),
            )
        })
    }

    fn mismatch<T: ?Sized>(&self, name: &str) -> DependencyError {
        DependencyError::argument_mismatch(
            format!("{}::{}", self.owner, name),
            std::any::type_name::<T>(),
        )
    }
}

/// 标记的注入构造函数
pub struct Constructor<T> {
    auto_inject: bool,
    parameters: Vec<Parameter>,
    build: BuildFn<T>,
}

impl<T: 'static> Constructor<T> {
    /// 创建构造函数描述，`build` 按参数声明顺序从 [`Arguments`] 取值
    pub fn new<F>(build: F) -> Self
    where
        F: Fn(&mut Arguments) -> DependencyResult<T> + Send + Sync + 'static,
    {
        Self {
            auto_inject: true,
            parameters: Vec::new(),
            build: Box::new(build),
        }
    }

    /// 是否自动注入未标记的服务参数，默认开启
    pub fn auto_inject(mut self, enabled: bool) -> Self {
        self.auto_inject = enabled;
        self
    }

    /// 追加参数
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// 是否自动注入
    pub fn is_auto_inject(&self) -> bool {
        self.auto_inject
    }

    /// 参数列表
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// 用组装好的参数调用构造函数
    pub fn invoke(&self, arguments: &mut Arguments) -> DependencyResult<T> {
        (self.build)(arguments)
    }

    /// 转换构造结果
    pub fn map<U, F>(self, f: F) -> Constructor<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let build = self.build;
        Constructor {
            auto_inject: self.auto_inject,
            parameters: self.parameters,
            build: Box::new(move |arguments| build(arguments).map(&f)),
        }
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("auto_inject", &self.auto_inject)
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// 类型擦除后的组件工厂
pub struct Activator {
    interface: TypeInfo,
    implementation: TypeInfo,
    parameterless: fn() -> Instance,
    constructor: Option<Constructor<Instance>>,
}

impl Activator {
    /// 为 `T` 作为接口 `I` 的实现创建工厂
    pub fn of<I, T>() -> Self
    where
        I: ?Sized + Send + Sync + 'static,
        T: Provides<I>,
    {
        Self {
            interface: TypeInfo::of::<I>(),
            implementation: TypeInfo::of::<T>(),
            parameterless: parameterless::<I, T>,
            constructor: T::constructor().map(|constructor| {
                constructor.map(|component| Instance::new::<I, T>(Arc::new(component)))
            }),
        }
    }

    /// 接口类型
    pub fn interface(&self) -> &TypeInfo {
        &self.interface
    }

    /// 实现类型
    pub fn implementation(&self) -> &TypeInfo {
        &self.implementation
    }

    /// 通过无参构造函数创建实例
    pub fn create_default(&self) -> Instance {
        (self.parameterless)()
    }

    /// 标记的注入构造函数
    pub fn constructor(&self) -> Option<&Constructor<Instance>> {
        self.constructor.as_ref()
    }
}

impl fmt::Debug for Activator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activator")
            .field("interface", &self.interface)
            .field("implementation", &self.implementation)
            .field("constructor", &self.constructor)
            .finish()
    }
}

fn parameterless<I, T>() -> Instance
where
    I: ?Sized + Send + Sync + 'static,
    T: Provides<I>,
{
    Instance::new::<I, T>(Arc::new(T::default()))
}
