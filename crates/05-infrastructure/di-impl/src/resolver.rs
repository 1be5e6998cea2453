//! 单次解析过程
//!
//! 生命周期策略与构造函数参数解析。每次顶层解析创建一个 [`Resolution`]，
//! 访问计数和正在构造的类型链只在这一次解析内有效。

use crate::registry::{RegistrationRecord, Registry, RegistryEntry};
use di_abstractions::{Argument, Arguments, ContainerConfig, Instance, Parameter};
use infrastructure_common::{DependencyError, DependencyResult, Lifetime, TypeInfo};
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use tracing::trace;

/// 单次解析的状态
pub struct Resolution<'c> {
    registry: &'c RwLock<Registry>,
    pub(crate) config: &'c ContainerConfig,
    pub(crate) visits: HashMap<TypeId, usize>,
    /// 正在组装构造参数的实现类型
    constructing: Vec<TypeInfo>,
}

impl<'c> Resolution<'c> {
    pub fn new(registry: &'c RwLock<Registry>, config: &'c ContainerConfig) -> Self {
        Self {
            registry,
            config,
            visits: HashMap::new(),
            constructing: Vec::new(),
        }
    }

    /// 按生命周期取得实例，不做属性注入
    pub fn instance(
        &mut self,
        interface: &TypeInfo,
        registration_name: Option<&str>,
    ) -> DependencyResult<Instance> {
        // 条目复制出来后立即释放读锁，构造过程中会再次进入注册表
        let entry: RegistryEntry = self
            .registry
            .read()
            .lookup(interface, registration_name)?
            .clone();

        if self.config.trace_resolutions {
            trace!(
                "解析 {} -> {} ({})",
                interface,
                entry.record.implementation,
                entry.key.lifetime
            );
        }

        match (entry.key.lifetime, &entry.record.instance) {
            (Lifetime::Singleton, Some(instance)) => Ok(instance.clone()),
            _ => self.construct(&entry.record),
        }
    }

    fn construct(&mut self, record: &RegistrationRecord) -> DependencyResult<Instance> {
        let activator = &record.activator;
        let Some(constructor) = activator.constructor() else {
            return Ok(activator.create_default());
        };

        let implementation = &record.implementation;
        if self.constructing.iter().any(|info| info.id == implementation.id) {
            return Err(DependencyError::cyclic_construction(
                implementation.clone(),
                &self.constructing,
            ));
        }

        self.constructing.push(implementation.clone());
        let assembled = self.arguments(constructor.parameters(), constructor.is_auto_inject());
        self.constructing.pop();
        let (values, dependencies) = assembled?;

        let mut arguments = Arguments::new(implementation.full_name, values);
        let instance = constructor.invoke(&mut arguments)?;

        // 构造链已经出栈，依赖的属性注入只受访问计数约束
        for dependency in &dependencies {
            self.inject(dependency)?;
        }
        Ok(instance)
    }

    fn arguments(
        &mut self,
        parameters: &[Parameter],
        auto_inject: bool,
    ) -> DependencyResult<(Vec<(&'static str, Argument)>, Vec<Instance>)> {
        let mut values = Vec::with_capacity(parameters.len());
        let mut dependencies = Vec::new();
        for parameter in parameters {
            let argument = self.argument(parameter, auto_inject)?;
            if let Argument::Instance(instance) = &argument {
                dependencies.push(instance.clone());
            }
            values.push((parameter.name(), argument));
        }
        Ok((values, dependencies))
    }

    fn argument(&mut self, parameter: &Parameter, auto_inject: bool) -> DependencyResult<Argument> {
        if let Some(marker) = parameter.marker() {
            if let Some(value) = marker.default_value() {
                return Ok(value);
            }
            return self
                .instance(parameter.type_info(), marker.registration_name())
                .map(Argument::Instance);
        }

        if auto_inject && parameter.is_service() {
            return self
                .instance(parameter.type_info(), None)
                .map(Argument::Instance);
        }

        Ok(parameter.zero_value())
    }
}
