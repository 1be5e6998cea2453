//! 组件注册表
//!
//! 接口 -> 按注册顺序排列的实现列表

use di_abstractions::{Activator, Instance, RegistrationInfo, RegistrationKey, RegistrationRequest};
use infrastructure_common::{DependencyError, DependencyResult, Lifetime, TypeInfo};
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// 注册记录，只归属于一个注册表条目
#[derive(Debug, Clone)]
pub struct RegistrationRecord {
    pub implementation: TypeInfo,
    /// 仅单例持有实例
    pub instance: Option<Instance>,
    pub activator: Arc<Activator>,
}

/// 注册表条目
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub key: RegistrationKey,
    pub record: RegistrationRecord,
}

/// 组件注册表
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<TypeId, Vec<RegistryEntry>>,
}

impl Registry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加注册
    ///
    /// 同一接口下解析后的注册名已存在时失败。
    /// 瞬时注册丢弃预置实例；没有预置实例的单例立即通过无参构造函数创建。
    pub fn insert(&mut self, request: RegistrationRequest) -> DependencyResult<()> {
        let key = request.key();
        let implementation = request.implementation().clone();

        if self.find(&key.interface, Some(&key.name)).is_some() {
            return Err(DependencyError::duplicate_registration(
                key.interface,
                implementation,
            ));
        }

        let activator = request.activator;
        let instance = match (key.lifetime, request.instance) {
            (Lifetime::Transient, Some(_)) => {
                debug!("瞬时组件 {} 不保存预置实例", implementation);
                None
            }
            (Lifetime::Transient, None) => None,
            (Lifetime::Singleton, Some(instance)) => Some(instance),
            (Lifetime::Singleton, None) => {
                debug!("创建单例组件 {}", implementation);
                Some(activator.create_default())
            }
        };

        info!(
            "注册组件: {} -> {} (注册名 {}, 优先级 {}, {})",
            key.interface, implementation, key.name, key.priority, key.lifetime
        );

        self.entries
            .entry(key.interface.id)
            .or_default()
            .push(RegistryEntry {
                key,
                record: RegistrationRecord {
                    implementation,
                    instance,
                    activator: Arc::new(activator),
                },
            });
        Ok(())
    }

    /// 查找优先级最高的匹配条目，优先级相同时取最早注册的
    pub fn lookup(
        &self,
        interface: &TypeInfo,
        registration_name: Option<&str>,
    ) -> DependencyResult<&RegistryEntry> {
        self.find(interface, registration_name)
            .ok_or_else(|| DependencyError::unregistered_type(interface.clone(), registration_name))
    }

    /// 是否存在匹配的条目
    pub fn contains(&self, interface: &TypeInfo, registration_name: Option<&str>) -> bool {
        self.find(interface, registration_name).is_some()
    }

    /// 清空注册表
    ///
    /// 先清空所持单例的注入槽位，互相引用的单例才能被释放。
    /// 调用方仍持有的单例此后不再带有属性依赖。
    pub fn clear(&mut self) {
        self.release_singletons();
        self.entries.clear();
    }

    /// 注册数量
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 所有注册信息
    pub fn infos(&self) -> Vec<RegistrationInfo> {
        self.entries
            .values()
            .flatten()
            .map(|entry| RegistrationInfo {
                key: entry.key.clone(),
                implementation: entry.record.implementation.clone(),
                has_instance: entry.record.instance.is_some(),
            })
            .collect()
    }

    fn release_singletons(&self) {
        for instance in self
            .entries
            .values()
            .flatten()
            .filter_map(|entry| entry.record.instance.as_ref())
        {
            instance.component().release();
        }
    }

    fn find(&self, interface: &TypeInfo, registration_name: Option<&str>) -> Option<&RegistryEntry> {
        self.entries
            .get(&interface.id)?
            .iter()
            .filter(|entry| entry.key.matches(interface, registration_name))
            .min_by_key(|entry| entry.key.priority)
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        self.release_singletons();
    }
}
