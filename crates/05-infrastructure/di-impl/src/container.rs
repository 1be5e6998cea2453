//! 依赖注入容器实现

use crate::registry::Registry;
use crate::resolver::Resolution;
use crate::scanner::AutoRegistrationScanner;
use di_abstractions::{
    ComponentScanner, ContainerConfig, ContainerModule, DiContainer, Instance, RegistrationInfo,
    RegistrationRequest,
};
use infrastructure_common::{DependencyResult, TypeInfo};
use parking_lot::RwLock;
use tracing::info;

/// 具体的依赖注入容器实现
pub struct DiContainerImpl {
    /// 组件注册表
    registry: RwLock<Registry>,
    config: ContainerConfig,
    scanner: Box<dyn ComponentScanner>,
}

impl DiContainerImpl {
    /// 创建新的容器
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::default())
    }

    /// 使用指定配置创建容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            registry: RwLock::new(Registry::new()),
            config,
            scanner: Box::new(AutoRegistrationScanner::new()),
        }
    }

    /// 替换自动注册扫描器
    pub fn with_scanner(mut self, scanner: Box<dyn ComponentScanner>) -> Self {
        self.scanner = scanner;
        self
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 注册数量
    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    /// 是否没有任何注册
    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }
}

impl Default for DiContainerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl DiContainer for DiContainerImpl {
    fn register_activator(&self, request: RegistrationRequest) -> DependencyResult<()> {
        self.registry.write().insert(request)
    }

    fn resolve_instance(
        &self,
        interface: &TypeInfo,
        registration_name: Option<&str>,
    ) -> DependencyResult<Instance> {
        let mut resolution = Resolution::new(&self.registry, &self.config);
        let instance = resolution.instance(interface, registration_name)?;
        resolution.inject(&instance)?;
        Ok(instance)
    }

    fn initialize(&self, module: &dyn ContainerModule) -> DependencyResult<usize> {
        let requests = self.scanner.scan(module);
        let mut registered = 0;
        for request in requests {
            self.register_activator(request)?;
            registered += 1;
        }

        info!(
            "模块 {} 初始化完成 (扫描器 {}), 注册了 {} 个组件",
            module.name(),
            self.scanner.name(),
            registered
        );
        Ok(registered)
    }

    fn clear(&self) {
        info!("清空容器注册");
        self.registry.write().clear();
    }

    fn is_registered_by_type(&self, interface: &TypeInfo, registration_name: Option<&str>) -> bool {
        self.registry.read().contains(interface, registration_name)
    }

    fn registrations(&self) -> Vec<RegistrationInfo> {
        self.registry.read().infos()
    }
}
