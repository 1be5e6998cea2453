//! 自动注册扫描器

use di_abstractions::{ComponentScanner, ContainerModule, RegistrationRequest};
use tracing::{debug, info};

/// 按 `#[auto_register]` 标记生成注册请求的扫描器
#[derive(Debug, Default)]
pub struct AutoRegistrationScanner;

impl AutoRegistrationScanner {
    pub fn new() -> Self {
        Self
    }
}

impl ComponentScanner for AutoRegistrationScanner {
    fn name(&self) -> &str {
        "AutoRegistrationScanner"
    }

    fn scan(&self, module: &dyn ContainerModule) -> Vec<RegistrationRequest> {
        info!("扫描模块: {}", module.name());

        let requests: Vec<_> = module
            .descriptors()
            .iter()
            .filter_map(|descriptor| {
                let registration = descriptor.auto_registration();
                if registration.is_none() {
                    debug!("跳过未标记自动注册的类型 {}", descriptor.type_info());
                }
                registration
            })
            .map(|registration| registration.request())
            .collect();

        info!("模块 {} 发现 {} 个自动注册组件", module.name(), requests.len());
        requests
    }
}
