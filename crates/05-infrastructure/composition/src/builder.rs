//! 容器构建器

use crate::config::{CompositionConfig, LoggingConfig};
use di_abstractions::{ContainerConfig, ContainerModule, DiContainer};
use di_impl::DiContainerImpl;
use infrastructure_common::{ConfigError, InfrastructureError, InfrastructureResult};
use std::path::Path;
use tracing::{debug, info};

/// 容器构建器
///
/// 使用建造者模式构建依赖注入容器：读取配置、按需初始化日志、依次扫描组件模块。
pub struct ContainerBuilder {
    /// 组合配置
    config: CompositionConfig,
    /// 待扫描的组件模块
    modules: Vec<Box<dyn ContainerModule>>,
}

impl ContainerBuilder {
    /// 创建新的容器构建器
    pub fn new() -> Self {
        Self {
            config: CompositionConfig::default(),
            modules: Vec::new(),
        }
    }

    /// 设置容器配置
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config.container = config;
        self
    }

    /// 从 TOML 字符串读取配置
    pub fn with_config_str(mut self, content: &str) -> InfrastructureResult<Self> {
        self.config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        Ok(self)
    }

    /// 从 TOML 文件读取配置
    pub fn with_config_toml<P: AsRef<Path>>(self, path: P) -> InfrastructureResult<Self> {
        let path = path.as_ref();
        info!("读取容器配置文件: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        self.with_config_str(&content)
    }

    /// 配置日志，构建时初始化
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.config.logging = Some(config);
        self
    }

    /// 添加组件模块
    pub fn add_module(mut self, module: Box<dyn ContainerModule>) -> Self {
        debug!("添加组件模块: {}", module.name());
        self.modules.push(module);
        self
    }

    /// 当前配置
    pub fn config(&self) -> &CompositionConfig {
        &self.config
    }

    /// 构建容器
    pub fn build(self) -> InfrastructureResult<DiContainerImpl> {
        // 只有在明确配置了日志时才初始化，避免测试中重复初始化
        if let Some(logging) = &self.config.logging {
            initialize_logging(logging)?;
        }

        info!("开始构建容器");
        let container = DiContainerImpl::with_config(self.config.container);

        let mut registered = 0;
        for module in &self.modules {
            registered += container.initialize(module.as_ref())?;
        }

        info!(
            "容器构建完成，{} 个模块，{} 个自动注册组件",
            self.modules.len(),
            registered
        );
        Ok(container)
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 初始化日志系统
fn initialize_logging(config: &LoggingConfig) -> InfrastructureResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_target(config.show_target)
        .with_thread_ids(config.show_thread_ids)
        .with_file(config.show_file)
        .with_line_number(config.show_line_number);

    if config.json_format {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    }
    .map_err(|e| InfrastructureError::BootstrapFailed {
        message: format!("日志初始化失败: {}", e),
    })?;

    info!("日志系统初始化完成");
    Ok(())
}
