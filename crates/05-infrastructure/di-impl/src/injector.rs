//! 属性注入
//!
//! 注入遍历可以经过 A -> B -> A 这样的引用环。每个具体类型在同一次解析中的
//! 访问次数超过 `cycle_guard_depth` 后不再继续注入，递归由此终止。

use crate::resolver::Resolution;
use di_abstractions::{Instance, PropertyInjector};
use infrastructure_common::{DependencyResult, TypeInfo};
use tracing::trace;

impl Resolution<'_> {
    /// 注入实例声明的所有属性
    pub fn inject(&mut self, instance: &Instance) -> DependencyResult<()> {
        let implementation = instance.implementation();
        let visits = self.visits.get(&implementation.id).copied().unwrap_or(0);
        if visits > self.config.cycle_guard_depth {
            trace!("{} 已被访问 {} 次，停止属性注入", implementation, visits);
            return Ok(());
        }

        if self.config.trace_resolutions {
            trace!("注入 {} 的属性", implementation);
        }
        instance.component().wire(self)
    }
}

impl PropertyInjector for Resolution<'_> {
    fn resolve(
        &mut self,
        interface: &TypeInfo,
        registration_name: Option<&str>,
    ) -> DependencyResult<Instance> {
        self.instance(interface, registration_name)
    }

    fn descend(&mut self, owner: &TypeInfo, value: &Instance) -> DependencyResult<()> {
        *self.visits.entry(owner.id).or_insert(0) += 1;
        let result = self.inject(value);
        if let Some(count) = self.visits.get_mut(&owner.id) {
            *count -= 1;
        }
        result
    }
}
