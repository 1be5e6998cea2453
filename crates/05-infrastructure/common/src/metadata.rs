//! 元数据定义
//!
//! 提供组件和接口的类型标识信息

use std::any::TypeId;
use std::fmt;

/// 类型信息
///
/// 注册表以 [`TypeId`] 区分接口，以简短名称作为默认注册名。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型ID
    pub id: TypeId,
    /// 简短类型名称（不包含模块路径）
    pub name: String,
    /// 完整类型名称
    pub full_name: &'static str,
}

impl TypeInfo {
    /// 从类型获取类型信息，`T` 可以是 `dyn Trait`
    pub fn of<T: ?Sized + 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        Self {
            id: TypeId::of::<T>(),
            name: short_name(full_name),
            full_name,
        }
    }

    /// 获取简短的类型名称
    pub fn short_name(&self) -> &str {
        &self.name
    }

    /// 是否为指定类型
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 去掉类型名称中的模块路径，泛型参数内部同样处理
fn short_name(full_name: &str) -> String {
    let mut result = String::with_capacity(full_name.len());
    let mut segment = String::new();

    for ch in full_name.chars() {
        if matches!(ch, '<' | '>' | ',' | '(' | ')' | '[' | ']' | '&' | ';' | ' ') {
            result.push_str(last_path_segment(&segment));
            segment.clear();
            result.push(ch);
        } else {
            segment.push(ch);
        }
    }
    result.push_str(last_path_segment(&segment));

    result
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
