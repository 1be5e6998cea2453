//! 宏工具函数

use syn::{Field, Ident, Type};

/// 从类型中提取第一个泛型参数
pub fn extract_generic_type(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                if let Some(syn::GenericArgument::Type(inner_type)) = args.args.first() {
                    return Some(inner_type);
                }
            }
        }
    }
    None
}

/// 检查类型路径的最后一段是否为指定名称，如 `Injected<T>`
pub fn last_segment_is(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == name)
            .unwrap_or(false),
        _ => false,
    }
}

/// 检查类型是否为 `Self` 或结构体自身
pub fn is_self_type(ty: &Type, struct_name: &Ident) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            type_path.path.is_ident("Self") || type_path.path.is_ident(struct_name)
        }
        _ => false,
    }
}

/// 检查字段是否有特定属性
pub fn field_has_attribute(field: &Field, attr_name: &str) -> bool {
    field.attrs.iter().any(|attr| {
        attr.path()
            .get_ident()
            .map(|ident| ident == attr_name)
            .unwrap_or(false)
    })
}
