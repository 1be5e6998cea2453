//! # Component Macros
//!
//! 这个 crate 提供了为实现类型生成组件描述的派生宏。
//!
//! ## 核心宏
//!
//! - [`Component`](derive@Component) - 生成 `Component` 实现，可选生成自动注册描述
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::Component;
//! use di_abstractions::Injected;
//!
//! pub trait Dummy: Send + Sync {}
//! pub trait ComplexDummy: Send + Sync {}
//!
//! #[derive(Default, Component)]
//! #[auto_register(dyn ComplexDummy, name = "MyComplexDummy")]
//! pub struct ComplexDummyImpl {
//!     #[inject]
//!     dummy: Injected<dyn Dummy>,
//! }
//!
//! impl ComplexDummy for ComplexDummyImpl {}
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod component;
mod utils;

/// 组件派生宏
///
/// 为结构体实现 `di_abstractions::Component`。结构体还需要实现 `Default`，
/// 它充当无参构造函数。
///
/// # 属性
///
/// - `#[inject]` / `#[inject(name = "DummyA")]` - 标记需要在构造后注入的
///   `Injected<I>` 字段，可指定依赖的注册名
/// - `#[component(constructor = Self::create)]` - 标记注入构造函数，
///   函数返回 `Constructor<Self>`
/// - `#[auto_register(dyn Interface, transient, priority = 1, name = "N")]` -
///   生成 `Provides<dyn Interface>` 和 `AutoRegistered`，生命周期默认为单例，
///   优先级默认为 0
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Default, Component)]
/// #[auto_register(dyn MoreComplexDummy, transient, priority = 1, name = "MoreComplex")]
/// pub struct MoreComplexDummyImpl {
///     #[inject]
///     complex_dummy: Injected<dyn ComplexDummy>,
/// }
/// ```
#[proc_macro_derive(Component, attributes(component, inject, auto_register))]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    component::derive_component_impl(input)
}
