//! 组件派生宏实现

use crate::utils::{extract_generic_type, field_has_attribute, is_self_type, last_segment_is};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, Data, DeriveInput, ExprPath, Fields, Ident, LitInt, LitStr,
    Result, Token, Type,
};

/// 组件生命周期类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComponentLifetime {
    Singleton,
    Transient,
}

/// `#[auto_register(...)]` 参数
///
/// 第一个参数是注册的接口类型，其余为可选的生命周期、优先级和注册名。
pub struct AutoRegisterArgs {
    /// 接口类型
    pub interface: Type,
    /// 生命周期类型
    pub lifetime: ComponentLifetime,
    /// 组件优先级
    pub priority: i32,
    /// 注册名
    pub name: Option<String>,
}

impl Parse for AutoRegisterArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = AutoRegisterArgs {
            interface: input.parse()?,
            lifetime: ComponentLifetime::Singleton,
            priority: 0,
            name: None,
        };

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }

            let key: Ident = input.parse()?;
            if key == "singleton" {
                args.lifetime = ComponentLifetime::Singleton;
            } else if key == "transient" {
                args.lifetime = ComponentLifetime::Transient;
            } else if key == "priority" {
                input.parse::<Token![=]>()?;
                let negative = input.parse::<Option<Token![-]>>()?.is_some();
                let literal: LitInt = input.parse()?;
                let magnitude: i64 = literal.base10_parse()?;
                let value = if negative { -magnitude } else { magnitude };
                args.priority = i32::try_from(value).map_err(|_| {
                    syn::Error::new(literal.span(), format!("优先级超出 i32 范围: {value}"))
                })?;
            } else if key == "name" {
                input.parse::<Token![=]>()?;
                args.name = Some(input.parse::<LitStr>()?.value());
            } else {
                return Err(syn::Error::new(
                    key.span(),
                    format!("未知的 auto_register 参数: {key}"),
                ));
            }
        }

        Ok(args)
    }
}

/// `#[component(...)]` 参数
#[derive(Default)]
pub struct ComponentArgs {
    /// 标记的注入构造函数，返回 `Constructor<Self>`
    pub constructor: Option<ExprPath>,
}

impl ComponentArgs {
    fn from_attributes(input: &DeriveInput) -> Result<Self> {
        let mut args = ComponentArgs::default();
        for attr in &input.attrs {
            if attr.path().is_ident("component") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("constructor") {
                        args.constructor = Some(meta.value()?.parse()?);
                        Ok(())
                    } else {
                        Err(meta.error("未知的 component 参数"))
                    }
                })?;
            }
        }
        Ok(args)
    }
}

/// 需要注入的属性字段
struct InjectField {
    ident: Ident,
    interface: Type,
    name: Option<String>,
}

/// 实现 #[derive(Component)] 宏
pub fn derive_component_impl(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let component_args = ComponentArgs::from_attributes(input)?;
    let auto_register = auto_register_args(input)?;
    let inject_fields = inject_fields(input)?;

    let constructor_fn = component_args.constructor.map(|constructor| {
        quote! {
            fn constructor() -> ::std::option::Option<::di_abstractions::Constructor<Self>> {
                ::std::option::Option::Some(#constructor())
            }
        }
    });

    let properties_fn = if inject_fields.is_empty() {
        None
    } else {
        let properties = inject_fields.iter().map(|field| {
            let ident = &field.ident;
            let interface = &field.interface;
            let field_name = ident.to_string();
            let named = field.name.as_ref().map(|name| quote! { .named(#name) });
            quote! {
                ::di_abstractions::Property::new::<#interface>(
                    #field_name,
                    |this: &Self| &this.#ident,
                )
                #named
            }
        });
        Some(quote! {
            fn properties() -> ::std::vec::Vec<::di_abstractions::Property<Self>> {
                ::std::vec![#(#properties),*]
            }
        })
    };

    let registration_code = auto_register.map(|args| {
        let interface = &args.interface;
        let lifetime = match args.lifetime {
            ComponentLifetime::Singleton => quote! { ::di_abstractions::Lifetime::Singleton },
            ComponentLifetime::Transient => quote! { ::di_abstractions::Lifetime::Transient },
        };
        let priority = args.priority;
        let name = args.name.as_ref().map(|name| quote! { .with_name(#name) });

        // 接口就是类型本身时由 `Provides<T> for T` 覆盖
        let provides_impl = if is_self_type(interface, struct_name) {
            None
        } else {
            Some(quote! {
                impl #impl_generics ::di_abstractions::Provides<#interface>
                    for #struct_name #ty_generics #where_clause
                {
                    fn provide(
                        self: ::std::sync::Arc<Self>,
                    ) -> ::std::sync::Arc<#interface> {
                        self
                    }
                }
            })
        };

        quote! {
            #provides_impl

            impl #impl_generics ::di_abstractions::AutoRegistered
                for #struct_name #ty_generics #where_clause
            {
                fn descriptor() -> ::di_abstractions::TypeDescriptor {
                    ::di_abstractions::TypeDescriptor::auto_registered::<#interface, Self>(
                        ::di_abstractions::AutoRegister::new(#lifetime)
                            .with_priority(#priority)
                            #name
                    )
                }
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Component
            for #struct_name #ty_generics #where_clause
        {
            #constructor_fn

            #properties_fn
        }

        #registration_code
    })
}

fn auto_register_args(input: &DeriveInput) -> Result<Option<AutoRegisterArgs>> {
    let mut found = None;
    for attr in &input.attrs {
        if attr.path().is_ident("auto_register") {
            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "每个类型只能有一个 #[auto_register]",
                ));
            }
            found = Some(attr.parse_args::<AutoRegisterArgs>()?);
        }
    }
    Ok(found)
}

fn inject_fields(input: &DeriveInput) -> Result<Vec<InjectField>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Ok(Vec::new()),
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[derive(Component)] 只支持结构体",
            ))
        }
    };

    let mut inject_fields = Vec::new();
    for field in fields {
        if !field_has_attribute(field, "inject") {
            continue;
        }

        let interface = match extract_generic_type(&field.ty) {
            Some(interface) if last_segment_is(&field.ty, "Injected") => interface.clone(),
            _ => {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "#[inject] 只能用于 Injected<I> 字段",
                ))
            }
        };

        let mut name = None;
        for attr in &field.attrs {
            // 不带参数的 #[inject] 是 Meta::Path，没有可解析的内容
            if attr.path().is_ident("inject") && matches!(attr.meta, syn::Meta::List(_)) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("name") {
                        name = Some(meta.value()?.parse::<LitStr>()?.value());
                        Ok(())
                    } else {
                        Err(meta.error("未知的 inject 参数"))
                    }
                })?;
            }
        }

        if let Some(ident) = field.ident.clone() {
            inject_fields.push(InjectField {
                ident,
                interface,
                name,
            });
        }
    }

    Ok(inject_fields)
}
