// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Macros for the [`sharp`](https://docs.rs/sharp) crate.

// Internal implementation crate (no proc-macro entrypoints).

use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Fields, LitStr, Path, Visibility};

mod attrs;

use attrs::{StructAttrCfg, declared_type, is_marked, parse_struct_attrs};


/// Core implementation of `#[derive(Injectable)]`.
///
/// Generates the `Injectable` impl, whose descriptor table lists every `#[inject]` field and every
/// method named in `#[injectable(setters(...))]`, and the matching `Resolvable` impl. Paths to the
/// runtime crate are built from `root_path`.
#[must_use]
pub fn derive_injectable(input: TokenStream2, root_path: &Path) -> TokenStream2 {
    let parsed: syn::Result<DeriveInput> = syn::parse2(input);
    parsed
        .and_then(|di| impl_injectable(&di, root_path))
        .unwrap_or_else(|e| e.to_compile_error())
}

fn impl_injectable(input: &DeriveInput, root: &Path) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "#[derive(Injectable)] only supports structs"));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Injectable)] does not support generic types",
        ));
    }

    let cfg = parse_struct_attrs(&input.attrs)?;
    let construct = construct_body(&cfg, root);
    let fields = field_points(&data.fields)?;
    let setters = cfg.setters.iter().map(|setter| {
        let setter_name = LitStr::new(&setter.to_string(), setter.span());
        quote! { .method(#setter_name, Self::#setter) }
    });

    Ok(quote! {
        impl #root::Injectable for #name {
            fn construct() -> ::std::result::Result<Self, #root::BoxError> {
                #construct
            }

            fn injection_points() -> #root::InjectionPoints<Self> {
                #root::InjectionPoints::new()
                    #( #fields )*
                    #( #setters )*
            }
        }

        impl #root::Resolvable for #name {
            const KIND: #root::TypeKind = #root::TypeKind::Concrete;

            fn instantiate(container: &#root::Container) -> #root::Result<::std::boxed::Box<Self>> {
                container.create::<Self>().map(::std::boxed::Box::new)
            }
        }
    })
}

fn construct_body(cfg: &StructAttrCfg, root: &Path) -> TokenStream2 {
    match &cfg.constructor {
        Some(constructor) => quote! {
            #constructor().map_err(::std::convert::Into::<#root::BoxError>::into)
        },
        None => quote! {
            ::std::result::Result::Ok(<Self as ::std::default::Default>::default())
        },
    }
}

fn field_points(fields: &Fields) -> syn::Result<Vec<TokenStream2>> {
    let mut points = Vec::new();
    for field in fields {
        if !is_marked(&field.attrs)? {
            continue;
        }

        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(
                field.to_token_stream(),
                "#[inject] is only supported on named fields",
            ));
        };
        let declared = declared_type(&field.ty)?;
        let field_name = LitStr::new(&ident.to_string(), ident.span());

        points.push(if matches!(field.vis, Visibility::Public(_)) {
            quote! {
                .field::<#declared>(#field_name, |target: &mut Self, value: ::std::boxed::Box<#declared>| {
                    target.#ident = ::std::convert::From::from(value);
                })
            }
        } else {
            quote! { .private_field::<#declared>(#field_name) }
        });
    }

    Ok(points)
}
