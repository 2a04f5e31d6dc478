// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![expect(missing_docs, reason = "This is a test module")]

use quote::quote;
use sharp_macros_impl::derive_injectable;

fn expand(input: proc_macro2::TokenStream) -> syn::File {
    let root: syn::Path = syn::parse_quote!(::sharp);
    let ts = derive_injectable(input, &root);
    syn::parse2(ts).expect("expansion should be valid Rust")
}

fn compact(file: &syn::File) -> String {
    quote!(#file).to_string().chars().filter(|c| !c.is_whitespace()).collect()
}

fn impl_of<'a>(file: &'a syn::File, trait_name: &str) -> &'a syn::ItemImpl {
    file.items
        .iter()
        .find_map(|item| match item {
            syn::Item::Impl(imp)
                if imp
                    .trait_
                    .as_ref()
                    .is_some_and(|(_, path, _)| path.segments.last().is_some_and(|s| s.ident == trait_name)) =>
            {
                Some(imp)
            }
            _ => None,
        })
        .unwrap_or_else(|| panic!("no impl of {trait_name}"))
}

fn method_names(imp: &syn::ItemImpl) -> Vec<String> {
    imp.items
        .iter()
        .filter_map(|item| match item {
            syn::ImplItem::Fn(f) => Some(f.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

#[test]
#[cfg_attr(miri, ignore)]
fn generates_both_impls() {
    let file = expand(quote! {
        #[derive(Injectable)]
        struct SimpleBean;
    });

    assert_eq!(file.items.len(), 2);
    assert_eq!(method_names(impl_of(&file, "Injectable")), ["construct", "injection_points"]);
    assert_eq!(method_names(impl_of(&file, "Resolvable")), ["instantiate"]);

    let pretty = prettyplease::unparse(&file);
    assert!(pretty.contains("impl ::sharp::Injectable for SimpleBean {"));
    assert!(pretty.contains("impl ::sharp::Resolvable for SimpleBean {"));

    let out = compact(&file);
    assert!(out.contains("constKIND:::sharp::TypeKind=::sharp::TypeKind::Concrete;"));
    assert!(out.contains("container.create::<Self>().map(::std::boxed::Box::new)"));
}

#[test]
#[cfg_attr(miri, ignore)]
fn default_construction_uses_default() {
    let out = compact(&expand(quote! {
        #[derive(Default, Injectable)]
        struct SimpleBean;
    }));

    assert!(out.contains("::std::result::Result::Ok(<Selfas::std::default::Default>::default())"));
}

#[test]
#[cfg_attr(miri, ignore)]
fn custom_constructor_is_called() {
    let out = compact(&expand(quote! {
        #[derive(Injectable)]
        #[injectable(constructor = Self::try_new)]
        struct Pool {
            size: usize,
        }
    }));

    assert!(out.contains("Self::try_new().map_err(::std::convert::Into::<::sharp::BoxError>::into)"));
    assert!(!out.contains("Default"));
}

#[test]
#[cfg_attr(miri, ignore)]
fn fields_follow_visibility() {
    let out = compact(&expand(quote! {
        #[derive(Default, Injectable)]
        struct BeanWithInjectedFields {
            #[inject]
            pub public_object: Option<Box<SimpleBean>>,
            #[inject]
            hidden_object: Option<Box<SimpleBean>>,
            #[inject]
            pub(crate) crate_object: Box<dyn ISimple>,
            untouched: Option<Box<SimpleBean>>,
        }
    }));

    assert!(out.contains(".field::<SimpleBean>(\"public_object\""));
    assert!(out.contains("target.public_object=::std::convert::From::from(value);"));
    assert!(out.contains(".private_field::<SimpleBean>(\"hidden_object\")"));
    assert!(out.contains(".private_field::<dynISimple>(\"crate_object\")"));
    assert!(!out.contains("untouched"));
}

#[test]
#[cfg_attr(miri, ignore)]
fn fields_come_before_setters_in_declaration_order() {
    let out = compact(&expand(quote! {
        #[derive(Default, Injectable)]
        #[injectable(setters(set_second, set_first))]
        struct Bean {
            #[inject]
            pub a: Option<Box<SimpleBean>>,
            #[inject]
            pub b: Option<Box<SimpleBean>>,
        }
    }));

    let positions: Vec<_> = [
        "(\"a\"",
        "(\"b\"",
        ".method(\"set_second\",Self::set_second)",
        ".method(\"set_first\",Self::set_first)",
    ]
    .iter()
    .map(|needle| out.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();

    assert!(positions.is_sorted());
}
