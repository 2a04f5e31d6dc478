// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use syn::{Attribute, GenericArgument, Ident, Meta, Path, PathArguments, Type};

/// Options read from `#[injectable(...)]` on the deriving struct.
#[derive(Default, Debug)]
pub struct StructAttrCfg {
    pub setters: Vec<Ident>,
    pub constructor: Option<Path>,
}

pub fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrCfg> {
    let mut cfg = StructAttrCfg::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("injectable")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("setters") {
                meta.parse_nested_meta(|setter| {
                    let Some(ident) = setter.path.get_ident() else {
                        return Err(setter.error("expected a method name"));
                    };
                    if cfg.setters.contains(ident) {
                        return Err(setter.error(format!("duplicate setter '{ident}'")));
                    }
                    cfg.setters.push(ident.clone());
                    Ok(())
                })
            } else if meta.path.is_ident("constructor") {
                if cfg.constructor.is_some() {
                    return Err(meta.error("duplicate 'constructor'"));
                }
                cfg.constructor = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown injectable attribute (expected 'setters' or 'constructor')"))
            }
        })?;
    }
    Ok(cfg)
}

/// Whether a field carries `#[inject]`.
pub fn is_marked(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut marked = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("inject")) {
        if !matches!(attr.meta, Meta::Path(_)) {
            return Err(syn::Error::new_spanned(attr, "'inject' takes no arguments"));
        }
        if marked {
            return Err(syn::Error::new_spanned(attr, "duplicate 'inject'"));
        }
        marked = true;
    }
    Ok(marked)
}

/// The type a marked field holds: `T` in `Box<T>` or `Option<Box<T>>`.
pub fn declared_type(ty: &Type) -> syn::Result<&Type> {
    let inner = single_argument(ty, "Option").unwrap_or(ty);
    single_argument(inner, "Box")
        .ok_or_else(|| syn::Error::new_spanned(ty, "injected fields must be `Box<T>` or `Option<Box<T>>`"))
}

fn single_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(tp) = ty else {
        return None;
    };
    let segment = tp.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.iter().collect::<Vec<_>>().as_slice() {
        [GenericArgument::Type(inner)] => Some(inner),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use syn::parse_quote;

    use super::*;

    fn tokens(ty: &Type) -> String {
        ty.to_token_stream().to_string()
    }

    #[test]
    fn struct_attrs_default_to_nothing() {
        let attrs: Vec<Attribute> = vec![parse_quote! { #[derive(Default)] }];
        let cfg = parse_struct_attrs(&attrs).unwrap();
        assert!(cfg.setters.is_empty());
        assert!(cfg.constructor.is_none());
    }

    #[test]
    fn setters_keep_their_order() {
        let attrs: Vec<Attribute> = vec![
            parse_quote! { #[injectable(setters(set_b, set_a))] },
            parse_quote! { #[injectable(setters(set_c))] },
        ];
        let cfg = parse_struct_attrs(&attrs).unwrap();
        let names: Vec<_> = cfg.setters.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["set_b", "set_a", "set_c"]);
    }

    #[test]
    fn constructor_is_a_path() {
        let attrs: Vec<Attribute> = vec![parse_quote! { #[injectable(constructor = Self::try_new)] }];
        let cfg = parse_struct_attrs(&attrs).unwrap();
        let expected: Path = parse_quote!(Self::try_new);
        assert_eq!(cfg.constructor, Some(expected));
    }

    #[test]
    fn duplicate_setter_is_rejected() {
        let attrs: Vec<Attribute> = vec![parse_quote! { #[injectable(setters(set_a, set_a))] }];
        let err = parse_struct_attrs(&attrs).unwrap_err();
        assert!(err.to_string().contains("duplicate setter 'set_a'"));
    }

    #[test]
    fn duplicate_constructor_is_rejected() {
        let attrs: Vec<Attribute> = vec![
            parse_quote! { #[injectable(constructor = a)] },
            parse_quote! { #[injectable(constructor = b)] },
        ];
        let err = parse_struct_attrs(&attrs).unwrap_err();
        assert!(err.to_string().contains("duplicate 'constructor'"));
    }

    #[test]
    fn unknown_struct_attr_is_rejected() {
        let attrs: Vec<Attribute> = vec![parse_quote! { #[injectable(singleton)] }];
        let err = parse_struct_attrs(&attrs).unwrap_err();
        assert!(err.to_string().contains("unknown injectable attribute"));
    }

    #[test]
    fn setter_must_be_a_plain_name() {
        let attrs: Vec<Attribute> = vec![parse_quote! { #[injectable(setters(Self::set_a))] }];
        let err = parse_struct_attrs(&attrs).unwrap_err();
        assert!(err.to_string().contains("expected a method name"));
    }

    #[test]
    fn inject_marks_a_field() {
        let attrs: Vec<Attribute> = vec![parse_quote! { #[doc = "x"] }, parse_quote! { #[inject] }];
        assert!(is_marked(&attrs).unwrap());
        assert!(!is_marked(&attrs[..1]).unwrap());
    }

    #[test]
    fn inject_rejects_arguments_and_duplicates() {
        let with_args: Vec<Attribute> = vec![parse_quote! { #[inject(lazy)] }];
        assert!(is_marked(&with_args).unwrap_err().to_string().contains("takes no arguments"));

        let twice: Vec<Attribute> = vec![parse_quote! { #[inject] }, parse_quote! { #[inject] }];
        assert!(is_marked(&twice).unwrap_err().to_string().contains("duplicate 'inject'"));
    }

    #[test]
    fn declared_type_unwraps_box_and_option() {
        let boxed: Type = parse_quote!(Box<SimpleBean>);
        let optional: Type = parse_quote!(Option<Box<dyn ISimple>>);
        let qualified: Type = parse_quote!(::std::option::Option<::std::boxed::Box<a::B>>);

        assert_eq!(tokens(declared_type(&boxed).unwrap()), "SimpleBean");
        assert_eq!(tokens(declared_type(&optional).unwrap()), "dyn ISimple");
        assert_eq!(tokens(declared_type(&qualified).unwrap()), "a :: B");
    }

    #[test]
    fn declared_type_rejects_other_shapes() {
        let shapes: [Type; 4] = [
            parse_quote!(SimpleBean),
            parse_quote!(Option<SimpleBean>),
            parse_quote!(Rc<SimpleBean>),
            parse_quote!(&'static SimpleBean),
        ];
        for ty in shapes {
            let err = declared_type(&ty).unwrap_err();
            assert!(err.to_string().contains("must be `Box<T>` or `Option<Box<T>>`"));
        }
    }
}
