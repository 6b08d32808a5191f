// File: rusty-rules-derive/src/reflect.rs
// Purpose: Reflect derive macro and #[validate] attribute processing

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    parse_quote, Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Generics, Lit, LitStr, Meta,
    Type, Visibility,
};

/// A named field as the derive sees it
struct FieldSpec<'a> {
    ident: &'a syn::Ident,
    ty: &'a Type,
    readable: bool,
    annotation: Option<LitStr>,
}

/// Parse the `#[validate]` annotation from a field, if any
///
/// Accepts `#[validate("len:5")]` and `#[validate = "len:5"]`.
fn extract_annotation(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;

    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }

        let annotation = match &attr.meta {
            Meta::List(_) => attr.parse_args::<LitStr>()?,
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => s.clone(),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a string literal: #[validate = \"rule:param\"]",
                    ))
                }
            },
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "missing annotation: #[validate(\"rule:param\")]",
                ))
            }
        };

        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "only one #[validate] annotation is allowed per field",
            ));
        }
        found = Some(annotation);
    }

    Ok(found)
}

fn collect_fields(input: &DeriveInput) -> syn::Result<Vec<FieldSpec<'_>>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Reflect only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect only supports structs",
            ))
        }
    };

    fields
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
            Ok(FieldSpec {
                ident,
                ty: &field.ty,
                readable: matches!(field.vis, Visibility::Public(_)),
                annotation: extract_annotation(&field.attrs)?,
            })
        })
        .collect()
}

/// Bound the type of every readable field; private fields stay unconstrained
fn add_reflect_bounds(mut generics: Generics, fields: &[FieldSpec<'_>]) -> Generics {
    if generics.params.is_empty() {
        return generics;
    }

    let where_clause = generics.make_where_clause();
    for field in fields.iter().filter(|f| f.readable) {
        let ty = field.ty;
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::rusty_rules::Reflect));
    }
    generics
}

/// Generate the Reflect implementation for a struct
pub fn impl_reflect(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();
    let fields = collect_fields(input)?;

    let generics = add_reflect_bounds(input.generics.clone(), &fields);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let push_fields = fields.iter().filter(|f| f.readable).map(|f| {
        let ident = f.ident;
        let field_name = ident.unraw().to_string();
        quote! {
            record.push_field(#field_name, ::rusty_rules::Reflect::reflect(&self.#ident));
        }
    });

    let push_rules = fields.iter().filter_map(|f| {
        let annotation = f.annotation.as_ref()?;
        let field_name = f.ident.unraw().to_string();
        Some(quote! {
            record.push_rule(#field_name, #annotation);
        })
    });

    Ok(quote! {
        impl #impl_generics ::rusty_rules::Reflect for #name #ty_generics #where_clause {
            fn reflect(&self) -> ::rusty_rules::Value {
                #[allow(unused_mut)]
                let mut record = ::rusty_rules::RecordValue::new(#name_str);
                #(#push_fields)*
                #(#push_rules)*
                ::rusty_rules::Value::Record(record)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_annotation_forms() {
        let list: Attribute = parse_quote!(#[validate("len:5")]);
        let name_value: Attribute = parse_quote!(#[validate = "min:1"]);
        let other: Attribute = parse_quote!(#[serde(rename = "x")]);

        let found = extract_annotation(&[other.clone(), list]).unwrap();
        assert_eq!(found.map(|s| s.value()), Some("len:5".to_string()));

        let found = extract_annotation(&[name_value]).unwrap();
        assert_eq!(found.map(|s| s.value()), Some("min:1".to_string()));

        assert!(extract_annotation(&[other]).unwrap().is_none());
    }

    #[test]
    fn test_extract_annotation_rejects_duplicates_and_bad_forms() {
        let a: Attribute = parse_quote!(#[validate("len:5")]);
        let b: Attribute = parse_quote!(#[validate("max:9")]);
        assert!(extract_annotation(&[a, b]).is_err());

        let bare: Attribute = parse_quote!(#[validate]);
        assert!(extract_annotation(&[bare]).is_err());

        let number: Attribute = parse_quote!(#[validate = 5]);
        assert!(extract_annotation(&[number]).is_err());
    }

    #[test]
    fn test_visibility_decides_readability() {
        let input: DeriveInput = parse_quote! {
            struct Account {
                #[validate("len:3")]
                pub login: String,
                #[validate("len:64")]
                secret: String,
                pub(crate) note: String,
            }
        };

        let fields = collect_fields(&input).unwrap();
        let summary: Vec<_> = fields
            .iter()
            .map(|f| (f.ident.to_string(), f.readable, f.annotation.is_some()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("login".to_string(), true, true),
                ("secret".to_string(), false, true),
                ("note".to_string(), false, false),
            ]
        );
    }

    #[test]
    fn test_rejects_non_structs() {
        let tuple: DeriveInput = parse_quote!(struct Pair(pub i32, pub i32););
        assert!(impl_reflect(&tuple).is_err());

        let enumeration: DeriveInput = parse_quote!(enum Kind { A, B });
        assert!(impl_reflect(&enumeration).is_err());
    }

    #[test]
    fn test_generated_impl_mentions_only_readable_fields() {
        let input: DeriveInput = parse_quote! {
            struct Account<T> {
                #[validate("min:1")]
                pub id: T,
                #[validate("len:64")]
                secret: String,
            }
        };

        let tokens = impl_reflect(&input).unwrap().to_string();
        assert!(tokens.contains("push_field (\"id\""));
        assert!(!tokens.contains("push_field (\"secret\""));
        assert!(tokens.contains("push_rule (\"secret\" , \"len:64\")"));
        assert!(tokens.contains("T : :: rusty_rules :: Reflect"));
    }

    #[test]
    fn test_private_field_types_are_not_bounded() {
        let input: DeriveInput = parse_quote! {
            struct Holder<T, C> {
                #[validate("len:2")]
                pub name: Vec<T>,
                cache: C,
            }
        };

        let tokens = impl_reflect(&input).unwrap().to_string();
        assert!(tokens.contains("Vec < T > : :: rusty_rules :: Reflect"));
        assert!(!tokens.contains("C : :: rusty_rules :: Reflect"));
    }

    #[test]
    fn test_non_generic_records_get_no_where_clause() {
        let input: DeriveInput = parse_quote! {
            struct Plain {
                pub name: String,
            }
        };

        let tokens = impl_reflect(&input).unwrap().to_string();
        assert!(!tokens.contains("where"));
    }
}
