//! Proc macros that derive table-driven JSON conversion for fieldless enums.
//!
//! `EnumEntries` reflects an enum's members and declared names in
//! declaration order. `JsonEnum` additionally registers the enum's mapping
//! table, including any overrides, and implements `serde::Serialize` and
//! `serde::Deserialize` on top of it.
//!
//! # Example
//! ```rust,ignore
//! use json_enum_map::JsonEnum;
//!
//! #[derive(Clone, Copy, PartialEq, JsonEnum)]
//! #[json_enum(overrides(Legacy = "old-name", Missing = null))]
//! enum Kind {
//!     Current,
//!     Legacy,
//!     Missing,
//! }
//!
//! let json = serde_json::to_string(&Kind::Legacy).unwrap();
//! ```
use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{
    parse_macro_input, spanned::Spanned, Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit,
    ExprUnary, Fields, Ident, Lit, LitStr, UnOp,
};

/// Derives `EnumEntries` for a fieldless enum.
#[proc_macro_derive(EnumEntries)]
pub fn derive_enum_entries(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_enum_entries(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derives `EnumEntries`, `JsonEnum`, `serde::Serialize` and
/// `serde::Deserialize` for a fieldless enum.
#[proc_macro_derive(JsonEnum, attributes(json_enum))]
pub fn derive_json_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_json_enum(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_enum_entries(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let data = fieldless_enum(input, "EnumEntries")?;
    let name = &input.ident;
    let entries = data.variants.iter().map(|variant| {
        let ident = &variant.ident;
        let declared = LitStr::new(&ident.to_string(), ident.span());
        quote! { (#name::#ident, #declared) }
    });

    Ok(quote! {
        impl ::json_enum_map::EnumEntries for #name {
            const ENTRIES: &'static [(Self, &'static str)] = &[#(#entries),*];
        }
    })
}

fn expand_json_enum(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let entries_impl = expand_enum_entries(input)?;
    let data = fieldless_enum(input, "JsonEnum")?;
    let name = &input.ident;

    let overrides = parse_overrides(&input.attrs)?;
    let mut override_entries = Vec::with_capacity(overrides.len());
    for entry in &overrides {
        if !data
            .variants
            .iter()
            .any(|variant| variant.ident == entry.variant)
        {
            return Err(syn::Error::new(
                entry.variant.span(),
                format!("`{}` has no variant named `{}`", name, entry.variant),
            ));
        }
        let variant = &entry.variant;
        let value = representation_expr(&entry.value)?;
        override_entries.push(quote! { (#name::#variant, #value) });
    }

    let overrides_expr = if override_entries.is_empty() {
        quote! { ::core::iter::empty() }
    } else {
        quote! { [#(#override_entries),*] }
    };

    Ok(quote! {
        #entries_impl

        impl ::json_enum_map::JsonEnum for #name {
            fn mapping() -> &'static ::json_enum_map::MappingTable<Self> {
                static TABLE: ::std::sync::OnceLock<::json_enum_map::MappingTable<#name>> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| ::json_enum_map::MappingTable::for_enum(#overrides_expr))
            }
        }

        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(&::json_enum_map::Lenient::new(self), serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                <::json_enum_map::LenientValue<#name> as ::serde::Deserialize>::deserialize(
                    deserializer,
                )
                .map(|value| value.0)
            }
        }
    })
}

/// Checks that the input is an enum with at least one variant and no
/// variant fields.
fn fieldless_enum<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<&'a DataEnum> {
    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(_) | Data::Union(_) => {
            return Err(syn::Error::new(
                input.span(),
                format!("{derive} can only be derived for enums"),
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            format!("{derive} does not support generic enums"),
        ));
    }

    if data.variants.is_empty() {
        return Err(syn::Error::new(
            input.ident.span(),
            format!("{derive} requires at least one variant"),
        ));
    }

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.fields.span(),
                format!("{derive} only supports variants without fields"),
            ));
        }
    }

    Ok(data)
}

struct Override {
    variant: Ident,
    value: Expr,
}

fn parse_overrides(attrs: &[Attribute]) -> syn::Result<Vec<Override>> {
    let mut overrides = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("json_enum") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("overrides") {
                meta.parse_nested_meta(|entry| {
                    let variant = entry.path.require_ident()?.clone();
                    let value: Expr = entry.value()?.parse()?;
                    overrides.push(Override { variant, value });
                    Ok(())
                })
            } else {
                Err(meta.error("unsupported json_enum attribute, expected `overrides(...)`"))
            }
        })?;
    }

    Ok(overrides)
}

/// Turns an override value into an expression producing a
/// `json_enum_map::Representation`.
///
/// Literals and `null` map directly to JSON values; integer and float
/// literals are pinned to `i64`/`u64`/`f64` so they do not depend on literal
/// type inference. Anything else must convert with `Into`.
fn representation_expr(value: &Expr) -> syn::Result<proc_macro2::TokenStream> {
    let representation = quote! { ::json_enum_map::Representation };
    let tokens = match value {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Str(lit) => quote! { #representation::String(::std::string::String::from(#lit)) },
            Lit::Bool(lit) => quote! { #representation::Bool(#lit) },
            Lit::Int(lit) => {
                let number = if let Ok(value) = lit.base10_parse::<i64>() {
                    Literal::i64_suffixed(value)
                } else {
                    Literal::u64_suffixed(lit.base10_parse::<u64>()?)
                };
                quote! { #representation::from(#number) }
            }
            Lit::Float(lit) => {
                let number = Literal::f64_suffixed(finite_float(lit)?);
                quote! { #representation::from(#number) }
            }
            _ => {
                return Err(syn::Error::new(
                    lit.span(),
                    "override literals must be strings, numbers or booleans",
                ));
            }
        },
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => match expr.as_ref() {
            Expr::Lit(ExprLit {
                lit: Lit::Int(lit), ..
            }) => {
                let magnitude = lit.base10_parse::<i128>()?;
                let value = i64::try_from(-magnitude)
                    .map_err(|_| syn::Error::new(lit.span(), NEGATIVE_OUT_OF_RANGE))?;
                let number = Literal::i64_suffixed(value);
                quote! { #representation::from(#number) }
            }
            Expr::Lit(ExprLit {
                lit: Lit::Float(lit),
                ..
            }) => {
                let number = Literal::f64_suffixed(-finite_float(lit)?);
                quote! { #representation::from(#number) }
            }
            _ => into_representation(value),
        },
        Expr::Path(path) if path.path.is_ident("null") => quote! { #representation::Null },
        _ => into_representation(value),
    };
    Ok(tokens)
}

const NEGATIVE_OUT_OF_RANGE: &str = "negative override out of i64 range";

fn finite_float(lit: &syn::LitFloat) -> syn::Result<f64> {
    let value = lit.base10_parse::<f64>()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(syn::Error::new(lit.span(), "override float must be finite"))
    }
}

fn into_representation(value: &Expr) -> proc_macro2::TokenStream {
    quote! {
        ::core::convert::Into::<::json_enum_map::Representation>::into(#value)
    }
}
