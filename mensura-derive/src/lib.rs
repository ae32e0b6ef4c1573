//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `UnitKind` derive expands in terms of
//! `crate::UnitKind`, so it is intended to be used by `mensura-core` (or by crates that expose an identical
//! crate-root API).
//!
//! Most users should depend on `mensura` instead and use the predefined quantity kinds.
//!
//! # Generated impls
//!
//! For a field-less enum `MyUnit`, the derive implements:
//!
//! - `crate::UnitKind for MyUnit` (the closed `ALL` list and the per-variant identifier)
//! - `core::fmt::Display for MyUnit` (formats as the unit identifier)
//!
//! # Attributes
//!
//! Each variant may carry an optional `#[unit(...)]` attribute:
//!
//! - `name = "Volt"`: identifier used by configuration files; defaults to the variant name

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident, LitStr, Token,
};

/// Derive `crate::UnitKind` and a `Display` impl for a field-less unit enum.
///
/// Every variant becomes one member of the kind's closed unit set, in declaration order.
///
/// This macro is intended for use by `mensura-core`.
#[proc_macro_derive(UnitKind, attributes(unit))]
pub fn derive_unit_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_kind_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_kind_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "`UnitKind` can only be derived for enums",
            ))
        }
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "`UnitKind` requires at least one unit variant",
        ));
    }

    let mut variants: Vec<&Ident> = Vec::with_capacity(data.variants.len());
    let mut names: Vec<String> = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "unit variants cannot carry fields",
            ));
        }

        let attr = parse_variant_attribute(&variant.attrs)?;
        let unit_name = attr
            .name
            .map(|lit| lit.value())
            .unwrap_or_else(|| variant.ident.to_string());

        if names.contains(&unit_name) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("duplicate unit name `{}`", unit_name),
            ));
        }

        variants.push(&variant.ident);
        names.push(unit_name);
    }

    let expanded = quote! {
        impl crate::UnitKind for #name {
            const ALL: &'static [Self] = &[#(Self::#variants),*];

            fn name(self) -> &'static str {
                match self {
                    #(Self::#variants => #names,)*
                }
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<#name as crate::UnitKind>::name(*self))
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of a variant's `#[unit(...)]` attribute.
#[derive(Default)]
struct UnitAttribute {
    name: Option<LitStr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    if lit.value().trim().is_empty() {
                        return Err(syn::Error::new(lit.span(), "unit name cannot be empty"));
                    }
                    name = Some(lit);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(UnitAttribute { name })
    }
}

fn parse_variant_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Ok(UnitAttribute::default())
}
