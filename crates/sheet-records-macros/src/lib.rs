//! Derive macros for sheet-records
//!
//! `#[derive(Record)]` maps header names onto struct fields at compile time,
//! and `#[derive(CellEnum)]` reads and writes fieldless enums by variant name.
//! Generated code refers to the `sheet_records` facade crate.
//!
//! Attributes:
//! - `#[sheet(name = "...")]` on a struct sets the default sheet name
//! - `#[sheet(rename = "...")]` on a field or variant changes the name it is matched by
//! - `#[sheet(skip)]` on a field leaves it out of reading and writing

use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse_macro_input, spanned::Spanned, Attribute, Data, DeriveInput, Fields, Ident, LitStr,
};

/* ────────────────────────── #[derive(Record)] ───────────────────────── */

#[proc_macro_derive(Record, attributes(sheet))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_record(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "Record cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new(
                    Span::call_site(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new(
                Span::call_site(),
                "Record can only be derived for structs",
            ))
        }
    };

    let sheet_name = parse_container_attrs(&input.attrs)?.unwrap_or_else(|| ident.unraw());

    let mut names = Vec::new();
    let mut members = Vec::new();
    let mut types = Vec::new();
    let mut seen = HashSet::new();

    for field in fields {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        // Named fields always have an ident
        let Some(member) = field.ident.as_ref() else {
            continue;
        };
        let name = attrs.rename.unwrap_or_else(|| member.unraw());

        if !seen.insert(name.clone()) {
            return Err(syn::Error::new(
                member.span(),
                format!("duplicate header name {name:?}"),
            ));
        }

        names.push(name);
        members.push(member);
        types.push(&field.ty);
    }

    let expanded = quote! {
        impl ::sheet_records::Record for #ident {
            fn type_name() -> &'static str {
                #sheet_name
            }

            fn fields() -> &'static [::sheet_records::FieldInfo] {
                const FIELDS: &[::sheet_records::FieldInfo] = &[
                    #(
                        ::sheet_records::FieldInfo::new(
                            #names,
                            <#types as ::sheet_records::CellField>::KIND,
                            <#types as ::sheet_records::CellField>::NULLABLE,
                        )
                    ),*
                ];
                FIELDS
            }

            #[allow(unused_variables)]
            fn set_field(&mut self, name: &str, text: &str) -> ::sheet_records::FieldAssignment {
                match name {
                    #(
                        #names => <#types as ::sheet_records::CellField>::assign(&mut self.#members, text),
                    )*
                    _ => ::sheet_records::FieldAssignment::Unknown,
                }
            }

            fn field_cells(&self) -> ::std::vec::Vec<::std::option::Option<::sheet_records::CellContent>> {
                ::std::vec![
                    #( ::sheet_records::CellField::to_cell(&self.#members) ),*
                ]
            }
        }
    };

    Ok(expanded)
}

/* ───────────────────────── #[derive(CellEnum)] ──────────────────────── */

#[proc_macro_derive(CellEnum, attributes(sheet))]
pub fn derive_cell_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_cell_enum(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_cell_enum(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "CellEnum cannot be derived for generic types",
        ));
    }

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(
            Span::call_site(),
            "CellEnum can only be derived for enums",
        ));
    };

    let mut names = Vec::new();
    let mut variants = Vec::new();
    let mut seen = HashSet::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "CellEnum variants cannot carry data",
            ));
        }

        let attrs = parse_field_attrs(&variant.attrs)?;
        if attrs.skip {
            return Err(syn::Error::new(
                variant.span(),
                "`skip` is not supported on enum variants",
            ));
        }

        let name = attrs.rename.unwrap_or_else(|| variant.ident.unraw());
        if !seen.insert(name.clone()) {
            return Err(syn::Error::new(
                variant.span(),
                format!("duplicate variant name {name:?}"),
            ));
        }

        names.push(name);
        variants.push(&variant.ident);
    }

    let expanded = quote! {
        impl ::sheet_records::CellEnum for #ident {
            const VARIANTS: &'static [(&'static str, Self)] = &[
                #( (#names, Self::#variants) ),*
            ];

            fn from_name(name: &str) -> ::std::option::Option<Self> {
                match name {
                    #( #names => ::std::option::Option::Some(Self::#variants), )*
                    _ => ::std::option::Option::None,
                }
            }

            fn name(&self) -> &'static str {
                match *self {
                    #( Self::#variants => #names, )*
                }
            }
        }

        impl ::sheet_records::CellField for #ident {
            const KIND: ::sheet_records::FieldKind = ::sheet_records::FieldKind::Enumeration;

            fn coerce(text: &str) -> ::std::option::Option<Self> {
                ::sheet_records::coerce_enum(text)
            }

            fn to_cell(&self) -> ::std::option::Option<::sheet_records::CellContent> {
                ::sheet_records::enum_to_cell(self)
            }
        }
    };

    Ok(expanded)
}

/* ───────────────────────────── attributes ───────────────────────────── */

#[derive(Default)]
struct FieldAttrs {
    skip: bool,
    rename: Option<String>,
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("sheet")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `rename = \"...\"`"))
            }
        })?;
    }

    Ok(parsed)
}

fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut name = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("sheet")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(name)
}

/// Identifier text without a raw `r#` prefix
trait Unraw {
    fn unraw(&self) -> String;
}

impl Unraw for Ident {
    fn unraw(&self) -> String {
        let s = self.to_string();
        s.strip_prefix("r#").map(str::to_string).unwrap_or(s)
    }
}
