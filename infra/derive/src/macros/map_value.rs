use crate::macros::parse_string_literal;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{DeriveInput, LitStr, Meta, Token};

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = match parse_name(&input) {
        Ok(name) => name,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        #[automatically_derived]
        impl #impl_generics ::enumkit::MapValue for #ident #ty_generics #where_clause {
            #[inline]
            fn value_type() -> ::enumkit::ValueType {
                ::enumkit::ValueType::Named(#name)
            }
        }
    }
}

fn parse_name(input: &DeriveInput) -> syn::Result<LitStr> {
    let mut name = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("map_value") {
            continue;
        }
        let metas = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for meta in metas {
            let Meta::NameValue(name_value) = meta else {
                return Err(syn::Error::new_spanned(meta, "Expected `name = \"...\"`"));
            };
            if !name_value.path.is_ident("name") {
                return Err(syn::Error::new_spanned(
                    name_value.path,
                    "Only `name = \"...\"` is supported",
                ));
            }
            if name.is_some() {
                return Err(syn::Error::new_spanned(name_value, "Duplicate `name` argument"));
            }
            name = Some(parse_string_literal(&name_value, "name")?);
        }
    }

    Ok(name.unwrap_or_else(|| LitStr::new(&input.ident.to_string(), Span::call_site())))
}
