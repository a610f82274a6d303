use crate::macros::{parse_bool_literal, parse_string_literal};
use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Data, DeriveInput, Expr, Fields, Ident, LitStr, Meta, Token, parenthesized};

/// One entry of `#[constants(...)]`: a name with optional construction arguments.
struct ConstantDecl {
    name: Ident,
    args: Vec<Expr>,
}

impl Parse for ConstantDecl {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let name: Ident = input.call(Ident::parse_any)?;
        let mut args = Vec::new();
        if input.peek(syn::token::Paren) {
            let content;
            parenthesized!(content in input);
            let parsed = Punctuated::<Expr, Token![,]>::parse_terminated(&content)?;
            args.extend(parsed);
        }
        Ok(Self { name, args })
    }
}

struct EnumerationArgs {
    type_name: Option<LitStr>,
    accessors: bool,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let vis = &input.vis;

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            ident,
            "Enumeration can only be derived for structs; constants are declared with #[constants(...)]",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Enumeration cannot be derived for generic structs",
        ));
    }

    let args = parse_enumeration_args(input)?;
    let constants = parse_constants(input)?;

    let type_name =
        args.type_name.unwrap_or_else(|| LitStr::new(&ident.to_string(), Span::call_site()));

    let mut declarations = Vec::with_capacity(constants.len());
    let mut accessors = Vec::with_capacity(constants.len());

    for (ordinal, constant) in constants.iter().enumerate() {
        let name = LitStr::new(&constant.name.to_string(), constant.name.span());
        let build = build_expr(ident, &data.fields, constant)?;
        declarations.push(quote! { ::enumkit::Declaration::new(#name, || #build) });

        if args.accessors {
            let accessor = accessor_ident(&constant.name);
            let doc = format!(
                "Returns the `{}` constant.\n\n# Panics\nPanics if called from a declaration \
                 builder of this type before the constant exists.",
                constant.name
            );
            accessors.push(quote! {
                #[doc = #doc]
                #[must_use]
                #[inline]
                #vis fn #accessor() -> &'static ::enumkit::Constant<Self> {
                    match <Self as ::enumkit::EnumDomain>::from_ordinal(#ordinal) {
                        ::core::result::Result::Ok(constant) => constant,
                        ::core::result::Result::Err(err) => ::core::panic!("{err}"),
                    }
                }
            });
        }
    }

    let accessor_impl = if accessors.is_empty() {
        quote! {}
    } else {
        quote! {
            impl #ident {
                #(#accessors)*
            }
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl ::enumkit::Enumeration for #ident {
            const TYPE_NAME: &'static str = #type_name;
            const DECLARATIONS: &'static [::enumkit::Declaration<Self>] = &[
                #(#declarations),*
            ];
        }

        #accessor_impl
    })
}

fn parse_enumeration_args(input: &DeriveInput) -> syn::Result<EnumerationArgs> {
    let mut type_name = None;
    let mut accessors = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("enumeration") {
            continue;
        }

        let metas = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for meta in metas {
            let Meta::NameValue(name_value) = meta else {
                return Err(syn::Error::new_spanned(
                    meta,
                    "Expected `name = \"...\"` or `accessors = bool`",
                ));
            };

            if name_value.path.is_ident("name") {
                if type_name.is_some() {
                    return Err(syn::Error::new_spanned(name_value, "Duplicate `name` argument"));
                }
                let lit = parse_string_literal(&name_value, "name")?;
                if lit.value().trim().is_empty() {
                    return Err(syn::Error::new_spanned(lit, "Type name cannot be empty"));
                }
                type_name = Some(lit);
            } else if name_value.path.is_ident("accessors") {
                if accessors.is_some() {
                    return Err(syn::Error::new_spanned(
                        name_value,
                        "Duplicate `accessors` argument",
                    ));
                }
                accessors = Some(parse_bool_literal(&name_value, "accessors")?);
            } else {
                return Err(syn::Error::new_spanned(
                    name_value.path,
                    "Unsupported argument; expected name or accessors",
                ));
            }
        }
    }

    Ok(EnumerationArgs { type_name, accessors: accessors.unwrap_or(true) })
}

fn parse_constants(input: &DeriveInput) -> syn::Result<Vec<ConstantDecl>> {
    let mut constants: Vec<ConstantDecl> = Vec::new();
    let mut seen = FxHashSet::default();
    let mut found = false;

    for attr in &input.attrs {
        if !attr.path().is_ident("constants") {
            continue;
        }
        found = true;

        let parsed = attr.parse_args_with(Punctuated::<ConstantDecl, Token![,]>::parse_terminated)?;
        for constant in parsed {
            if !seen.insert(constant.name.to_string()) {
                return Err(syn::Error::new_spanned(
                    &constant.name,
                    format!("Duplicate enumeration constant `{}`", constant.name),
                ));
            }
            constants.push(constant);
        }
    }

    if !found {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Missing #[constants(...)] attribute listing the enumeration constants",
        ));
    }

    Ok(constants)
}

fn build_expr(ident: &Ident, fields: &Fields, constant: &ConstantDecl) -> syn::Result<TokenStream> {
    let args = &constant.args;
    let expected = fields.len();

    if args.len() != expected {
        return Err(syn::Error::new_spanned(
            &constant.name,
            format!(
                "Constant `{}` takes {expected} argument(s) for the fields of `{ident}`, got {}",
                constant.name,
                args.len()
            ),
        ));
    }

    Ok(match fields {
        Fields::Unit => quote! { #ident },
        Fields::Unnamed(_) => quote! { #ident( #(#args),* ) },
        Fields::Named(named) => {
            let names = named.named.iter().filter_map(|field| field.ident.as_ref());
            quote! { #ident { #(#names: #args),* } }
        },
    })
}

/// Maps `DARK_BLUE` / `DarkBlue` to `dark_blue`, escaping keywords.
fn accessor_ident(name: &Ident) -> Ident {
    let raw = name.to_string();
    let raw = raw.strip_prefix("r#").unwrap_or(&raw);

    let mut snake = String::with_capacity(raw.len() + 4);
    let mut prev_lower = false;
    for ch in raw.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                snake.push('_');
            }
            snake.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            snake.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }

    if syn::parse_str::<Ident>(&snake).is_ok() {
        return Ident::new(&snake, name.span());
    }
    match snake.as_str() {
        "self" | "super" | "crate" | "_" => format_ident!("{}_", snake, span = name.span()),
        _ => Ident::new_raw(&snake, name.span()),
    }
}
