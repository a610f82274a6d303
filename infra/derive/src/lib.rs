#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the enumkit workspace.
//! This crate turns plain struct declarations into registered enumeration domains,
//! tags value types for `EnumMap` constraints, and wires up domain error enums.
//!
//! ## Usage
//! Consumers should depend on the `enumkit` facade; the derives emit `::enumkit::...` paths:
//! ```toml
//! [dependencies]
//! enumkit = { path = "../crates/enumkit" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but are exercised by the trybuild cases under `tests/ui`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `Enumeration` for a struct, turning it into the payload of a fixed set of
/// named singleton constants.
///
/// Constants are listed in declaration order with `#[constants(...)]`; the position
/// of each entry becomes its ordinal. Arguments in parentheses are passed positionally
/// to the struct's fields when the constant is first materialized.
///
/// # Attributes
///
/// * `#[constants(A, B(1, 2), ...)]` - Required. Declared constants in ordinal order.
/// * `#[enumeration(name = "...")]` - Overrides the type name written into payloads.
///   Defaults to the struct identifier.
/// * `#[enumeration(accessors = false)]` - Skips the generated snake-case accessors.
///
/// # Errors
///
/// Emits a compile-time error for enums, unions, generic structs, duplicate constant
/// names, or argument lists whose length differs from the struct's field count.
///
/// # Example
///
/// ```rust,ignore
/// use enumkit::prelude::*;
///
/// #[derive(Debug, Enumeration)]
/// #[constants(MERCURY(3.303e23, 2.4397e6), VENUS(4.869e24, 6.0518e6))]
/// pub struct Planet {
///     mass: f64,
///     radius: f64,
/// }
///
/// let venus = Planet::venus();
/// assert_eq!(venus.ordinal(), 1);
/// assert!(venus.mass > 1.0e24);
/// ```
#[proc_macro_derive(Enumeration, attributes(enumeration, constants))]
pub fn derive_enumeration(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::enumeration::expand_derive(input).into()
}

/// Derives `MapValue`, giving the type a named `ValueType` constraint.
///
/// # Attributes
///
/// * `#[map_value(name = "...")]` - Overrides the constraint name. Defaults to the type identifier.
///
/// # Example
///
/// ```rust,ignore
/// use enumkit::prelude::*;
///
/// #[derive(Debug, PartialEq, MapValue)]
/// struct Card {
///     rank: u8,
/// }
///
/// assert_eq!(Card::value_type(), ValueType::Named("Card"));
/// ```
#[proc_macro_derive(MapValue, attributes(map_value))]
pub fn derive_map_value(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::map_value::expand_derive(input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Introspection**: Generates `kind()` (the variant name) and `context()` accessors.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` if an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source` field (or `#[source]`/`#[from]`)
///    and a context field.
///
/// # Example
///
/// ```rust,ignore
/// use enumkit_derive::enumkit_error;
/// use std::borrow::Cow;
///
/// #[enumkit_error]
/// pub enum LookupError {
///     #[error("Missing entry{}: {message}", format_context(.context))]
///     Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn enumkit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
