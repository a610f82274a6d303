pub mod enumeration;
pub mod error;
pub mod map_value;

use syn::{Expr, Lit, LitStr, MetaNameValue};

pub(crate) fn parse_string_literal(
    name_value: &MetaNameValue,
    label: &str,
) -> Result<LitStr, syn::Error> {
    if let Expr::Lit(expr_lit) = &name_value.value
        && let Lit::Str(lit) = &expr_lit.lit
    {
        return Ok(lit.clone());
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a string literal")))
}

pub(crate) fn parse_bool_literal(name_value: &MetaNameValue, label: &str) -> Result<bool, syn::Error> {
    if let Expr::Lit(expr_lit) = &name_value.value
        && let Lit::Bool(lit) = &expr_lit.lit
    {
        return Ok(lit.value);
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a boolean literal")))
}
