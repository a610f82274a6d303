//! # Enumeration Errors
//!
//! This module defines the [`EnumError`] enum shared by the domain model and `EnumMap`.

use std::borrow::Cow;
use std::fmt;

/// A specialized [`EnumError`] enum for enumeration and map failures.
#[enumkit_derive::enumkit_error]
pub enum EnumError {
    /// The requested constant (or registered domain) does not exist.
    #[error("{message}{}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Wrong key type, rejected value, or a type name that is not an enumeration.
    #[error("Illegal argument{}: {message}", format_context(.context))]
    IllegalArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two constants of different enumeration types were compared.
    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A map did not have the configuration its caller expected.
    #[error(
        "Callee expected an EnumMap with {field} {expected}, but got {actual}{}",
        format_context(.context)
    )]
    Expectation {
        field: MapField,
        expected: Cow<'static, str>,
        actual: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues.
    #[error("Internal enumeration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl EnumError {
    pub(crate) fn illegal_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::IllegalArgument { message: message.into(), context: None }
    }
}

/// The configuration field of an `EnumMap` reported by an [`EnumError::Expectation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapField {
    KeyType,
    ValueType,
    AllowNullValues,
}

impl fmt::Display for MapField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::KeyType => "key type",
            Self::ValueType => "value type",
            Self::AllowNullValues => "nullable flag",
        })
    }
}
