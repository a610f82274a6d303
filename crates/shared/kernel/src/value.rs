//! Value-type constraints for [`EnumMap`](crate::EnumMap) values.
//!
//! The constraint is fixed by the map's value type parameter at compile time; [`ValueType`]
//! is its runtime name, written into payloads and checked by `expect`.

use serde_json::{Map, Value};
use std::fmt;

/// The declared type of values a map accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Int,
    Float,
    String,
    /// Any sequence.
    Array,
    /// Any key/value object.
    Object,
    /// Any value, including null.
    Mixed,
    /// A specific user type.
    Named(&'static str),
}

impl ValueType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Mixed => "mixed",
            Self::Named(name) => name,
        }
    }

    /// Returns `true` if `name` denotes this type. Accepts `boolean`, `integer` and `double`
    /// as aliases.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Bool => matches!(name, "bool" | "boolean"),
            Self::Int => matches!(name, "int" | "integer"),
            Self::Float => matches!(name, "float" | "double"),
            other => other.as_str() == name,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type that can be stored in an [`EnumMap`](crate::EnumMap).
///
/// Derive it for your own types with `#[derive(MapValue)]`.
pub trait MapValue {
    fn value_type() -> ValueType;

    /// Whether this value stands for null. Only dynamically typed values can be.
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! impl_map_value {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl MapValue for $ty {
                #[inline]
                fn value_type() -> ValueType {
                    ValueType::$kind
                }
            }
        )+
    };
}

impl_map_value!(Bool => bool);
impl_map_value!(Int => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_map_value!(Float => f32, f64);
impl_map_value!(String => String, &'static str);
impl_map_value!(Object => Map<String, Value>);

impl<T: MapValue> MapValue for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::Array
    }
}

impl<T: MapValue> MapValue for Box<T> {
    fn value_type() -> ValueType {
        T::value_type()
    }

    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl MapValue for Value {
    fn value_type() -> ValueType {
        ValueType::Mixed
    }

    fn is_null(&self) -> bool {
        Self::is_null(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitive_kinds() {
        assert_eq!(bool::value_type(), ValueType::Bool);
        assert_eq!(u16::value_type(), ValueType::Int);
        assert_eq!(f32::value_type(), ValueType::Float);
        assert_eq!(String::value_type(), ValueType::String);
        assert_eq!(Vec::<i64>::value_type(), ValueType::Array);
        assert_eq!(Map::<String, Value>::value_type(), ValueType::Object);
        assert_eq!(Value::value_type(), ValueType::Mixed);
    }

    #[test]
    fn aliases_match() {
        assert!(ValueType::Bool.matches("boolean"));
        assert!(ValueType::Int.matches("integer"));
        assert!(ValueType::Float.matches("double"));
        assert!(ValueType::Named("Card").matches("Card"));
        assert!(!ValueType::Int.matches("float"));
        assert!(!ValueType::Mixed.matches("object"));
    }

    #[test]
    fn only_mixed_values_can_be_null() {
        assert!(MapValue::is_null(&Value::Null));
        assert!(!MapValue::is_null(&json!(0)));
        assert!(!MapValue::is_null(&0_i64));
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(ValueType::Int.to_string(), "int");
        assert_eq!(ValueType::Named("Card").to_string(), "Card");
    }
}
