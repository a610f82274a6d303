use super::{EnumMap, check_config};
use crate::value::{MapValue, ValueType};
use enumkit_domain::{EnumError, Enumeration};
use std::any::Any;

/// Type-erased view of an [`EnumMap`], for code that receives maps of several key or value
/// types and must confirm what it got before using it.
///
/// ```rust
/// use enumkit_kernel::{AnyEnumMap, EnumMap};
/// # use enumkit_kernel::domain::{Declaration, Enumeration};
/// # #[derive(Debug)]
/// # struct Suit;
/// # impl Enumeration for Suit {
/// #     const TYPE_NAME: &'static str = "Suit";
/// #     const DECLARATIONS: &'static [Declaration<Self>] = &[Declaration::new("HEARTS", || Suit)];
/// # }
///
/// let erased: Box<dyn AnyEnumMap> = Box::new(EnumMap::<Suit, i64>::new(false));
/// let typed = erased.expect::<Suit, i64>(false).unwrap();
/// assert!(typed.is_empty());
/// assert!(erased.expect::<Suit, String>(false).is_err());
/// ```
pub trait AnyEnumMap: Any {
    fn key_type(&self) -> &'static str;

    fn value_type(&self) -> ValueType;

    fn allows_null_values(&self) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the mapped keys, in ordinal order.
    fn keys(&self) -> Vec<&'static str>;

    fn clear(&mut self);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<K: Enumeration, V: MapValue + 'static> AnyEnumMap for EnumMap<K, V> {
    fn key_type(&self) -> &'static str {
        K::TYPE_NAME
    }

    fn value_type(&self) -> ValueType {
        V::value_type()
    }

    fn allows_null_values(&self) -> bool {
        self.allow_null_values
    }

    fn len(&self) -> usize {
        self.size
    }

    fn keys(&self) -> Vec<&'static str> {
        Self::keys(self).map(|key| key.name()).collect()
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl dyn AnyEnumMap {
    /// Confirms the erased map is an `EnumMap<K, V>` with the given nullability and returns it.
    ///
    /// # Errors
    /// Returns [`EnumError::Expectation`] naming the first field that differs.
    pub fn expect<K: Enumeration, V: MapValue + 'static>(
        &self,
        allow_null_values: bool,
    ) -> Result<&EnumMap<K, V>, EnumError> {
        self.check::<K, V>(allow_null_values)?;
        self.as_any().downcast_ref().ok_or_else(|| unrelated_type::<K, V>())
    }

    /// Mutable form of [`expect`](#method.expect).
    ///
    /// # Errors
    /// Returns [`EnumError::Expectation`] naming the first field that differs.
    pub fn expect_mut<K: Enumeration, V: MapValue + 'static>(
        &mut self,
        allow_null_values: bool,
    ) -> Result<&mut EnumMap<K, V>, EnumError> {
        self.check::<K, V>(allow_null_values)?;
        self.as_any_mut().downcast_mut().ok_or_else(|| unrelated_type::<K, V>())
    }

    fn check<K: Enumeration, V: MapValue>(&self, allow_null_values: bool) -> Result<(), EnumError> {
        check_config(
            (self.key_type(), self.value_type(), self.allows_null_values()),
            (K::TYPE_NAME, V::value_type().as_str(), allow_null_values),
        )
    }
}

/// Names match but the concrete types differ, e.g. two user types sharing a value-type name.
fn unrelated_type<K: Enumeration, V>() -> EnumError {
    EnumError::Internal {
        message: format!("Erased map is not an {}", std::any::type_name::<EnumMap<K, V>>()).into(),
        context: None,
    }
}
