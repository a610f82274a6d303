//! Ordinal-indexed map keyed by the constants of one enumeration.
//!
//! The map snapshots the full domain of `K` at construction and keeps one slot per constant,
//! so every key lookup is an array index. Keys are accepted as `&Constant<O>` for any
//! enumeration `O` and checked against `K` at runtime, which keeps the failure mode of a
//! foreign key an error instead of a silent miss.

mod any;
mod iter;
mod payload;

pub use any::AnyEnumMap;
pub use iter::{Iter, Keys, Values};
pub use payload::EnumMapPayload;

use crate::value::{MapValue, ValueType};
use enumkit_domain::{Constant, EnumDomain, EnumError, Enumeration, MapField, Registry, is_same_domain};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

#[derive(Clone, PartialEq, Eq)]
enum Slot<V> {
    Vacant,
    Null,
    Occupied(V),
}

impl<V> Slot<V> {
    /// `None` for a vacant slot, otherwise the stored value (`None` for null).
    const fn entry(&self) -> Option<Option<&V>> {
        match self {
            Self::Vacant => None,
            Self::Null => Some(None),
            Self::Occupied(value) => Some(Some(value)),
        }
    }

    fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Vacant)
    }

    fn into_value(self) -> Option<V> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Vacant | Self::Null => None,
        }
    }
}

/// A map from the constants of enumeration `K` to values of type `V`.
///
/// `V` fixes the value-type constraint; `allow_null_values` decides whether a key may be
/// mapped to null (`None`, or a null [`serde_json::Value`]).
pub struct EnumMap<K: Enumeration, V> {
    allow_null_values: bool,
    key_universe: &'static [&'static Constant<K>],
    slots: Box<[Slot<V>]>,
    size: usize,
    _key: PhantomData<fn() -> K>,
}

impl<K: Enumeration, V: MapValue> EnumMap<K, V> {
    /// Creates an empty map over the whole domain of `K`.
    #[must_use]
    pub fn new(allow_null_values: bool) -> Self {
        let key_universe = K::values();
        let slots = key_universe.iter().map(|_| Slot::Vacant).collect();

        Self { allow_null_values, key_universe, slots, size: 0, _key: PhantomData }
    }

    /// Creates an empty map, checking that `key_type` names `K`.
    ///
    /// # Errors
    /// Returns [`EnumError::IllegalArgument`] if `key_type` is registered for another
    /// enumeration, or is neither registered nor `K`'s own type name.
    pub fn with_key_type(key_type: &str, allow_null_values: bool) -> Result<Self, EnumError> {
        match Registry::resolve(key_type) {
            Ok(info) if info.is::<K>() => {}
            Ok(_) => {
                return Err(illegal_argument(format!(
                    "Key type {key_type} does not match {}",
                    K::TYPE_NAME
                )));
            }
            Err(_) if key_type == K::TYPE_NAME => {}
            Err(_) => {
                return Err(illegal_argument(format!("{key_type} is not a registered enumeration")));
            }
        }
        Ok(Self::new(allow_null_values))
    }

    #[must_use]
    pub const fn key_type(&self) -> &'static str {
        K::TYPE_NAME
    }

    #[must_use]
    pub fn value_type(&self) -> ValueType {
        V::value_type()
    }

    #[must_use]
    pub const fn allows_null_values(&self) -> bool {
        self.allow_null_values
    }

    /// Every constant of `K`, in ordinal order, whether mapped or not.
    #[must_use]
    pub const fn key_universe(&self) -> &'static [&'static Constant<K>] {
        self.key_universe
    }

    /// Checks that this map was configured the way the caller expects.
    ///
    /// # Errors
    /// Returns [`EnumError::Expectation`] naming the first field that differs.
    pub fn expect(&self, key_type: &str, value_type: &str, allow_null_values: bool) -> Result<(), EnumError> {
        check_config(
            (K::TYPE_NAME, V::value_type(), self.allow_null_values),
            (key_type, value_type, allow_null_values),
        )
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Same as [`EnumMap::len`].
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if any key maps to `value`. `None` looks for a stored null.
    #[must_use]
    pub fn contains_value(&self, value: Option<&V>) -> bool
    where
        V: PartialEq,
    {
        let value = value.filter(|value| !MapValue::is_null(*value));
        self.slots.iter().any(|slot| match (slot, value) {
            (Slot::Null, None) => true,
            (Slot::Occupied(stored), Some(value)) => stored == value,
            _ => false,
        })
    }

    /// # Errors
    /// Returns [`EnumError::IllegalArgument`] if `key` is not a constant of `K`.
    pub fn contains_key<O: Enumeration>(&self, key: &Constant<O>) -> Result<bool, EnumError> {
        Ok(!matches!(self.slot(key)?, Slot::Vacant))
    }

    /// Returns the value mapped to `key`; `None` if it is unmapped or mapped to null.
    ///
    /// # Errors
    /// Returns [`EnumError::IllegalArgument`] if `key` is not a constant of `K`.
    pub fn get<O: Enumeration>(&self, key: &Constant<O>) -> Result<Option<&V>, EnumError> {
        Ok(self.slot(key)?.entry().flatten())
    }

    /// Maps `key` to `value` and returns the previous value, if any.
    ///
    /// # Errors
    /// Returns [`EnumError::IllegalArgument`] if `key` is not a constant of `K`, or if `value`
    /// is null and this map does not allow null values.
    pub fn put<O: Enumeration>(
        &mut self,
        key: &Constant<O>,
        value: impl Into<Option<V>>,
    ) -> Result<Option<V>, EnumError> {
        let allow_null_values = self.allow_null_values;
        let current = self.slot_mut(key)?;
        let slot = match value.into().filter(|value| !MapValue::is_null(value)) {
            Some(value) => Slot::Occupied(value),
            None if allow_null_values => Slot::Null,
            None => {
                return Err(illegal_argument(format!(
                    "Value is not of type {} and null values are not allowed",
                    V::value_type()
                )));
            }
        };

        let previous = std::mem::replace(current, slot);
        if matches!(previous, Slot::Vacant) {
            self.size += 1;
        }
        Ok(previous.into_value())
    }

    /// Unmaps `key` and returns the value it held, if any.
    ///
    /// # Errors
    /// Returns [`EnumError::IllegalArgument`] if `key` is not a constant of `K`.
    pub fn remove<O: Enumeration>(&mut self, key: &Constant<O>) -> Result<Option<V>, EnumError> {
        let previous = self.slot_mut(key)?.take();
        if !matches!(previous, Slot::Vacant) {
            self.size -= 1;
        }
        Ok(previous.into_value())
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = Slot::Vacant);
        self.size = 0;
    }

    /// Stored values in key order; `None` stands for a stored null.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Mapped keys in ordinal order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// `(key, value)` pairs in ordinal order, skipping unmapped keys.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.key_universe, &self.slots, self.size)
    }

    fn slot<O: Enumeration>(&self, key: &Constant<O>) -> Result<&Slot<V>, EnumError> {
        let ordinal = check_key::<K, O>(key)?;
        self.slots.get(ordinal).ok_or_else(|| out_of_range::<K>(ordinal))
    }

    fn slot_mut<O: Enumeration>(&mut self, key: &Constant<O>) -> Result<&mut Slot<V>, EnumError> {
        let ordinal = check_key::<K, O>(key)?;
        self.slots.get_mut(ordinal).ok_or_else(|| out_of_range::<K>(ordinal))
    }
}

/// Returns the ordinal of `key` if it is a constant of `K`.
fn check_key<K: Enumeration, O: Enumeration>(key: &Constant<O>) -> Result<usize, EnumError> {
    if !is_same_domain::<K, O>() {
        return Err(illegal_argument(format!(
            "Object of type {} is not the same type as {}",
            O::TYPE_NAME,
            K::TYPE_NAME
        )));
    }
    Ok(key.ordinal())
}

fn out_of_range<K: Enumeration>(ordinal: usize) -> EnumError {
    illegal_argument(format!("Ordinal {ordinal} is out of range for {}", K::TYPE_NAME))
}

impl<'a, K: Enumeration, V: MapValue> IntoIterator for &'a EnumMap<K, V> {
    type Item = (&'static Constant<K>, Option<&'a V>);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Enumeration, V: Clone> Clone for EnumMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            allow_null_values: self.allow_null_values,
            key_universe: self.key_universe,
            slots: self.slots.clone(),
            size: self.size,
            _key: PhantomData,
        }
    }
}

impl<K: Enumeration, V: PartialEq> PartialEq for EnumMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.size == other.size && self.slots == other.slots)
    }
}

impl<K: Enumeration, V: Eq> Eq for EnumMap<K, V> {}

impl<K: Enumeration, V: MapValue + fmt::Debug> fmt::Debug for EnumMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn illegal_argument(message: impl Into<Cow<'static, str>>) -> EnumError {
    EnumError::IllegalArgument { message: message.into(), context: None }
}

/// Compares `(key type, value type, nullability)` of a map against what a caller expects.
fn check_config(
    (key_type, value_type, allow_null_values): (&'static str, ValueType, bool),
    (expected_key, expected_value, expected_nulls): (&str, &str, bool),
) -> Result<(), EnumError> {
    let mismatch = |field, expected: String, actual: String| EnumError::Expectation {
        field,
        expected: expected.into(),
        actual: actual.into(),
        context: None,
    };

    if key_type != expected_key {
        return Err(mismatch(MapField::KeyType, expected_key.to_owned(), key_type.to_owned()));
    }
    if !value_type.matches(expected_value) {
        return Err(mismatch(MapField::ValueType, expected_value.to_owned(), value_type.to_string()));
    }
    if allow_null_values != expected_nulls {
        return Err(mismatch(
            MapField::AllowNullValues,
            expected_nulls.to_string(),
            allow_null_values.to_string(),
        ));
    }
    Ok(())
}
