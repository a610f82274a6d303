//! Serialized form of an [`EnumMap`].
//!
//! ```json
//! { "keyType": "Suit", "valueType": "int", "allowNullValues": false, "values": { "0": 1, "3": 4 } }
//! ```
//!
//! `values` maps ordinals to stored values; vacant slots are omitted and a stored null is
//! written as an actual null. Restoring a map replays every entry through [`EnumMap::put`].

use super::{EnumMap, illegal_argument};
use crate::value::MapValue;
use enumkit_domain::{EnumError, EnumErrorExt, Enumeration};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;
use tracing::trace;

/// Owned, untyped-key view of a serialized map.
///
/// Useful on its own when the key type is only known by name, e.g. when inspecting a
/// payload through the [`Registry`](enumkit_domain::Registry).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename = "EnumMap", rename_all = "camelCase", deny_unknown_fields)]
pub struct EnumMapPayload<V> {
    pub key_type: String,
    pub value_type: String,
    pub allow_null_values: bool,
    pub values: BTreeMap<usize, Option<V>>,
}

impl<K: Enumeration, V: MapValue> EnumMap<K, V> {
    /// Copies this map into its serialized form.
    #[must_use]
    pub fn to_payload(&self) -> EnumMapPayload<V>
    where
        V: Clone,
    {
        EnumMapPayload {
            key_type: K::TYPE_NAME.to_owned(),
            value_type: V::value_type().to_string(),
            allow_null_values: self.allow_null_values,
            values: self.iter().map(|(key, value)| (key.ordinal(), value.cloned())).collect(),
        }
    }

    /// Rebuilds a map from its serialized form.
    ///
    /// # Errors
    /// Returns [`EnumError::IllegalArgument`] if the key type does not name `K`, the value type
    /// does not match `V`, an ordinal is outside the domain, or a null value is not allowed.
    pub fn from_payload(payload: EnumMapPayload<V>) -> Result<Self, EnumError> {
        let EnumMapPayload { key_type, value_type, allow_null_values, values } = payload;

        let mut map = Self::with_key_type(&key_type, allow_null_values).context("Restoring EnumMap")?;
        if !V::value_type().matches(&value_type) {
            return Err(illegal_argument(format!(
                "Value type {value_type} does not match {}",
                V::value_type()
            )));
        }

        for (ordinal, value) in values {
            let Some(&key) = map.key_universe.get(ordinal) else {
                return Err(illegal_argument(format!(
                    "Ordinal {ordinal} is out of range for {}",
                    K::TYPE_NAME
                )));
            };
            trace!(key_type = K::TYPE_NAME, key = key.name(), ordinal, "Replaying EnumMap entry");
            map.put(key, value).context(format!("Restoring {}::{}", K::TYPE_NAME, key.name()))?;
        }

        Ok(map)
    }
}

impl<K: Enumeration, V: MapValue + Serialize> Serialize for EnumMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EnumMap", 4)?;
        state.serialize_field("keyType", K::TYPE_NAME)?;
        state.serialize_field("valueType", V::value_type().as_str())?;
        state.serialize_field("allowNullValues", &self.allow_null_values)?;
        state.serialize_field("values", &Entries(self))?;
        state.end()
    }
}

struct Entries<'a, K: Enumeration, V>(&'a EnumMap<K, V>);

impl<K: Enumeration, V: MapValue + Serialize> Serialize for Entries<'_, K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, value)| (key.ordinal(), value)))
    }
}

impl<'de, K: Enumeration, V: MapValue + Deserialize<'de>> Deserialize<'de> for EnumMap<K, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = EnumMapPayload::<V>::deserialize(deserializer)?;
        Self::from_payload(payload).map_err(de::Error::custom)
    }
}
