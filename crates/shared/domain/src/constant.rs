use crate::declaration::{Enumeration, is_same_domain};
use crate::error::EnumError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// A singleton enumeration value.
///
/// Instances are created only by the domain table, live for the rest of the process and are
/// always handled as `&'static Constant<E>`. There is no `Clone` and no serde support: a
/// constant travels as its name or ordinal, never as a copy.
///
/// * Equality and hashing are by identity.
/// * Ordering is by ordinal.
/// * `Display` yields the name; `Deref` exposes the payload `E`.
pub struct Constant<E> {
    name: &'static str,
    ordinal: usize,
    value: E,
}

impl<E> Constant<E> {
    pub(crate) const fn new(name: &'static str, ordinal: usize, value: E) -> Self {
        Self { name, ordinal, value }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The payload built from the constant's declared arguments.
    #[must_use]
    pub const fn value(&self) -> &E {
        &self.value
    }
}

impl<E: Enumeration> Constant<E> {
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        E::TYPE_NAME
    }

    /// Compares two constants by ordinal.
    ///
    /// # Errors
    /// Returns [`EnumError::TypeMismatch`] if `other` belongs to a different enumeration type.
    pub fn compare_to<O: Enumeration>(&self, other: &Constant<O>) -> Result<Ordering, EnumError> {
        if !is_same_domain::<E, O>() {
            return Err(EnumError::TypeMismatch {
                message: format!(
                    "The passed enum {} is not of the same type as {}",
                    O::TYPE_NAME,
                    E::TYPE_NAME
                )
                .into(),
                context: None,
            });
        }
        Ok(self.ordinal.cmp(&other.ordinal))
    }
}

impl<E> Deref for Constant<E> {
    type Target = E;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<E> PartialEq for Constant<E> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl<E> Eq for Constant<E> {}

impl<E> Hash for Constant<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self, state);
    }
}

impl<E> PartialOrd for Constant<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Constant<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl<E> fmt::Display for Constant<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl<E: Enumeration> fmt::Debug for Constant<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", E::TYPE_NAME, self.name)
    }
}
