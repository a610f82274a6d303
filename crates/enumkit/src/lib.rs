//! Facade crate for enumkit: singleton enumerations and maps keyed by them.
//! Re-exports the domain and kernel primitives plus the derive macros.
//! Keep this crate thin: it should compose other crates, not implement logic.
//!
//! ## Usage
//! ```rust
//! use enumkit::prelude::*;
//!
//! #[derive(Debug, Enumeration)]
//! #[constants(HEARTS, SPADES, DIAMONDS, CLUBS)]
//! struct Suit;
//!
//! let mut scores = EnumMap::<Suit, i64>::new(false);
//! scores.put(Suit::hearts(), 1).unwrap();
//! scores.put(Suit::clubs(), 4).unwrap();
//!
//! assert_eq!(Suit::clubs().ordinal(), 3);
//! assert_eq!(scores.values().flatten().copied().collect::<Vec<_>>(), vec![1, 4]);
//! ```
//!
//! Paths generated by `#[derive(Enumeration)]` and `#[derive(MapValue)]` resolve through this
//! crate, so depend on `enumkit` rather than on the individual crates.

pub use enumkit_domain as domain;
pub use enumkit_kernel as kernel;

pub use enumkit_domain::{
    Constant, Declaration, DomainInfo, EnumDomain, EnumError, EnumErrorExt, Enumeration, MapField,
    Registry, RegistryBuilder, is_same_domain,
};
pub use enumkit_kernel::{AnyEnumMap, EnumMap, EnumMapPayload, MapValue, ValueType};

#[cfg(feature = "derive")]
pub use enumkit_derive::{Enumeration, MapValue};

/// Everything needed to declare enumerations and work with maps.
pub mod prelude {
    pub use crate::{
        AnyEnumMap, Constant, EnumDomain, EnumError, EnumErrorExt, EnumMap, Enumeration, MapValue,
        Registry, ValueType,
    };
}
