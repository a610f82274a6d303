//! Kernel of the enumkit workspace: the ordinal-indexed [`EnumMap`] and its supporting pieces.
//! Keep this crate lightweight; domain identity lives in `enumkit-domain`, which is re-exported
//! as [`domain`].
//!
//! ## Maps
//! An [`EnumMap`] is bound to one enumeration type `K` and stores at most one value per
//! constant in a dense slot array indexed by ordinal:
//! ```rust
//! use enumkit_kernel::EnumMap;
//! use enumkit_kernel::domain::{Declaration, EnumDomain, Enumeration};
//!
//! #[derive(Debug)]
//! struct Suit;
//!
//! impl Enumeration for Suit {
//!     const TYPE_NAME: &'static str = "Suit";
//!     const DECLARATIONS: &'static [Declaration<Self>] = &[
//!         Declaration::new("HEARTS", || Suit),
//!         Declaration::new("SPADES", || Suit),
//!     ];
//! }
//!
//! let hearts = Suit::value_of("HEARTS").unwrap();
//! let mut map = EnumMap::<Suit, i64>::new(false);
//! map.put(hearts, 1).unwrap();
//! assert_eq!(map.get(hearts).unwrap(), Some(&1));
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use enumkit_kernel::config::load_config;
//!     let cfg: serde_json::Value = load_config(Some("enumkit.toml")).unwrap();
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
mod map;
mod value;

pub use enumkit_domain as domain;
pub use map::{AnyEnumMap, EnumMap, EnumMapPayload, Iter, Keys, Values};
pub use value::{MapValue, ValueType};
