//! # Enumeration Domains
//!
//! This crate models fixed, ordered sets of named singleton values ("enumeration domains").
//! Each domain is declared at compile time as a list of [`Declaration`]s; every constant is
//! materialized at most once per process, receives its declaration position as ordinal, and is
//! handed out as a `&'static` [`Constant`] whose equality is identity.
//!
//! Keep it lean: no I/O, just the identity/ordinal model and the [`Registry`] that maps
//! type names to domains.
//!
//! ## Example
//!
//! ```rust
//! use enumkit_domain::{Constant, Declaration, EnumDomain, Enumeration};
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
//! let spades: &'static Constant<Suit> = Suit::value_of("SPADES").unwrap();
//! assert_eq!(spades.ordinal(), 1);
//! assert_eq!(Suit::values()[1], spades);
//! ```

pub mod config;
mod constant;
mod declaration;
mod error;
mod registry;
mod table;

pub use constant::Constant;
pub use declaration::{Declaration, EnumDomain, Enumeration, is_same_domain};
pub use error::{EnumError, EnumErrorExt, MapField};
pub use registry::{DomainInfo, Registry, RegistryBuilder};
