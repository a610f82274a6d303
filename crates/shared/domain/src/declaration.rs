use crate::constant::Constant;
use crate::error::EnumError;
use crate::table;
use std::any::TypeId;
use std::fmt;

/// A declared enumeration constant: its name and how to build its payload.
///
/// Declarations are listed in ordinal order in [`Enumeration::DECLARATIONS`]; the builder
/// runs at most once per process, the first time the constant is resolved.
pub struct Declaration<E> {
    name: &'static str,
    build: fn() -> E,
}

impl<E> Declaration<E> {
    /// Declares a constant named `name` whose payload is produced by `build`.
    ///
    /// `build` may read constants of other enumerations. Reading its own domain before that
    /// constant exists fails with [`EnumError::Internal`] (a panic from
    /// [`EnumDomain::values`]) instead of blocking.
    #[must_use]
    pub const fn new(name: &'static str, build: fn() -> E) -> Self {
        Self { name, build }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn build(&self) -> E {
        (self.build)()
    }
}

impl<E> fmt::Debug for Declaration<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A type whose values form a fixed, ordered set of named singletons.
///
/// Implement it with `#[derive(Enumeration)]` from the `enumkit` facade, or by hand by
/// listing the declarations. The payload type itself is an ordinary struct; the singletons
/// are the [`Constant`] wrappers handed out through [`EnumDomain`], which only the domain
/// table can construct. Constant names must be unique within the type.
pub trait Enumeration: Sized + Send + Sync + 'static {
    /// Stable identifier written into serialized payloads and used by the [`Registry`](crate::Registry).
    const TYPE_NAME: &'static str;

    /// Declared constants; the index of each entry is its ordinal.
    const DECLARATIONS: &'static [Declaration<Self>];
}

/// Typed access to the constants of an [`Enumeration`].
///
/// Implemented for every enumeration and not implementable by hand, so lookups always go
/// through the process-wide domain table.
///
/// # Panics
/// Accessing a domain whose declarations repeat a constant name panics on first access,
/// naming the type and the repeated constant.
pub trait EnumDomain: Enumeration {
    /// Returns the singleton constant named `name`.
    ///
    /// Only the requested constant is materialized; its ordinal is its declaration position.
    ///
    /// # Errors
    /// Returns [`EnumError::NotFound`] if the type declares no constant with that name, or
    /// [`EnumError::Internal`] if a declaration builder of this type asks for a constant that
    /// is still being built.
    fn value_of(name: &str) -> Result<&'static Constant<Self>, EnumError> {
        table::domain::<Self>().value_of(name)
    }

    /// Returns the constant at `ordinal`.
    ///
    /// # Errors
    /// Returns [`EnumError::NotFound`] if `ordinal` is not below [`EnumDomain::cardinality`],
    /// or [`EnumError::Internal`] on re-entry from a declaration builder of this type.
    fn from_ordinal(ordinal: usize) -> Result<&'static Constant<Self>, EnumError> {
        table::domain::<Self>().constant(ordinal)
    }

    /// Returns every constant, sorted by ordinal.
    ///
    /// The first call materializes the remaining constants and caches the list.
    ///
    /// # Panics
    /// Panics if a declaration builder of this type calls it before the domain is loaded.
    fn values() -> &'static [&'static Constant<Self>] {
        table::domain::<Self>().values()
    }

    /// Number of declared constants, without materializing any of them.
    #[must_use]
    fn cardinality() -> usize {
        Self::DECLARATIONS.len()
    }

    /// Returns `true` once [`EnumDomain::values`] has materialized the whole domain.
    #[must_use]
    fn is_loaded() -> bool {
        table::domain::<Self>().is_loaded()
    }
}

impl<E: Enumeration> EnumDomain for E {}

/// Returns `true` when `A` and `B` are the same enumeration type.
#[must_use]
pub fn is_same_domain<A: Enumeration, B: Enumeration>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}
