//! Per-type domain tables.
//!
//! One table exists per enumeration type for the life of the process. Tables are created on
//! first typed access and never dropped; constants are leaked so they can be shared as
//! `&'static` singletons.

use crate::constant::Constant;
use crate::declaration::Enumeration;
use crate::error::EnumError;
use fxhash::{FxHashMap, FxHashSet};
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::sync::{LazyLock, OnceLock};
use tracing::debug;

type ErasedTable = &'static (dyn Any + Send + Sync);

static TABLES: LazyLock<RwLock<FxHashMap<TypeId, ErasedTable>>> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

thread_local! {
    /// Domains whose declaration builders are running on this thread.
    static BUILDING: RefCell<Vec<TypeId>> = const { RefCell::new(Vec::new()) };
}

/// Constant names of `E` in ordinal order.
///
/// # Errors
/// Returns [`EnumError::IllegalArgument`] if a name is declared twice.
pub(crate) fn declared_names<E: Enumeration>() -> Result<Vec<&'static str>, EnumError> {
    let mut seen = FxHashSet::default();
    E::DECLARATIONS
        .iter()
        .map(|declaration| {
            if seen.insert(declaration.name()) {
                Ok(declaration.name())
            } else {
                Err(EnumError::illegal_argument(format!(
                    "Duplicate enum constant {}::{}",
                    E::TYPE_NAME,
                    declaration.name()
                )))
            }
        })
        .collect()
}

pub(crate) struct DomainTable<E: 'static> {
    index: FxHashMap<&'static str, usize>,
    slots: Box<[OnceLock<&'static Constant<E>>]>,
    values: OnceLock<Box<[&'static Constant<E>]>>,
}

impl<E: Enumeration> DomainTable<E> {
    fn new() -> Self {
        let names = match declared_names::<E>() {
            Ok(names) => names,
            Err(err) => panic!("Invalid enumeration {}: {err}", E::TYPE_NAME),
        };
        let index = names.iter().enumerate().map(|(ordinal, &name)| (name, ordinal)).collect();
        let slots = names.iter().map(|_| OnceLock::new()).collect();

        Self { index, slots, values: OnceLock::new() }
    }

    pub(crate) fn constant(&'static self, ordinal: usize) -> Result<&'static Constant<E>, EnumError> {
        let Some(slot) = self.slots.get(ordinal) else {
            return Err(EnumError::NotFound {
                message: format!("No enum constant of {} at ordinal {ordinal}", E::TYPE_NAME).into(),
                context: None,
            });
        };
        if let Some(&constant) = slot.get() {
            return Ok(constant);
        }
        let _building = BuildGuard::enter::<E>()?;

        Ok(*slot.get_or_init(|| {
            let declaration = &E::DECLARATIONS[ordinal];
            debug!(
                type_name = E::TYPE_NAME,
                name = declaration.name(),
                ordinal,
                "Materializing enumeration constant"
            );
            let constant: &'static Constant<E> =
                Box::leak(Box::new(Constant::new(declaration.name(), ordinal, declaration.build())));
            constant
        }))
    }

    pub(crate) fn value_of(&'static self, name: &str) -> Result<&'static Constant<E>, EnumError> {
        let Some(&ordinal) = self.index.get(name) else {
            return Err(EnumError::NotFound {
                message: format!("No enum constant {}::{name}", E::TYPE_NAME).into(),
                context: None,
            });
        };
        self.constant(ordinal)
    }

    pub(crate) fn values(&'static self) -> &'static [&'static Constant<E>] {
        if let Some(values) = self.values.get() {
            return values;
        }
        if let Err(err) = BuildGuard::check::<E>() {
            panic!("{err}");
        }

        self.values.get_or_init(|| {
            let values: Box<[_]> = (0..self.slots.len())
                .map(|ordinal| match self.constant(ordinal) {
                    Ok(constant) => constant,
                    Err(err) => panic!("{err}"),
                })
                .collect();
            debug!(type_name = E::TYPE_NAME, count = values.len(), "Enumeration domain fully loaded");
            values
        })
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.values.get().is_some()
    }
}

/// Marks a domain as building on the current thread until dropped.
struct BuildGuard(TypeId);

impl BuildGuard {
    fn check<E: Enumeration>() -> Result<(), EnumError> {
        let id = TypeId::of::<E>();
        if BUILDING.with_borrow(|building| building.contains(&id)) {
            return Err(EnumError::Internal {
                message: format!(
                    "A declaration builder of {} accessed its own domain before it was built",
                    E::TYPE_NAME
                )
                .into(),
                context: None,
            });
        }
        Ok(())
    }

    fn enter<E: Enumeration>() -> Result<Self, EnumError> {
        Self::check::<E>()?;
        let id = TypeId::of::<E>();
        BUILDING.with_borrow_mut(|building| building.push(id));
        Ok(Self(id))
    }
}

impl Drop for BuildGuard {
    fn drop(&mut self) {
        BUILDING.with_borrow_mut(|building| {
            if let Some(position) = building.iter().rposition(|id| *id == self.0) {
                building.remove(position);
            }
        });
    }
}

/// Returns the process-wide table for `E`, creating it on first use.
pub(crate) fn domain<E: Enumeration>() -> &'static DomainTable<E> {
    let id = TypeId::of::<E>();

    if let Some(table) = lookup::<E>(&TABLES.read(), id) {
        return table;
    }

    let mut tables = TABLES.write();
    if let Some(table) = lookup::<E>(&tables, id) {
        return table;
    }
    let table: &'static DomainTable<E> = Box::leak(Box::new(DomainTable::new()));
    tables.insert(id, table);
    table
}

fn lookup<E: Enumeration>(
    tables: &FxHashMap<TypeId, ErasedTable>,
    id: TypeId,
) -> Option<&'static DomainTable<E>> {
    tables.get(&id).copied().and_then(|table| table.downcast_ref::<DomainTable<E>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{Declaration, EnumDomain};

    #[derive(Debug)]
    struct Dice(u8);

    impl Enumeration for Dice {
        const TYPE_NAME: &'static str = "Dice";
        const DECLARATIONS: &'static [Declaration<Self>] = &[
            Declaration::new("ONE", || Dice(1)),
            Declaration::new("TWO", || Dice(2)),
            Declaration::new("THREE", || Dice(3)),
        ];
    }

    #[test]
    fn table_is_created_once_per_type() {
        let first = domain::<Dice>();
        let second = domain::<Dice>();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn lazily_resolved_constant_keeps_identity_after_full_load() {
        let two = Dice::value_of("TWO").unwrap();
        assert_eq!(two.ordinal(), 1);
        assert_eq!(two.0, 2);

        let values = Dice::values();
        assert!(Dice::is_loaded());
        assert!(std::ptr::eq(values[1], two));
        assert_eq!(values.iter().map(|c| c.ordinal()).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = Dice::value_of("SEVEN").unwrap_err();
        assert_eq!(err.kind(), "NotFound");
        assert_eq!(err.to_string(), "No enum constant Dice::SEVEN");
    }

    #[test]
    fn ordinal_lookup_is_bounds_checked() {
        assert_eq!(Dice::from_ordinal(2).unwrap().name(), "THREE");

        let err = Dice::from_ordinal(3).unwrap_err();
        assert_eq!(err.kind(), "NotFound");
        assert_eq!(err.to_string(), "No enum constant of Dice at ordinal 3");
    }

    #[derive(Debug)]
    struct Echo {
        own: Result<&'static str, String>,
        other: usize,
    }

    impl Enumeration for Echo {
        const TYPE_NAME: &'static str = "Echo";
        const DECLARATIONS: &'static [Declaration<Self>] = &[Declaration::new("LOUD", || Echo {
            own: Echo::value_of("LOUD").map(|c| c.name()).map_err(|err| err.to_string()),
            other: Dice::values().len(),
        })];
    }

    #[test]
    fn builder_reading_its_own_domain_fails_instead_of_blocking() {
        let loud = Echo::value_of("LOUD").unwrap();
        assert_eq!(loud.other, 3);
        let err = loud.own.as_ref().unwrap_err();
        assert!(err.starts_with("Internal enumeration error"), "{err}");
        assert!(err.contains("Echo"), "{err}");

        // Once built, the constant is reachable as usual.
        assert!(std::ptr::eq(Echo::values()[0], loud));
        assert!(BUILDING.with_borrow(Vec::is_empty));
    }
}
