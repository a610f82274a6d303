//! Explicit registry of enumeration domains, keyed by type name.
//!
//! Typed access (`Suit::values()`) never needs the registry. It exists for the places where a
//! domain is named by string: serialized `EnumMap` payloads, construction by key type name and
//! tooling that lists what a program knows about. Registration happens once, at program start,
//! through [`Registry::builder`].

use crate::config::RegistryConfig;
use crate::declaration::{EnumDomain, Enumeration};
use crate::error::EnumError;
use crate::table;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::TypeId;
use std::sync::LazyLock;
use tracing::{debug, info};

static DOMAINS: LazyLock<RwLock<FxHashMap<&'static str, DomainInfo>>> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// Metadata describing a registered enumeration domain.
#[derive(Debug, Clone)]
pub struct DomainInfo {
    type_name: &'static str,
    type_id: TypeId,
    constants: Vec<&'static str>,
    materialize: fn() -> usize,
}

impl DomainInfo {
    /// Describes `E`, rejecting declarations that could not form a valid domain.
    ///
    /// # Errors
    /// Returns [`EnumError::IllegalArgument`] for an empty type name or duplicate constant names.
    pub fn of<E: Enumeration>() -> Result<Self, EnumError> {
        if E::TYPE_NAME.trim().is_empty() {
            return Err(EnumError::illegal_argument("Enumeration type name cannot be empty"));
        }

        let constants = table::declared_names::<E>()?;

        Ok(Self {
            type_name: E::TYPE_NAME,
            type_id: TypeId::of::<E>(),
            constants,
            materialize: || E::values().len(),
        })
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[must_use]
    pub const fn cardinality(&self) -> usize {
        self.constants.len()
    }

    /// Constant names in ordinal order.
    #[must_use]
    pub fn constants(&self) -> &[&'static str] {
        &self.constants
    }

    #[must_use]
    pub fn name_of(&self, ordinal: usize) -> Option<&'static str> {
        self.constants.get(ordinal).copied()
    }

    #[must_use]
    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.constants.iter().position(|constant| *constant == name)
    }

    /// Returns `true` if this entry describes `E`.
    #[must_use]
    pub fn is<E: Enumeration>(&self) -> bool {
        self.type_id == TypeId::of::<E>()
    }

    /// Forces every constant of the domain into existence, returning the count.
    pub fn materialize(&self) -> usize {
        (self.materialize)()
    }
}

/// Process-wide lookup of enumeration domains by type name.
#[derive(Debug)]
pub struct Registry;

impl Registry {
    /// Returns a [`RegistryBuilder`] for registering a batch of domains at startup.
    #[must_use = "The builder must be built for the domains to be registered."]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registers `E` under its type name. Registering the same type again is a no-op.
    ///
    /// # Errors
    /// Returns [`EnumError::IllegalArgument`] if the declarations are invalid or a different
    /// type is already registered under the same name.
    pub fn register<E: Enumeration>() -> Result<DomainInfo, EnumError> {
        let info = DomainInfo::of::<E>()?;
        let mut domains = DOMAINS.write();

        if let Some(existing) = domains.get(E::TYPE_NAME) {
            if existing.type_id == info.type_id {
                return Ok(existing.clone());
            }
            return Err(EnumError::illegal_argument(format!(
                "Type name {} is already registered by another enumeration",
                E::TYPE_NAME
            )));
        }

        debug!(type_name = E::TYPE_NAME, cardinality = info.cardinality(), "Registered enumeration");
        domains.insert(E::TYPE_NAME, info.clone());
        Ok(info)
    }

    /// Looks up a registered domain by type name.
    ///
    /// # Errors
    /// Returns [`EnumError::NotFound`] if nothing is registered under `type_name`.
    pub fn resolve(type_name: &str) -> Result<DomainInfo, EnumError> {
        DOMAINS.read().get(type_name).cloned().ok_or_else(|| EnumError::NotFound {
            message: format!("No enumeration registered as {type_name}").into(),
            context: None,
        })
    }

    #[must_use]
    pub fn contains(type_name: &str) -> bool {
        DOMAINS.read().contains_key(type_name)
    }

    #[must_use]
    pub fn is_registered<E: Enumeration>() -> bool {
        DOMAINS.read().get(E::TYPE_NAME).is_some_and(DomainInfo::is::<E>)
    }

    /// All registered domains, sorted by type name.
    #[must_use]
    pub fn domains() -> Vec<DomainInfo> {
        let mut domains: Vec<_> = DOMAINS.read().values().cloned().collect();
        domains.sort_by_key(DomainInfo::type_name);
        domains
    }
}

/// Collects domains to register and applies them in one step.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registrations: Vec<fn() -> Result<DomainInfo, EnumError>>,
    eager: bool,
}

impl RegistryBuilder {
    /// Queues `E` for registration.
    #[must_use = "The builder must be built for the domains to be registered."]
    pub fn register<E: Enumeration>(mut self) -> Self {
        self.registrations.push(Registry::register::<E>);
        self
    }

    /// Materializes every registered domain during [`RegistryBuilder::build`].
    #[must_use = "The builder must be built for the domains to be registered."]
    pub const fn eager(mut self, eager: bool) -> Self {
        self.eager = eager;
        self
    }

    /// Applies settings loaded from configuration.
    #[must_use = "The builder must be built for the domains to be registered."]
    pub const fn config(mut self, config: &RegistryConfig) -> Self {
        self.eager = config.eager;
        self
    }

    /// Registers the queued domains in order.
    ///
    /// # Errors
    /// Stops at and returns the first registration error.
    pub fn build(self) -> Result<Vec<DomainInfo>, EnumError> {
        let mut registered = Vec::with_capacity(self.registrations.len());

        for register in self.registrations {
            let info = register()?;
            if self.eager {
                info.materialize();
            }
            registered.push(info);
        }

        info!(count = registered.len(), eager = self.eager, "Enumeration registry ready");
        Ok(registered)
    }
}
