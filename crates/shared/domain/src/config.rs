use serde::Deserialize;

/// Registry settings, usually loaded from the application's config file.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Materialize every constant at registration instead of on first use.
    pub eager: bool,
}
