use enumkit::domain::config::RegistryConfig;
use enumkit_logger::LogConfig;
use serde::Deserialize;

/// Shell settings.
///
/// ```toml
/// [log]
/// level = "debug"
/// json = false
///
/// [registry]
/// eager = true
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub log: LogConfig,
    pub registry: RegistryConfig,
}
