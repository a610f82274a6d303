//! Command handlers. Each writes its report to `out`.

use crate::catalog::Suit;
use anyhow::{Context, Result, bail};
use enumkit::{EnumMap, EnumMapPayload, Registry};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Lists every registered enumeration with its constants in ordinal order.
pub fn domains(out: &mut impl Write) -> Result<()> {
    let domains = Registry::domains();
    for domain in &domains {
        writeln!(out, "{} ({} constants)", domain.type_name(), domain.cardinality())?;
        for (ordinal, name) in domain.constants().iter().enumerate() {
            writeln!(out, "  {ordinal:>3}  {name}")?;
        }
    }
    debug!(count = domains.len(), "Listed registered domains");
    Ok(())
}

/// Prints the entries of a serialized map, resolving ordinals through the registry.
pub fn inspect(file: &Path, out: &mut impl Write) -> Result<()> {
    let payload: EnumMapPayload<Value> = read_payload(file)?;
    let domain = Registry::resolve(&payload.key_type)
        .with_context(|| format!("Inspecting {}", file.display()))?;

    writeln!(
        out,
        "{} -> {} (nulls {})",
        domain.type_name(),
        payload.value_type,
        if payload.allow_null_values { "allowed" } else { "rejected" }
    )?;
    for (ordinal, value) in &payload.values {
        let Some(name) = domain.name_of(*ordinal) else {
            bail!("Ordinal {ordinal} is out of range for {}", domain.type_name());
        };
        let value = value.as_ref().map_or_else(|| "null".to_owned(), Value::to_string);
        writeln!(out, "{name} ({ordinal}) => {value}")?;
    }
    Ok(())
}

/// Restores a payload as an `EnumMap<Suit, i64>`, which applies every map check.
pub fn check(file: &Path, out: &mut impl Write) -> Result<()> {
    let map: EnumMap<Suit, i64> = read_payload(file)?;
    info!(file = %file.display(), entries = map.len(), "Payload is a valid Suit map");

    writeln!(out, "OK: {} entries of {} -> {}", map.len(), map.key_type(), map.value_type())?;
    for (suit, score) in &map {
        let score = score.map_or_else(|| "null".to_owned(), i64::to_string);
        writeln!(out, "  {suit} => {score}")?;
    }
    Ok(())
}

fn read_payload<T: DeserializeOwned>(file: &Path) -> Result<T> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Invalid payload in {}", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use enumkit::domain::config::RegistryConfig;
    use tempfile::NamedTempFile;

    fn payload(json: &str) -> NamedTempFile {
        catalog::register(&RegistryConfig::default()).unwrap();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn run(command: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<String> {
        let mut out = Vec::new();
        command(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn domains_lists_constants() {
        catalog::register(&RegistryConfig::default()).unwrap();
        let output = run(|out| domains(out)).unwrap();

        assert!(output.contains("Suit (4 constants)"));
        assert!(output.contains("    3  CLUBS"));
        assert!(output.contains("Planet (8 constants)"));
    }

    #[test]
    fn inspect_names_entries() {
        let file = payload(
            r#"{"keyType":"Planet","valueType":"mixed","allowNullValues":true,"values":{"2":{"moons":1},"4":null}}"#,
        );
        let output = run(|out| inspect(file.path(), out)).unwrap();

        assert_eq!(
            output,
            "Planet -> mixed (nulls allowed)\nEARTH (2) => {\"moons\":1}\nJUPITER (4) => null\n"
        );
    }

    #[test]
    fn inspect_rejects_unknown_key_type() {
        let file = payload(r#"{"keyType":"Tarot","valueType":"int","allowNullValues":false,"values":{}}"#);
        let err = run(|out| inspect(file.path(), out)).unwrap_err();
        assert!(format!("{err:#}").contains("No enumeration registered as Tarot"));
    }

    #[test]
    fn inspect_rejects_out_of_range_ordinal() {
        let file = payload(r#"{"keyType":"Suit","valueType":"int","allowNullValues":false,"values":{"4":1}}"#);
        let err = run(|out| inspect(file.path(), out)).unwrap_err();
        assert_eq!(err.to_string(), "Ordinal 4 is out of range for Suit");
    }

    #[test]
    fn check_accepts_suit_scores() {
        let file = payload(r#"{"keyType":"Suit","valueType":"int","allowNullValues":false,"values":{"0":1,"3":4}}"#);
        let output = run(|out| check(file.path(), out)).unwrap();
        assert_eq!(output, "OK: 2 entries of Suit -> int\n  HEARTS => 1\n  CLUBS => 4\n");
    }

    #[test]
    fn check_reports_validation_error() {
        let file = payload(r#"{"keyType":"Planet","valueType":"int","allowNullValues":false,"values":{}}"#);
        let err = run(|out| check(file.path(), out)).unwrap_err();
        assert!(format!("{err:#}").contains("Key type Planet does not match Suit"));
    }
}
