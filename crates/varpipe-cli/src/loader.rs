//! Builds the parameter bag from a TOML file plus command-line overrides.
//!
//! TOML nesting is flattened back to dotted keys, so `db.name = "x"` and a
//! `[db]` table with `name = "x"` populate the same parameter. Overrides
//! given with `-P key=value` win over file values.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, bail};
use toml::Value;
use varpipe_core::{ParameterBag, ParameterName};

/// Loads the bag from an optional parameter file and `-P` overrides.
///
/// # Errors
/// Fails when the file cannot be read or parsed, when a value has an
/// unsupported TOML type, or when an override is not of the form
/// `key=value`.
pub fn load(parameters_file: Option<&Path>, overrides: &[String]) -> anyhow::Result<ParameterBag> {
    let mut bag = ParameterBag::new();

    if let Some(path) = parameters_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read parameter file {}", path.display()))?;
        let table: toml::Table = contents
            .parse()
            .with_context(|| format!("failed to parse parameter file {}", path.display()))?;
        bag = flatten_table(bag, "", &table)?;
    }

    for override_entry in overrides {
        let Some((key, value)) = override_entry.split_once('=') else {
            bail!("parameter override '{override_entry}' is not of the form key=value");
        };
        note_unrecognized(key.trim());
        bag = bag.with_raw(key.trim(), value);
    }

    Ok(bag)
}

fn flatten_table(
    mut bag: ParameterBag,
    prefix: &str,
    table: &toml::Table,
) -> anyhow::Result<ParameterBag> {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        if !matches!(value, Value::Table(_)) {
            note_unrecognized(&full_key);
        }
        bag = match value {
            Value::String(text) => bag.with_raw(full_key, text),
            Value::Integer(number) => bag.with_raw(full_key, number.to_string()),
            Value::Float(number) => bag.with_raw(full_key, number.to_string()),
            Value::Boolean(flag) => bag.with_raw(full_key, flag.to_string()),
            Value::Table(nested) => flatten_table(bag, &full_key, nested)?,
            Value::Array(_) | Value::Datetime(_) => {
                bail!("parameter '{full_key}' has an unsupported TOML type")
            }
        };
    }
    Ok(bag)
}

// Carried but never validated; worth a trace when debugging a typo.
fn note_unrecognized(key: &str) {
    if ParameterName::from_key(key).is_none() {
        tracing::debug!(key, "parameter key outside the recognized catalogue");
    }
}
