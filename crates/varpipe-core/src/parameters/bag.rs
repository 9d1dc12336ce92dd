//! The per-invocation parameter bag and its typed accessors.

use std::collections::HashMap;

use crate::parameters::ParameterName;
use crate::report::{FailureKind, ValidationFailure};

/// Immutable, keyed container of raw configuration values for one pipeline
/// invocation.
///
/// The bag is built once by the front door and read by every rule; rules
/// hold no reference to it between calls. Keys outside the
/// [`ParameterName`] catalogue are carried but never validated.
#[derive(Debug, Clone, Default)]
pub struct ParameterBag {
    values: HashMap<String, String>,
}

impl ParameterBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a catalogued parameter, replacing any previous value.
    #[must_use]
    pub fn with(mut self, name: ParameterName, value: impl Into<String>) -> Self {
        self.values.insert(name.as_key().to_owned(), value.into());
        self
    }

    /// Adds a raw key, replacing any previous value. Used by the loader for
    /// keys that may fall outside the catalogue.
    #[must_use]
    pub fn with_raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Removes a catalogued parameter. Only useful for building test bags.
    #[must_use]
    pub fn without(mut self, name: ParameterName) -> Self {
        self.values.remove(name.as_key());
        self
    }

    /// The raw value for a catalogued parameter.
    #[must_use]
    pub fn get(&self, name: ParameterName) -> Option<&str> {
        self.values.get(name.as_key()).map(String::as_str)
    }

    /// The raw value for an arbitrary key.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of entries in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the bag carries no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value of a required parameter.
    ///
    /// # Errors
    /// Returns [`FailureKind::MissingParameter`] if the parameter is absent
    /// or blank.
    pub fn required_str(&self, name: ParameterName) -> Result<&str, ValidationFailure> {
        match self.get(name) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ValidationFailure::new(name, FailureKind::MissingParameter)),
        }
    }

    /// The value of an optional boolean parameter.
    ///
    /// Absent parameters yield `default`. Recognized literals are `true`
    /// and `false`, case-insensitive.
    ///
    /// # Errors
    /// Returns [`FailureKind::InvalidFormat`] if a value is present but is
    /// not a recognized boolean literal.
    pub fn bool_or(&self, name: ParameterName, default: bool) -> Result<bool, ValidationFailure> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(ValidationFailure::new(
                    name,
                    FailureKind::InvalidFormat {
                        expected: "boolean",
                        found: value.to_owned(),
                    },
                )),
            },
        }
    }

    /// The value of a required enumerated parameter.
    ///
    /// Membership is case-sensitive.
    ///
    /// # Errors
    /// Returns [`FailureKind::MissingParameter`] if absent, or
    /// [`FailureKind::InvalidValue`] if the value is not in `allowed`.
    pub fn enum_member(
        &self,
        name: ParameterName,
        allowed: &'static [&'static str],
    ) -> Result<&str, ValidationFailure> {
        let value = self.required_str(name)?;
        if allowed.contains(&value) {
            Ok(value)
        } else {
            Err(ValidationFailure::new(
                name,
                FailureKind::InvalidValue {
                    allowed,
                    found: value.to_owned(),
                },
            ))
        }
    }

    /// The value of a required integer parameter.
    ///
    /// # Errors
    /// Returns [`FailureKind::MissingParameter`] if absent, or
    /// [`FailureKind::InvalidFormat`] on non-numeric content.
    pub fn integer(&self, name: ParameterName) -> Result<i64, ValidationFailure> {
        let value = self.required_str(name)?;
        value.trim().parse::<i64>().map_err(|_parse_error| {
            ValidationFailure::new(
                name,
                FailureKind::InvalidFormat {
                    expected: "integer",
                    found: value.to_owned(),
                },
            )
        })
    }

    /// The value of an optional integer parameter, `None` when absent.
    ///
    /// # Errors
    /// Returns [`FailureKind::InvalidFormat`] on non-numeric content.
    pub fn optional_integer(&self, name: ParameterName) -> Result<Option<i64>, ValidationFailure> {
        if self.get(name).is_none() {
            return Ok(None);
        }
        self.integer(name).map(Some)
    }
}

impl FromIterator<(String, String)> for ParameterBag {
    fn from_iter<Source: IntoIterator<Item = (String, String)>>(source: Source) -> Self {
        Self {
            values: source.into_iter().collect(),
        }
    }
}
