//! Aggregated validation outcome for one parameter bag.

use core::fmt;

use crate::error::Error;
use crate::parameters::ParameterName;

/// Why a single parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The parameter is required but absent or empty.
    MissingParameter,
    /// The raw value could not be parsed as the expected type.
    InvalidFormat {
        /// Human-readable name of the expected type.
        expected: &'static str,
        /// The raw value that failed to parse.
        found: String,
    },
    /// The raw value is not a member of the allowed enumeration.
    InvalidValue {
        /// The accepted values, in declaration order.
        allowed: &'static [&'static str],
        /// The raw value that was rejected.
        found: String,
    },
    /// The referenced path does not resolve to an existing file or directory.
    FileNotFound {
        /// The probed path.
        path: String,
    },
    /// The referenced path exists but could not be opened for reading.
    FileNotReadable {
        /// The probed path.
        path: String,
    },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter => {
                formatter.write_str("parameter is required and was not provided")
            }
            Self::InvalidFormat { expected, found } => {
                write!(formatter, "value '{found}' is not a valid {expected}")
            }
            Self::InvalidValue { allowed, found } => {
                write!(
                    formatter,
                    "value '{found}' is not one of [{}]",
                    allowed.join(", ")
                )
            }
            Self::FileNotFound { path } => write!(formatter, "file not found: {path}"),
            Self::FileNotReadable { path } => write!(formatter, "file not readable: {path}"),
        }
    }
}

/// A single validation failure attributed to one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// The parameter the failure is attributed to.
    pub parameter: ParameterName,
    /// Why that parameter failed.
    pub kind: FailureKind,
}

impl ValidationFailure {
    /// Creates a failure attributed to `parameter`.
    #[must_use]
    pub fn new(parameter: ParameterName, kind: FailureKind) -> Self {
        Self { parameter, kind }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.parameter, self.kind)
    }
}

/// Every failure collected from one validation pass, in rule declaration
/// order.
///
/// Rules never abort the pass; the report is complete after a single run so
/// an operator sees all problems at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    /// Creates an empty (valid) report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no rule recorded a failure.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// The recorded failures, in rule declaration order.
    #[must_use]
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Records one failure.
    pub fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Converts the report into a gate result for the launcher: `Ok(())`
    /// when valid, [`Error::InvalidParameters`] otherwise.
    ///
    /// # Errors
    /// Returns `Error::InvalidParameters` carrying this report when any
    /// failure was recorded.
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidParameters(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return formatter.write_str("all parameters are valid");
        }
        for (index, failure) in self.failures.iter().enumerate() {
            if index > 0 {
                writeln!(formatter)?;
            }
            write!(formatter, "  - {failure}")?;
        }
        Ok(())
    }
}

impl From<Vec<ValidationFailure>> for ValidationReport {
    fn from(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }
}
