//! File-system probes for path-valued parameters.
//!
//! Probes are blocking and unretried; a transient I/O error surfaces as a
//! validation failure on the owning parameter rather than as an
//! infrastructure error, because validation runs once before any expensive
//! work starts.

use std::fs::File;
use std::path::Path;

use crate::parameters::ParameterName;
use crate::report::{FailureKind, ValidationFailure};

/// Checks that `path` resolves to an existing regular file.
///
/// # Errors
/// Returns [`FailureKind::FileNotFound`] attributed to `parameter` when it
/// does not.
pub fn check_file_exists(path: &str, parameter: ParameterName) -> Result<(), ValidationFailure> {
    if Path::new(path).is_file() {
        Ok(())
    } else {
        Err(ValidationFailure::new(
            parameter,
            FailureKind::FileNotFound {
                path: path.to_owned(),
            },
        ))
    }
}

/// Checks that `path` can be opened for reading.
///
/// # Errors
/// Returns [`FailureKind::FileNotReadable`] attributed to `parameter` when
/// the open fails.
pub fn check_file_readable(path: &str, parameter: ParameterName) -> Result<(), ValidationFailure> {
    match File::open(path) {
        Ok(_file) => Ok(()),
        Err(_io_error) => Err(ValidationFailure::new(
            parameter,
            FailureKind::FileNotReadable {
                path: path.to_owned(),
            },
        )),
    }
}

/// Checks that `path` resolves to an existing directory.
///
/// # Errors
/// Returns [`FailureKind::FileNotFound`] attributed to `parameter` when it
/// does not.
pub fn check_directory_exists(
    path: &str,
    parameter: ParameterName,
) -> Result<(), ValidationFailure> {
    if Path::new(path).is_dir() {
        Ok(())
    } else {
        Err(ValidationFailure::new(
            parameter,
            FailureKind::FileNotFound {
                path: path.to_owned(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_readable_file_passes_both_probes() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp.path().join("input.vcf.gz");
        std::fs::write(&file_path, b"##fileformat=VCFv4.2\n").expect("Failed to write file");
        let raw = file_path.to_string_lossy();

        assert!(check_file_exists(&raw, ParameterName::InputVcf).is_ok());
        assert!(check_file_readable(&raw, ParameterName::InputVcf).is_ok());
    }

    #[test]
    fn missing_file_reports_file_not_found() {
        let failure =
            check_file_exists("/no/such/file.vcf", ParameterName::InputVcf).unwrap_err();
        assert_eq!(failure.parameter, ParameterName::InputVcf);
        assert!(matches!(failure.kind, FailureKind::FileNotFound { .. }));
    }

    #[test]
    fn directory_probe_rejects_files() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp.path().join("not_a_dir");
        std::fs::write(&file_path, b"x").expect("Failed to write file");

        let dir_raw = temp.path().to_string_lossy();
        assert!(check_directory_exists(&dir_raw, ParameterName::AppVepCachePath).is_ok());

        let file_raw = file_path.to_string_lossy();
        let failure =
            check_directory_exists(&file_raw, ParameterName::AppVepCachePath).unwrap_err();
        assert!(matches!(failure.kind, FailureKind::FileNotFound { .. }));
    }
}
