//! Front-door tests: exit codes, validation gating, restart-skip.
#![cfg(test)]
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    reason = "Test code prioritizes clarity"
)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn varpipe() -> Command {
    Command::cargo_bin("varpipe").expect("varpipe binary should build")
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"content").expect("Failed to write fixture file");
    path
}

fn write_load_only_parameters(dir: &Path) -> PathBuf {
    let vcf = touch(dir, "input.vcf.gz");
    let path = dir.join("params.toml");
    let contents = format!(
        "\"db.name\" = \"database\"\n\
         \"db.collections.variants.name\" = \"variants\"\n\
         \"input.study.id\" = \"s1\"\n\
         \"input.vcf.id\" = \"v1\"\n\
         \"input.vcf.aggregation\" = \"NONE\"\n\
         \"input.vcf\" = \"{}\"\n",
        vcf.display()
    );
    fs::write(&path, contents).expect("Failed to write parameter file");
    path
}

#[test]
fn empty_bag_fails_validation_with_nonzero_exit() {
    varpipe()
        .args(["--pipeline", "load-only", "--validate-only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("db.name"));
}

#[test]
fn valid_load_only_bag_passes_validation() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let parameters = write_load_only_parameters(temp.path());

    varpipe()
        .args(["--pipeline", "load-only", "--validate-only"])
        .arg("--parameters")
        .arg(&parameters)
        .assert()
        .success();
}

#[test]
fn override_can_invalidate_a_file_bag() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let parameters = write_load_only_parameters(temp.path());

    varpipe()
        .args(["--pipeline", "load-only", "--validate-only"])
        .arg("--parameters")
        .arg(&parameters)
        .args(["-P", "input.vcf.aggregation=BOGUS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input.vcf.aggregation"));
}

#[test]
fn successful_run_persists_execution_state() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let parameters = write_load_only_parameters(temp.path());
    let state_dir = temp.path().join("state");

    varpipe()
        .args(["--pipeline", "load-only"])
        .arg("--parameters")
        .arg(&parameters)
        .arg("--state-dir")
        .arg(&state_dir)
        .assert()
        .success();

    let state_file = state_dir.join("load-only.state.json");
    let contents = fs::read_to_string(state_file).expect("Failed to read state file");
    assert!(contents.contains("load-variants"));

    // Relaunch succeeds and skips the completed step.
    varpipe()
        .args(["--pipeline", "load-only"])
        .arg("--parameters")
        .arg(&parameters)
        .arg("--state-dir")
        .arg(&state_dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));
}

#[test]
fn aggregated_job_requires_annotation_parameters_when_not_skipped() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let parameters = write_load_only_parameters(temp.path());

    varpipe()
        .args(["--pipeline", "aggregated-vcf", "--validate-only"])
        .arg("--parameters")
        .arg(&parameters)
        .args([
            "-P",
            "db.collections.files.name=files",
            "-P",
            "input.study.name=study one",
            "-P",
            "input.study.type=COLLECTION",
            "-P",
            "annotation.skip=true",
        ])
        .assert()
        .success();

    varpipe()
        .args(["--pipeline", "aggregated-vcf", "--validate-only"])
        .arg("--parameters")
        .arg(&parameters)
        .args([
            "-P",
            "db.collections.files.name=files",
            "-P",
            "input.study.name=study one",
            "-P",
            "input.study.type=COLLECTION",
            "-P",
            "annotation.skip=false",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("app.vep.cache.species"));
}
