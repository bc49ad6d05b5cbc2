//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{netgraph_command, no_cfg_netgraph_command};

#[test]
fn test_help() {
    netgraph_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--config_location"))
        .stdout(predicate::str::contains("--dot_marker"))
        .stdout(predicate::str::contains("--no_write"))
        .stdout(predicate::str::contains("--hide_time"));
}

#[test]
fn test_version() {
    netgraph_command(&["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_arg() {
    no_cfg_netgraph_command()
        .arg("--this_does_not_exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

/// The sampling interval is fixed, so there is no way to set it.
#[test]
fn test_no_rate_arg() {
    no_cfg_netgraph_command()
        .arg("--rate")
        .arg("200")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_title_needs_value() {
    no_cfg_netgraph_command()
        .arg("--title")
        .assert()
        .failure()
        .stderr(predicate::str::contains("a value is required"));
}

#[test]
fn test_multiline_title() {
    no_cfg_netgraph_command()
        .arg("--title")
        .arg("Network\nMonitor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--title' must be a single line"));
}

#[test]
fn test_no_write_with_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("netgraph.toml");
    let path = path.to_str().unwrap();

    // The title is checked after the config is handled, so this stops right
    // after the missing config was (not) written.
    netgraph_command(&["-C", path, "--no_write", "--title", "a\nb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--title' must be a single line"));

    assert!(!dir.path().join("netgraph.toml").exists());
}

#[test]
fn test_missing_config_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("netgraph.toml");

    netgraph_command(&["-C", path.to_str().unwrap(), "--title", "a\nb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--title' must be a single line"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[flags]"));
    assert!(written.contains("[colors]"));
}
