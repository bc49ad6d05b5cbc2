//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::netgraph_command;

#[test]
fn test_toml_mismatch_type() {
    netgraph_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

/// This test isn't really needed as this is technically covered by TOML itself.
/// However, I feel like it's worth checking anyways - not like it takes long.
#[test]
fn test_duplicate_flag() {
    netgraph_command(&["-C", "./tests/invalid_configs/duplicate_flag.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

#[test]
fn test_unknown_flag() {
    netgraph_command(&["-C", "./tests/invalid_configs/unknown_flag.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

/// Checks for if a hex is valid
#[test]
fn test_invalid_colour_hex() {
    netgraph_command(&["-C", "./tests/invalid_configs/invalid_colour_hex.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"))
        .stderr(predicate::str::contains("colors.tx_color"));
}

/// Checks for if a hex is too long
#[test]
fn test_invalid_colour_hex_2() {
    netgraph_command(&["-C", "./tests/invalid_configs/invalid_colour_hex_2.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"));
}

#[test]
fn test_invalid_colour_name() {
    netgraph_command(&["-C", "./tests/invalid_configs/invalid_colour_name.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid named color"));
}

#[test]
fn test_invalid_colour_rgb() {
    netgraph_command(&["-C", "./tests/invalid_configs/invalid_colour_rgb.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid RGB colour"));
}

#[test]
fn test_multiline_config_title() {
    netgraph_command(&["-C", "./tests/invalid_configs/multiline_title.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'title' must be a single line"));
}
