//! CLI surface tests.
//!
//! These run the built binary and assert on exit codes and output without
//! touching a real backend or the system keyring: every invocation either
//! fails during argument validation or supplies `--token` so no persisted
//! state is consulted.

use assert_cmd::Command;
use predicates::prelude::*;

fn fleet_cli() -> Command {
    let mut cmd = Command::cargo_bin("fleet-cli").expect("binary should build");
    cmd.env_remove("FLEET_BASE_URL")
        .env_remove("FLEET_API_TOKEN")
        .env_remove("FLEET_TIMEOUT")
        .env_remove("FLEET_USERNAME")
        .env_remove("FLEET_PASSWORD");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    fleet_cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("export-url"))
        .stdout(predicate::str::contains("logout"));
}

#[test]
fn test_invalid_output_format_fails_fast() {
    fleet_cli()
        .args(["events", "-o", "yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}

#[test]
fn test_invalid_export_format_fails_fast() {
    fleet_cli()
        .args(["export", "--format", "xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Format must be 'json' or 'csv'"));
}

#[test]
fn test_invalid_date_flag_is_rejected() {
    fleet_cli()
        .args(["events", "-o", "json", "--date-from", "yesterday"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--date-from"));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    fleet_cli()
        .args(["--base-url", "not a url", "export-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FLEET_BASE_URL"));
}

#[test]
fn test_export_url_is_offline_and_carries_filters() {
    fleet_cli()
        .args([
            "--base-url",
            "http://127.0.0.1:8000/v1",
            "export-url",
            "--name",
            "blackknight",
            "--status",
            "active",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("/v1/export_events?"))
        .stdout(predicate::str::contains("name=blackknight"))
        .stdout(predicate::str::contains("status=active"))
        .stdout(predicate::str::contains("format=csv"));
}

#[test]
fn test_unreachable_backend_maps_to_connection_exit_code() {
    fleet_cli()
        .args([
            "--base-url",
            "http://127.0.0.1:1/v1",
            "--token",
            "tok",
            "events",
            "-o",
            "json",
        ])
        .assert()
        .failure()
        .code(3);
}
