/// End-to-end tests for the CLI
///
/// None of these reach a live ADCM: they cover argument handling, local
/// validation and the diagnostics printed when ADCM cannot be reached.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Nothing listens on the discard port, so connecting fails immediately
const UNREACHABLE_HOST: &str = "http://127.0.0.1:9";

fn command(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("adcm-provider");
    cmd.current_dir(dir.path())
        .env_remove("ADCM_HOST")
        .env_remove("ADCM_USERNAME")
        .env_remove("ADCM_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        let dir = TempDir::new().unwrap();
        command(&dir)
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("create"))
            .stdout(predicate::str::contains("bundles"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        let dir = TempDir::new().unwrap();
        command(&dir).arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        let dir = TempDir::new().unwrap();
        command(&dir).arg("--invalid-option").assert().code(2);
    }

    /// Exit code 2: Unknown resource kind
    #[test]
    fn test_exit_code_invalid_kind() {
        let dir = TempDir::new().unwrap();
        command(&dir)
            .args(["read", "service", "--name", "svcA"])
            .assert()
            .code(2);
    }

    /// Exit code 3: No ADCM host configured anywhere
    #[test]
    fn test_exit_code_missing_host() {
        let dir = TempDir::new().unwrap();
        command(&dir)
            .arg("bundles")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid configuration"))
            .stderr(predicate::str::contains("ADCM_HOST"));
    }

    /// Exit code 3: ADCM unreachable
    #[test]
    fn test_exit_code_unreachable_adcm() {
        let dir = TempDir::new().unwrap();
        command(&dir)
            .args(["read", "cluster", "--name", "analytics"])
            .env("ADCM_HOST", UNREACHABLE_HOST)
            .env("ADCM_USERNAME", "admin")
            .env("ADCM_PASSWORD", "admin")
            .assert()
            .code(3)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Error reading cluster"))
            .stderr(predicate::str::contains(
                "Could not read cluster, unexpected error",
            ));
    }
}

mod manifest_tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_invalid_manifest_fails_before_connecting() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("cluster.yml");
        fs::write(&manifest, "name: analytics\n").unwrap();

        command(&dir)
            .args(["create", "-f", manifest.to_str().unwrap()])
            .env("ADCM_HOST", UNREACHABLE_HOST)
            .env("ADCM_USERNAME", "admin")
            .env("ADCM_PASSWORD", "admin")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid resource manifest"));
    }

    #[test]
    fn test_missing_manifest_file() {
        let dir = TempDir::new().unwrap();
        command(&dir)
            .args(["update", "-f", "missing.yml"])
            .env("ADCM_HOST", UNREACHABLE_HOST)
            .env("ADCM_USERNAME", "admin")
            .env("ADCM_PASSWORD", "admin")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid resource manifest"));
    }

    #[test]
    fn test_update_is_rejected_without_configuration() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("cluster.yml");
        fs::write(&manifest, "kind: cluster\nname: analytics\nbundle_id: 5\n").unwrap();

        // No host or credentials anywhere: update must not get as far as signing in
        command(&dir)
            .args(["update", "-f", manifest.to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Error updating cluster"))
            .stderr(predicate::str::contains("update is not supported for cluster"))
            .stderr(predicate::str::contains("not configured").not());
    }

    #[test]
    fn test_create_reports_entity_kind_on_connection_failure() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("host.yml");
        fs::write(&manifest, "kind: host\nfqdn: host1.local\nprovider_id: 7\n").unwrap();

        command(&dir)
            .args(["create", "--file", manifest.to_str().unwrap()])
            .env("ADCM_HOST", UNREACHABLE_HOST)
            .env("ADCM_USERNAME", "admin")
            .env("ADCM_PASSWORD", "admin")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Error creating host"));
    }
}
