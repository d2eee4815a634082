/// End-to-end tests for config file loading and connection option merging.
///
/// These tests exercise the flow from a config file on disk through CLI
/// invocation, using `assert_cmd` and `tempfile` for isolated environments.
/// ADCM itself is never reachable, so a run that got past configuration
/// fails while connecting and names the operation it attempted.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

const UNREACHABLE_HOST: &str = "http://127.0.0.1:9";

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn command(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("adcm-provider");
    cmd.current_dir(dir.path())
        .env_remove("ADCM_HOST")
        .env_remove("ADCM_USERNAME")
        .env_remove("ADCM_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovered_config_supplies_connection() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("adcm-provider.config.yml"),
            &format!(
                "host: {}\nusername: admin\npassword: admin\nrequest_timeout_secs: 2\n",
                UNREACHABLE_HOST
            ),
        );

        // Past configuration: the failure is the connection attempt
        command(&dir)
            .arg("bundles")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Error listing bundles"));
    }

    #[test]
    fn test_no_config_file_requires_environment() {
        let dir = TempDir::new().unwrap();

        command(&dir)
            .arg("bundles")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("ADCM host is not configured"));
    }

    #[test]
    fn test_unknown_field_is_warned_about() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("adcm-provider.config.yml"),
            &format!(
                "host: {}\nusername: admin\npassword: admin\nhots: typo\n",
                UNREACHABLE_HOST
            ),
        );

        command(&dir)
            .arg("bundles")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Unknown config field 'hots'"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(
            &config_path,
            &format!("host: {}\nusername: admin\npassword: admin\n", UNREACHABLE_HOST),
        );

        command(&dir)
            .args(["read", "host", "--fqdn", "host1.local", "--config"])
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Error reading host"));
    }

    #[test]
    fn test_explicit_config_missing_file() {
        let dir = TempDir::new().unwrap();

        command(&dir)
            .args(["bundles", "--config", "/nonexistent/adcm.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        write_config(&config_path, "host: [[[broken");

        command(&dir)
            .args(["bundles", "-c"])
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("adcm-provider.config.yml"),
            "service_ready_timeout_secs: 0\n",
        );

        command(&dir)
            .arg("bundles")
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "service_ready_timeout_secs must be greater than zero",
            ));
    }
}

// ============================================================================
// Precedence Tests
// ============================================================================

mod precedence_tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        // Config lacks credentials entirely
        write_config(
            &dir.path().join("adcm-provider.config.yml"),
            &format!("host: {}\n", UNREACHABLE_HOST),
        );

        command(&dir)
            .args(["bundles", "--username", "admin", "--password", "admin"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Error listing bundles"));
    }

    #[test]
    fn test_environment_fills_missing_values() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("adcm-provider.config.yml"),
            "username: admin\npassword: admin\n",
        );

        command(&dir)
            .arg("bundles")
            .env("ADCM_HOST", UNREACHABLE_HOST)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Error listing bundles"));
    }

    #[test]
    fn test_missing_password_names_variable() {
        let dir = TempDir::new().unwrap();

        command(&dir)
            .args(["bundles", "--host", UNREACHABLE_HOST, "--username", "admin"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("ADCM_PASSWORD"));
    }
}
