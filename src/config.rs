//! Configuration file support for adcm-provider.
//!
//! Connection settings come from three layers, later ones winning:
//! `ADCM_*` environment variables, the `adcm-provider.config.yml` file,
//! and command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::HttpAdcmTransport;
use crate::provisioning::policies::readiness_policy::{DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL};
use crate::provisioning::policies::ReadinessPolicy;

type Result<T> = anyhow::Result<T>;

pub const CONFIG_FILENAME: &str = "adcm-provider.config.yml";

pub const ENV_HOST: &str = "ADCM_HOST";
pub const ENV_USERNAME: &str = "ADCM_USERNAME";
pub const ENV_PASSWORD: &str = "ADCM_PASSWORD";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub service_ready_timeout_secs: Option<u64>,
    pub service_poll_interval_ms: Option<u64>,
    pub deadline_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Connection values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub request_timeout: Duration,
    pub readiness: ReadinessPolicy,
    /// Overall budget after which no further ADCM request is started
    pub deadline: Option<Duration>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let durations = [
        ("request_timeout_secs", config.request_timeout_secs),
        ("service_ready_timeout_secs", config.service_ready_timeout_secs),
        ("service_poll_interval_ms", config.service_poll_interval_ms),
        ("deadline_secs", config.deadline_secs),
    ];
    for (field, value) in durations {
        if value == Some(0) {
            bail!(
                "Invalid config: {} must be greater than zero.\n\n\
                 💡 Hint: Remove the field to use the default.",
                field
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

fn pick(
    cli: Option<&String>,
    file: Option<&String>,
    env_value: Option<String>,
    env_name: &str,
    what: &str,
) -> Result<String> {
    // A blank value at any layer falls through to the next one
    let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    present(cli.cloned())
        .or_else(|| present(file.cloned()))
        .or_else(|| present(env_value))
        .with_context(|| {
            format!(
                "ADCM {} is not configured.\n\n💡 Hint: Set {}, add '{}' to {}, or pass --{}.",
                what,
                env_name,
                what,
                CONFIG_FILENAME,
                what
            )
        })
}

/// Merge environment, config file and command-line values.
///
/// `env` looks up an environment variable. Blank values from any source
/// count as unset.
pub fn resolve_settings<F>(
    env: F,
    file: Option<&ConfigFile>,
    cli: &ConnectionOverrides,
) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let empty = ConfigFile::default();
    let file = file.unwrap_or(&empty);

    let host = pick(cli.host.as_ref(), file.host.as_ref(), env(ENV_HOST), ENV_HOST, "host")?;
    let username = pick(
        cli.username.as_ref(),
        file.username.as_ref(),
        env(ENV_USERNAME),
        ENV_USERNAME,
        "username",
    )?;
    let password = pick(
        cli.password.as_ref(),
        file.password.as_ref(),
        env(ENV_PASSWORD),
        ENV_PASSWORD,
        "password",
    )?;

    let readiness = ReadinessPolicy::new(
        file.service_ready_timeout_secs
            .map_or(DEFAULT_MAX_WAIT, Duration::from_secs),
        file.service_poll_interval_ms
            .map_or(DEFAULT_POLL_INTERVAL, Duration::from_millis),
    );

    Ok(Settings {
        host,
        username,
        password,
        request_timeout: Duration::from_secs(
            file.request_timeout_secs
                .unwrap_or(HttpAdcmTransport::DEFAULT_TIMEOUT_SECONDS),
        ),
        readiness,
        deadline: file.deadline_secs.map(Duration::from_secs),
    })
}
