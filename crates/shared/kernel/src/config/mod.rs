use config::{Config, Environment, File};
use homeval_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Custom error type for config loading.
#[homeval_derive::homeval_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a base file layered with environment overrides.
///
/// 1. **Base File**: `path` (extension optional, e.g. `server` finds `server.toml`); defaults to
///    `server` in the working directory. The file is required.
/// 2. **Environment Overrides**: variables prefixed with `HOMEVAL__`, nested with double
///    underscores (`HOMEVAL__VALUATION__ARTIFACTS_DIR` maps to `valuation.artifacts_dir`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, an override is malformed, or the merged
/// values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use homeval_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());
    layered(&path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

fn layered<T>(path: &Path, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    debug!(path = %path.display(), "Loading config");

    Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(environment)
        .build()
        .context(format!("Failed to read {}", path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeval_domain::config::{ApiConfig, UnknownLocationPolicy};
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn overrides(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        environment().source(Some(source))
    }

    #[test]
    fn environment_overrides_file_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("server.toml");
        fs::write(&path, "[server]\nport = 5000\n\n[valuation]\nunknown_location = \"reject\"\n")
            .expect("write config");

        let cfg: ApiConfig = layered(
            &path,
            overrides(&[
                ("HOMEVAL__SERVER__PORT", "8081"),
                ("HOMEVAL__VALUATION__UNKNOWN_LOCATION", "baseline"),
            ]),
        )
        .expect("config should load");

        assert_eq!(cfg.server.port, 8081);
        assert_eq!(cfg.valuation.unknown_location, UnknownLocationPolicy::Baseline);
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("server.toml");
        fs::write(&path, "[server]\nport = 7000\n").expect("write config");

        let cfg: ApiConfig =
            layered(&path, overrides(&[("OTHER__SERVER__PORT", "1")])).expect("config should load");
        assert_eq!(cfg.server.port, 7000);
    }
}
