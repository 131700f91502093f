use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`DUMPS__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "DUMPS";
/// Config file stem used when no path is given.
pub const DEFAULT_CONFIG: &str = "server";

/// Custom error type for config loading.
#[dumps_derive::dumps_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering a file with environment overrides.
///
/// 1. **File**: `path`, or `server` (any extension the `config` crate understands,
///    e.g. `server.toml`) in the working directory. An explicit path must exist;
///    the default file is optional so the service can run on defaults alone.
/// 2. **Environment**: variables prefixed with `DUMPS__`, nesting with `__`
///    (`DUMPS__CONTENT__ROOT` maps to `content.root`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is
/// malformed, or the merged values do not fit `T`.
///
/// # Example
/// ```rust
/// use dumps_kernel::config::load_config;
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
    load_layered(path, environment(ENV_PREFIX))
}

fn environment(prefix: &str) -> Environment {
    Environment::with_prefix(prefix)
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), required, "Loading configuration");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env)
        .build()
        .context(format!("Failed to build config from {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
