/// Application configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vidshelf_storage::AdminCredentials;

/// Config file read from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "vidshelf.toml";

/// Prefix of the environment variables overriding file settings
pub const ENV_PREFIX: &str = "VIDSHELF";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub admin: AdminSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Store file holding the catalog and the session flag
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

/// Admin sign-in values
///
/// Either value may be missing here; the ones baked in at build time
/// (`VIDSHELF_ADMIN_USERNAME` / `VIDSHELF_ADMIN_PASSWORD` in the build
/// environment) fill the gaps.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct AdminSettings {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for AdminSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSettings")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `vidshelf.toml` is read if
    /// present. `VIDSHELF_*` variables override file values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`AppConfig::load`] with the environment replaced by `env`
    /// when given
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with VIDSHELF_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("_")
                .source(env),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.path.as_os_str().is_empty() {
            return Err(CliError::Config(
                "storage path is required (set VIDSHELF_STORAGE_PATH)".to_string(),
            ));
        }
        Ok(())
    }

    /// Admin credentials, falling back to build-time values
    ///
    /// `None` means login is disabled; this is reported when a login is
    /// attempted, never at startup.
    pub fn admin_credentials(&self) -> Option<AdminCredentials> {
        let username = self
            .admin
            .username
            .clone()
            .or_else(|| option_env!("VIDSHELF_ADMIN_USERNAME").map(str::to_string));
        let password = self
            .admin
            .password
            .clone()
            .or_else(|| option_env!("VIDSHELF_ADMIN_PASSWORD").map(str::to_string));

        AdminCredentials::from_parts(username, password)
    }
}

// Default values
fn default_storage_path() -> PathBuf {
    PathBuf::from("./data/vidshelf.redb")
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}
