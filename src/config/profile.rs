//! Persisted configuration profile.
//!
//! A run's settings live in a small TOML profile, discovered at
//! `./dnsvet.toml` first and `~/.dnsvet.toml` second. Every setting can be
//! overridden from the command line; overrides merged on top of the file
//! produce the effective [`Profile`] handed to the engine.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::constants::{CONFIG_BASENAME, DOT_CONFIG_BASENAME};
use crate::config::Config;
use crate::error_handling::ConfigError;

/// Effective configuration for one verification run. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Address of the test (staging) nameserver.
    pub server_test: String,
    /// Address of the production nameserver.
    pub server_prod: String,
    /// Domain suffix appended to bare hostnames, stored with a leading dot.
    pub default_domain: String,
    /// Whether reverse-DNS sub-checks should run.
    pub have_reverse_dns: bool,
    /// Suppress TTL-mismatch warnings on renames.
    pub ignore_ttl: bool,
    /// Seconds to pause between checks (0 disables the pause).
    pub sleep: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            server_test: String::new(),
            server_prod: String::new(),
            default_domain: String::new(),
            have_reverse_dns: true,
            ignore_ttl: false,
            sleep: 0.0,
        }
    }
}

impl Profile {
    /// Looks for a profile file: `dnsvet.toml` in the current directory,
    /// then `.dnsvet.toml` in the home directory.
    pub fn find_config_file() -> Option<PathBuf> {
        let cwd = env::current_dir().ok();
        let home = env::var_os("HOME").map(PathBuf::from);
        find_config_in(cwd.as_deref(), home.as_deref())
    }

    /// Reads and parses a profile file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse` on failure;
    /// unknown keys are a parse error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut profile: Profile = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        profile.normalize();
        Ok(profile)
    }

    /// Writes the profile as TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` or `ConfigError::Write` on failure.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self).map_err(|source| ConfigError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Produces the effective profile for a run: explicit `--config` path or
    /// discovered file (defaults when neither exists), with command-line
    /// overrides applied.
    ///
    /// # Errors
    ///
    /// Fails when the profile file is unreadable or invalid, or when a
    /// nameserver address is still missing after overrides.
    pub fn resolve(config: &Config) -> Result<Self, ConfigError> {
        let mut profile = match &config.config {
            Some(path) => Self::load(path)?,
            None => match Self::find_config_file() {
                Some(path) => {
                    log::info!("using config file {}", path.display());
                    Self::load(&path)?
                }
                None => {
                    log::debug!("no config file found, relying on command-line settings");
                    Self::default()
                }
            },
        };

        if let Some(server) = &config.server_test {
            profile.server_test = server.clone();
        }
        if let Some(server) = &config.server_prod {
            profile.server_prod = server.clone();
        }
        if let Some(domain) = &config.default_domain {
            profile.default_domain = domain.clone();
        }
        if let Some(sleep) = config.sleep {
            profile.sleep = sleep;
        }
        if config.ignore_ttl {
            profile.ignore_ttl = true;
        }
        if config.no_reverse_dns {
            profile.have_reverse_dns = false;
        }

        profile.normalize();
        profile.validate()?;
        Ok(profile)
    }

    /// Both nameservers are required; the default domain may stay empty when
    /// every change line uses FQDNs.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server_test.is_empty() {
            return Err(ConfigError::MissingField("server_test"));
        }
        if self.server_prod.is_empty() {
            return Err(ConfigError::MissingField("server_prod"));
        }
        Ok(())
    }

    /// The default domain is stored with a leading dot so canonicalization is
    /// a plain append.
    fn normalize(&mut self) {
        if !self.default_domain.is_empty() && !self.default_domain.starts_with('.') {
            self.default_domain.insert(0, '.');
        }
    }
}

fn find_config_in(cwd: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = cwd {
        let candidate = dir.join(CONFIG_BASENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    if let Some(dir) = home {
        let candidate = dir.join(DOT_CONFIG_BASENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
