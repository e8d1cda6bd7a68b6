//! Resolver settings: which security scheme counts as the bearer scheme and
//! which token prefix marks a role.
//!
//! Settings may come from an `openapi-authz.toml` file that sits alongside the
//! OpenAPI spec (or is passed explicitly), and from CLI flags which win over
//! the file:
//!
//! ```toml
//! bearer_scheme = "BearerAuth"
//! role_prefix = "role:"
//! namespace = "httproutes"
//! ```

use crate::error::AuthzError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Scheme name searched for in security requirement objects
pub const DEFAULT_BEARER_SCHEME: &str = "BearerAuth";
/// Prefix that turns a requirement token into a role
pub const DEFAULT_ROLE_PREFIX: &str = "role:";
/// Module name for generated code when none is given
pub const DEFAULT_NAMESPACE: &str = "httproutes";
/// File name looked up next to the spec
pub const CONFIG_FILE_NAME: &str = "openapi-authz.toml";

/// Settings consulted by the policy resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub bearer_scheme: String,
    pub role_prefix: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            bearer_scheme: DEFAULT_BEARER_SCHEME.to_string(),
            role_prefix: DEFAULT_ROLE_PREFIX.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Reject settings that would make classification meaningless.
    pub fn validate(&self) -> Result<(), AuthzError> {
        if self.bearer_scheme.trim().is_empty() {
            return Err(AuthzError::Config {
                path: None,
                message: "bearer scheme name must not be empty".to_string(),
            });
        }
        if self.role_prefix.is_empty() {
            return Err(AuthzError::Config {
                path: None,
                message: "role prefix must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Contents of `openapi-authz.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub bearer_scheme: Option<String>,
    pub role_prefix: Option<String>,
    pub namespace: Option<String>,
}

impl FileConfig {
    /// Apply optional overrides on top of this file's values and the defaults.
    #[must_use]
    pub fn resolver(&self, scheme: Option<&str>, role_prefix: Option<&str>) -> ResolverConfig {
        let defaults = ResolverConfig::default();
        ResolverConfig {
            bearer_scheme: scheme
                .map(str::to_string)
                .or_else(|| self.bearer_scheme.clone())
                .unwrap_or(defaults.bearer_scheme),
            role_prefix: role_prefix
                .map(str::to_string)
                .or_else(|| self.role_prefix.clone())
                .unwrap_or(defaults.role_prefix),
        }
    }

    /// Namespace from the override, else the file, else [`DEFAULT_NAMESPACE`].
    #[must_use]
    pub fn namespace(&self, namespace: Option<&str>) -> String {
        namespace
            .map(str::to_string)
            .or_else(|| self.namespace.clone())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string())
    }
}

/// Load a resolver config file.
///
/// Unlike auto-detection, an explicit path that does not exist is an error.
pub fn load_file_config(path: &Path) -> Result<FileConfig, AuthzError> {
    let contents = std::fs::read_to_string(path).map_err(|e| AuthzError::Config {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    toml::from_str(&contents).map_err(|e| AuthzError::Config {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })
}

/// Look for [`CONFIG_FILE_NAME`] in the spec's directory.
#[must_use]
pub fn auto_detect_config_path(spec_path: &Path) -> Option<PathBuf> {
    let config_path = spec_path.parent()?.join(CONFIG_FILE_NAME);
    if config_path.is_file() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve and load the config file for a run.
///
/// Priority:
/// 1. Explicitly provided path
/// 2. Auto-detected alongside the spec
/// 3. Empty config (defaults only)
pub fn resolve_file_config(
    explicit_path: Option<&Path>,
    spec_path: &Path,
) -> Result<FileConfig, AuthzError> {
    match explicit_path
        .map(Path::to_path_buf)
        .or_else(|| auto_detect_config_path(spec_path))
    {
        Some(path) => {
            tracing::debug!(config = %path.display(), "Loading resolver config");
            load_file_config(&path)
        }
        None => Ok(FileConfig::default()),
    }
}
