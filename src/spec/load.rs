use super::document::Document;
use super::resolve::build_config;
use super::types::Config;
use crate::config::ResolverConfig;
use crate::error::{AuthzError, BoxError};
use std::path::Path;
use tracing::info;

/// Input syntax of an OpenAPI document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON; everything else is treated as YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Json => "json",
        }
    }
}

/// Parse raw document bytes into the loader's intermediate form.
pub fn parse_document(bytes: &[u8], format: DocumentFormat) -> Result<Document, AuthzError> {
    let parsed: Result<Document, BoxError> = match format {
        DocumentFormat::Yaml => serde_yaml::from_slice(bytes).map_err(|e| e.into()),
        DocumentFormat::Json => serde_json::from_slice(bytes).map_err(|e| e.into()),
    };
    parsed.map_err(|source| AuthzError::Parse {
        format: format.as_str(),
        source,
    })
}

/// Resolve policies from document bytes.
pub fn load_config_from_bytes(
    bytes: &[u8],
    format: DocumentFormat,
    config: &ResolverConfig,
) -> Result<Config, AuthzError> {
    let document = parse_document(bytes, format)?;
    build_config(&document, config)
}

/// Read an OpenAPI file and resolve the policy of every operation in it.
pub fn load_config(path: &Path, config: &ResolverConfig) -> Result<Config, AuthzError> {
    let bytes = std::fs::read(path).map_err(|source| AuthzError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = DocumentFormat::from_path(path);
    let resolved = load_config_from_bytes(&bytes, format, config)?;
    info!(
        spec = %path.display(),
        format = format.as_str(),
        operations = resolved.len(),
        scheme = %config.bearer_scheme,
        "Resolved authorization policies"
    );
    Ok(resolved)
}
