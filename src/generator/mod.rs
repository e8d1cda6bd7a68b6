//! # Generator Module
//!
//! Serializes a resolved [`Config`] as a Rust source file.
//!
//! ## Generated Structure
//!
//! ```text
//! // Code generated by openapi-authz. DO NOT EDIT.
//!
//! pub mod httproutes {
//!     pub struct RouteKey { .. }
//!     pub struct AuthPolicy { .. }
//!     impl AuthPolicy { pub const PUBLIC: AuthPolicy = .. }
//!     pub static POLICIES: &[(RouteKey, AuthPolicy)] = &[ .. ];
//! }
//! ```
//!
//! `POLICIES` is sorted by method, then path, so the output is byte-for-byte
//! identical for the same policies no matter how the `Config` map iterates.
//! That keeps checked-in output diffable and lets consumers binary search it.
//!
//! The file declares its own module, so consumers pull it in with
//! `include!("httproutes.rs")` rather than `mod httproutes;`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use openapi_authz::{generator, spec, ResolverConfig};
//!
//! let config = spec::load_config("openapi.yaml".as_ref(), &ResolverConfig::default())?;
//! let source = generator::generate("httproutes", &config)?;
//! generator::write_atomic("src/httproutes.rs".as_ref(), &source)?;
//! ```

mod format;
mod ident;
mod templates;
mod writer;

pub use format::*;
pub use ident::*;
pub use templates::*;
pub use writer::*;

use crate::error::AuthzError;
use crate::spec::Config;
use askama::Template;
use tracing::debug;

/// Render the policy module for `config` under `namespace`.
///
/// The namespace is validated before anything is rendered.
pub fn generate(namespace: &str, config: &Config) -> Result<String, AuthzError> {
    validate_namespace(namespace)?;

    let mut rendered = PoliciesTemplateData::new(namespace, config).render()?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    debug!(
        namespace,
        entries = config.len(),
        bytes = rendered.len(),
        "Rendered policy module"
    );
    Ok(rendered)
}
