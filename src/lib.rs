//! # openapi-authz
//!
//! Turns the `security` declarations of an OpenAPI v3 document into a static,
//! typed table mapping each route (method + templated path) to an
//! authorization policy, and writes that table as Rust source for an HTTP
//! middleware to consume.
//!
//! ## Architecture
//!
//! - **[`spec`]** - Loads the document and resolves one [`AuthPolicy`] per operation
//! - **[`generator`]** - Renders the resolved [`Config`] as a Rust module
//! - **[`config`]** - Bearer scheme name and role prefix settings
//! - **[`cli`]** - The `openapi-authz` command line
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(openapi-authz)
//!     participant Spec as spec::load_config
//!     participant Gen as generator::generate
//!     participant FS as File System
//!
//!     User->>CLI: generate --spec openapi.yaml --output src/httproutes.rs
//!     CLI->>Spec: load_config(spec, resolver config)
//!     Spec->>Spec: Parse YAML/JSON
//!     Spec->>Spec: derive_policy() per operation
//!     Spec-->>CLI: Config
//!     CLI->>Gen: generate("httproutes", &config)
//!     Gen->>Gen: Sort routes, render template
//!     Gen-->>CLI: Rust source
//!     CLI->>FS: write_atomic(output)
//! ```
//!
//! ## Policy Resolution
//!
//! For each operation the effective security list is the operation's own
//! `security` if present (even `[]`), else the root `security`. An absent or
//! empty list means the route is public. Otherwise the first requirement that
//! names the bearer scheme (`BearerAuth` by default) decides the policy: its
//! tokens starting with the role prefix (`role:` by default) become roles, the
//! rest become scopes.
//!
//! ```yaml
//! security:
//!   - BearerAuth: []
//! paths:
//!   /public:
//!     get:
//!       security: []                          # public
//!   /admin:
//!     delete:
//!       security:
//!         - BearerAuth: ["role:admin"]        # role "admin"
//!   /vegetables:
//!     post:
//!       security:
//!         - BearerAuth: ["vegetable:write"]   # scope "vegetable:write"
//! ```
//!
//! A non-empty security list that never mentions the bearer scheme is an
//! error, never a silent fallback to public.
//!
//! ## Usage from Code
//!
//! ```rust,no_run
//! use openapi_authz::{generator, spec, ResolverConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), openapi_authz::AuthzError> {
//! let config = spec::load_config(Path::new("openapi.yaml"), &ResolverConfig::default())?;
//! let source = generator::generate("httproutes", &config)?;
//! generator::write_atomic(Path::new("src/httproutes.rs"), &source)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
mod error;
pub mod generator;
pub mod logging;
pub mod spec;

pub use config::ResolverConfig;
pub use error::{AuthzError, BoxError};
pub use spec::{AuthPolicy, Config, RouteKey};
