use crate::spec::RouteKey;
use std::fmt;
use std::path::PathBuf;

/// Boxed underlying cause for parse and format failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned by every fallible `openapi_authz` operation.
///
/// Every variant is terminal for a run: there is no degraded output and no
/// retry. Variants carry enough context (file, route, cause) to locate the
/// problem in the spec or the invocation.
#[derive(Debug)]
pub enum AuthzError {
    /// The spec or an existing output file could not be read
    Read {
        /// File that failed to read
        path: PathBuf,
        /// I/O cause
        source: std::io::Error,
    },
    /// The document is not well-formed YAML/JSON or does not have the
    /// expected OpenAPI shape
    Parse {
        /// Input syntax that was attempted (`yaml` or `json`)
        format: &'static str,
        /// Deserializer cause
        source: BoxError,
    },
    /// One or more operations declare security without the bearer scheme
    ///
    /// Such routes are never downgraded to public.
    MissingBearerScheme {
        /// Bearer scheme name that was searched for
        scheme: String,
        /// Offending operations, sorted by route
        routes: Vec<RouteKey>,
    },
    /// The resolver configuration file is unreadable or invalid
    Config {
        /// Config file, if the problem came from one
        path: Option<PathBuf>,
        /// What is wrong
        message: String,
    },
    /// The namespace cannot be used as a Rust module identifier
    InvalidNamespace {
        /// Rejected namespace
        namespace: String,
        /// Why it was rejected
        reason: &'static str,
    },
    /// Template rendering failed
    Render(askama::Error),
    /// The external formatter failed
    Format {
        /// Formatter binary that was invoked
        program: String,
        /// Failure cause
        source: BoxError,
    },
    /// The generated file could not be written
    Write {
        /// Destination file
        path: PathBuf,
        /// I/O cause
        source: std::io::Error,
    },
    /// `--check` found the checked-in output out of date
    Stale {
        /// File that differs from the freshly generated output
        path: PathBuf,
    },
}

impl fmt::Display for AuthzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthzError::Read { path, .. } => {
                write!(f, "failed to read {}", path.display())
            }
            AuthzError::Parse { format, .. } => {
                write!(f, "failed to parse OpenAPI document as {format}")
            }
            AuthzError::MissingBearerScheme { scheme, routes } => {
                let routes: Vec<String> = routes.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "security section present but no {scheme} requirement found for: {}",
                    routes.join(", ")
                )
            }
            AuthzError::Config {
                path: Some(path),
                message,
            } => write!(f, "invalid resolver config {}: {message}", path.display()),
            AuthzError::Config {
                path: None,
                message,
            } => write!(f, "invalid resolver config: {message}"),
            AuthzError::InvalidNamespace { namespace, reason } => {
                write!(f, "invalid namespace '{namespace}': {reason}")
            }
            AuthzError::Render(_) => write!(f, "failed to render policy template"),
            AuthzError::Format { program, .. } => {
                write!(f, "formatting generated code with '{program}' failed")
            }
            AuthzError::Write { path, .. } => {
                write!(f, "failed to write {}", path.display())
            }
            AuthzError::Stale { path } => write!(
                f,
                "{} is out of date; re-run openapi-authz generate",
                path.display()
            ),
        }
    }
}

impl std::error::Error for AuthzError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthzError::Read { source, .. } | AuthzError::Write { source, .. } => Some(source),
            AuthzError::Parse { source, .. } | AuthzError::Format { source, .. } => {
                Some(source.as_ref())
            }
            AuthzError::Render(source) => Some(source),
            AuthzError::MissingBearerScheme { .. }
            | AuthzError::Config { .. }
            | AuthzError::InvalidNamespace { .. }
            | AuthzError::Stale { .. } => None,
        }
    }
}

impl From<askama::Error> for AuthzError {
    fn from(err: askama::Error) -> Self {
        AuthzError::Render(err)
    }
}
