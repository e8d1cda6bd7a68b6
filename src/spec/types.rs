use http::Method;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Identifies one operation: uppercase HTTP method plus the templated path
/// exactly as written in the spec (e.g. `/items/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub method: Method,
    pub path: String,
}

impl RouteKey {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        RouteKey {
            method,
            path: path.into(),
        }
    }
}

// `http::Method` has no ordering of its own; routes sort by method name, then path.
impl Ord for RouteKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.method
            .as_str()
            .cmp(other.method.as_str())
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for RouteKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Resolved authorization requirement for a single operation.
///
/// `roles` is OR-combined (the caller needs any one of them), `scopes` is
/// AND-combined (the caller needs all of them). Both keep the order in which
/// the tokens appear in the spec. A policy with `require_auth == false` never
/// carries roles or scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthPolicy {
    pub require_auth: bool,
    pub roles: Vec<String>,
    pub scopes: Vec<String>,
}

impl AuthPolicy {
    /// Policy for an operation anyone may call.
    #[must_use]
    pub fn public() -> Self {
        AuthPolicy::default()
    }

    /// Policy requiring a valid credential but no particular role or scope.
    #[must_use]
    pub fn authenticated() -> Self {
        AuthPolicy {
            require_auth: true,
            ..AuthPolicy::default()
        }
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        !self.require_auth
    }
}

/// All policies resolved from one spec.
///
/// Iteration order of `policies` is unspecified; use [`Config::sorted`] when
/// order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub policies: HashMap<RouteKey, AuthPolicy>,
}

impl Config {
    #[must_use]
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Look up the policy for `method` + templated `path`.
    #[must_use]
    pub fn get(&self, method: Method, path: &str) -> Option<&AuthPolicy> {
        self.policies.get(&RouteKey::new(method, path))
    }

    /// Entries ordered by method, then path.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&RouteKey, &AuthPolicy)> {
        let mut entries: Vec<_> = self.policies.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(RouteKey, AuthPolicy)> for Config {
    fn from_iter<I: IntoIterator<Item = (RouteKey, AuthPolicy)>>(iter: I) -> Self {
        Config {
            policies: iter.into_iter().collect(),
        }
    }
}
