use crate::spec::{AuthPolicy, Config, RouteKey};
use askama::Template;

/// One row of the generated `POLICIES` table, pre-rendered as Rust expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEntry {
    /// `RouteKey { .. }` literal
    pub key: String,
    /// `AuthPolicy { .. }` literal or `AuthPolicy::PUBLIC`
    pub policy: String,
}

/// Template data for the generated policy module
#[derive(Template)]
#[template(path = "policies.rs.txt", escape = "none")]
pub struct PoliciesTemplateData {
    /// Name of the generated `pub mod`
    pub namespace: String,
    /// Table rows in route order
    pub entries: Vec<PolicyEntry>,
}

impl PoliciesTemplateData {
    /// Build template data with entries sorted by method, then path.
    #[must_use]
    pub fn new(namespace: &str, config: &Config) -> Self {
        PoliciesTemplateData {
            namespace: namespace.to_string(),
            entries: config
                .sorted()
                .into_iter()
                .map(|(key, policy)| PolicyEntry {
                    key: route_key_literal(key),
                    policy: policy_literal(policy),
                })
                .collect(),
        }
    }
}

/// Render `value` as a Rust string literal.
///
/// `str`'s `Debug` output quotes and escapes exactly like a Rust literal.
#[must_use]
pub fn rust_string_literal(value: &str) -> String {
    format!("{value:?}")
}

fn slice_literal(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| rust_string_literal(v)).collect();
    format!("&[{}]", items.join(", "))
}

#[must_use]
pub fn route_key_literal(key: &RouteKey) -> String {
    format!(
        "RouteKey {{ method: {}, path: {} }}",
        rust_string_literal(key.method.as_str()),
        rust_string_literal(&key.path)
    )
}

/// Render a policy, naming only the fields that differ from `AuthPolicy::PUBLIC`.
#[must_use]
pub fn policy_literal(policy: &AuthPolicy) -> String {
    if policy.is_public() {
        return "AuthPolicy::PUBLIC".to_string();
    }

    let mut fields = vec!["require_auth: true".to_string()];
    if !policy.roles.is_empty() {
        fields.push(format!("roles: {}", slice_literal(&policy.roles)));
    }
    if !policy.scopes.is_empty() {
        fields.push(format!("scopes: {}", slice_literal(&policy.scopes)));
    }
    if fields.len() < 3 {
        fields.push("..AuthPolicy::PUBLIC".to_string());
    }
    format!("AuthPolicy {{ {} }}", fields.join(", "))
}
