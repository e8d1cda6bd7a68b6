use super::document::{Document, SecurityRequirement};
use super::types::{AuthPolicy, Config, RouteKey};
use crate::config::ResolverConfig;
use crate::error::AuthzError;
use std::collections::HashMap;
use tracing::debug;

/// The effective security list declares requirements, but none of them
/// mentions the bearer scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingBearerScheme;

/// Derive the policy for one operation.
///
/// `operation` is the operation's own `security` list and overrides `root`
/// whenever it is present, even when empty. An absent or empty effective list
/// makes the operation public. Otherwise the first occurrence of the bearer
/// scheme (requirement objects in order, schemes within an object in order)
/// decides the policy; later requirement objects and other schemes are not
/// consulted.
///
/// # Errors
///
/// Returns [`MissingBearerScheme`] when the effective list is non-empty but
/// no requirement object names the bearer scheme.
pub fn derive_policy(
    root: Option<&[SecurityRequirement]>,
    operation: Option<&[SecurityRequirement]>,
    config: &ResolverConfig,
) -> Result<AuthPolicy, MissingBearerScheme> {
    let requirements = match operation.or(root) {
        Some(reqs) if !reqs.is_empty() => reqs,
        _ => return Ok(AuthPolicy::public()),
    };

    let tokens = requirements
        .iter()
        .find_map(|req| req.tokens_for(&config.bearer_scheme))
        .ok_or(MissingBearerScheme)?;

    Ok(classify_tokens(tokens, &config.role_prefix))
}

/// Split bearer tokens into roles (prefix stripped) and scopes (verbatim).
///
/// A token consisting of the bare prefix carries no role name and is kept as
/// a scope.
#[must_use]
pub fn classify_tokens(tokens: &[String], role_prefix: &str) -> AuthPolicy {
    let mut policy = AuthPolicy::authenticated();
    for token in tokens {
        match token.strip_prefix(role_prefix) {
            Some(role) if !role.is_empty() => policy.roles.push(role.to_string()),
            _ => policy.scopes.push(token.clone()),
        }
    }
    policy
}

/// Resolve every operation of a parsed document.
///
/// All operations whose security lacks the bearer scheme are collected and
/// reported together; no `Config` is produced in that case.
pub fn build_config(document: &Document, config: &ResolverConfig) -> Result<Config, AuthzError> {
    config.validate()?;

    let root = document.security.as_deref();
    let mut policies = HashMap::new();
    let mut unprotected = Vec::new();

    for (path, item) in document.paths.iter().flatten() {
        let Some(item) = item else {
            continue;
        };
        for (method, operation) in item.operations() {
            let key = RouteKey::new(method, path.as_str());
            match derive_policy(root, operation.security.as_deref(), config) {
                Ok(policy) => {
                    debug!(
                        route = %key,
                        require_auth = policy.require_auth,
                        roles = ?policy.roles,
                        scopes = ?policy.scopes,
                        "Resolved policy"
                    );
                    policies.insert(key, policy);
                }
                Err(MissingBearerScheme) => unprotected.push(key),
            }
        }
    }

    if !unprotected.is_empty() {
        unprotected.sort();
        return Err(AuthzError::MissingBearerScheme {
            scheme: config.bearer_scheme.clone(),
            routes: unprotected,
        });
    }

    Ok(Config { policies })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(entries: &[(&str, &[&str])]) -> SecurityRequirement {
        SecurityRequirement(
            entries
                .iter()
                .map(|(scheme, tokens)| {
                    (
                        scheme.to_string(),
                        tokens.iter().map(|t| t.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_absent_everywhere_is_public() {
        let policy = derive_policy(None, None, &ResolverConfig::default()).unwrap();
        assert_eq!(policy, AuthPolicy::public());
    }

    #[test]
    fn test_empty_operation_list_overrides_root() {
        let root = vec![req(&[("BearerAuth", &["role:admin"])])];
        let policy = derive_policy(
            Some(root.as_slice()),
            Some(&[][..]),
            &ResolverConfig::default(),
        )
        .unwrap();
        assert!(policy.is_public());
    }

    #[test]
    fn test_empty_root_list_is_public() {
        let policy = derive_policy(Some(&[][..]), None, &ResolverConfig::default()).unwrap();
        assert!(policy.is_public());
    }

    #[test]
    fn test_operation_list_overrides_root() {
        let root = vec![req(&[("BearerAuth", &["role:admin"])])];
        let op = vec![req(&[("BearerAuth", &["items:read"])])];
        let policy = derive_policy(
            Some(root.as_slice()),
            Some(op.as_slice()),
            &ResolverConfig::default(),
        )
        .unwrap();
        assert!(policy.require_auth);
        assert!(policy.roles.is_empty());
        assert_eq!(policy.scopes, strings(&["items:read"]));
    }

    #[test]
    fn test_root_list_is_inherited() {
        let root = vec![req(&[("BearerAuth", &[])])];
        let policy =
            derive_policy(Some(root.as_slice()), None, &ResolverConfig::default()).unwrap();
        assert_eq!(policy, AuthPolicy::authenticated());
    }

    #[test]
    fn test_roles_and_scopes_keep_token_order() {
        let op = vec![req(&[(
            "BearerAuth",
            &["role:admin", "vegetable:write", "role:ops", "vegetable:read", "role:admin"],
        )])];
        let policy =
            derive_policy(None, Some(op.as_slice()), &ResolverConfig::default()).unwrap();
        assert_eq!(policy.roles, strings(&["admin", "ops", "admin"]));
        assert_eq!(policy.scopes, strings(&["vegetable:write", "vegetable:read"]));
    }

    #[test]
    fn test_bare_role_prefix_is_a_scope() {
        let policy = classify_tokens(&strings(&["role:", "role:x"]), "role:");
        assert_eq!(policy.roles, strings(&["x"]));
        assert_eq!(policy.scopes, strings(&["role:"]));
    }

    #[test]
    fn test_first_bearer_requirement_wins() {
        let op = vec![
            req(&[("ApiKey", &[])]),
            req(&[("Basic", &[]), ("BearerAuth", &["role:first"])]),
            req(&[("BearerAuth", &["role:second"])]),
        ];
        let policy =
            derive_policy(None, Some(op.as_slice()), &ResolverConfig::default()).unwrap();
        assert_eq!(policy.roles, strings(&["first"]));

        let repeated = vec![req(&[
            ("BearerAuth", &["role:first"]),
            ("BearerAuth", &["role:second"]),
        ])];
        let policy =
            derive_policy(None, Some(repeated.as_slice()), &ResolverConfig::default()).unwrap();
        assert_eq!(policy.roles, strings(&["first"]));
    }

    #[test]
    fn test_non_bearer_only_is_an_error() {
        let op = vec![req(&[("ApiKey", &["role:admin"])])];
        assert_eq!(
            derive_policy(None, Some(op.as_slice()), &ResolverConfig::default()),
            Err(MissingBearerScheme)
        );
    }

    #[test]
    fn test_custom_scheme_and_prefix() {
        let config = ResolverConfig {
            bearer_scheme: "Jwt".to_string(),
            role_prefix: "group/".to_string(),
        };
        let op = vec![req(&[
            ("BearerAuth", &["role:admin"]),
            ("Jwt", &["group/ops", "role:admin"]),
        ])];
        let policy = derive_policy(None, Some(op.as_slice()), &config).unwrap();
        assert_eq!(policy.roles, strings(&["ops"]));
        assert_eq!(policy.scopes, strings(&["role:admin"]));
    }
}
