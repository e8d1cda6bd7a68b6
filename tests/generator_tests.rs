#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::Method;
use openapi_authz::generator::{check_up_to_date, generate, write_atomic};
use openapi_authz::spec::load_config;
use openapi_authz::{AuthPolicy, AuthzError, Config, ResolverConfig, RouteKey};

mod common;
use common::specs::BASIC_YAML;
use common::temp_files::create_temp_yaml;

const GOLDEN: &str = include_str!("fixtures/basic_policies.rs");

/// Drop blank lines and trailing whitespace so template whitespace control
/// does not make the comparison brittle.
fn normalize(source: &str) -> String {
    source
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn basic_config() -> Config {
    let spec = create_temp_yaml(BASIC_YAML);
    load_config(&spec.path, &ResolverConfig::default()).unwrap()
}

#[test]
fn test_generated_module_matches_golden_file() {
    let source = generate("httproutes", &basic_config()).unwrap();
    assert_eq!(normalize(&source), normalize(GOLDEN));
    assert!(source.ends_with('\n'));
}

#[test]
fn test_output_is_independent_of_insertion_order() {
    let entries = vec![
        (RouteKey::new(Method::GET, "/b"), AuthPolicy::public()),
        (
            RouteKey::new(Method::POST, "/a"),
            AuthPolicy {
                require_auth: true,
                roles: vec!["admin".to_string()],
                scopes: vec!["a:write".to_string()],
            },
        ),
        (RouteKey::new(Method::GET, "/a"), AuthPolicy::authenticated()),
        (RouteKey::new(Method::DELETE, "/z"), AuthPolicy::public()),
    ];

    let forward: Config = entries.clone().into_iter().collect();
    let reversed: Config = entries.into_iter().rev().collect();

    let first = generate("httproutes", &forward).unwrap();
    for _ in 0..5 {
        assert_eq!(generate("httproutes", &forward).unwrap(), first);
    }
    assert_eq!(generate("httproutes", &reversed).unwrap(), first);
}

#[test]
fn test_paths_with_quotes_are_escaped() {
    let config: Config = [(
        RouteKey::new(Method::GET, "/say/\"hi\"/{name}"),
        AuthPolicy::public(),
    )]
    .into_iter()
    .collect();
    let source = generate("httproutes", &config).unwrap();
    assert!(source.contains(r#"path: "/say/\"hi\"/{name}""#), "{source}");
}

#[test]
fn test_namespace_is_validated_before_rendering() {
    for bad in ["", "1routes", "http-routes", "fn", "_"] {
        let err = generate(bad, &basic_config()).unwrap_err();
        assert!(
            matches!(err, AuthzError::InvalidNamespace { .. }),
            "{bad:?}: {err}"
        );
    }
    let source = generate("api_v1", &basic_config()).unwrap();
    assert!(source.contains("pub mod api_v1 {"));
}

#[test]
fn test_write_then_check() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("httproutes.rs");
    let source = generate("httproutes", &basic_config()).unwrap();

    write_atomic(&output, &source).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), source);
    check_up_to_date(&output, &source).unwrap();

    let drifted = source.replace("role", "rol");
    let err = check_up_to_date(&output, &drifted).unwrap_err();
    assert!(matches!(err, AuthzError::Stale { .. }));
}
