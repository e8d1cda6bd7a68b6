//! Minimal view of an OpenAPI v3 document: root `security` and the
//! operations under `paths`. Every other field is ignored.
//!
//! `security` is kept as `Option<Vec<_>>` throughout because an absent list
//! (inherit from the root) and an empty list (explicitly public) resolve
//! differently.

use http::Method;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

/// One security requirement object: scheme name -> role/scope tokens, in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRequirement(pub Vec<(String, Vec<String>)>);

impl SecurityRequirement {
    /// Tokens listed for the first occurrence of `scheme` in this object.
    #[must_use]
    pub fn tokens_for(&self, scheme: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == scheme)
            .map(|(_, tokens)| tokens.as_slice())
    }

    #[must_use]
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl<'de> Deserialize<'de> for SecurityRequirement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RequirementVisitor;

        impl<'de> Visitor<'de> for RequirementVisitor {
            type Value = SecurityRequirement;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of security scheme names to lists of scopes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some((scheme, tokens)) =
                    map.next_entry::<String, Option<Vec<String>>>()?
                {
                    entries.push((scheme, tokens.unwrap_or_default()));
                }
                Ok(SecurityRequirement(entries))
            }
        }

        deserializer.deserialize_map(RequirementVisitor)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub security: Option<Vec<SecurityRequirement>>,
    #[serde(default)]
    pub paths: Option<BTreeMap<String, Option<PathItem>>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub get: Option<Operation>,
    #[serde(default)]
    pub post: Option<Operation>,
    #[serde(default)]
    pub put: Option<Operation>,
    #[serde(default)]
    pub delete: Option<Operation>,
    #[serde(default)]
    pub patch: Option<Operation>,
    #[serde(default)]
    pub options: Option<Operation>,
    #[serde(default)]
    pub head: Option<Operation>,
}

impl PathItem {
    /// Declared operations with their uppercase method.
    #[must_use]
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        [
            (Method::GET, self.get.as_ref()),
            (Method::POST, self.post.as_ref()),
            (Method::PUT, self.put.as_ref()),
            (Method::DELETE, self.delete.as_ref()),
            (Method::PATCH, self.patch.as_ref()),
            (Method::OPTIONS, self.options.as_ref()),
            (Method::HEAD, self.head.as_ref()),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.map(|op| (method, op)))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub security: Option<Vec<SecurityRequirement>>,
}
