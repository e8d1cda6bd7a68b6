// Code generated by openapi-authz. DO NOT EDIT.

pub mod httproutes {
    /// Identifies one operation by HTTP method and templated path.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct RouteKey {
        pub method: &'static str,
        pub path: &'static str,
    }

    /// Authorization requirements for one operation.
    ///
    /// A caller needs any one of `roles` (when non-empty) and all of `scopes`
    /// (when non-empty).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AuthPolicy {
        pub require_auth: bool,
        pub roles: &'static [&'static str],
        pub scopes: &'static [&'static str],
    }

    impl AuthPolicy {
        /// No credential, role or scope required.
        pub const PUBLIC: AuthPolicy = AuthPolicy {
            require_auth: false,
            roles: &[],
            scopes: &[],
        };
    }

    /// Policies for every operation, sorted by method, then path.
    pub static POLICIES: &[(RouteKey, AuthPolicy)] = &[
        (
            RouteKey { method: "DELETE", path: "/admin" },
            AuthPolicy { require_auth: true, roles: &["admin"], ..AuthPolicy::PUBLIC },
        ),
        (
            RouteKey { method: "GET", path: "/public" },
            AuthPolicy::PUBLIC,
        ),
        (
            RouteKey { method: "GET", path: "/user" },
            AuthPolicy { require_auth: true, ..AuthPolicy::PUBLIC },
        ),
        (
            RouteKey { method: "POST", path: "/scoped" },
            AuthPolicy { require_auth: true, scopes: &["vegetable:write"], ..AuthPolicy::PUBLIC },
        ),
    ];
}
