#![allow(dead_code)]

pub mod temp_files {
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// A spec file inside its own temporary directory.
    ///
    /// The directory is removed when this value drops, so keep it alive for
    /// as long as the path is in use.
    pub struct TempSpec {
        pub dir: TempDir,
        pub path: PathBuf,
    }

    impl TempSpec {
        /// Path of a sibling file in the same directory.
        pub fn sibling(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }
    }

    /// Write `content` to `openapi.<ext>` in a fresh temporary directory.
    pub fn create_temp_spec(content: &str, ext: &str) -> TempSpec {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("openapi.{ext}"));
        std::fs::write(&path, content).unwrap();
        TempSpec { dir, path }
    }

    pub fn create_temp_yaml(content: &str) -> TempSpec {
        create_temp_spec(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> TempSpec {
        create_temp_spec(content, "json")
    }
}

pub mod specs {
    /// Root requires a bearer token; one public, one inherited, one role and
    /// one scope route.
    pub const BASIC_YAML: &str = r#"
openapi: 3.0.3
info:
  title: Vegetable Store
  version: 1.0.0
security:
  - BearerAuth: []
components:
  securitySchemes:
    BearerAuth:
      type: http
      scheme: bearer
paths:
  /public:
    get:
      security: []
      responses:
        "200":
          description: ok
  /user:
    get:
      responses:
        "200":
          description: ok
  /admin:
    delete:
      security:
        - BearerAuth: ["role:admin"]
      responses:
        "204":
          description: deleted
  /scoped:
    post:
      security:
        - BearerAuth: ["vegetable:write"]
      responses:
        "201":
          description: created
"#;
}
