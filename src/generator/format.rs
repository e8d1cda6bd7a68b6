use crate::error::AuthzError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Environment variable that overrides the `rustfmt` binary.
pub const RUSTFMT_ENV: &str = "OPENAPI_AUTHZ_RUSTFMT";

/// Format generated source with `rustfmt` (or the binary named by
/// [`RUSTFMT_ENV`]).
pub fn format_source(source: &str) -> Result<String, AuthzError> {
    let program = std::env::var(RUSTFMT_ENV).unwrap_or_else(|_| "rustfmt".to_string());
    format_source_with(&program, source)
}

/// Pipe `source` through `program --edition 2021` and return its stdout.
pub fn format_source_with(program: &str, source: &str) -> Result<String, AuthzError> {
    let fail = |source: crate::error::BoxError| AuthzError::Format {
        program: program.to_string(),
        source,
    };

    let mut child = Command::new(program)
        .args(["--edition", "2021"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| fail(e.into()))?;

    // Feed stdin from a separate thread so a full stdout pipe cannot deadlock us.
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| fail("formatter stdin was not captured".into()))?;
    let input = source.to_string();
    let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

    let output = child.wait_with_output().map_err(|e| fail(e.into()))?;
    writer
        .join()
        .map_err(|_| fail("formatter stdin writer panicked".into()))?
        .map_err(|e| fail(e.into()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(fail(
            format!("exited with {}: {}", output.status, stderr.trim()).into(),
        ));
    }
    String::from_utf8(output.stdout).map_err(|e| fail(e.into()))
}
