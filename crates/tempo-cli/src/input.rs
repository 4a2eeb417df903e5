//! Argument resolution for `tempo call`.
//!
//! Supports three sources:
//! - Inline JSON object via `--args` / `-a`
//! - JSON file via `--args-file` / `-f`
//! - Stdin via `--args-file -`
//!
//! Supplying neither yields `None`, which the dispatcher rejects as
//! missing arguments.

use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

/// Resolves the `arguments` object for a call.
///
/// Priority: `args_file` takes precedence over `args`.
/// If `args_file` is `Some("-")`, reads from stdin.
pub fn resolve_arguments(
    args: Option<&str>,
    args_file: Option<&str>,
) -> anyhow::Result<Option<Map<String, Value>>> {
    let raw = match (args_file, args) {
        (Some("-"), _) => read_from_stdin()?,
        (Some(path), _) => read_from_file(path)?,
        (None, Some(inline)) => inline.trim().to_string(),
        (None, None) => return Ok(None),
    };
    parse_object(&raw).map(Some)
}

/// Reads JSON content from a file path.
fn read_from_file(path: &str) -> anyhow::Result<String> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("arguments file not found: {path}");
    }
    let content = std::fs::read_to_string(file_path)
        .map_err(|e| anyhow::anyhow!("failed to read arguments file: {e}"))?;
    Ok(content.trim().to_string())
}

/// Reads JSON content from stdin.
fn read_from_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
    Ok(buffer.trim().to_string())
}

/// Parses the input as a JSON object.
fn parse_object(input: &str) -> anyhow::Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => anyhow::bail!("arguments must be a JSON object, got: {other}"),
        Err(e) => anyhow::bail!("invalid JSON arguments: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_source_means_no_arguments() {
        let result = resolve_arguments(None, None).expect("resolve");
        assert!(result.is_none());
    }

    #[test]
    fn resolve_inline_object() {
        let result = resolve_arguments(Some("{\"key\":\"value\"}"), None).expect("resolve");
        let map = result.expect("some");
        assert_eq!(map["key"], "value");
    }

    #[test]
    fn resolve_inline_empty_object() {
        let result = resolve_arguments(Some(" {} "), None).expect("resolve");
        assert!(result.expect("some").is_empty());
    }

    #[test]
    fn non_object_rejected() {
        let err = resolve_arguments(Some("[1,2]"), None).expect_err("array");
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn resolve_from_file_takes_precedence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file_path = dir.path().join("args.json");
        std::fs::write(&file_path, "  {\"hello\": \"world\"}  \n").expect("write");

        let result = resolve_arguments(Some("{}"), Some(file_path.to_str().expect("utf8")))
            .expect("resolve");
        assert_eq!(result.expect("some")["hello"], "world");
    }

    #[test]
    fn resolve_file_not_found() {
        let err = resolve_arguments(None, Some("/nonexistent/args.json")).expect_err("missing");
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn resolve_invalid_json_in_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file_path = dir.path().join("bad.json");
        std::fs::write(&file_path, "not valid json").expect("write");

        let err = resolve_arguments(None, Some(file_path.to_str().expect("utf8")))
            .expect_err("invalid");
        assert!(err.to_string().contains("invalid JSON"));
    }
}
