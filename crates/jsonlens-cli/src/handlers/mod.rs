pub mod config;
pub mod find;
pub mod rules;
pub mod view;

use anyhow::{bail, Context as _, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read the document text from a file or stdin.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Parse the document, after a cheap shape check: the text must start with
/// `{` or `[` before we pay for a full parse.
pub(crate) fn parse_document(input: &str) -> Result<Value> {
    let trimmed = input.trim();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        bail!("input does not look like a JSON document");
    }
    Ok(serde_json::from_str(trimmed)?)
}
