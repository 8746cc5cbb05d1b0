//! Core logic of the `avl-tree` binary.
//!
//! The binary reads a JSON array of numeric keys from stdin, inserts them
//! into an [`AvlTree<f64>`], optionally deletes a second list, and prints a
//! report of the resulting tree.

use std::fmt::Write;

use serde_json::Value;

use crate::config::TreeConfig;
use crate::error::{AvlError, Result};
use crate::tree::AvlTree;

pub const USAGE: &str = "usage: avl-tree [--policy ignore|update|count] [--delete '<json array>']";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliOptions {
    pub config: TreeConfig,
    pub delete: Vec<Value>,
}

impl CliOptions {
    /// Parses the arguments following the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .map(|v| v.as_ref().to_string())
                    .ok_or_else(|| AvlError::InvalidInput(format!("{flag} expects a value")))
            };
            match arg.as_ref() {
                "--policy" => {
                    options.config.duplicate_policy = value("--policy")?.parse()?;
                }
                "--delete" => {
                    options.delete = parse_keys(&value("--delete")?)?;
                }
                other => {
                    return Err(AvlError::InvalidInput(format!(
                        "unexpected argument {other:?}\n{USAGE}"
                    )))
                }
            }
        }
        Ok(options)
    }
}

/// Parses a JSON array of keys. Elements are validated later, when they
/// reach the tree.
pub fn parse_keys(json: &str) -> Result<Vec<Value>> {
    match serde_json::from_str(json) {
        Ok(Value::Array(keys)) => Ok(keys),
        Ok(other) => Err(AvlError::InvalidInput(format!(
            "expected a JSON array of keys, got {other}"
        ))),
        Err(e) => Err(AvlError::InvalidInput(e.to_string())),
    }
}

/// Builds the tree described by `input` and `options` and renders a report.
///
/// Fails on the first invalid key.
pub fn run(input: &str, options: &CliOptions) -> Result<String> {
    let mut tree = AvlTree::<f64>::with_config(&options.config);
    let mut out = String::new();

    for key in parse_keys(input)? {
        let inserted = tree.insert_value(&key)?;
        let status = if inserted { "inserted" } else { "duplicate" };
        let _ = writeln!(out, "insert {key}: {status}");
    }
    for key in &options.delete {
        let removed = tree.delete_value(key)?;
        let status = if removed { "removed" } else { "not found" };
        let _ = writeln!(out, "delete {key}: {status}");
    }

    let _ = writeln!(out, "policy: {}", tree.policy());
    let _ = writeln!(out, "size: {}", tree.size());
    let _ = writeln!(out, "height: {}", tree.get_height());
    let _ = writeln!(out, "balanced: {}", tree.is_balanced());
    if let (Ok(min), Ok(max)) = (tree.get_min(), tree.get_max()) {
        let _ = writeln!(out, "min: {min}");
        let _ = writeln!(out, "max: {max}");
    }
    let _ = writeln!(out, "in-order: {}", join(&tree.inorder_traversal()));
    let _ = writeln!(out, "pre-order: {}", join(&tree.preorder_traversal()));
    let _ = writeln!(out, "post-order: {}", join(&tree.postorder_traversal()));
    out.push_str(&tree.print());
    Ok(out)
}

fn join(keys: &[f64]) -> String {
    let parts: Vec<String> = keys.iter().map(f64::to_string).collect();
    format!("[{}]", parts.join(", "))
}
