//! Flattening token documents into token lists.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, WeaverError};
use crate::tokens::{FlatToken, Node, SourceRole};

/// Flatten a parsed token document into a list of tokens, in document order.
///
/// Top-level and nested keys starting with `$` are manifest/metadata entries
/// (`$themes`, `$metadata`, ...) and never produce tokens.
pub fn flatten_document(
    doc: &Map<String, Value>,
    role: SourceRole,
    origin: &Path,
) -> Result<Vec<FlatToken>> {
    let mut out = Vec::new();

    for (key, value) in doc {
        if key.starts_with('$') {
            continue;
        }

        let node: Node = serde_json::from_value(value.clone()).map_err(|e| WeaverError::Parse {
            message: format!("{}: invalid token group `{}`: {}", origin.display(), key, e),
            help: Some("Token leaves are objects with a `value` key".to_string()),
        })?;

        let mut path = vec![key.clone()];
        walk(&node, &mut path, role, &mut out);
    }

    Ok(out)
}

fn walk(node: &Node, path: &mut Vec<String>, role: SourceRole, out: &mut Vec<FlatToken>) {
    match node {
        Node::Token(def) => out.push(FlatToken {
            path: path.clone(),
            value: def.value.clone(),
            kind: def.kind,
            role,
        }),
        Node::Group(children) => {
            for (key, child) in children {
                if key.starts_with('$') {
                    continue;
                }
                path.push(key.clone());
                walk(child, path, role, out);
                path.pop();
            }
        }
    }
}
