//! Token tree types.
//!
//! A node is either a leaf token definition (any object carrying a `value`
//! key) or a group of named child nodes. Group order is preserved so that
//! generated output is stable across runs.

use indexmap::IndexMap;
use serde::Deserialize;

/// One node of a token tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Token(TokenDef),
    Group(IndexMap<String, Node>),
}

/// A leaf token definition.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenDef {
    pub value: serde_json::Value,
    #[serde(rename = "type", default)]
    pub kind: TokenKind,
    #[serde(default)]
    pub description: Option<String>,
}

/// Declared token kind. Unknown kinds are carried as `Other` so token files
/// may use kinds this tool has no special handling for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Color,
    Typography,
    Dimension,
    Spacing,
    BorderRadius,
    Opacity,
    #[serde(other)]
    #[default]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leaf_token() {
        let node: Node =
            serde_json::from_str(r##"{"value": "#ff0000", "type": "color"}"##).unwrap();

        match node {
            Node::Token(def) => {
                assert_eq!(def.kind, TokenKind::Color);
                assert_eq!(def.value, serde_json::json!("#ff0000"));
            }
            Node::Group(_) => panic!("expected a token leaf"),
        }
    }

    #[test]
    fn test_parse_group_preserves_order() {
        let node: Node = serde_json::from_str(
            r#"{
                "zeta": {"value": "1", "type": "dimension"},
                "alpha": {"value": "2", "type": "dimension"}
            }"#,
        )
        .unwrap();

        match node {
            Node::Group(children) => {
                let keys: Vec<&str> = children.keys().map(String::as_str).collect();
                assert_eq!(keys, ["zeta", "alpha"]);
            }
            Node::Token(_) => panic!("expected a group"),
        }
    }

    #[test]
    fn test_unknown_kind_falls_back_to_other() {
        let node: Node =
            serde_json::from_str(r#"{"value": "0.5", "type": "boxShadow"}"#).unwrap();

        match node {
            Node::Token(def) => assert_eq!(def.kind, TokenKind::Other),
            Node::Group(_) => panic!("expected a token leaf"),
        }
    }

    #[test]
    fn test_missing_kind_defaults_to_other() {
        let node: Node = serde_json::from_str(r#"{"value": "12px"}"#).unwrap();

        match node {
            Node::Token(def) => assert_eq!(def.kind, TokenKind::Other),
            Node::Group(_) => panic!("expected a token leaf"),
        }
    }
}
