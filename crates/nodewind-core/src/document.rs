//! JSON snapshot of a host selection.

use crate::errors::{DocumentError, Result};
use crate::node::{VisualKind, VisualNode};
use indexmap::IndexMap;
use serde::Deserialize;

/// A selected node plus the names of the component definitions its
/// instances refer to.
///
/// ```json
/// {
///   "node": { "type": "INSTANCE", "mainComponentId": "7:1", "children": [] },
///   "components": { "7:1": "Button/Rounded/Small" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionDocument {
    /// `None` when nothing is selected.
    #[serde(default)]
    pub node: Option<VisualNode>,
    /// Definition id to definition name.
    #[serde(default)]
    pub components: IndexMap<String, String>,
}

impl SelectionDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: SelectionDocument = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Detached instances (no `mainComponentId`) are allowed; an empty id is not.
    pub fn validate(&self) -> Result<()> {
        fn check(node: &VisualNode) -> Result<()> {
            if node.kind == VisualKind::Instance && node.main_component_id.as_deref() == Some("") {
                return Err(DocumentError::InvalidDocument(format!(
                    "instance '{}' has an empty mainComponentId",
                    node.name
                )));
            }
            node.children.iter().try_for_each(check)
        }

        match &self.node {
            Some(node) => check(node),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let doc = SelectionDocument::from_json(
            r#"{
                "node": {"type": "INSTANCE", "mainComponentId": "7:1"},
                "components": {"7:1": "Button/Rounded/Small"}
            }"#,
        )
        .unwrap();

        assert!(doc.node.is_some());
        assert_eq!(doc.components.get("7:1").map(String::as_str), Some("Button/Rounded/Small"));
    }

    #[test]
    fn test_empty_selection() {
        let doc = SelectionDocument::from_json("{}").unwrap();
        assert!(doc.node.is_none());
    }

    #[test]
    fn test_detached_instance_accepted() {
        let doc = SelectionDocument::from_json(r#"{"node": {"type": "INSTANCE", "name": "x"}}"#).unwrap();
        assert!(doc.node.is_some_and(|n| n.main_component_id.is_none()));
    }

    #[test]
    fn test_empty_definition_id_rejected() {
        let err = SelectionDocument::from_json(
            r#"{"node": {"type": "FRAME", "children": [{"type": "INSTANCE", "name": "x", "mainComponentId": ""}]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DocumentError::InvalidDocument(_)));
    }

    #[test]
    fn test_invalid_json() {
        let err = SelectionDocument::from_json("{").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }
}
