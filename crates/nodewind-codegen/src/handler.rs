//! The `generate` event: selection in, display-ready results out.

use crate::converter::NodeConverter;
use crate::generators::MarkupGenerator;
use crate::provider::DefinitionProvider;
use nodewind_core::VisualNode;
use serde::Serialize;

/// Shown when the host sends no node.
pub const NO_SELECTION_MESSAGE: &str = "Please select a node.";

/// Title of a successful result.
pub const TSX_TITLE: &str = "React Native TSX";

/// Title of a diagnostic result.
pub const ERROR_TITLE: &str = "Error";

/// Syntax-highlighting language of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    Typescript,
}

/// One panel of output for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodegenResult {
    pub title: String,
    pub code: String,
    pub language: Language,
}

impl CodegenResult {
    pub fn typescript(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            language: Language::Typescript,
        }
    }

    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE
    }
}

/// Convert and render the selection, turning every failure into a result.
pub async fn handle_generate<P, G>(
    selection: Option<&VisualNode>,
    converter: &NodeConverter<P>,
    generator: &G,
) -> Vec<CodegenResult>
where
    P: DefinitionProvider,
    G: MarkupGenerator + ?Sized,
{
    let Some(root) = selection else {
        return vec![CodegenResult::typescript(ERROR_TITLE, NO_SELECTION_MESSAGE)];
    };

    match converter.convert_node(root).await {
        Ok(tree) => vec![CodegenResult::typescript(TSX_TITLE, generator.generate(&tree))],
        Err(e) => {
            log::error!(target: "nodewind::generate", "Codegen error: {e}");
            vec![CodegenResult::typescript(ERROR_TITLE, e.to_string())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleConfig;
    use crate::generators::TsxGenerator;
    use crate::provider::NoDefinitions;
    use futures::executor::block_on;
    use nodewind_core::VisualKind;

    fn converter() -> NodeConverter<NoDefinitions> {
        NodeConverter::new(StyleConfig::default(), NoDefinitions).unwrap()
    }

    #[test]
    fn test_no_selection() {
        let results = block_on(handle_generate(None, &converter(), &TsxGenerator::new()));
        assert_eq!(results, vec![CodegenResult::typescript("Error", NO_SELECTION_MESSAGE)]);
        assert!(results[0].is_error());
    }

    #[test]
    fn test_success() {
        let node = VisualNode::text("Hi");
        let results = block_on(handle_generate(Some(&node), &converter(), &TsxGenerator::new()));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "React Native TSX");
        assert_eq!(results[0].code, r#"<Text className="text-base font-normal text-left">Hi</Text>"#);
    }

    #[test]
    fn test_failure_becomes_error_result() {
        let node = VisualNode::new(VisualKind::from_tag("ELLIPSE"), "Dot");
        let results = block_on(handle_generate(Some(&node), &converter(), &TsxGenerator::new()));

        assert!(results[0].is_error());
        assert_eq!(results[0].code, "Unsupported node type: ELLIPSE ('Dot')");
    }

    #[test]
    fn test_result_serializes_for_host() {
        let json = serde_json::to_value(CodegenResult::typescript("T", "x")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "T", "code": "x", "language": "TYPESCRIPT"}));
    }
}
