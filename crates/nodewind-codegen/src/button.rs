//! Interactive component markup.
//!
//! Components named `Button/<Variant>/<Size>` become a design-system
//! element (`<RoundedButton size="small">`); any other interactive name
//! falls back to a generic touchable template. Both wrap the first text
//! found among the converted children.

use crate::config::StyleConfig;
use crate::error::Result;
use crate::templates::{TemplateEngine, INTERACTIVE_DEFAULT, VARIANT_BUTTON};
use nodewind_core::MarkupNode;
use serde_json::json;

/// The variant and size segments of a `Button/<Variant>/<Size>` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonShape<'a> {
    pub variant: &'a str,
    pub size: &'a str,
}

impl<'a> ButtonShape<'a> {
    /// Parse a component name; exactly three segments with the keyword first.
    pub fn parse(name: &'a str, keyword: &str, separator: &str) -> Option<Self> {
        let mut parts = name.split(separator);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(variant), Some(size), None) if first == keyword => {
                Some(Self { variant, size })
            }
            _ => None,
        }
    }
}

/// Pre-rendered markup for an interactive component.
pub fn interactive_markup(
    engine: &TemplateEngine<'_>,
    config: &StyleConfig,
    name: &str,
    children: &[MarkupNode],
) -> Result<String> {
    let text = MarkupNode::first_text(children).unwrap_or("");

    match ButtonShape::parse(name, &config.button_keyword, &config.name_separator) {
        Some(shape) => engine.render(
            VARIANT_BUTTON,
            &json!({ "variant": shape.variant, "size": shape.size, "text": text }),
        ),
        None => engine.render(INTERACTIVE_DEFAULT, &json!({ "text": text })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodewind_core::MarkupKind;

    fn engine() -> TemplateEngine<'static> {
        TemplateEngine::with_templates(&StyleConfig::default().templates).unwrap()
    }

    #[test]
    fn test_parse_three_segments() {
        assert_eq!(
            ButtonShape::parse("Button/Rounded/Small", "Button", "/"),
            Some(ButtonShape { variant: "Rounded", size: "Small" })
        );
        assert_eq!(ButtonShape::parse("Button/Rounded", "Button", "/"), None);
        assert_eq!(ButtonShape::parse("Button/Rounded/Small/Extra", "Button", "/"), None);
        assert_eq!(ButtonShape::parse("button/Rounded/Small", "Button", "/"), None);
    }

    #[test]
    fn test_variant_button_markup() {
        let children = vec![MarkupNode::text(MarkupKind::Text, "Go")];
        let markup =
            interactive_markup(&engine(), &StyleConfig::default(), "Button/Rounded/Small", &children).unwrap();
        assert_eq!(markup, r#"<RoundedButton size="small">Go</RoundedButton>"#);
    }

    #[test]
    fn test_variant_is_title_cased() {
        let children = vec![MarkupNode::text(MarkupKind::Text, "Go")];
        let config = StyleConfig::default();

        let markup = interactive_markup(&engine(), &config, "Button/primaryAlt/Small", &children).unwrap();
        assert_eq!(markup, r#"<PrimaryaltButton size="small">Go</PrimaryaltButton>"#);

        let markup = interactive_markup(&engine(), &config, "Button/OUTLINE_dark/Small", &children).unwrap();
        assert_eq!(markup, r#"<Outline_darkButton size="small">Go</Outline_darkButton>"#);
    }

    #[test]
    fn test_two_segments_fall_back_to_default() {
        let children = vec![MarkupNode::container(
            MarkupKind::Container,
            vec![MarkupNode::text(MarkupKind::Text, "Go")],
        )];
        let markup =
            interactive_markup(&engine(), &StyleConfig::default(), "Button/Rounded", &children).unwrap();

        assert!(markup.starts_with("<TouchableOpacity className=\"items-center justify-center"));
        assert!(markup.contains(r#"<Text className="text-white text-base font-medium">Go</Text>"#));
        assert!(markup.ends_with("</TouchableOpacity>"));
    }

    #[test]
    fn test_no_text_yields_empty_content() {
        let markup = interactive_markup(&engine(), &StyleConfig::default(), "Button/Ghost/Large", &[]).unwrap();
        assert_eq!(markup, r#"<GhostButton size="large"></GhostButton>"#);
    }
}
