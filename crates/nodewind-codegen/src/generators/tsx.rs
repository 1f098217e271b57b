//! React Native TSX serializer.

use super::MarkupGenerator;
use nodewind_core::{AttributeValue, MarkupNode};
use serde::{Deserialize, Serialize};

/// Indentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Spaces per depth level. Ignored when indenting with tabs.
    pub indent_size: usize,
    /// Indent with spaces; otherwise one tab per depth level.
    pub use_spaces: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            use_spaces: true,
        }
    }
}

/// Renders markup nodes as JSX elements with a `className` attribute.
#[derive(Debug, Clone, Default)]
pub struct TsxGenerator {
    options: GeneratorOptions,
}

impl TsxGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    fn indent(&self, depth: usize) -> String {
        if self.options.use_spaces {
            " ".repeat(depth * self.options.indent_size)
        } else {
            "\t".repeat(depth)
        }
    }

    /// ` key="value" ...` with the class attribute last.
    fn attributes(&self, node: &MarkupNode) -> String {
        let mut out = String::new();
        for (key, value) in &node.attributes {
            out.push(' ');
            out.push_str(&format_attribute(key, value));
        }
        if let Some(class) = &node.style_class {
            out.push_str(&format!(" className=\"{}\"", class));
        }
        out
    }
}

/// Format one attribute in JSX syntax.
pub fn format_attribute(key: &str, value: &AttributeValue) -> String {
    match value {
        AttributeValue::String(s) => format!("{}=\"{}\"", key, s),
        AttributeValue::Number(n) => format!("{}={{{}}}", key, n),
        AttributeValue::Boolean(true) => key.to_string(),
        AttributeValue::Boolean(false) => format!("{}={{false}}", key),
        AttributeValue::Expression(expr) => format!("{}={{{}}}", key, expr),
        AttributeValue::Json(json) => format!("{}={{{}}}", key, json),
    }
}

impl MarkupGenerator for TsxGenerator {
    fn framework_name(&self) -> &'static str {
        "React Native"
    }

    fn render(&self, node: &MarkupNode, depth: usize) -> String {
        let spaces = self.indent(depth);

        if let Some(markup) = node.literal_markup.as_deref().filter(|m| !m.is_empty()) {
            return markup
                .lines()
                .map(|line| if line.is_empty() { String::new() } else { format!("{}{}", spaces, line) })
                .collect::<Vec<_>>()
                .join("\n");
        }

        let tag = node.kind.tag();
        let attrs = self.attributes(node);

        if let Some(statement) = node.auxiliary_statement.as_deref().filter(|s| !s.is_empty()) {
            return format!("{spaces}{statement}\n{spaces}<{tag}{attrs} />");
        }

        if !node.children.is_empty() {
            let mut lines = vec![format!("{spaces}<{tag}{attrs}>")];
            for child in &node.children {
                lines.push(self.render(child, depth + 1));
            }
            lines.push(format!("{spaces}</{tag}>"));
            return lines.join("\n");
        }

        match node.text_content() {
            Some(text) => format!("{spaces}<{tag}{attrs}>{text}</{tag}>"),
            None => format!("{spaces}<{tag}{attrs} />"),
        }
    }
}
