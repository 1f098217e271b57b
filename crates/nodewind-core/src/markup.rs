//! Intermediate markup tree produced by classification.

use indexmap::IndexMap;
use serde::Serialize;

/// Output element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkupKind {
    Text,
    Container,
    Image,
    InteractiveContainer,
    /// Element whose markup was produced ahead of rendering.
    PreformattedMarkup,
}

impl MarkupKind {
    /// Element tag in the React Native dialect.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Container => "View",
            Self::Image => "Image",
            Self::InteractiveContainer => "TouchableOpacity",
            Self::PreformattedMarkup => "Fragment",
        }
    }
}

/// An attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Number(f64),
    Boolean(bool),
    /// A bare expression rendered inside braces (`source={icon}`).
    Expression(String),
    /// Any other structured value, rendered as JSON inside braces.
    Json(serde_json::Value),
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

/// A node of the intermediate markup tree.
///
/// Content is one of: literal markup (dominant), children, or text. A node
/// with none of them renders as a self-closing element. Nodes are built
/// once per conversion and own their subtree exclusively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupNode {
    pub kind: MarkupKind,
    pub attributes: IndexMap<String, AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MarkupNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal_markup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_statement: Option<String>,
}

impl MarkupNode {
    /// An empty, self-closing node.
    pub fn new(kind: MarkupKind) -> Self {
        Self {
            kind,
            attributes: IndexMap::new(),
            style_class: None,
            text: None,
            children: Vec::new(),
            literal_markup: None,
            auxiliary_statement: None,
        }
    }

    /// A text-bearing node.
    pub fn text(kind: MarkupKind, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(kind)
        }
    }

    /// A container node with the given children.
    pub fn container(kind: MarkupKind, children: Vec<MarkupNode>) -> Self {
        Self {
            children,
            ..Self::new(kind)
        }
    }

    /// A node whose rendering is the given markup verbatim.
    pub fn literal(markup: impl Into<String>) -> Self {
        Self {
            literal_markup: Some(markup.into()),
            ..Self::new(MarkupKind::PreformattedMarkup)
        }
    }

    pub fn with_style_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.style_class = (!class.is_empty()).then_some(class);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_auxiliary_statement(mut self, statement: impl Into<String>) -> Self {
        self.auxiliary_statement = Some(statement.into());
        self
    }

    /// Text content, treating an empty string as absent.
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// First text found depth-first: earliest sibling wins, descending into
    /// a child's own children when the child carries no text.
    pub fn first_text<'a>(nodes: &'a [MarkupNode]) -> Option<&'a str> {
        nodes.iter().find_map(|node| {
            node.text_content()
                .filter(|_| node.kind == MarkupKind::Text)
                .or_else(|| Self::first_text(&node.children))
        })
    }
}
