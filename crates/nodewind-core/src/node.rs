//! Visual nodes supplied by the design-tool host.
//!
//! A [`VisualNode`] mirrors the subset of a host scene node that the code
//! generator reads. Field names follow the host's camelCase JSON so a
//! selection can be snapshotted and deserialized without a mapping layer.

use crate::types::Paint;
use crate::value::FieldValue;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Node type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VisualKind {
    /// Text leaf.
    Text,
    /// Component instance; its name comes from the backing definition.
    Instance,
    /// Component definition.
    Component,
    /// Frame, possibly with auto-layout.
    Frame,
    /// Group, a frame without auto-layout.
    Group,
    /// Anything else (vectors, rectangles, sections, ...).
    Other(String),
}

impl VisualKind {
    /// Parse a host type tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "TEXT" => Self::Text,
            "INSTANCE" => Self::Instance,
            "COMPONENT" => Self::Component,
            "FRAME" => Self::Frame,
            "GROUP" => Self::Group,
            other => Self::Other(other.to_string()),
        }
    }

    /// The host type tag.
    pub fn tag(&self) -> &str {
        match self {
            Self::Text => "TEXT",
            Self::Instance => "INSTANCE",
            Self::Component => "COMPONENT",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for VisualKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for VisualKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|tag| VisualKind::from_tag(&tag))
    }
}

/// A node of the host's visual tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualNode {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VisualKind,
    #[serde(default)]
    pub name: String,

    // Geometry
    #[serde(default)]
    pub width: FieldValue,
    #[serde(default)]
    pub height: FieldValue,

    // Text
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub font_size: FieldValue,
    #[serde(default)]
    pub font_weight: FieldValue,
    #[serde(default)]
    pub text_align_horizontal: FieldValue,

    // Paint and shape
    #[serde(default, deserialize_with = "lenient_fills")]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub corner_radius: FieldValue,
    #[serde(default)]
    pub top_left_radius: FieldValue,
    #[serde(default)]
    pub top_right_radius: FieldValue,
    #[serde(default)]
    pub bottom_right_radius: FieldValue,
    #[serde(default)]
    pub bottom_left_radius: FieldValue,

    // Auto-layout
    #[serde(default)]
    pub layout_mode: FieldValue,
    #[serde(default)]
    pub primary_axis_align_items: FieldValue,
    #[serde(default)]
    pub counter_axis_align_items: FieldValue,
    #[serde(default)]
    pub item_spacing: FieldValue,
    #[serde(default)]
    pub padding_top: FieldValue,
    #[serde(default)]
    pub padding_right: FieldValue,
    #[serde(default)]
    pub padding_bottom: FieldValue,
    #[serde(default)]
    pub padding_left: FieldValue,

    /// Identifier of an instance's backing definition, when the host exposes it.
    #[serde(default)]
    pub main_component_id: Option<String>,

    #[serde(default)]
    pub children: Vec<VisualNode>,
}

/// A mixed or malformed fill list reads as no fills.
fn lenient_fills<'de, D>(deserializer: D) -> Result<Vec<Paint>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

impl VisualNode {
    /// Create an empty node of the given kind.
    pub fn new(kind: VisualKind, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            kind,
            name: name.into(),
            width: FieldValue::Missing,
            height: FieldValue::Missing,
            characters: None,
            font_size: FieldValue::Missing,
            font_weight: FieldValue::Missing,
            text_align_horizontal: FieldValue::Missing,
            fills: Vec::new(),
            corner_radius: FieldValue::Missing,
            top_left_radius: FieldValue::Missing,
            top_right_radius: FieldValue::Missing,
            bottom_right_radius: FieldValue::Missing,
            bottom_left_radius: FieldValue::Missing,
            layout_mode: FieldValue::Missing,
            primary_axis_align_items: FieldValue::Missing,
            counter_axis_align_items: FieldValue::Missing,
            item_spacing: FieldValue::Missing,
            padding_top: FieldValue::Missing,
            padding_right: FieldValue::Missing,
            padding_bottom: FieldValue::Missing,
            padding_left: FieldValue::Missing,
            main_component_id: None,
            children: Vec::new(),
        }
    }

    /// A text leaf with the given content.
    pub fn text(characters: impl Into<String>) -> Self {
        let characters = characters.into();
        let mut node = Self::new(VisualKind::Text, characters.clone());
        node.characters = Some(characters);
        node
    }

    /// A component instance backed by the definition `main_component_id`.
    pub fn instance(name: impl Into<String>, main_component_id: impl Into<String>) -> Self {
        let mut node = Self::new(VisualKind::Instance, name);
        node.main_component_id = Some(main_component_id.into());
        node
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::new(VisualKind::Component, name)
    }

    pub fn frame(name: impl Into<String>) -> Self {
        Self::new(VisualKind::Frame, name)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_size(mut self, width: impl Into<FieldValue>, height: impl Into<FieldValue>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn with_font(mut self, size: impl Into<FieldValue>, weight: impl Into<FieldValue>) -> Self {
        self.font_size = size.into();
        self.font_weight = weight.into();
        self
    }

    pub fn with_text_align(mut self, align: impl Into<FieldValue>) -> Self {
        self.text_align_horizontal = align.into();
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_corner_radius(mut self, radius: impl Into<FieldValue>) -> Self {
        self.corner_radius = radius.into();
        self
    }

    /// Enable auto-layout in the given direction (`HORIZONTAL` or `VERTICAL`).
    pub fn with_layout(mut self, mode: &str, spacing: f64) -> Self {
        self.layout_mode = mode.into();
        self.item_spacing = spacing.into();
        self
    }

    pub fn with_alignment(mut self, primary: &str, counter: &str) -> Self {
        self.primary_axis_align_items = primary.into();
        self.counter_axis_align_items = counter.into();
        self
    }

    /// Set padding as top, right, bottom, left.
    pub fn with_padding(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.padding_top = top.into();
        self.padding_right = right.into();
        self.padding_bottom = bottom.into();
        self.padding_left = left.into();
        self
    }

    pub fn with_child(mut self, child: VisualNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = VisualNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including itself.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(VisualNode::subtree_len).sum::<usize>()
    }
}
