//! Utility-class heuristics.
//!
//! Numeric and visual attributes are bucketed through the ladders of a
//! [`StyleConfig`] into NativeWind class tokens. Extraction from a
//! [`VisualNode`] goes through a [`Coercer`] so malformed host values are
//! normalized (and reported) before any bucketing happens.

use crate::config::StyleConfig;
use nodewind_core::coerce::Coercer;
use nodewind_core::types::first_solid_color;
use nodewind_core::{Color, FieldValue, VisualNode};

/// Format a pixel value for an arbitrary-value class (`13`, `12.5`).
pub fn format_px(value: f64) -> String {
    // Adding zero turns -0 into 0.
    format!("{}", value + 0.0)
}

/// Round half away from zero.
pub fn round_px(value: f64) -> f64 {
    value.round() + 0.0
}

/// `w-[Npx] h-[Npx]` from rounded geometry.
pub fn size_class(width: f64, height: f64) -> String {
    format!(
        "w-[{}px] h-[{}px]",
        format_px(round_px(width)),
        format_px(round_px(height))
    )
}

/// Named palette class or arbitrary hex class for a colour.
pub fn color_class(config: &StyleConfig, prefix: &str, color: &Color) -> String {
    let hex = color.to_hex();
    match config.palette_name(&hex) {
        Some(name) => format!("{prefix}-{name}"),
        None => format!("{prefix}-[{hex}]"),
    }
}

/// Inputs of the text class algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_weight: f64,
    /// Host alignment token (`LEFT`, `CENTER`, `RIGHT`, `JUSTIFIED`).
    pub align: String,
    pub color: Option<Color>,
}

impl TextStyle {
    pub fn from_node(node: &VisualNode, config: &StyleConfig, coercer: &Coercer<'_>) -> Self {
        Self {
            font_size: coercer.font_size("fontSize", &node.font_size, config.default_font_size),
            font_weight: coercer.font_weight("fontWeight", &node.font_weight),
            align: coercer
                .string("textAlignHorizontal", &node.text_align_horizontal, "LEFT")
                .to_string(),
            color: first_solid_color(&node.fills),
        }
    }
}

pub fn font_size_token(config: &StyleConfig, size: f64) -> String {
    let bucket = config.font_size.bucket(size).unwrap_or(config.font_size_overflow.as_str());
    format!("text-{bucket}")
}

pub fn font_weight_token(config: &StyleConfig, weight: f64) -> String {
    let bucket = config.font_weight.bucket(weight).unwrap_or(config.font_weight_overflow.as_str());
    format!("font-{bucket}")
}

pub fn align_token(align: &str) -> &'static str {
    match align {
        "CENTER" => "text-center",
        "RIGHT" => "text-right",
        _ => "text-left",
    }
}

/// Size, weight, alignment, then colour when it differs from the default.
pub fn text_class(config: &StyleConfig, style: &TextStyle) -> String {
    let mut classes = vec![
        font_size_token(config, style.font_size),
        font_weight_token(config, style.font_weight),
        align_token(&style.align).to_string(),
    ];

    if let Some(color) = &style.color {
        let is_default = Color::from_hex(&config.default_text_color)
            .is_some_and(|default| default.to_hex() == color.to_hex());
        if !is_default {
            classes.push(color_class(config, "text", color));
        }
    }

    classes.join(" ")
}

/// Main-axis direction of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

/// Auto-layout attributes of a container.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoLayout {
    pub direction: Direction,
    pub primary_align: Option<String>,
    pub counter_align: Option<String>,
    pub spacing: f64,
    /// Top, right, bottom, left.
    pub padding: [f64; 4],
}

/// Inputs of the container class algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStyle {
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub radius: Option<f64>,
    pub layout: Option<AutoLayout>,
}

impl BoxStyle {
    /// Geometry only, no paint or layout.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill: None,
            radius: None,
            layout: None,
        }
    }

    pub fn from_node(node: &VisualNode, coercer: &Coercer<'_>) -> Self {
        Self {
            width: coercer.number("width", &node.width, 0.0),
            height: coercer.number("height", &node.height, 0.0),
            fill: first_solid_color(&node.fills),
            radius: corner_radius(node, coercer),
            layout: auto_layout(node, coercer),
        }
    }
}

/// Uniform corner radius, or the per-corner radius when all four agree.
fn corner_radius(node: &VisualNode, coercer: &Coercer<'_>) -> Option<f64> {
    // Differing corners show up as a mixed corner radius.
    if node.corner_radius != FieldValue::Mixed {
        if let Some(radius) = coercer.optional_number("cornerRadius", &node.corner_radius) {
            return Some(radius);
        }
    }

    let corners = [
        coercer.optional_number("topLeftRadius", &node.top_left_radius)?,
        coercer.optional_number("topRightRadius", &node.top_right_radius)?,
        coercer.optional_number("bottomRightRadius", &node.bottom_right_radius)?,
        coercer.optional_number("bottomLeftRadius", &node.bottom_left_radius)?,
    ];
    corners
        .iter()
        .all(|r| *r == corners[0])
        .then_some(corners[0])
}

fn auto_layout(node: &VisualNode, coercer: &Coercer<'_>) -> Option<AutoLayout> {
    let mode = coercer.optional_string("layoutMode", &node.layout_mode)?;
    if mode == "NONE" {
        return None;
    }

    let side = |field: &'static str, value: &FieldValue| coercer.optional_number(field, value).unwrap_or(0.0);

    Some(AutoLayout {
        direction: if mode == "HORIZONTAL" { Direction::Row } else { Direction::Column },
        primary_align: coercer
            .optional_string("primaryAxisAlignItems", &node.primary_axis_align_items)
            .map(str::to_string),
        counter_align: coercer
            .optional_string("counterAxisAlignItems", &node.counter_axis_align_items)
            .map(str::to_string),
        spacing: side("itemSpacing", &node.item_spacing),
        padding: [
            side("paddingTop", &node.padding_top),
            side("paddingRight", &node.padding_right),
            side("paddingBottom", &node.padding_bottom),
            side("paddingLeft", &node.padding_left),
        ],
    })
}

pub fn radius_class(config: &StyleConfig, radius: f64, width: f64, height: f64) -> Option<String> {
    if radius <= 0.0 {
        return None;
    }
    if let Some(bucket) = config.radius.bucket(radius) {
        return Some(if bucket.is_empty() {
            "rounded".to_string()
        } else {
            format!("rounded-{bucket}")
        });
    }
    if radius >= width.min(height) / 2.0 {
        Some("rounded-full".to_string())
    } else {
        Some(format!("rounded-[{}px]", format_px(radius)))
    }
}

pub fn items_class(align: &str) -> Option<&'static str> {
    match align {
        "MIN" => Some("items-start"),
        "MAX" => Some("items-end"),
        "CENTER" => Some("items-center"),
        "BASELINE" => Some("items-baseline"),
        _ => None,
    }
}

pub fn justify_class(align: &str) -> Option<&'static str> {
    match align {
        "MIN" => Some("justify-start"),
        "MAX" => Some("justify-end"),
        "CENTER" => Some("justify-center"),
        "SPACE_BETWEEN" => Some("justify-between"),
        _ => None,
    }
}

fn spacing_class(prefix: &str, bucket: Option<&str>, value: f64) -> String {
    match bucket {
        Some(bucket) => format!("{prefix}-{bucket}"),
        None => format!("{prefix}-[{}px]", format_px(value)),
    }
}

pub fn gap_class(config: &StyleConfig, spacing: f64) -> Option<String> {
    (spacing > 0.0).then(|| spacing_class("gap", config.gap.bucket(spacing), spacing))
}

/// `p-*` when all four sides match, otherwise one class per non-zero side.
pub fn padding_classes(config: &StyleConfig, padding: [f64; 4]) -> Vec<String> {
    let [top, right, bottom, left] = padding;

    if top == right && right == bottom && bottom == left {
        if top > 0.0 {
            return vec![spacing_class("p", config.gap.bucket(top), top)];
        }
        return Vec::new();
    }

    [("pt", top), ("pr", right), ("pb", bottom), ("pl", left)]
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|(prefix, value)| spacing_class(prefix, config.padding_side.bucket(value), value))
        .collect()
}

/// Size, background, radius, then auto-layout classes.
pub fn container_class(config: &StyleConfig, style: &BoxStyle) -> String {
    let mut classes = vec![size_class(style.width, style.height)];

    if let Some(fill) = &style.fill {
        classes.push(color_class(config, "bg", fill));
    }

    if let Some(radius) = style.radius.and_then(|r| radius_class(config, r, style.width, style.height)) {
        classes.push(radius);
    }

    if let Some(layout) = &style.layout {
        classes.push(
            match layout.direction {
                Direction::Row => "flex-row",
                Direction::Column => "flex-col",
            }
            .to_string(),
        );
        if let Some(items) = layout.counter_align.as_deref().and_then(items_class) {
            classes.push(items.to_string());
        }
        if let Some(justify) = layout.primary_align.as_deref().and_then(justify_class) {
            classes.push(justify.to_string());
        }
        if let Some(gap) = gap_class(config, layout.spacing) {
            classes.push(gap);
        }
        classes.extend(padding_classes(config, layout.padding));
    }

    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodewind_core::{MemorySink, Paint};
    use proptest::prelude::*;

    fn text_style(size: f64, weight: f64, align: &str) -> TextStyle {
        TextStyle {
            font_size: size,
            font_weight: weight,
            align: align.to_string(),
            color: None,
        }
    }

    #[test]
    fn test_text_class_defaults() {
        let config = StyleConfig::default();
        assert_eq!(
            text_class(&config, &text_style(14.0, 400.0, "LEFT")),
            "text-base font-normal text-left"
        );
    }

    #[test]
    fn test_text_class_buckets() {
        let config = StyleConfig::default();
        assert_eq!(
            text_class(&config, &text_style(9.0, 250.0, "CENTER")),
            "text-xs font-light text-center"
        );
        assert_eq!(
            text_class(&config, &text_style(23.0, 650.0, "RIGHT")),
            "text-3xl font-bold text-right"
        );
        assert_eq!(
            text_class(&config, &text_style(40.0, 900.0, "JUSTIFIED")),
            "text-4xl font-black text-left"
        );
    }

    #[test]
    fn test_text_color_class() {
        let config = StyleConfig::default();
        let mut style = text_style(16.0, 500.0, "LEFT");

        style.color = Some(Color::BLACK);
        assert_eq!(text_class(&config, &style), "text-md font-medium text-left");

        style.color = Some(Color::from_hex("#007AFF").unwrap());
        assert_eq!(text_class(&config, &style), "text-md font-medium text-left text-blue");

        style.color = Some(Color::from_hex("#FF0000").unwrap());
        assert_eq!(text_class(&config, &style), "text-md font-medium text-left text-[#ff0000]");
    }

    #[test]
    fn test_size_class_rounds_half_away_from_zero() {
        assert_eq!(size_class(99.5, 40.4), "w-[100px] h-[40px]");
        assert_eq!(size_class(-0.4, 0.0), "w-[0px] h-[0px]");
    }

    #[test]
    fn test_radius_class() {
        let config = StyleConfig::default();
        assert_eq!(radius_class(&config, 0.0, 100.0, 40.0), None);
        assert_eq!(radius_class(&config, 2.0, 100.0, 40.0).as_deref(), Some("rounded-sm"));
        assert_eq!(radius_class(&config, 4.0, 100.0, 40.0).as_deref(), Some("rounded"));
        assert_eq!(radius_class(&config, 10.0, 100.0, 40.0).as_deref(), Some("rounded-xl"));
        assert_eq!(radius_class(&config, 20.0, 100.0, 40.0).as_deref(), Some("rounded-full"));
        assert_eq!(radius_class(&config, 18.0, 100.0, 40.0).as_deref(), Some("rounded-[18px]"));
    }

    #[test]
    fn test_padding_classes() {
        let config = StyleConfig::default();
        assert_eq!(padding_classes(&config, [16.0; 4]), vec!["p-4"]);
        assert_eq!(padding_classes(&config, [30.0; 4]), vec!["p-[30px]"]);
        assert!(padding_classes(&config, [0.0; 4]).is_empty());
        assert_eq!(
            padding_classes(&config, [8.0, 0.0, 20.0, 3.0]),
            vec!["pt-2", "pb-[20px]", "pl-1"]
        );
    }

    #[test]
    fn test_container_class_full() {
        let config = StyleConfig::default();
        let node = VisualNode::frame("Card")
            .with_size(320.0, 120.0)
            .with_fill(Paint::solid(Color::from_hex("#FAFAF8").unwrap()))
            .with_corner_radius(8.0)
            .with_layout("HORIZONTAL", 12.0)
            .with_alignment("SPACE_BETWEEN", "CENTER")
            .with_padding(16.0, 16.0, 16.0, 16.0);

        let sink = MemorySink::new();
        let style = BoxStyle::from_node(&node, &Coercer::new(&sink));

        assert_eq!(
            container_class(&config, &style),
            "w-[320px] h-[120px] bg-white rounded-lg flex-row items-center justify-between gap-3 p-4"
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_container_without_auto_layout() {
        let config = StyleConfig::default();
        let mut node = VisualNode::frame("Box").with_size(10.0, 10.0).with_layout("NONE", 8.0);
        node.corner_radius = FieldValue::Mixed;
        node.top_left_radius = 3.0.into();
        node.top_right_radius = 3.0.into();
        node.bottom_right_radius = 3.0.into();
        node.bottom_left_radius = 3.0.into();

        let sink = MemorySink::new();
        let style = BoxStyle::from_node(&node, &Coercer::new(&sink));
        assert_eq!(container_class(&config, &style), "w-[10px] h-[10px] rounded");
    }

    #[test]
    fn test_uneven_corners_emit_no_radius() {
        let mut node = VisualNode::frame("Tab").with_size(80.0, 32.0);
        node.corner_radius = FieldValue::Mixed;
        node.top_left_radius = 8.0.into();
        node.top_right_radius = 8.0.into();
        node.bottom_right_radius = 0.0.into();
        node.bottom_left_radius = 0.0.into();

        let sink = MemorySink::new();
        let style = BoxStyle::from_node(&node, &Coercer::new(&sink));
        assert_eq!(style.radius, None);
    }

    #[test]
    fn test_missing_geometry_is_reported() {
        let sink = MemorySink::new();
        let style = BoxStyle::from_node(&VisualNode::frame("Empty"), &Coercer::new(&sink));

        assert_eq!(container_class(&StyleConfig::default(), &style), "w-[0px] h-[0px]");
        assert_eq!(sink.for_field("width").len(), 1);
        assert_eq!(sink.for_field("height").len(), 1);
    }

    proptest! {
        #[test]
        fn prop_font_size_bucket_is_monotonic(a in 0.0f64..64.0, b in 0.0f64..64.0) {
            let ladder = StyleConfig::default().font_size;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ladder.position(lo) <= ladder.position(hi));
        }
    }
}
