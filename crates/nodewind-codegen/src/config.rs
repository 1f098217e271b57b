//! Style tables and classification rules.
//!
//! Every threshold ladder, palette entry, keyword list and markup template
//! the classifier consults lives in [`StyleConfig`]. The classifier takes
//! one by value at construction and never mutates it.

use crate::error::{CodegenError, Result};
use indexmap::IndexMap;
use nodewind_core::Color;
use serde::Deserialize;

/// One rung of a [`Ladder`]: values `<= max` map to `token`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step(pub f64, pub String);

/// Ascending thresholds mapping a continuous value to discrete tokens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Ladder {
    steps: Vec<Step>,
}

impl Ladder {
    pub fn new<'a>(steps: impl IntoIterator<Item = (f64, &'a str)>) -> Self {
        Self {
            steps: steps
                .into_iter()
                .map(|(max, token)| Step(max, token.to_string()))
                .collect(),
        }
    }

    /// Token of the first threshold `value` does not exceed, `None` above the top.
    pub fn bucket(&self, value: f64) -> Option<&str> {
        self.steps
            .iter()
            .find(|Step(max, _)| value <= *max)
            .map(|Step(_, token)| token.as_str())
    }

    /// Index of the bucket `value` falls in; `len()` means above the top.
    pub fn position(&self, value: f64) -> usize {
        self.steps
            .iter()
            .position(|Step(max, _)| value <= *max)
            .unwrap_or(self.steps.len())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn check(&self, name: &str) -> Result<()> {
        if self.steps.iter().any(|Step(max, _)| !max.is_finite()) {
            return Err(CodegenError::InvalidConfig(format!("{name}: thresholds must be finite")));
        }
        if self.steps.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(CodegenError::InvalidConfig(format!(
                "{name}: thresholds must be strictly ascending"
            )));
        }
        Ok(())
    }
}

/// What a component name classifies as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentRole {
    Interactive,
    Icon,
}

/// Keywords matched case-insensitively as substrings of a component name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassificationRule {
    pub role: ComponentRole,
    pub keywords: Vec<String>,
}

impl ClassificationRule {
    pub fn new(role: ComponentRole, keywords: &[&str]) -> Self {
        Self {
            role,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.keywords.iter().any(|k| name.contains(&k.to_lowercase()))
    }
}

/// Handling of node types without a classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Fail with `UnsupportedNodeKind`.
    #[default]
    Reject,
    /// Emit an empty container sized from geometry.
    Placeholder,
}

/// Handlebars sources for pre-rendered markup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkupTemplates {
    /// `Button/<variant>/<size>` components. Receives `variant`, `size`, `text`.
    pub variant_button: String,
    /// Other interactive components. Receives `text`.
    pub interactive_default: String,
    /// Icon import line. Receives `identifier`.
    pub icon_import: String,
}

impl Default for MarkupTemplates {
    fn default() -> Self {
        Self {
            variant_button: concat!(
                "<{{title_case variant}}Button size=\"{{lower size}}\">",
                "{{text}}",
                "</{{title_case variant}}Button>"
            )
            .to_string(),
            interactive_default: concat!(
                "<TouchableOpacity className=\"items-center justify-center px-4 py-3 bg-blue rounded-md\">\n",
                "  <Text className=\"text-white text-base font-medium\">{{text}}</Text>\n",
                "</TouchableOpacity>"
            )
            .to_string(),
            icon_import: "import {{identifier}} from '@/assets/images/{{identifier}}.svg';".to_string(),
        }
    }
}

/// Immutable styling configuration for the classifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font_size: Ladder,
    pub font_size_overflow: String,
    pub default_font_size: f64,
    pub font_weight: Ladder,
    pub font_weight_overflow: String,
    /// Text colour that needs no class.
    pub default_text_color: String,
    pub radius: Ladder,
    pub gap: Ladder,
    /// Per-side padding when the four sides differ.
    pub padding_side: Ladder,
    /// Named colours; a fill matching one exactly gets the named class.
    pub palette: IndexMap<String, String>,
    /// Evaluated in order, first match wins.
    pub rules: Vec<ClassificationRule>,
    pub icon_size: f64,
    pub button_keyword: String,
    pub name_separator: String,
    pub templates: MarkupTemplates,
    pub unsupported: UnsupportedPolicy,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let palette = [
            ("dark", "#1E1E1E"),
            ("white", "#FAFAF8"),
            ("blue", "#007AFF"),
            ("gray", "#8B8383"),
            ("lightGray", "#D9D9D9"),
            ("blueGray", "#94A3B8"),
            ("green", "#0CEC80"),
        ]
        .into_iter()
        .map(|(name, hex)| (name.to_string(), hex.to_string()))
        .collect();

        Self {
            font_size: Ladder::new([
                (10.0, "xs"),
                (12.0, "sm"),
                (14.0, "base"),
                (16.0, "md"),
                (18.0, "lg"),
                (20.0, "xl"),
                (22.0, "2xl"),
                (24.0, "3xl"),
            ]),
            font_size_overflow: "4xl".to_string(),
            default_font_size: 14.0,
            font_weight: Ladder::new([
                (300.0, "light"),
                (400.0, "normal"),
                (500.0, "medium"),
                (600.0, "semibold"),
                (700.0, "bold"),
            ]),
            font_weight_overflow: "black".to_string(),
            default_text_color: "#000000".to_string(),
            radius: Ladder::new([
                (2.0, "sm"),
                (4.0, ""),
                (6.0, "md"),
                (8.0, "lg"),
                (12.0, "xl"),
                (16.0, "2xl"),
            ]),
            gap: Ladder::new([
                (2.0, "0.5"),
                (4.0, "1"),
                (6.0, "1.5"),
                (8.0, "2"),
                (12.0, "3"),
                (16.0, "4"),
                (20.0, "5"),
                (24.0, "6"),
            ]),
            padding_side: Ladder::new([(4.0, "1"), (8.0, "2"), (12.0, "3"), (16.0, "4")]),
            palette,
            rules: vec![
                ClassificationRule::new(ComponentRole::Interactive, &["button", "btn", "cta", "action"]),
                ClassificationRule::new(ComponentRole::Icon, &["icon", "icn", "svg", "symbol"]),
            ],
            icon_size: 24.0,
            button_keyword: "Button".to_string(),
            name_separator: "/".to_string(),
            templates: MarkupTemplates::default(),
            unsupported: UnsupportedPolicy::Reject,
        }
    }
}

impl StyleConfig {
    /// Load overrides from JSON; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StyleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.font_size.check("font_size")?;
        self.font_weight.check("font_weight")?;
        self.radius.check("radius")?;
        self.gap.check("gap")?;
        self.padding_side.check("padding_side")?;

        if self.default_font_size <= 0.0 || !self.default_font_size.is_finite() {
            return Err(CodegenError::InvalidConfig("default_font_size must be positive".into()));
        }
        if self.icon_size <= 0.0 || !self.icon_size.is_finite() {
            return Err(CodegenError::InvalidConfig("icon_size must be positive".into()));
        }
        if self.name_separator.is_empty() {
            return Err(CodegenError::InvalidConfig("name_separator must not be empty".into()));
        }
        if let Some(rule) = self.rules.iter().find(|r| r.keywords.iter().any(|k| k.trim().is_empty())) {
            return Err(CodegenError::InvalidConfig(format!(
                "rules: empty keyword for {:?}",
                rule.role
            )));
        }
        if let Some((name, hex)) = self.palette.iter().find(|(_, hex)| Color::from_hex(hex).is_none()) {
            return Err(CodegenError::InvalidConfig(format!(
                "palette entry '{name}' is not a hex colour: {hex}"
            )));
        }
        Ok(())
    }

    /// First rule matching `name`.
    pub fn classify(&self, name: &str) -> Option<ComponentRole> {
        self.rules.iter().find(|rule| rule.matches(name)).map(|rule| rule.role)
    }

    /// Palette name of a `#rrggbb` colour, if any.
    pub fn palette_name(&self, hex: &str) -> Option<&str> {
        self.palette
            .iter()
            .find(|(_, value)| Color::from_hex(value).is_some_and(|c| c.to_hex() == hex))
            .map(|(name, _)| name.as_str())
    }
}
