//! Template engine for pre-rendered markup snippets.

use crate::config::MarkupTemplates;
use crate::error::{CodegenError, Result};
use convert_case::{Case, Casing};
use handlebars::Handlebars;
use serde::Serialize;

pub const VARIANT_BUTTON: &str = "variant_button";
pub const INTERACTIVE_DEFAULT: &str = "interactive_default";
pub const ICON_IMPORT: &str = "icon_import";

/// Template engine using Handlebars.
///
/// Output is not HTML-escaped: text is emitted verbatim, as the markup
/// dialect expects.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine with the helpers registered and no templates.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        Self::register_helpers(&mut handlebars);
        Self { handlebars }
    }

    /// Create an engine with the markup templates registered.
    pub fn with_templates(templates: &MarkupTemplates) -> Result<Self> {
        let mut engine = Self::new();
        engine.register_template(VARIANT_BUTTON, &templates.variant_button)?;
        engine.register_template(INTERACTIVE_DEFAULT, &templates.interactive_default)?;
        engine.register_template(ICON_IMPORT, &templates.icon_import)?;
        Ok(engine)
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Register custom helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        register_text_helper(handlebars, "title_case", title_case);
        register_text_helper(handlebars, "pascal_case", |s| s.to_case(Case::Pascal));
        register_text_helper(handlebars, "lower", str::to_lowercase);
        register_text_helper(handlebars, "upper", str::to_uppercase);
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// First character upper-cased, the rest lower-cased (`primaryAlt` -> `Primaryalt`).
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Register a one-argument helper that rewrites a string.
fn register_text_helper(handlebars: &mut Handlebars, name: &str, transform: fn(&str) -> String) {
    handlebars.register_helper(
        name,
        Box::new(
            move |h: &handlebars::Helper,
                  _r: &Handlebars,
                  _ctx: &handlebars::Context,
                  _rc: &mut handlebars::RenderContext,
                  out: &mut dyn handlebars::Output|
                  -> handlebars::HelperResult {
                let param = h
                    .param(0)
                    .and_then(|v| v.value().as_str())
                    .unwrap_or("");
                out.write(&transform(param))?;
                Ok(())
            },
        ),
    );
}
