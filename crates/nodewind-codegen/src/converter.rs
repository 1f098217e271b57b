//! Classifier: visual node tree to markup tree.

use crate::button::interactive_markup;
use crate::config::{ComponentRole, StyleConfig, UnsupportedPolicy};
use crate::error::{CodegenError, Result};
use crate::provider::DefinitionProvider;
use crate::style::{container_class, size_class, text_class, BoxStyle, TextStyle};
use crate::templates::{TemplateEngine, ICON_IMPORT};
use futures::future::{try_join_all, LocalBoxFuture};
use futures::{FutureExt, TryFutureExt};
use nodewind_core::coerce::Coercer;
use nodewind_core::{AttributeValue, DiagnosticSink, FieldValue, LogSink, MarkupKind, MarkupNode, VisualKind, VisualNode};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use std::sync::Arc;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").unwrap_or_else(|e| panic!("whitespace pattern must compile: {e}")));

/// Asset identifier for an icon name: trimmed, lower-cased, whitespace
/// runs replaced by a single underscore.
pub fn icon_identifier(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(name.trim(), "_")
        .to_lowercase()
}

/// Converts visual nodes into markup nodes.
///
/// Siblings are converted concurrently and joined in their original
/// order. The only suspension point is the [`DefinitionProvider`] lookup
/// for component instances; everything else is computed synchronously
/// from the node and the [`StyleConfig`].
pub struct NodeConverter<P> {
    config: StyleConfig,
    templates: TemplateEngine<'static>,
    provider: P,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl<P: DefinitionProvider> NodeConverter<P> {
    /// Validate `config` and compile its templates.
    pub fn new(config: StyleConfig, provider: P) -> Result<Self> {
        config.validate()?;
        let templates = TemplateEngine::with_templates(&config.templates)?;
        Ok(Self {
            config,
            templates,
            provider,
            diagnostics: Arc::new(LogSink),
        })
    }

    /// Send coercion warnings to `sink` instead of the log.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn coercer(&self) -> Coercer<'_> {
        Coercer::new(self.diagnostics.as_ref())
    }

    /// Convert one node and its subtree.
    pub fn convert_node<'a>(&'a self, node: &'a VisualNode) -> LocalBoxFuture<'a, Result<MarkupNode>> {
        async move {
            match &node.kind {
                VisualKind::Text => Ok(self.convert_text(node)),
                VisualKind::Instance => {
                    // A detached instance has an empty definition name and matches no rule.
                    let name = match self.provider.main_component_name(node).await? {
                        Some(name) => name,
                        None => {
                            log::debug!(
                                target: "nodewind::convert",
                                "instance '{}' has no definition, converting as a container",
                                node.name
                            );
                            String::new()
                        }
                    };
                    self.convert_component(node, &name).await
                }
                VisualKind::Component => self.convert_component(node, &node.name).await,
                VisualKind::Frame | VisualKind::Group => self.convert_container(node).await,
                VisualKind::Other(tag) => self.convert_unsupported(node, tag),
            }
        }
        .boxed_local()
    }

    /// Convert siblings concurrently, keeping their order.
    ///
    /// The first failing child fails the whole batch.
    pub async fn convert_children(&self, children: &[VisualNode]) -> Result<Vec<MarkupNode>> {
        if children.is_empty() {
            return Ok(Vec::new());
        }

        try_join_all(children.iter().enumerate().map(|(index, child)| {
            self.convert_node(child).map_err(move |source| CodegenError::ChildConversion {
                index,
                name: child.name.clone(),
                source: Box::new(source),
            })
        }))
        .await
    }

    fn convert_text(&self, node: &VisualNode) -> MarkupNode {
        let coercer = self.coercer();
        let style = TextStyle::from_node(node, &self.config, &coercer);

        let characters = node.characters.clone().map(FieldValue::Text).unwrap_or_default();
        let text = coercer.string("characters", &characters, "");

        MarkupNode::text(MarkupKind::Text, text).with_style_class(text_class(&self.config, &style))
    }

    async fn convert_component(&self, node: &VisualNode, name: &str) -> Result<MarkupNode> {
        let role = self.config.classify(name);
        log::debug!(target: "nodewind::convert", "component '{name}' classified as {role:?}");

        match role {
            Some(ComponentRole::Interactive) => {
                let children = self.convert_children(&node.children).await?;
                let markup = interactive_markup(&self.templates, &self.config, name, &children)?;
                Ok(MarkupNode {
                    kind: MarkupKind::InteractiveContainer,
                    ..MarkupNode::literal(markup)
                })
            }
            Some(ComponentRole::Icon) => {
                let identifier = icon_identifier(name);
                let import = self
                    .templates
                    .render(ICON_IMPORT, &json!({ "identifier": identifier }))?;
                Ok(MarkupNode::new(MarkupKind::Image)
                    .with_attribute("source", AttributeValue::Expression(identifier))
                    .with_style_class(size_class(self.config.icon_size, self.config.icon_size))
                    .with_auxiliary_statement(import))
            }
            None => self.convert_container(node).await,
        }
    }

    async fn convert_container(&self, node: &VisualNode) -> Result<MarkupNode> {
        let mut style = BoxStyle::from_node(node, &self.coercer());
        if node.kind == VisualKind::Group {
            style.layout = None;
        }
        let class = container_class(&self.config, &style);

        let children = self.convert_children(&node.children).await?;
        Ok(MarkupNode::container(MarkupKind::Container, children).with_style_class(class))
    }

    fn convert_unsupported(&self, node: &VisualNode, tag: &str) -> Result<MarkupNode> {
        match self.config.unsupported {
            UnsupportedPolicy::Reject => Err(CodegenError::UnsupportedNodeKind {
                kind: tag.to_string(),
                name: node.name.clone(),
            }),
            UnsupportedPolicy::Placeholder => {
                log::debug!(target: "nodewind::convert", "placeholder for unsupported {tag} '{}'", node.name);
                let coercer = self.coercer();
                let style = BoxStyle::sized(
                    coercer.number("width", &node.width, 0.0),
                    coercer.number("height", &node.height, 0.0),
                );
                Ok(MarkupNode::new(MarkupKind::Container).with_style_class(container_class(&self.config, &style)))
            }
        }
    }
}
