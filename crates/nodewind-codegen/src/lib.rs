//! Code generation from design node trees to React Native markup.
//!
//! The pipeline has two stages:
//!
//! - [`NodeConverter`] classifies each visual node into a [`MarkupNode`],
//!   deriving NativeWind classes through the ladders of a [`StyleConfig`].
//!   Component definitions are resolved through a [`DefinitionProvider`],
//!   the only asynchronous step.
//! - [`TsxGenerator`] renders the markup tree as indented TSX.
//!
//! # Example
//!
//! ```ignore
//! use nodewind_codegen::{convert_node, generate_markup, StaticDefinitions, StyleConfig};
//!
//! let tree = convert_node(&root, StaticDefinitions::new(), StyleConfig::default()).await?;
//! println!("{}", generate_markup(&tree, &Default::default()));
//! ```

pub mod button;
pub mod config;
pub mod converter;
pub mod error;
pub mod generators;
pub mod handler;
pub mod provider;
pub mod style;
pub mod templates;

pub use button::ButtonShape;
pub use config::{ClassificationRule, ComponentRole, Ladder, MarkupTemplates, StyleConfig, UnsupportedPolicy};
pub use converter::{icon_identifier, NodeConverter};
pub use error::{CodegenError, Result};
pub use generators::{GeneratorOptions, MarkupGenerator, TsxGenerator};
pub use handler::{handle_generate, CodegenResult, Language};
pub use provider::{DefinitionProvider, NoDefinitions, StaticDefinitions};
pub use templates::TemplateEngine;

use nodewind_core::{MarkupNode, VisualNode};

/// Convert a tree with a one-off converter.
pub async fn convert_node<P: DefinitionProvider>(
    root: &VisualNode,
    provider: P,
    config: StyleConfig,
) -> Result<MarkupNode> {
    let converter = NodeConverter::new(config, provider)?;
    converter.convert_node(root).await
}

/// Render a markup tree as TSX.
pub fn generate_markup(tree: &MarkupNode, options: &GeneratorOptions) -> String {
    TsxGenerator::with_options(options.clone()).generate(tree)
}
