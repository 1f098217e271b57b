//! WebAssembly bindings for the nodewind code generator.
//!
//! Exposes the `generate` handler to a design-tool plugin. The plugin
//! supplies the selected node and a callback resolving component
//! definitions; results come back as `{ title, code, language }` objects.
//!
//! ## Example
//!
//! ```js
//! import { NodewindEngine } from 'nodewind';
//!
//! const engine = new NodewindEngine();
//! engine.setOptions({ indentSize: 2, useSpaces: true });
//!
//! figma.codegen.on('generate', ({ node }) =>
//!   engine.generate(serialize(node), async (id) => {
//!     const main = await figma.getNodeByIdAsync(id);
//!     return main ? main.name : null;
//!   })
//! );
//! ```

use js_sys::Promise;
use log::LevelFilter;
use nodewind_codegen::{
    handle_generate, CodegenResult, GeneratorOptions, NodeConverter, Result, StaticDefinitions, StyleConfig,
    TemplateEngine, TsxGenerator,
};
use nodewind_core::{SelectionDocument, VisualNode};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

mod logger;
mod provider;

pub use provider::JsDefinitions;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    logger::install(LevelFilter::Info);
}

/// Convert a JSON selection snapshot with its embedded definitions.
pub async fn generate_document(
    config: StyleConfig,
    options: GeneratorOptions,
    json: &str,
) -> Result<Vec<CodegenResult>> {
    let doc = SelectionDocument::from_json(json)?;
    let converter = NodeConverter::new(config, StaticDefinitions::from(&doc))?;
    let generator = TsxGenerator::with_options(options);
    Ok(handle_generate(doc.node.as_ref(), &converter, &generator).await)
}

/// The main engine interface for JavaScript.
#[wasm_bindgen]
pub struct NodewindEngine {
    config: StyleConfig,
    options: GeneratorOptions,
}

#[wasm_bindgen]
impl NodewindEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: StyleConfig::default(),
            options: GeneratorOptions::default(),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Replace the style configuration from a JSON string.
    #[wasm_bindgen(js_name = loadConfig)]
    pub fn load_config(&mut self, json: &str) -> std::result::Result<(), JsError> {
        let config = StyleConfig::from_json(json).map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
        TemplateEngine::with_templates(&config.templates)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
        self.config = config;
        Ok(())
    }

    /// Set indentation options (`{ indentSize, useSpaces }`).
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: JsValue) -> std::result::Result<(), JsError> {
        self.options = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
        Ok(())
    }

    /// Convert `node` (or `null` for no selection). `lookup(id)` resolves a
    /// definition id to its name, synchronously or through a promise.
    pub fn generate(&self, node: JsValue, lookup: js_sys::Function) -> std::result::Result<Promise, JsError> {
        let node: Option<VisualNode> =
            serde_wasm_bindgen::from_value(node).map_err(|e| JsError::new(&format!("Invalid node: {}", e)))?;
        let converter = NodeConverter::new(self.config.clone(), JsDefinitions::new(lookup))
            .map_err(|e| JsError::new(&e.to_string()))?;
        let generator = TsxGenerator::with_options(self.options.clone());

        Ok(future_to_promise(async move {
            let results = handle_generate(node.as_ref(), &converter, &generator).await;
            Ok(serde_wasm_bindgen::to_value(&results)?)
        }))
    }

    /// Convert a JSON snapshot (`{ node, components }`).
    #[wasm_bindgen(js_name = generateFromDocument)]
    pub fn generate_from_document(&self, json: String) -> Promise {
        let config = self.config.clone();
        let options = self.options.clone();

        future_to_promise(async move {
            let results = generate_document(config, options, &json)
                .await
                .map_err(|e| JsValue::from(JsError::new(&e.to_string())))?;
            Ok(serde_wasm_bindgen::to_value(&results)?)
        })
    }
}

impl Default for NodewindEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use nodewind_codegen::CodegenError;

    #[test]
    fn test_version() {
        assert_eq!(NodewindEngine::version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_generate_document() {
        let json = r#"{
            "node": {"type": "INSTANCE", "name": "Go", "mainComponentId": "1",
                     "children": [{"type": "TEXT", "characters": "Go"}]},
            "components": {"1": "Button/Primary/Large"}
        }"#;
        let results = block_on(generate_document(StyleConfig::default(), GeneratorOptions::default(), json)).unwrap();

        assert_eq!(results[0].title, "React Native TSX");
        assert_eq!(results[0].code, r#"<PrimaryButton size="large">Go</PrimaryButton>"#);
    }

    #[test]
    fn test_generate_document_without_node() {
        let results =
            block_on(generate_document(StyleConfig::default(), GeneratorOptions::default(), r#"{}"#)).unwrap();
        assert_eq!(results[0].title, "Error");
    }

    #[test]
    fn test_generate_document_rejects_bad_json() {
        let err = block_on(generate_document(StyleConfig::default(), GeneratorOptions::default(), "{"))
            .unwrap_err();
        assert!(matches!(err, CodegenError::Document(_)));
    }
}
