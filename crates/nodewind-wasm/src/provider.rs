//! Definition lookups served by a JavaScript callback.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use nodewind_codegen::{CodegenError, DefinitionProvider, Result};
use nodewind_core::VisualNode;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Calls `lookup(mainComponentId)`, which may return a name, `null`, or a
/// promise of either.
pub struct JsDefinitions {
    lookup: js_sys::Function,
}

impl JsDefinitions {
    pub fn new(lookup: js_sys::Function) -> Self {
        Self { lookup }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl DefinitionProvider for JsDefinitions {
    fn main_component_name<'a>(&'a self, instance: &'a VisualNode) -> LocalBoxFuture<'a, Result<Option<String>>> {
        async move {
            let Some(id) = instance.main_component_id.as_deref() else {
                return Ok(None);
            };
            let failed = |e: JsValue| CodegenError::DefinitionLookup {
                node: instance.name.clone(),
                message: describe(&e),
            };

            let returned = self.lookup.call1(&JsValue::NULL, &JsValue::from_str(id)).map_err(failed)?;
            let resolved = JsFuture::from(js_sys::Promise::resolve(&returned))
                .await
                .map_err(failed)?;
            Ok(resolved.as_string())
        }
        .boxed_local()
    }
}
