//! Host access to component definitions.

use crate::error::Result;
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use indexmap::IndexMap;
use nodewind_core::{SelectionDocument, VisualNode};
use std::rc::Rc;
use std::sync::Arc;

/// Resolves the definition backing a component instance.
///
/// This is the only suspension point of a conversion. Futures are not
/// required to be `Send`, so hosts running on a single-threaded event loop
/// (such as a WebAssembly plugin) can implement it directly.
pub trait DefinitionProvider {
    /// Name of the definition behind `instance`, `None` when it has none.
    fn main_component_name<'a>(&'a self, instance: &'a VisualNode) -> LocalBoxFuture<'a, Result<Option<String>>>;
}

impl<T: DefinitionProvider + ?Sized> DefinitionProvider for &T {
    fn main_component_name<'a>(&'a self, instance: &'a VisualNode) -> LocalBoxFuture<'a, Result<Option<String>>> {
        (**self).main_component_name(instance)
    }
}

impl<T: DefinitionProvider + ?Sized> DefinitionProvider for Rc<T> {
    fn main_component_name<'a>(&'a self, instance: &'a VisualNode) -> LocalBoxFuture<'a, Result<Option<String>>> {
        (**self).main_component_name(instance)
    }
}

impl<T: DefinitionProvider + ?Sized> DefinitionProvider for Arc<T> {
    fn main_component_name<'a>(&'a self, instance: &'a VisualNode) -> LocalBoxFuture<'a, Result<Option<String>>> {
        (**self).main_component_name(instance)
    }
}

/// Definition names known up front, keyed by definition id.
#[derive(Debug, Clone, Default)]
pub struct StaticDefinitions {
    names: IndexMap<String, String>,
}

impl StaticDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definition(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(id.into(), name.into());
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }
}

impl From<IndexMap<String, String>> for StaticDefinitions {
    fn from(names: IndexMap<String, String>) -> Self {
        Self { names }
    }
}

impl From<&SelectionDocument> for StaticDefinitions {
    fn from(doc: &SelectionDocument) -> Self {
        Self::from(doc.components.clone())
    }
}

impl DefinitionProvider for StaticDefinitions {
    fn main_component_name<'a>(&'a self, instance: &'a VisualNode) -> LocalBoxFuture<'a, Result<Option<String>>> {
        let name = instance
            .main_component_id
            .as_deref()
            .and_then(|id| self.get(id))
            .map(str::to_string);
        future::ready(Ok(name)).boxed_local()
    }
}

/// Every instance is detached; only definitions and frames classify by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefinitions;

impl DefinitionProvider for NoDefinitions {
    fn main_component_name<'a>(&'a self, _instance: &'a VisualNode) -> LocalBoxFuture<'a, Result<Option<String>>> {
        future::ready(Ok(None)).boxed_local()
    }
}
