//! Core types for the nodewind code generator.
//!
//! This crate provides the data model shared by the classifier and the
//! serializer:
//! - Visual nodes as delivered by the design-tool host
//! - Loosely typed host values and their safe coercion
//! - The intermediate markup tree
//! - Diagnostic sinks for coercion fallbacks
//! - Error types

pub mod coerce;
pub mod diagnostics;
pub mod document;
pub mod errors;
pub mod markup;
pub mod node;
pub mod types;
pub mod value;

pub use coerce::{safe_font_size, safe_font_weight, safe_number, safe_string};
pub use diagnostics::{CoercionWarning, DiagnosticSink, FallbackReason, LogSink, MemorySink, NullSink};
pub use document::SelectionDocument;
pub use errors::*;
pub use markup::{AttributeValue, MarkupKind, MarkupNode};
pub use node::{VisualKind, VisualNode};
pub use types::{Color, Paint, PaintKind};
pub use value::FieldValue;
