//! Structured diagnostics for non-fatal coercion fallbacks.

use std::fmt;
use std::sync::Mutex;

/// Why a coercion fell back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    Missing,
    Null,
    /// Symbolic placeholder such as a mixed value.
    Placeholder,
    NotNumeric,
    NonFinite,
    NotPositive,
    NotText,
    UnknownWeight,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Missing => "value is missing",
            Self::Null => "value is null",
            Self::Placeholder => "value is an unresolved placeholder",
            Self::NotNumeric => "value is not numeric",
            Self::NonFinite => "value is not finite",
            Self::NotPositive => "value is not positive",
            Self::NotText => "value is not a string",
            Self::UnknownWeight => "unknown font weight",
        };
        f.write_str(text)
    }
}

/// A coercion that fell back to a default value.
#[derive(Debug, Clone, PartialEq)]
pub struct CoercionWarning {
    /// Host field name (`width`, `fontSize`, ...).
    pub field: &'static str,
    pub reason: FallbackReason,
    /// Rendering of the value that was received.
    pub received: String,
    /// Rendering of the default that was used instead.
    pub fallback: String,
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (received {}), using {}",
            self.field, self.reason, self.received, self.fallback
        )
    }
}

/// Receives coercion warnings. Implementations must not fail.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, warning: CoercionWarning);
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, warning: CoercionWarning) {
        log::warn!(target: "nodewind::coerce", "{warning}");
    }
}

/// Discards warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _warning: CoercionWarning) {}
}

/// Collects warnings in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    warnings: Mutex<Vec<CoercionWarning>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings received so far.
    pub fn warnings(&self) -> Vec<CoercionWarning> {
        match self.warnings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Warnings recorded for one field.
    pub fn for_field(&self, field: &str) -> Vec<CoercionWarning> {
        self.warnings().into_iter().filter(|w| w.field == field).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, warning: CoercionWarning) {
        match self.warnings.lock() {
            Ok(mut guard) => guard.push(warning),
            Err(poisoned) => poisoned.into_inner().push(warning),
        }
    }
}
