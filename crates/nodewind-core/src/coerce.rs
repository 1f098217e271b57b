//! Safe coercion of host values into well-typed values with defaults.
//!
//! The `safe_*` functions are total and side-effect free. [`Coercer`]
//! wraps them and reports every fallback to a [`DiagnosticSink`].

use crate::diagnostics::{CoercionWarning, DiagnosticSink, FallbackReason};
use crate::value::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading decimal prefix, matching conventional `parseFloat` behaviour.
static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .unwrap_or_else(|e| panic!("leading float pattern must compile: {e}"))
});

/// Parse the longest decimal prefix of `s`, ignoring leading whitespace.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let matched = LEADING_FLOAT.find(trimmed)?.as_str();
    let digits = matched.trim_start_matches(['+', '-']);
    let magnitude = if digits == "Infinity" {
        f64::INFINITY
    } else {
        digits.parse::<f64>().ok()?
    };
    Some(if matched.starts_with('-') { -magnitude } else { magnitude })
}

fn absent_reason(value: &FieldValue) -> Option<FallbackReason> {
    match value {
        FieldValue::Missing => Some(FallbackReason::Missing),
        FieldValue::Null => Some(FallbackReason::Null),
        FieldValue::Mixed => Some(FallbackReason::Placeholder),
        _ => None,
    }
}

/// Coerce to a finite number, or explain why not.
pub fn try_number(value: &FieldValue) -> Result<f64, FallbackReason> {
    if let Some(reason) = absent_reason(value) {
        return Err(reason);
    }
    let n = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(s) => parse_leading_float(s).ok_or(FallbackReason::NotNumeric)?,
        _ => return Err(FallbackReason::NotNumeric),
    };
    if n.is_nan() {
        Err(FallbackReason::NotNumeric)
    } else if !n.is_finite() {
        Err(FallbackReason::NonFinite)
    } else {
        Ok(n)
    }
}

/// Finite numbers pass through, numeric strings are parsed, everything else is `default`.
pub fn safe_number(value: &FieldValue, default: f64) -> f64 {
    try_number(value).unwrap_or(default)
}

pub fn try_string(value: &FieldValue) -> Result<&str, FallbackReason> {
    if let Some(reason) = absent_reason(value) {
        return Err(reason);
    }
    value.as_str().ok_or(FallbackReason::NotText)
}

/// Strings pass through, everything else is `default`.
pub fn safe_string<'a>(value: &'a FieldValue, default: &'a str) -> &'a str {
    try_string(value).unwrap_or(default)
}

/// Map a descriptive or numeric-string weight to its numeric weight.
pub fn weight_from_name(name: &str) -> Option<f64> {
    let weight = match name.to_lowercase().as_str() {
        "thin" | "100" => 100.0,
        "extralight" | "ultralight" | "200" => 200.0,
        "light" | "300" => 300.0,
        "normal" | "regular" | "400" => 400.0,
        "medium" | "500" => 500.0,
        "semibold" | "demibold" | "600" => 600.0,
        "bold" | "700" => 700.0,
        "extrabold" | "ultrabold" | "800" => 800.0,
        "black" | "heavy" | "900" => 900.0,
        _ => return None,
    };
    Some(weight)
}

pub const DEFAULT_FONT_WEIGHT: f64 = 400.0;

pub fn try_font_weight(value: &FieldValue) -> Result<f64, FallbackReason> {
    if let Some(reason) = absent_reason(value) {
        return Err(reason);
    }
    match value {
        FieldValue::Number(n) if n.is_finite() => Ok(*n),
        FieldValue::Number(_) => Err(FallbackReason::NonFinite),
        FieldValue::Text(s) => weight_from_name(s.trim()).ok_or(FallbackReason::UnknownWeight),
        _ => Err(FallbackReason::UnknownWeight),
    }
}

/// Total: every input maps to a weight, unknown input to 400.
pub fn safe_font_weight(value: &FieldValue) -> f64 {
    try_font_weight(value).unwrap_or(DEFAULT_FONT_WEIGHT)
}

pub fn try_font_size(value: &FieldValue) -> Result<f64, FallbackReason> {
    if let Some(reason) = absent_reason(value) {
        return Err(reason);
    }
    match value {
        FieldValue::Number(n) if !n.is_finite() => Err(FallbackReason::NonFinite),
        FieldValue::Number(n) if *n > 0.0 => Ok(*n),
        FieldValue::Number(_) => Err(FallbackReason::NotPositive),
        _ => Err(FallbackReason::NotNumeric),
    }
}

/// Strictly positive finite numbers pass through, everything else is `default`.
pub fn safe_font_size(value: &FieldValue, default: f64) -> f64 {
    try_font_size(value).unwrap_or(default)
}

/// Coercion front-end that reports fallbacks to a sink.
#[derive(Clone, Copy)]
pub struct Coercer<'a> {
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Coercer<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    fn report(&self, field: &'static str, reason: FallbackReason, value: &FieldValue, fallback: String) {
        self.sink.warn(CoercionWarning {
            field,
            reason,
            received: value.to_string(),
            fallback,
        });
    }

    pub fn number(&self, field: &'static str, value: &FieldValue, default: f64) -> f64 {
        try_number(value).unwrap_or_else(|reason| {
            self.report(field, reason, value, default.to_string());
            default
        })
    }

    /// Like [`Coercer::number`], but a missing or null field is silently `None`.
    pub fn optional_number(&self, field: &'static str, value: &FieldValue) -> Option<f64> {
        if value.is_absent() {
            return None;
        }
        match try_number(value) {
            Ok(n) => Some(n),
            Err(reason) => {
                self.report(field, reason, value, "none".to_string());
                None
            }
        }
    }

    pub fn string<'v>(&self, field: &'static str, value: &'v FieldValue, default: &'v str) -> &'v str {
        try_string(value).unwrap_or_else(|reason| {
            self.report(field, reason, value, format!("{default:?}"));
            default
        })
    }

    /// Like [`Coercer::string`], but a missing or null field is silently `None`.
    pub fn optional_string<'v>(&self, field: &'static str, value: &'v FieldValue) -> Option<&'v str> {
        if value.is_absent() {
            return None;
        }
        match try_string(value) {
            Ok(s) => Some(s),
            Err(reason) => {
                self.report(field, reason, value, "none".to_string());
                None
            }
        }
    }

    pub fn font_weight(&self, field: &'static str, value: &FieldValue) -> f64 {
        try_font_weight(value).unwrap_or_else(|reason| {
            self.report(field, reason, value, DEFAULT_FONT_WEIGHT.to_string());
            DEFAULT_FONT_WEIGHT
        })
    }

    pub fn font_size(&self, field: &'static str, value: &FieldValue, default: f64) -> f64 {
        try_font_size(value).unwrap_or_else(|reason| {
            self.report(field, reason, value, default.to_string());
            default
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use proptest::prelude::*;

    #[test]
    fn test_safe_number_passthrough_and_parse() {
        assert_eq!(safe_number(&FieldValue::Number(12.5), 0.0), 12.5);
        assert_eq!(safe_number(&"42".into(), 0.0), 42.0);
        assert_eq!(safe_number(&"12px".into(), 0.0), 12.0);
        assert_eq!(safe_number(&"  -3.5e1rem".into(), 0.0), -35.0);
        assert_eq!(safe_number(&".5".into(), 0.0), 0.5);
    }

    #[test]
    fn test_safe_number_defaults() {
        assert_eq!(safe_number(&FieldValue::Missing, 7.0), 7.0);
        assert_eq!(safe_number(&FieldValue::Null, 7.0), 7.0);
        assert_eq!(safe_number(&FieldValue::Mixed, 7.0), 7.0);
        assert_eq!(safe_number(&"auto".into(), 7.0), 7.0);
        assert_eq!(safe_number(&FieldValue::Flag(true), 7.0), 7.0);
        assert_eq!(safe_number(&FieldValue::Number(f64::NAN), 7.0), 7.0);
        assert_eq!(safe_number(&"Infinity".into(), 7.0), 7.0);
    }

    #[test]
    fn test_placeholder_treated_like_missing() {
        assert_eq!(
            safe_number(&FieldValue::Mixed, 3.0),
            safe_number(&FieldValue::Missing, 3.0)
        );
        assert_eq!(safe_string(&FieldValue::Mixed, "LEFT"), "LEFT");
    }

    #[test]
    fn test_safe_string() {
        assert_eq!(safe_string(&"CENTER".into(), "LEFT"), "CENTER");
        assert_eq!(safe_string(&FieldValue::Number(1.0), "LEFT"), "LEFT");
        assert_eq!(safe_string(&FieldValue::Missing, "LEFT"), "LEFT");
    }

    #[test]
    fn test_safe_font_weight_vocabulary() {
        assert_eq!(safe_font_weight(&"Bold".into()), 700.0);
        assert_eq!(safe_font_weight(&"700".into()), 700.0);
        assert_eq!(safe_font_weight(&"ultralight".into()), 200.0);
        assert_eq!(safe_font_weight(&"DemiBold".into()), 600.0);
        assert_eq!(safe_font_weight(&"heavy".into()), 900.0);
        assert_eq!(safe_font_weight(&"Regular".into()), 400.0);
        assert_eq!(safe_font_weight(&"wide".into()), 400.0);
        assert_eq!(safe_font_weight(&FieldValue::Number(550.0)), 550.0);
        assert_eq!(safe_font_weight(&FieldValue::Mixed), 400.0);
    }

    #[test]
    fn test_safe_font_size() {
        assert_eq!(safe_font_size(&FieldValue::Number(18.0), 14.0), 18.0);
        assert_eq!(safe_font_size(&FieldValue::Number(0.0), 14.0), 14.0);
        assert_eq!(safe_font_size(&FieldValue::Number(-2.0), 14.0), 14.0);
        assert_eq!(safe_font_size(&"18".into(), 14.0), 14.0);
        assert_eq!(safe_font_size(&FieldValue::Mixed, 14.0), 14.0);
    }

    #[test]
    fn test_coercer_reports_fallbacks() {
        let sink = MemorySink::new();
        let coercer = Coercer::new(&sink);

        assert_eq!(coercer.number("width", &FieldValue::Mixed, 0.0), 0.0);
        assert_eq!(coercer.font_weight("fontWeight", &"wide".into()), 400.0);
        assert_eq!(coercer.number("height", &FieldValue::Number(5.0), 0.0), 5.0);

        let warnings = sink.warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].field, "width");
        assert_eq!(warnings[0].reason, FallbackReason::Placeholder);
        assert_eq!(warnings[1].reason, FallbackReason::UnknownWeight);
    }

    #[test]
    fn test_optional_number_is_silent_when_absent() {
        let sink = MemorySink::new();
        let coercer = Coercer::new(&sink);

        assert_eq!(coercer.optional_number("paddingTop", &FieldValue::Missing), None);
        assert_eq!(coercer.optional_number("paddingTop", &FieldValue::Null), None);
        assert!(sink.is_empty());

        assert_eq!(coercer.optional_number("paddingTop", &FieldValue::Mixed), None);
        assert_eq!(sink.for_field("paddingTop").len(), 1);
    }

    proptest! {
        #[test]
        fn prop_finite_numbers_pass_through(v in -1.0e9f64..1.0e9, d in -10.0f64..10.0) {
            prop_assert_eq!(safe_number(&FieldValue::Number(v), d), v);
        }

        #[test]
        fn prop_numeric_strings_parse(v in -1.0e6f64..1.0e6, d in -10.0f64..10.0) {
            let text = v.to_string();
            prop_assert_eq!(safe_number(&FieldValue::Text(text.clone()), d), text.parse::<f64>().unwrap());
        }

        #[test]
        fn prop_non_numeric_strings_default(s in "[a-zA-Z_ ]{0,12}", d in -10.0f64..10.0) {
            prop_assume!(!s.trim_start().starts_with("Infinity"));
            prop_assert_eq!(safe_number(&FieldValue::Text(s), d), d);
        }

        #[test]
        fn prop_font_weight_total(s in "\\PC{0,10}") {
            let w = safe_font_weight(&FieldValue::Text(s));
            prop_assert!([100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0].contains(&w));
        }

        #[test]
        fn prop_canonical_weight_strings_round_trip(step in 1u32..=9) {
            let weight = step * 100;
            prop_assert_eq!(safe_font_weight(&FieldValue::Text(weight.to_string())), weight as f64);
        }
    }
}
