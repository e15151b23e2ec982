//! Presence checks for inbound payloads
//!
//! A field is missing when it is absent or falsy: `null`, `false`, zero or
//! `""`. Anything else is present and is not type checked. Present values that
//! are not strings are rendered as text the way the web client's own template
//! literals would render them, so whitespace-only strings and `123` both pass.

use serde_json::{Map, Number, Value};

use crate::error::ValidationError;

/// Validated body of `POST /api/ai`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiPayload {
    pub prompt: String,
    pub text: String,
    pub api_key: String,
    /// `None` when the caller sent a present value that is not a string
    pub provider: Option<String>,
}

/// Validated body of `POST /api/translate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatePayload {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub api_key: String,
    pub provider: Option<String>,
}

impl AiPayload {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = body.as_object();
        Ok(Self {
            prompt: render(required(fields, "prompt")?),
            text: render(required(fields, "text")?),
            api_key: render(required(fields, "apiKey")?),
            provider: provider_name(required(fields, "provider")?),
        })
    }
}

impl TranslatePayload {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = body.as_object();
        Ok(Self {
            text: render(required(fields, "text")?),
            source_lang: render(required(fields, "sourceLang")?),
            target_lang: render(required(fields, "targetLang")?),
            api_key: render(required(fields, "apiKey")?),
            provider: provider_name(required(fields, "provider")?),
        })
    }
}

fn required<'a>(
    fields: Option<&'a Map<String, Value>>,
    name: &'static str,
) -> Result<&'a Value, ValidationError> {
    match fields.and_then(|fields| fields.get(name)) {
        Some(value) if !is_falsy(value) => Ok(value),
        _ => Err(ValidationError::MissingField(name)),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Provider names are only ever strings; an array holding one is not a name.
fn provider_name(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// Text form of a present value
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        // Array elements that are null render as nothing
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                item => render(item),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn render_number(n: &Number) -> String {
    if n.is_f64() {
        // `1.0` renders as `1`
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    } else {
        n.to_string()
    }
}
