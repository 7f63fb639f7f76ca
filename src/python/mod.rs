pub mod literal;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::curl::Request;
use self::literal::{py_dict, py_json, py_str};

/// How the body travels in the generated call.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyArg {
    Raw(String),
    Json(Value),
    Form(IndexMap<String, String>),
}

impl BodyArg {
    /// Decided once, before rendering: a body that parses as JSON goes out
    /// as `json=`, one that looks URL-encoded goes out as form fields, and
    /// anything else as a plain string.
    pub fn classify(raw: &str) -> Self {
        if let Ok(value) = serde_json::from_str(raw) {
            return BodyArg::Json(value);
        }
        if raw.contains('&') && raw.contains('=') {
            return BodyArg::Form(form_fields(raw));
        }
        BodyArg::Raw(raw.to_string())
    }
}

/// Split a `Cookie` header value into `name=value` pairs. Pairs are trimmed
/// before splitting at the first `=`; pairs without `=` are skipped.
fn cookie_pairs(raw: &str) -> IndexMap<String, String> {
    let mut pairs = IndexMap::new();
    for cookie in raw.split(';') {
        if let Some((name, value)) = cookie.trim().split_once('=') {
            pairs.insert(name.to_string(), value.to_string());
        }
    }
    pairs
}

/// Split URL-encoded form data at `&`, then each pair at the first `=`.
/// Later duplicates overwrite the value but keep the first key position.
fn form_fields(raw: &str) -> IndexMap<String, String> {
    let mut fields = IndexMap::new();
    for pair in raw.split('&') {
        if let Some((name, value)) = pair.split_once('=') {
            fields.insert(name.to_string(), value.to_string());
        }
    }
    fields
}

/// Render the `requests` snippet for one extracted request.
///
/// A `Cookie` header is a destructive read: it is removed from the caller's
/// header map and re-emitted as a `session.cookies.update` call, so the
/// serialized `headers` mapping never carries a `Cookie` key.
pub fn generate(request: &mut Request) -> String {
    let mut lines: Vec<String> = vec![
        "import requests".into(),
        String::new(),
        "session = requests.Session()".into(),
        format!("url = {}", py_str(&request.url)),
        String::new(),
    ];

    if let Some(cookies) = request.headers.shift_remove("Cookie") {
        if !cookies.is_empty() {
            lines.push(format!(
                "session.cookies.update({})",
                py_dict(&cookie_pairs(&cookies))
            ));
            lines.push(String::new());
        }
    }

    if request.headers.is_empty() {
        lines.push("headers = {}".into());
    } else {
        lines.push(format!("headers = {}", py_dict(&request.headers)));
    }

    let body = request.body.as_deref().map(BodyArg::classify);
    match &body {
        Some(BodyArg::Json(value)) => lines.push(format!("json_data = {}", py_json(value))),
        Some(BodyArg::Form(fields)) => lines.push(format!("data = {}", py_dict(fields))),
        Some(BodyArg::Raw(text)) => lines.push(format!("data = {}", py_str(text))),
        None => {}
    }

    lines.push(String::new());
    let mut call = format!("response = session.{}(url, headers=headers", request.method);
    match &body {
        Some(BodyArg::Json(_)) => call.push_str(", json=json_data"),
        Some(_) => call.push_str(", data=data"),
        None => {}
    }
    call.push(')');
    lines.push(call);

    lines.push(String::new());
    lines.push("print(response.status_code)".into());
    lines.push("print(response.text)".into());

    debug!(lines = lines.len(), "rendered snippet");
    lines.join("\n")
}
