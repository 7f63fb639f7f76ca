use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Quote a string the way Python's `repr` does: single quotes, switching to
/// double quotes when the text contains a single quote but no double quote,
/// with backslash escapes for the delimiter, backslashes and control
/// characters. Everything else, non-ASCII included, stays literal.
pub fn py_str(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Render a JSON value as a structure literal: 4-space indentation, keys in
/// insertion order, non-ASCII characters left as-is.
pub fn py_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut ser)
        .expect("in-memory serialization cannot fail");
    String::from_utf8(buf).expect("serializer writes UTF-8")
}

/// Render a string-to-string mapping as a structure literal.
pub fn py_dict(fields: &IndexMap<String, String>) -> String {
    let map: serde_json::Map<String, Value> = fields
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    py_json(&Value::Object(map))
}
