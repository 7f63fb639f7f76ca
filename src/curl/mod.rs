pub mod extractor;
pub mod tokenizer;

pub use extractor::extract;
pub use tokenizer::tokenize;

use indexmap::IndexMap;

/// Everything the generator needs to know about one captured request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Lowercased HTTP method, `get` when the command never names one.
    pub method: String,
    /// Raw URL token, empty when the command holds none.
    pub url: String,
    /// Header names to values, in the order the command introduced them.
    pub headers: IndexMap<String, String>,
    /// Verbatim body from the last data flag, if any.
    pub body: Option<String>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "get".into(),
            url: String::new(),
            headers: IndexMap::new(),
            body: None,
        }
    }
}
