use tracing::debug;

use super::Request;

/// Walk the token stream and fill in a [`Request`].
///
/// Flags take their argument from the next token, and an argument consumed
/// that way is never re-read as a flag or URL. Tokens outside the recognized
/// set are skipped without warning, and the last `http…`-prefixed token wins
/// as the URL.
pub fn extract(tokens: &[String]) -> Request {
    let mut request = Request::default();
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i].as_str() {
            "-X" | "--request" => {
                i += 1;
                if let Some(method) = tokens.get(i) {
                    request.method = method.to_lowercase();
                }
            }
            "-H" | "--header" => {
                i += 1;
                // A header without a colon is dropped, but still consumed.
                if let Some(header) = tokens.get(i) {
                    if let Some((name, value)) = header.split_once(':') {
                        request
                            .headers
                            .insert(name.trim().to_string(), value.trim().to_string());
                    }
                }
            }
            "-d" | "--data" | "--data-raw" | "--data-binary" => {
                i += 1;
                if let Some(data) = tokens.get(i) {
                    request.body = Some(data.clone());
                }
            }
            token if token.starts_with("http") => request.url = token.to_string(),
            _ => {}
        }
        i += 1;
    }

    debug!(
        method = %request.method,
        url = %request.url,
        headers = request.headers.len(),
        has_body = request.body.is_some(),
        "extracted request"
    );
    request
}
