use std::io;

use thiserror::Error;

/// Terminal failures. Everything else in the pipeline degrades instead of
/// erroring: malformed headers and bodies render as best they can.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error: {path} not found")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },
}
