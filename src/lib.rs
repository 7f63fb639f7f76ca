//! curl2py turns a captured cURL command line into a Python `requests`
//! snippet: tokenize the command, pull out method, URL, headers and body,
//! then render the equivalent session calls.

pub mod curl;
pub mod error;
pub mod python;

#[cfg(test)]
pub(crate) mod test_util;
