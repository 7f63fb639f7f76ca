use curl2py::curl::{extract, tokenize};
use curl2py::python::generate;

fn main() {
    let curl_command = "curl 'http://example.com' -H 'Accept: application/json'";
    let mut request = extract(&tokenize(curl_command));
    println!("{}", generate(&mut request));
}
