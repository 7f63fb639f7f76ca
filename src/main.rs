use std::fs;
use std::process::ExitCode;

use clap::{Arg, Command};
use curl2py::curl::{extract, tokenize};
use curl2py::error::ConvertError;
use curl2py::python;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("curl2py")
        .version("0.1.0")
        .about("Converts a captured curl command into a Python requests snippet")
        .arg(
            Arg::new("input")
                .help("File holding the curl command to convert")
                .required(true)
                .index(1),
        )
        .try_get_matches();

    let matches = match matches {
        Ok(matches) => matches,
        Err(err) if err.use_stderr() => {
            // Usage errors go to stdout, per the tool's contract.
            println!("{err}");
            return ExitCode::FAILURE;
        }
        Err(help_or_version) => {
            print!("{help_or_version}");
            return ExitCode::SUCCESS;
        }
    };

    let path = matches.get_one::<String>("input").unwrap();
    match convert_file(path) {
        Ok(code) => {
            println!("{code}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Read one command file and run it through the whole pipeline.
fn convert_file(path: &str) -> Result<String, ConvertError> {
    let command = fs::read_to_string(path).map_err(|source| ConvertError::Input {
        path: path.to_string(),
        source,
    })?;
    let tokens = tokenize(command.trim());
    let mut request = extract(&tokens);
    Ok(python::generate(&mut request))
}
