//! Print the OpenAPI document as JSON.

use std::io::{self, Write};
use std::process::ExitCode;

use storefront::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    let outcome = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|err| format!("failed to serialise OpenAPI document: {err}"))
        .and_then(|json| {
            writeln!(io::stdout().lock(), "{json}")
                .map_err(|err| format!("failed to write OpenAPI document: {err}"))
        });
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            let _ = writeln!(io::stderr().lock(), "{message}");
            ExitCode::FAILURE
        }
    }
}
