//! CLI entry point for the repo-local architecture lint.
//!
//! Usage: `architecture-lint [BACKEND_DIR]`. Without an argument the
//! `backend/` directory next to this tool's workspace root is linted.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let backend_dir = std::env::args_os()
        .nth(1)
        .map_or_else(default_backend_dir, PathBuf::from);
    if !backend_dir.join("src").is_dir() {
        let _ = writeln!(
            io::stderr().lock(),
            "no src/ directory under {}",
            backend_dir.display()
        );
        return ExitCode::FAILURE;
    }

    match architecture_lint::lint_backend_sources(&backend_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr().lock(), "{err}");
            ExitCode::FAILURE
        }
    }
}

fn default_backend_dir() -> PathBuf {
    // tools/architecture-lint -> workspace root
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .unwrap_or_else(|| Path::new("."))
        .join("backend")
}
