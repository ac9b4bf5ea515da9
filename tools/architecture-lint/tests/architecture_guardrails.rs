//! On-disk runs of the architecture lint against a scratch backend tree.

use std::fs;
use std::path::Path;

use architecture_lint::{ArchitectureLintError, lint_backend_sources};
use rstest::{fixture, rstest};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join("src").join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create source dir");
    }
    fs::write(path, contents).expect("write source file");
}

#[fixture]
fn backend() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "lib.rs", "pub mod domain; pub mod inbound; pub mod outbound;");
    write(dir.path(), "settings.rs", "use reqwest::Url;");
    write(
        dir.path(),
        "domain/mod.rs",
        "pub mod ports; pub struct ShowcaseView;",
    );
    write(
        dir.path(),
        "inbound/http/showcase.rs",
        "use crate::domain::ShowcaseView; fn render(_: ShowcaseView) {}",
    );
    write(
        dir.path(),
        "outbound/cults/graphql.rs",
        "use reqwest::Client; use crate::settings::CultsCredentials;",
    );
    write(dir.path(), "outbound/cults/README.md", "not rust");
    dir
}

#[rstest]
fn clean_tree_passes(backend: TempDir) {
    assert!(lint_backend_sources(backend.path()).is_ok());
}

#[rstest]
fn adapter_leak_is_reported_with_relative_path(backend: TempDir) {
    write(
        backend.path(),
        "inbound/http/designs.rs",
        "use crate::outbound::cults::GraphQlClient;",
    );

    let err = lint_backend_sources(backend.path()).expect_err("inbound imports outbound");

    let ArchitectureLintError::Violations(violations) = err else {
        panic!("expected violations");
    };
    let rendered: Vec<String> = violations.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![format!(
            "{}: inbound module must not depend on crate::outbound",
            Path::new("inbound").join("http").join("designs.rs").display()
        )]
    );
}

#[rstest]
fn unparsable_source_is_a_parse_error(backend: TempDir) {
    write(backend.path(), "domain/broken.rs", "fn (");

    let err = lint_backend_sources(backend.path()).expect_err("syntax error");

    assert!(matches!(err, ArchitectureLintError::Parse { .. }));
}
