//! Repo-local architectural lint for the storefront hexagon.
//!
//! The backend keeps its boundaries at the Rust module level: `domain` with
//! its ports, the HTTP adapter under `inbound`, and the Cults3D GraphQL
//! adapter under `outbound`. Each source file in those trees is parsed with
//! `syn` and every imported or referenced path is checked against the rules
//! of its layer:
//!
//! | Layer | Must not reach |
//! | --- | --- |
//! | `domain` | `inbound`, `outbound`, `settings`; Actix, utoipa, reqwest, base64 |
//! | `inbound` | `outbound`, `settings`; reqwest, base64 |
//! | `outbound` | `inbound`; Actix, utoipa |
//!
//! Run it with `cargo run -p architecture-lint`.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use syn::visit::Visit;

/// Name under which integration code imports the backend library.
const LIBRARY_CRATE: &str = "storefront";

/// A single boundary violation discovered by the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `backend/src`.
    pub file: PathBuf,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Failure modes returned by the architecture lint.
#[derive(Debug)]
pub enum ArchitectureLintError {
    /// Walking or reading the source tree failed.
    Io(io::Error),
    /// A file could not be attributed to a layer or parsed as Rust.
    Parse {
        /// Offending file, relative to `backend/src`.
        file: PathBuf,
        /// Parser or classifier diagnostic.
        message: String,
    },
    /// At least one import crosses a layer boundary.
    Violations(Vec<Violation>),
}

impl fmt::Display for ArchitectureLintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read backend sources: {err}"),
            Self::Parse { file, message } => {
                write!(f, "cannot lint {}: {message}", file.display())
            }
            Self::Violations(violations) => {
                writeln!(f, "{} layer boundary violation(s):", violations.len())?;
                violations
                    .iter()
                    .try_for_each(|violation| writeln!(f, "  {violation}"))
            }
        }
    }
}

impl std::error::Error for ArchitectureLintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Io(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

impl From<io::Error> for ArchitectureLintError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `backend/src`.
    pub file: PathBuf,
    /// File contents.
    pub contents: String,
}

/// Lint every layer under `backend_dir/src`.
///
/// # Errors
///
/// Returns [`ArchitectureLintError`] when the tree cannot be read or parsed,
/// or when any file violates its layer's rules.
pub fn lint_backend_sources(backend_dir: &Path) -> Result<(), ArchitectureLintError> {
    let src_dir = backend_dir.join("src");
    let mut sources = Vec::new();
    for layer in Layer::ALL {
        let root = src_dir.join(layer.dir());
        if root.is_dir() {
            read_rust_files(&src_dir, &root, &mut sources)?;
        }
    }
    lint_sources(&sources)
}

/// Lint in-memory sources.
///
/// # Errors
///
/// Returns [`ArchitectureLintError::Parse`] for a file outside the known
/// layers or with invalid syntax, and [`ArchitectureLintError::Violations`]
/// listing every boundary crossed.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();
    for source in sources {
        let parse_error = |message: String| ArchitectureLintError::Parse {
            file: source.file.clone(),
            message,
        };
        let layer = Layer::of(&source.file)
            .ok_or_else(|| parse_error("file is not under domain/, inbound/ or outbound/".to_owned()))?;
        let syntax = syn::parse_file(&source.contents).map_err(|err| parse_error(err.to_string()))?;
        violations.extend(
            layer
                .check(&syntax)
                .into_iter()
                .map(|message| Violation {
                    file: source.file.clone(),
                    message,
                }),
        );
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Domain,
    Inbound,
    Outbound,
}

/// Top-level modules of the backend crate.
const CRATE_MODULES: [&str; 4] = ["domain", "inbound", "outbound", "settings"];

const WEB_FRAMEWORK: [&str; 4] = ["actix_http", "actix_web", "utoipa", "utoipa_swagger_ui"];
const CULTS_CLIENT: [&str; 2] = ["base64", "reqwest"];

impl Layer {
    const ALL: [Self; 3] = [Self::Domain, Self::Inbound, Self::Outbound];

    const fn dir(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn of(relative: &Path) -> Option<Self> {
        let first = relative.components().next()?.as_os_str().to_str()?;
        Self::ALL.into_iter().find(|layer| layer.dir() == first)
    }

    const fn forbidden_modules(self) -> &'static [&'static str] {
        match self {
            Self::Domain => &["inbound", "outbound", "settings"],
            Self::Inbound => &["outbound", "settings"],
            Self::Outbound => &["inbound"],
        }
    }

    fn forbids_crate(self, name: &str) -> bool {
        match self {
            Self::Domain => WEB_FRAMEWORK.contains(&name) || CULTS_CLIENT.contains(&name),
            Self::Inbound => CULTS_CLIENT.contains(&name),
            Self::Outbound => WEB_FRAMEWORK.contains(&name),
        }
    }

    fn check(self, syntax: &syn::File) -> BTreeSet<String> {
        let mut paths = PathCollector::default();
        paths.visit_file(syntax);

        paths
            .seen
            .iter()
            .filter_map(|segments| match Target::of(segments)? {
                Target::Module(name) if self.forbidden_modules().contains(&name) => Some(format!(
                    "{} module must not depend on crate::{name}",
                    self.dir()
                )),
                Target::Crate(name) if self.forbids_crate(name) => Some(format!(
                    "{} module must not depend on external crate `{name}`",
                    self.dir()
                )),
                _ => None,
            })
            .collect()
    }
}

/// What the leading segments of a path refer to.
enum Target<'a> {
    Module(&'a str),
    Crate(&'a str),
}

impl<'a> Target<'a> {
    fn of(segments: &'a [String]) -> Option<Self> {
        let mut rest = segments.iter().map(String::as_str).peekable();
        let first = *rest.peek()?;
        if first == LIBRARY_CRATE {
            rest.next();
        } else if is_relative(first) {
            while rest.peek().is_some_and(|segment| is_relative(segment)) {
                rest.next();
            }
        } else if !CRATE_MODULES.contains(&first) {
            return Some(Self::Crate(first));
        }
        rest.next()
            .filter(|name| CRATE_MODULES.contains(name))
            .map(Self::Module)
    }
}

fn is_relative(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

/// Collects every path mentioned in a file, including flattened `use` trees.
#[derive(Default)]
struct PathCollector {
    seen: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn flatten_use(&mut self, tree: &syn::UseTree, prefix: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.flatten_use(&path.tree, prefix);
                prefix.pop();
            }
            syn::UseTree::Name(syn::UseName { ident })
            | syn::UseTree::Rename(syn::UseRename { ident, .. }) => {
                let mut full = prefix.clone();
                full.push(ident.to_string());
                self.seen.insert(full);
            }
            syn::UseTree::Glob(_) => {
                let mut full = prefix.clone();
                full.push("*".to_owned());
                self.seen.insert(full);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.flatten_use(item, prefix);
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        let segments: Vec<String> = node
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        if !segments.is_empty() {
            self.seen.insert(segments);
        }
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.flatten_use(&node.tree, &mut Vec::new());
    }
}

fn read_rust_files(
    src_root: &Path,
    dir: &Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            read_rust_files(src_root, &path, sources)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let file = path
                .strip_prefix(src_root)
                .map_err(|err| ArchitectureLintError::Parse {
                    file: path.clone(),
                    message: err.to_string(),
                })?
                .to_path_buf();
            sources.push(LintSource {
                contents: fs::read_to_string(&path)?,
                file,
            });
        }
    }
    Ok(())
}
