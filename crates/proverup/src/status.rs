//! Read-only inspection of what earlier runs left on disk.

use std::path::Path;

use serde::Serialize;

use crate::{provers::ProverSpec, runner::Stage};

/// Filesystem evidence of how far a prover's setup has gotten.
///
/// Purely observational: inspecting never touches the network and never
/// mutates the build root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProverStatus {
    pub name: String,
    pub archive: bool,
    pub source: bool,
    pub binary: bool,
    pub reached: Stage,
}

impl ProverStatus {
    pub fn inspect(spec: &ProverSpec) -> Self {
        let archive = spec.archive_path().is_file();
        let source = spec.source_path().is_dir();
        let binary = is_executable(&spec.binary_path());
        let reached = if binary {
            Stage::Built
        } else if source {
            Stage::Extracted
        } else if archive {
            Stage::Downloaded
        } else {
            Stage::Start
        };
        ProverStatus {
            name: spec.name.clone(),
            archive,
            source,
            binary,
            reached,
        }
    }
}

impl std::fmt::Display for ProverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.reached)
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
