//! Static description of the provers we know how to set up.
//!
//! A [ProverSpec] is immutable configuration: where the sources live, where
//! they land on disk and how their native build is invoked. The three
//! built-ins cover SPASS, Prover9 (LADR) and Inkresat.

use std::path::{Path, PathBuf};

/// Everything the runner needs to know about one prover.
///
/// `extract_dir` is explicit rather than derived from the archive name:
/// LADR and Inkresat tarballs carry their own top-level directory while the
/// SPASS one explodes into the current directory, so guessing is a trap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProverSpec {
    /// lowercase identifier, doubles as the CLI subcommand name
    pub name: String,
    pub download_url: String,
    /// file name under `build_root` the archive is stored as
    pub archive_file_name: String,
    /// shared parent directory for all archives and sources
    pub build_root: PathBuf,
    /// where the archive is unpacked, relative to `build_root`; empty means
    /// the build root itself (self-naming archives)
    pub extract_dir: String,
    /// root of the unpacked source tree, relative to `build_root`
    pub source_dir: String,
    /// argv of the native build invocation, run from `source_dir`
    pub build_command: Vec<String>,
    /// main artifact the build leaves behind, relative to `source_dir`
    pub binary: String,
}

impl ProverSpec {
    pub fn archive_path(&self) -> PathBuf {
        self.build_root.join(&self.archive_file_name)
    }

    pub fn extract_path(&self) -> PathBuf {
        if self.extract_dir.is_empty() {
            self.build_root.clone()
        } else {
            self.build_root.join(&self.extract_dir)
        }
    }

    pub fn source_path(&self) -> PathBuf {
        self.build_root.join(&self.source_dir)
    }

    pub fn binary_path(&self) -> PathBuf {
        self.source_path().join(&self.binary)
    }
}

/// Last path segment of `url`, the conventional archive file name.
fn file_name_of(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// SPASS 3.9. The tarball has no top-level directory, so it gets its own
/// extraction target.
pub fn spass(build_root: impl AsRef<Path>) -> ProverSpec {
    let url = "http://www.spass-prover.org/download/sources/spass39.tgz";
    ProverSpec {
        name: "spass".to_string(),
        download_url: url.to_string(),
        archive_file_name: file_name_of(url),
        build_root: build_root.as_ref().to_path_buf(),
        extract_dir: "SPASS-3.9".to_string(),
        source_dir: "SPASS-3.9".to_string(),
        build_command: argv(&["make"]),
        binary: "SPASS".to_string(),
    }
}

/// Prover9, shipped as part of LADR.
pub fn prover9(build_root: impl AsRef<Path>) -> ProverSpec {
    let url = "https://www.cs.unm.edu/~mccune/prover9/download/LADR-2009-11A.tar.gz";
    ProverSpec {
        name: "prover9".to_string(),
        download_url: url.to_string(),
        archive_file_name: file_name_of(url),
        build_root: build_root.as_ref().to_path_buf(),
        extract_dir: String::new(),
        source_dir: "LADR-2009-11A".to_string(),
        build_command: argv(&["make", "all"]),
        binary: "bin/prover9".to_string(),
    }
}

pub fn inkresat(build_root: impl AsRef<Path>) -> ProverSpec {
    let url = "http://www.ps.uni-saarland.de/~kaminski/inkresat/inkresat-1.0.tar.bz2";
    ProverSpec {
        name: "inkresat".to_string(),
        download_url: url.to_string(),
        archive_file_name: file_name_of(url),
        build_root: build_root.as_ref().to_path_buf(),
        extract_dir: String::new(),
        source_dir: "inkresat-1.0".to_string(),
        build_command: argv(&["make"]),
        binary: "inkresat".to_string(),
    }
}

/// All built-in provers, in the order `all` sets them up.
pub fn all(build_root: impl AsRef<Path>) -> Vec<ProverSpec> {
    let build_root = build_root.as_ref();
    vec![spass(build_root), prover9(build_root), inkresat(build_root)]
}

pub fn for_name(name: &str, build_root: impl AsRef<Path>) -> Option<ProverSpec> {
    match name {
        "spass" => Some(spass(build_root)),
        "prover9" => Some(prover9(build_root)),
        "inkresat" => Some(inkresat(build_root)),
        _ => None,
    }
}
