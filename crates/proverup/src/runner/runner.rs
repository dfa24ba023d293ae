use std::fs;

use log::{debug, info};
use serde::Serialize;

use crate::provers::ProverSpec;

use super::{archive::extract, build::invoke_build, download::conditional_download, RunnerError};

/// Checkpoints of one prover's run, in the order they are reached.
///
/// Every failure jumps straight to [`Stage::Failed`]; `Failed` and `Done`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Start,
    DirReady,
    Downloaded,
    Extracted,
    Built,
    Done,
    Failed,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::DirReady => "dir-ready",
            Stage::Downloaded => "downloaded",
            Stage::Extracted => "extracted",
            Stage::Built => "built",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Fetch, unpack and build one prover, strictly in that order.
///
/// The first failing step aborts the run; whatever the previous steps left
/// on disk stays there. Nothing is retried.
pub fn run(spec: &ProverSpec) -> Result<(), RunnerError> {
    info!("setting up {}", spec.name);
    let outcome = run_steps(spec);
    match &outcome {
        Ok(()) => debug!("{}: {}", spec.name, Stage::Done),
        Err(_) => debug!("{}: {}", spec.name, Stage::Failed),
    }
    outcome
}

fn run_steps(spec: &ProverSpec) -> Result<(), RunnerError> {
    fs::create_dir_all(&spec.build_root)?;
    debug!("{}: {}", spec.name, Stage::DirReady);

    conditional_download(&spec.download_url, &spec.archive_path())?;
    debug!("{}: {}", spec.name, Stage::Downloaded);

    // the extraction target must exist before unpacking starts
    fs::create_dir_all(spec.extract_path())?;
    extract(&spec.archive_path(), &spec.extract_path())?;
    debug!("{}: {}", spec.name, Stage::Extracted);

    invoke_build(&spec.source_path(), &spec.build_command)?;
    debug!("{}: {}", spec.name, Stage::Built);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use super::*;

    fn spec(build_root: &Path, build_command: &[&str]) -> ProverSpec {
        ProverSpec {
            name: "mini".to_string(),
            // never contacted: the archive is planted before running
            download_url: "http://prover.invalid/mini-1.0.tar.gz".to_string(),
            archive_file_name: "mini-1.0.tar.gz".to_string(),
            build_root: build_root.to_path_buf(),
            extract_dir: String::new(),
            source_dir: "mini-1.0".to_string(),
            build_command: build_command.iter().map(|s| s.to_string()).collect(),
            binary: "mini".to_string(),
        }
    }

    fn plant_archive(spec: &ProverSpec, entries: &[(&str, &[u8])]) {
        let mut builder = tar::Builder::new(Vec::new());
        for (path, data) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, path, *data).unwrap();
        }
        let tar = builder.into_inner().unwrap();
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&tar).unwrap();
        let gz = encoder.finish().unwrap();

        std::fs::create_dir_all(&spec.build_root).unwrap();
        std::fs::write(spec.archive_path(), gz).unwrap();
    }

    #[test]
    fn planted_archive_runs_to_done() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("provers");
        let spec = spec(&root, &["sh", "-c", "echo ok > build.log"]);
        plant_archive(&spec, &[("mini-1.0/Makefile", b"all:\n\ttrue\n".as_slice())]);

        run(&spec).unwrap();

        // the build ran from the unpacked source root
        assert!(spec.source_path().join("build.log").is_file());
    }

    #[test]
    fn corrupt_archive_stops_before_the_build() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("provers");
        let spec = spec(&root, &["sh", "-c", "echo ok > build.log"]);
        std::fs::create_dir_all(&spec.build_root).unwrap();
        std::fs::write(spec.archive_path(), b"garbage, not gzip").unwrap();

        let err = run(&spec).unwrap_err();

        assert!(matches!(err, RunnerError::Extract { .. }));
        assert!(!spec.source_path().join("build.log").exists());
    }

    #[test]
    fn failing_build_keeps_its_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("provers");
        let spec = spec(&root, &["sh", "-c", "exit 7"]);
        plant_archive(&spec, &[("mini-1.0/Makefile", b"all:\n\ttrue\n".as_slice())]);

        let err = run(&spec).unwrap_err();

        assert!(matches!(err, RunnerError::Build { code: 7, .. }));
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn rerun_is_idempotent_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("provers");
        let spec = spec(&root, &["true"]);
        plant_archive(&spec, &[("mini-1.0/VERSION", b"1.0\n".as_slice())]);

        run(&spec).unwrap();
        let before = std::fs::read(spec.archive_path()).unwrap();
        run(&spec).unwrap();

        assert_eq!(std::fs::read(spec.archive_path()).unwrap(), before);
        assert!(spec.source_path().join("VERSION").is_file());
    }
}
