//! Fetch, unpack and build external provers.
//!
//! This module gathers the whole install pipeline. Given a
//! [ProverSpec](crate::provers::ProverSpec) we do, strictly in order:
//! 1. make sure the build root exists
//! 2. download the source archive, unless it is already on disk
//! 3. unpack it (gzip- or bzip2-compressed tar)
//! 4. hand over to the prover's own build tool and wait
//!
//! The first failure aborts the run. There are no retries, no timeouts and
//! no cleanup of whatever the completed steps already wrote.

mod archive;
mod build;
mod download;
mod error;
#[allow(clippy::module_inception)]
mod runner;

pub use archive::{extract, ArchiveFormat};
pub use build::invoke_build;
pub use download::conditional_download;
pub use error::RunnerError;
pub use runner::{run, Stage};
