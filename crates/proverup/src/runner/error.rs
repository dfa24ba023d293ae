use std::path::PathBuf;

/// Errors raised while fetching, unpacking or building a prover
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("downloading {url} failed: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server answered {status} for {url}")]
    DownloadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("don't know how to unpack {0:?}")]
    UnsupportedArchive(PathBuf),

    #[error("couldn't unpack {archive:?}: {source}")]
    Extract {
        archive: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't find {tool:?} in PATH: {source}")]
    MissingBuildTool {
        tool: String,
        #[source]
        source: which::Error,
    },

    #[error("`{cmd}` exited with code {code}")]
    Build { cmd: String, code: i32 },

    #[error("`{cmd}` was terminated by a signal")]
    BuildKilled { cmd: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RunnerError {
    /// Exit code to report for this failure.
    ///
    /// A failing build propagates the child's own code, everything else
    /// collapses to `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::Build { code, .. } => *code,
            _ => 1,
        }
    }
}
