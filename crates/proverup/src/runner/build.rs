use std::{path::Path, process::Command};

use itertools::Itertools;
use log::{debug, info};

use super::RunnerError;

/// Run the prover's native build tool in `source_dir`.
///
/// Stdout and stderr are inherited so the build chatters straight to the
/// terminal; the output is never interpreted, only the exit status counts.
pub fn invoke_build(source_dir: &Path, command: &[String]) -> Result<(), RunnerError> {
    let (tool, args) = command
        .split_first()
        .ok_or_else(|| RunnerError::MissingBuildTool {
            tool: String::new(),
            source: which::Error::CannotFindBinaryPath,
        })?;
    let tool_path = which::which(tool).map_err(|source| RunnerError::MissingBuildTool {
        tool: tool.clone(),
        source,
    })?;

    let mut cmd = Command::new(tool_path);
    cmd.args(args).current_dir(source_dir);
    info!("running `{}` in {source_dir:?}", command.iter().join(" "));

    let status = cmd.status()?;
    debug!("build finished: {status}");
    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(RunnerError::Build {
            cmd: command.iter().join(" "),
            code,
        }),
        None => Err(RunnerError::BuildKilled {
            cmd: command.iter().join(" "),
        }),
    }
}
