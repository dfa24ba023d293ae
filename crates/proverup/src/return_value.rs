use std::fmt::Display;

use serde::Serialize;

use crate::status::ProverStatus;

/// Outcome of one prover's run inside `all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub name: String,
    pub result: Result<(), String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum Return {
    Built(String),
    Ran(Vec<RunSummary>),
    Status(Vec<ProverStatus>),
}

impl Return {
    /// `all` succeeds only when every prover did.
    pub fn exit_code(&self) -> i32 {
        match self {
            Return::Built(_) | Return::Status(_) => 0,
            Return::Ran(summaries) => {
                if summaries.iter().all(|s| s.result.is_ok()) {
                    0
                } else {
                    1
                }
            }
        }
    }
}

impl Display for Return {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Return::Built(name) => write!(f, "set up {name}"),
            Return::Ran(summaries) => {
                write!(f, "ran every prover:")?;
                summaries.iter().try_for_each(|s| match &s.result {
                    Ok(()) => write!(f, "\n\t- {}: ok", s.name),
                    Err(e) => write!(f, "\n\t- {}: failed ({e})", s.name),
                })
            }
            Return::Status(statuses) => {
                write!(f, "prover status:")?;
                statuses.iter().try_for_each(|s| write!(f, "\n\t- {s}"))
            }
        }
    }
}
