pub mod cli;
pub mod provers;
pub mod runner;
pub mod status;

mod error;
pub use error::{Error, Result};

pub use return_value::{Return, RunSummary};
mod return_value;

use std::path::Path;

use log::warn;

use crate::{
    cli::{Args, Command},
    status::ProverStatus,
};

pub fn run(args: &Args) -> Result<Return> {
    match args.command {
        Command::Spass => run_one(provers::spass(&args.build_root)),
        Command::Prover9 => run_one(provers::prover9(&args.build_root)),
        Command::Inkresat => run_one(provers::inkresat(&args.build_root)),
        Command::All => Ok(run_all(&args.build_root)),
        Command::Status => Ok(Return::Status(
            provers::all(&args.build_root)
                .iter()
                .map(ProverStatus::inspect)
                .collect(),
        )),
    }
}

fn run_one(spec: provers::ProverSpec) -> Result<Return> {
    runner::run(&spec)?;
    Ok(Return::Built(spec.name))
}

/// Set up every built-in prover in order.
///
/// The runs are independent of each other, so a failing one is reported and
/// the next one still gets its turn.
fn run_all(build_root: &Path) -> Return {
    let summaries = provers::all(build_root)
        .into_iter()
        .map(|spec| {
            let name = spec.name.clone();
            let result = runner::run(&spec).map_err(|e| {
                warn!("{name}: {e}");
                e.to_string()
            });
            RunSummary { name, result }
        })
        .collect();
    Return::Ran(summaries)
}

use std::io::Write;
pub fn init_logger() {
    env_logger::Builder::new()
        .format(|buf, record| {
            let str = record.args().to_string().replace("\n", "\n\t");
            writeln!(
                buf,
                "[{}] in {}:{}\n\t{}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                str
            )
        })
        .parse_default_env()
        .init();
}
