use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// directory the archives and source trees are placed under
    #[arg(long, value_name = "DIR", default_value = "provers")]
    pub build_root: PathBuf,

    /// how the outcome is printed
    #[arg(long, value_enum, default_value_t = Output::Text)]
    pub output: Output,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// fetch and build SPASS 3.9
    Spass,
    /// fetch and build Prover9 (LADR)
    Prover9,
    /// fetch and build Inkresat
    Inkresat,
    /// set up every known prover, keeping going past failures
    All,
    /// report how far each prover's setup has gotten
    ///
    /// Only looks at the filesystem; no network request is ever made.
    Status,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Text,
    Json,
}
