use crate::runner::RunnerError;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Runner(#[from] RunnerError),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl Error {
    /// See [RunnerError::exit_code].
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Runner(e) => e.exit_code(),
            Error::IO(_) => 1,
        }
    }
}
