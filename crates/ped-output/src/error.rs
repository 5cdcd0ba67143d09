use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot write run output: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// A record arrived after [`Recorder::finish`][crate::Recorder::finish].
    #[error("{0} recorder is already finished")]
    Finished(&'static str),
}

pub type OutputResult<T> = Result<T, OutputError>;
