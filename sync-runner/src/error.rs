use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Logger initialization error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, RunnerError>;
