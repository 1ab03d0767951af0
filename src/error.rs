use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EqlpError {
    /// The problem text could not be read as a linear program.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A programmatically built problem has inconsistent dimensions or values.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),
}

impl EqlpError {
    pub fn malformed(msg: String) -> Self {
        Self::MalformedInput(msg)
    }

    pub fn invalid(msg: String) -> Self {
        Self::InvalidProblem(msg)
    }
}
