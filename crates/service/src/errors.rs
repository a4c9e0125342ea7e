use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn round_out_of_range(round: usize, limit: usize) -> Self {
        Self::Validation(format!("round {round} is out of range (must be below {limit})"))
    }
}
