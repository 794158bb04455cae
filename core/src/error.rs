use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwardError {
    #[error("Entropy source failed during reservoir refill: {0}")]
    Entropy(#[from] rand::Error),
}

pub type AwardResult<T> = Result<T, AwardError>;
