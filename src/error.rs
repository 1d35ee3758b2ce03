use crate::repository;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("store error: {0}")]
    Store(#[from] repository::Error),
}
