#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("job not exist")]
    JobNotExist,

    #[error("user not exist")]
    UserNotExist,

    #[error("backend error: {0}")]
    Backend(#[from] anyhow::Error),
}
