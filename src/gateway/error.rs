#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("gateway rejected request: status {status}")]
    Rejected { status: u16, body: String },
}
