mod error;
mod job_store;

pub use error::*;
pub use job_store::*;
