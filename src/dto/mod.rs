//!
//! Domain value types passed between the job store, the dispatch services
//! and the outbound gateways
//!

mod job;
mod mail;
mod notification;
mod potential_assignment;
mod user;

pub use job::*;
pub use mail::*;
pub use notification::*;
pub use potential_assignment::*;
pub use user::*;
