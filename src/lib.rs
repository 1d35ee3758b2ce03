//!
//! Notification dispatch core for interpretation bookings.
//!
//! Decides which translators should hear about a job event, which message
//! and channel fits the job, and whether delivery has to wait for the next
//! business window. Storage and outbound transports are collaborators
//! behind [`repository::JobStore`] and the [`gateway`] traits; the services
//! in [`service`] are pure coordination on top of them.
//!

pub mod application;
pub mod dto;
pub mod error;
pub mod gateway;
pub mod repository;
pub mod service;

pub use error::Error;
