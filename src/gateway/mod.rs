//!
//! Outbound transport seams. The dispatch services only see the traits;
//! HTTP detail lives in the implementations so the core stays testable
//! without network access.
//!

mod error;
mod http_sms_gateway;
mod mail_gateway;
mod onesignal_push_gateway;
mod push_gateway;
mod sms_gateway;

pub use error::*;
pub use http_sms_gateway::*;
pub use mail_gateway::*;
pub use onesignal_push_gateway::*;
pub use push_gateway::*;
pub use sms_gateway::*;
