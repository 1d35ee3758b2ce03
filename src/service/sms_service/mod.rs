mod dto;
mod sms_service;
mod sms_service_impl;

pub use dto::*;
pub use sms_service::*;
pub use sms_service_impl::*;
