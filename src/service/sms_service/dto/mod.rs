mod sms_service_config;

pub use sms_service_config::*;
