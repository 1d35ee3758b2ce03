mod delay_service_config;

pub use delay_service_config::*;
