mod mail_service;
mod mail_service_impl;

pub use mail_service::*;
pub use mail_service_impl::*;
