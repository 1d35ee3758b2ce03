mod delay_service;
mod delay_service_impl;
mod dto;
mod holiday_calendar;

pub use delay_service::*;
pub use delay_service_impl::*;
pub use dto::*;
pub use holiday_calendar::*;
