mod dto;
mod template_service;

pub use dto::*;
pub use template_service::*;
