mod eligibility_service;
mod eligibility_service_impl;

pub use eligibility_service::*;
pub use eligibility_service_impl::*;
