pub mod clock;
pub mod delay_service;
pub mod dispatch_service;
pub mod eligibility_service;
pub mod mail_service;
pub mod sms_service;
pub mod template_service;
