use super::Error;
use crate::dto::{MailData, MailTemplate};
use async_trait::async_trait;

///
/// Outbound mail transport. Template rendering and SMTP/API detail belong
/// to the embedding application; the core only picks the template key and
/// fills the data bag.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailGateway: Send + Sync {
    async fn send(
        &self,
        to_email: &str,
        to_name: &str,
        subject: &str,
        template: MailTemplate,
        data: &MailData,
    ) -> Result<(), Error>;
}
