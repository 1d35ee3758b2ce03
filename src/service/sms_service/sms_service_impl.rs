use super::{SmsService, SmsServiceConfig};
use crate::{
    dto::Job,
    error::Error,
    gateway::SmsGateway,
    repository::JobStore,
    service::{eligibility_service::EligibilityService, template_service::TemplateService},
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct SmsServiceImpl {
    config: SmsServiceConfig,
    store: Arc<dyn JobStore>,
    eligibility: Arc<dyn EligibilityService>,
    sms_gateway: Arc<dyn SmsGateway>,
    templates: TemplateService,
}

impl SmsServiceImpl {
    pub fn new(
        config: SmsServiceConfig,
        store: Arc<dyn JobStore>,
        eligibility: Arc<dyn EligibilityService>,
        sms_gateway: Arc<dyn SmsGateway>,
        templates: TemplateService,
    ) -> Self {
        Self {
            config,
            store,
            eligibility,
            sms_gateway,
            templates,
        }
    }
}

#[async_trait]
impl SmsService for SmsServiceImpl {
    async fn send_to_potential_translators(&self, job: &Job) -> Result<usize, Error> {
        tracing::info!(job_id = job.id, "sending booking sms to translators");

        let pool = self.store.potential_translators(job.id).await?;
        let translators = self.eligibility.filter_candidates(job, pool, None).await?;

        let owner = self.store.find_user(job.owner_user_id).await?;
        let message = self.templates.sms_message(job, owner.city.as_deref())?;
        if message.is_empty() {
            // neither phone nor physical; already logged by the template build
            return Ok(0);
        }

        for translator in &translators {
            let Some(mobile) = translator.mobile.as_deref() else {
                tracing::warn!(
                    job_id = job.id,
                    email = %translator.email,
                    "translator has no mobile number"
                );
                continue;
            };

            match self
                .sms_gateway
                .send(&self.config.origin_number, mobile, &message)
                .await
            {
                Ok(status) => tracing::info!(
                    job_id = job.id,
                    email = %translator.email,
                    mobile,
                    status,
                    "sms sent"
                ),
                Err(err) => tracing::warn!(
                    job_id = job.id,
                    email = %translator.email,
                    err = %err,
                    "sms send failed"
                ),
            }
        }

        Ok(translators.len())
    }
}
