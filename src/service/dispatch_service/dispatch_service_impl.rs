use super::DispatchService;
use crate::{
    dto::{
        CohortOutcome, CohortStatus, DeliveryCohort, DispatchResult, Job, JobData,
        NotificationPayload, User,
    },
    error::Error,
    gateway::PushGateway,
    repository::JobStore,
    service::{
        delay_service::DelayService, eligibility_service::EligibilityService,
        template_service::TemplateService,
    },
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct DispatchServiceImpl {
    store: Arc<dyn JobStore>,
    eligibility: Arc<dyn EligibilityService>,
    delay: Arc<dyn DelayService>,
    push_gateway: Arc<dyn PushGateway>,
    templates: TemplateService,
}

impl DispatchServiceImpl {
    pub fn new(
        store: Arc<dyn JobStore>,
        eligibility: Arc<dyn EligibilityService>,
        delay: Arc<dyn DelayService>,
        push_gateway: Arc<dyn PushGateway>,
        templates: TemplateService,
    ) -> Self {
        Self {
            store,
            eligibility,
            delay,
            push_gateway,
            templates,
        }
    }

    fn partition(&self, eligible: Vec<User>) -> (DeliveryCohort, DeliveryCohort) {
        let (delayed, immediate): (Vec<User>, Vec<User>) = eligible
            .into_iter()
            .partition(|user| self.delay.needs_delay(user));

        (
            DeliveryCohort {
                recipients: immediate,
                delayed: false,
            },
            DeliveryCohort {
                recipients: delayed,
                delayed: true,
            },
        )
    }

    /// One gateway call per non-empty cohort; failures stay in the outcome
    async fn send_cohort(
        &self,
        payload: &NotificationPayload,
        cohort: &DeliveryCohort,
    ) -> CohortOutcome {
        if cohort.recipients.is_empty() {
            return CohortOutcome::skipped();
        }

        let emails = cohort
            .recipients
            .iter()
            .map(|user| user.email.clone())
            .collect::<Vec<_>>();

        match self.push_gateway.send(payload, &emails).await {
            Ok(result) => {
                tracing::info!(
                    job_id = payload.job_id,
                    notification_type = %payload.notification_type,
                    delayed = cohort.delayed,
                    recipients = cohort.recipients.len(),
                    status = result.status,
                    "cohort push sent"
                );
                CohortOutcome {
                    recipients: cohort.recipients.len(),
                    status: CohortStatus::Sent {
                        http_status: result.status,
                    },
                }
            }
            Err(err) => {
                tracing::warn!(
                    job_id = payload.job_id,
                    notification_type = %payload.notification_type,
                    delayed = cohort.delayed,
                    err = %err,
                    "cohort push failed"
                );
                CohortOutcome {
                    recipients: cohort.recipients.len(),
                    status: CohortStatus::Failed,
                }
            }
        }
    }

    ///
    /// Single-recipient push honoring the global opt-out and the
    /// night-time delay of that one user
    ///
    async fn send_to_user(&self, payload: NotificationPayload, user: &User) {
        let payload = if self.delay.needs_delay(user) {
            payload.delayed_until(self.delay.next_business_time())
        } else {
            payload
        };
        let cohort = DeliveryCohort {
            recipients: vec![user.clone()],
            delayed: payload.send_after.is_some(),
        };

        self.send_cohort(&payload, &cohort).await;
    }
}

#[async_trait]
impl DispatchService for DispatchServiceImpl {
    async fn notify_suitable_translators(
        &self,
        job: &Job,
        data: JobData,
        exclude_user_id: Option<Uuid>,
    ) -> Result<DispatchResult, Error> {
        tracing::info!(job_id = job.id, "dispatching suitable-job push");

        let eligible = self
            .eligibility
            .eligible_translators(job, exclude_user_id)
            .await?;
        if eligible.is_empty() {
            tracing::info!(job_id = job.id, "no eligible recipients");
            return Ok(DispatchResult::empty());
        }

        let language = self.store.language_name(job.from_language_id).await?;
        let payload = self.templates.suitable_job_payload(job, &language, data)?;

        let (immediate, delayed) = self.partition(eligible);
        let delayed_payload = payload
            .clone()
            .delayed_until(self.delay.next_business_time());

        let (immediate_outcome, delayed_outcome) = tokio::join!(
            self.send_cohort(&payload, &immediate),
            self.send_cohort(&delayed_payload, &delayed),
        );

        let result = DispatchResult {
            immediate: immediate_outcome,
            delayed: delayed_outcome,
        };
        tracing::info!(job_id = job.id, ?result, "dispatch finished");

        Ok(result)
    }

    async fn notify_admin_cancelled(&self, job_id: i64) -> Result<DispatchResult, Error> {
        tracing::info!(job_id, "dispatching admin-cancel push");

        let job = self.store.find_job(job_id).await?;
        let owner = self.store.find_user(job.owner_user_id).await?;
        let data = JobData::from_job(&job, &owner);

        self.notify_suitable_translators(&job, data, None).await
    }

    async fn notify_expired(&self, job: &Job, user: &User) -> Result<(), Error> {
        if user.preferences.suppress_all_notifications {
            tracing::info!(job_id = job.id, "owner opted out of notifications");
            return Ok(());
        }

        let language = self.store.language_name(job.from_language_id).await?;
        let data = JobData::from_job(job, user);
        let payload = self.templates.job_expired_payload(job, &language, data)?;

        self.send_to_user(payload, user).await;

        Ok(())
    }

    async fn notify_session_start_reminder(
        &self,
        user: &User,
        job: &Job,
        language: &str,
    ) -> Result<(), Error> {
        if user.preferences.suppress_all_notifications {
            tracing::info!(job_id = job.id, "translator opted out of notifications");
            return Ok(());
        }

        let data = JobData::from_job(job, user);
        let payload = self
            .templates
            .session_start_remind_payload(job, language, data)?;

        self.send_to_user(payload, user).await;
        tracing::info!(job_id = job.id, "session start reminder dispatched");

        Ok(())
    }

    async fn notify_assignment_confirmed(
        &self,
        user: &User,
        job: &Job,
        language: &str,
    ) -> Result<(), Error> {
        if user.preferences.suppress_all_notifications {
            tracing::info!(job_id = job.id, "translator opted out of notifications");
            return Ok(());
        }

        let data = JobData::from_job(job, user);
        let payload = self
            .templates
            .assignment_confirmed_payload(job, language, data)?;

        self.send_to_user(payload, user).await;

        Ok(())
    }
}
