use super::MailService;
use crate::{
    dto::{Job, MailData, MailExtra, MailTemplate, User},
    error::Error,
    gateway::MailGateway,
    repository::JobStore,
    service::template_service::TemplateService,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct MailServiceImpl {
    store: Arc<dyn JobStore>,
    mail_gateway: Arc<dyn MailGateway>,
    templates: TemplateService,
}

impl MailServiceImpl {
    pub fn new(
        store: Arc<dyn JobStore>,
        mail_gateway: Arc<dyn MailGateway>,
        templates: TemplateService,
    ) -> Self {
        Self {
            store,
            mail_gateway,
            templates,
        }
    }

    /// Best-effort single send; delivery errors are logged and swallowed
    async fn try_send(
        &self,
        job_id: i64,
        to_email: &str,
        to_name: &str,
        subject: &str,
        template: MailTemplate,
        data: &MailData,
    ) {
        match self
            .mail_gateway
            .send(to_email, to_name, subject, template, data)
            .await
        {
            Ok(()) => tracing::info!(job_id, to_email, template = template.as_ref(), "mail sent"),
            Err(err) => tracing::warn!(
                job_id,
                to_email,
                template = template.as_ref(),
                err = %err,
                "mail send failed"
            ),
        }
    }

    /// Override email on the booking beats the owner's profile email
    fn customer_email<'a>(job: &'a Job, owner: &'a User) -> &'a str {
        job.user_email.as_deref().unwrap_or(&owner.email)
    }
}

#[async_trait]
impl MailService for MailServiceImpl {
    async fn send_session_ended(&self, job: &Job, session_time: &str) -> Result<(), Error> {
        tracing::info!(job_id = job.id, "sending session-ended mails");

        let owner = self.store.find_user(job.owner_user_id).await?;
        let subject = self.templates.session_ended_subject(job.id);

        let data = MailData {
            recipient_name: owner.name.clone(),
            job_id: job.id,
            extra: MailExtra::SessionEnded {
                session_time: session_time.to_string(),
                for_text: "faktura",
            },
        };
        self.try_send(
            job.id,
            Self::customer_email(job, &owner),
            &owner.name,
            &subject,
            MailTemplate::SessionEnded,
            &data,
        )
        .await;

        if let Some(translator) = self.store.assigned_translator(job.id).await? {
            let data = MailData {
                recipient_name: translator.name.clone(),
                job_id: job.id,
                extra: MailExtra::SessionEnded {
                    session_time: session_time.to_string(),
                    for_text: "lön",
                },
            };
            self.try_send(
                job.id,
                &translator.email,
                &translator.name,
                &subject,
                MailTemplate::SessionEnded,
                &data,
            )
            .await;
        }

        Ok(())
    }

    async fn send_changed_translator(
        &self,
        job: &Job,
        old_translator: Option<User>,
        new_translator: &User,
    ) -> Result<(), Error> {
        tracing::info!(job_id = job.id, "sending changed-translator mails");

        let owner = self.store.find_user(job.owner_user_id).await?;
        let subject = self.templates.changed_translator_subject(job.id);

        let data = MailData {
            recipient_name: owner.name.clone(),
            job_id: job.id,
            extra: MailExtra::None,
        };
        self.try_send(
            job.id,
            Self::customer_email(job, &owner),
            &owner.name,
            &subject,
            MailTemplate::ChangedTranslatorCustomer,
            &data,
        )
        .await;

        if let Some(old_translator) = old_translator {
            let data = MailData {
                recipient_name: old_translator.name.clone(),
                job_id: job.id,
                extra: MailExtra::None,
            };
            self.try_send(
                job.id,
                &old_translator.email,
                &old_translator.name,
                &subject,
                MailTemplate::ChangedTranslatorOldTranslator,
                &data,
            )
            .await;
        }

        let data = MailData {
            recipient_name: new_translator.name.clone(),
            job_id: job.id,
            extra: MailExtra::None,
        };
        self.try_send(
            job.id,
            &new_translator.email,
            &new_translator.name,
            &subject,
            MailTemplate::ChangedTranslatorNewTranslator,
            &data,
        )
        .await;

        Ok(())
    }

    async fn send_changed_date(&self, job: &Job, old_time: &str) -> Result<(), Error> {
        tracing::info!(job_id = job.id, "sending changed-date mails");

        let owner = self.store.find_user(job.owner_user_id).await?;
        let subject = self.templates.changed_booking_subject(job.id);

        let data = MailData {
            recipient_name: owner.name.clone(),
            job_id: job.id,
            extra: MailExtra::OldTime(old_time.to_string()),
        };
        self.try_send(
            job.id,
            Self::customer_email(job, &owner),
            &owner.name,
            &subject,
            MailTemplate::ChangedDate,
            &data,
        )
        .await;

        if let Some(translator) = self.store.assigned_translator(job.id).await? {
            let data = MailData {
                recipient_name: translator.name.clone(),
                job_id: job.id,
                extra: MailExtra::OldTime(old_time.to_string()),
            };
            self.try_send(
                job.id,
                &translator.email,
                &translator.name,
                &subject,
                MailTemplate::ChangedDate,
                &data,
            )
            .await;
        }

        Ok(())
    }

    async fn send_changed_lang(&self, job: &Job, old_lang: &str) -> Result<(), Error> {
        tracing::info!(job_id = job.id, "sending changed-language mails");

        let owner = self.store.find_user(job.owner_user_id).await?;
        let subject = self.templates.changed_booking_subject(job.id);

        let data = MailData {
            recipient_name: owner.name.clone(),
            job_id: job.id,
            extra: MailExtra::OldLang(old_lang.to_string()),
        };
        self.try_send(
            job.id,
            Self::customer_email(job, &owner),
            &owner.name,
            &subject,
            MailTemplate::ChangedLang,
            &data,
        )
        .await;

        if let Some(translator) = self.store.assigned_translator(job.id).await? {
            let data = MailData {
                recipient_name: translator.name.clone(),
                job_id: job.id,
                extra: MailExtra::OldLang(old_lang.to_string()),
            };
            self.try_send(
                job.id,
                &translator.email,
                &translator.name,
                &subject,
                MailTemplate::ChangedLang,
                &data,
            )
            .await;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dto::{JobStatus, NotificationPreferences, UserRole, UserStatus},
        gateway::{self, MockMailGateway},
        repository::MockJobStore,
        service::template_service::MessageCatalog,
    };
    use time::macros::datetime;
    use uuid::Uuid;

    fn job() -> Job {
        Job {
            id: 11,
            owner_user_id: Uuid::new_v4(),
            from_language_id: 3,
            immediate: false,
            duration: Some(60),
            due: Some(datetime!(2026-04-01 10:00:00 UTC)),
            status: JobStatus::Completed,
            job_type: None,
            gender: None,
            certified: None,
            customer_phone_type: true,
            customer_physical_type: false,
            city: None,
            user_email: None,
        }
    }

    fn user(role: UserRole, name: &str, email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            role,
            status: UserStatus::Active,
            name: name.to_string(),
            email: email.to_string(),
            mobile: None,
            city: None,
            customer_type: None,
            preferences: NotificationPreferences::default(),
        }
    }

    fn store_with_owner(job: &Job, assigned: Option<User>) -> MockJobStore {
        let mut store = MockJobStore::new();
        let owner_id = job.owner_user_id;
        store.expect_find_user().returning(move |id| {
            assert_eq!(id, owner_id);
            Ok(user(UserRole::Customer, "Kund Kundsson", "kund@example.com"))
        });
        store
            .expect_assigned_translator()
            .return_once(move |_| Ok(assigned));
        store
    }

    fn service(store: MockJobStore, mail_gateway: MockMailGateway) -> MailServiceImpl {
        MailServiceImpl::new(
            Arc::new(store),
            Arc::new(mail_gateway),
            TemplateService::new(MessageCatalog::default()),
        )
    }

    #[tokio::test]
    async fn session_ended_mails_customer_and_translator() {
        let job = job();
        let translator = user(UserRole::Translator, "Tolk Tolksson", "tolk@example.com");
        let mut mail_gateway = MockMailGateway::new();
        mail_gateway
            .expect_send()
            .withf(|to, _, _, template, data| {
                to == "kund@example.com"
                    && *template == MailTemplate::SessionEnded
                    && matches!(
                        &data.extra,
                        MailExtra::SessionEnded { for_text: "faktura", .. }
                    )
            })
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        mail_gateway
            .expect_send()
            .withf(|to, _, _, template, data| {
                to == "tolk@example.com"
                    && *template == MailTemplate::SessionEnded
                    && matches!(
                        &data.extra,
                        MailExtra::SessionEnded { for_text: "lön", .. }
                    )
            })
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        let service = service(store_with_owner(&job, Some(translator)), mail_gateway);

        service.send_session_ended(&job, "1 tim 30 min").await.unwrap();
    }

    #[tokio::test]
    async fn session_ended_override_email_wins() {
        let mut job = job();
        job.user_email = Some("faktura@example.com".to_string());
        let mut mail_gateway = MockMailGateway::new();
        mail_gateway
            .expect_send()
            .withf(|to, _, _, _, _| to == "faktura@example.com")
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        let service = service(store_with_owner(&job, None), mail_gateway);

        service.send_session_ended(&job, "1 tim 30 min").await.unwrap();
    }

    #[tokio::test]
    async fn reassignment_without_previous_translator_sends_two_mails() {
        let job = job();
        let new_translator = user(UserRole::Translator, "Ny Tolk", "ny@example.com");
        let mut mail_gateway = MockMailGateway::new();
        mail_gateway
            .expect_send()
            .withf(|_, _, _, template, _| *template == MailTemplate::ChangedTranslatorCustomer)
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        mail_gateway
            .expect_send()
            .withf(|to, _, _, template, _| {
                to == "ny@example.com" && *template == MailTemplate::ChangedTranslatorNewTranslator
            })
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        let mut store = MockJobStore::new();
        let owner_id = job.owner_user_id;
        store.expect_find_user().returning(move |id| {
            assert_eq!(id, owner_id);
            Ok(user(UserRole::Customer, "Kund Kundsson", "kund@example.com"))
        });
        let service = service(store, mail_gateway);

        service
            .send_changed_translator(&job, None, &new_translator)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn reassignment_with_previous_translator_sends_three_mails() {
        let job = job();
        let old_translator = user(UserRole::Translator, "Gammal Tolk", "gammal@example.com");
        let new_translator = user(UserRole::Translator, "Ny Tolk", "ny@example.com");
        let mut mail_gateway = MockMailGateway::new();
        mail_gateway
            .expect_send()
            .times(3)
            .returning(|_, _, _, _, _| Ok(()));
        let mut store = MockJobStore::new();
        store.expect_find_user().returning(move |_| {
            Ok(user(UserRole::Customer, "Kund Kundsson", "kund@example.com"))
        });
        let service = service(store, mail_gateway);

        service
            .send_changed_translator(&job, Some(old_translator), &new_translator)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failed_customer_mail_does_not_block_translator_mail() {
        let job = job();
        let translator = user(UserRole::Translator, "Tolk Tolksson", "tolk@example.com");
        let mut mail_gateway = MockMailGateway::new();
        mail_gateway
            .expect_send()
            .withf(|to, _, _, _, _| to == "kund@example.com")
            .times(1)
            .returning(|_, _, _, _, _| {
                Err(gateway::Error::Rejected {
                    status: 500,
                    body: "smtp down".to_string(),
                })
            });
        mail_gateway
            .expect_send()
            .withf(|to, _, _, _, _| to == "tolk@example.com")
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        let service = service(store_with_owner(&job, Some(translator)), mail_gateway);

        let result = service.send_changed_date(&job, "2026-03-30 10:00:00").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn changed_lang_carries_old_language() {
        let job = job();
        let mut mail_gateway = MockMailGateway::new();
        mail_gateway
            .expect_send()
            .withf(|_, _, _, template, data| {
                *template == MailTemplate::ChangedLang
                    && matches!(&data.extra, MailExtra::OldLang(old) if old == "tyska")
            })
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        let service = service(store_with_owner(&job, None), mail_gateway);

        service.send_changed_lang(&job, "tyska").await.unwrap();
    }
}
