use super::MessageCatalog;
use crate::{
    dto::{Job, JobData, NotificationPayload, NotificationType, SoundProfile},
    error::Error,
};
use std::collections::BTreeMap;
use time::{macros::format_description, OffsetDateTime};

///
/// Maps job attributes to localized message text and a channel sound
/// profile. Pure value computation; malformed jobs (missing due or
/// duration) fail the build instead of rendering broken text.
///
pub struct TemplateService {
    catalog: MessageCatalog,
}

impl TemplateService {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    ///
    /// "New booking" push for the suitable-translators dispatch.
    /// Emergency bookings get their own phrasing and sound.
    ///
    pub fn suitable_job_payload(
        &self,
        job: &Job,
        language: &str,
        mut data: JobData,
    ) -> Result<NotificationPayload, Error> {
        let duration = Self::require_duration(job)?;
        let due = Self::require_due(job)?;

        let text = if job.immediate {
            render(
                &self.catalog.new_emergency_booking,
                &[("language", language), ("duration", &duration.to_string())],
            )
        } else {
            render(
                &self.catalog.new_booking,
                &[
                    ("language", language),
                    ("duration", &duration.to_string()),
                    ("due", &format_due(due)),
                ],
            )
        };
        let sounds = if job.immediate {
            SoundProfile::named("emergency_booking")
        } else {
            SoundProfile::named("normal_booking")
        };

        data.language = Some(language.to_string());
        data.notification_type = NotificationType::SuitableJob;

        Ok(Self::payload(
            job,
            NotificationType::SuitableJob,
            text,
            sounds,
            data,
        ))
    }

    /// "No translator accepted your booking" push to the job owner
    pub fn job_expired_payload(
        &self,
        job: &Job,
        language: &str,
        mut data: JobData,
    ) -> Result<NotificationPayload, Error> {
        let duration = Self::require_duration(job)?;
        let due = Self::require_due(job)?;

        let text = render(
            &self.catalog.job_expired,
            &[
                ("language", language),
                ("duration", &duration.to_string()),
                ("due", &format_due(due)),
            ],
        );

        data.language = Some(language.to_string());
        data.notification_type = NotificationType::JobExpired;

        Ok(Self::payload(
            job,
            NotificationType::JobExpired,
            text,
            SoundProfile::default(),
            data,
        ))
    }

    /// Session start reminder; phrasing branches on physical vs phone
    pub fn session_start_remind_payload(
        &self,
        job: &Job,
        language: &str,
        mut data: JobData,
    ) -> Result<NotificationPayload, Error> {
        let duration = Self::require_duration(job)?;
        let due = Self::require_due(job)?;

        let template = if job.customer_physical_type {
            &self.catalog.session_start_remind_physical
        } else {
            &self.catalog.session_start_remind_phone
        };
        let text = render(
            template,
            &[
                ("language", language),
                ("town", job.city.as_deref().unwrap_or_default()),
                ("time", &format_time(due)),
                ("date", &format_date(due)),
                ("duration", &duration.to_string()),
            ],
        );

        data.language = Some(language.to_string());
        data.notification_type = NotificationType::SessionStartRemind;

        Ok(Self::payload(
            job,
            NotificationType::SessionStartRemind,
            text,
            SoundProfile::default(),
            data,
        ))
    }

    /// "You have been assigned" push sent when a pending change resolves
    pub fn assignment_confirmed_payload(
        &self,
        job: &Job,
        language: &str,
        mut data: JobData,
    ) -> Result<NotificationPayload, Error> {
        let due = Self::require_due(job)?;

        let template = if job.customer_physical_type {
            &self.catalog.assignment_confirmed_physical
        } else {
            &self.catalog.assignment_confirmed_phone
        };
        let text = render(
            template,
            &[
                ("language", language),
                ("time", &format_time(due)),
                ("date", &format_date(due)),
            ],
        );

        data.language = Some(language.to_string());
        data.notification_type = NotificationType::SessionStartRemind;

        Ok(Self::payload(
            job,
            NotificationType::SessionStartRemind,
            text,
            SoundProfile::default(),
            data,
        ))
    }

    ///
    /// SMS text for the job. Physical-only jobs get the physical template,
    /// phone-only the phone one. A job flagged as both falls back to the
    /// phone template; a job flagged as neither renders an empty message
    /// that the caller must not transmit.
    ///
    pub fn sms_message(&self, job: &Job, city_fallback: Option<&str>) -> Result<String, Error> {
        let duration = Self::require_duration(job)?;
        let due = Self::require_due(job)?;

        let date_format = format_description!("[day].[month].[year]");
        let date = due
            .format(&date_format)
            .map_err(|_| Error::Validation("job due is not formattable"))?;
        let time = format_time(due);
        let duration = format_duration(duration);
        let job_id = job.id.to_string();
        let town = job.city.as_deref().or(city_fallback).unwrap_or_default();

        let vars: &[(&str, &str)] = &[
            ("date", &date),
            ("time", &time),
            ("duration", &duration),
            ("job_id", &job_id),
            ("town", town),
        ];

        let message = match (job.customer_physical_type, job.customer_phone_type) {
            (true, false) => render(&self.catalog.sms_physical_job, vars),
            (false, true) => render(&self.catalog.sms_phone_job, vars),
            (true, true) => {
                tracing::warn!(
                    job_id = job.id,
                    "job flagged both physical and phone, falling back to phone sms"
                );
                render(&self.catalog.sms_phone_job, vars)
            }
            (false, false) => {
                tracing::warn!(job_id = job.id, "job flagged neither physical nor phone");
                String::new()
            }
        };

        Ok(message)
    }

    pub fn session_ended_subject(&self, job_id: i64) -> String {
        render(
            &self.catalog.mail_session_ended_subject,
            &[("job_id", &job_id.to_string())],
        )
    }

    pub fn changed_translator_subject(&self, job_id: i64) -> String {
        render(
            &self.catalog.mail_changed_translator_subject,
            &[("job_id", &job_id.to_string())],
        )
    }

    pub fn changed_booking_subject(&self, job_id: i64) -> String {
        render(
            &self.catalog.mail_changed_booking_subject,
            &[("job_id", &job_id.to_string())],
        )
    }

    fn payload(
        job: &Job,
        notification_type: NotificationType,
        text: String,
        sounds: SoundProfile,
        data: JobData,
    ) -> NotificationPayload {
        NotificationPayload {
            job_id: job.id,
            notification_type,
            contents: BTreeMap::from([("en".to_string(), text)]),
            sounds,
            data,
            send_after: None,
        }
    }

    fn require_due(job: &Job) -> Result<OffsetDateTime, Error> {
        job.due.ok_or(Error::Validation("job has no due time"))
    }

    fn require_duration(job: &Job) -> Result<u32, Error> {
        job.duration.ok_or(Error::Validation("job has no duration"))
    }
}

fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut text = template.to_string();
    for (name, value) in vars {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}

/// `45 -> "45min"`, `60 -> "1h"`, `125 -> "2h 05min"`
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}min");
    }
    if minutes == 60 {
        return "1h".to_string();
    }

    format!("{}h {:02}min", minutes / 60, minutes % 60)
}

fn format_due(due: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    due.format(&format).unwrap_or_default()
}

fn format_date(due: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]");
    due.format(&format).unwrap_or_default()
}

fn format_time(due: OffsetDateTime) -> String {
    let format = format_description!("[hour]:[minute]");
    due.format(&format).unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::{JobStatus, NotificationPreferences, User, UserRole, UserStatus};
    use time::macros::datetime;
    use uuid::Uuid;

    fn owner() -> User {
        User {
            id: Uuid::new_v4(),
            role: UserRole::Customer,
            status: UserStatus::Active,
            name: "Kund Kundsson".to_string(),
            email: "kund@example.com".to_string(),
            mobile: None,
            city: Some("Göteborg".to_string()),
            customer_type: None,
            preferences: NotificationPreferences::default(),
        }
    }

    fn job() -> Job {
        Job {
            id: 42,
            owner_user_id: Uuid::new_v4(),
            from_language_id: 7,
            immediate: false,
            duration: Some(30),
            due: Some(datetime!(2026-03-05 14:30:00 UTC)),
            status: JobStatus::Pending,
            job_type: Some("paid".to_string()),
            gender: None,
            certified: None,
            customer_phone_type: true,
            customer_physical_type: false,
            city: Some("Stockholm".to_string()),
            user_email: None,
        }
    }

    fn service() -> TemplateService {
        TemplateService::new(MessageCatalog::default())
    }

    fn data(job: &Job) -> JobData {
        JobData::from_job(job, &owner())
    }

    #[test]
    fn duration_below_one_hour() {
        assert_eq!(format_duration(45), "45min");
    }

    #[test]
    fn duration_exactly_one_hour() {
        assert_eq!(format_duration(60), "1h");
    }

    #[test]
    fn duration_above_one_hour_zero_pads_minutes() {
        assert_eq!(format_duration(125), "2h 05min");
    }

    #[test]
    fn scheduled_booking_text_and_sound() {
        let job = job();

        let payload = service()
            .suitable_job_payload(&job, "franska", data(&job))
            .unwrap();

        assert_eq!(
            payload.contents["en"],
            "Ny bokning för franskatolk 30min 2026-03-05 14:30:00"
        );
        assert_eq!(payload.sounds, SoundProfile::named("normal_booking"));
        assert_eq!(payload.notification_type, NotificationType::SuitableJob);
        assert_eq!(payload.data.language.as_deref(), Some("franska"));
    }

    #[test]
    fn emergency_booking_text_and_sound() {
        let mut job = job();
        job.immediate = true;

        let payload = service()
            .suitable_job_payload(&job, "franska", data(&job))
            .unwrap();

        assert_eq!(payload.contents["en"], "Ny akutbokning för franskatolk 30min");
        assert_eq!(payload.sounds, SoundProfile::named("emergency_booking"));
    }

    #[test]
    fn suitable_job_missing_due_fails() {
        let mut job = job();
        job.due = None;
        let data = data(&job);

        let result = service().suitable_job_payload(&job, "franska", data);

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn suitable_job_missing_duration_fails() {
        let mut job = job();
        job.duration = None;
        let data = data(&job);

        let result = service().suitable_job_payload(&job, "franska", data);

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn expired_text_names_language_duration_and_due() {
        let job = job();

        let payload = service()
            .job_expired_payload(&job, "franska", data(&job))
            .unwrap();

        assert_eq!(
            payload.contents["en"],
            "Tyvärr har ingen tolk accepterat er bokning: (franska, 30min, \
             2026-03-05 14:30:00). Vänligen pröva boka om tiden."
        );
        assert_eq!(payload.notification_type, NotificationType::JobExpired);
        assert_eq!(payload.sounds, SoundProfile::default());
    }

    #[test]
    fn session_remind_physical_mentions_town() {
        let mut job = job();
        job.customer_physical_type = true;
        job.customer_phone_type = false;

        let payload = service()
            .session_start_remind_payload(&job, "franska", data(&job))
            .unwrap();

        assert!(payload.contents["en"].contains("på plats i Stockholm"));
        assert!(payload.contents["en"].contains("kl 14:30 på 2026-03-05"));
    }

    #[test]
    fn session_remind_phone_branch() {
        let job = job();

        let payload = service()
            .session_start_remind_payload(&job, "franska", data(&job))
            .unwrap();

        assert!(payload.contents["en"].contains("(telefon)"));
    }

    #[test]
    fn assignment_confirmed_phone_branch() {
        let job = job();

        let payload = service()
            .assignment_confirmed_payload(&job, "franska", data(&job))
            .unwrap();

        assert!(payload.contents["en"].starts_with("Du har nu fått telefontolkningen"));
    }

    #[test]
    fn sms_phone_job() {
        let job = job();

        let message = service().sms_message(&job, None).unwrap();

        assert_eq!(
            message,
            "Du har fått en ny telefontolkning 05.03.2026 kl 14:30 på 30min. \
             Se bokningsnr 42 i appen för detaljer. Tack!"
        );
    }

    #[test]
    fn sms_physical_job_uses_job_city() {
        let mut job = job();
        job.customer_physical_type = true;
        job.customer_phone_type = false;

        let message = service().sms_message(&job, Some("Malmö")).unwrap();

        assert!(message.contains("platstolkning i Stockholm"));
    }

    #[test]
    fn sms_city_falls_back_to_owner_profile() {
        let mut job = job();
        job.customer_physical_type = true;
        job.customer_phone_type = false;
        job.city = None;

        let message = service().sms_message(&job, Some("Malmö")).unwrap();

        assert!(message.contains("platstolkning i Malmö"));
    }

    #[test]
    fn sms_both_flags_falls_back_to_phone_template() {
        let mut job = job();
        job.customer_physical_type = true;
        job.customer_phone_type = true;

        let message = service().sms_message(&job, None).unwrap();

        assert!(message.contains("telefontolkning"));
    }

    #[test]
    fn sms_neither_flag_renders_empty_message() {
        let mut job = job();
        job.customer_physical_type = false;
        job.customer_phone_type = false;

        let message = service().sms_message(&job, None).unwrap();

        assert!(message.is_empty());
    }

    #[test]
    fn sms_missing_duration_fails() {
        let mut job = job();
        job.duration = None;

        let result = service().sms_message(&job, None);

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn mail_subjects_carry_booking_number() {
        let service = service();

        assert_eq!(
            service.session_ended_subject(42),
            "Information om avslutad tolkning för bokningsnummer #42"
        );
        assert_eq!(
            service.changed_translator_subject(42),
            "Meddelande om tilldelning av tolkuppdrag för uppdrag # 42"
        );
        assert_eq!(
            service.changed_booking_subject(42),
            "Meddelande om ändring av tolkbokning för uppdrag # 42"
        );
    }
}
