use super::{CertifiedRequirement, Gender, Job, JobStatus, User};
use serde::Serialize;
use std::collections::BTreeMap;
use time::{macros::format_description, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationType {
    SuitableJob,
    JobExpired,
    SessionStartRemind,
}

///
/// Typed data bag serialized into the push payload `data` field.
///
/// Built once per dispatch from the job snapshot; the notification type and
/// resolved language name are filled in by the dispatch flow.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobData {
    pub job_id: i64,
    pub from_language_id: i64,
    pub immediate: bool,
    pub duration: Option<u32>,
    pub status: JobStatus,
    pub job_type: Option<String>,
    pub gender: Option<Gender>,
    pub certified: Option<CertifiedRequirement>,
    pub due: Option<String>,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
    pub customer_phone_type: bool,
    pub customer_physical_type: bool,
    pub customer_town: Option<String>,
    pub customer_type: Option<String>,
    pub job_for: Vec<String>,
    pub language: Option<String>,
    pub notification_type: NotificationType,
}

impl JobData {
    ///
    /// Snapshot of the job attributes a translator's app needs to render
    /// the booking. `owner` supplies town/customer type fallbacks.
    ///
    pub fn from_job(job: &Job, owner: &User) -> Self {
        let date_format = format_description!("[year]-[month]-[day]");
        let time_format = format_description!("[hour]:[minute]:[second]");

        let due_date = job.due.and_then(|due| due.format(&date_format).ok());
        let due_time = job.due.and_then(|due| due.format(&time_format).ok());
        let due = match (&due_date, &due_time) {
            (Some(date), Some(time)) => Some(format!("{date} {time}")),
            _ => None,
        };

        Self {
            job_id: job.id,
            from_language_id: job.from_language_id,
            immediate: job.immediate,
            duration: job.duration,
            status: job.status,
            job_type: job.job_type.clone(),
            gender: job.gender,
            certified: job.certified,
            due,
            due_date,
            due_time,
            customer_phone_type: job.customer_phone_type,
            customer_physical_type: job.customer_physical_type,
            customer_town: job.city.clone().or_else(|| owner.city.clone()),
            customer_type: owner.customer_type.clone(),
            job_for: Self::job_for(job),
            language: None,
            notification_type: NotificationType::SuitableJob,
        }
    }

    fn job_for(job: &Job) -> Vec<String> {
        let mut job_for = Vec::new();
        match job.gender {
            Some(Gender::Male) => job_for.push("Man".to_string()),
            Some(Gender::Female) => job_for.push("Kvinna".to_string()),
            None => {}
        }
        match job.certified {
            Some(CertifiedRequirement::Both) => {
                job_for.push("normal".to_string());
                job_for.push("certified".to_string());
            }
            Some(CertifiedRequirement::Yes) => job_for.push("certified".to_string()),
            Some(certified) => job_for.push(certified.as_ref().to_string()),
            None => {}
        }
        job_for
    }
}

/// Sound asset names; iOS wants the file extension, Android the bare name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundProfile {
    pub android: String,
    pub ios: String,
}

impl SoundProfile {
    pub fn named(name: &str) -> Self {
        Self {
            android: name.to_string(),
            ios: format!("{name}.mp3"),
        }
    }
}

impl Default for SoundProfile {
    fn default() -> Self {
        Self::named("default")
    }
}

///
/// Immutable value handed to the push gateway, built once per dispatch.
/// `send_after` is only present for the delayed cohort.
///
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPayload {
    pub job_id: i64,
    pub notification_type: NotificationType,
    /// Language code -> message text
    pub contents: BTreeMap<String, String>,
    pub sounds: SoundProfile,
    pub data: JobData,
    pub send_after: Option<OffsetDateTime>,
}

impl NotificationPayload {
    pub fn delayed_until(mut self, send_after: OffsetDateTime) -> Self {
        self.send_after = Some(send_after);
        self
    }
}

/// Recipients sharing identical delivery timing
#[derive(Debug, Clone)]
pub struct DeliveryCohort {
    pub recipients: Vec<User>,
    pub delayed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CohortStatus {
    /// Empty cohort, no gateway call was made
    Skipped,
    Sent { http_status: u16 },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortOutcome {
    pub recipients: usize,
    pub status: CohortStatus,
}

impl CohortOutcome {
    pub fn skipped() -> Self {
        Self {
            recipients: 0,
            status: CohortStatus::Skipped,
        }
    }
}

///
/// Best-effort summary of one dispatch: how many translators were covered
/// by each cohort and whether the gateway accepted the cohort payload.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub immediate: CohortOutcome,
    pub delayed: CohortOutcome,
}

impl DispatchResult {
    pub fn empty() -> Self {
        Self {
            immediate: CohortOutcome::skipped(),
            delayed: CohortOutcome::skipped(),
        }
    }
}
