use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// A single interpretation booking, read-only to the notification core.
///
/// `due` and `duration` come from an external booking flow and may be
/// absent on malformed records; template builds reject such jobs instead
/// of producing broken message text.
///
#[derive(Debug, Clone)]
pub struct Job {
    pub id: i64,
    pub owner_user_id: Uuid,
    pub from_language_id: i64,
    /// Emergency booking, interpretation starts right away
    pub immediate: bool,
    /// Minutes
    pub duration: Option<u32>,
    pub due: Option<OffsetDateTime>,
    pub status: JobStatus,
    /// Pricing category as stored by the booking flow, e.g. "paid", "rws"
    pub job_type: Option<String>,
    pub gender: Option<Gender>,
    pub certified: Option<CertifiedRequirement>,
    pub customer_phone_type: bool,
    pub customer_physical_type: bool,
    pub city: Option<String>,
    /// Override address taking precedence over the owner's profile email
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Assigned,
    Started,
    Completed,
    Withdrawn,
    Timedout,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CertifiedRequirement {
    Yes,
    No,
    Both,
    Law,
    Health,
}
