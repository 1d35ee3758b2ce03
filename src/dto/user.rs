use uuid::Uuid;

///
/// Account as supplied by the job store. Translators with `status` other
/// than [`UserStatus::Active`] never receive anything.
///
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub role: UserRole,
    pub status: UserStatus,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub city: Option<String>,
    pub customer_type: Option<String>,
    pub preferences: NotificationPreferences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Customer,
    Translator,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Disabled,
}

/// Per-user opt-outs, all default to receiving everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationPreferences {
    pub suppress_all_notifications: bool,
    pub suppress_emergency_notifications: bool,
    pub suppress_nighttime_notifications: bool,
}
