pub struct SmsServiceConfig {
    /// Sender number handed to the SMS provider
    pub origin_number: String,
}
