///
/// Keys of the rendered mail templates owned by the mail transport.
/// Wire names match the template files of the mailer.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr)]
pub enum MailTemplate {
    #[strum(serialize = "emails.session-ended")]
    SessionEnded,
    #[strum(serialize = "emails.job-changed-translator-customer")]
    ChangedTranslatorCustomer,
    #[strum(serialize = "emails.job-changed-translator-old-translator")]
    ChangedTranslatorOldTranslator,
    #[strum(serialize = "emails.job-changed-translator-new-translator")]
    ChangedTranslatorNewTranslator,
    #[strum(serialize = "emails.job-changed-date")]
    ChangedDate,
    #[strum(serialize = "emails.job-changed-lang")]
    ChangedLang,
}

///
/// Variables handed to the mail template, one fixed shape per flow.
///
#[derive(Debug, Clone)]
pub struct MailData {
    pub recipient_name: String,
    pub job_id: i64,
    pub extra: MailExtra,
}

#[derive(Debug, Clone)]
pub enum MailExtra {
    None,
    SessionEnded {
        /// "H tim M min"
        session_time: String,
        /// "faktura" for the customer, "lön" for the translator
        for_text: &'static str,
    },
    OldTime(String),
    OldLang(String),
}
