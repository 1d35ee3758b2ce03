///
/// Localized message strings, configuration rather than code.
/// Placeholders are `{name}` tokens replaced at render time; the defaults
/// are the Swedish texts the platform ships with.
///
pub struct MessageCatalog {
    pub new_booking: String,
    pub new_emergency_booking: String,
    pub job_expired: String,
    pub session_start_remind_physical: String,
    pub session_start_remind_phone: String,
    pub assignment_confirmed_physical: String,
    pub assignment_confirmed_phone: String,
    pub sms_phone_job: String,
    pub sms_physical_job: String,
    pub mail_session_ended_subject: String,
    pub mail_changed_translator_subject: String,
    pub mail_changed_booking_subject: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            new_booking: "Ny bokning för {language}tolk {duration}min {due}".to_string(),
            new_emergency_booking: "Ny akutbokning för {language}tolk {duration}min".to_string(),
            job_expired: "Tyvärr har ingen tolk accepterat er bokning: ({language}, \
                          {duration}min, {due}). Vänligen pröva boka om tiden."
                .to_string(),
            session_start_remind_physical: "Detta är en påminnelse om att du har en \
                                            {language}tolkning (på plats i {town}) kl {time} \
                                            på {date} som vara i {duration} min. Lycka till och \
                                            kom ihåg att ge feedback efter utförd tolkning!"
                .to_string(),
            session_start_remind_phone: "Detta är en påminnelse om att du har en \
                                         {language}tolkning (telefon) kl {time} på {date} \
                                         som vara i {duration} min. Lycka till och kom ihåg \
                                         att ge feedback efter utförd tolkning!"
                .to_string(),
            assignment_confirmed_physical: "Du har nu fått platstolkningen för {language} \
                                            kl {time} den {date}. Vänligen säkerställ att du \
                                            är förberedd för den tiden. Tack!"
                .to_string(),
            assignment_confirmed_phone: "Du har nu fått telefontolkningen för {language} \
                                         kl {time} den {date}. Vänligen säkerställ att du \
                                         är förberedd för den tiden. Tack!"
                .to_string(),
            sms_phone_job: "Du har fått en ny telefontolkning {date} kl {time} på {duration}. \
                            Se bokningsnr {job_id} i appen för detaljer. Tack!"
                .to_string(),
            sms_physical_job: "Du har fått en ny platstolkning i {town} {date} kl {time} \
                               på {duration}. Se bokningsnr {job_id} i appen för detaljer. Tack!"
                .to_string(),
            mail_session_ended_subject:
                "Information om avslutad tolkning för bokningsnummer #{job_id}".to_string(),
            mail_changed_translator_subject:
                "Meddelande om tilldelning av tolkuppdrag för uppdrag # {job_id}".to_string(),
            mail_changed_booking_subject:
                "Meddelande om ändring av tolkbokning för uppdrag # {job_id}".to_string(),
        }
    }
}
