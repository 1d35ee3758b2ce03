use anyhow::anyhow;
use std::time::Duration;
use time::{macros::format_description, Time, UtcOffset};

///
/// Environment-driven configuration of the notification core. Parsed once
/// at startup by the embedding application and handed out to the service
/// and gateway constructors.
///
pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    /// Local time bounds of the night window, start inclusive, end exclusive
    pub night_window_start: Time,
    pub night_window_end: Time,
    /// Local time at which delayed pushes fire on the next business day
    pub business_day_start: Time,
    pub utc_offset: UtcOffset,

    /// Credentials of the environment selected by TOLK_NOTIFIER_ENVIRONMENT
    pub onesignal_api_url: String,
    pub onesignal_app_id: String,
    pub onesignal_api_key: String,

    pub sms_origin_number: String,
    pub sms_api_url: String,
    pub sms_api_username: String,
    pub sms_api_password: String,

    pub gateway_timeout: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        #[cfg(debug_assertions)]
        {
            // Ignore error because .env file is not required
            // as long as env variables are set
            let _ = dotenvy::dotenv();
        }

        let log_directory = Self::env_var("TOLK_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TOLK_NOTIFIER_LOG_FILENAME")?;

        let night_window_start = Self::time(Self::env_var("TOLK_NOTIFIER_NIGHT_WINDOW_START")?)?;
        let night_window_end = Self::time(Self::env_var("TOLK_NOTIFIER_NIGHT_WINDOW_END")?)?;
        let business_day_start = Self::time(Self::env_var("TOLK_NOTIFIER_BUSINESS_DAY_START")?)?;
        let utc_offset = UtcOffset::parse(
            &Self::env_var("TOLK_NOTIFIER_UTC_OFFSET")?,
            format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
        )?;

        let environment = Self::env_var("TOLK_NOTIFIER_ENVIRONMENT")?;
        let onesignal_api_url = Self::env_var("TOLK_NOTIFIER_ONESIGNAL_API_URL")?;
        let (onesignal_app_id, onesignal_api_key) = if environment == "prod" {
            (
                Self::env_var("TOLK_NOTIFIER_PROD_ONESIGNAL_APP_ID")?,
                Self::env_var("TOLK_NOTIFIER_PROD_ONESIGNAL_API_KEY")?,
            )
        } else {
            (
                Self::env_var("TOLK_NOTIFIER_DEV_ONESIGNAL_APP_ID")?,
                Self::env_var("TOLK_NOTIFIER_DEV_ONESIGNAL_API_KEY")?,
            )
        };

        let sms_origin_number = Self::env_var("TOLK_NOTIFIER_SMS_ORIGIN_NUMBER")?;
        let sms_api_url = Self::env_var("TOLK_NOTIFIER_SMS_API_URL")?;
        let sms_api_username = Self::env_var("TOLK_NOTIFIER_SMS_API_USERNAME")?;
        let sms_api_password = Self::env_var("TOLK_NOTIFIER_SMS_API_PASSWORD")?;

        let gateway_timeout = Self::env_var("TOLK_NOTIFIER_GATEWAY_TIMEOUT")?.parse()?;
        let gateway_timeout = Duration::from_secs(gateway_timeout);

        Ok(Self {
            log_directory,
            log_filename,
            night_window_start,
            night_window_end,
            business_day_start,
            utc_offset,
            onesignal_api_url,
            onesignal_app_id,
            onesignal_api_key,
            sms_origin_number,
            sms_api_url,
            sms_api_username,
            sms_api_password,
            gateway_timeout,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn time(value: String) -> anyhow::Result<Time> {
        let time = Time::parse(&value, format_description!("[hour]:[minute]"))?;
        Ok(time)
    }
}
