use super::{Error, GatewayResult, PushGateway};
use crate::dto::{JobData, NotificationPayload};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;
use std::{collections::BTreeMap, time::Duration};
use time::macros::format_description;

pub struct OneSignalPushGatewayConfig {
    pub api_url: String,
    /// App id of the selected environment (prod or dev)
    pub app_id: String,
    pub api_key: String,
    pub request_timeout: Duration,
}

///
/// OneSignal REST transport. Recipients are targeted through tag filters
/// on the registered email, chained with OR operators.
///
pub struct OneSignalPushGateway {
    config: OneSignalPushGatewayConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct OneSignalNotification<'a> {
    app_id: &'a str,
    tags: Vec<serde_json::Value>,
    data: &'a JobData,
    title: BTreeMap<&'static str, &'static str>,
    contents: &'a BTreeMap<String, String>,
    #[serde(rename = "ios_badgeType")]
    ios_badge_type: &'static str,
    #[serde(rename = "ios_badgeCount")]
    ios_badge_count: u32,
    android_sound: &'a str,
    ios_sound: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_after: Option<String>,
}

impl OneSignalPushGateway {
    pub fn new(config: OneSignalPushGatewayConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { config, client })
    }

    fn wire_notification<'a>(
        &'a self,
        payload: &'a NotificationPayload,
        recipient_emails: &[String],
    ) -> OneSignalNotification<'a> {
        OneSignalNotification {
            app_id: &self.config.app_id,
            tags: Self::user_tags(recipient_emails),
            data: &payload.data,
            title: BTreeMap::from([("en", "DigitalTolk")]),
            contents: &payload.contents,
            ios_badge_type: "Increase",
            ios_badge_count: 1,
            android_sound: &payload.sounds.android,
            ios_sound: &payload.sounds.ios,
            send_after: payload.send_after.map(Self::format_send_after),
        }
    }

    fn user_tags(recipient_emails: &[String]) -> Vec<serde_json::Value> {
        let mut tags = Vec::with_capacity(recipient_emails.len() * 2);
        for email in recipient_emails {
            if !tags.is_empty() {
                tags.push(json!({ "operator": "OR" }));
            }
            tags.push(json!({ "key": "email", "relation": "=", "value": email }));
        }
        tags
    }

    fn format_send_after(send_after: time::OffsetDateTime) -> String {
        let format = format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second] \
             GMT[offset_hour sign:mandatory][offset_minute]"
        );
        // the format description has no fallible components
        send_after.format(&format).unwrap_or_default()
    }
}

#[async_trait]
impl PushGateway for OneSignalPushGateway {
    async fn send(
        &self,
        payload: &NotificationPayload,
        recipient_emails: &[String],
    ) -> Result<GatewayResult, Error> {
        let notification = self.wire_notification(payload, recipient_emails);

        let response = self
            .client
            .post(&self.config.api_url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Basic {}", self.config.api_key),
            )
            .json(&notification)
            .send()
            .await?;

        let status = response.status().as_u16();
        let raw_response = response.text().await?;

        if status >= 400 {
            return Err(Error::Rejected {
                status,
                body: raw_response,
            });
        }

        Ok(GatewayResult {
            status,
            raw_response,
        })
    }
}
