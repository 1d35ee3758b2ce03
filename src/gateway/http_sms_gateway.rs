use super::{Error, SmsGateway};
use async_trait::async_trait;
use std::time::Duration;

pub struct HttpSmsGatewayConfig {
    pub api_url: String,
    pub api_username: String,
    pub api_password: String,
    pub request_timeout: Duration,
}

///
/// Form-posting SMS transport matching the provider API the platform uses
/// (basic auth, `from`/`to`/`message` form fields).
///
pub struct HttpSmsGateway {
    config: HttpSmsGatewayConfig,
    client: reqwest::Client,
}

impl HttpSmsGateway {
    pub fn new(config: HttpSmsGatewayConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl SmsGateway for HttpSmsGateway {
    async fn send(&self, from: &str, to: &str, message: &str) -> Result<String, Error> {
        let form = [("from", from), ("to", to), ("message", message)];

        let response = self
            .client
            .post(&self.config.api_url)
            .basic_auth(&self.config.api_username, Some(&self.config.api_password))
            .form(&form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if status >= 400 {
            return Err(Error::Rejected { status, body });
        }

        Ok(body)
    }
}
