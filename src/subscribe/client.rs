use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::SubmitMode;
use crate::config::SubscribeConfig;
use crate::konst::SEND_FIRST_ISSUE;
use crate::subscribe::SubmitError;
use crate::subscribe::SubscriptionAttempt;

#[derive(Debug, serde::Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
    send_first_issue: &'static str,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: serde_json::Value,
}

impl ErrorBody {
    /// Empty strings, `null`, `false` and `0` carry no message. Arrays and objects are not
    /// shown either.
    fn message(self) -> Option<String> {
        match self.error {
            serde_json::Value::String(message) if !message.is_empty() => Some(message),
            serde_json::Value::Bool(true) => Some(true.to_string()),
            serde_json::Value::Number(number) if number.as_f64() != Some(0.0) => {
                Some(number.to_string())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpSubscriptionClient {
    client: reqwest::Client,
    endpoint: url::Url,
    mode: SubmitMode,
    timeout: Duration,
}

impl HttpSubscriptionClient {
    pub fn new(config: &SubscribeConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            mode: config.mode,
            timeout: config.timeout,
        })
    }

    fn request(&self, attempt: &SubscriptionAttempt) -> reqwest::RequestBuilder {
        let payload = SubscribeRequest {
            email: &attempt.email,
            send_first_issue: SEND_FIRST_ISSUE,
        };

        match self.mode {
            SubmitMode::Json => self.client.post(self.endpoint.clone()).json(&payload),
            SubmitMode::Query => self.client.get(self.endpoint.clone()).query(&payload),
        }
    }

    /// Sends exactly one request. The whole exchange, including reading an error body, is
    /// bounded by the configured timeout and aborted once `cancellation_token` fires.
    pub async fn subscribe(
        &self,
        attempt: &SubscriptionAttempt,
        cancellation_token: &CancellationToken,
    ) -> Result<(), SubmitError> {
        tracing::info!(email = %attempt.email, endpoint = %self.endpoint, mode = ?self.mode, "Sending subscription");

        let exchange = tokio::time::timeout(self.timeout, self.exchange(attempt));
        let Some(result) = cancellation_token.run_until_cancelled(exchange).await else {
            tracing::info!("Cancelled, dropping in-flight subscription request");
            return Err(SubmitError::Cancelled);
        };

        result.map_err(|_elapsed| SubmitError::Timeout(self.timeout))?
    }

    async fn exchange(&self, attempt: &SubscriptionAttempt) -> Result<(), SubmitError> {
        let response = self
            .request(attempt)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%status, "Subscription accepted");
            return Ok(());
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message(),
            Err(error) => {
                tracing::debug!(?error, "Error response carried no readable body");
                None
            }
        };

        tracing::warn!(%status, ?message, "Subscription rejected");
        Err(SubmitError::Rejected { status, message })
    }
}
