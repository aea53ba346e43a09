use gatepass_auth_types::phone::PhoneNumber;

use crate::domain::repository::OtpSender;
use crate::error::AccessServiceError;

/// Messaging collaborator speaking the provider's JSON SMS API
/// (Termii-shaped: `POST {base}/api/sms/send` with an `API-Key` header).
///
/// The provider only ever sees the international wire form of the phone.
#[derive(Clone)]
pub struct HttpSmsSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender_id: String,
}

impl HttpSmsSender {
    pub fn new(
        client: reqwest::Client,
        api_url: String,
        api_key: String,
        sender_id: String,
    ) -> Self {
        Self {
            client,
            api_url,
            api_key,
            sender_id,
        }
    }
}

impl OtpSender for HttpSmsSender {
    async fn send_code(
        &self,
        phone: &PhoneNumber,
        code: &str,
    ) -> Result<(), AccessServiceError> {
        let body = serde_json::json!({
            "to": phone.international(),
            "from": self.sender_id,
            "sms": format!("Your {} verification code: {code} (valid 5 mins)", self.sender_id),
            "type": "plain",
            "channel": "generic",
        });

        let response = self
            .client
            .post(format!("{}/api/sms/send", self.api_url))
            .header("API-Key", &self.api_key)
            .json(&body)
            .send()
            .await;

        // Failures are logged with provider context but never with the code.
        match response {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) => {
                let status = resp.status();
                let provider_body = resp.text().await.unwrap_or_default();
                tracing::error!(
                    %status,
                    provider_response = %provider_body,
                    phone = %phone.international(),
                    "otp dispatch rejected by provider"
                );
                Err(AccessServiceError::DispatchFailed)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    phone = %phone.international(),
                    "otp dispatch request failed"
                );
                Err(AccessServiceError::DispatchFailed)
            }
        }
    }
}
