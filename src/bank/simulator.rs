use crate::bank::{AuthorizationRequest, AuthorizationVerdict, Authorizer, AuthorizerError};
use std::time::Duration;

pub struct BankSimulator {
    pub url: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl Authorizer for BankSimulator {
    fn name(&self) -> &'static str {
        "bank_simulator"
    }

    async fn authorize(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<AuthorizationVerdict, AuthorizerError> {
        let resp = self
            .client
            .post(&self.url)
            .json(request)
            .timeout(Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthorizerError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let body = resp.text().await.map_err(classify)?;
        serde_json::from_str(&body).map_err(|e| AuthorizerError::Body(e.to_string()))
    }
}

fn classify(e: reqwest::Error) -> AuthorizerError {
    if e.is_timeout() {
        AuthorizerError::Timeout
    } else {
        AuthorizerError::Transport(e.to_string())
    }
}
