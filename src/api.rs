use reqwest::Client;

use crate::message::{AskRequest, AskResponse};

/// Answer shown when the proxy cannot be reached, returns a non-success
/// status, or sends back something that isn't an answer.
pub const FALLBACK_ANSWER: &str = "Sorry, something went wrong connecting to the server.";

/// HTTP client for the proxy's `/api/chat` endpoint.
///
/// `ask` never fails outward: every transport or parse failure is folded into
/// a displayable [`AskResponse`], so callers have no error path of their own.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send a question to the proxy and return the answer payload.
    pub async fn ask(&self, question: &str) -> AskResponse {
        match self.try_ask(question).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("API error: {}", e);
                AskResponse::with_answer(FALLBACK_ANSWER)
            }
        }
    }

    async fn try_ask(&self, question: &str) -> anyhow::Result<AskResponse> {
        let url = format!("{}/api/chat", self.base_url);

        let request = AskRequest {
            question: question.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("chat request failed with status: {}", response.status());
        }

        Ok(response.json::<AskResponse>().await?)
    }
}
