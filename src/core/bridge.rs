use crate::core::{render, requests};
use crate::domain::model::{fields, ApiRequest, HttpMethod, Operation};
use crate::domain::ports::{ConfigProvider, FormReader, ResultDisplay, VotingClient};
use crate::utils::error::Result;
use reqwest::Client;

/// Reads form inputs, submits them to the ballot service and hands the JSON
/// reply to a display.
///
/// Errors are never caught here: a failed call leaves the display untouched
/// and the error goes back to the caller as-is.
pub struct FormBridge<F: FormReader, D: ResultDisplay, C: ConfigProvider> {
    form: F,
    display: D,
    config: C,
    client: Client,
}

impl<F: FormReader, D: ResultDisplay, C: ConfigProvider> FormBridge<F, D, C> {
    pub fn new(form: F, display: D, config: C) -> Self {
        Self {
            form,
            display,
            config,
            client: Client::new(),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn build_request(&self, operation: Operation) -> Result<ApiRequest> {
        tracing::debug!("📝 {}: reading {:?}", operation, operation.fields());
        requests::build_request(operation, &self.form, self.config.route(operation))
    }

    fn url_for(&self, request: &ApiRequest) -> String {
        format!(
            "{}{}",
            self.config.base_url().trim_end_matches('/'),
            request.path
        )
    }

    /// 送出請求並解析 JSON 回應，不檢查狀態碼
    async fn submit_json(&self, request: &ApiRequest) -> Result<serde_json::Value> {
        let url = self.url_for(request);
        tracing::debug!("📡 {}: {} {}", request.operation, request.method, url);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        if let Some(body) = &request.body {
            tracing::debug!("📡 {}: payload {}", request.operation, body);
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("📡 {}: response status {}", request.operation, status);

        if !status.is_success() {
            tracing::warn!(
                "⚠️ {}: service answered {}, handling body anyway",
                request.operation,
                status
            );
        }

        let bytes = response.bytes().await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }

    async fn submit(&self, operation: Operation) -> Result<()> {
        let request = self.build_request(operation)?;
        let response = self.submit_json(&request).await?;

        match operation {
            Operation::CalculateResults => {
                let rendered = render::to_pretty_text(&response)?;
                self.display.render(fields::RESULT_CONTAINER, &rendered)?;
            }
            _ => self.display.log(operation, &response),
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl<F: FormReader, D: ResultDisplay, C: ConfigProvider> VotingClient for FormBridge<F, D, C> {
    async fn add_user(&self) -> Result<()> {
        self.submit(Operation::AddUser).await
    }

    async fn add_ballot(&self) -> Result<()> {
        self.submit(Operation::AddBallot).await
    }

    async fn cast_vote(&self) -> Result<()> {
        self.submit(Operation::CastVote).await
    }

    async fn calculate_results(&self) -> Result<()> {
        self.submit(Operation::CalculateResults).await
    }
}
