use crate::domain::model::Operation;
use crate::utils::error::{BridgeError, Result};
use async_trait::async_trait;

/// Source of form input values, keyed by input id.
pub trait FormReader: Send + Sync {
    fn value(&self, field: &str) -> Option<String>;

    fn require(&self, field: &str) -> Result<String> {
        self.value(field).ok_or_else(|| BridgeError::MissingField {
            field: field.to_string(),
        })
    }
}

/// Where service replies end up.
pub trait ResultDisplay: Send + Sync {
    fn log(&self, operation: Operation, response: &serde_json::Value);

    /// Replaces the whole content of the named container.
    fn render(&self, container: &str, content: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn route(&self, operation: Operation) -> &str;
}

#[async_trait]
pub trait VotingClient: Send + Sync {
    async fn add_user(&self) -> Result<()>;
    async fn add_ballot(&self) -> Result<()>;
    async fn cast_vote(&self) -> Result<()>;
    async fn calculate_results(&self) -> Result<()>;
}
