use crate::core::{ConfigProvider, Operation};
use crate::domain::model::fields;
use crate::utils::error::{BridgeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Routes {
    pub add_user: String,
    pub add_ballot: String,
    pub cast_vote: String,
    pub calculate_results: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            add_user: "/path/to/add_user".to_string(),
            add_ballot: "/path/to/add_ballot".to_string(),
            cast_vote: "/path/to/cast_vote".to_string(),
            calculate_results: "/path/to/calculate_results/{resultElectionId}".to_string(),
        }
    }
}

/// Where the ballot service lives and which path serves each operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub routes: Routes,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            routes: Routes::default(),
        }
    }
}

impl RoutesConfig {
    /// 從 TOML 檔案載入路由設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BridgeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BridgeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BALLOT_API})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BridgeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;

        for operation in Operation::ALL {
            let field = format!("routes.{}", operation.name());
            validation::validate_route(&field, self.route(operation))?;
        }

        validation::validate_placeholder(
            "routes.calculate_results",
            &self.routes.calculate_results,
            fields::RESULT_ELECTION_ID,
        )
    }
}

impl ConfigProvider for RoutesConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn route(&self, operation: Operation) -> &str {
        match operation {
            Operation::AddUser => &self.routes.add_user,
            Operation::AddBallot => &self.routes.add_ballot,
            Operation::CastVote => &self.routes.cast_vote,
            Operation::CalculateResults => &self.routes.calculate_results,
        }
    }
}

impl Validate for RoutesConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
