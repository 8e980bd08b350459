use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input ids read from the voting form, plus the id of the results container.
pub mod fields {
    pub const USER_NAME: &str = "userName";
    pub const ELECTION_ID: &str = "electionId";
    pub const OPTIONS: &str = "options";
    pub const START_TIME: &str = "startTime";
    pub const END_TIME: &str = "endTime";
    pub const VOTER_ID: &str = "voterId";
    pub const CANDIDATE: &str = "candidate";
    pub const VOTE_ELECTION_ID: &str = "voteElectionId";
    pub const RESULT_ELECTION_ID: &str = "resultElectionId";

    pub const RESULT_CONTAINER: &str = "resultContainer";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBallotRequest {
    pub election_id: String,
    pub options: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub voter_id: String,
    pub candidate: String,
    pub vote_election_id: String,
}

/// Travels in the URL path, never in a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateResultsQuery {
    pub result_election_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AddUser,
    AddBallot,
    CastVote,
    CalculateResults,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::AddUser,
        Operation::AddBallot,
        Operation::CastVote,
        Operation::CalculateResults,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddUser => "add_user",
            Operation::AddBallot => "add_ballot",
            Operation::CastVote => "cast_vote",
            Operation::CalculateResults => "calculate_results",
        }
    }

    /// Form inputs the operation reads, in payload order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Operation::AddUser => &[fields::USER_NAME],
            Operation::AddBallot => &[
                fields::ELECTION_ID,
                fields::OPTIONS,
                fields::START_TIME,
                fields::END_TIME,
            ],
            Operation::CastVote => &[fields::VOTER_ID, fields::CANDIDATE, fields::VOTE_ELECTION_ID],
            Operation::CalculateResults => &[fields::RESULT_ELECTION_ID],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// Everything needed to issue one call; built without touching the network.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub operation: Operation,
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(operation: Operation, path: impl Into<String>) -> Self {
        Self {
            operation,
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post<T: Serialize>(operation: Operation, path: impl Into<String>, payload: &T) -> Result<Self> {
        Ok(Self {
            operation,
            method: HttpMethod::Post,
            path: path.into(),
            body: Some(serde_json::to_value(payload)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_keys_are_camel_case() {
        let ballot = AddBallotRequest {
            election_id: "7".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            start_time: "2024-01-01T00:00".to_string(),
            end_time: "2024-01-02T00:00".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&ballot).unwrap(),
            json!({
                "electionId": "7",
                "options": ["A", "B"],
                "startTime": "2024-01-01T00:00",
                "endTime": "2024-01-02T00:00"
            })
        );

        let vote = CastVoteRequest {
            voter_id: "v1".to_string(),
            candidate: "A".to_string(),
            vote_election_id: "7".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&vote).unwrap(),
            json!({"voterId": "v1", "candidate": "A", "voteElectionId": "7"})
        );
    }

    #[test]
    fn test_post_request_carries_body() {
        let payload = AddUserRequest {
            user_name: "alice".to_string(),
        };
        let request = ApiRequest::post(Operation::AddUser, "/path/to/add_user", &payload).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({"userName": "alice"})));

        let request = ApiRequest::get(Operation::CalculateResults, "/results/1");
        assert_eq!(request.method.to_string(), "GET");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_operation_fields() {
        assert_eq!(Operation::AddUser.fields(), &["userName"]);
        assert_eq!(Operation::AddBallot.fields().len(), 4);
        assert_eq!(Operation::CalculateResults.to_string(), "calculate_results");
    }
}
