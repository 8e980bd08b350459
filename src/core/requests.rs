//! Pure request builders.
//!
//! Each builder reads the inputs its operation needs from a [`FormReader`] and
//! returns the [`ApiRequest`] to send. Field values are passed through as-is:
//! empty strings are sent, nothing is trimmed.

use crate::domain::model::{
    fields, AddBallotRequest, AddUserRequest, ApiRequest, CalculateResultsQuery, CastVoteRequest,
    Operation,
};
use crate::domain::ports::FormReader;
use crate::utils::error::{BridgeError, Result};

/// Splits the comma separated options input. `""` yields `[""]`.
pub fn split_options(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Substitutes `{field}` in a route template with `value`, verbatim.
pub fn render_path(template: &str, field: &str, value: &str) -> Result<String> {
    let placeholder = format!("{{{}}}", field);
    if !template.contains(&placeholder) {
        return Err(BridgeError::ProcessingError {
            message: format!("Route {} has no {} placeholder", template, placeholder),
        });
    }

    // 只檢查模板本身，避免輸入值中的大括號被誤判
    let remainder = template.replace(&placeholder, "");
    if remainder.contains('{') && remainder.contains('}') {
        return Err(BridgeError::ProcessingError {
            message: format!("Unresolved parameters in route: {}", template),
        });
    }

    Ok(template.replace(&placeholder, value))
}

pub fn build_add_user(form: &dyn FormReader, path: &str) -> Result<ApiRequest> {
    let payload = AddUserRequest {
        user_name: form.require(fields::USER_NAME)?,
    };
    ApiRequest::post(Operation::AddUser, path, &payload)
}

pub fn build_add_ballot(form: &dyn FormReader, path: &str) -> Result<ApiRequest> {
    let payload = AddBallotRequest {
        election_id: form.require(fields::ELECTION_ID)?,
        options: split_options(&form.require(fields::OPTIONS)?),
        start_time: form.require(fields::START_TIME)?,
        end_time: form.require(fields::END_TIME)?,
    };
    ApiRequest::post(Operation::AddBallot, path, &payload)
}

pub fn build_cast_vote(form: &dyn FormReader, path: &str) -> Result<ApiRequest> {
    let payload = CastVoteRequest {
        voter_id: form.require(fields::VOTER_ID)?,
        candidate: form.require(fields::CANDIDATE)?,
        vote_election_id: form.require(fields::VOTE_ELECTION_ID)?,
    };
    ApiRequest::post(Operation::CastVote, path, &payload)
}

pub fn build_calculate_results(form: &dyn FormReader, path_template: &str) -> Result<ApiRequest> {
    let query = CalculateResultsQuery {
        result_election_id: form.require(fields::RESULT_ELECTION_ID)?,
    };
    let path = render_path(
        path_template,
        fields::RESULT_ELECTION_ID,
        &query.result_election_id,
    )?;
    Ok(ApiRequest::get(Operation::CalculateResults, path))
}

pub fn build_request(operation: Operation, form: &dyn FormReader, path: &str) -> Result<ApiRequest> {
    match operation {
        Operation::AddUser => build_add_user(form, path),
        Operation::AddBallot => build_add_ballot(form, path),
        Operation::CastVote => build_cast_vote(form, path),
        Operation::CalculateResults => build_calculate_results(form, path),
    }
}
