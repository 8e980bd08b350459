pub mod bridge;
pub mod dispatch;
pub mod render;
pub mod requests;

pub use crate::domain::model::{ApiRequest, HttpMethod, Operation};
pub use crate::domain::ports::{ConfigProvider, FormReader, ResultDisplay, VotingClient};
pub use crate::utils::error::Result;
