//! API client: submits a phone number and snapshot for scoring, classifies failures.

mod client;
mod error;
pub mod token;

pub use client::{ApiClient, PHONE_SCORE_PATH};
pub use error::ClientError;
