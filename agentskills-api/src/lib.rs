#![doc = "API client for the agentskills skill management service."]
pub mod client;
mod endpoints;
pub mod error;
pub mod types;

pub use crate::client::{ApiClient, Authorization, RequestOptions};
pub use crate::error::{Error, Result};
pub use agentskills_common as common;
pub use agentskills_rest as rest;
