pub mod client;
pub mod config;
pub mod error;
pub mod utils;

pub use client::{ApiClient, ChatRequest, RequestOptions, SUBSCRIPTION_KEY_HEADER};
pub use config::{ApiConfig, Endpoint, EndpointPaths, EnvSettings};
pub use error::{AgentGateError, Result};
