pub mod http;
pub mod types;

pub use http::{ApiClient, SUBSCRIPTION_KEY_HEADER};
pub use types::{ChatRequest, RequestOptions};
