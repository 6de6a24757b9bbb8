use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgentGateError>;

#[derive(Debug, Error)]
pub enum AgentGateError {
    #[error("HTTP {code}: {text}")]
    Status { code: u16, text: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
