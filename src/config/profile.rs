use super::env::EnvSettings;

/// Logical operations exposed by the agent backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Agent,
    Chat,
    ChatHistory,
    Health,
}

/// Paths for the four logical operations under one deployment profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointPaths {
    pub agent: String,
    pub chat: String,
    pub chat_history: String,
    pub health: String,
}

impl EndpointPaths {
    /// Paths when routed through the API management gateway.
    pub fn gateway() -> Self {
        Self {
            agent: "/api/agent".to_string(),
            chat: "/api/chat".to_string(),
            chat_history: "/api/chat/history".to_string(),
            health: "/api/health".to_string(),
        }
    }

    /// Paths when talking to the backend service directly.
    pub fn direct() -> Self {
        Self {
            agent: "/agent".to_string(),
            chat: "/chat".to_string(),
            chat_history: "/chat/history".to_string(),
            health: "/health".to_string(),
        }
    }

    pub fn path(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Agent => &self.agent,
            Endpoint::Chat => &self.chat,
            Endpoint::ChatHistory => &self.chat_history,
            Endpoint::Health => &self.health,
        }
    }
}

/// One deployment profile: where requests go and which credential rides along.
///
/// Selected once per client and never re-evaluated.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub endpoints: EndpointPaths,
}

impl ApiConfig {
    /// Gateway profile: requests go to the deployment origin and carry the
    /// subscription key when one is configured.
    pub fn gateway(origin: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: origin.into(),
            // An empty key and no key behave the same: no credential header.
            api_key: api_key.filter(|key| !key.is_empty()),
            endpoints: EndpointPaths::gateway(),
        }
    }

    /// Direct profile: local development, straight to the backend, no key.
    pub fn direct(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            endpoints: EndpointPaths::direct(),
        }
    }

    /// Pick the active profile.
    ///
    /// `origin` is the deployment origin the app is served from; the direct
    /// profile falls back to it when no override is configured.
    pub fn select(settings: &EnvSettings, origin: &str) -> Self {
        if settings.production {
            Self::gateway(origin, settings.subscription_key.clone())
        } else {
            match &settings.base_url_override {
                Some(url) => Self::direct(url.clone()),
                None => Self::direct(origin),
            }
        }
    }

    /// Absolute URL for a logical operation. Plain concatenation, like every
    /// dispatch: the path is not normalized or encoded.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, self.endpoints.path(endpoint))
    }
}
