use std::env;

pub const PRODUCTION_VAR: &str = "AGENTGATE_PRODUCTION";
pub const SUBSCRIPTION_KEY_VAR: &str = "AGENTGATE_SUBSCRIPTION_KEY";
pub const BASE_URL_VAR: &str = "AGENTGATE_BASE_URL";

/// Typed snapshot of the environment variables the client reads.
///
/// Read once at startup; every field has a defined fallback, so loading
/// never fails. Unset and empty variables are treated identically.
#[derive(Clone, Debug, Default)]
pub struct EnvSettings {
    /// Deployment-mode indicator: true when served through the API gateway.
    pub production: bool,
    /// Gateway subscription key, forwarded as a request header when present.
    pub subscription_key: Option<String>,
    /// Direct-profile base URL override.
    pub base_url_override: Option<String>,
}

impl EnvSettings {
    pub fn from_env() -> Self {
        Self {
            production: flag_set(PRODUCTION_VAR),
            subscription_key: get_env_optional(SUBSCRIPTION_KEY_VAR),
            base_url_override: get_env_optional(BASE_URL_VAR),
        }
    }
}

/// Optional environment lookup; empty values count as unset.
pub fn get_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn flag_set(key: &str) -> bool {
    env::var(key)
        .map(|value| {
            let value = value.trim();
            value == "1" || value.eq_ignore_ascii_case("true")
        })
        .unwrap_or(false)
}
