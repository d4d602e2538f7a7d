//! Adviser configuration.

pub const API_KEY_ENV: &str = "WEALTHMATE_OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "WEALTHMATE_ADVISER_BASE_URL";
pub const MODEL_ENV: &str = "WEALTHMATE_ADVISER_MODEL";
pub const MAX_TOKENS_ENV: &str = "WEALTHMATE_ADVISER_MAX_TOKENS";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 250;
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a financial advisor. Provide helpful, concise financial advice.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviserConfig {
    /// Enables the HTTP provider when set.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub system_prompt: String,
}

impl Default for AdviserConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl AdviserConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            api_key: non_empty(API_KEY_ENV),
            base_url: non_empty(BASE_URL_ENV)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: non_empty(MODEL_ENV).unwrap_or(defaults.model),
            max_tokens: non_empty(MAX_TOKENS_ENV)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.max_tokens),
            system_prompt: defaults.system_prompt,
        }
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
