pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct MealsnapConfig {
    pub llm: LlmConfig,
    pub menu: MenuConfig,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub max_completion_tokens: u32,
}

#[derive(Clone, Debug)]
pub struct MenuConfig {
    pub source: MenuSourceKind,
    pub url: String,
    pub fetch_timeout_secs: u64,
}

/// Which backing serves menu snapshots. Both satisfy the same contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSourceKind {
    Live,
    Static,
}
