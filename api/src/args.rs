use clap::{Parser, ValueEnum};

use mealsnap_core::domain::common::{LlmConfig, MealsnapConfig, MenuConfig, MenuSourceKind};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "mealsnap",
    version,
    about = "Cafeteria plate nutrition analysis server"
)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub menu: MenuArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix applied to every route, e.g. "/api".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Bearer token for the inference endpoint. Startup fails when unset.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub openai_model: String,

    #[arg(
        long,
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub openai_base_url: String,

    /// Upper bound on one inference round trip; the attempt is abandoned and
    /// reported as a failure afterwards. No retry.
    #[arg(long, env = "INFERENCE_TIMEOUT_SECS", default_value_t = 30)]
    pub inference_timeout_secs: u64,

    #[arg(long, env = "MAX_COMPLETION_TOKENS", default_value_t = 500)]
    pub max_completion_tokens: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MenuArgs {
    #[arg(long, env = "MENU_SOURCE", value_enum, default_value_t = MenuSourceArg::Live)]
    pub menu_source: MenuSourceArg,

    #[arg(
        long,
        env = "MENU_URL",
        default_value = "https://dining.berkeley.edu/menus/"
    )]
    pub menu_url: String,

    #[arg(long, env = "MENU_FETCH_TIMEOUT_SECS", default_value_t = 20)]
    pub menu_fetch_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MenuSourceArg {
    Live,
    Static,
}

impl From<MenuSourceArg> for MenuSourceKind {
    fn from(source: MenuSourceArg) -> Self {
        match source {
            MenuSourceArg::Live => MenuSourceKind::Live,
            MenuSourceArg::Static => MenuSourceKind::Static,
        }
    }
}

impl From<Args> for MealsnapConfig {
    fn from(args: Args) -> Self {
        MealsnapConfig {
            llm: LlmConfig {
                api_key: args.llm.openai_api_key,
                model: args.llm.openai_model,
                base_url: args.llm.openai_base_url,
                request_timeout_secs: args.llm.inference_timeout_secs,
                max_completion_tokens: args.llm.max_completion_tokens,
            },
            menu: MenuConfig {
                source: args.menu.menu_source.into(),
                url: args.menu.menu_url,
                fetch_timeout_secs: args.menu.menu_fetch_timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_maps_from_args() {
        let args = Args::parse_from([
            "mealsnap",
            "--openai-api-key",
            "sk-test",
            "--menu-source",
            "static",
            "--port",
            "8080",
        ]);
        assert_eq!(args.server.port, 8080);

        let config = MealsnapConfig::from(args);
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.request_timeout_secs, 30);
        assert_eq!(config.menu.source, MenuSourceKind::Static);
    }

    #[test]
    fn startup_fails_without_an_api_key() {
        if std::env::var_os("OPENAI_API_KEY").is_some() {
            return;
        }
        assert!(Args::try_parse_from(["mealsnap"]).is_err());
    }
}
