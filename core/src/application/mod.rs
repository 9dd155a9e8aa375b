use crate::{
    domain::common::{MealsnapConfig, MenuSourceKind, services::Service},
    infrastructure::{
        llm::OpenAiLlmClient,
        menu::{DiningSiteMenuProvider, HttpPageSource, MenuBackend, StaticMenuProvider},
    },
};

pub type MealsnapService = Service<MenuBackend, OpenAiLlmClient>;

/// Builds the concrete service from startup configuration.
pub fn create_service(config: MealsnapConfig) -> anyhow::Result<MealsnapService> {
    let llm_client = OpenAiLlmClient::new(config.llm)?;

    let menu_provider = match config.menu.source {
        MenuSourceKind::Live => {
            let page_source = HttpPageSource::new(config.menu.fetch_timeout_secs)?;
            MenuBackend::Live(DiningSiteMenuProvider::new(page_source, config.menu))
        }
        MenuSourceKind::Static => MenuBackend::Static(StaticMenuProvider::new()),
    };

    Ok(Service::new(menu_provider, llm_client))
}
