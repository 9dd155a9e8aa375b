pub mod dining_site;
pub mod page_source;
pub mod static_provider;

pub use dining_site::DiningSiteMenuProvider;
pub use page_source::HttpPageSource;
pub use static_provider::StaticMenuProvider;

use crate::domain::menu::{entities::MenuSnapshot, ports::MenuProvider};

/// Menu backing selected at startup.
#[derive(Debug, Clone)]
pub enum MenuBackend {
    Live(DiningSiteMenuProvider<HttpPageSource>),
    Static(StaticMenuProvider),
}

impl MenuProvider for MenuBackend {
    async fn get_menu(&self) -> MenuSnapshot {
        match self {
            MenuBackend::Live(provider) => provider.get_menu().await,
            MenuBackend::Static(provider) => provider.get_menu().await,
        }
    }
}
