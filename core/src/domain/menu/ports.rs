use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, menu::entities::MenuSnapshot};

/// Produces the menu snapshot used as analysis context.
///
/// Acquisition is best-effort: implementations absorb their own failures and
/// return a fallback or empty snapshot instead of propagating an error.
#[cfg_attr(test, mockall::automock)]
pub trait MenuProvider: Send + Sync {
    fn get_menu(&self) -> impl Future<Output = MenuSnapshot> + Send;
}

/// Collaborator that loads a URL and exposes the rendered page text.
#[cfg_attr(test, mockall::automock)]
pub trait MenuPageSource: Send + Sync {
    fn fetch_rendered(&self, url: &str) -> impl Future<Output = Result<String, CoreError>> + Send;
}
