/// Service aggregate over the injected adapters. Trait implementations in
/// `domain::<feature>::services` attach the business operations.
#[derive(Debug, Clone)]
pub struct Service<M, L> {
    pub(crate) menu_provider: M,
    pub(crate) llm_client: L,
}

impl<M, L> Service<M, L> {
    pub fn new(menu_provider: M, llm_client: L) -> Self {
        Self {
            menu_provider,
            llm_client,
        }
    }
}
