use crate::domain::{
    analysis::{
        entities::PlateAnalysis,
        ports::{AnalysisService, LlmClient},
        prompt::compose_prompt,
        value_objects::AnalyzePlateInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    menu::ports::MenuProvider,
};

impl<M, L> AnalysisService for Service<M, L>
where
    M: MenuProvider,
    L: LlmClient,
{
    async fn analyze_plate(&self, input: AnalyzePlateInput) -> Result<PlateAnalysis, CoreError> {
        let menu = self.menu_provider.get_menu().await;
        if menu.is_empty() {
            tracing::warn!("menu snapshot is empty, analysis runs without menu context");
        } else {
            tracing::debug!(
                locations = menu.location_count(),
                items = menu.item_count(),
                "acquired menu snapshot"
            );
        }

        let prompt = compose_prompt(&menu);
        tracing::debug!(prompt_len = prompt.len(), "composed analysis prompt");

        let summary = self
            .llm_client
            .complete_with_image(prompt, input.image_base64)
            .await?;

        Ok(PlateAnalysis { summary })
    }
}
