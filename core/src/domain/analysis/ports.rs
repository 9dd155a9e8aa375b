use std::future::Future;

use crate::domain::{
    analysis::{entities::PlateAnalysis, value_objects::AnalyzePlateInput},
    common::entities::app_errors::CoreError,
};

/// Client for the multimodal completion endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn complete_with_image(
        &self,
        prompt: String,
        image_base64: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for plate analysis business logic.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze_plate(
        &self,
        input: AnalyzePlateInput,
    ) -> impl Future<Output = Result<PlateAnalysis, CoreError>> + Send;
}
