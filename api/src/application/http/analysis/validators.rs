use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzePlateRequest {
    /// Base64-encoded photo of the plate.
    #[serde(default)]
    #[validate(length(min = 1, message = "No image provided"))]
    pub image: String,
}
