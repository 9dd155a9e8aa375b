#[derive(Debug, Clone)]
pub struct AnalyzePlateInput {
    /// Base64-encoded plate photo, relayed to the inference endpoint as-is.
    pub image_base64: String,
}
