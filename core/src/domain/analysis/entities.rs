use serde::{Deserialize, Serialize};

/// Text the model produced for one plate photo. Constructed per request,
/// relayed to the caller, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateAnalysis {
    pub summary: String,
}
