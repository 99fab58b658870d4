use serde::{Deserialize, Serialize};

/// Reconstruction filter description, resolved through the
/// `reconstructionFilterMetadataRef` role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconstructionFilterMetadata {
    pub target_width: u32,
    pub target_height: u32,
    pub num_kernels_x: u32,
    pub num_kernels_y: u32,
    pub camera_model: String,
    pub zoom_step: i32,
    pub focus_step: i32,
    /// Block name of the filter kernels.
    pub image_file: String,
    #[serde(default)]
    pub lambdas: Vec<f64>,
}
