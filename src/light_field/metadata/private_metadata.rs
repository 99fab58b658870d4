use serde::{Deserialize, Serialize};

/// Serial numbers, resolved through the `privateMetadataRef` role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateMetadata {
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub generator: String,
    pub camera: PrivateCamera,
    pub devices: PrivateDevices,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateCamera {
    pub serial_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateDevices {
    pub sensor: PrivateSensor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateSensor {
    pub serial_number: String,
}
