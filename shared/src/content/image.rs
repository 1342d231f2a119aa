//! Image reference model

use serde::{Deserialize, Serialize};

/// Reference to an image asset in the content store
///
/// The asset itself lives on the remote image CDN; all this carries is
/// the asset id plus an optional crop focal point chosen by the editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub hotspot: Option<Hotspot>,
}

impl ImageRef {
    /// Raw asset reference (`image-<id>-<WxH>-<fmt>`), if present
    pub fn asset_ref(&self) -> Option<&str> {
        self.asset.as_ref().map(|a| a.reference.as_str())
    }
}

/// The `asset` sub-object (`{"_ref": "image-...", "_type": "reference"}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", default)]
    pub reference: String,
}

/// Fractional focal point used to bias cropping
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}
