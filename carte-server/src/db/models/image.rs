//! Image value object
//!
//! 内嵌于餐厅和菜品记录，仅用于展示。

use serde::{Deserialize, Serialize};

/// Presentation image: storage path plus optional rendering hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Storage path within the image CDN
    pub path: String,
    /// Dominant color hint (e.g. "#aabbcc")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Blurhash placeholder string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_hash: Option<String>,
}

impl Image {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            color: None,
            blur_hash: None,
        }
    }
}
