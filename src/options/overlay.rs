use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Overlay sizing and edge clamping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Overlay", inline)]
#[serde(default)]
pub struct OverlayOptions {
    /// Upper bound on overlay width in pixels.
    #[schemars(title = "Max Width", range(min = 100.0, max = 2000.0), extend("step" = 10.0))]
    pub max_width: f32,
    /// Upper bound on overlay height in pixels.
    #[schemars(title = "Max Height", range(min = 100.0, max = 2000.0), extend("step" = 10.0))]
    pub max_height: f32,
    /// Largest share of the viewport the overlay may cover per axis.
    #[schemars(title = "Viewport Fraction", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub viewport_fraction: f32,
    /// Minimum distance from every viewport edge.
    #[schemars(title = "Margin", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub margin: f32,
    /// Upper bound on inner padding.
    #[schemars(skip)]
    pub max_padding: f32,
    /// Padding as a share of overlay width.
    #[schemars(skip)]
    pub padding_fraction: f32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            max_width: 800.0,
            max_height: 600.0,
            viewport_fraction: 0.8,
            margin: 20.0,
            max_padding: 30.0,
            padding_fraction: 0.05,
        }
    }
}
