// Render configuration.
//
// `RenderConfig` gathers the knobs shared by the command-line tools: the
// mosaic layout (grid, spacing, channels) and the PNG output (integer
// upscaling, value normalization). It can be loaded from a JSON file; any
// field left out takes its default, and command-line flags applied
// afterwards override file values (see `args.rs`).
//
// Example file:
//
//     { "scale": 4, "grid": [10, 20], "spacing": 2 }

use std::path::Path;

use serde::{Deserialize, Serialize};
use tessera_mosaic::{GridShape, LayoutOptions, MosaicError};

use crate::error::RenderError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Each canvas pixel becomes a `scale × scale` block of output pixels.
    pub scale: u32,
    /// Stretch the canvas value range to the full 0..=255 output range.
    /// When false, values are clamped to [0, 1].
    pub normalize: bool,
    /// Background pixels between adjacent tiles.
    pub spacing: usize,
    /// Consecutive planes per tile row.
    pub channel_count: usize,
    /// Grid dimensions: `[side]` or `[rows, cols]`. `None` infers a square
    /// grid from the tile count.
    pub grid: Option<Vec<usize>>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            scale: 1,
            normalize: true,
            spacing: 1,
            channel_count: 1,
            grid: None,
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let data = std::fs::read_to_string(path)?;
        let config: RenderConfig = serde_json::from_str(&data)?;
        log::info!("loaded render config from {}", path.display());
        Ok(config)
    }

    /// Layout options for `tessera_mosaic::layout`.
    pub fn layout_options(&self) -> Result<LayoutOptions, RenderError> {
        let grid_shape = self
            .grid
            .as_deref()
            .map(GridShape::from_dims)
            .transpose()
            .map_err(MosaicError::from)?;
        Ok(LayoutOptions {
            grid_shape,
            spacing: self.spacing,
            channel_count: self.channel_count,
        })
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.scale == 0 {
            return Err(RenderError::BadArgument("scale must be at least 1".into()));
        }
        Ok(())
    }
}
