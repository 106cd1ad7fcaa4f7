// JSON loaders.
//
// Every input is a plain JSON array of numbers:
// - a batch of flattened tiles: `[[...], [...], ...]`, one tile per row;
// - a single flattened square image: `[...]`;
// - a sequence of per-step key vectors: `[[...], [...], ...]`, one step per
//   row (the piano-roll input).
// Integers and floats are both accepted.

use std::path::Path;

use ndarray::Array2;
use serde::de::DeserializeOwned;
use tessera_mosaic::geometry::tile_side;
use tessera_mosaic::{MosaicError, TileBatch};

use crate::error::RenderError;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, RenderError> {
    let data = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}

/// Load a batch of flattened tiles.
pub fn load_batch(path: &Path) -> Result<TileBatch, RenderError> {
    let rows: Vec<Vec<f64>> = read_json(path)?;
    let batch = TileBatch::from_rows(&rows).map_err(MosaicError::from)?;
    log::info!(
        "loaded {} tile(s) of {} values from {}",
        batch.tile_count(),
        batch.row_length(),
        path.display()
    );
    Ok(batch)
}

/// Load one flattened square image and reshape it to `side × side`.
pub fn load_image(path: &Path) -> Result<Array2<f64>, RenderError> {
    let pixels: Vec<f64> = read_json(path)?;
    let image = square_image(&pixels)?;
    log::info!(
        "loaded {}x{} image from {}",
        image.nrows(),
        image.ncols(),
        path.display()
    );
    Ok(image)
}

/// Reshape a flat pixel list into a square array.
pub fn square_image(pixels: &[f64]) -> Result<Array2<f64>, RenderError> {
    let side = tile_side(pixels.len()).map_err(MosaicError::from)?;
    Ok(Array2::from_shape_fn((side, side), |(r, c)| {
        pixels[r * side + c]
    }))
}

/// Load a sequence of per-step vectors.
pub fn load_sequence(path: &Path) -> Result<Vec<Vec<f64>>, RenderError> {
    let steps: Vec<Vec<f64>> = read_json(path)?;
    log::info!("loaded {} step(s) from {}", steps.len(), path.display());
    Ok(steps)
}
