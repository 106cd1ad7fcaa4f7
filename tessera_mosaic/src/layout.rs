// The layout pass: copy a batch of flattened tiles into one canvas.
//
// `layout()` resolves a `MosaicGeometry`, allocates a canvas filled with the
// background value, and writes each tile into its cell in row-major order
// (row `y` outer, column `x` inner), matching input row order. Multi-channel
// rows are split into `channel_count` consecutive planes; each plane goes
// through the same single-channel pass and lands in one slice of a trailing
// channel axis.
//
// Validation happens entirely up front, so a failed call never produces a
// partially written canvas. No I/O, no shared state.

use ndarray::{Array2, Array3, ArrayView2, ArrayViewMut2, Axis, s};

use crate::error::MosaicError;
use crate::geometry::MosaicGeometry;
use crate::grid::GridShape;

/// Fill value for every canvas pixel not covered by a tile (white).
pub const BACKGROUND: f64 = 1.0;

/// Parameters for one `layout()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// `None` infers a square grid from the tile count.
    pub grid_shape: Option<GridShape>,
    /// Background pixels between adjacent tiles along both axes.
    pub spacing: usize,
    /// Number of consecutive planes per row.
    pub channel_count: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            grid_shape: None,
            spacing: 1,
            channel_count: 1,
        }
    }
}

impl LayoutOptions {
    pub fn with_grid(mut self, grid: impl Into<GridShape>) -> Self {
        self.grid_shape = Some(grid.into());
        self
    }

    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_channels(mut self, channel_count: usize) -> Self {
        self.channel_count = channel_count;
        self
    }
}

/// A finished composite image.
#[derive(Debug, Clone, PartialEq)]
pub enum Canvas {
    /// Single channel, indexed `[row, col]`.
    Plane(Array2<f64>),
    /// Several channels, indexed `[row, col, channel]`.
    Stacked(Array3<f64>),
}

impl Canvas {
    /// Spatial `(height, width)`.
    pub fn dims(&self) -> (usize, usize) {
        match self {
            Canvas::Plane(plane) => plane.dim(),
            Canvas::Stacked(stack) => {
                let (height, width, _) = stack.dim();
                (height, width)
            }
        }
    }

    pub fn channel_count(&self) -> usize {
        match self {
            Canvas::Plane(_) => 1,
            Canvas::Stacked(stack) => stack.len_of(Axis(2)),
        }
    }

    /// Full array shape, with the channel axis last when present.
    pub fn shape(&self) -> &[usize] {
        match self {
            Canvas::Plane(plane) => plane.shape(),
            Canvas::Stacked(stack) => stack.shape(),
        }
    }

    /// One channel as a 2-D view.
    pub fn channel(&self, channel: usize) -> Option<ArrayView2<'_, f64>> {
        match self {
            Canvas::Plane(plane) => (channel == 0).then(|| plane.view()),
            Canvas::Stacked(stack) => {
                (channel < stack.len_of(Axis(2))).then(|| stack.index_axis(Axis(2), channel))
            }
        }
    }

    /// Smallest and largest value on the canvas, or `None` if it is empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        match self {
            Canvas::Plane(plane) => min_max(plane.iter().copied()),
            Canvas::Stacked(stack) => min_max(stack.iter().copied()),
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |range, v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

impl From<Array2<f64>> for Canvas {
    fn from(plane: Array2<f64>) -> Self {
        Canvas::Plane(plane)
    }
}

/// Lay out `tiles` (one flattened tile per row) into a single canvas.
pub fn layout(tiles: ArrayView2<'_, f64>, options: &LayoutOptions) -> Result<Canvas, MosaicError> {
    let (tile_count, row_length) = tiles.dim();
    let geometry = MosaicGeometry::resolve(tile_count, row_length, options)?;
    let (height, width) = geometry.canvas_dims();
    log::debug!(
        "mosaic: {} tiles of {}x{} in a {}x{} grid, spacing {}, {} channel(s) -> {}x{}",
        tile_count,
        geometry.tile_size,
        geometry.tile_size,
        geometry.rows,
        geometry.cols,
        geometry.spacing,
        geometry.channel_count,
        height,
        width,
    );

    if geometry.channel_count == 1 {
        let mut plane = Array2::from_elem((height, width), BACKGROUND);
        place_tiles(tiles, &geometry, plane.view_mut());
        return Ok(Canvas::Plane(plane));
    }

    let mut stack = Array3::from_elem((height, width, geometry.channel_count), BACKGROUND);
    let length = geometry.tile_length;
    for channel in 0..geometry.channel_count {
        let start = channel * length;
        let planes = tiles.slice(s![.., start..start + length]);
        place_tiles(planes, &geometry, stack.index_axis_mut(Axis(2), channel));
    }
    Ok(Canvas::Stacked(stack))
}

/// Single-channel pass. `tiles` rows are exactly `tile_size²` long.
fn place_tiles(
    tiles: ArrayView2<'_, f64>,
    geometry: &MosaicGeometry,
    mut canvas: ArrayViewMut2<'_, f64>,
) {
    let size = geometry.tile_size;
    let stride = geometry.stride();
    for y in 0..geometry.rows {
        for x in 0..geometry.cols {
            let index = y * geometry.cols + x;
            if index >= tiles.nrows() {
                // Row-major: every remaining cell is past the last tile.
                return;
            }
            let pixels = tiles.row(index);
            let (top, left) = (y * stride, x * stride);
            let mut cell = canvas.slice_mut(s![top..top + size, left..left + size]);
            for r in 0..size {
                cell.row_mut(r).assign(&pixels.slice(s![r * size..(r + 1) * size]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, ShapeError};
    use ndarray::array;

    #[test]
    fn single_tile_has_no_border() {
        let tiles = array![[0.1, 0.2, 0.3, 0.4]];
        let canvas = layout(tiles.view(), &LayoutOptions::default().with_grid(1usize)).unwrap();
        assert_eq!(canvas, Canvas::Plane(array![[0.1, 0.2], [0.3, 0.4]]));
    }

    #[test]
    fn four_tiles_with_gutter() {
        let tiles = Array2::from_shape_fn((4, 4), |(i, j)| (i * 4 + j) as f64 / 100.0);
        let canvas = layout(tiles.view(), &LayoutOptions::default().with_grid((2usize, 2usize)))
            .unwrap();
        let Canvas::Plane(plane) = canvas else {
            panic!("expected a single-channel canvas");
        };
        assert_eq!(plane.dim(), (5, 5));
        assert_eq!(plane.slice(s![0..2, 0..2]), array![[0.0, 0.01], [0.02, 0.03]]);
        assert_eq!(plane.slice(s![3..5, 3..5]), array![[0.12, 0.13], [0.14, 0.15]]);
        assert!(plane.row(2).iter().all(|&v| v == BACKGROUND));
        assert!(plane.column(2).iter().all(|&v| v == BACKGROUND));
    }

    #[test]
    fn zero_spacing_packs_tiles_flush() {
        let tiles = array![[0.0, 0.0, 0.0, 0.0], [0.5, 0.5, 0.5, 0.5]];
        let canvas = layout(
            tiles.view(),
            &LayoutOptions::default()
                .with_grid((1usize, 2usize))
                .with_spacing(0),
        )
        .unwrap();
        assert_eq!(
            canvas,
            Canvas::Plane(array![[0.0, 0.0, 0.5, 0.5], [0.0, 0.0, 0.5, 0.5]])
        );
    }

    #[test]
    fn cells_past_the_last_tile_stay_background() {
        let tiles = Array2::<f64>::zeros((3, 4));
        let canvas = layout(tiles.view(), &LayoutOptions::default().with_grid(2usize)).unwrap();
        let plane = canvas.channel(0).unwrap();
        assert!(plane.slice(s![3..5, 3..5]).iter().all(|&v| v == BACKGROUND));
        assert!(plane.slice(s![3..5, 0..2]).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn inferred_grid_for_nine_tiles() {
        let tiles = Array2::<f64>::zeros((9, 16));
        let canvas = layout(tiles.view(), &LayoutOptions::default()).unwrap();
        // (4 + 1) * 3 - 1
        assert_eq!(canvas.dims(), (14, 14));
    }

    #[test]
    fn three_channels_add_trailing_axis() {
        let tiles = Array2::from_shape_fn((4, 12), |(i, j)| (i * 12 + j) as f64);
        let canvas = layout(tiles.view(), &LayoutOptions::default().with_channels(3)).unwrap();
        assert_eq!(canvas.shape(), &[5, 5, 3]);
        assert_eq!(canvas.channel_count(), 3);
        // Tile 0, channel 1 starts at flattened index 4.
        assert_eq!(canvas.channel(1).unwrap()[[0, 0]], 4.0);
        assert!(canvas.channel(3).is_none());
    }

    #[test]
    fn ten_tiles_need_an_explicit_grid() {
        let tiles = Array2::<f64>::zeros((10, 4));
        assert!(matches!(
            layout(tiles.view(), &LayoutOptions::default()),
            Err(MosaicError::Configuration(ConfigurationError::Unresolvable { .. }))
        ));
        let options = LayoutOptions::default().with_grid((2usize, 5usize));
        assert!(layout(tiles.view(), &options).is_ok());
    }

    #[test]
    fn non_square_tile_is_a_shape_error() {
        let tiles = Array2::<f64>::zeros((4, 6));
        assert_eq!(
            layout(tiles.view(), &LayoutOptions::default()),
            Err(MosaicError::Shape(ShapeError::NotSquare { tile_length: 6 }))
        );
    }

    #[test]
    fn value_range_spans_tiles_and_background() {
        let tiles = array![[0.25, 0.25, 0.25, 0.25], [0.5, 0.5, 0.5, 0.5]];
        let canvas = layout(tiles.view(), &LayoutOptions::default().with_grid((1usize, 2usize)))
            .unwrap();
        assert_eq!(canvas.value_range(), Some((0.25, 1.0)));
    }
}
