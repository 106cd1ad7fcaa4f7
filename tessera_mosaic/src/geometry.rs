// Resolved mosaic geometry.
//
// `MosaicGeometry` is the validated outcome of steps 1-3 of a layout: the
// per-channel tile length, the square tile side, the concrete grid, and the
// spacing. Both the layout pass and callers that want to read tiles back out
// of a finished canvas use it to locate cells.
//
// Canvas extent per axis is `(tile_size + spacing) * grid_dim - spacing`:
// exactly `spacing` background pixels between neighbours, no border after
// the last tile. `resolve` rejects geometries whose canvas element count
// would not fit in `isize`, so the arithmetic below cannot overflow.

use ndarray::{ArrayView2, s};

use crate::error::{ConfigurationError, MosaicError, ShapeError};
use crate::grid::{exact_sqrt, resolve_grid};
use crate::layout::LayoutOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicGeometry {
    /// Number of tiles in the batch.
    pub tile_count: usize,
    /// Flattened pixel count of one tile in one channel.
    pub tile_length: usize,
    /// Side length of a square tile.
    pub tile_size: usize,
    pub rows: usize,
    pub cols: usize,
    pub spacing: usize,
    pub channel_count: usize,
}

impl MosaicGeometry {
    /// Validate a batch of `tile_count` rows of `row_length` values against
    /// the layout options.
    pub fn resolve(
        tile_count: usize,
        row_length: usize,
        options: &LayoutOptions,
    ) -> Result<Self, MosaicError> {
        let channel_count = options.channel_count;
        if channel_count == 0 {
            return Err(ConfigurationError::ZeroChannels.into());
        }
        let tile_length = channel_tile_length(row_length, channel_count)?;
        let tile_size = tile_side(tile_length)?;
        let (rows, cols) = resolve_grid(options.grid_shape, tile_count)?;
        let geometry = MosaicGeometry {
            tile_count,
            tile_length,
            tile_size,
            rows,
            cols,
            spacing: options.spacing,
            channel_count,
        };
        geometry.check_canvas_size()?;
        Ok(geometry)
    }

    fn check_canvas_size(&self) -> Result<(), ConfigurationError> {
        let too_large = ConfigurationError::CanvasTooLarge {
            rows: self.rows,
            cols: self.cols,
            tile_size: self.tile_size,
            spacing: self.spacing,
        };
        let len = self
            .tile_size
            .checked_add(self.spacing)
            .and_then(|stride| {
                // `stride * dim >= stride > spacing`, so the subtraction is safe.
                let height = stride.checked_mul(self.rows)? - self.spacing;
                let width = stride.checked_mul(self.cols)? - self.spacing;
                height.checked_mul(width)?.checked_mul(self.channel_count)
            })
            .ok_or_else(|| too_large.clone())?;
        if len > isize::MAX as usize {
            return Err(too_large);
        }
        Ok(())
    }

    /// Distance between the origins of neighbouring cells.
    pub fn stride(&self) -> usize {
        self.tile_size + self.spacing
    }

    /// Spatial `(height, width)` of the canvas.
    pub fn canvas_dims(&self) -> (usize, usize) {
        let stride = self.stride();
        (
            stride * self.rows - self.spacing,
            stride * self.cols - self.spacing,
        )
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Top-left pixel of the cell holding tile `index`, in row-major order.
    pub fn cell_origin(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.cell_count() {
            return None;
        }
        let stride = self.stride();
        Some((index / self.cols * stride, index % self.cols * stride))
    }

    /// View of tile `index` inside one canvas plane.
    pub fn tile_view<'a>(
        &self,
        plane: ArrayView2<'a, f64>,
        index: usize,
    ) -> Option<ArrayView2<'a, f64>> {
        let (top, left) = self.cell_origin(index)?;
        let size = self.tile_size;
        if plane.nrows() < top + size || plane.ncols() < left + size {
            return None;
        }
        Some(plane.slice_move(s![top..top + size, left..left + size]))
    }
}

/// Length of one channel's plane within a row.
pub fn channel_tile_length(row_length: usize, channel_count: usize) -> Result<usize, ShapeError> {
    if channel_count == 0 || row_length % channel_count != 0 {
        return Err(ShapeError::NotDivisible {
            row_length,
            channel_count,
        });
    }
    Ok(row_length / channel_count)
}

/// Side length of a square tile holding `tile_length` pixels.
pub fn tile_side(tile_length: usize) -> Result<usize, ShapeError> {
    if tile_length == 0 {
        return Err(ShapeError::EmptyTile);
    }
    exact_sqrt(tile_length).ok_or(ShapeError::NotSquare { tile_length })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridShape;

    fn options(grid: GridShape, spacing: usize) -> LayoutOptions {
        LayoutOptions {
            grid_shape: Some(grid),
            spacing,
            channel_count: 1,
        }
    }

    #[test]
    fn canvas_dims_include_spacing_between_cells_only() {
        let geom = MosaicGeometry::resolve(4, 4, &options(GridShape::Square(2), 1)).unwrap();
        assert_eq!(geom.tile_size, 2);
        assert_eq!(geom.canvas_dims(), (5, 5));

        let single = MosaicGeometry::resolve(1, 4, &options(GridShape::Square(1), 1)).unwrap();
        assert_eq!(single.canvas_dims(), (2, 2));
    }

    #[test]
    fn rectangular_grid_with_wide_spacing() {
        let grid = GridShape::Rect { rows: 2, cols: 3 };
        let geom = MosaicGeometry::resolve(6, 9, &options(grid, 2)).unwrap();
        // (3 + 2) * 2 - 2 = 8, (3 + 2) * 3 - 2 = 13
        assert_eq!(geom.canvas_dims(), (8, 13));
    }

    #[test]
    fn cell_origins_are_row_major() {
        let grid = GridShape::Rect { rows: 2, cols: 3 };
        let geom = MosaicGeometry::resolve(6, 4, &options(grid, 1)).unwrap();
        assert_eq!(geom.cell_origin(0), Some((0, 0)));
        assert_eq!(geom.cell_origin(1), Some((0, 3)));
        assert_eq!(geom.cell_origin(2), Some((0, 6)));
        assert_eq!(geom.cell_origin(3), Some((3, 0)));
        assert_eq!(geom.cell_origin(5), Some((3, 6)));
        assert_eq!(geom.cell_origin(6), None);
    }

    #[test]
    fn channel_length_must_divide_row() {
        assert_eq!(channel_tile_length(12, 3), Ok(4));
        assert_eq!(
            channel_tile_length(10, 3),
            Err(ShapeError::NotDivisible {
                row_length: 10,
                channel_count: 3
            })
        );
    }

    #[test]
    fn tile_side_requires_perfect_square() {
        assert_eq!(tile_side(784), Ok(28));
        assert_eq!(tile_side(5), Err(ShapeError::NotSquare { tile_length: 5 }));
        assert_eq!(tile_side(0), Err(ShapeError::EmptyTile));
    }

    #[test]
    fn zero_channels_is_a_configuration_error() {
        let opts = LayoutOptions {
            channel_count: 0,
            ..LayoutOptions::default()
        };
        assert_eq!(
            MosaicGeometry::resolve(4, 4, &opts),
            Err(MosaicError::Configuration(ConfigurationError::ZeroChannels))
        );
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let huge_grid = options(GridShape::Square(1 << 62), 1);
        assert!(matches!(
            MosaicGeometry::resolve(1, 4, &huge_grid),
            Err(MosaicError::Configuration(ConfigurationError::CanvasTooLarge { .. }))
        ));

        let huge_spacing = options(GridShape::Square(1), usize::MAX);
        assert_eq!(
            MosaicGeometry::resolve(1, 4, &huge_spacing),
            Err(MosaicError::Configuration(ConfigurationError::CanvasTooLarge {
                rows: 1,
                cols: 1,
                tile_size: 2,
                spacing: usize::MAX,
            }))
        );

        // Each axis fits, but the element count does not.
        let wide = options(GridShape::Rect { rows: 1 << 31, cols: 1 << 31 }, 0);
        assert!(MosaicGeometry::resolve(1, 4, &wide).is_err());
    }

    #[test]
    fn shape_is_checked_before_grid() {
        // Both the tile and the grid are invalid; the tile error wins.
        let err = MosaicGeometry::resolve(10, 5, &LayoutOptions::default()).unwrap_err();
        assert_eq!(err, MosaicError::Shape(ShapeError::NotSquare { tile_length: 5 }));
    }
}
