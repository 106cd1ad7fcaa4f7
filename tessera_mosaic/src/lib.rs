// tessera_mosaic — grid mosaic layout of flattened image tiles.
//
// Given N flattened square tiles (optionally several channels per row), this
// crate picks a 2-D grid arrangement, allocates a composite canvas with
// background-filled gaps between tiles, and copies each tile into its cell.
// It is pure and stateless: no I/O, no globals, safe to call from any
// number of threads at once.
//
// Module overview:
// - `grid.rs`:     GridShape and grid resolution (inference, broadcasting,
//                  size checks).
// - `geometry.rs`: MosaicGeometry — validated tile size, grid and spacing,
//                  plus cell addressing for reading tiles back out.
// - `layout.rs`:   `layout()`, LayoutOptions and the Canvas output type.
// - `batch.rs`:    TileBatch, an owned (N, L) batch built from nested rows.
// - `error.rs`:    ShapeError / ConfigurationError / MosaicError.
//
// Rendering, file loading and dataset semantics live in the companion
// crates `tessera_render` and `tessera_music`.

pub mod batch;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;

pub use batch::TileBatch;
pub use error::{ConfigurationError, MosaicError, ShapeError};
pub use geometry::MosaicGeometry;
pub use grid::GridShape;
pub use layout::{BACKGROUND, Canvas, LayoutOptions, layout};
