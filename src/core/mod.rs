//! Screen model
//!
//! The platform-independent buffer side of the interpreter:
//! - Cell and color representation
//! - The character/color grid
//! - Bresenham line rasterization
//! - The screen (bounds policy, setup/clear, drawing operations)
//! - Serializable snapshots for headless testing
//!
//! Nothing here touches a terminal; output goes through `crate::render`.

pub mod cell;
pub mod color;
pub mod grid;
pub mod raster;
pub mod screen;
pub mod snapshot;

pub use cell::Cell;
pub use color::{ColorIndex, NamedColor};
pub use grid::Grid;
pub use raster::LinePoints;
pub use screen::Screen;
pub use snapshot::Snapshot;
