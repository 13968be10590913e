//! Glyphstream
//!
//! An interpreter for a compact binary drawing command stream. One byte of
//! opcode selects an operation; the interpreter paints characters, lines,
//! and text into a fixed-size character/color grid and renders the result
//! to a text display surface.
//!
//! - `core`: screen model (grid, cells, colors, line rasterization)
//! - `parser`: wire format decoding into commands
//! - `session`: decode loop applying commands to the screen
//! - `render`: display surface trait plus console and headless backends
//!
//! The display surface is injected, so everything runs headlessly in tests.

pub mod core;
pub mod error;
pub mod parser;
pub mod render;
pub mod session;

pub use error::StreamError;
pub use session::Session;
