//! Core types shared by the backdrop crates.
//!
//! This crate holds the plain data the animations work with (points, sizes,
//! colors, themes), the [`Surface`] drawing contract with its recording
//! implementation [`DrawList`], and the frame scheduling primitives that
//! drive every animation tick.

mod color;
mod frame;
mod geometry;
mod surface;
mod theme;

pub use color::{CYAN, PRIMARY_BLUE, Rgba};
pub use frame::{FrameHandle, FrameQueue, FrameScheduler};
pub use geometry::{Point, Size};
pub use surface::{DrawCommand, DrawList, Stroke, Surface};
pub use theme::{Scene, Theme};
