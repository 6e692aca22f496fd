//! Rendering hand-off
//!
//! The core never draws. Each frame it produces either a display list of
//! sprite draws for a 2D canvas backend, or a plain snapshot of what is
//! visible. Neither touches the simulation.

pub mod frame;
pub mod snapshot;

pub use frame::{DrawCommand, build_frame};
pub use snapshot::{BallView, RenderSnapshot};
