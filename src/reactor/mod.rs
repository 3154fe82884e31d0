//! Reactor grid and path-tracing engine.
//!
//! For each reactor component this module builds:
//! - a 10x8 map of visual entry stacks (what glyphs sit in each cell), and
//! - per-channel path state (which cell edges the blue and red wires touch).
//!
//! The flow mirrors how a reactor is drawn: scan members into cell stacks
//! while noting arrows and path origins, then trace every origin through
//! the recorded direction changes.

mod builder;
mod grid;
mod path;

pub use builder::{build_reactor, build_solution};
pub use grid::{PathCell, PathState, ReactorGrid, ReactorLayout, VisualEntry};
pub use path::{QueuedPath, trace};
