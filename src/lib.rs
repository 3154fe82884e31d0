//! # solnet-layout
//!
//! Layout engine for rendering uploaded puzzle solutions.
//!
//! Takes the typed, positioned records the persistence layer loads from a
//! save file and turns them into the static structures the page templates
//! draw: per-cell glyph stacks and traced instruction wires for each
//! reactor, and a sparse placement grid for the whole-solution overview.
//!
//! ## Pipeline
//!
//! ```text
//! Solution records → build_solution → [ReactorLayout] ─┐
//!                                                      ├→ template renderer
//! Solution + Level → build_overview → OverviewGrid  ───┘
//! ```
//!
//! Both builders are pure: no I/O, no shared state, one freshly built
//! structure per call. Concurrent renders need no coordination.
//!
//! ## Modules
//!
//! - [`types`] - Directions, direction sets, path color channels
//! - [`model`] - Input records and the member glyph catalog
//! - [`reactor`] - 10x8 reactor grids and wire path tracing
//! - [`overview`] - Sparse whole-solution placement

pub mod model;
pub mod overview;
pub mod reactor;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use model::{
    Component, ELEMENTS, FixedComponent, Level, Member, MemberKind, Pipe, Solution,
    element_symbol,
};

pub use reactor::{
    PathCell, PathState, QueuedPath, ReactorGrid, ReactorLayout, VisualEntry, build_reactor,
    build_solution,
};

pub use overview::{
    Footprint, OverviewEntry, OverviewGrid, PIPE_PALETTE, build_overview, pipe_color,
};
