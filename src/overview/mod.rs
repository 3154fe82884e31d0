//! Overview placement engine.
//!
//! Lays a whole solution out on a sparse, unbounded grid: reactors and
//! cataloged components claim rectangular footprints, pipes color the
//! cells they pass through, and the level's fixed components are placed
//! underneath at the end. The output is a map from cell coordinates to
//! small tag sequences the overview template walks.

mod catalog;

use std::collections::BTreeMap;

use crate::model::{Level, Solution};

pub use catalog::{Footprint, PIPE_PALETTE, REACTOR_FOOTPRINT, lookup, pipe_color};

// =============================================================================
// Cell entries
// =============================================================================

/// One tag in an overview cell, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverviewEntry {
    /// Origin of a reactor glyph, carrying the 1-based reactor number.
    Reactor(u32),
    /// Origin of a cataloged component glyph with its clipped size.
    Component {
        type_name: String,
        width: i32,
        height: i32,
        label: &'static str,
    },
    /// Origin of an unrecognized component type.
    Unknown(String),
    /// A pipe segment color. As the first entry it marks a pipe-only
    /// cell; appended after other content it marks a junction passing
    /// through an occupied cell.
    Pipe(&'static str),
    /// Covered by a larger glyph whose origin is elsewhere.
    Skip,
}

// =============================================================================
// OverviewGrid
// =============================================================================

/// Sparse overview grid keyed by `(x, y)`.
///
/// Backed by an ordered map so iteration (and therefore rendering and
/// comparison) is reproducible across builds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverviewGrid {
    cells: BTreeMap<(i32, i32), Vec<OverviewEntry>>,
}

impl OverviewGrid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries at a cell, or `None` where nothing was placed.
    pub fn get(&self, x: i32, y: i32) -> Option<&[OverviewEntry]> {
        self.cells.get(&(x, y)).map(Vec::as_slice)
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether any cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate occupied cells in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), &[OverviewEntry])> {
        self.cells.iter().map(|(&pos, entries)| (pos, entries.as_slice()))
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> &mut Vec<OverviewEntry> {
        self.cells.entry((x, y)).or_default()
    }
}

// =============================================================================
// Building
// =============================================================================

/// Place a solution's components and pipes, then the level's fixed
/// components, onto one sparse grid.
pub fn build_overview(solution: &Solution, level: &Level) -> OverviewGrid {
    let mut grid = OverviewGrid::new();
    let mut reactor_num = 1u32;

    for (index, component) in solution.components.iter().enumerate() {
        // 1-based, drives pipe coloring only
        let component_index = index + 1;
        let base_x = component.x;
        let base_y = component.y;

        // The overview matches the -reactor suffix; the reactor grid
        // pass is looser about it.
        if component.type_name.ends_with("-reactor") {
            grid.cell_mut(base_x, base_y).push(OverviewEntry::Reactor(reactor_num));
            reactor_num += 1;
            for x in 0..REACTOR_FOOTPRINT.width {
                for y in 0..REACTOR_FOOTPRINT.height {
                    if x != 0 || y != 0 {
                        grid.cell_mut(base_x + x, base_y + y).push(OverviewEntry::Skip);
                    }
                }
            }
        } else if let Some(footprint) = catalog::lookup(&component.type_name) {
            place_component(&mut grid, &component.type_name, footprint, base_x, base_y);
        } else {
            grid.cell_mut(base_x, base_y)
                .push(OverviewEntry::Unknown(component.type_name.clone()));
        }

        for pipe in &component.pipes {
            let color = catalog::pipe_color(component_index, pipe.output_id);
            grid.cell_mut(base_x + pipe.x, base_y + pipe.y).push(OverviewEntry::Pipe(color));
        }
    }

    // Fixed components render underneath the player's, so they append
    // regardless of what already occupies their cells.
    for fixed in &level.fixed_components {
        if let Some(footprint) = catalog::lookup(&fixed.type_name) {
            place_component(&mut grid, &fixed.type_name, footprint, fixed.x, fixed.y);
        } else {
            grid.cell_mut(fixed.x, fixed.y)
                .push(OverviewEntry::Unknown(fixed.type_name.clone()));
        }
    }

    grid
}

/// Place one cataloged component, clipping the footprint where its
/// declared origin hangs off the top or left of the grid.
fn place_component(
    grid: &mut OverviewGrid,
    type_name: &str,
    footprint: Footprint,
    mut start_x: i32,
    mut start_y: i32,
) {
    let mut width = footprint.width;
    let mut height = footprint.height;

    if start_x < 0 {
        width += start_x;
        start_x = 0;
    }
    if start_y < 0 {
        height += start_y;
        start_y = 0;
    }

    grid.cell_mut(start_x, start_y).push(OverviewEntry::Component {
        type_name: type_name.to_string(),
        width,
        height,
        label: footprint.label,
    });
    for x in 0..width {
        for y in 0..height {
            if x != 0 || y != 0 {
                grid.cell_mut(start_x + x, start_y + y).push(OverviewEntry::Skip);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
