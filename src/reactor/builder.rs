//! Reactor layout building.
//!
//! One pass over a reactor's members fills the visual cell stacks,
//! records arrow direction overrides, and queues path starts; the queued
//! starts are traced afterward so an arrow sharing a start's cell is
//! already known when the walk begins.

use crate::model::{Component, MemberKind, Solution};
use crate::types::REACTOR_WIDTH;

use super::grid::{PathState, ReactorGrid, ReactorLayout, VisualEntry};
use super::path::{self, QueuedPath};

// =============================================================================
// Building
// =============================================================================

/// Build layouts for every reactor component of a solution, in the
/// component order the persistence layer supplied.
pub fn build_solution(solution: &Solution) -> Vec<ReactorLayout> {
    solution
        .components
        .iter()
        .filter(|component| component.is_reactor())
        .map(build_reactor)
        .collect()
}

/// Build the cell stacks and traced paths for a single reactor.
pub fn build_reactor(component: &Component) -> ReactorLayout {
    let mut cells: ReactorGrid<Vec<VisualEntry>> = ReactorGrid::new();
    let mut paths = PathState::new();
    let mut queued: Vec<QueuedPath> = Vec::new();

    for member in &component.members {
        let color = member.color();

        // Path origins are queued, not traced yet: a later arrow in the
        // same cell must be able to override the start direction.
        if member.kind.starts_path() {
            if let Some(channel) = color.channel() {
                queued.push(QueuedPath {
                    start_kind: member.kind,
                    start_pos: (member.x, member.y),
                    start_dir: member.arrow_dir,
                    color: channel,
                });
            }
        }

        if member.kind == MemberKind::Arrow {
            if let Some(channel) = color.channel() {
                if let Some(cell) = paths.channel_mut(channel).get_mut(member.x, member.y) {
                    cell.dir_change = Some(member.arrow_dir);
                }
            }
        }

        // Class for the img/div pair: color alone unless it's directional
        let class = if member.kind == MemberKind::Arrow {
            format!("{}-arrow", color.name())
        } else if member.kind.starts_path() {
            format!("{} {}", color.name(), member.arrow_dir.letter())
        } else {
            color.name().to_string()
        };

        // Fusers and splitters span two columns; the second half lands in
        // the cell to the right when that column exists.
        if member.kind.is_double_wide() && member.x < REACTOR_WIDTH - 1 {
            if let Some(stack) = cells.get_mut(member.x + 1, member.y) {
                stack.push(VisualEntry {
                    image: member.image_name().replace(".png", "2.png"),
                    class: class.clone(),
                    element: None,
                });
            }
        }

        if let Some(stack) = cells.get_mut(member.x, member.y) {
            stack.push(VisualEntry {
                image: member.image_name(),
                class,
                element: if member.kind == MemberKind::Sensor {
                    member.element
                } else {
                    None
                },
            });
        }
    }

    path::trace(&mut paths, &queued);

    ReactorLayout {
        cells,
        paths,
        component_type: component.type_name.clone(),
    }
}

// =============================================================================
// Tests
// =============================================================================
