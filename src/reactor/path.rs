//! Wire path tracing.
//!
//! Starts queued during the member scan are walked here, first-in
//! first-out, one channel at a time. Each step records the incoming edge
//! in the next cell, applies any arrow override, then records the
//! outgoing edge.
//!
//! # Termination
//!
//! A walk ends when it leaves the 10x8 grid or when it would re-enter a
//! cell through an edge already in that cell's `entry_edges`. The guard
//! caps each channel at one visit per (cell, incoming edge) pair, so
//! total work is bounded by cells x directions no matter how many
//! overlapping or looping starts are queued.

use crate::model::MemberKind;
use crate::types::{Dir, PathColor};

use super::grid::PathState;

// =============================================================================
// Queued starts
// =============================================================================

/// A path origin noted during the member scan, traced after the scan so
/// that arrow overrides at the start cell are already recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedPath {
    pub start_kind: MemberKind,
    pub start_pos: (i32, i32),
    pub start_dir: Dir,
    pub color: PathColor,
}

// =============================================================================
// Tracing
// =============================================================================

/// Trace every queued path into the per-channel edge sets, in queue order.
pub fn trace(paths: &mut PathState, queued: &[QueuedPath]) {
    for path in queued {
        trace_one(paths, path);
    }
}

fn trace_one(paths: &mut PathState, path: &QueuedPath) {
    let grid = paths.channel_mut(path.color);
    let (mut x, mut y) = path.start_pos;

    // Only a plain start defers to an arrow sharing its cell; toggles,
    // sensors and controls keep their own direction.
    let mut dir = if path.start_kind == MemberKind::Start {
        grid.get(x, y)
            .and_then(|cell| cell.dir_change)
            .unwrap_or(path.start_dir)
    } else {
        path.start_dir
    };

    // The path originates here: outgoing edge only, no entry recorded.
    if let Some(cell) = grid.get_mut(x, y) {
        cell.edges.add(dir);
    }

    loop {
        let (dx, dy) = dir.delta();
        x += dx;
        y += dy;

        // Left the reactor
        let Some(cell) = grid.get_mut(x, y) else {
            break;
        };

        // Already entered this cell from this side
        let incoming = dir.opposite();
        if cell.entry_edges.has(incoming) {
            break;
        }
        cell.edges.add(incoming);
        cell.entry_edges.add(incoming);

        // Turn or go straight through
        if let Some(turn) = cell.dir_change {
            dir = turn;
        }
        cell.edges.add(dir);
    }
}

// =============================================================================
// Tests
// =============================================================================
