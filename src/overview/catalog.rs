//! Overview component catalog.
//!
//! Static footprint sizes, display labels, and the pipe color palette.
//! These are fixed game data: the overview engine looks types up here and
//! degrades to an `Unknown` entry for anything missing.

// =============================================================================
// Footprints
// =============================================================================

/// Grid footprint and display label for a known overworld component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    /// Width in overview cells.
    pub width: i32,
    /// Height in overview cells.
    pub height: i32,
    /// Human-readable label the renderer prints on the glyph.
    pub label: &'static str,
}

/// Reactors are not in the catalog; they always cover 4x4 cells.
pub const REACTOR_FOOTPRINT: Footprint = Footprint {
    width: 4,
    height: 4,
    label: "reactor",
};

/// Look up the footprint for a component type. Unknown types are `None`.
pub fn lookup(type_name: &str) -> Option<Footprint> {
    let (width, height, label) = match type_name {
        "drag-silo-input" => (5, 5, "input"),
        "drag-oceanic-input" => (2, 2, "input"),
        "drag-atmospheric-input" => (2, 2, "input"),
        "drag-mining-input" => (3, 2, "input"),
        "drag-storage-tank" => (3, 3, "storage tank"),
        "drag-spaceship-input" => (2, 3, "input"),
        "drag-powerplant-input" => (14, 15, "input"),
        "cargo-freighter" => (2, 3, "cargo output"),
        "oxygen-tank" => (3, 3, "oxygen tank"),
        "recycler" => (5, 5, "recycler"),
        "control-center" => (3, 3, "control center"),
        "particle-accelerator" => (3, 3, "particle accelerator"),
        "rocket-launch-pad" => (3, 3, "rocket launch pad"),
        "hydrogen-laser" => (5, 5, "hydrogen laser"),
        "chemical-laser" => (3, 3, "chemical laser"),
        "ancient-pump" => (2, 2, "input"),
        "omega-missile-launcher" => (3, 3, "omega missile launcher"),
        "thruster-controls" => (3, 6, "thruster controls"),
        "teleporter-in" => (3, 1, "teleporter in"),
        "teleporter-out" => (3, 1, "teleporter out"),
        "internal-storage-tank" => (2, 3, "tank output"),
        "crash-canister" => (4, 4, "crash canister"),
        _ => return None,
    };
    Some(Footprint { width, height, label })
}

// =============================================================================
// Pipe palette
// =============================================================================

/// The 12 pipe colors, paired primary/secondary hues.
pub const PIPE_PALETTE: [&str; 12] = [
    "#fefe33", "#8601af",
    "#FB9902", "#0247FE",
    "#FE2712", "#66B032",
    "#FABC02", "#3D01A4",
    "#FD5308", "#0392CE",
    "#A7194B", "#D0EA2B",
];

/// Deterministic color for a pipe.
///
/// `component_index` is the 1-based position of the owning component in
/// the solution; `output_id` is its output port (0 or 1 by the save
/// contract). Adjacent components land three hue pairs apart so
/// neighboring pipes stay distinguishable.
pub fn pipe_color(component_index: usize, output_id: u8) -> &'static str {
    PIPE_PALETTE[((component_index - 1) * 2) % 6 + output_id as usize]
}

// =============================================================================
// Tests
// =============================================================================
