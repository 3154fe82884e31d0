//! Core types for solnet-layout.
//!
//! These types define the vocabulary everything else builds on: the four
//! compass directions a wire can travel, direction sets as a bitfield,
//! and the two independent path color channels.

// =============================================================================
// Reactor grid dimensions
// =============================================================================

/// Reactor grid width in cells (x: 0..=9).
pub const REACTOR_WIDTH: i32 = 10;

/// Reactor grid height in cells (y: 0..=7).
pub const REACTOR_HEIGHT: i32 = 8;

// =============================================================================
// Dir - Compass directions
// =============================================================================

/// One of the four directions an instruction path can travel.
///
/// The save format stores directions as rotation degrees
/// (180 = left, -90 = up, 0 = right, 90 = down); [`Dir::from_degrees`]
/// maps those codes at the parsing boundary so the rest of the crate
/// never compares magic numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Dir {
    Left,
    Up,
    Right,
    Down,
}

impl Dir {
    /// All four directions, in a fixed order for deterministic iteration.
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Up, Dir::Right, Dir::Down];

    /// Map a raw save-format rotation code to a direction.
    ///
    /// Only {180, -90, 0, 90} are valid; anything else is `None`.
    pub const fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            180 => Some(Self::Left),
            -90 => Some(Self::Up),
            0 => Some(Self::Right),
            90 => Some(Self::Down),
            _ => None,
        }
    }

    /// The rotation code the save format uses for this direction.
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Left => 180,
            Self::Up => -90,
            Self::Right => 0,
            Self::Down => 90,
        }
    }

    /// The direction facing back toward where a path came from.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    /// Cell step for one move in this direction.
    ///
    /// The y axis grows downward, matching the rendered grid.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
        }
    }

    /// One-letter token used in CSS class names and image names.
    pub const fn letter(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Up => "u",
            Self::Right => "r",
            Self::Down => "d",
        }
    }
}

impl TryFrom<i32> for Dir {
    type Error = String;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees).ok_or_else(|| format!("invalid direction code: {degrees}"))
    }
}

impl From<Dir> for i32 {
    fn from(dir: Dir) -> Self {
        dir.degrees()
    }
}

// =============================================================================
// DirSet - Direction sets (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// A set of directions as a bitfield.
    ///
    /// Per cell, one set records every edge a wire touches and another
    /// records the edges a path has entered through. A bitfield keeps
    /// these cheap to copy and exactly comparable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DirSet: u8 {
        const LEFT = 1 << 0;
        const UP = 1 << 1;
        const RIGHT = 1 << 2;
        const DOWN = 1 << 3;
    }
}

impl DirSet {
    /// Check whether a direction is in the set.
    pub fn has(self, dir: Dir) -> bool {
        self.contains(dir.into())
    }

    /// Add a direction to the set.
    pub fn add(&mut self, dir: Dir) {
        self.insert(dir.into());
    }
}

impl From<Dir> for DirSet {
    fn from(dir: Dir) -> Self {
        match dir {
            Dir::Left => Self::LEFT,
            Dir::Up => Self::UP,
            Dir::Right => Self::RIGHT,
            Dir::Down => Self::DOWN,
        }
    }
}

// =============================================================================
// Path color channels
// =============================================================================

/// One of the two independent instruction path channels.
///
/// Paths on different channels never interact; each reactor traces both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PathColor {
    Blue = 0,
    Red = 1,
}

impl PathColor {
    /// Both channels, in trace order.
    pub const ALL: [PathColor; 2] = [PathColor::Blue, PathColor::Red];

    /// Channel name as used in class and image names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
        }
    }

    /// Stable index for per-channel storage.
    pub const fn index(self) -> usize {
        self as usize
    }
}

// =============================================================================
// Member color
// =============================================================================

/// Rendering color of a member, derived from its save-format layer.
///
/// Layers 16 and 32 are the blue program, 64 and 128 the red program;
/// everything else is a reactor feature with no path channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberColor {
    Blue,
    Red,
    Feature,
}

impl MemberColor {
    /// Derive the color from a raw layer value.
    pub const fn from_layer(layer: u8) -> Self {
        match layer {
            16 | 32 => Self::Blue,
            64 | 128 => Self::Red,
            _ => Self::Feature,
        }
    }

    /// Color name as used in class and image names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Feature => "feature",
        }
    }

    /// The path channel this color traces on, if any.
    ///
    /// Features place glyphs but never carry wires.
    pub const fn channel(self) -> Option<PathColor> {
        match self {
            Self::Blue => Some(PathColor::Blue),
            Self::Red => Some(PathColor::Red),
            Self::Feature => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Dir tests
    // =========================================================================

    #[test]
    fn test_dir_from_degrees() {
        assert_eq!(Dir::from_degrees(180), Some(Dir::Left));
        assert_eq!(Dir::from_degrees(-90), Some(Dir::Up));
        assert_eq!(Dir::from_degrees(0), Some(Dir::Right));
        assert_eq!(Dir::from_degrees(90), Some(Dir::Down));

        assert_eq!(Dir::from_degrees(45), None);
        assert_eq!(Dir::from_degrees(270), None);
        assert_eq!(Dir::from_degrees(-180), None);
        assert_eq!(Dir::from_degrees(360), None);
    }

    #[test]
    fn test_dir_degrees_round_trip() {
        for dir in Dir::ALL {
            assert_eq!(Dir::from_degrees(dir.degrees()), Some(dir));
        }
    }

    #[test]
    fn test_dir_opposite() {
        assert_eq!(Dir::Left.opposite(), Dir::Right);
        assert_eq!(Dir::Right.opposite(), Dir::Left);
        assert_eq!(Dir::Up.opposite(), Dir::Down);
        assert_eq!(Dir::Down.opposite(), Dir::Up);

        for dir in Dir::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_dir_delta() {
        assert_eq!(Dir::Left.delta(), (-1, 0));
        assert_eq!(Dir::Right.delta(), (1, 0));
        assert_eq!(Dir::Up.delta(), (0, -1));
        assert_eq!(Dir::Down.delta(), (0, 1));
    }

    #[test]
    fn test_dir_letter() {
        assert_eq!(Dir::Left.letter(), "l");
        assert_eq!(Dir::Up.letter(), "u");
        assert_eq!(Dir::Right.letter(), "r");
        assert_eq!(Dir::Down.letter(), "d");
    }

    #[test]
    fn test_dir_serde_uses_degree_codes() {
        let json = serde_json::to_string(&Dir::Up).unwrap();
        assert_eq!(json, "-90");

        let dir: Dir = serde_json::from_str("180").unwrap();
        assert_eq!(dir, Dir::Left);

        assert!(serde_json::from_str::<Dir>("45").is_err());
    }

    // =========================================================================
    // DirSet tests
    // =========================================================================

    #[test]
    fn test_dirset_starts_empty() {
        let set = DirSet::default();
        assert!(set.is_empty());
        for dir in Dir::ALL {
            assert!(!set.has(dir));
        }
    }

    #[test]
    fn test_dirset_add_and_has() {
        let mut set = DirSet::default();
        set.add(Dir::Left);
        set.add(Dir::Down);

        assert!(set.has(Dir::Left));
        assert!(set.has(Dir::Down));
        assert!(!set.has(Dir::Up));
        assert!(!set.has(Dir::Right));
    }

    #[test]
    fn test_dirset_add_is_idempotent() {
        let mut set = DirSet::default();
        set.add(Dir::Up);
        let once = set;
        set.add(Dir::Up);
        assert_eq!(set, once);
    }

    #[test]
    fn test_dirset_union_semantics() {
        let lr = DirSet::LEFT | DirSet::RIGHT;
        let ud = DirSet::UP | DirSet::DOWN;
        assert_eq!(lr | ud, DirSet::all());
        assert!(lr.contains(DirSet::LEFT));
        assert!(!lr.intersects(ud));
    }

    // =========================================================================
    // Color tests
    // =========================================================================

    #[test]
    fn test_member_color_from_layer() {
        assert_eq!(MemberColor::from_layer(16), MemberColor::Blue);
        assert_eq!(MemberColor::from_layer(32), MemberColor::Blue);
        assert_eq!(MemberColor::from_layer(64), MemberColor::Red);
        assert_eq!(MemberColor::from_layer(128), MemberColor::Red);

        assert_eq!(MemberColor::from_layer(0), MemberColor::Feature);
        assert_eq!(MemberColor::from_layer(1), MemberColor::Feature);
        assert_eq!(MemberColor::from_layer(8), MemberColor::Feature);
    }

    #[test]
    fn test_member_color_channel() {
        assert_eq!(MemberColor::Blue.channel(), Some(PathColor::Blue));
        assert_eq!(MemberColor::Red.channel(), Some(PathColor::Red));
        assert_eq!(MemberColor::Feature.channel(), None);
    }

    #[test]
    fn test_color_names() {
        assert_eq!(PathColor::Blue.name(), "blue");
        assert_eq!(PathColor::Red.name(), "red");
        assert_eq!(MemberColor::Feature.name(), "feature");
    }

    #[test]
    fn test_path_color_index_is_stable() {
        assert_eq!(PathColor::Blue.index(), 0);
        assert_eq!(PathColor::Red.index(), 1);
        assert_eq!(PathColor::ALL[PathColor::Blue.index()], PathColor::Blue);
        assert_eq!(PathColor::ALL[PathColor::Red.index()], PathColor::Red);
    }
}
