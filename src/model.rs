//! Input records for the layout builders.
//!
//! These mirror the rows the persistence layer loads from an uploaded
//! save: a solution owns components, a component owns the members placed
//! on its grid and the pipes leaving its output ports, and a level owns
//! the components that are fixed before the player touches anything.
//!
//! The structs are plain data with serde derives - this crate performs no
//! I/O; the caller hands the records in fully loaded and in order.

use serde::{Deserialize, Serialize};

use crate::types::{Dir, MemberColor};

// =============================================================================
// MemberKind - Closed catalog of instruction and feature glyphs
// =============================================================================

/// Every kind of member that can be placed inside a reactor.
///
/// The save format stores these as `instr-*` / `feature-*` string codes;
/// the serde rename keeps that wire shape, and [`MemberKind::from_code`]
/// covers the same mapping for callers holding raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    // Instructions that start a wire path
    #[serde(rename = "instr-start")]
    Start,
    #[serde(rename = "instr-toggle")]
    Toggle,
    #[serde(rename = "instr-sensor")]
    Sensor,
    #[serde(rename = "instr-control")]
    Control,

    // Other instructions
    #[serde(rename = "instr-arrow")]
    Arrow,
    #[serde(rename = "instr-bond")]
    Bond,
    #[serde(rename = "instr-debug")]
    Debug,
    #[serde(rename = "instr-fuse")]
    Fuse,
    #[serde(rename = "instr-grab")]
    Grab,
    #[serde(rename = "instr-input")]
    Input,
    #[serde(rename = "instr-output")]
    Output,
    #[serde(rename = "instr-rotate")]
    Rotate,
    #[serde(rename = "instr-split")]
    Split,
    #[serde(rename = "instr-swap")]
    Swap,
    #[serde(rename = "instr-sync")]
    Sync,

    // Reactor features
    #[serde(rename = "feature-bonder")]
    Bonder,
    #[serde(rename = "feature-bonder-minus")]
    BonderMinus,
    #[serde(rename = "feature-bonder-plus")]
    BonderPlus,
    #[serde(rename = "feature-fuser")]
    Fuser,
    #[serde(rename = "feature-sensor")]
    SensorPad,
    #[serde(rename = "feature-splitter")]
    Splitter,
    #[serde(rename = "feature-tunnel")]
    Tunnel,
}

impl MemberKind {
    /// Parse a raw save-format type code. Unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "instr-start" => Some(Self::Start),
            "instr-toggle" => Some(Self::Toggle),
            "instr-sensor" => Some(Self::Sensor),
            "instr-control" => Some(Self::Control),
            "instr-arrow" => Some(Self::Arrow),
            "instr-bond" => Some(Self::Bond),
            "instr-debug" => Some(Self::Debug),
            "instr-fuse" => Some(Self::Fuse),
            "instr-grab" => Some(Self::Grab),
            "instr-input" => Some(Self::Input),
            "instr-output" => Some(Self::Output),
            "instr-rotate" => Some(Self::Rotate),
            "instr-split" => Some(Self::Split),
            "instr-swap" => Some(Self::Swap),
            "instr-sync" => Some(Self::Sync),
            "feature-bonder" => Some(Self::Bonder),
            "feature-bonder-minus" => Some(Self::BonderMinus),
            "feature-bonder-plus" => Some(Self::BonderPlus),
            "feature-fuser" => Some(Self::Fuser),
            "feature-sensor" => Some(Self::SensorPad),
            "feature-splitter" => Some(Self::Splitter),
            "feature-tunnel" => Some(Self::Tunnel),
            _ => None,
        }
    }

    /// The save-format type code for this kind.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Start => "instr-start",
            Self::Toggle => "instr-toggle",
            Self::Sensor => "instr-sensor",
            Self::Control => "instr-control",
            Self::Arrow => "instr-arrow",
            Self::Bond => "instr-bond",
            Self::Debug => "instr-debug",
            Self::Fuse => "instr-fuse",
            Self::Grab => "instr-grab",
            Self::Input => "instr-input",
            Self::Output => "instr-output",
            Self::Rotate => "instr-rotate",
            Self::Split => "instr-split",
            Self::Swap => "instr-swap",
            Self::Sync => "instr-sync",
            Self::Bonder => "feature-bonder",
            Self::BonderMinus => "feature-bonder-minus",
            Self::BonderPlus => "feature-bonder-plus",
            Self::Fuser => "feature-fuser",
            Self::SensorPad => "feature-sensor",
            Self::Splitter => "feature-splitter",
            Self::Tunnel => "feature-tunnel",
        }
    }

    /// Whether this kind originates a wire path.
    pub const fn starts_path(self) -> bool {
        matches!(self, Self::Start | Self::Toggle | Self::Sensor | Self::Control)
    }

    /// Whether this kind occupies a second cell to its right.
    pub const fn is_double_wide(self) -> bool {
        matches!(self, Self::Fuser | Self::Splitter)
    }
}

// =============================================================================
// Records
// =============================================================================

/// A placed unit of a solution: a reactor or an overworld building.
///
/// `members` and `pipes` are the component's owned child records, already
/// ordered by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub component_id: i64,
    #[serde(rename = "type")]
    pub type_name: String,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub pipes: Vec<Pipe>,
}

impl Component {
    /// Whether this component carries a 10x8 instruction grid.
    ///
    /// Matches any type containing "reactor"; the overview pass uses the
    /// stricter `-reactor` suffix instead.
    pub fn is_reactor(&self) -> bool {
        self.type_name.contains("reactor")
    }
}

/// One instruction or feature glyph placed at a cell inside a reactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub component_id: i64,
    #[serde(rename = "type")]
    pub kind: MemberKind,
    pub arrow_dir: Dir,
    pub choice: u8,
    pub layer: u8,
    pub x: i32,
    pub y: i32,
    /// Element index for sensors, resolved via [`element_symbol`].
    #[serde(default)]
    pub element: Option<i32>,
}

impl Member {
    /// Rendering color, derived from the save-format layer.
    pub const fn color(&self) -> MemberColor {
        MemberColor::from_layer(self.layer)
    }

    /// Image identifier for this member's glyph.
    ///
    /// Encodes the kind, color, direction and variant choice the same way
    /// the image assets are named, e.g. `blue-start_r.png`,
    /// `red-bond_plus.png`, `feature-splitter.png`.
    pub fn image_name(&self) -> String {
        let color = self.color().name();
        let dir = self.arrow_dir.letter();
        match self.kind {
            MemberKind::Bonder => "feature-bonder.png".to_string(),
            MemberKind::BonderMinus => "feature-bonder_minus.png".to_string(),
            MemberKind::BonderPlus => "feature-bonder_plus.png".to_string(),
            MemberKind::Fuser => "feature-fuser.png".to_string(),
            MemberKind::SensorPad => "feature-sensor.png".to_string(),
            MemberKind::Splitter => "feature-splitter.png".to_string(),
            MemberKind::Tunnel => "feature-tunnel.png".to_string(),
            MemberKind::Arrow => format!("{color}-arrow_{dir}.png"),
            MemberKind::Bond => {
                let variant = match self.choice {
                    0 => "_plus",
                    1 => "_minus",
                    _ => "",
                };
                format!("{color}-bond{variant}.png")
            }
            MemberKind::Control => {
                let variant = match self.choice {
                    0 => "a",
                    1 => "b",
                    2 => "c",
                    3 => "d",
                    _ => "",
                };
                format!("{color}-control_{variant}_{dir}.png")
            }
            MemberKind::Debug => format!("{color}-debug.png"),
            MemberKind::Fuse => format!("{color}-fuse.png"),
            MemberKind::Grab => {
                let variant = match self.choice {
                    0 => "grab_drop",
                    1 => "grab",
                    2 => "drop",
                    _ => "",
                };
                format!("{color}-{variant}.png")
            }
            MemberKind::Input => {
                let variant = match self.choice {
                    0 => "1",
                    1 => "2",
                    _ => "",
                };
                format!("{color}-in_{variant}.png")
            }
            MemberKind::Output => {
                let variant = match self.choice {
                    0 => "1",
                    1 => "2",
                    _ => "",
                };
                format!("{color}-out_{variant}.png")
            }
            MemberKind::Rotate => {
                let variant = match self.choice {
                    0 => "cw",
                    1 => "ccw",
                    _ => "",
                };
                format!("{color}-rotate_{variant}.png")
            }
            MemberKind::Sensor => format!("{color}-sensor_{dir}.png"),
            MemberKind::Split => format!("{color}-split.png"),
            MemberKind::Start => format!("{color}-start_{dir}.png"),
            MemberKind::Swap => format!("{color}-swap.png"),
            MemberKind::Sync => format!("{color}-sync.png"),
            MemberKind::Toggle => format!("{color}-toggle_{dir}.png"),
        }
    }
}

/// An output-port pipe segment, positioned relative to its component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipe {
    pub component_id: i64,
    pub output_id: u8,
    pub x: i32,
    pub y: i32,
}

/// A component the level places before the player's own, rendered
/// underneath them on the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedComponent {
    #[serde(rename = "type")]
    pub type_name: String,
    pub x: i32,
    pub y: i32,
}

/// Level metadata the overview needs, plus the level's fixed components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub slug: String,
    pub category: String,
    #[serde(default)]
    pub fixed_components: Vec<FixedComponent>,
}

/// One uploaded solution: its components in persistence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub solution_id: i64,
    #[serde(default)]
    pub components: Vec<Component>,
}

// =============================================================================
// Element symbols
// =============================================================================

/// Periodic-table symbols indexed by atomic number.
///
/// Index 0 is the "XX" placeholder the game uses for "any element";
/// sensors store an index into this table.
pub const ELEMENTS: [&str; 110] = [
    "XX", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt",
];

/// Look up the symbol for a sensor's element index.
///
/// Out-of-range or negative indices are `None`.
pub fn element_symbol(index: i32) -> Option<&'static str> {
    usize::try_from(index).ok().and_then(|i| ELEMENTS.get(i).copied())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn member(kind: MemberKind, arrow_dir: Dir, choice: u8, layer: u8) -> Member {
        Member {
            component_id: 1,
            kind,
            arrow_dir,
            choice,
            layer,
            x: 0,
            y: 0,
            element: None,
        }
    }

    // =========================================================================
    // MemberKind tests
    // =========================================================================

    #[test]
    fn test_member_kind_code_round_trip() {
        let kinds = [
            MemberKind::Start,
            MemberKind::Toggle,
            MemberKind::Sensor,
            MemberKind::Control,
            MemberKind::Arrow,
            MemberKind::Bond,
            MemberKind::Debug,
            MemberKind::Fuse,
            MemberKind::Grab,
            MemberKind::Input,
            MemberKind::Output,
            MemberKind::Rotate,
            MemberKind::Split,
            MemberKind::Swap,
            MemberKind::Sync,
            MemberKind::Bonder,
            MemberKind::BonderMinus,
            MemberKind::BonderPlus,
            MemberKind::Fuser,
            MemberKind::SensorPad,
            MemberKind::Splitter,
            MemberKind::Tunnel,
        ];
        for kind in kinds {
            assert_eq!(MemberKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_member_kind_from_code_unknown() {
        assert_eq!(MemberKind::from_code("instr-teleport"), None);
        assert_eq!(MemberKind::from_code("feature-portal"), None);
        assert_eq!(MemberKind::from_code(""), None);
    }

    #[test]
    fn test_member_kind_starts_path() {
        assert!(MemberKind::Start.starts_path());
        assert!(MemberKind::Toggle.starts_path());
        assert!(MemberKind::Sensor.starts_path());
        assert!(MemberKind::Control.starts_path());

        assert!(!MemberKind::Arrow.starts_path());
        assert!(!MemberKind::Grab.starts_path());
        assert!(!MemberKind::SensorPad.starts_path());
    }

    #[test]
    fn test_member_kind_double_wide() {
        assert!(MemberKind::Fuser.is_double_wide());
        assert!(MemberKind::Splitter.is_double_wide());
        assert!(!MemberKind::Bonder.is_double_wide());
        assert!(!MemberKind::Tunnel.is_double_wide());
    }

    #[test]
    fn test_member_kind_serde_uses_type_codes() {
        let json = serde_json::to_string(&MemberKind::BonderMinus).unwrap();
        assert_eq!(json, "\"feature-bonder-minus\"");

        let kind: MemberKind = serde_json::from_str("\"instr-sync\"").unwrap();
        assert_eq!(kind, MemberKind::Sync);
    }

    // =========================================================================
    // Image name tests
    // =========================================================================

    #[test]
    fn test_image_name_directional_instructions() {
        let start = member(MemberKind::Start, Dir::Right, 0, 16);
        assert_eq!(start.image_name(), "blue-start_r.png");

        let toggle = member(MemberKind::Toggle, Dir::Up, 0, 64);
        assert_eq!(toggle.image_name(), "red-toggle_u.png");

        let sensor = member(MemberKind::Sensor, Dir::Down, 0, 32);
        assert_eq!(sensor.image_name(), "blue-sensor_d.png");

        let arrow = member(MemberKind::Arrow, Dir::Left, 0, 128);
        assert_eq!(arrow.image_name(), "red-arrow_l.png");
    }

    #[test]
    fn test_image_name_choice_variants() {
        assert_eq!(member(MemberKind::Bond, Dir::Right, 0, 16).image_name(), "blue-bond_plus.png");
        assert_eq!(member(MemberKind::Bond, Dir::Right, 1, 16).image_name(), "blue-bond_minus.png");

        assert_eq!(
            member(MemberKind::Control, Dir::Up, 2, 64).image_name(),
            "red-control_c_u.png"
        );

        assert_eq!(member(MemberKind::Grab, Dir::Right, 0, 16).image_name(), "blue-grab_drop.png");
        assert_eq!(member(MemberKind::Grab, Dir::Right, 1, 16).image_name(), "blue-grab.png");
        assert_eq!(member(MemberKind::Grab, Dir::Right, 2, 16).image_name(), "blue-drop.png");

        assert_eq!(member(MemberKind::Input, Dir::Right, 1, 16).image_name(), "blue-in_2.png");
        assert_eq!(member(MemberKind::Output, Dir::Right, 0, 64).image_name(), "red-out_1.png");

        assert_eq!(member(MemberKind::Rotate, Dir::Right, 0, 16).image_name(), "blue-rotate_cw.png");
        assert_eq!(member(MemberKind::Rotate, Dir::Right, 1, 16).image_name(), "blue-rotate_ccw.png");
    }

    #[test]
    fn test_image_name_features_ignore_color() {
        // Feature rows live outside the program layers, so their image
        // names carry no channel prefix.
        assert_eq!(member(MemberKind::Bonder, Dir::Right, 0, 0).image_name(), "feature-bonder.png");
        assert_eq!(
            member(MemberKind::BonderPlus, Dir::Right, 0, 0).image_name(),
            "feature-bonder_plus.png"
        );
        assert_eq!(member(MemberKind::Fuser, Dir::Right, 0, 0).image_name(), "feature-fuser.png");
        assert_eq!(member(MemberKind::Tunnel, Dir::Right, 0, 0).image_name(), "feature-tunnel.png");
    }

    #[test]
    fn test_image_name_plain_instructions() {
        assert_eq!(member(MemberKind::Sync, Dir::Right, 0, 16).image_name(), "blue-sync.png");
        assert_eq!(member(MemberKind::Swap, Dir::Right, 0, 64).image_name(), "red-swap.png");
        assert_eq!(member(MemberKind::Fuse, Dir::Right, 0, 16).image_name(), "blue-fuse.png");
        assert_eq!(member(MemberKind::Split, Dir::Right, 0, 16).image_name(), "blue-split.png");
        assert_eq!(member(MemberKind::Debug, Dir::Right, 0, 16).image_name(), "blue-debug.png");
    }

    // =========================================================================
    // Element table tests
    // =========================================================================

    #[test]
    fn test_element_symbol_lookup() {
        assert_eq!(element_symbol(0), Some("XX"));
        assert_eq!(element_symbol(1), Some("H"));
        assert_eq!(element_symbol(8), Some("O"));
        assert_eq!(element_symbol(26), Some("Fe"));
        assert_eq!(element_symbol(109), Some("Mt"));
    }

    #[test]
    fn test_element_symbol_out_of_range() {
        assert_eq!(element_symbol(110), None);
        assert_eq!(element_symbol(-1), None);
    }

    // =========================================================================
    // Record serde tests
    // =========================================================================

    #[test]
    fn test_member_deserializes_from_save_row_shape() {
        let json = r#"{
            "component_id": 7,
            "type": "instr-start",
            "arrow_dir": 0,
            "choice": 0,
            "layer": 16,
            "x": 3,
            "y": 2
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.kind, MemberKind::Start);
        assert_eq!(member.arrow_dir, Dir::Right);
        assert_eq!(member.color(), MemberColor::Blue);
        assert_eq!(member.element, None);
    }

    #[test]
    fn test_component_defaults_children_to_empty() {
        let json = r#"{"component_id": 1, "type": "drag-storage-tank", "x": 4, "y": 5}"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert!(component.members.is_empty());
        assert!(component.pipes.is_empty());
        assert!(!component.is_reactor());
    }

    #[test]
    fn test_component_reactor_detection_is_substring() {
        let mut component = Component {
            component_id: 1,
            type_name: "drag-advanced-reactor".to_string(),
            x: 0,
            y: 0,
            members: Vec::new(),
            pipes: Vec::new(),
        };
        assert!(component.is_reactor());

        // The looser grid-pass convention matches mid-string too.
        component.type_name = "reactor-custom".to_string();
        assert!(component.is_reactor());

        component.type_name = "drag-storage-tank".to_string();
        assert!(!component.is_reactor());
    }
}
