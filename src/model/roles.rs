use std::fmt;
use std::ops::Index;

/// The seventeen cursor slots of a Windows cursor scheme, in the order the scheme
/// entry lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorRole {
    Default,
    Help,
    Progress,
    Wait,
    Crosshair,
    Text,
    Hand,
    Unavailable,
    NsResize,
    EwResize,
    NwseResize,
    NeswResize,
    Move,
    Alternate,
    Link,
    Pin,
    Person,
}

impl CursorRole {
    pub const COUNT: usize = 17;

    pub const ALL: [CursorRole; Self::COUNT] = [
        CursorRole::Default,
        CursorRole::Help,
        CursorRole::Progress,
        CursorRole::Wait,
        CursorRole::Crosshair,
        CursorRole::Text,
        CursorRole::Hand,
        CursorRole::Unavailable,
        CursorRole::NsResize,
        CursorRole::EwResize,
        CursorRole::NwseResize,
        CursorRole::NeswResize,
        CursorRole::Move,
        CursorRole::Alternate,
        CursorRole::Link,
        CursorRole::Pin,
        CursorRole::Person,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            CursorRole::Default => "default",
            CursorRole::Help => "help",
            CursorRole::Progress => "progress",
            CursorRole::Wait => "wait",
            CursorRole::Crosshair => "crosshair",
            CursorRole::Text => "text",
            CursorRole::Hand => "hand",
            CursorRole::Unavailable => "unavailable",
            CursorRole::NsResize => "ns-resize",
            CursorRole::EwResize => "ew-resize",
            CursorRole::NwseResize => "nwse-resize",
            CursorRole::NeswResize => "nesw-resize",
            CursorRole::Move => "move",
            CursorRole::Alternate => "alternate",
            CursorRole::Link => "link",
            CursorRole::Pin => "pin",
            CursorRole::Person => "person",
        }
    }

    /// Registry value name Windows uses for this slot.
    pub const fn windows_name(self) -> &'static str {
        match self {
            CursorRole::Default => "Arrow",
            CursorRole::Help => "Help",
            CursorRole::Progress => "AppStarting",
            CursorRole::Wait => "Wait",
            CursorRole::Crosshair => "Crosshair",
            CursorRole::Text => "IBeam",
            CursorRole::Hand => "NWPen",
            CursorRole::Unavailable => "No",
            CursorRole::NsResize => "SizeNS",
            CursorRole::EwResize => "SizeWE",
            CursorRole::NwseResize => "SizeNWSE",
            CursorRole::NeswResize => "SizeNESW",
            CursorRole::Move => "SizeAll",
            CursorRole::Alternate => "UpArrow",
            CursorRole::Link => "Hand",
            CursorRole::Pin => "Pin",
            CursorRole::Person => "Person",
        }
    }

    /// Legacy X11 and CSS names that should link to this role's cursor.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            CursorRole::Default => &[
                "arrow",
                "dnd-move",
                "left_ptr",
                "move",
                "top_left_arrow",
                "X_cursor",
            ],
            CursorRole::Help => &["question_arrow"],
            CursorRole::Wait => &["watch"],
            CursorRole::Crosshair => &["cross", "cross_reverse", "diamond_cross", "tcross"],
            CursorRole::Text => &["xterm"],
            CursorRole::Unavailable => &["not-allowed", "no-drop"],
            CursorRole::NsResize => &[
                "bottom_side",
                "sb_v_double_arrow",
                "top_side",
                "n-resize",
                "s-resize",
            ],
            CursorRole::EwResize => &[
                "left_side",
                "right_side",
                "sb_h_double_arrow",
                "w-resize",
                "e-resize",
            ],
            CursorRole::NwseResize => &[
                "bd_double_arrow",
                "bottom_right_corner",
                "top_left_corner",
                "se-resize",
                "nw-resize",
            ],
            CursorRole::NeswResize => &[
                "bottom_left_corner",
                "fd_double_arrow",
                "top_right_corner",
                "sw-resize",
                "ne-resize",
            ],
            CursorRole::Alternate => &["alias"],
            CursorRole::Progress
            | CursorRole::Hand
            | CursorRole::Move
            | CursorRole::Link
            | CursorRole::Pin
            | CursorRole::Person => &[],
        }
    }
}

impl fmt::Display for CursorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One raw cursor path per role, before resolution against the filesystem.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorRoleSet {
    paths: [String; CursorRole::COUNT],
}

impl CursorRoleSet {
    pub fn new(paths: [String; CursorRole::COUNT]) -> Self {
        Self { paths }
    }

    pub fn get(&self, role: CursorRole) -> &str {
        &self.paths[role.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CursorRole, &str)> {
        CursorRole::ALL
            .into_iter()
            .zip(self.paths.iter().map(String::as_str))
    }
}

impl Index<CursorRole> for CursorRoleSet {
    type Output = str;

    fn index(&self, role: CursorRole) -> &str {
        self.get(role)
    }
}
