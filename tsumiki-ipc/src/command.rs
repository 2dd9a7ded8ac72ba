use serde::{Deserialize, Serialize};

/// Actions a key or button binding can trigger.
///
/// Each variant carries its own typed argument, so a binding table is just a
/// list of `(input shape, Command)` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    // Window operations
    FocusStack { delta: i32 },
    Zoom,
    KillClient,
    ToggleFloating,
    MoveMouse,
    ResizeMouse,

    // Tag operations
    View { tags: u32 },
    ToggleView { tags: u32 },
    Tag { tags: u32 },
    ToggleTag { tags: u32 },

    // Monitor operations
    FocusMon { delta: i32 },
    TagMon { delta: i32 },

    // Layout operations
    SetLayout {
        #[serde(default)]
        layout: Option<usize>,
    },
    #[serde(rename = "inc_nmaster")]
    IncNMaster { delta: i32 },
    #[serde(rename = "set_mfact")]
    SetMFact { delta: f64 },

    // Exec
    Spawn { argv: Vec<String> },

    // Control
    Quit {
        #[serde(default)]
        restart: bool,
    },
}

impl Command {
    /// Tag mask carried by tag commands, if any.
    pub fn tag_mask(&self) -> Option<u32> {
        match self {
            Command::View { tags }
            | Command::ToggleView { tags }
            | Command::Tag { tags }
            | Command::ToggleTag { tags } => Some(*tags),
            _ => None,
        }
    }

    /// Returns a copy with the tag mask replaced, for tag-bar clicks bound
    /// with an empty mask.
    pub fn with_tag_mask(&self, mask: u32) -> Command {
        match self {
            Command::View { .. } => Command::View { tags: mask },
            Command::ToggleView { .. } => Command::ToggleView { tags: mask },
            Command::Tag { .. } => Command::Tag { tags: mask },
            Command::ToggleTag { .. } => Command::ToggleTag { tags: mask },
            other => other.clone(),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::FocusStack { delta } => write!(f, "focus-stack {:+}", delta),
            Command::Zoom => write!(f, "zoom"),
            Command::KillClient => write!(f, "kill-client"),
            Command::ToggleFloating => write!(f, "toggle-floating"),
            Command::MoveMouse => write!(f, "move-mouse"),
            Command::ResizeMouse => write!(f, "resize-mouse"),
            Command::View { tags } => write!(f, "view {:#b}", tags),
            Command::ToggleView { tags } => write!(f, "toggle-view {:#b}", tags),
            Command::Tag { tags } => write!(f, "tag {:#b}", tags),
            Command::ToggleTag { tags } => write!(f, "toggle-tag {:#b}", tags),
            Command::FocusMon { delta } => write!(f, "focus-mon {:+}", delta),
            Command::TagMon { delta } => write!(f, "tag-mon {:+}", delta),
            Command::SetLayout { layout: Some(i) } => write!(f, "set-layout {}", i),
            Command::SetLayout { layout: None } => write!(f, "set-layout"),
            Command::IncNMaster { delta } => write!(f, "inc-nmaster {:+}", delta),
            Command::SetMFact { delta } => write!(f, "set-mfact {:+.2}", delta),
            Command::Spawn { argv } => write!(f, "spawn {}", argv.join(" ")),
            Command::Quit { restart: true } => write!(f, "restart"),
            Command::Quit { restart: false } => write!(f, "quit"),
        }
    }
}
