use serde::{Deserialize, Serialize};

use crate::layout::Rect;

/// X11 modifier bits as reported by the host.
pub mod modifier {
    pub const SHIFT: u32 = 1 << 0;
    pub const LOCK: u32 = 1 << 1;
    pub const CONTROL: u32 = 1 << 2;
    pub const MOD1: u32 = 1 << 3;
    pub const MOD2: u32 = 1 << 4;
    pub const MOD3: u32 = 1 << 5;
    pub const MOD4: u32 = 1 << 6;
    pub const MOD5: u32 = 1 << 7;
}

/// Where a pointer button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickRegion {
    TagBar,
    LtSymbol,
    StatusText,
    WinTitle,
    ClientWin,
    RootWin,
}

/// Identification properties read from a window when it is mapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowMetadata {
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl WindowMetadata {
    pub fn new(class: Option<&str>, instance: Option<&str>, title: Option<&str>) -> Self {
        Self {
            class: class.map(str::to_string),
            instance: instance.map(str::to_string),
            title: title.map(str::to_string),
        }
    }

    pub fn class(&self) -> &str {
        self.class.as_deref().unwrap_or_default()
    }

    pub fn instance(&self) -> &str {
        self.instance.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

/// Decoded input from the host, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Current physical screens, in monitor index order.
    Screens { screens: Vec<Rect> },

    // Window lifecycle
    MapWindow {
        window: u32,
        #[serde(default)]
        metadata: WindowMetadata,
        /// Client geometry as created, border excluded.
        geometry: Rect,
        #[serde(default)]
        transient_for: Option<u32>,
    },
    UnmapWindow {
        window: u32,
    },
    TitleChanged {
        window: u32,
        title: String,
    },

    // Input
    KeyPress {
        modifiers: u32,
        keysym: String,
    },
    ButtonPress {
        region: ClickRegion,
        modifiers: u32,
        button: u32,
        /// Index of the clicked tag for tag-bar clicks.
        #[serde(default)]
        tag: Option<usize>,
        /// Client under the pointer, if any.
        #[serde(default)]
        window: Option<u32>,
        x: i32,
        y: i32,
    },
    ButtonRelease {
        button: u32,
    },
    PointerMotion {
        x: i32,
        y: i32,
    },
    PointerEnter {
        window: u32,
    },
}
