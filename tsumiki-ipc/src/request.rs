use serde::{Deserialize, Serialize};

use crate::layout::WindowGeometry;

/// Bar contents for one monitor. Drawing is left to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarState {
    pub monitor: usize,
    pub visible: bool,
    pub y: i32,
    pub height: u32,
    pub layout_symbol: String,
    pub selected_tags: u32,
    /// Lowest selected tag, named by the bar when several are shown.
    pub view_tag: Option<usize>,
    pub occupied_tags: u32,
    /// Tags of the focused window, used for the per-tag indicator.
    pub focused_tags: u32,
    pub title: Option<String>,
    pub is_selected_monitor: bool,
    pub focused_floating: bool,
}

/// Instruction sent to the host, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    Configure { geometry: WindowGeometry },
    /// Move the window out of sight, keeping its size.
    Hide { window: u32 },
    /// Give input focus; `None` focuses the root window.
    Focus { window: Option<u32> },
    Raise { window: u32 },
    Close { window: u32 },
    Bar { bar: BarState },
    WarpPointer { x: i32, y: i32 },
    Quit { restart: bool },
}
