//! Built-in configuration: nine tags, a dracula palette, control-based keys.

use tsumiki_ipc::{ClickRegion, Command};

use super::{Appearance, ButtonSpec, ConfigFile, KeySpec, Schemes, TagKeys, Underline};
use crate::core::Rule;
use crate::layout::{Arrange, Layout};

const COL_BG: &str = "#282A36";
const COL_FG: &str = "#F8F8F2";
const COL_PURPLE: &str = "#BD93F9";
const COL_CYAN: &str = "#8BE9FD";

const MODKEY: &str = "ctrl";

fn scheme(fg: &str, bg: &str, border: &str) -> [String; 3] {
    [fg.to_string(), bg.to_string(), border.to_string()]
}

impl Default for Schemes {
    fn default() -> Self {
        Self {
            norm: scheme(COL_CYAN, COL_BG, COL_BG),
            sel: scheme(COL_PURPLE, COL_BG, COL_PURPLE),
            occ: scheme(COL_PURPLE, COL_BG, COL_BG),
            title: scheme(COL_FG, COL_BG, COL_BG),
        }
    }
}

impl Default for Underline {
    fn default() -> Self {
        Self {
            pad: 3,
            stroke: 2,
            voffset: 0,
            all: false,
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            border_px: 2,
            gap_px: 4,
            snap: 32,
            show_bar: true,
            top_bar: true,
            horiz_pad_bar: 6,
            vert_pad_bar: 11,
            font_height: 18,
            underline: Underline::default(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            tags: [
                "\u{f015}", "\u{f1d1}", "\u{f17c}", "\u{f286}", "\u{f07c}", "\u{f109}",
                "\u{f03e}", "\u{f1fc}", "\u{f0c3}",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
            fonts: vec![
                "JetBrains Nerd Font Mono:weight=Regular:size=11:antialias=true:autohint=true"
                    .to_string(),
                "SauceCodePro Nerd Font Mono:size=18".to_string(),
            ],
            schemes: Schemes::default(),
            appearance: Appearance::default(),
            mfact: 0.50,
            nmaster: 1,
            resize_hints: false,
            lock_fullscreen: true,
            rules: vec![Rule {
                class: Some("Google".to_string()),
                instance: None,
                title: None,
                tags: 1,
                is_floating: false,
                monitor: 1,
            }],
            layouts: vec![
                Layout::new("[]=", Arrange::Tile),
                Layout::new("><>", Arrange::Floating),
                Layout::new("[M]", Arrange::Monocle),
            ],
            keys: default_keys(),
            tag_keys: Some(TagKeys {
                modifier: MODKEY.to_string(),
                keys: (1..=9).map(|i| i.to_string()).collect(),
            }),
            buttons: default_buttons(),
        }
    }
}

fn spawn(argv: &[&str]) -> Command {
    Command::Spawn {
        argv: argv.iter().map(|a| a.to_string()).collect(),
    }
}

fn key(mods: &str, keysym: &str, command: Command) -> KeySpec {
    KeySpec {
        key: format!("{}-{}", mods, keysym),
        command,
    }
}

fn default_keys() -> Vec<KeySpec> {
    let shift = format!("{}-shift", MODKEY);
    let dmenu = ["dmenu_run", "-p", "Run: "];
    let term = ["st"];
    let chrome = ["google-chrome-stable"];

    vec![
        key(MODKEY, "p", spawn(&dmenu)),
        key(MODKEY, "Return", spawn(&term)),
        key(MODKEY, "b", spawn(&chrome)),
        key(MODKEY, "j", Command::FocusStack { delta: 1 }),
        key(MODKEY, "k", Command::FocusStack { delta: -1 }),
        key(&shift, "i", Command::IncNMaster { delta: 1 }),
        key(&shift, "d", Command::IncNMaster { delta: -1 }),
        key(&shift, "h", Command::SetMFact { delta: -0.05 }),
        key(&shift, "l", Command::SetMFact { delta: 0.05 }),
        key(&shift, "t", Command::SetLayout { layout: Some(0) }),
        key(&shift, "f", Command::SetLayout { layout: Some(1) }),
        key(&shift, "m", Command::SetLayout { layout: Some(2) }),
        key(MODKEY, "comma", Command::FocusMon { delta: -1 }),
        key(MODKEY, "period", Command::FocusMon { delta: 1 }),
        key(&shift, "comma", Command::TagMon { delta: -1 }),
        key(&shift, "period", Command::TagMon { delta: 1 }),
        key(MODKEY, "q", Command::KillClient),
        key(&shift, "r", Command::Quit { restart: true }),
        key(&shift, "q", Command::Quit { restart: false }),
    ]
}

fn button(click: ClickRegion, modifiers: &str, button: u32, command: Command) -> ButtonSpec {
    ButtonSpec {
        click,
        modifiers: modifiers.to_string(),
        button,
        command,
    }
}

fn default_buttons() -> Vec<ButtonSpec> {
    use ClickRegion::*;

    vec![
        button(LtSymbol, "", 1, Command::SetLayout { layout: None }),
        button(LtSymbol, "", 3, Command::SetLayout { layout: Some(2) }),
        button(WinTitle, "", 2, Command::Zoom),
        button(StatusText, "", 2, spawn(&["st"])),
        button(ClientWin, MODKEY, 1, Command::MoveMouse),
        button(ClientWin, MODKEY, 2, Command::ToggleFloating),
        button(ClientWin, MODKEY, 3, Command::ResizeMouse),
        button(TagBar, "", 1, Command::View { tags: 0 }),
        button(TagBar, "", 3, Command::ToggleView { tags: 0 }),
        button(TagBar, MODKEY, 1, Command::Tag { tags: 0 }),
        button(TagBar, MODKEY, 3, Command::ToggleTag { tags: 0 }),
    ]
}
