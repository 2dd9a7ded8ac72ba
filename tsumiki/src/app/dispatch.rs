use crate::core::State;
use crate::effect::Effect;
use tsumiki_ipc::{ClickRegion, Event};

use super::command::process_command;

/// Pure function: applies one host event to the state and returns the
/// effects to execute.
pub fn process_event(state: &mut State, event: &Event) -> Vec<Effect> {
    match event {
        Event::Screens { screens } => {
            if state.update_screens(screens) {
                vec![Effect::Focus(None), Effect::Arrange(None)]
            } else {
                vec![]
            }
        }
        Event::MapWindow {
            window,
            metadata,
            geometry,
            transient_for,
        } => match state.manage(*window, metadata, *geometry, *transient_for) {
            Some(monitor) => vec![Effect::Arrange(Some(monitor)), Effect::Focus(None)],
            None => vec![],
        },
        Event::UnmapWindow { window } => match state.unmanage(*window) {
            Some(monitor) => vec![Effect::Focus(None), Effect::Arrange(Some(monitor))],
            None => vec![],
        },
        Event::TitleChanged { window, title } => {
            state.update_title(*window, title);
            vec![]
        }
        Event::KeyPress { modifiers, keysym } => {
            let Some(cmd) = state.config.bindings.lookup_key(*modifiers, keysym).cloned() else {
                tracing::trace!("No binding for key {:#x} {}", modifiers, keysym);
                return vec![];
            };
            process_command(state, &cmd, None)
        }
        Event::ButtonPress {
            region,
            modifiers,
            button,
            tag,
            window,
            x,
            y,
        } => handle_button_press(state, *region, *modifiers, *button, *tag, *window, (*x, *y)),
        Event::ButtonRelease { .. } => match state.end_drag() {
            Some(_) => vec![Effect::Focus(None), Effect::Arrange(None)],
            None => vec![],
        },
        Event::PointerMotion { x, y } => {
            if state.drag.is_some() {
                let outcome = state.drag_motion(*x, *y);
                let mut effects = Vec::new();
                if let Some(monitor) = outcome.rearrange {
                    effects.push(Effect::Arrange(Some(monitor)));
                }
                if let Some(id) = outcome.moved {
                    effects.push(Effect::Configure(id));
                }
                return effects;
            }
            let monitor = state.monitor_at(*x, *y);
            if state.select_monitor(monitor) {
                vec![Effect::Focus(None)]
            } else {
                vec![]
            }
        }
        Event::PointerEnter { window } => {
            if state.drag.is_some() || !state.windows.contains_key(window) {
                return vec![];
            }
            if state.focused() == Some(*window) {
                return vec![];
            }
            vec![Effect::Focus(Some(*window))]
        }
    }
}

/// Selects the clicked monitor and client before running the bound command,
/// so the command acts on what was clicked.
fn handle_button_press(
    state: &mut State,
    region: ClickRegion,
    modifiers: u32,
    button: u32,
    tag: Option<usize>,
    window: Option<u32>,
    pointer: (i32, i32),
) -> Vec<Effect> {
    let mut effects = Vec::new();
    let client = window.filter(|id| state.windows.contains_key(id));

    let monitor = match client.and_then(|id| state.windows.get(&id)) {
        Some(w) => w.monitor,
        None => state.monitor_at(pointer.0, pointer.1),
    };
    if state.select_monitor(monitor) {
        effects.push(Effect::Request(state.focus(None)));
    }

    if region == ClickRegion::ClientWin {
        if let Some(id) = client {
            effects.push(Effect::Request(state.focus(Some(id))));
            effects.extend(
                state
                    .restack(state.focused_monitor)
                    .into_iter()
                    .map(Effect::Request),
            );
        }
    }

    let Some(cmd) = state
        .config
        .bindings
        .lookup_button(region, modifiers, button)
        .cloned()
    else {
        tracing::trace!("No binding for {:?} button {}", region, button);
        return effects;
    };

    let cmd = match (region, cmd.tag_mask(), tag) {
        (ClickRegion::TagBar, Some(0), Some(index)) if index < state.config.tags.len() => {
            cmd.with_tag_mask(1 << index)
        }
        (ClickRegion::TagBar, Some(0), _) => {
            tracing::warn!("Ignoring click on unknown tag {:?}", tag);
            return effects;
        }
        _ => cmd,
    };
    effects.extend(process_command(state, &cmd, Some(pointer)));
    effects
}
