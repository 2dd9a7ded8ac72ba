use crate::core::{DragKind, State};
use crate::effect::Effect;
use tsumiki_ipc::Command;

/// Pure function: applies a bound command to the state and returns the
/// effects to execute. `pointer` is the pointer position when the command
/// came from a button press.
pub fn process_command(
    state: &mut State,
    cmd: &Command,
    pointer: Option<(i32, i32)>,
) -> Vec<Effect> {
    tracing::debug!("Command: {}", cmd);
    let monitor = state.focused_monitor;
    let rearrange = |changed: bool| {
        if changed {
            vec![Effect::Focus(None), Effect::Arrange(Some(monitor))]
        } else {
            vec![]
        }
    };

    match cmd {
        // Tag operations
        Command::View { tags } => rearrange(state.view_tags(*tags)),
        Command::ToggleView { tags } => rearrange(state.toggle_view_tags(*tags)),
        Command::Tag { tags } => rearrange(state.move_focused_to_tags(*tags)),
        Command::ToggleTag { tags } => rearrange(state.toggle_focused_window_tags(*tags)),

        // Window operations
        Command::FocusStack { delta } => match state.focus_stack(*delta) {
            Some(id) => vec![Effect::Focus(Some(id)), Effect::Restack(monitor)],
            None => vec![],
        },
        Command::Zoom => match state.zoom() {
            Some(id) => vec![Effect::Focus(Some(id)), Effect::Arrange(Some(monitor))],
            None => vec![],
        },
        Command::ToggleFloating => {
            if state.toggle_focused_float() {
                vec![Effect::Arrange(Some(monitor))]
            } else {
                vec![]
            }
        }
        Command::KillClient => match state.focused() {
            Some(id) => vec![Effect::Close(id)],
            None => vec![],
        },
        Command::MoveMouse | Command::ResizeMouse => {
            if state.focused().is_none() {
                return vec![];
            }
            let kind = match cmd {
                Command::MoveMouse => DragKind::Move,
                _ => DragKind::Resize,
            };
            let mut effects = vec![Effect::Restack(monitor)];
            if let Some((x, y)) = state.start_drag(kind, pointer) {
                effects.push(Effect::WarpPointer { x, y });
            }
            effects
        }

        // Layout operations
        Command::SetLayout { layout } => {
            if state.set_layout(*layout) {
                vec![Effect::Arrange(Some(monitor))]
            } else {
                vec![]
            }
        }
        Command::SetMFact { delta } => {
            if state.set_mfact(*delta) {
                vec![Effect::Arrange(Some(monitor))]
            } else {
                vec![]
            }
        }
        Command::IncNMaster { delta } => {
            if state.inc_nmaster(*delta) {
                vec![Effect::Arrange(Some(monitor))]
            } else {
                vec![]
            }
        }

        // Monitor operations
        Command::FocusMon { delta } => {
            if state.focus_monitor(*delta) {
                vec![Effect::Focus(None)]
            } else {
                vec![]
            }
        }
        Command::TagMon { delta } => {
            if state.tag_monitor(*delta) {
                vec![Effect::Focus(None), Effect::Arrange(None)]
            } else {
                vec![]
            }
        }

        Command::Spawn { argv } => {
            if argv.is_empty() {
                tracing::warn!("Ignoring spawn with empty argv");
                vec![]
            } else {
                vec![Effect::Spawn(argv.clone())]
            }
        }
        Command::Quit { restart } => vec![Effect::Quit { restart: *restart }],
    }
}
