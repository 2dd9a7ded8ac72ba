use tsumiki_ipc::Request;

use super::super::state::State;
use super::super::{MonitorId, WindowId};
use crate::config::{MFACT_MAX, MFACT_MIN};
use crate::layout::{self, Arrange, TileParams};

/// Re-arranges one monitor (and restacks it) or every monitor.
pub fn arrange(state: &mut State, monitor_id: Option<MonitorId>) -> Vec<Request> {
    match monitor_id {
        Some(id) if id < state.monitors.len() => {
            let mut requests = arrange_monitor(state, id);
            requests.extend(restack(state, id));
            requests
        }
        Some(id) => {
            tracing::warn!("Arrange requested for unknown monitor {}", id);
            vec![]
        }
        None => (0..state.monitors.len())
            .flat_map(|id| arrange_monitor(state, id))
            .collect(),
    }
}

/// Applies the monitor's layout to its visible tiled windows and shows or
/// hides every window it owns.
fn arrange_monitor(state: &mut State, monitor_id: MonitorId) -> Vec<Request> {
    let layout = state.layout_of(monitor_id).clone();
    let visible = state.visible_windows(monitor_id);
    let tiled = state.tiled_windows(monitor_id);

    let monitor = &state.monitors[monitor_id];
    let params = TileParams {
        nmaster: monitor.nmaster,
        mfact: monitor.mfact,
        gap: state.config.appearance.gap_px,
    };
    let frames = layout::arrange(layout.arrange, &tiled, monitor.window_area, &params);
    tracing::debug!(
        "Arrange monitor {} with {}: {} visible, {} placed",
        monitor_id,
        layout.symbol,
        visible.len(),
        frames.len()
    );

    state.monitors[monitor_id].layout_symbol = match layout.arrange {
        Arrange::Monocle if !visible.is_empty() => layout::monocle_symbol(visible.len()),
        _ => layout.symbol,
    };

    for (id, frame) in frames {
        if let Some(window) = state.windows.get_mut(&id) {
            window.frame = frame;
        }
    }

    state.monitors[monitor_id]
        .clients
        .iter()
        .filter_map(|id| state.windows.get(id))
        .map(|window| {
            if visible.contains(&window.id) {
                Request::Configure {
                    geometry: window.geometry(),
                }
            } else {
                Request::Hide { window: window.id }
            }
        })
        .collect()
}

/// Raises the selected window when it can overlap others.
pub fn restack(state: &State, monitor_id: MonitorId) -> Vec<Request> {
    let Some(monitor) = state.monitors.get(monitor_id) else {
        return vec![];
    };
    let Some(window) = monitor.selected.and_then(|id| state.windows.get(&id)) else {
        return vec![];
    };
    let layout = state.layout_of(monitor_id);
    if window.is_floating || !layout.arranges() || layout.arrange == Arrange::Monocle {
        vec![Request::Raise { window: window.id }]
    } else {
        vec![]
    }
}

pub fn set_layout(state: &mut State, layout: Option<usize>) -> bool {
    if let Some(index) = layout {
        if index >= state.config.layouts.len() {
            tracing::warn!("Unknown layout index {}", index);
            return false;
        }
    }
    let monitor = &mut state.monitors[state.focused_monitor];
    monitor.select_layout(layout);
    let symbol = state.config.layouts[monitor.layout_index()].symbol.clone();
    tracing::info!("Set layout on monitor {}: {}", monitor.id, symbol);
    monitor.layout_symbol = symbol;
    true
}

/// `delta < 1.0` is relative, `delta >= 1.0` sets `mfact` to `delta - 1.0`.
/// The result is clamped to the allowed range.
pub fn set_mfact(state: &mut State, delta: f64) -> bool {
    if !state.current_layout().arranges() {
        return false;
    }
    let monitor = state.current_monitor_mut();
    let target = if delta < 1.0 {
        monitor.mfact + delta
    } else {
        delta - 1.0
    };
    let mfact = target.clamp(MFACT_MIN, MFACT_MAX);
    if mfact == monitor.mfact {
        return false;
    }
    tracing::info!(
        "Set mfact on monitor {}: {:.2} -> {:.2}",
        monitor.id,
        monitor.mfact,
        mfact
    );
    monitor.mfact = mfact;
    true
}

pub fn inc_nmaster(state: &mut State, delta: i32) -> bool {
    let monitor = state.current_monitor_mut();
    let nmaster = (monitor.nmaster as i64 + delta as i64).clamp(0, u32::MAX as i64) as u32;
    if nmaster == monitor.nmaster {
        return false;
    }
    tracing::info!(
        "Set nmaster on monitor {}: {} -> {}",
        monitor.id,
        monitor.nmaster,
        nmaster
    );
    monitor.nmaster = nmaster;
    true
}

/// Moves the focused tiled window to the head of the client list. The
/// current master is swapped with the next tiled window instead. Returns the
/// window that became master.
pub fn zoom(state: &mut State) -> Option<WindowId> {
    if !state.current_layout().arranges() {
        return None;
    }
    let focused = state.focused_window().filter(|w| w.is_tiled())?.id;
    let tiled = state.tiled_windows(state.focused_monitor);

    let target = if tiled.first() == Some(&focused) {
        *tiled.get(1)?
    } else {
        focused
    };

    tracing::info!("Zoom window {} to master", target);
    let monitor = state.current_monitor_mut();
    monitor.detach(target);
    monitor.attach(target);
    Some(target)
}

pub fn toggle_focused_float(state: &mut State) -> bool {
    let Some(focused_id) = state.focused() else {
        return false;
    };
    let Some(window) = state.windows.get_mut(&focused_id) else {
        return false;
    };
    window.is_floating = !window.is_floating;
    tracing::info!(
        "Toggle floating for window {}: {}",
        window.id,
        window.is_floating
    );
    true
}
