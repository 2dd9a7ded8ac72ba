use tsumiki_ipc::{Rect, WindowMetadata};

use super::super::state::State;
use super::super::{MonitorId, Window, WindowId};

/// Starts managing a newly mapped window: classifies it, keeps it inside
/// its monitor and attaches it at the head of the client list and focus
/// stack. Returns the monitor the window landed on.
pub fn manage(
    state: &mut State,
    window_id: WindowId,
    metadata: &WindowMetadata,
    geometry: Rect,
    transient_for: Option<WindowId>,
) -> Option<MonitorId> {
    if state.windows.contains_key(&window_id) {
        tracing::debug!("Window {} is already managed", window_id);
        return None;
    }

    let border = state.config.appearance.border_px;
    let frame = Rect::new(
        geometry.x,
        geometry.y,
        geometry.width + 2 * border,
        geometry.height + 2 * border,
    );
    let mut window = Window::new(window_id, metadata, frame, border, state.focused_monitor);

    match transient_for.and_then(|id| state.windows.get(&id)) {
        Some(parent) => {
            window.monitor = parent.monitor;
            window.tags = parent.tags;
            window.is_floating = true;
        }
        None => apply_rules(state, &mut window, metadata),
    }

    window.frame = clamp_to_area(window.frame, state.monitors[window.monitor].window_area);

    tracing::info!(
        "Manage window {} ({:?}/{:?}): monitor {}, tags {:#b}, floating {}",
        window.id,
        window.class,
        window.instance,
        window.monitor,
        window.tags.mask(),
        window.is_floating
    );

    let monitor_id = window.monitor;
    let monitor = &mut state.monitors[monitor_id];
    monitor.attach(window_id);
    monitor.attach_stack(window_id);
    monitor.selected = Some(window_id);
    state.windows.insert(window_id, window);
    Some(monitor_id)
}

/// Classifies a window once, at map time. Rule fallbacks resolve against
/// the monitor the window ends up on.
pub fn apply_rules(state: &State, window: &mut Window, metadata: &WindowMetadata) {
    let result = state.rules_engine.apply_rules(metadata);

    window.is_floating = result.is_floating;
    if let Some(monitor_id) = result.monitor {
        if monitor_id < state.monitors.len() {
            window.monitor = monitor_id;
        } else {
            tracing::debug!(
                "Rule monitor {} does not exist, keeping monitor {}",
                monitor_id,
                window.monitor
            );
        }
    }

    window.tags = result
        .tags
        .map(|t| t.intersection(state.config.all_tags()))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| state.monitors[window.monitor].visible_tags());
}

fn clamp_to_area(frame: Rect, area: Rect) -> Rect {
    let mut x = frame.x;
    let mut y = frame.y;
    if frame.right() > area.right() {
        x = area.right() - frame.width as i32;
    }
    if frame.bottom() > area.bottom() {
        y = area.bottom() - frame.height as i32;
    }
    Rect::new(x.max(area.x), y.max(area.y), frame.width, frame.height)
}

/// Forgets an unmapped window. Returns the monitor it was on.
pub fn unmanage(state: &mut State, window_id: WindowId) -> Option<MonitorId> {
    let monitor_id = state.windows.get(&window_id)?.monitor;
    state.detach_window(window_id);
    state.windows.remove(&window_id);
    if state.drag.as_ref().is_some_and(|d| d.window == window_id) {
        state.drag = None;
    }
    tracing::info!("Unmanage window {} from monitor {}", window_id, monitor_id);
    Some(monitor_id)
}

/// Title updates never re-run classification.
pub fn update_title(state: &mut State, window_id: WindowId, title: &str) -> bool {
    let Some(window) = state.windows.get_mut(&window_id) else {
        return false;
    };
    if window.title == title {
        return false;
    }
    tracing::debug!("Window {} title: {:?}", window_id, title);
    window.title = title.to_string();
    true
}
