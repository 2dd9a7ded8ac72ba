use tsumiki_ipc::Rect;

use super::super::state::State;
use super::super::{Monitor, MonitorId, WindowId};
use super::focus::monitor_in_direction;

/// Reconciles monitors with the screens reported by the host. Screens with
/// identical geometry collapse into one monitor. Returns true if anything
/// changed.
pub fn update_screens(state: &mut State, screens: &[Rect]) -> bool {
    let mut unique: Vec<Rect> = Vec::with_capacity(screens.len());
    for screen in screens {
        if !unique.contains(screen) {
            unique.push(*screen);
        }
    }
    if unique.is_empty() {
        tracing::warn!("Host reported no screens, keeping current monitors");
        return false;
    }

    let bar_height = state.config.bar_height();
    let mut changed = false;

    for (i, screen) in unique.iter().enumerate() {
        if let Some(monitor) = state.monitors.get_mut(i) {
            if monitor.set_screen(*screen, bar_height) {
                tracing::info!("Monitor {} geometry: {:?}", i, screen);
                changed = true;
            }
        } else {
            tracing::info!("Monitor {} added: {:?}", i, screen);
            state.monitors.push(Monitor::new(i, *screen, &state.config));
            changed = true;
        }
    }

    while state.monitors.len() > unique.len() {
        let Some(removed) = state.monitors.pop() else {
            break;
        };
        tracing::info!(
            "Monitor {} removed, moving {} windows to monitor 0",
            removed.id,
            removed.clients.len()
        );
        for &id in removed.clients.iter().rev() {
            if let Some(window) = state.windows.get_mut(&id) {
                window.monitor = 0;
            }
            state.monitors[0].attach(id);
        }
        for &id in removed.stack.iter().rev() {
            state.monitors[0].attach_stack(id);
        }
        if state.focused_monitor == removed.id {
            state.focused_monitor = 0;
        }
        changed = true;
    }

    changed
}

/// Monitor whose window area overlaps `rect` the most, defaulting to the
/// focused one.
pub fn monitor_for_rect(state: &State, rect: Rect) -> MonitorId {
    let mut best = state.focused_monitor;
    let mut best_area = 0;
    for monitor in &state.monitors {
        let area = monitor.window_area.intersection_area(&rect);
        if area > best_area {
            best_area = area;
            best = monitor.id;
        }
    }
    best
}

/// Moves a window to another monitor, adopting that monitor's visible tags.
pub fn send_to_monitor(state: &mut State, window_id: WindowId, monitor_id: MonitorId) -> bool {
    let Some(current) = state.windows.get(&window_id).map(|w| w.monitor) else {
        return false;
    };
    if current == monitor_id || monitor_id >= state.monitors.len() {
        return false;
    }

    state.detach_window(window_id);
    let tags = state.monitors[monitor_id].visible_tags();
    if let Some(window) = state.windows.get_mut(&window_id) {
        window.monitor = monitor_id;
        window.tags = tags;
    }
    let monitor = &mut state.monitors[monitor_id];
    monitor.attach(window_id);
    monitor.attach_stack(window_id);
    tracing::info!(
        "Send window {} from monitor {} to {}",
        window_id,
        current,
        monitor_id
    );
    true
}

pub fn tag_monitor(state: &mut State, delta: i32) -> bool {
    let Some(focused) = state.focused() else {
        return false;
    };
    if state.monitors.len() < 2 {
        return false;
    }
    let target = monitor_in_direction(state, delta);
    send_to_monitor(state, focused, target)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{map, setup_dual_state, setup_state, SCREEN};
    use super::*;
    use crate::core::Tag;

    #[test]
    fn test_update_screens_creates_monitors() {
        let state = setup_dual_state();
        assert_eq!(state.monitors.len(), 2);
        assert_eq!(state.monitors[1].screen, Rect::new(1920, 0, 1920, 1080));
        assert_eq!(state.monitors[1].window_area, Rect::new(1920, 29, 1920, 1051));
        assert_eq!(state.monitors[1].visible_tags(), Tag::nth(0));
    }

    #[test]
    fn test_update_screens_is_idempotent() {
        let mut state = setup_dual_state();
        assert!(!state.update_screens(&[SCREEN, Rect::new(1920, 0, 1920, 1080)]));
    }

    #[test]
    fn test_duplicate_screens_collapse() {
        let mut state = setup_state();
        assert!(!state.update_screens(&[SCREEN, SCREEN]));
        assert_eq!(state.monitors.len(), 1);
    }

    #[test]
    fn test_empty_screens_keep_monitors() {
        let mut state = setup_dual_state();
        assert!(!state.update_screens(&[]));
        assert_eq!(state.monitors.len(), 2);
    }

    #[test]
    fn test_removed_monitor_moves_windows_keeping_tags() {
        let mut state = setup_dual_state();
        map(&mut state, 1, "st");
        map(&mut state, 2, "st");
        state.send_to_monitor(2, 1);
        state.focus_monitor(1);
        state.monitors[1].view(Tag::nth(4));
        state.windows.get_mut(&2).unwrap().tags = Tag::nth(4);

        assert!(state.update_screens(&[SCREEN]));
        assert_eq!(state.monitors.len(), 1);
        assert_eq!(state.focused_monitor, 0);
        assert_eq!(state.windows[&2].monitor, 0);
        assert_eq!(state.windows[&2].tags, Tag::nth(4));
        assert_eq!(state.monitors[0].clients, vec![2, 1]);
    }

    #[test]
    fn test_monitor_for_rect() {
        let state = setup_dual_state();
        assert_eq!(state.monitor_for_rect(Rect::new(100, 100, 50, 50)), 0);
        assert_eq!(state.monitor_for_rect(Rect::new(1900, 100, 400, 50)), 1);
        assert_eq!(state.monitor_at(2500, 500), 1);
        // off every screen falls back to the focused monitor
        assert_eq!(state.monitor_at(-500, -500), 0);
    }

    #[test]
    fn test_send_to_monitor_adopts_tags() {
        let mut state = setup_dual_state();
        map(&mut state, 1, "st");
        state.monitors[1].view(Tag::nth(6));

        assert!(state.send_to_monitor(1, 1));
        let window = &state.windows[&1];
        assert_eq!(window.monitor, 1);
        assert_eq!(window.tags, Tag::nth(6));
        assert!(state.monitors[0].clients.is_empty());
        assert_eq!(state.monitors[0].selected, None);
        assert_eq!(state.monitors[1].clients, vec![1]);

        assert!(!state.send_to_monitor(1, 1));
        assert!(!state.send_to_monitor(1, 5));
    }

    #[test]
    fn test_tag_monitor_wraps() {
        let mut state = setup_dual_state();
        map(&mut state, 1, "st");
        assert!(state.tag_monitor(-1));
        assert_eq!(state.windows[&1].monitor, 1);
    }

    #[test]
    fn test_tag_monitor_single_monitor_is_noop() {
        let mut state = setup_state();
        map(&mut state, 1, "st");
        assert!(!state.tag_monitor(1));
    }
}
