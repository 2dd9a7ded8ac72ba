use tsumiki_ipc::Request;

use super::super::{MonitorId, WindowId};
use super::super::state::State;

/// Focuses `window_id`, or the most recently focused visible window of the
/// current monitor when it is `None` or hidden. Focusing a window on
/// another monitor selects that monitor.
pub fn focus(state: &mut State, window_id: Option<WindowId>) -> Request {
    let target = window_id
        .filter(|&id| state.is_visible(id))
        .or_else(|| state.first_visible_in_stack(state.focused_monitor));

    if let Some(id) = target {
        if let Some(monitor_id) = state.windows.get(&id).map(|w| w.monitor) {
            if monitor_id != state.focused_monitor {
                tracing::debug!(
                    "Focus follows window {} to monitor {}",
                    id,
                    monitor_id
                );
                state.focused_monitor = monitor_id;
            }
        }
        let monitor = state.current_monitor_mut();
        monitor.detach_stack(id);
        monitor.attach_stack(id);
    }

    let monitor = state.current_monitor_mut();
    if monitor.selected != target {
        tracing::debug!("Focus: {:?} -> {:?}", monitor.selected, target);
    }
    monitor.selected = target;
    Request::Focus { window: target }
}

/// Next (`delta > 0`) or previous visible window in client order, wrapping.
pub fn focus_stack(state: &State, delta: i32) -> Option<WindowId> {
    let focused = state.focused()?;
    let visible = state.visible_windows(state.focused_monitor);
    if visible.len() < 2 {
        return None;
    }

    let current_idx = visible.iter().position(|&id| id == focused)?;
    let len = visible.len() as i64;
    let next_idx = (current_idx as i64 + delta as i64).rem_euclid(len) as usize;

    let next = visible[next_idx];
    (next != focused).then_some(next)
}

/// Monitor `delta` steps away from the current one, wrapping.
pub fn monitor_in_direction(state: &State, delta: i32) -> MonitorId {
    let len = state.monitors.len() as i64;
    (state.focused_monitor as i64 + delta as i64).rem_euclid(len) as usize
}

pub fn focus_monitor(state: &mut State, delta: i32) -> bool {
    if state.monitors.len() < 2 {
        return false;
    }
    let target = monitor_in_direction(state, delta);
    select_monitor(state, target)
}

pub fn select_monitor(state: &mut State, monitor_id: MonitorId) -> bool {
    if monitor_id == state.focused_monitor || monitor_id >= state.monitors.len() {
        return false;
    }
    tracing::info!(
        "Select monitor: {} -> {}",
        state.focused_monitor,
        monitor_id
    );
    state.focused_monitor = monitor_id;
    true
}

#[cfg(test)]
mod tests {
    use super::super::tests::{map, setup_dual_state, setup_state};
    use super::*;
    use crate::core::Tag;

    #[test]
    fn test_focus_none_picks_most_recent_visible() {
        let mut state = setup_state();
        map(&mut state, 1, "st");
        map(&mut state, 2, "st");
        state.focus(Some(1));
        assert_eq!(state.current_monitor().stack, vec![1, 2]);

        state.windows.get_mut(&1).unwrap().tags = Tag::nth(3);
        let req = state.focus(None);
        assert_eq!(req, Request::Focus { window: Some(2) });
        assert_eq!(state.focused(), Some(2));
    }

    #[test]
    fn test_focus_hidden_window_falls_back() {
        let mut state = setup_state();
        map(&mut state, 1, "st");
        map(&mut state, 2, "st");
        state.windows.get_mut(&1).unwrap().tags = Tag::nth(3);

        state.focus(Some(1));
        assert_eq!(state.focused(), Some(2));
    }

    #[test]
    fn test_focus_empty_monitor_focuses_root() {
        let mut state = setup_state();
        assert_eq!(state.focus(None), Request::Focus { window: None });
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn test_focus_stack_wraps_in_client_order() {
        let mut state = setup_state();
        map(&mut state, 1, "st");
        map(&mut state, 2, "st");
        map(&mut state, 3, "st");
        // clients: [3, 2, 1], focused 3
        assert_eq!(state.focused(), Some(3));
        assert_eq!(state.focus_stack(1), Some(2));
        assert_eq!(state.focus_stack(-1), Some(1));

        state.focus(Some(1));
        assert_eq!(state.focus_stack(1), Some(3));
    }

    #[test]
    fn test_focus_stack_skips_hidden() {
        let mut state = setup_state();
        map(&mut state, 1, "st");
        map(&mut state, 2, "st");
        map(&mut state, 3, "st");
        state.windows.get_mut(&2).unwrap().tags = Tag::nth(5);
        assert_eq!(state.focus_stack(1), Some(1));
    }

    #[test]
    fn test_focus_stack_single_window() {
        let mut state = setup_state();
        assert_eq!(state.focus_stack(1), None);
        map(&mut state, 1, "st");
        assert_eq!(state.focus_stack(1), None);
    }

    #[test]
    fn test_focus_monitor_wraps() {
        let mut state = setup_dual_state();
        assert!(state.focus_monitor(1));
        assert_eq!(state.focused_monitor, 1);
        assert!(state.focus_monitor(1));
        assert_eq!(state.focused_monitor, 0);
        assert!(state.focus_monitor(-1));
        assert_eq!(state.focused_monitor, 1);
    }

    #[test]
    fn test_focus_monitor_single_monitor_is_noop() {
        let mut state = setup_state();
        assert!(!state.focus_monitor(1));
        assert_eq!(state.focused_monitor, 0);
    }

    #[test]
    fn test_focus_window_on_other_monitor_selects_it() {
        let mut state = setup_dual_state();
        map(&mut state, 1, "st");
        state.send_to_monitor(1, 1);
        state.focus(Some(1));
        assert_eq!(state.focused_monitor, 1);
        assert_eq!(state.focused(), Some(1));
    }
}
