use super::super::state::State;
use super::super::Tag;

/// Shows exactly `tags` on the current monitor. An empty mask (after
/// masking to the configured tags) switches back to the previous set.
pub fn view_tags(state: &mut State, tags: u32) -> bool {
    let new_visible = Tag::from_mask(tags).intersection(state.config.all_tags());
    let monitor = state.current_monitor_mut();
    let old = monitor.visible_tags();
    if !monitor.view(new_visible) {
        return false;
    }
    tracing::info!(
        "View tags on monitor {}: {:#b} -> {:#b}",
        monitor.id,
        old.mask(),
        monitor.visible_tags().mask()
    );
    true
}

pub fn toggle_view_tags(state: &mut State, tags: u32) -> bool {
    let tag = Tag::from_mask(tags).intersection(state.config.all_tags());
    let monitor = state.current_monitor_mut();
    let new_visible = monitor.visible_tags().toggle(tag);
    if new_visible.is_empty() || new_visible == monitor.visible_tags() {
        return false;
    }
    tracing::info!(
        "Toggle tags on monitor {}: {:#b} -> {:#b}",
        monitor.id,
        monitor.visible_tags().mask(),
        new_visible.mask()
    );
    monitor.set_visible_tags(new_visible);
    true
}

pub fn move_focused_to_tags(state: &mut State, tags: u32) -> bool {
    let new_tags = Tag::from_mask(tags).intersection(state.config.all_tags());
    if new_tags.is_empty() {
        return false;
    }
    let Some(focused_id) = state.focused() else {
        return false;
    };
    let Some(window) = state.windows.get_mut(&focused_id) else {
        return false;
    };
    tracing::info!(
        "Move window {} to tags {:#b}",
        window.id,
        new_tags.mask()
    );
    window.tags = new_tags;
    true
}

pub fn toggle_focused_window_tags(state: &mut State, tags: u32) -> bool {
    let tag = Tag::from_mask(tags).intersection(state.config.all_tags());
    let Some(focused_id) = state.focused() else {
        return false;
    };
    let Some(window) = state.windows.get_mut(&focused_id) else {
        return false;
    };
    let new_tags = window.tags.toggle(tag);
    if new_tags.is_empty() || new_tags == window.tags {
        return false;
    }
    tracing::info!(
        "Toggle window {} tags: {:#b} -> {:#b}",
        window.id,
        window.tags.mask(),
        new_tags.mask()
    );
    window.tags = new_tags;
    true
}

#[cfg(test)]
mod tests {
    use super::super::tests::{map, setup_state};
    use super::*;

    #[test]
    fn test_view_tags_replaces_visible_set() {
        let mut state = setup_state();
        assert!(state.view_tags(0b100));
        assert_eq!(state.visible_tags(), Tag::nth(2));
        assert!(state.view_tags(0b1));
        assert_eq!(state.visible_tags(), Tag::nth(0));
    }

    #[test]
    fn test_view_same_tags_is_noop() {
        let mut state = setup_state();
        let before = state.clone();
        assert!(!state.view_tags(0b1));
        assert_eq!(state, before);
    }

    #[test]
    fn test_view_zero_returns_to_previous() {
        let mut state = setup_state();
        state.view_tags(0b1000);
        assert!(state.view_tags(0));
        assert_eq!(state.visible_tags(), Tag::nth(0));
        assert!(state.view_tags(0));
        assert_eq!(state.visible_tags(), Tag::nth(3));
    }

    #[test]
    fn test_view_masks_out_unconfigured_tags() {
        let mut state = setup_state();
        state.view_tags(0b10 | 1 << 20);
        assert_eq!(state.visible_tags(), Tag::nth(1));
    }

    #[test]
    fn test_toggle_view_never_empties() {
        let mut state = setup_state();
        assert!(state.toggle_view_tags(0b10));
        assert_eq!(state.visible_tags().mask(), 0b11);
        assert!(state.toggle_view_tags(0b1));
        assert_eq!(state.visible_tags().mask(), 0b10);
        assert!(!state.toggle_view_tags(0b10));
        assert_eq!(state.visible_tags().mask(), 0b10);
    }

    #[test]
    fn test_move_focused_to_tags() {
        let mut state = setup_state();
        assert!(!state.move_focused_to_tags(0b100));

        map(&mut state, 1, "st");
        assert!(state.move_focused_to_tags(0b100));
        assert_eq!(state.windows[&1].tags, Tag::nth(2));
        assert!(!state.is_visible(1));

        assert!(!state.move_focused_to_tags(0));
    }

    #[test]
    fn test_toggle_focused_window_tags_never_empties() {
        let mut state = setup_state();
        map(&mut state, 1, "st");
        assert!(state.toggle_focused_window_tags(0b10));
        assert_eq!(state.windows[&1].tags.mask(), 0b11);
        assert!(state.toggle_focused_window_tags(0b1));
        assert_eq!(state.windows[&1].tags.mask(), 0b10);
        assert!(!state.toggle_focused_window_tags(0b10));
        assert_eq!(state.windows[&1].tags.mask(), 0b10);
    }
}
