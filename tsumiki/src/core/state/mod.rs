use std::collections::HashMap;

use tsumiki_ipc::{BarState, Rect, Request, WindowMetadata};

use super::{Monitor, MonitorId, RulesEngine, Tag, Window, WindowId};
use crate::config::Config;
use crate::layout::Layout;

mod drag;
mod focus;
mod layout;
mod monitor;
mod rules;
mod tags;

pub use drag::{Drag, DragKind, DragOutcome};

use drag::*;
use focus::*;
use layout::*;
use monitor::*;
use rules::*;
use tags::*;

/// All window manager state. Only mutated by event processing.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub windows: HashMap<WindowId, Window>,
    /// Always at least one monitor, indexed by `Monitor::id`.
    pub monitors: Vec<Monitor>,
    pub focused_monitor: MonitorId,
    pub drag: Option<Drag>,
    pub rules_engine: RulesEngine,
    pub config: Config,
}

impl State {
    pub fn new(config: Config) -> Self {
        Self {
            windows: HashMap::new(),
            monitors: vec![Monitor::new(0, Rect::default(), &config)],
            focused_monitor: 0,
            drag: None,
            rules_engine: RulesEngine::new(config.rules.clone()),
            config,
        }
    }

    pub fn current_monitor(&self) -> &Monitor {
        &self.monitors[self.focused_monitor]
    }

    pub fn current_monitor_mut(&mut self) -> &mut Monitor {
        &mut self.monitors[self.focused_monitor]
    }

    pub fn visible_tags(&self) -> Tag {
        self.current_monitor().visible_tags()
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.current_monitor().selected
    }

    pub fn focused_window(&self) -> Option<&Window> {
        self.focused().and_then(|id| self.windows.get(&id))
    }

    pub fn layout_of(&self, monitor_id: MonitorId) -> &Layout {
        &self.config.layouts[self.monitors[monitor_id].layout_index()]
    }

    pub fn current_layout(&self) -> &Layout {
        self.layout_of(self.focused_monitor)
    }

    /// Whether the window is on one of its monitor's visible tags.
    pub fn is_visible(&self, window_id: WindowId) -> bool {
        self.windows
            .get(&window_id)
            .is_some_and(|w| w.is_visible_on(self.monitors[w.monitor].visible_tags()))
    }

    /// Visible windows of a monitor in client (attach) order.
    pub fn visible_windows(&self, monitor_id: MonitorId) -> Vec<WindowId> {
        self.monitors[monitor_id]
            .clients
            .iter()
            .copied()
            .filter(|&id| self.is_visible(id))
            .collect()
    }

    /// Visible, non-floating windows of a monitor in client order.
    pub fn tiled_windows(&self, monitor_id: MonitorId) -> Vec<WindowId> {
        self.visible_windows(monitor_id)
            .into_iter()
            .filter(|id| self.windows.get(id).is_some_and(|w| w.is_tiled()))
            .collect()
    }

    // Tags

    pub fn view_tags(&mut self, tags: u32) -> bool {
        view_tags(self, tags)
    }

    pub fn toggle_view_tags(&mut self, tags: u32) -> bool {
        toggle_view_tags(self, tags)
    }

    pub fn move_focused_to_tags(&mut self, tags: u32) -> bool {
        move_focused_to_tags(self, tags)
    }

    pub fn toggle_focused_window_tags(&mut self, tags: u32) -> bool {
        toggle_focused_window_tags(self, tags)
    }

    // Layout

    pub fn arrange(&mut self, monitor_id: Option<MonitorId>) -> Vec<Request> {
        arrange(self, monitor_id)
    }

    pub fn restack(&self, monitor_id: MonitorId) -> Vec<Request> {
        restack(self, monitor_id)
    }

    pub fn set_layout(&mut self, layout: Option<usize>) -> bool {
        set_layout(self, layout)
    }

    pub fn set_mfact(&mut self, delta: f64) -> bool {
        set_mfact(self, delta)
    }

    pub fn inc_nmaster(&mut self, delta: i32) -> bool {
        inc_nmaster(self, delta)
    }

    pub fn zoom(&mut self) -> Option<WindowId> {
        zoom(self)
    }

    pub fn toggle_focused_float(&mut self) -> bool {
        toggle_focused_float(self)
    }

    // Focus

    pub fn focus(&mut self, window_id: Option<WindowId>) -> Request {
        focus(self, window_id)
    }

    pub fn focus_stack(&self, delta: i32) -> Option<WindowId> {
        focus_stack(self, delta)
    }

    pub fn focus_monitor(&mut self, delta: i32) -> bool {
        focus_monitor(self, delta)
    }

    pub fn select_monitor(&mut self, monitor_id: MonitorId) -> bool {
        select_monitor(self, monitor_id)
    }

    // Monitors

    pub fn update_screens(&mut self, screens: &[Rect]) -> bool {
        update_screens(self, screens)
    }

    pub fn monitor_for_rect(&self, rect: Rect) -> MonitorId {
        monitor_for_rect(self, rect)
    }

    pub fn monitor_at(&self, x: i32, y: i32) -> MonitorId {
        monitor_for_rect(self, Rect::new(x, y, 1, 1))
    }

    pub fn send_to_monitor(&mut self, window_id: WindowId, monitor_id: MonitorId) -> bool {
        send_to_monitor(self, window_id, monitor_id)
    }

    pub fn tag_monitor(&mut self, delta: i32) -> bool {
        tag_monitor(self, delta)
    }

    // Window lifecycle

    pub fn manage(
        &mut self,
        window_id: WindowId,
        metadata: &WindowMetadata,
        geometry: Rect,
        transient_for: Option<WindowId>,
    ) -> Option<MonitorId> {
        manage(self, window_id, metadata, geometry, transient_for)
    }

    pub fn unmanage(&mut self, window_id: WindowId) -> Option<MonitorId> {
        unmanage(self, window_id)
    }

    pub fn update_title(&mut self, window_id: WindowId, title: &str) -> bool {
        update_title(self, window_id, title)
    }

    // Pointer drags

    pub fn start_drag(&mut self, kind: DragKind, pointer: Option<(i32, i32)>) -> Option<(i32, i32)> {
        start_drag(self, kind, pointer)
    }

    pub fn drag_motion(&mut self, x: i32, y: i32) -> DragOutcome {
        drag_motion(self, x, y)
    }

    pub fn end_drag(&mut self) -> Option<MonitorId> {
        end_drag(self)
    }

    /// Removes a window from its monitor's lists, picking a new selection
    /// for that monitor if it was selected.
    pub(crate) fn detach_window(&mut self, window_id: WindowId) {
        let Some(monitor_id) = self.windows.get(&window_id).map(|w| w.monitor) else {
            return;
        };
        let monitor = &mut self.monitors[monitor_id];
        monitor.detach(window_id);
        monitor.detach_stack(window_id);
        if monitor.selected == Some(window_id) {
            let next = self.first_visible_in_stack(monitor_id);
            self.monitors[monitor_id].selected = next;
        }
    }

    pub(crate) fn first_visible_in_stack(&self, monitor_id: MonitorId) -> Option<WindowId> {
        self.monitors[monitor_id]
            .stack
            .iter()
            .copied()
            .find(|&id| self.is_visible(id))
    }

    /// Bar contents of every monitor.
    pub fn bar_states(&self) -> Vec<BarState> {
        let bar_height = self.config.bar_height();
        self.monitors
            .iter()
            .map(|m| {
                let occupied = m
                    .clients
                    .iter()
                    .filter_map(|id| self.windows.get(id))
                    .fold(Tag::default(), |acc, w| acc.union(w.tags));
                let selected = m.selected.and_then(|id| self.windows.get(&id));
                BarState {
                    monitor: m.id,
                    visible: m.show_bar,
                    y: m.bar_y,
                    height: bar_height,
                    layout_symbol: m.layout_symbol.clone(),
                    selected_tags: m.visible_tags().mask(),
                    view_tag: m.visible_tags().first_tag(),
                    occupied_tags: occupied.mask(),
                    focused_tags: selected.map_or(0, |w| w.tags.mask()),
                    title: selected.map(|w| w.title.clone()),
                    is_selected_monitor: m.id == self.focused_monitor,
                    focused_floating: selected.is_some_and(|w| w.is_floating),
                }
            })
            .collect()
    }
}
