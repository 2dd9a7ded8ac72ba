use tsumiki_ipc::{Insets, Rect};

use super::{MonitorId, Tag, WindowId};
use crate::config::Config;

/// One physical screen and the windows assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Monitor {
    pub id: MonitorId,
    pub screen: Rect,
    /// Screen minus the bar.
    pub window_area: Rect,
    pub bar_y: i32,
    pub show_bar: bool,
    pub top_bar: bool,
    pub mfact: f64,
    pub nmaster: u32,
    pub layout_symbol: String,
    /// Attach order, newest first.
    pub clients: Vec<WindowId>,
    /// Focus order, most recently focused first.
    pub stack: Vec<WindowId>,
    pub selected: Option<WindowId>,
    tagsets: [Tag; 2],
    sel_tags: usize,
    layouts: [usize; 2],
    sel_layout: usize,
}

impl Monitor {
    pub fn new(id: MonitorId, screen: Rect, config: &Config) -> Self {
        let mut monitor = Self {
            id,
            screen,
            window_area: screen,
            bar_y: 0,
            show_bar: config.appearance.show_bar,
            top_bar: config.appearance.top_bar,
            mfact: config.mfact,
            nmaster: config.nmaster,
            layout_symbol: config.layouts[0].symbol.clone(),
            clients: Vec::new(),
            stack: Vec::new(),
            selected: None,
            tagsets: [Tag::nth(0); 2],
            sel_tags: 0,
            layouts: [0, 1 % config.layouts.len()],
            sel_layout: 0,
        };
        monitor.update_bar_position(config.bar_height());
        monitor
    }

    pub fn visible_tags(&self) -> Tag {
        self.tagsets[self.sel_tags]
    }

    /// Switches to the other tag-set slot, filling it with `tags` unless
    /// empty. Returns false when `tags` is already visible.
    pub fn view(&mut self, tags: Tag) -> bool {
        if tags == self.visible_tags() {
            return false;
        }
        self.sel_tags ^= 1;
        if !tags.is_empty() {
            self.tagsets[self.sel_tags] = tags;
        }
        true
    }

    /// Replaces the current tag set in place.
    pub fn set_visible_tags(&mut self, tags: Tag) {
        self.tagsets[self.sel_tags] = tags;
    }

    pub fn layout_index(&self) -> usize {
        self.layouts[self.sel_layout]
    }

    /// `None` flips to the previous layout; `Some` selects it into the other
    /// slot unless it is already current.
    pub fn select_layout(&mut self, layout: Option<usize>) {
        if layout != Some(self.layout_index()) {
            self.sel_layout ^= 1;
        }
        if let Some(index) = layout {
            self.layouts[self.sel_layout] = index;
        }
    }

    pub fn update_bar_position(&mut self, bar_height: u32) {
        if self.show_bar {
            self.window_area = Insets::bar(bar_height, self.top_bar).shrink(self.screen);
            self.bar_y = if self.top_bar {
                self.screen.y
            } else {
                self.window_area.bottom()
            };
        } else {
            self.window_area = self.screen;
            self.bar_y = -(bar_height as i32);
        }
    }

    /// Returns true when the screen rectangle changed.
    pub fn set_screen(&mut self, screen: Rect, bar_height: u32) -> bool {
        if self.screen == screen {
            return false;
        }
        self.screen = screen;
        self.update_bar_position(bar_height);
        true
    }

    pub fn attach(&mut self, window_id: WindowId) {
        self.clients.insert(0, window_id);
    }

    pub fn attach_stack(&mut self, window_id: WindowId) {
        self.stack.insert(0, window_id);
    }

    pub fn detach(&mut self, window_id: WindowId) {
        self.clients.retain(|&id| id != window_id);
    }

    pub fn detach_stack(&mut self, window_id: WindowId) {
        self.stack.retain(|&id| id != window_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> Monitor {
        Monitor::new(0, Rect::new(0, 0, 1920, 1080), &Config::default())
    }

    #[test]
    fn test_new_monitor_defaults() {
        let m = monitor();
        assert_eq!(m.visible_tags(), Tag::nth(0));
        assert_eq!(m.layout_index(), 0);
        assert_eq!(m.layout_symbol, "[]=");
        assert_eq!(m.nmaster, 1);
        // default bar: 18px font + 11px padding
        assert_eq!(m.window_area, Rect::new(0, 29, 1920, 1051));
        assert_eq!(m.bar_y, 0);
    }

    #[test]
    fn test_bottom_bar_and_hidden_bar() {
        let mut m = monitor();
        m.top_bar = false;
        m.update_bar_position(29);
        assert_eq!(m.window_area, Rect::new(0, 0, 1920, 1051));
        assert_eq!(m.bar_y, 1051);

        m.show_bar = false;
        m.update_bar_position(29);
        assert_eq!(m.window_area, m.screen);
        assert_eq!(m.bar_y, -29);
    }

    #[test]
    fn test_view_swaps_slots() {
        let mut m = monitor();
        assert!(m.view(Tag::nth(2)));
        assert_eq!(m.visible_tags(), Tag::nth(2));

        assert!(!m.view(Tag::nth(2)));

        // empty mask returns to the previous set
        assert!(m.view(Tag::default()));
        assert_eq!(m.visible_tags(), Tag::nth(0));
        assert!(m.view(Tag::default()));
        assert_eq!(m.visible_tags(), Tag::nth(2));
    }

    #[test]
    fn test_select_layout_toggle() {
        let mut m = monitor();
        m.select_layout(Some(2));
        assert_eq!(m.layout_index(), 2);

        m.select_layout(None);
        assert_eq!(m.layout_index(), 0);
        m.select_layout(None);
        assert_eq!(m.layout_index(), 2);

        // selecting the current layout keeps the slots
        m.select_layout(Some(2));
        assert_eq!(m.layout_index(), 2);
        m.select_layout(None);
        assert_eq!(m.layout_index(), 0);
    }

    #[test]
    fn test_attach_is_head_first() {
        let mut m = monitor();
        m.attach(1);
        m.attach(2);
        m.attach_stack(1);
        m.attach_stack(2);
        assert_eq!(m.clients, vec![2, 1]);
        assert_eq!(m.stack, vec![2, 1]);

        m.detach(2);
        m.detach_stack(1);
        assert_eq!(m.clients, vec![1]);
        assert_eq!(m.stack, vec![2]);
    }

    #[test]
    fn test_set_screen_reports_change() {
        let mut m = monitor();
        assert!(!m.set_screen(Rect::new(0, 0, 1920, 1080), 29));
        assert!(m.set_screen(Rect::new(0, 0, 2560, 1440), 29));
        assert_eq!(m.window_area, Rect::new(0, 29, 2560, 1411));
    }
}
