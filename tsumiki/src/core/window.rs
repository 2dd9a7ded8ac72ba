use super::Tag;
use tsumiki_ipc::{Rect, WindowGeometry, WindowMetadata};

pub type WindowId = u32;
pub type MonitorId = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub id: WindowId,
    pub monitor: MonitorId,
    pub tags: Tag,
    pub class: String,
    pub instance: String,
    pub title: String,
    /// Outer geometry including the border.
    pub frame: Rect,
    pub border: u32,
    pub is_floating: bool,
}

impl Window {
    pub fn new(
        id: WindowId,
        metadata: &WindowMetadata,
        frame: Rect,
        border: u32,
        monitor: MonitorId,
    ) -> Self {
        Self {
            id,
            monitor,
            tags: Tag::default(),
            class: metadata.class().to_string(),
            instance: metadata.instance().to_string(),
            title: metadata.title().to_string(),
            frame,
            border,
            is_floating: false,
        }
    }

    pub fn is_visible_on(&self, tags: Tag) -> bool {
        self.tags.intersects(tags)
    }

    pub fn is_tiled(&self) -> bool {
        !self.is_floating
    }

    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry::from_frame(self.id, self.frame, self.border)
    }
}
