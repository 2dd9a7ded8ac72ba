use serde::{Deserialize, Serialize};

use crate::layout::Rect;

/// Space reserved on each edge of a rectangle (bar, outer gaps).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// A bar of `height` pixels along the top or bottom edge.
    pub fn bar(height: u32, top: bool) -> Self {
        if top {
            Self {
                top: height,
                ..Self::default()
            }
        } else {
            Self {
                bottom: height,
                ..Self::default()
            }
        }
    }

    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Shrinks `rect` by the insets, saturating at an empty rectangle.
    pub fn shrink(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x.saturating_add(self.left.min(rect.width) as i32),
            y: rect.y.saturating_add(self.top.min(rect.height) as i32),
            width: rect.width.saturating_sub(self.horizontal()),
            height: rect.height.saturating_sub(self.vertical()),
        }
    }
}

impl std::fmt::Display for Insets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insets_all() {
        let insets = Insets::all(4);
        assert_eq!(insets.top, 4);
        assert_eq!(insets.right, 4);
        assert_eq!(insets.bottom, 4);
        assert_eq!(insets.left, 4);
        assert_eq!(insets.horizontal(), 8);
        assert_eq!(insets.vertical(), 8);
    }

    #[test]
    fn test_insets_bar_top_and_bottom() {
        let top = Insets::bar(29, true);
        assert_eq!(top.top, 29);
        assert_eq!(top.bottom, 0);

        let bottom = Insets::bar(29, false);
        assert_eq!(bottom.top, 0);
        assert_eq!(bottom.bottom, 29);
    }

    #[test]
    fn test_insets_shrink() {
        let area = Insets::bar(29, true).shrink(Rect::new(0, 0, 1920, 1080));
        assert_eq!(area, Rect::new(0, 29, 1920, 1051));

        let gapped = Insets::all(4).shrink(area);
        assert_eq!(gapped, Rect::new(4, 33, 1912, 1043));
    }

    #[test]
    fn test_insets_shrink_saturates() {
        let r = Insets::all(10).shrink(Rect::new(0, 0, 15, 5));
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
    }

    #[test]
    fn test_insets_huge_values_do_not_overflow() {
        let insets = Insets::all(u32::MAX);
        assert_eq!(insets.horizontal(), u32::MAX);
        assert_eq!(insets.vertical(), u32::MAX);
        let area = Rect::new(10, 20, 300, 200);
        let r = insets.shrink(area);
        assert_eq!((r.width, r.height), (0, 0));
        assert!(r.x <= area.right() && r.y <= area.bottom());
    }

    #[test]
    fn test_insets_display() {
        let insets = Insets {
            top: 10,
            right: 20,
            bottom: 30,
            left: 40,
        };
        assert_eq!(format!("{}", insets), "10 20 30 40");
    }
}
