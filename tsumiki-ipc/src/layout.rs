use serde::{Deserialize, Serialize};

/// Screen-space rectangle. `x`/`y` may be negative on multi-head setups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn center(&self) -> (i32, i32) {
        (
            self.x + self.width as i32 / 2,
            self.y + self.height as i32 / 2,
        )
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Area of the overlap with `other`, 0 when disjoint.
    pub fn intersection_area(&self, other: &Rect) -> u64 {
        let w = (self.right().min(other.right()) - self.x.max(other.x)).max(0);
        let h = (self.bottom().min(other.bottom()) - self.y.max(other.y)).max(0);
        w as u64 * h as u64
    }
}

/// Client geometry requested from the host. `width`/`height` exclude the
/// border, `x`/`y` are the outer top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub border: u32,
}

impl WindowGeometry {
    /// Converts an outer frame into client geometry, never below 1x1.
    pub fn from_frame(id: u32, frame: Rect, border: u32) -> Self {
        Self {
            id,
            x: frame.x,
            y: frame.y,
            width: frame.width.saturating_sub(2 * border).max(1),
            height: frame.height.saturating_sub(2 * border).max(1),
            border,
        }
    }

    /// Outer frame including the border on both sides.
    pub fn frame(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.width + 2 * self.border,
            self.height + 2 * self.border,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(100, 50, 800, 600);
        assert_eq!(r.right(), 900);
        assert_eq!(r.bottom(), 650);
        assert_eq!(r.center(), (500, 350));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0, 0, 1920, 1080);
        assert!(r.contains(0, 0));
        assert!(r.contains(1919, 1079));
        assert!(!r.contains(1920, 0));
        assert!(!r.contains(-1, 10));
    }

    #[test]
    fn test_rect_intersection_area() {
        let left = Rect::new(0, 0, 1920, 1080);
        let right = Rect::new(1920, 0, 1920, 1080);
        let straddling = Rect::new(1820, 0, 200, 100);

        assert_eq!(left.intersection_area(&right), 0);
        assert_eq!(left.intersection_area(&straddling), 100 * 100);
        assert_eq!(right.intersection_area(&straddling), 100 * 100);
    }

    #[test]
    fn test_geometry_from_frame_strips_border() {
        let g = WindowGeometry::from_frame(7, Rect::new(4, 4, 100, 60), 2);
        assert_eq!(g.width, 96);
        assert_eq!(g.height, 56);
        assert_eq!(g.frame(), Rect::new(4, 4, 100, 60));
    }

    #[test]
    fn test_geometry_from_frame_never_collapses() {
        let g = WindowGeometry::from_frame(1, Rect::new(0, 0, 3, 0), 2);
        assert_eq!(g.width, 1);
        assert_eq!(g.height, 1);
    }

    #[test]
    fn test_rect_deserialization() {
        let r: Rect = serde_json::from_str(r#"{"x":-1920,"y":0,"width":1920,"height":1080}"#)
            .unwrap();
        assert_eq!(r, Rect::new(-1920, 0, 1920, 1080));
    }
}
