use serde::{Deserialize, Serialize};
use tsumiki_ipc::{Insets, Rect};

use crate::core::WindowId;

/// Arrangement function of a layout. `Floating` places nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrange {
    Tile,
    Monocle,
    Floating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub symbol: String,
    pub arrange: Arrange,
}

impl Layout {
    pub fn new(symbol: &str, arrange: Arrange) -> Self {
        Self {
            symbol: symbol.to_string(),
            arrange,
        }
    }

    /// Whether the layout positions tiled windows at all.
    pub fn arranges(&self) -> bool {
        self.arrange != Arrange::Floating
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileParams {
    pub nmaster: u32,
    pub mfact: f64,
    pub gap: u32,
}

/// Frames for the visible tiled windows of one monitor, in client order.
pub fn arrange(
    arrange: Arrange,
    window_ids: &[WindowId],
    area: Rect,
    params: &TileParams,
) -> Vec<(WindowId, Rect)> {
    match arrange {
        Arrange::Tile => tile(window_ids, area, params),
        Arrange::Monocle => monocle(window_ids, area),
        Arrange::Floating => vec![],
    }
}

/// Master column on the left, stack column on the right.
pub fn tile(window_ids: &[WindowId], area: Rect, params: &TileParams) -> Vec<(WindowId, Rect)> {
    if window_ids.is_empty() {
        return vec![];
    }

    // a gap can take at most half of either dimension
    let gap = params.gap.min(area.width / 2).min(area.height / 2);
    let usable = Insets::all(gap).shrink(area);

    let window_count = window_ids.len() as u32;
    let main_count = params.nmaster.min(window_count);
    let stack_count = window_count - main_count;

    // Total: main_width + gap + stack_width = usable.width (when both columns exist)
    let (main_width, stack_x, stack_width) = if stack_count == 0 {
        (usable.width, usable.right(), 0)
    } else if main_count == 0 {
        (0, usable.x, usable.width)
    } else {
        let available = usable.width.saturating_sub(gap);
        let mw = (available as f64 * params.mfact) as u32;
        (mw, usable.x + (mw + gap) as i32, available.saturating_sub(mw))
    };

    let (main_ids, stack_ids) = window_ids.split_at(main_count as usize);
    let mut frames = column(main_ids, usable.x, main_width, usable, gap);
    frames.extend(column(stack_ids, stack_x, stack_width, usable, gap));
    frames
}

/// Stacks `ids` vertically. Heights plus gaps add up to `area.height`; the
/// last window absorbs the rounding remainder. Inner gaps shrink so every
/// window keeps at least one pixel when the area allows it.
fn column(ids: &[WindowId], x: i32, width: u32, area: Rect, gap: u32) -> Vec<(WindowId, Rect)> {
    let count = ids.len() as u32;
    if count == 0 {
        return vec![];
    }
    let gap = if count > 1 {
        gap.min(area.height.saturating_sub(count) / (count - 1))
    } else {
        gap
    };

    let total_gaps = gap.saturating_mul(count - 1);
    let height = area.height.saturating_sub(total_gaps) / count;

    ids.iter()
        .enumerate()
        .map(|(i, &id)| {
            let offset = i as u32 * (height + gap);
            let h = if i as u32 == count - 1 {
                area.height.saturating_sub(offset)
            } else {
                height
            };
            (id, Rect::new(x, area.y + offset as i32, width, h))
        })
        .collect()
}

/// Every window covers the whole area.
pub fn monocle(window_ids: &[WindowId], area: Rect) -> Vec<(WindowId, Rect)> {
    window_ids.iter().map(|&id| (id, area)).collect()
}

/// Symbol shown for monocle with `n` visible windows.
pub fn monocle_symbol(n: usize) -> String {
    format!("[{}]", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(0, 0, 1000, 800);

    fn params(nmaster: u32, mfact: f64, gap: u32) -> TileParams {
        TileParams {
            nmaster,
            mfact,
            gap,
        }
    }

    #[test]
    fn test_tile_empty() {
        assert!(tile(&[], AREA, &params(1, 0.5, 0)).is_empty());
        assert!(monocle(&[], AREA).is_empty());
    }

    #[test]
    fn test_tile_single_window_fills_area() {
        let frames = tile(&[1], AREA, &params(1, 0.5, 0));
        assert_eq!(frames, vec![(1, AREA)]);
    }

    #[test]
    fn test_tile_single_window_with_gaps() {
        let frames = tile(&[1], AREA, &params(1, 0.5, 4));
        assert_eq!(frames, vec![(1, Rect::new(4, 4, 992, 792))]);
    }

    #[test]
    fn test_tile_master_and_stack() {
        let frames = tile(&[1, 2, 3], AREA, &params(1, 0.5, 0));
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], (1, Rect::new(0, 0, 500, 800)));
        assert_eq!(frames[1], (2, Rect::new(500, 0, 500, 400)));
        assert_eq!(frames[2], (3, Rect::new(500, 400, 500, 400)));
    }

    #[test]
    fn test_tile_master_stack_counts() {
        let ids = [1, 2, 3, 4, 5];
        for nmaster in 0..7u32 {
            let frames = tile(&ids, AREA, &params(nmaster, 0.5, 0));
            let expected_main = nmaster.min(5) as usize;
            let main_x = frames[0].1.x;
            let in_main = frames.iter().filter(|(_, r)| r.x == main_x).count();
            if expected_main == 0 || expected_main == 5 {
                assert_eq!(in_main, 5);
            } else {
                assert_eq!(in_main, expected_main);
                assert_eq!(frames.len() - in_main, 5 - expected_main);
            }
        }
    }

    #[test]
    fn test_tile_zero_nmaster_gives_stack_full_width() {
        let frames = tile(&[1, 2], AREA, &params(0, 0.5, 0));
        assert_eq!(frames[0], (1, Rect::new(0, 0, 1000, 400)));
        assert_eq!(frames[1], (2, Rect::new(0, 400, 1000, 400)));
    }

    #[test]
    fn test_tile_heights_sum_exactly() {
        let area = Rect::new(0, 29, 1366, 739);
        for n in 1..=7u32 {
            let ids: Vec<u32> = (1..=n).collect();
            for gap in [0u32, 4, 7] {
                let frames = tile(&ids, area, &params(1, 0.55, gap));
                let usable = Insets::all(gap).shrink(area);
                let stack: Vec<_> = frames.iter().skip(1).collect();
                if !stack.is_empty() {
                    let sum: u32 = stack.iter().map(|(_, r)| r.height).sum();
                    let gaps = gap * (stack.len() as u32 - 1);
                    assert_eq!(sum + gaps, usable.height, "n={} gap={}", n, gap);
                    let last = stack.last().unwrap().1;
                    assert_eq!(last.bottom(), usable.bottom());
                }
                assert_eq!(frames[0].1.height, usable.height);
            }
        }
    }

    #[test]
    fn test_tile_large_gap_stays_inside_area() {
        let area = Rect::new(0, 0, 1000, 100);
        let ids = [1, 2, 3, 4, 5, 6];
        for gap in [30, 60, 500, u32::MAX] {
            let frames = tile(&ids, area, &params(1, 0.5, gap));
            assert_eq!(frames.len(), 6);
            for (id, frame) in &frames {
                assert!(frame.x >= area.x && frame.right() <= area.right(), "{} {:?}", id, frame);
                assert!(frame.y >= area.y && frame.bottom() <= area.bottom(), "{} {:?}", id, frame);
            }
            let stack: Vec<Rect> = frames[1..].iter().map(|(_, f)| *f).collect();
            for pair in stack.windows(2) {
                assert!(pair[0].bottom() <= pair[1].y);
            }
        }

        let frames = tile(&ids, area, &params(1, 0.5, 30));
        assert!(frames.iter().all(|(_, f)| f.height > 0));
    }

    #[test]
    fn test_tile_widths_with_gaps() {
        let frames = tile(&[1, 2], AREA, &params(1, 0.5, 4));
        // usable 992 wide, minus one inner gap = 988, split 494/494
        assert_eq!(frames[0].1, Rect::new(4, 4, 494, 792));
        assert_eq!(frames[1].1, Rect::new(502, 4, 494, 792));
        assert_eq!(frames[1].1.right(), 996);
    }

    #[test]
    fn test_tile_mfact_applies_to_master() {
        let frames = tile(&[1, 2], AREA, &params(1, 0.75, 0));
        assert_eq!(frames[0].1.width, 750);
        assert_eq!(frames[1].1.width, 250);
    }

    #[test]
    fn test_tile_is_idempotent() {
        let p = params(2, 0.6, 4);
        let first = tile(&[1, 2, 3, 4], AREA, &p);
        let second = tile(&[1, 2, 3, 4], AREA, &p);
        assert_eq!(first, second);
    }

    #[test]
    fn test_monocle_gives_identical_frames() {
        let frames = monocle(&[1, 2, 3], AREA);
        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|(_, r)| *r == AREA));
        assert_eq!(monocle_symbol(3), "[3]");
    }

    #[test]
    fn test_floating_places_nothing() {
        let frames = arrange(Arrange::Floating, &[1, 2], AREA, &params(1, 0.5, 0));
        assert!(frames.is_empty());
        assert!(!Layout::new("><>", Arrange::Floating).arranges());
        assert!(Layout::new("[]=", Arrange::Tile).arranges());
    }

    #[test]
    fn test_arrange_serialization() {
        let layout: Layout =
            serde_json::from_str(r#"{"symbol":"[M]","arrange":"monocle"}"#).unwrap();
        assert_eq!(layout, Layout::new("[M]", Arrange::Monocle));
    }
}
