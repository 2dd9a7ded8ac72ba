use tsumiki_ipc::Rect;

use super::super::state::State;
use super::super::{MonitorId, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize,
}

/// An in-progress pointer move or resize of one window.
#[derive(Debug, Clone, PartialEq)]
pub struct Drag {
    pub window: WindowId,
    pub kind: DragKind,
    /// Pointer position the move is measured from. Unknown until the first
    /// motion when the drag was started from the keyboard.
    pub origin: Option<(i32, i32)>,
    /// Window frame when the drag started.
    pub start: Rect,
}

/// What a pointer motion changed.
#[derive(Debug, Default, PartialEq)]
pub struct DragOutcome {
    /// Monitor to re-arrange because the window started floating.
    pub rearrange: Option<MonitorId>,
    /// Window whose frame changed.
    pub moved: Option<WindowId>,
}

/// Starts dragging the focused window. Returns where the pointer should be
/// warped to, if anywhere.
pub fn start_drag(
    state: &mut State,
    kind: DragKind,
    pointer: Option<(i32, i32)>,
) -> Option<(i32, i32)> {
    let window = state.focused_window()?;
    let start = window.frame;
    let id = window.id;
    tracing::debug!("Start {:?} drag of window {}", kind, id);

    let warp = match kind {
        DragKind::Move => None,
        DragKind::Resize => Some((start.right() - 1, start.bottom() - 1)),
    };
    state.drag = Some(Drag {
        window: id,
        kind,
        origin: warp.or(pointer),
        start,
    });
    warp
}

pub fn drag_motion(state: &mut State, x: i32, y: i32) -> DragOutcome {
    let Some(drag) = state.drag.clone() else {
        return DragOutcome::default();
    };
    let Some(window) = state.windows.get(&drag.window) else {
        state.drag = None;
        return DragOutcome::default();
    };
    let Some((ox, oy)) = drag.origin else {
        if let Some(d) = state.drag.as_mut() {
            d.origin = Some((x, y));
        }
        return DragOutcome::default();
    };

    let monitor_id = window.monitor;
    let area = state.monitors[monitor_id].window_area;
    let snap = state.config.appearance.snap as i32;
    let arranges = state.layout_of(monitor_id).arranges();
    let frame = window.frame;

    let target = match drag.kind {
        DragKind::Move => {
            let (w, h) = (frame.width as i32, frame.height as i32);
            let mut nx = drag.start.x + (x - ox);
            let mut ny = drag.start.y + (y - oy);
            if (area.x - nx).abs() < snap {
                nx = area.x;
            } else if (area.right() - (nx + w)).abs() < snap {
                nx = area.right() - w;
            }
            if (area.y - ny).abs() < snap {
                ny = area.y;
            } else if (area.bottom() - (ny + h)).abs() < snap {
                ny = area.bottom() - h;
            }
            Rect::new(nx, ny, frame.width, frame.height)
        }
        DragKind::Resize => {
            let min = 2 * window.border as i32 + 1;
            let nw = (x - frame.x + 1).max(min);
            let nh = (y - frame.y + 1).max(min);
            Rect::new(frame.x, frame.y, nw as u32, nh as u32)
        }
    };

    let mut outcome = DragOutcome::default();
    let exceeds_snap = match drag.kind {
        DragKind::Move => {
            (target.x - frame.x).abs() > snap || (target.y - frame.y).abs() > snap
        }
        DragKind::Resize => {
            (target.width as i32 - frame.width as i32).abs() > snap
                || (target.height as i32 - frame.height as i32).abs() > snap
        }
    };
    let Some(window) = state.windows.get_mut(&drag.window) else {
        return outcome;
    };
    if window.is_tiled() && arranges && exceeds_snap {
        tracing::info!("Window {} dragged out of the layout, floating", window.id);
        window.is_floating = true;
        outcome.rearrange = Some(monitor_id);
    }
    if (!arranges || window.is_floating) && window.frame != target {
        window.frame = target;
        outcome.moved = Some(window.id);
    }
    outcome
}

/// Finishes the drag. If the window now lies mostly on another monitor it is
/// sent there and that monitor is selected; its id is returned.
pub fn end_drag(state: &mut State) -> Option<MonitorId> {
    let drag = state.drag.take()?;
    let window = state.windows.get(&drag.window)?;
    let target = state.monitor_for_rect(window.frame);
    if target == window.monitor {
        return None;
    }
    state.send_to_monitor(drag.window, target);
    state.focused_monitor = target;
    Some(target)
}
