use crate::core::{MonitorId, WindowId};

use tsumiki_ipc::Request;

/// Side effects computed by command and event processing, executed against
/// the host afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Re-arrange and restack one monitor, or re-arrange all of them.
    Arrange(Option<MonitorId>),
    /// Focus a window, or the best candidate on the selected monitor.
    Focus(Option<WindowId>),
    Restack(MonitorId),
    /// Push a window's current frame to the host.
    Configure(WindowId),
    Close(WindowId),
    WarpPointer {
        x: i32,
        y: i32,
    },
    /// A request already computed while processing.
    Request(Request),
    Spawn(Vec<String>),
    Quit {
        restart: bool,
    },
}
