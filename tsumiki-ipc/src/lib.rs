pub mod command;
pub mod event;
pub mod insets;
pub mod layout;
pub mod request;

pub use command::Command;
pub use event::{modifier, ClickRegion, Event, WindowMetadata};
pub use insets::Insets;
pub use layout::{Rect, WindowGeometry};
pub use request::{BarState, Request};
