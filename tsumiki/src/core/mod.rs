mod monitor;
mod rules_engine;
mod state;
mod tag;
mod window;

pub use monitor::*;
pub use rules_engine::*;
pub use state::*;
pub use tag::*;
pub use window::*;
