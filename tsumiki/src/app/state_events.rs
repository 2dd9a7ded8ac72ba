use anyhow::Result;

use crate::core::State;
use crate::platform::WindowManipulator;
use tsumiki_ipc::{BarState, Request};

/// Sends a bar request for every monitor whose bar contents differ from the
/// last ones sent, then remembers the current contents.
pub fn emit_bar_changes<M: WindowManipulator>(
    state: &State,
    last: &mut Vec<BarState>,
    manipulator: &mut M,
) -> Result<()> {
    let bars = state.bar_states();
    for (i, bar) in bars.iter().enumerate() {
        if last.get(i) != Some(bar) {
            tracing::trace!("Bar of monitor {} changed", bar.monitor);
            manipulator.send(Request::Bar { bar: bar.clone() })?;
        }
    }
    *last = bars;
    Ok(())
}
