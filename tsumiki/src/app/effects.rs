use anyhow::Result;

use crate::core::State;
use crate::effect::Effect;
use crate::platform::WindowManipulator;
use tsumiki_ipc::Request;

/// Whether the event loop keeps running after a batch of effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit { restart: bool },
}

/// Execute side effects in order.
pub fn execute_effects<M: WindowManipulator>(
    effects: Vec<Effect>,
    state: &mut State,
    manipulator: &mut M,
) -> Result<Flow> {
    for effect in effects {
        match effect {
            Effect::Arrange(monitor) => {
                for request in state.arrange(monitor) {
                    manipulator.send(request)?;
                }
            }
            Effect::Focus(window) => {
                let request = state.focus(window);
                manipulator.send(request)?;
            }
            Effect::Restack(monitor) => {
                for request in state.restack(monitor) {
                    manipulator.send(request)?;
                }
            }
            Effect::Configure(window_id) => {
                if let Some(window) = state.windows.get(&window_id) {
                    manipulator.send(Request::Configure {
                        geometry: window.geometry(),
                    })?;
                }
            }
            Effect::Close(window_id) => {
                tracing::info!("Close window {}", window_id);
                manipulator.send(Request::Close { window: window_id })?;
            }
            Effect::WarpPointer { x, y } => {
                manipulator.send(Request::WarpPointer { x, y })?;
            }
            Effect::Request(request) => {
                manipulator.send(request)?;
            }
            Effect::Spawn(argv) => {
                if let Err(e) = manipulator.exec_command(&argv) {
                    tracing::warn!("{}", e);
                }
            }
            Effect::Quit { restart } => {
                tracing::info!("Quit requested (restart: {})", restart);
                manipulator.send(Request::Quit { restart })?;
                return Ok(Flow::Quit { restart });
            }
        }
    }
    Ok(Flow::Continue)
}
