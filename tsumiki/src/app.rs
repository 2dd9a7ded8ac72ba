mod command;
mod dispatch;
mod effects;
mod state_events;

use std::io::BufRead;

use anyhow::{Context, Result};
use tsumiki_ipc::{BarState, Event};

use crate::config::Config;
use crate::core::State;
use crate::platform::WindowManipulator;

pub use effects::Flow;

use dispatch::process_event;
use effects::execute_effects;
use state_events::emit_bar_changes;

/// The event loop: decodes host events, processes each one to completion and
/// sends the resulting requests back.
pub struct App<M: WindowManipulator> {
    state: State,
    manipulator: M,
    bars: Vec<BarState>,
}

impl<M: WindowManipulator> App<M> {
    pub fn new(config: Config, manipulator: M) -> Self {
        Self {
            state: State::new(config),
            manipulator,
            bars: Vec::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Runs until the input ends or a quit command. Returns true when a
    /// restart was requested.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<bool> {
        tracing::info!("Entering event loop");
        for line in input.lines() {
            let line = line.context("Failed to read event from host")?;
            if line.trim().is_empty() {
                continue;
            }
            let event: Event = match serde_json::from_str(&line) {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!("Ignoring malformed event {:?}: {}", line, e);
                    continue;
                }
            };
            if let Flow::Quit { restart } = self.handle_event(&event)? {
                return Ok(restart);
            }
        }
        tracing::info!("Host closed the event stream");
        Ok(false)
    }

    pub fn handle_event(&mut self, event: &Event) -> Result<Flow> {
        tracing::debug!("Event: {:?}", event);
        let effects = process_event(&mut self.state, event);
        let flow = execute_effects(effects, &mut self.state, &mut self.manipulator)?;
        if flow == Flow::Continue {
            emit_bar_changes(&self.state, &mut self.bars, &mut self.manipulator)?;
        }
        Ok(flow)
    }
}
