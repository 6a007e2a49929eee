//! Synchronous effect runner around the engine.
//!
//! The async terminal loop in [`renderer`](super::renderer) and the tests both
//! drive the engine through this type, so effect handling lives in one place.

use super::core::{Command, Effect, Effects, Event};
use super::engine::{Engine, EngineError};
use std::collections::VecDeque;

pub struct Host {
    engine: Engine,
    pending: VecDeque<Event>,
    should_quit: bool,
}

impl Host {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            pending: VecDeque::new(),
            should_quit: false,
        }
    }

    /// Initialize the engine and run its startup effects
    pub fn start(&mut self) -> Result<(), EngineError> {
        let effects = self.engine.init()?;
        self.run_effects(effects);
        self.flush();
        Ok(())
    }

    /// Feed one event, then every event it dispatches in turn
    pub fn dispatch(&mut self, event: Event) {
        self.pending.push_back(event);
        self.flush();
    }

    /// Apply every command that is already queued. Returns how many were applied.
    pub fn drain_ready(&mut self) -> usize {
        let mut applied = 0;
        while !self.should_quit {
            let Some(command) = self.engine.try_drain_next() else {
                break;
            };
            applied += 1;
            self.dispatch(Event::Command(command));
        }
        applied
    }

    /// Wait for the next queued command, `None` while the listener is disarmed
    pub async fn next_command(&mut self) -> Option<Command> {
        self.engine.drain_next().await
    }

    pub fn is_listening(&self) -> bool {
        self.engine.is_listening()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn render(&self) -> String {
        self.engine.render()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    fn flush(&mut self) {
        while let Some(event) = self.pending.pop_front() {
            if self.should_quit {
                self.pending.clear();
                break;
            }
            let effects = self.engine.update(event);
            self.run_effects(effects);
        }
    }

    fn run_effects(&mut self, effects: Effects) {
        for effect in effects {
            match effect {
                Effect::Listen => self.engine.listen(),
                Effect::Quit => self.should_quit = true,
                Effect::Dispatch(event) => self.pending.push_back(event),
            }
        }
    }
}
