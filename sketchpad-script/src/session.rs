//! The interpreter session: all state for one script run.
//!
//! Everything a running script can touch lives here — registry, surface,
//! transcript, line counter — so independent sessions (and tests) never
//! share state through globals.

use std::time::Duration;

use sketchpad_core::{Registry, Surface};

use crate::command::Command;
use crate::error::ScriptResult;
use crate::token::tokenize;
use crate::transcript::Transcript;

/// What the executor should do after one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Proceed to the next line.
    Continue,
    /// Suspend the whole script for this long, then proceed.
    Wait(Duration),
}

/// Interpreter state for one script run.
#[derive(Debug)]
pub struct Session<S: Surface> {
    registry: Registry,
    surface: S,
    transcript: Transcript,
    /// 1-based counter of the line being executed; 0 between runs.
    current_line: u32,
}

impl<S: Surface> Session<S> {
    /// Create a session drawing to the given surface.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            registry: Registry::new(),
            surface,
            transcript: Transcript::new(),
            current_line: 0,
        }
    }

    /// Full reset: clear registry, surface, selection, and line counter.
    ///
    /// Invoked at the start of every run and by the `reset` command. The
    /// transcript is cleared separately (a mid-script `reset` keeps the
    /// log so the user sees what led up to it).
    pub fn reset(&mut self) {
        self.registry.clear(&mut self.surface);
        self.current_line = 0;
    }

    /// Drop the transcript contents.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Execute one script line.
    ///
    /// Increments the line counter, skips blank lines, echoes the line to
    /// the transcript, then dispatches. A failed line logs its error under
    /// the same line number and the session carries on — no script error
    /// escapes this method.
    pub fn step(&mut self, raw: &str) -> Step {
        self.current_line += 1;
        if raw.trim().is_empty() {
            return Step::Continue;
        }

        let line = self.current_line;
        self.transcript.push(line, raw.trim_end());

        match self.dispatch(raw) {
            Ok(step) => step,
            Err(err) => {
                tracing::debug!(line, error = %err, "script line failed");
                self.transcript.push(line, &err.to_string());
                Step::Continue
            }
        }
    }

    /// The shape registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The transcript so far.
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The surface being drawn to.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn dispatch(&mut self, raw: &str) -> ScriptResult<Step> {
        let words = tokenize(raw, self.registry.selected())?;
        let command = Command::parse(&words)?;
        self.apply(command)
    }

    #[allow(clippy::too_many_lines)]
    fn apply(&mut self, command: Command) -> ScriptResult<Step> {
        match command {
            Command::New { kind, name } => {
                self.registry.create(name.as_deref(), kind, &mut self.surface)?;
            }
            Command::Clone { from, to } => {
                self.registry.clone_shape(&from, &to, &mut self.surface)?;
            }
            Command::Remove { name } => {
                self.registry.remove(&name, &mut self.surface)?;
            }
            Command::Paint { name, color } => {
                let shape = self.registry.get_mut(&name)?;
                if let Some(color) = color {
                    shape.set_fill(&color, &mut self.surface);
                }
                // Painting also selects, like creation does.
                self.registry.select(&name)?;
            }
            Command::Write { name, text } => {
                self.registry
                    .get_mut(&name)?
                    .set_text(&text, &mut self.surface);
            }
            Command::Width { name, value } => {
                self.registry
                    .get_mut(&name)?
                    .size_to(value, None, &mut self.surface);
            }
            Command::Height { name, value } => {
                self.registry
                    .get_mut(&name)?
                    .size_to(None, value, &mut self.surface);
            }
            Command::Left { name, value } => {
                self.registry
                    .get_mut(&name)?
                    .move_to(value, None, &mut self.surface);
            }
            Command::Top { name, value } => {
                self.registry
                    .get_mut(&name)?
                    .move_to(None, value, &mut self.surface);
            }
            Command::Outline { name, color, width } => {
                self.registry.get_mut(&name)?.set_stroke(
                    color.as_deref(),
                    width,
                    &mut self.surface,
                );
            }
            Command::With { name } => {
                self.registry.select(&name)?;
            }
            Command::Move { name, dx, dy } => {
                self.registry
                    .get_mut(&name)?
                    .move_by(dx, dy, &mut self.surface);
            }
            Command::Position { name, x, y } => {
                self.registry
                    .get_mut(&name)?
                    .move_to(x, y, &mut self.surface);
            }
            Command::Points { name, points } => {
                self.registry
                    .get_mut(&name)?
                    .set_points(points, &mut self.surface);
            }
            Command::Size { name, w, h } => {
                self.registry
                    .get_mut(&name)?
                    .size_to(w, h, &mut self.surface);
            }
            Command::Grow { name, dw, dh } => {
                self.registry
                    .get_mut(&name)?
                    .size_by(dw, dh, &mut self.surface);
            }
            Command::Wait { duration } => return Ok(Step::Wait(duration)),
            Command::Reset => self.reset(),
        }
        Ok(Step::Continue)
    }
}
