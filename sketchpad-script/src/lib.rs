//! # Sketchpad Script
//!
//! The line-oriented interpreter that drives the `sketchpad-core` shape
//! model from script text.
//!
//! ## Pipeline
//!
//! ```text
//! script text ──► lines ──► tokens ──► Command ──► Session mutation
//!                   │                                   │
//!                   │         Step::Wait(d) suspends    ▼
//!                   └──── Interpreter (runner) ──► Transcript + Surface
//! ```
//!
//! One command per line, executed strictly in order. The only suspension
//! point is the `wait` command; a re-entrant [`Interpreter::run`] cancels
//! an in-flight wait so a superseded run never resumes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod error;
pub mod runner;
pub mod session;
pub mod store;
pub mod token;
pub mod transcript;

pub use command::Command;
pub use error::{ScriptError, ScriptResult};
pub use runner::{Interpreter, RunOutcome};
pub use session::{Session, Step};
pub use store::{ScriptStore, StoreError, DEFAULT_SCRIPT};
pub use transcript::{LogEntry, Transcript};
