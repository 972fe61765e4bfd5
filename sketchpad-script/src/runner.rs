//! The sequential line executor.
//!
//! Lines run strictly in order, one at a time. The only suspension point
//! is a `wait` step, driven by a single outstanding timer per run. A
//! re-entrant [`Interpreter::run`] fires the previous run's cancellation
//! slot before starting, so a superseded wait never resumes its
//! continuation.

use std::sync::{Arc, Mutex, PoisonError};

use sketchpad_core::Surface;
use tokio::sync::watch;

use crate::session::{Session, Step};
use crate::store::ScriptStore;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every line executed; the script text was persisted.
    Completed,
    /// A newer run superseded this one mid-flight.
    Cancelled,
}

/// The script interpreter: a session plus run supersession.
///
/// Cloning is cheap; clones share the session, so a `run` on one clone
/// cancels a wait in progress on another.
#[derive(Debug, Clone)]
pub struct Interpreter<S: Surface> {
    session: Arc<tokio::sync::Mutex<Session<S>>>,
    /// Single-slot cancellation token for the run in flight.
    cancel: Arc<Mutex<Option<watch::Sender<bool>>>>,
    store: Option<ScriptStore>,
}

impl<S: Surface + Send> Interpreter<S> {
    /// Create an interpreter drawing to the given surface, with no
    /// persistence slot.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            session: Arc::new(tokio::sync::Mutex::new(Session::new(surface))),
            cancel: Arc::new(Mutex::new(None)),
            store: None,
        }
    }

    /// Create an interpreter that persists the script text to `store`
    /// after each completed run.
    #[must_use]
    pub fn with_store(surface: S, store: ScriptStore) -> Self {
        Self {
            store: Some(store),
            ..Self::new(surface)
        }
    }

    /// Run a script to completion.
    ///
    /// Fully resets the session first (registry, surface, selection, line
    /// counter, transcript) and cancels any in-flight run, so concurrent
    /// runs never interleave. After the last line the raw script text is
    /// persisted to the store slot, when one is configured.
    pub async fn run(&self, script: &str) -> RunOutcome {
        let mut cancelled = self.arm_cancel();

        let mut session = self.session.lock().await;
        session.reset();
        session.clear_transcript();
        tracing::debug!(lines = script.lines().count(), "run started");

        for line in script.lines() {
            // A newer run may have fired the token while this one held a
            // wait or waited for the session lock.
            if *cancelled.borrow() {
                tracing::debug!("run superseded");
                return RunOutcome::Cancelled;
            }
            match session.step(line) {
                Step::Continue => {}
                Step::Wait(duration) => {
                    tracing::debug!(?duration, "script suspended");
                    tokio::select! {
                        () = tokio::time::sleep(duration) => {}
                        _ = cancelled.changed() => {
                            tracing::debug!("wait cancelled");
                            return RunOutcome::Cancelled;
                        }
                    }
                }
            }
        }

        if let Some(store) = &self.store {
            if let Err(err) = store.save(script) {
                tracing::warn!(error = %err, "failed to persist script");
            }
        }
        tracing::debug!("run completed");
        RunOutcome::Completed
    }

    /// Lock the session for inspection (registry, transcript, surface).
    pub async fn session(&self) -> tokio::sync::MutexGuard<'_, Session<S>> {
        self.session.lock().await
    }

    /// Install a fresh cancellation slot, firing the previous run's token.
    fn arm_cancel(&self) -> watch::Receiver<bool> {
        let (tx, rx) = watch::channel(false);
        let previous = self
            .cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(tx);
        if let Some(previous) = previous {
            let _ = previous.send(true);
        }
        rx
    }
}
