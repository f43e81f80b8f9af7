// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The UI-owning execution context.
//!
//! A [`UiContext`] is a single task draining a FIFO queue of jobs. Background
//! tasks never touch widgets themselves; they post a job here instead. Jobs run
//! one at a time, in posting order, and are synchronous so that nothing on the
//! UI context can block on I/O.
//!
//! A job can be guarded by a [`CancellationToken`]: if the token is cancelled
//! by the time the job reaches the front of the queue, the job is skipped.
//! Subscriptions guard their jobs with their own token, which is how disposal
//! prevents late rendering.
//!
//! ```rust
//! use sensorcontrol_exec::UiContext;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (ui, _task) = UiContext::spawn();
//! let ran = Arc::new(AtomicBool::new(false));
//!
//! let flag = ran.clone();
//! ui.post(move || flag.store(UiContext::is_current(), Ordering::SeqCst)).unwrap();
//! ui.flush().await.unwrap();
//!
//! assert!(ran.load(Ordering::SeqCst));
//! # }
//! ```

use crate::ExecError;
use sensorcontrol_core::CancellationToken;
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

type UiJob = Box<dyn FnOnce() + Send + 'static>;

struct Posted {
    guard: Option<CancellationToken>,
    job: UiJob,
}

thread_local! {
    static ON_UI_CONTEXT: Cell<bool> = const { Cell::new(false) };
}

/// Handle to the UI job queue. Cheap to clone; all clones post to the same queue.
#[derive(Clone, Debug)]
pub struct UiContext {
    tx: mpsc::UnboundedSender<Posted>,
    shutdown: CancellationToken,
}

impl UiContext {
    /// Start the UI loop on the current tokio runtime.
    ///
    /// The returned handle resolves once the loop has stopped, after
    /// [`shutdown`](Self::shutdown) or once every `UiContext` clone is dropped.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn() -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let task = tokio::spawn(run_loop(rx, shutdown.clone()));
        (Self { tx, shutdown }, task)
    }

    /// Queue `job` for execution on the UI context.
    ///
    /// # Errors
    ///
    /// Returns `ExecError::UiClosed` if the context has shut down.
    pub fn post<F>(&self, job: F) -> Result<(), ExecError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.enqueue(None, Box::new(job))
    }

    /// Queue `job`, skipping it if `guard` is cancelled before it runs.
    ///
    /// # Errors
    ///
    /// Returns `ExecError::UiClosed` if the context has shut down.
    pub fn post_guarded<F>(&self, guard: &CancellationToken, job: F) -> Result<(), ExecError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.enqueue(Some(guard.clone()), Box::new(job))
    }

    /// Resolves once every job posted before this call has run or been skipped.
    ///
    /// # Errors
    ///
    /// Returns `ExecError::UiClosed` if the context shuts down first.
    pub async fn flush(&self) -> Result<(), ExecError> {
        let (tx, rx) = oneshot::channel();
        self.post(move || {
            let _ = tx.send(());
        })?;
        rx.await.map_err(|_| ExecError::UiClosed)
    }

    /// Stop the loop. Jobs still queued are dropped without running.
    /// Idempotent.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled() || self.tx.is_closed()
    }

    /// `true` while the calling code runs as a UI job.
    pub fn is_current() -> bool {
        ON_UI_CONTEXT.with(Cell::get)
    }

    fn enqueue(&self, guard: Option<CancellationToken>, job: UiJob) -> Result<(), ExecError> {
        if self.shutdown.is_cancelled() {
            return Err(ExecError::UiClosed);
        }
        self.tx
            .send(Posted { guard, job })
            .map_err(|_| ExecError::UiClosed)
    }
}

async fn run_loop(mut rx: mpsc::UnboundedReceiver<Posted>, shutdown: CancellationToken) {
    loop {
        let posted = tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            posted = rx.recv() => match posted {
                Some(posted) => posted,
                None => break,
            },
        };

        if posted
            .guard
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
        {
            crate::debug!("skipping UI job of a disposed subscription");
            continue;
        }

        run_job(posted.job);
    }

    rx.close();
    crate::debug!("UI context stopped");
}

fn run_job(job: UiJob) {
    ON_UI_CONTEXT.with(|flag| flag.set(true));
    let outcome = catch_unwind(AssertUnwindSafe(job));
    ON_UI_CONTEXT.with(|flag| flag.set(false));

    if outcome.is_err() {
        crate::error!("UI job panicked; continuing with the next job");
    }
}
