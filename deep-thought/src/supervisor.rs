use tokio::task::{self, JoinHandle};

use crate::worker::{Workable, Worker};

pub use error::SupervisorError;

/// Runs a single worker to completion.
///
/// [`Supervisor::spawn`] hands the task to a fresh [`Worker`] on its own
/// blocking thread; [`Supervisor::join`] parks the caller until that worker
/// is done. There is no queue, no pool and no cancellation: once spawned the
/// worker always runs to completion.
#[derive(Debug)]
pub struct Supervisor<W: Workable> {
    // The join handle is the only link to the worker. The worker owns all of
    // its state and reports back exactly once, through the handle, when it
    // finishes.
    handle: JoinHandle<Result<W::Output, W::Error>>,
}

impl<W: Workable + 'static> Supervisor<W> {
    /// Spawns one worker carrying `task`.
    ///
    /// Must be called from within a tokio runtime. The worker is entitled to
    /// block for its whole lifetime, so it runs on a dedicated blocking
    /// thread rather than an executor thread.
    pub fn spawn(task: W::Task) -> Self {
        let worker = Worker::<W>::new(task);

        tracing::debug!(worker_id = worker.pid().to_string(), "spawning worker");

        let handle = task::spawn_blocking(move || worker.run());

        Self { handle }
    }

    /// Waits until the worker has fully completed and returns its result.
    ///
    /// There is no timeout: the caller is parked for as long as the worker
    /// keeps running. A worker that panicked surfaces as
    /// [`SupervisorError::Join`].
    pub async fn join(self) -> Result<W::Output, SupervisorError<W::Error>> {
        self.handle.await?.map_err(SupervisorError::Task)
    }
}

pub mod error {
    //! Supervisor related errors

    use std::fmt::Debug;

    /// Error produced by the `Supervisor`
    #[derive(Debug, thiserror::Error)]
    pub enum SupervisorError<E: Debug> {
        /// The worker never completed: it panicked or its runtime shut down
        /// before the join.
        #[error("worker did not run to completion: {0}")]
        Join(#[from] tokio::task::JoinError),

        /// The worker ran to completion and reported a task failure.
        #[error("task failed: {0:?}")]
        Task(E),
    }
}
