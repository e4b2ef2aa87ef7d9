use std::fmt::Debug;

use crate::Pid;

/// A unit of work handed to a worker exactly once. Tasks move onto the
/// worker's thread, so they must be `Send` and own their data.
pub trait Task: Send + 'static {}

/// A short-lived worker that executes a single task to completion and hands
/// the result back to its supervisor.
pub trait Workable: Debug + Send + Sized {
    type Task: Task + Debug;
    type Output: Send + Debug + 'static;
    type Error: Send + Debug + 'static;

    /// Executes the task. The implementation is free to block the calling
    /// thread for its entire duration (real-time pauses, synchronous IO);
    /// workers are always given a dedicated thread, never an executor
    /// thread.
    fn process(task: Self::Task) -> Result<Self::Output, Self::Error>;
}

#[derive(Debug)]
pub struct Worker<W: Workable> {
    pid: Pid,
    task: W::Task,
}

impl<W: Workable> Worker<W> {
    pub fn new(task: W::Task) -> Self {
        Self {
            pid: uuid::Uuid::new_v4(),
            task,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Runs the task to completion on the calling thread.
    ///
    /// There is no cancellation point: once entered, the call returns only
    /// when the task itself has finished (or panicked).
    #[tracing::instrument(skip(self), fields(worker_id = self.pid.to_string()))]
    pub fn run(self) -> Result<W::Output, W::Error> {
        tracing::debug!("worker running task {task:?}", task = self.task);

        let result = W::process(self.task);

        match &result {
            Ok(output) => tracing::debug!("task complete: {output:?}"),
            Err(e) => tracing::error!("task failed: {e:?}"),
        }

        result
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Clone)]
    struct EchoTask(u64);

    impl Task for EchoTask {}

    #[derive(Debug)]
    struct EchoWorker;

    impl Workable for EchoWorker {
        type Task = EchoTask;
        type Output = u64;
        type Error = &'static str;

        fn process(task: Self::Task) -> Result<Self::Output, Self::Error> {
            Ok(task.0)
        }
    }

    #[derive(Debug)]
    struct FailingWorker;

    impl Workable for FailingWorker {
        type Task = EchoTask;
        type Output = u64;
        type Error = &'static str;

        fn process(_task: Self::Task) -> Result<Self::Output, Self::Error> {
            Err("no answer")
        }
    }

    #[test]
    fn runs_task_to_completion() {
        let worker: Worker<EchoWorker> = Worker::new(EchoTask(7));
        assert_eq!(worker.run(), Ok(7));
    }

    #[test]
    fn surfaces_task_error() {
        let worker: Worker<FailingWorker> = Worker::new(EchoTask(7));
        assert_eq!(worker.run(), Err("no answer"));
    }

    #[test]
    fn pids_are_unique() {
        let a: Worker<EchoWorker> = Worker::new(EchoTask(0));
        let b: Worker<EchoWorker> = Worker::new(EchoTask(0));
        assert_ne!(a.pid(), b.pid());
    }
}
