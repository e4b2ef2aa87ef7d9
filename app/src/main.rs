use std::{convert::Infallible, io, thread, time::Duration};

use deep_thought::{answer, Supervisor, Task, Workable};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The one unit of work this program performs: deliberate for ten seconds,
/// then announce the answer.
#[derive(Debug, Clone)]
struct ThinkTask;

impl Task for ThinkTask {}

#[derive(Debug)]
struct DeepThoughtWorker;

impl Workable for DeepThoughtWorker {
    type Task = ThinkTask;
    type Output = i32;
    type Error = Infallible;

    fn process(_task: Self::Task) -> Result<Self::Output, Self::Error> {
        println!("Thinking...");

        // Deliberation happens in real time and ties up the worker's thread
        // for the full duration. The supervisor keeps waiting regardless.
        thread::sleep(Duration::from_secs(10));

        let answer = answer();
        println!("The answer is {answer}");

        Ok(answer)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    tracing::info!("starting deep-thought...");

    let supervisor: Supervisor<DeepThoughtWorker> = Supervisor::spawn(ThinkTask);
    let answer = supervisor.join().await?;

    tracing::debug!(answer, "worker completed");

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    // Runs the real ten-second deliberation.
    #[test]
    fn deliberation_yields_the_answer() {
        assert_eq!(DeepThoughtWorker::process(ThinkTask), Ok(42));
    }
}
