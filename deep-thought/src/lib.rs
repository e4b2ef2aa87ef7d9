pub mod answer;
pub mod supervisor;
pub mod worker;

pub use crate::{
    answer::answer,
    supervisor::Supervisor,
    worker::{Task, Workable, Worker},
};

// NOTE: workers are identified by a `Uuid` rather than a pool index so that
// ids stay unique without any coordination with the supervisor that spawned
// them.
pub type Pid = uuid::Uuid;
