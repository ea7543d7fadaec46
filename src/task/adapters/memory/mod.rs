//! In-memory adapter for the task persistence port.

mod task_store;

pub use task_store::InMemoryTaskRepository;
