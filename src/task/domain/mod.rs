//! Domain model for per-user tasks.
//!
//! The task domain models the task aggregate, its validated field types,
//! completion filtering, and the pure ownership guard that every lifecycle
//! operation applies. All infrastructure concerns are kept outside the
//! domain boundary.

mod description;
mod error;
mod filter;
mod ids;
mod ownership;
mod task;
mod title;

pub use description::TaskDescription;
pub use error::TaskDomainError;
pub use filter::StatusFilter;
pub use ids::{OwnerId, TaskId};
pub use ownership::{AccessDenied, authorize};
pub use task::{NewTask, PersistedTaskData, Task};
pub use title::TaskTitle;
