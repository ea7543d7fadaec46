//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::{Arc, Mutex};
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService},
};

/// Service type under test.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, SteppingClock>;

/// Deterministic clock advancing one second per reading.
///
/// Keeps `updated_at` strictly increasing across successive mutations
/// without sleeping in tests.
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: Mutex<i64>,
}

impl SteppingClock {
    /// Creates a clock starting at a fixed instant.
    #[must_use]
    pub fn new() -> Self {
        let base = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH);
        Self {
            base,
            ticks: Mutex::new(0),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut ticks = self
            .ticks
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let reading = self.base + Duration::seconds(*ticks);
        *ticks += 1;
        reading
    }
}

/// Provides a fresh service over an empty in-memory repository.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(SteppingClock::new()),
    )
}

/// Creates a task for the given owner.
///
/// # Errors
///
/// Returns the service error when creation fails.
pub async fn create_owned_task(
    service: &TestService,
    owner: &str,
    title: &str,
) -> Result<Task, TaskLifecycleError> {
    service
        .create(CreateTaskRequest::new(owner, owner, title))
        .await
}
