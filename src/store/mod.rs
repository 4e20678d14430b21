pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{DashboardSummary, Employee, Schedule, ScheduleStatus, ScheduleWithEmployee};
use crate::scheduling::{ShiftInterval, TimeOfDay};

pub use memory::MemoryStore;

/// Failures the store can report. Converted to HTTP statuses in `error.rs`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Employee {0} not found")]
    EmployeeNotFound(Uuid),

    #[error("Schedule {0} not found")]
    ScheduleNotFound(Uuid),

    /// The proposed interval overlaps an existing schedule for the same
    /// employee and date. Carries the colliding record so the caller can
    /// show what to resolve.
    #[error("Schedule conflict detected")]
    Conflict(Box<Schedule>),
}

/// Fields for a new schedule, already parsed and validated at the boundary.
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub interval: ShiftInterval,
    pub role: String,
}

/// Partial update for a schedule; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct SchedulePatch {
    pub interval_start: Option<TimeOfDay>,
    pub interval_end: Option<TimeOfDay>,
    pub status: Option<ScheduleStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub date: Option<NaiveDate>,
    pub employee_id: Option<Uuid>,
}

/// The storage seam. Handlers depend on this trait only, so the in-memory
/// backend can be swapped for a persistent one without touching them.
#[async_trait]
pub trait SchedulerStore: Send + Sync {
    async fn list_employees(&self) -> Vec<Employee>;
    async fn create_employee(&self, name: String, role: String, email: String) -> Employee;
    async fn update_employee(
        &self,
        id: Uuid,
        name: String,
        role: String,
        email: String,
    ) -> Result<Employee, StoreError>;
    async fn delete_employee(&self, id: Uuid) -> Result<(), StoreError>;

    async fn list_schedules(&self, filter: ScheduleFilter) -> Vec<ScheduleWithEmployee>;

    /// Appends a new `pending` schedule after checking it against every
    /// existing schedule for the same employee and date. Cancelled schedules
    /// still block. The scan and append run as one atomic step with respect
    /// to other mutations.
    async fn create_schedule(&self, new: NewSchedule) -> Result<Schedule, StoreError>;

    /// Applies the present fields. An interval-changing patch re-runs the
    /// conflict scan against the employee's other schedules on that date;
    /// status changes are unguarded field sets.
    async fn update_schedule(&self, id: Uuid, patch: SchedulePatch) -> Result<Schedule, StoreError>;

    async fn delete_schedule(&self, id: Uuid) -> Result<(), StoreError>;

    async fn dashboard_summary(&self, today: NaiveDate) -> DashboardSummary;
}
