pub mod dashboard;
pub mod employee;
pub mod employee_input;
pub mod reference;
pub mod schedule;
pub mod schedule_input;

pub use dashboard::DashboardSummary;
pub use employee::Employee;
pub use employee_input::EmployeeInput;
pub use reference::ShiftPreset;
pub use schedule::{Schedule, ScheduleStatus, ScheduleWithEmployee};
pub use schedule_input::{CreateScheduleInput, UpdateScheduleInput};
