use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    DashboardSummary, Employee, Schedule, ScheduleStatus, ScheduleWithEmployee,
};
use crate::scheduling::{overlaps, ShiftInterval};

use super::{NewSchedule, SchedulePatch, ScheduleFilter, SchedulerStore, StoreError};

/// Volatile store over plain vectors, insertion-ordered.
///
/// Every mutation holds the write lock for its full duration, so the
/// conflict scan in `create_schedule`/`update_schedule` and the mutation it
/// guards form one critical section. Reads take the read lock and return
/// cloned snapshots.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    employees: Vec<Employee>,
    schedules: Vec<Schedule>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// A store pre-loaded with a small demo rota, for local development.
    pub fn with_demo_data() -> Self {
        let mut inner = Inner::default();

        let staff = [
            ("Aisha Khan", "Cashier", "aisha@example.com"),
            ("Diego Lopez", "Barista", "diego@example.com"),
            ("Mina Patel", "Manager", "mina@example.com"),
            ("James Wilson", "Cashier", "james@example.com"),
            ("Sarah Chen", "Barista", "sarah@example.com"),
        ];
        for (name, role, email) in staff {
            inner.employees.push(Employee {
                id: Uuid::new_v4(),
                name: name.to_string(),
                role: role.to_string(),
                email: email.to_string(),
            });
        }

        let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid demo date");
        let demo_shifts = [(0usize, "09:00", "17:00"), (1, "08:00", "16:00")];
        for (employee_idx, start, end) in demo_shifts {
            let employee = inner.employees[employee_idx].clone();
            inner.schedules.push(Schedule {
                id: Uuid::new_v4(),
                employee_id: employee.id,
                date,
                start_time: start.parse().expect("valid demo time"),
                end_time: end.parse().expect("valid demo time"),
                role: employee.role,
                status: ScheduleStatus::Confirmed,
            });
        }

        Self {
            inner: RwLock::new(inner),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    /// First schedule for `employee_id` on `date` whose interval overlaps the
    /// proposal, skipping `exclude` (the record being updated). Status is
    /// deliberately ignored: cancelled schedules still block.
    fn find_conflict(
        &self,
        employee_id: Uuid,
        date: NaiveDate,
        proposal: ShiftInterval,
        exclude: Option<Uuid>,
    ) -> Option<&Schedule> {
        self.schedules.iter().find(|s| {
            s.employee_id == employee_id
                && s.date == date
                && Some(s.id) != exclude
                && overlaps(s.interval(), proposal)
        })
    }
}

#[async_trait]
impl SchedulerStore for MemoryStore {
    async fn list_employees(&self) -> Vec<Employee> {
        self.inner.read().await.employees.clone()
    }

    async fn create_employee(&self, name: String, role: String, email: String) -> Employee {
        let employee = Employee {
            id: Uuid::new_v4(),
            name,
            role,
            email,
        };
        self.inner.write().await.employees.push(employee.clone());
        employee
    }

    async fn update_employee(
        &self,
        id: Uuid,
        name: String,
        role: String,
        email: String,
    ) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write().await;
        let employee = inner
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::EmployeeNotFound(id))?;
        employee.name = name;
        employee.role = role;
        employee.email = email;
        Ok(employee.clone())
    }

    async fn delete_employee(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let position = inner
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::EmployeeNotFound(id))?;
        inner.employees.remove(position);
        Ok(())
    }

    async fn list_schedules(&self, filter: ScheduleFilter) -> Vec<ScheduleWithEmployee> {
        let inner = self.inner.read().await;
        inner
            .schedules
            .iter()
            .filter(|s| filter.date.is_none_or(|d| s.date == d))
            .filter(|s| filter.employee_id.is_none_or(|id| s.employee_id == id))
            .map(|s| {
                let employee = inner.employees.iter().find(|e| e.id == s.employee_id);
                ScheduleWithEmployee {
                    schedule: s.clone(),
                    employee_name: employee.map_or("Unknown".to_string(), |e| e.name.clone()),
                    employee_email: employee.map_or("Unknown".to_string(), |e| e.email.clone()),
                }
            })
            .collect()
    }

    async fn create_schedule(&self, new: NewSchedule) -> Result<Schedule, StoreError> {
        let mut inner = self.inner.write().await;

        if !inner.employees.iter().any(|e| e.id == new.employee_id) {
            return Err(StoreError::EmployeeNotFound(new.employee_id));
        }

        if let Some(existing) =
            inner.find_conflict(new.employee_id, new.date, new.interval, None)
        {
            return Err(StoreError::Conflict(Box::new(existing.clone())));
        }

        let schedule = Schedule {
            id: Uuid::new_v4(),
            employee_id: new.employee_id,
            date: new.date,
            start_time: new.interval.start,
            end_time: new.interval.end,
            role: new.role,
            status: ScheduleStatus::Pending,
        };
        inner.schedules.push(schedule.clone());
        Ok(schedule)
    }

    async fn update_schedule(&self, id: Uuid, patch: SchedulePatch) -> Result<Schedule, StoreError> {
        let mut inner = self.inner.write().await;

        let current = inner
            .schedules
            .iter()
            .find(|s| s.id == id)
            .ok_or(StoreError::ScheduleNotFound(id))?
            .clone();

        let mut updated = current.clone();
        if let Some(start) = patch.interval_start {
            updated.start_time = start;
        }
        if let Some(end) = patch.interval_end {
            updated.end_time = end;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }

        // A changed interval can silently introduce a double-booking, so it
        // goes through the same scan as create, excluding this record.
        if updated.interval() != current.interval() {
            if let Some(existing) =
                inner.find_conflict(updated.employee_id, updated.date, updated.interval(), Some(id))
            {
                return Err(StoreError::Conflict(Box::new(existing.clone())));
            }
        }

        let slot = inner
            .schedules
            .iter_mut()
            .find(|s| s.id == id)
            .expect("record present above, lock still held");
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete_schedule(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let position = inner
            .schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::ScheduleNotFound(id))?;
        inner.schedules.remove(position);
        Ok(())
    }

    async fn dashboard_summary(&self, today: NaiveDate) -> DashboardSummary {
        let inner = self.inner.read().await;

        let mut roles: BTreeMap<String, usize> = BTreeMap::new();
        for employee in &inner.employees {
            *roles.entry(employee.role.clone()).or_default() += 1;
        }

        DashboardSummary {
            total_employees: inner.employees.len(),
            total_schedules: inner.schedules.len(),
            today_schedules: inner.schedules.iter().filter(|s| s.date == today).count(),
            pending_schedules: inner
                .schedules
                .iter()
                .filter(|s| s.status == ScheduleStatus::Pending)
                .count(),
            confirmed_schedules: inner
                .schedules
                .iter()
                .filter(|s| s.status == ScheduleStatus::Confirmed)
                .count(),
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ShiftInterval;

    fn interval(start: &str, end: &str) -> ShiftInterval {
        ShiftInterval::new(start.parse().unwrap(), end.parse().unwrap())
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    async fn store_with_employee() -> (MemoryStore, Uuid) {
        let store = MemoryStore::new();
        let employee = store
            .create_employee("Aisha Khan".into(), "Cashier".into(), "aisha@example.com".into())
            .await;
        (store, employee.id)
    }

    fn new_schedule(employee_id: Uuid, day: &str, start: &str, end: &str) -> NewSchedule {
        NewSchedule {
            employee_id,
            date: date(day),
            interval: interval(start, end),
            role: "Cashier".into(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_pending_status() {
        let (store, employee_id) = store_with_employee().await;
        let schedule = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();
        assert_eq!(schedule.status, ScheduleStatus::Pending);
        assert_eq!(schedule.employee_id, employee_id);
    }

    #[tokio::test]
    async fn create_rejects_overlap_and_leaves_store_unchanged() {
        let (store, employee_id) = store_with_employee().await;
        store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();

        let err = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "16:00", "18:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        let listed = store.list_schedules(ScheduleFilter::default()).await;
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn create_accepts_back_to_back_with_distinct_ids() {
        let (store, employee_id) = store_with_employee().await;
        let first = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();
        let second = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "17:00", "20:00"))
            .await
            .unwrap();
        assert_ne!(first.id, second.id);

        let listed = store.list_schedules(ScheduleFilter::default()).await;
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn same_interval_on_other_date_or_employee_is_fine() {
        let (store, employee_id) = store_with_employee().await;
        let other = store
            .create_employee("Diego Lopez".into(), "Barista".into(), "diego@example.com".into())
            .await;

        store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();
        store
            .create_schedule(new_schedule(employee_id, "2024-01-16", "09:00", "17:00"))
            .await
            .unwrap();
        store
            .create_schedule(new_schedule(other.id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn overnight_shift_conflicts_with_early_morning() {
        let (store, employee_id) = store_with_employee().await;
        store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "22:00", "06:00"))
            .await
            .unwrap();

        let err = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "05:00", "09:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn cancelled_schedule_still_blocks() {
        let (store, employee_id) = store_with_employee().await;
        let schedule = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();
        store
            .update_schedule(
                schedule.id,
                SchedulePatch {
                    status: Some(ScheduleStatus::Cancelled),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let err = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "10:00", "12:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_for_unknown_employee_does_not_mutate() {
        let (store, _) = store_with_employee().await;
        let err = store
            .create_schedule(new_schedule(Uuid::new_v4(), "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::EmployeeNotFound(_)));
        assert!(store.list_schedules(ScheduleFilter::default()).await.is_empty());
    }

    #[tokio::test]
    async fn update_rechecks_conflicts_on_interval_change() {
        let (store, employee_id) = store_with_employee().await;
        store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "12:00"))
            .await
            .unwrap();
        let movable = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "13:00", "17:00"))
            .await
            .unwrap();

        // Sliding the second shift into the first must fail and leave it as-is.
        let err = store
            .update_schedule(
                movable.id,
                SchedulePatch {
                    interval_start: Some("11:00".parse().unwrap()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        let listed = store
            .list_schedules(ScheduleFilter {
                employee_id: Some(employee_id),
                ..Default::default()
            })
            .await;
        let unchanged = listed.iter().find(|s| s.schedule.id == movable.id).unwrap();
        assert_eq!(unchanged.schedule.start_time.to_string(), "13:00");
    }

    #[tokio::test]
    async fn update_does_not_conflict_with_itself() {
        let (store, employee_id) = store_with_employee().await;
        let schedule = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();

        let updated = store
            .update_schedule(
                schedule.id,
                SchedulePatch {
                    interval_end: Some("18:00".parse().unwrap()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.end_time.to_string(), "18:00");
    }

    #[tokio::test]
    async fn update_status_transitions_are_unguarded() {
        let (store, employee_id) = store_with_employee().await;
        let schedule = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();

        for status in [
            ScheduleStatus::Confirmed,
            ScheduleStatus::Cancelled,
            ScheduleStatus::Pending,
        ] {
            let updated = store
                .update_schedule(
                    schedule.id,
                    SchedulePatch {
                        status: Some(status),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            assert_eq!(updated.status, status);
        }
    }

    #[tokio::test]
    async fn update_unknown_schedule_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update_schedule(Uuid::new_v4(), SchedulePatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ScheduleNotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_exactly_that_record() {
        let (store, employee_id) = store_with_employee().await;
        let keep = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "12:00"))
            .await
            .unwrap();
        let drop = store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "13:00", "17:00"))
            .await
            .unwrap();

        store.delete_schedule(drop.id).await.unwrap();
        let listed = store.list_schedules(ScheduleFilter::default()).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].schedule.id, keep.id);

        let err = store.delete_schedule(drop.id).await.unwrap_err();
        assert!(matches!(err, StoreError::ScheduleNotFound(_)));
    }

    #[tokio::test]
    async fn list_filters_by_date_and_employee() {
        let (store, employee_id) = store_with_employee().await;
        let other = store
            .create_employee("Diego Lopez".into(), "Barista".into(), "diego@example.com".into())
            .await;
        store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();
        store
            .create_schedule(new_schedule(other.id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();
        store
            .create_schedule(new_schedule(employee_id, "2024-01-16", "09:00", "17:00"))
            .await
            .unwrap();

        let by_date = store
            .list_schedules(ScheduleFilter {
                date: Some(date("2024-01-15")),
                ..Default::default()
            })
            .await;
        assert_eq!(by_date.len(), 2);

        let by_both = store
            .list_schedules(ScheduleFilter {
                date: Some(date("2024-01-15")),
                employee_id: Some(employee_id),
            })
            .await;
        assert_eq!(by_both.len(), 1);
        assert_eq!(by_both[0].employee_name, "Aisha Khan");
    }

    #[tokio::test]
    async fn dangling_employee_renders_unknown() {
        let (store, employee_id) = store_with_employee().await;
        store
            .create_schedule(new_schedule(employee_id, "2024-01-15", "09:00", "17:00"))
            .await
            .unwrap();
        store.delete_employee(employee_id).await.unwrap();

        let listed = store.list_schedules(ScheduleFilter::default()).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].employee_name, "Unknown");
        assert_eq!(listed[0].employee_email, "Unknown");
    }

    #[tokio::test]
    async fn dashboard_counts_and_histogram() {
        let store = MemoryStore::with_demo_data();
        let summary = store.dashboard_summary(date("2024-01-15")).await;

        assert_eq!(summary.total_employees, 5);
        assert_eq!(summary.total_schedules, 2);
        assert_eq!(summary.today_schedules, 2);
        assert_eq!(summary.pending_schedules, 0);
        assert_eq!(summary.confirmed_schedules, 2);
        assert_eq!(summary.roles.values().sum::<usize>(), summary.total_employees);
        assert_eq!(summary.roles["Cashier"], 2);
        assert_eq!(summary.roles["Barista"], 2);
        assert_eq!(summary.roles["Manager"], 1);
    }

    #[tokio::test]
    async fn employee_update_and_delete() {
        let (store, employee_id) = store_with_employee().await;
        let updated = store
            .update_employee(
                employee_id,
                "Aisha K.".into(),
                "Manager".into(),
                "aisha@example.com".into(),
            )
            .await
            .unwrap();
        assert_eq!(updated.role, "Manager");

        let err = store
            .update_employee(Uuid::new_v4(), "x".into(), "y".into(), "z".into())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::EmployeeNotFound(_)));

        store.delete_employee(employee_id).await.unwrap();
        assert!(store.list_employees().await.is_empty());
    }
}
