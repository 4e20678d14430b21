use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shiftboard API",
        version = "0.1.0",
        description = "Employee-shift scheduling backend with overnight-aware conflict detection"
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Employees
        crate::handlers::employees_handler::get_employees,
        crate::handlers::employees_handler::create_employee,
        crate::handlers::employees_handler::update_employee,
        crate::handlers::employees_handler::delete_employee,

        // Schedules
        crate::handlers::schedules_handler::get_schedules,
        crate::handlers::schedules_handler::create_schedule,
        crate::handlers::schedules_handler::update_schedule,
        crate::handlers::schedules_handler::delete_schedule,

        // References
        crate::handlers::references_handler::get_shift_presets,

        // Dashboard
        crate::handlers::dashboard_handler::get_dashboard,
    ),
    components(
        schemas(
            // Core models
            crate::models::Employee,
            crate::models::Schedule,
            crate::models::ScheduleStatus,
            crate::models::ScheduleWithEmployee,
            crate::models::ShiftPreset,
            crate::models::DashboardSummary,

            // Input models
            crate::models::EmployeeInput,
            crate::models::CreateScheduleInput,
            crate::models::UpdateScheduleInput,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "employees", description = "Employee management"),
        (name = "schedules", description = "Schedule management with conflict detection"),
        (name = "references", description = "Reference data"),
        (name = "dashboard", description = "Aggregate statistics"),
    )
)]
pub struct ApiDoc;
