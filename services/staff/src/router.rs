use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use roster_core::health::healthz;
use roster_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    department::{
        create_department, delete_department, get_department, get_department_positions,
        get_departments, link_department_position, unlink_department_position,
    },
    employee::{create_employee, get_employee, get_employees},
    equipment::{create_equipment, get_equipment, get_equipment_list},
    health::readyz,
    position::{create_position, delete_position, get_position, get_positions},
    reference::{
        create_equipment_category, create_specialization, delete_equipment_category,
        delete_specialization, get_equipment_categories, get_specializations,
    },
    sentinel::get_sentinels,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Departments
        .route("/departments", post(create_department))
        .route("/departments", get(get_departments))
        .route("/departments/{id}", get(get_department))
        .route("/departments/{id}", delete(delete_department))
        // Availability
        .route("/departments/{id}/positions", get(get_department_positions))
        .route(
            "/departments/{id}/positions/{position_id}",
            put(link_department_position).delete(unlink_department_position),
        )
        // Positions
        .route("/positions", post(create_position))
        .route("/positions", get(get_positions))
        .route("/positions/{id}", get(get_position))
        .route("/positions/{id}", delete(delete_position))
        // Employees
        .route("/employees", post(create_employee))
        .route("/employees", get(get_employees))
        .route("/employees/{id}", get(get_employee))
        // Equipment
        .route("/equipment", post(create_equipment))
        .route("/equipment", get(get_equipment_list))
        .route("/equipment/{id}", get(get_equipment))
        // Reference data
        .route("/specializations", post(create_specialization))
        .route("/specializations", get(get_specializations))
        .route("/specializations/{id}", delete(delete_specialization))
        .route("/equipment-categories", post(create_equipment_category))
        .route("/equipment-categories", get(get_equipment_categories))
        .route(
            "/equipment-categories/{id}",
            delete(delete_equipment_category),
        )
        // Sentinels
        .route("/sentinels", get(get_sentinels))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
