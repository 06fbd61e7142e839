//! SeaORM entities for the staff service tables.

pub mod department_positions;
pub mod departments;
pub mod employees;
pub mod equipment;
pub mod equipment_categories;
pub mod positions;
pub mod specializations;
