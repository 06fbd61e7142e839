use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Staff service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum StaffServiceError {
    #[error("department not found")]
    DepartmentNotFound,
    #[error("position not found")]
    PositionNotFound,
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("equipment not found")]
    EquipmentNotFound,
    #[error("specialization not found")]
    SpecializationNotFound,
    #[error("equipment category not found")]
    EquipmentCategoryNotFound,
    #[error("position is not available in this department")]
    AvailabilityLinkNotFound,
    #[error("cannot delete the Reserve department")]
    ReserveDepartmentProtected,
    #[error("cannot delete the default Unemployed position")]
    UnemployedPositionProtected,
    #[error("default position not found")]
    DefaultPositionMissing,
    #[error("invalid name")]
    InvalidName,
    #[error("cannot delete department with linked records")]
    DepartmentHasLinkedRecords,
    #[error("error deleting position")]
    PositionDeleteFailed,
    #[error("specialization is assigned to employees")]
    SpecializationInUse,
    #[error("equipment category is assigned to equipment")]
    EquipmentCategoryInUse,
    /// Storage rejected a write on a foreign key or unique constraint.
    /// Use cases translate it into the conflict that fits the operation.
    #[error("constraint violation")]
    ConstraintViolation,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl StaffServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DepartmentNotFound => "DEPARTMENT_NOT_FOUND",
            Self::PositionNotFound => "POSITION_NOT_FOUND",
            Self::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            Self::EquipmentNotFound => "EQUIPMENT_NOT_FOUND",
            Self::SpecializationNotFound => "SPECIALIZATION_NOT_FOUND",
            Self::EquipmentCategoryNotFound => "EQUIPMENT_CATEGORY_NOT_FOUND",
            Self::AvailabilityLinkNotFound => "AVAILABILITY_LINK_NOT_FOUND",
            Self::ReserveDepartmentProtected => "RESERVE_DEPARTMENT_PROTECTED",
            Self::UnemployedPositionProtected => "UNEMPLOYED_POSITION_PROTECTED",
            Self::DefaultPositionMissing => "DEFAULT_POSITION_MISSING",
            Self::InvalidName => "INVALID_NAME",
            Self::DepartmentHasLinkedRecords => "DEPARTMENT_HAS_LINKED_RECORDS",
            Self::PositionDeleteFailed => "POSITION_DELETE_FAILED",
            Self::SpecializationInUse => "SPECIALIZATION_IN_USE",
            Self::EquipmentCategoryInUse => "EQUIPMENT_CATEGORY_IN_USE",
            Self::ConstraintViolation => "CONSTRAINT_VIOLATION",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::DepartmentNotFound
            | Self::PositionNotFound
            | Self::EmployeeNotFound
            | Self::EquipmentNotFound
            | Self::SpecializationNotFound
            | Self::EquipmentCategoryNotFound
            | Self::AvailabilityLinkNotFound => StatusCode::NOT_FOUND,
            Self::ReserveDepartmentProtected
            | Self::UnemployedPositionProtected
            | Self::DefaultPositionMissing
            | Self::InvalidName => StatusCode::BAD_REQUEST,
            Self::DepartmentHasLinkedRecords
            | Self::PositionDeleteFailed
            | Self::SpecializationInUse
            | Self::EquipmentCategoryInUse
            | Self::ConstraintViolation => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Replace a bare [`ConstraintViolation`](Self::ConstraintViolation) with
    /// the operation-specific conflict; other errors pass through.
    pub fn on_constraint(self, conflict: Self) -> Self {
        match self {
            Self::ConstraintViolation => conflict,
            other => other,
        }
    }
}

impl IntoResponse for StaffServiceError {
    fn into_response(self) -> Response {
        let cause = match &self {
            Self::Internal(e) => Some(format!("{e:#}")),
            _ => None,
        };
        roster_core::error::error_response(
            self.status(),
            self.kind(),
            self.to_string(),
            cause.as_ref().map(|c| c as &dyn std::fmt::Display),
        )
    }
}
