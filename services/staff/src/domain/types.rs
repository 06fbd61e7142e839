use chrono::{DateTime, Utc};

use roster_domain::id::{
    DepartmentId, EmployeeId, EquipmentCategoryId, EquipmentId, PositionId, SpecializationId,
};
use roster_domain::pagination::Sort;
use roster_domain::sentinel::SentinelRole;

/// Organisational unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    /// Set on the single Reserve department only.
    pub is_reserve: bool,
    pub created_at: DateTime<Utc>,
}

impl Department {
    pub fn new(name: String) -> Self {
        Self {
            id: DepartmentId::generate(),
            name,
            is_reserve: false,
            created_at: Utc::now(),
        }
    }

    /// A fresh Reserve department row, not yet persisted.
    pub fn reserve() -> Self {
        Self {
            name: SentinelRole::ReserveDepartment.canonical_name().to_owned(),
            is_reserve: true,
            ..Self::new(String::new())
        }
    }
}

/// Job title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub id: PositionId,
    pub title: String,
    /// Set on the single Unemployed position only.
    pub is_unemployed: bool,
    pub created_at: DateTime<Utc>,
}

impl Position {
    pub fn new(title: String) -> Self {
        Self {
            id: PositionId::generate(),
            title,
            is_unemployed: false,
            created_at: Utc::now(),
        }
    }

    /// A fresh Unemployed position row, not yet persisted.
    pub fn unemployed() -> Self {
        Self {
            title: SentinelRole::UnemployedPosition.canonical_name().to_owned(),
            is_unemployed: true,
            ..Self::new(String::new())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: String,
    /// `None` reads as "in Reserve".
    pub department_id: Option<DepartmentId>,
    /// `None` reads as "Unemployed".
    pub position_id: Option<PositionId>,
    pub specialization_id: SpecializationId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    /// `None` reads as "in the warehouse".
    pub department_id: Option<DepartmentId>,
    pub category_id: EquipmentCategoryId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specialization {
    pub id: SpecializationId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentCategory {
    pub id: EquipmentCategoryId,
    pub name: String,
}

/// What a department deletion moved and removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentCascade {
    pub department_id: DepartmentId,
    pub reserve_department_id: DepartmentId,
    pub unemployed_position_id: PositionId,
    pub employees_reassigned: u64,
    pub equipment_reassigned: u64,
    pub links_removed: u64,
}

/// What a position deletion moved and removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionCascade {
    pub position_id: PositionId,
    pub unemployed_position_id: PositionId,
    pub employees_reassigned: u64,
    pub links_removed: u64,
}

/// Ids of both sentinel rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinels {
    pub reserve_department_id: DepartmentId,
    pub unemployed_position_id: PositionId,
}

/// Sort options for department list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentSortBy {
    Name(Sort),
    CreatedAt(Sort),
}

impl Default for DepartmentSortBy {
    fn default() -> Self {
        Self::Name(Sort::Asc)
    }
}

impl DepartmentSortBy {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "name-asc" => Some(Self::Name(Sort::Asc)),
            "name-desc" => Some(Self::Name(Sort::Desc)),
            "created-at-asc" => Some(Self::CreatedAt(Sort::Asc)),
            "created-at-desc" => Some(Self::CreatedAt(Sort::Desc)),
            _ => None,
        }
    }
}

/// Sort options for position list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSortBy {
    Title(Sort),
    CreatedAt(Sort),
}

impl Default for PositionSortBy {
    fn default() -> Self {
        Self::Title(Sort::Asc)
    }
}

impl PositionSortBy {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "title-asc" => Some(Self::Title(Sort::Asc)),
            "title-desc" => Some(Self::Title(Sort::Desc)),
            "created-at-asc" => Some(Self::CreatedAt(Sort::Asc)),
            "created-at-desc" => Some(Self::CreatedAt(Sort::Desc)),
            _ => None,
        }
    }
}

pub const MAX_NAME_LEN: usize = 100;

/// Trim a display name and check it is 1-100 characters long.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return None;
    }
    Some(trimmed.to_owned())
}
