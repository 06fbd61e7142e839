use std::sync::{Arc, Mutex};

use chrono::Utc;

use roster_domain::id::{
    DepartmentId, EmployeeId, EquipmentCategoryId, EquipmentId, PositionId, SpecializationId,
};
use roster_staff::domain::repository::{StaffStore, StaffUnitOfWork};
use roster_staff::domain::types::{Department, Employee, Equipment, Position};
use roster_staff::error::StaffServiceError;

// ── In-memory tables ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    pub departments: Vec<Department>,
    pub positions: Vec<Position>,
    pub employees: Vec<Employee>,
    pub equipment: Vec<Equipment>,
    pub links: Vec<(DepartmentId, PositionId)>,
}

impl Tables {
    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn position(&self, id: PositionId) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == id)
    }

    pub fn employee(&self, id: EmployeeId) -> &Employee {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .expect("employee fixture")
    }

    pub fn equipment_item(&self, id: EquipmentId) -> &Equipment {
        self.equipment
            .iter()
            .find(|q| q.id == id)
            .expect("equipment fixture")
    }

    pub fn reserve(&self) -> Option<&Department> {
        self.departments.iter().find(|d| d.is_reserve)
    }

    pub fn unemployed(&self) -> Option<&Position> {
        self.positions.iter().find(|p| p.is_unemployed)
    }
}

// ── MemoryStore ──────────────────────────────────────────────────────────────

/// Unit-of-work store over shared in-memory tables.
///
/// Each unit of work edits a private copy; `commit` swaps it in. Deletes
/// honour the same restrict-on-reference rules as the database.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub tables: Arc<Mutex<Tables>>,
    pub fail_department_delete: bool,
    pub fail_position_delete: bool,
}

impl MemoryStore {
    pub fn new(tables: Tables) -> Self {
        Self {
            tables: Arc::new(Mutex::new(tables)),
            ..Default::default()
        }
    }

    /// Make the final department-row delete fail with a constraint violation.
    pub fn failing_department_delete(mut self) -> Self {
        self.fail_department_delete = true;
        self
    }

    /// Make the final position-row delete fail with a constraint violation.
    pub fn failing_position_delete(mut self) -> Self {
        self.fail_position_delete = true;
        self
    }

    pub fn snapshot(&self) -> Tables {
        self.tables.lock().unwrap().clone()
    }
}

impl StaffStore for MemoryStore {
    type Work = MemoryWork;

    async fn begin(&self) -> Result<MemoryWork, StaffServiceError> {
        let staged = self.tables.lock().unwrap().clone();
        Ok(MemoryWork {
            committed: Arc::clone(&self.tables),
            staged: Mutex::new(staged),
            fail_department_delete: self.fail_department_delete,
            fail_position_delete: self.fail_position_delete,
        })
    }
}

pub struct MemoryWork {
    committed: Arc<Mutex<Tables>>,
    staged: Mutex<Tables>,
    fail_department_delete: bool,
    fail_position_delete: bool,
}

impl StaffUnitOfWork for MemoryWork {
    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, StaffServiceError> {
        Ok(self.staged.lock().unwrap().department(id).cloned())
    }

    async fn find_reserve_department(&self) -> Result<Option<Department>, StaffServiceError> {
        Ok(self.staged.lock().unwrap().reserve().cloned())
    }

    async fn insert_reserve_department(
        &self,
        department: &Department,
    ) -> Result<(), StaffServiceError> {
        let mut tables = self.staged.lock().unwrap();
        if tables.reserve().is_none() {
            tables.departments.push(department.clone());
        }
        Ok(())
    }

    async fn find_position(&self, id: PositionId) -> Result<Option<Position>, StaffServiceError> {
        Ok(self.staged.lock().unwrap().position(id).cloned())
    }

    async fn find_unemployed_position(&self) -> Result<Option<Position>, StaffServiceError> {
        Ok(self.staged.lock().unwrap().unemployed().cloned())
    }

    async fn insert_unemployed_position(
        &self,
        position: &Position,
    ) -> Result<(), StaffServiceError> {
        let mut tables = self.staged.lock().unwrap();
        if tables.unemployed().is_none() {
            tables.positions.push(position.clone());
        }
        Ok(())
    }

    async fn reassign_department_employees(
        &self,
        from: DepartmentId,
        department: DepartmentId,
        position: PositionId,
    ) -> Result<u64, StaffServiceError> {
        let mut tables = self.staged.lock().unwrap();
        let mut moved = 0;
        for employee in tables
            .employees
            .iter_mut()
            .filter(|e| e.department_id == Some(from))
        {
            employee.department_id = Some(department);
            employee.position_id = Some(position);
            moved += 1;
        }
        Ok(moved)
    }

    async fn reassign_department_equipment(
        &self,
        from: DepartmentId,
        department: DepartmentId,
    ) -> Result<u64, StaffServiceError> {
        let mut tables = self.staged.lock().unwrap();
        let mut moved = 0;
        for item in tables
            .equipment
            .iter_mut()
            .filter(|q| q.department_id == Some(from))
        {
            item.department_id = Some(department);
            moved += 1;
        }
        Ok(moved)
    }

    async fn unlink_department(
        &self,
        department: DepartmentId,
    ) -> Result<u64, StaffServiceError> {
        let mut tables = self.staged.lock().unwrap();
        let before = tables.links.len();
        tables.links.retain(|(d, _)| *d != department);
        Ok((before - tables.links.len()) as u64)
    }

    async fn delete_department(&self, id: DepartmentId) -> Result<(), StaffServiceError> {
        if self.fail_department_delete {
            return Err(StaffServiceError::ConstraintViolation);
        }
        let mut tables = self.staged.lock().unwrap();
        let referenced = tables.employees.iter().any(|e| e.department_id == Some(id))
            || tables.equipment.iter().any(|q| q.department_id == Some(id))
            || tables.links.iter().any(|(d, _)| *d == id);
        if referenced {
            return Err(StaffServiceError::ConstraintViolation);
        }
        let before = tables.departments.len();
        tables.departments.retain(|d| d.id != id);
        if tables.departments.len() == before {
            return Err(StaffServiceError::DepartmentNotFound);
        }
        Ok(())
    }

    async fn reassign_position_employees(
        &self,
        from: PositionId,
        position: PositionId,
    ) -> Result<u64, StaffServiceError> {
        let mut tables = self.staged.lock().unwrap();
        let mut moved = 0;
        for employee in tables
            .employees
            .iter_mut()
            .filter(|e| e.position_id == Some(from))
        {
            employee.position_id = Some(position);
            moved += 1;
        }
        Ok(moved)
    }

    async fn unlink_position(&self, position: PositionId) -> Result<u64, StaffServiceError> {
        let mut tables = self.staged.lock().unwrap();
        let before = tables.links.len();
        tables.links.retain(|(_, p)| *p != position);
        Ok((before - tables.links.len()) as u64)
    }

    async fn delete_position(&self, id: PositionId) -> Result<(), StaffServiceError> {
        if self.fail_position_delete {
            return Err(StaffServiceError::ConstraintViolation);
        }
        let mut tables = self.staged.lock().unwrap();
        let referenced = tables.employees.iter().any(|e| e.position_id == Some(id))
            || tables.links.iter().any(|(_, p)| *p == id);
        if referenced {
            return Err(StaffServiceError::ConstraintViolation);
        }
        let before = tables.positions.len();
        tables.positions.retain(|p| p.id != id);
        if tables.positions.len() == before {
            return Err(StaffServiceError::PositionNotFound);
        }
        Ok(())
    }

    async fn commit(self) -> Result<(), StaffServiceError> {
        let staged = self.staged.into_inner().unwrap();
        *self.committed.lock().unwrap() = staged;
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn employee(full_name: &str, department: &Department, position: &Position) -> Employee {
    Employee {
        id: EmployeeId::generate(),
        full_name: full_name.to_owned(),
        department_id: Some(department.id),
        position_id: Some(position.id),
        specialization_id: SpecializationId::generate(),
        created_at: Utc::now(),
    }
}

pub fn equipment(name: &str, department: &Department) -> Equipment {
    Equipment {
        id: EquipmentId::generate(),
        name: name.to_owned(),
        department_id: Some(department.id),
        category_id: EquipmentCategoryId::generate(),
        created_at: Utc::now(),
    }
}

/// "IT" with a "Developer" position linked to it, plus both sentinels.
pub struct Office {
    pub it: Department,
    pub developer: Position,
    pub reserve: Department,
    pub unemployed: Position,
}

impl Office {
    pub fn new() -> Self {
        Self {
            it: Department::new("IT".into()),
            developer: Position::new("Developer".into()),
            reserve: Department::reserve(),
            unemployed: Position::unemployed(),
        }
    }

    pub fn tables(&self) -> Tables {
        Tables {
            departments: vec![self.reserve.clone(), self.it.clone()],
            positions: vec![self.unemployed.clone(), self.developer.clone()],
            links: vec![(self.it.id, self.developer.id)],
            ..Default::default()
        }
    }
}
