use roster_domain::id::DepartmentId;
use roster_staff::domain::types::{Department, Position};
use roster_staff::error::StaffServiceError;
use roster_staff::usecase::department::DeleteDepartmentUseCase;

use crate::helpers::{MemoryStore, Office, Tables, employee, equipment};

#[tokio::test]
async fn should_move_employees_to_reserve_as_unemployed() {
    let office = Office::new();
    let john = employee("John", &office.it, &office.developer);
    let jane = employee("Jane", &office.it, &office.developer);
    let mut tables = office.tables();
    tables.employees = vec![john.clone(), jane.clone()];

    let uc = DeleteDepartmentUseCase {
        store: MemoryStore::new(tables),
    };
    let cascade = uc.execute(office.it.id).await.unwrap();

    assert_eq!(cascade.employees_reassigned, 2);
    let after = uc.store.snapshot();
    for id in [john.id, jane.id] {
        let moved = after.employee(id);
        assert_eq!(moved.department_id, Some(office.reserve.id));
        assert_eq!(moved.position_id, Some(office.unemployed.id));
    }
    assert!(after.department(office.it.id).is_none());
}

#[tokio::test]
async fn should_move_equipment_to_reserve() {
    let office = Office::new();
    let laptop = equipment("Laptop", &office.it);
    let monitor = equipment("Monitor", &office.it);
    let mut tables = office.tables();
    tables.equipment = vec![laptop.clone(), monitor.clone()];

    let uc = DeleteDepartmentUseCase {
        store: MemoryStore::new(tables),
    };
    let cascade = uc.execute(office.it.id).await.unwrap();

    assert_eq!(cascade.equipment_reassigned, 2);
    let after = uc.store.snapshot();
    assert_eq!(
        after.equipment_item(laptop.id).department_id,
        Some(office.reserve.id)
    );
    assert_eq!(
        after.equipment_item(monitor.id).department_id,
        Some(office.reserve.id)
    );
}

#[tokio::test]
async fn should_drop_links_but_keep_positions() {
    let office = Office::new();
    let manager = Position::new("Manager".into());
    let mut tables = office.tables();
    tables.positions.push(manager.clone());
    tables.links.push((office.it.id, manager.id));

    let uc = DeleteDepartmentUseCase {
        store: MemoryStore::new(tables),
    };
    let cascade = uc.execute(office.it.id).await.unwrap();

    assert_eq!(cascade.links_removed, 2);
    let after = uc.store.snapshot();
    assert!(after.links.iter().all(|(d, _)| *d != office.it.id));
    assert!(after.position(office.developer.id).is_some());
    assert!(after.position(manager.id).is_some());
}

#[tokio::test]
async fn should_refuse_to_delete_reserve_department() {
    let office = Office::new();
    let mut tables = office.tables();
    tables.employees = vec![employee("Idle", &office.reserve, &office.unemployed)];
    let uc = DeleteDepartmentUseCase {
        store: MemoryStore::new(tables.clone()),
    };

    let err = uc.execute(office.reserve.id).await.unwrap_err();

    assert!(
        matches!(err, StaffServiceError::ReserveDepartmentProtected),
        "expected ReserveDepartmentProtected, got {err:?}"
    );
    assert!(err.to_string().contains("Reserve"));
    assert_eq!(uc.store.snapshot(), tables);
}

#[tokio::test]
async fn should_leave_everything_untouched_when_final_delete_fails() {
    let office = Office::new();
    let mut tables = office.tables();
    tables.employees = vec![employee("John", &office.it, &office.developer)];
    tables.equipment = vec![equipment("Laptop", &office.it)];
    let uc = DeleteDepartmentUseCase {
        store: MemoryStore::new(tables.clone()).failing_department_delete(),
    };

    let result = uc.execute(office.it.id).await;

    assert!(
        matches!(result, Err(StaffServiceError::DepartmentHasLinkedRecords)),
        "expected DepartmentHasLinkedRecords, got {result:?}"
    );
    assert_eq!(uc.store.snapshot(), tables);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_department() {
    let office = Office::new();
    let tables = office.tables();
    let uc = DeleteDepartmentUseCase {
        store: MemoryStore::new(tables.clone()),
    };

    let result = uc.execute(DepartmentId::generate()).await;

    assert!(matches!(result, Err(StaffServiceError::DepartmentNotFound)));
    assert_eq!(uc.store.snapshot(), tables);
}

#[tokio::test]
async fn should_create_sentinels_on_first_delete() {
    let it = Department::new("IT".into());
    let developer = Position::new("Developer".into());
    let john = employee("John", &it, &developer);
    let tables = Tables {
        departments: vec![it.clone()],
        positions: vec![developer.clone()],
        employees: vec![john.clone()],
        ..Default::default()
    };
    let uc = DeleteDepartmentUseCase {
        store: MemoryStore::new(tables),
    };

    let cascade = uc.execute(it.id).await.unwrap();

    let after = uc.store.snapshot();
    let reserve = after.reserve().expect("reserve department created");
    let unemployed = after.unemployed().expect("unemployed position created");
    assert_eq!(reserve.name, "Reserve");
    assert_eq!(unemployed.title, "Unemployed");
    assert_eq!(cascade.reserve_department_id, reserve.id);
    assert_eq!(after.employee(john.id).department_id, Some(reserve.id));
    assert_eq!(after.employee(john.id).position_id, Some(unemployed.id));
    assert_eq!(after.departments.len(), 1);
}

#[tokio::test]
async fn should_not_touch_other_departments() {
    let office = Office::new();
    let sales = Department::new("Sales".into());
    let ann = employee("Ann", &sales, &office.developer);
    let mut tables = office.tables();
    tables.departments.push(sales.clone());
    tables.employees = vec![employee("John", &office.it, &office.developer), ann.clone()];
    tables.links.push((sales.id, office.developer.id));

    let uc = DeleteDepartmentUseCase {
        store: MemoryStore::new(tables),
    };
    uc.execute(office.it.id).await.unwrap();

    let after = uc.store.snapshot();
    assert_eq!(after.employee(ann.id), &ann);
    assert!(after.links.contains(&(sales.id, office.developer.id)));
}
