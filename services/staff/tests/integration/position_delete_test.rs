use roster_domain::id::PositionId;
use roster_staff::domain::types::{Department, Position};
use roster_staff::error::StaffServiceError;
use roster_staff::usecase::position::DeletePositionUseCase;

use crate::helpers::{MemoryStore, Office, Tables, employee};

#[tokio::test]
async fn should_create_unemployed_position_and_move_employees() {
    let it = Department::new("IT".into());
    let developer = Position::new("Developer".into());
    let john = employee("John", &it, &developer);
    let tables = Tables {
        departments: vec![it.clone()],
        positions: vec![developer.clone()],
        employees: vec![john.clone()],
        ..Default::default()
    };
    let uc = DeletePositionUseCase {
        store: MemoryStore::new(tables),
    };

    let cascade = uc.execute(developer.id).await.unwrap();

    let after = uc.store.snapshot();
    let unemployed = after.unemployed().expect("unemployed position created");
    assert_eq!(unemployed.title, "Unemployed");
    assert_eq!(cascade.unemployed_position_id, unemployed.id);
    assert_eq!(cascade.employees_reassigned, 1);
    assert_eq!(after.employee(john.id).position_id, Some(unemployed.id));
    assert_eq!(after.employee(john.id).department_id, Some(it.id));
    assert!(after.position(developer.id).is_none());
}

#[tokio::test]
async fn should_refuse_to_delete_unemployed_position() {
    let office = Office::new();
    let mut tables = office.tables();
    tables.employees = vec![employee("Idle", &office.reserve, &office.unemployed)];
    let uc = DeletePositionUseCase {
        store: MemoryStore::new(tables.clone()),
    };

    let result = uc.execute(office.unemployed.id).await;

    assert!(
        matches!(result, Err(StaffServiceError::UnemployedPositionProtected)),
        "expected UnemployedPositionProtected, got {result:?}"
    );
    assert_eq!(uc.store.snapshot(), tables);
}

#[tokio::test]
async fn should_drop_links_of_deleted_position() {
    let office = Office::new();
    let sales = Department::new("Sales".into());
    let mut tables = office.tables();
    tables.departments.push(sales.clone());
    tables.links.push((sales.id, office.developer.id));

    let uc = DeletePositionUseCase {
        store: MemoryStore::new(tables),
    };
    let cascade = uc.execute(office.developer.id).await.unwrap();

    assert_eq!(cascade.links_removed, 2);
    let after = uc.store.snapshot();
    assert!(after.links.is_empty());
    assert!(after.department(office.it.id).is_some());
    assert!(after.department(sales.id).is_some());
}

#[tokio::test]
async fn should_report_delete_failure_and_roll_back() {
    let office = Office::new();
    let mut tables = office.tables();
    tables.employees = vec![employee("John", &office.it, &office.developer)];
    let uc = DeletePositionUseCase {
        store: MemoryStore::new(tables.clone()).failing_position_delete(),
    };

    let err = uc.execute(office.developer.id).await.unwrap_err();

    assert!(
        matches!(err, StaffServiceError::PositionDeleteFailed),
        "expected PositionDeleteFailed, got {err:?}"
    );
    assert_eq!(err.to_string(), "error deleting position");
    assert_eq!(uc.store.snapshot(), tables);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_position() {
    let office = Office::new();
    let uc = DeletePositionUseCase {
        store: MemoryStore::new(office.tables()),
    };

    let result = uc.execute(PositionId::generate()).await;

    assert!(matches!(result, Err(StaffServiceError::PositionNotFound)));
}

#[tokio::test]
async fn should_delete_unmarked_position_sharing_the_sentinel_title() {
    let office = Office::new();
    let lookalike = Position::new("Unemployed".into());
    let mut tables = office.tables();
    tables.positions.push(lookalike.clone());

    let uc = DeletePositionUseCase {
        store: MemoryStore::new(tables),
    };
    uc.execute(lookalike.id).await.unwrap();

    let after = uc.store.snapshot();
    assert!(after.position(lookalike.id).is_none());
    assert_eq!(after.unemployed(), Some(&office.unemployed));
}
