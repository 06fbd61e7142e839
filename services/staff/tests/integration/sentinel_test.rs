use roster_staff::domain::repository::{StaffStore, StaffUnitOfWork};
use roster_staff::domain::types::Department;
use roster_staff::usecase::sentinel::{EnsureSentinelsUseCase, SentinelResolver};

use crate::helpers::{MemoryStore, Office, Tables};

#[tokio::test]
async fn should_resolve_same_reserve_within_one_unit_of_work() {
    let store = MemoryStore::default();
    let work = store.begin().await.unwrap();
    let resolver = SentinelResolver::new(&work);

    let first = resolver.get_or_create_reserve_department().await.unwrap();
    let second = resolver.get_or_create_reserve_department().await.unwrap();

    assert_eq!(first.id, second.id);
    work.commit().await.unwrap();
    let after = store.snapshot();
    assert_eq!(after.departments.iter().filter(|d| d.is_reserve).count(), 1);
}

#[tokio::test]
async fn should_resolve_same_reserve_across_units_of_work() {
    let store = MemoryStore::default();

    let work = store.begin().await.unwrap();
    let first = SentinelResolver::new(&work)
        .get_or_create_reserve_department()
        .await
        .unwrap();
    work.commit().await.unwrap();

    let work = store.begin().await.unwrap();
    let second = SentinelResolver::new(&work)
        .get_or_create_reserve_department()
        .await
        .unwrap();
    work.commit().await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(store.snapshot().departments.len(), 1);
}

#[tokio::test]
async fn should_reuse_existing_sentinels() {
    let office = Office::new();
    let uc = EnsureSentinelsUseCase {
        store: MemoryStore::new(office.tables()),
    };

    let sentinels = uc.execute().await.unwrap();

    assert_eq!(sentinels.reserve_department_id, office.reserve.id);
    assert_eq!(sentinels.unemployed_position_id, office.unemployed.id);
    assert_eq!(uc.store.snapshot(), office.tables());
}

#[tokio::test]
async fn should_create_missing_sentinels_once() {
    let it = Department::new("IT".into());
    let uc = EnsureSentinelsUseCase {
        store: MemoryStore::new(Tables {
            departments: vec![it],
            ..Default::default()
        }),
    };

    let first = uc.execute().await.unwrap();
    let second = uc.execute().await.unwrap();

    assert_eq!(first, second);
    let after = uc.store.snapshot();
    assert_eq!(after.departments.len(), 2);
    assert_eq!(after.positions.len(), 1);
    assert_eq!(
        after.reserve().map(|d| d.id),
        Some(first.reserve_department_id)
    );
}

#[tokio::test]
async fn should_discard_sentinel_created_in_uncommitted_work() {
    let store = MemoryStore::default();
    {
        let work = store.begin().await.unwrap();
        SentinelResolver::new(&work)
            .get_or_create_unemployed_position()
            .await
            .unwrap();
    }
    assert!(store.snapshot().unemployed().is_none());
}

#[tokio::test]
async fn should_find_nothing_without_creating() {
    let store = MemoryStore::default();
    let work = store.begin().await.unwrap();
    let resolver = SentinelResolver::new(&work);

    assert!(resolver.get_reserve_department().await.unwrap().is_none());
    assert!(resolver.get_unemployed_position().await.unwrap().is_none());

    work.commit().await.unwrap();
    assert_eq!(store.snapshot(), Tables::default());
}
