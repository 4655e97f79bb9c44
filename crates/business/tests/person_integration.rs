//! Person registration, patch and lookup flows.

mod common;

use business::ServiceError;
use chrono::Utc;
use common::{next_request, person_dto, test_scope};
use domain::models::{PersonDto, PersonUpdateDto, StatusDto};
use persistence::entities::PersonEntity;
use persistence::{HasCreationTimestamp, Store};

#[tokio::test]
async fn test_register_duplicate_patch_and_deactivate() {
    let (store, scope) = test_scope();
    let before = Utc::now();

    let ana = scope
        .persons
        .add_from_create_dto(person_dto("Ana", 123))
        .await
        .unwrap();
    assert_eq!(ana.id, 1);
    let stored: PersonEntity = store.find_by_id(1).await.unwrap().unwrap();
    assert!(stored.created_at() >= before);

    let writes = store.write_count();
    let duplicate = scope
        .persons
        .add_from_create_dto(person_dto("Eva", 123))
        .await;
    assert!(matches!(duplicate, Err(ServiceError::Validation(_))));
    assert_eq!(store.write_count(), writes);
    assert_eq!(store.row_count::<PersonEntity>(), 1);

    let patched = scope
        .persons
        .patch_person(PersonUpdateDto {
            id: 1,
            first_name: Some("Ana2".to_string()),
            first_last_name: Some("Gómez".to_string()),
            number_identification: 123,
            ..Default::default()
        })
        .await;
    assert!(patched);
    let current = scope.persons.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(current.first_name, "Ana2");

    assert!(!scope.persons.set_active(StatusDto::new(1, false)).await);
}

#[tokio::test]
async fn test_soft_deleted_person_frees_document_and_cannot_be_patched() {
    let (store, scope) = test_scope();
    let mut retired = PersonEntity::from(person_dto("Luis", 555));
    retired.delete_date = Some(Utc::now());
    let retired = store.seed(retired).unwrap();

    let patched = scope
        .persons
        .patch_person(PersonUpdateDto {
            id: retired.id,
            first_name: Some("Luis2".to_string()),
            number_identification: 555,
            ..Default::default()
        })
        .await;
    assert!(!patched);
    assert_eq!(store.commit_count(), 0);

    let reused = scope
        .persons
        .add_from_create_dto(person_dto("Marta", 555))
        .await
        .unwrap();
    assert_ne!(reused.id, retired.id);
}

#[tokio::test]
async fn test_full_update_does_not_revive_soft_deleted_person() {
    let (store, scope) = test_scope();
    let mut retired = PersonEntity::from(person_dto("Luis", 555));
    retired.delete_date = Some(Utc::now());
    let retired = store.seed(retired).unwrap();

    let holder = scope
        .persons
        .add_from_create_dto(person_dto("Marta", 555))
        .await
        .unwrap();

    let later = next_request(&store);
    later
        .persons
        .update(PersonDto::from(retired.clone()))
        .await
        .unwrap();

    let stored: PersonEntity = store.find_by_id(retired.id).await.unwrap().unwrap();
    assert_eq!(stored.delete_date, retired.delete_date);

    let live: Vec<PersonEntity> = store
        .find_all::<PersonEntity>()
        .await
        .unwrap()
        .into_iter()
        .filter(|p| p.number_identification == 555 && p.delete_date.is_none())
        .collect();
    assert_eq!(live.len(), 1);

    let found = later.persons.repository().get_by_document(555).await.unwrap();
    assert_eq!(found.map(|p| p.id), Some(holder.id));
}

#[tokio::test]
async fn test_creation_date_survives_full_update_in_later_request() {
    let (store, scope) = test_scope();
    let created = scope
        .persons
        .add_from_create_dto(person_dto("Ana", 321))
        .await
        .unwrap();
    let stamped = store
        .find_by_id::<PersonEntity>(created.id)
        .await
        .unwrap()
        .unwrap()
        .created_at();

    let later = next_request(&store);
    later
        .persons
        .update(PersonDto {
            second_name: Some("Lucía".to_string()),
            ..created.clone()
        })
        .await
        .unwrap();

    let stored: PersonEntity = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.second_name.as_deref(), Some("Lucía"));
    assert_eq!(stored.created_at(), stamped);
}

#[tokio::test]
async fn test_generated_people_get_sequential_keys() {
    let (_, scope) = test_scope();

    for number in 1..=5_i64 {
        let created = scope
            .persons
            .add_from_create_dto(person_dto("Ana", 1000 + number))
            .await
            .unwrap();
        assert_eq!(created.id as i64, number);
    }

    let all = scope.persons.get_all().await.unwrap();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
}
