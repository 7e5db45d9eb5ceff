//! In-memory integration tests for person storage.

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskdeck::person::{
    adapters::memory::InMemoryPersonRepository,
    domain::{EmailAddress, Person, PersonId, PersonName, PersonPatch, PersonRole},
    ports::{PersonRepository, PersonRepositoryError},
};

#[fixture]
fn repository() -> InMemoryPersonRepository {
    InMemoryPersonRepository::new()
}

fn sample_person(name: &str, email: &str) -> Person {
    Person::new(
        PersonName::new(name).expect("valid name"),
        EmailAddress::new(email).expect("valid email"),
        PersonRole::User,
        &DefaultClock,
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_people_are_retrievable_by_id(repository: InMemoryPersonRepository) {
    let person = sample_person("Alice", "alice@example.com");
    repository.store(&person).await.expect("store should succeed");

    let fetched = repository
        .find_by_id(person.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(person));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_for_unknown_person(repository: InMemoryPersonRepository) {
    let fetched = repository
        .find_by_id(&PersonId::generate())
        .await
        .expect("lookup should succeed");

    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_preserves_insertion_order(repository: InMemoryPersonRepository) {
    let first = sample_person("Alice", "alice@example.com");
    let second = sample_person("Bob", "bob@example.com");
    repository.store(&first).await.expect("store should succeed");
    repository
        .store(&second)
        .await
        .expect("store should succeed");

    let listed = repository.find_all().await.expect("listing should succeed");

    let ids: Vec<_> = listed.iter().map(|person| person.id().clone()).collect();
    assert_eq!(ids, vec![first.id().clone(), second.id().clone()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_applies_partial_fields(repository: InMemoryPersonRepository) {
    let person = sample_person("Alice", "alice@example.com");
    repository.store(&person).await.expect("store should succeed");

    let updated = repository
        .update(
            person.id(),
            &PersonPatch {
                role: Some(PersonRole::Admin),
                ..PersonPatch::default()
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.role(), PersonRole::Admin);
    assert_eq!(updated.name(), person.name());
    assert_eq!(updated.email(), person.email());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_person_is_not_found(repository: InMemoryPersonRepository) {
    let result = repository
        .update(&PersonId::generate(), &PersonPatch::default())
        .await;

    assert!(matches!(result, Err(PersonRepositoryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_whether_a_record_was_removed(repository: InMemoryPersonRepository) {
    let person = sample_person("Alice", "alice@example.com");
    repository.store(&person).await.expect("store should succeed");

    let removed = repository
        .delete(person.id())
        .await
        .expect("delete should succeed");
    assert!(removed);

    let removed_again = repository
        .delete(person.id())
        .await
        .expect("repeated delete should succeed");
    assert!(!removed_again);

    let listed = repository.find_all().await.expect("listing should succeed");
    assert!(listed.is_empty());
}
