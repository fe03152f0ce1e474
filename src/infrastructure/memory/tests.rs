use super::memory_repository::*;
use crate::domain::{ItemChanges, ItemRepository, NewItem, StoreError};
use std::sync::Arc;

fn new_item(name: &str) -> NewItem {
    // ---
    NewItem {
        name: name.to_string(),
        description: None,
    }
}

#[test]
fn test_create_assigns_increasing_ids() {
    // ---
    let repo = InMemoryRepository::new();

    let first = repo.create(new_item("Bilbo")).expect("create failed");
    let second = repo.create(new_item("Frodo")).expect("create failed");
    let third = repo.create(new_item("Samwise")).expect("create failed");

    assert_eq!(first.id, 1);
    assert!(second.id > first.id);
    assert!(third.id > second.id);
    assert_eq!(first.description, "");
}

#[test]
fn test_create_then_get_returns_same_record() {
    // ---
    let repo = InMemoryRepository::new();

    let created = repo
        .create(NewItem {
            name: "Thorin Oakenshield".to_string(),
            description: Some("King under the Mountain".to_string()),
        })
        .expect("create failed");

    let found = repo.get(created.id).expect("item not found");
    assert_eq!(found, created);
    assert_eq!(found.description, "King under the Mountain");
}

#[test]
fn test_create_rejects_empty_name() {
    // ---
    let repo = InMemoryRepository::new();

    let err = repo.create(new_item("")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidInput(_)));
    assert!(repo.list().is_empty());
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    // ---
    let repo = InMemoryRepository::new();

    let first = repo.create(new_item("one")).unwrap();
    repo.delete(first.id).unwrap();
    let second = repo.create(new_item("two")).unwrap();

    assert!(second.id > first.id);
}

#[test]
fn test_partial_update_keeps_untouched_fields() {
    // ---
    let repo = InMemoryRepository::new();
    let created = repo.create(new_item("Gandalf")).unwrap();

    let updated = repo
        .update(
            created.id,
            ItemChanges {
                name: None,
                description: Some("the Grey".to_string()),
            },
        )
        .expect("update failed");

    assert_eq!(updated.name, "Gandalf");
    assert_eq!(updated.description, "the Grey");
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(repo.get(created.id).unwrap(), updated);
}

#[test]
fn test_update_missing_id_leaves_store_untouched() {
    // ---
    let repo = InMemoryRepository::new();
    repo.create(new_item("Legolas")).unwrap();

    let err = repo
        .update(
            42,
            ItemChanges {
                name: Some("Gimli".to_string()),
                description: None,
            },
        )
        .unwrap_err();

    assert_eq!(err, StoreError::NotFound(42));
    assert_eq!(repo.list().len(), 1);
}

#[test]
fn test_update_rejects_empty_name_without_partial_write() {
    // ---
    let repo = InMemoryRepository::new();
    let created = repo.create(new_item("Aragorn")).unwrap();

    let err = repo
        .update(
            created.id,
            ItemChanges {
                name: Some(String::new()),
                description: Some("Strider".to_string()),
            },
        )
        .unwrap_err();

    assert!(matches!(err, StoreError::InvalidInput(_)));
    assert_eq!(repo.get(created.id).unwrap(), created);
}

#[test]
fn test_delete_twice_reports_not_found() {
    // ---
    let repo = InMemoryRepository::new();
    let created = repo.create(new_item("Boromir")).unwrap();

    assert!(repo.delete(created.id).is_ok());
    assert_eq!(repo.get(created.id), Err(StoreError::NotFound(created.id)));
    assert_eq!(repo.delete(created.id), Err(StoreError::NotFound(created.id)));
}

#[test]
fn test_list_matches_retrievable_items() {
    // ---
    let repo = InMemoryRepository::new();
    for name in ["a", "b", "c", "d"] {
        repo.create(new_item(name)).unwrap();
    }
    repo.delete(2).unwrap();

    let items = repo.list();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|item| repo.get(item.id).is_ok()));
    assert!(items.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn test_concurrent_creates_yield_unique_ids() {
    // ---
    let repo = Arc::new(InMemoryRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let repo = Arc::clone(&repo);
            std::thread::spawn(move || {
                (0..50)
                    .map(|i| repo.create(new_item(&format!("{t}-{i}"))).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("thread panicked"))
        .collect();
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 400);
    assert_eq!(repo.list().len(), 400);
}
