//! Record store behavior: file lifecycle, the lenient load/save contract,
//! and serialized mutations through `Collection`.

use apex::store::{Collection, JsonStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Item {
    id: String,
    value: u32,
}

fn item(id: &str, value: u32) -> Item {
    Item {
        id: id.to_string(),
        value,
    }
}

#[test]
fn load_creates_missing_file_with_default() {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(dir.path());

    let loaded: Vec<Item> = store.load("widgets", vec![item("seed", 1)]);
    assert_eq!(loaded, vec![item("seed", 1)]);

    let on_disk = fs::read_to_string(dir.path().join("widgets.json")).unwrap();
    assert!(on_disk.contains("seed"));
}

#[test]
fn load_is_idempotent() {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(dir.path());
    store.save("widgets", &[item("a", 1), item("b", 2)]);

    let first: Vec<Item> = store.load("widgets", Vec::new());
    let second: Vec<Item> = store.load("widgets", Vec::new());
    assert_eq!(first, second);
}

#[test]
fn save_then_load_roundtrips() {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(dir.path());

    let items = vec![item("a", 1), item("b", 2), item("c", 3)];
    assert!(store.save("widgets", &items));
    let loaded: Vec<Item> = store.load("widgets", Vec::new());
    assert_eq!(loaded, items);
}

#[test]
fn save_creates_parent_directory() {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("nested").join("data"));
    assert!(store.save("widgets", &[item("a", 1)]));
    let loaded: Vec<Item> = store.load("widgets", Vec::new());
    assert_eq!(loaded, vec![item("a", 1)]);
}

#[test]
fn corrupt_file_yields_default() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("widgets.json"), "this is not json {").unwrap();
    let store = JsonStore::new(dir.path());

    let loaded: Vec<Item> = store.load("widgets", Vec::new());
    assert!(loaded.is_empty());
}

#[test]
fn files_are_pretty_printed() {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(dir.path());
    store.save("widgets", &[item("a", 1)]);

    let on_disk = fs::read_to_string(dir.path().join("widgets.json")).unwrap();
    assert!(on_disk.contains("\n  {"), "expected 2-space indentation");
}

#[tokio::test]
async fn concurrent_mutations_both_survive() {
    // The historical flat-file store lost the first of two overlapping
    // read-modify-write cycles. The collection lock replaces that behavior:
    // both mutations must be present afterwards, in memory and on disk.
    let dir = tempdir().unwrap();
    let store = Arc::new(JsonStore::new(dir.path()));
    let collection: Arc<Collection<Item>> = Arc::new(Collection::open(store, "widgets"));

    let a = {
        let collection = collection.clone();
        tokio::spawn(async move {
            collection
                .mutate(|items| items.push(item("from-a", 1)))
                .await;
        })
    };
    let b = {
        let collection = collection.clone();
        tokio::spawn(async move {
            collection
                .mutate(|items| items.push(item("from-b", 2)))
                .await;
        })
    };
    a.await.unwrap();
    b.await.unwrap();

    let ids = collection
        .read(|items| items.iter().map(|i| i.id.clone()).collect::<Vec<_>>())
        .await;
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&"from-a".to_string()));
    assert!(ids.contains(&"from-b".to_string()));

    let on_disk = fs::read_to_string(dir.path().join("widgets.json")).unwrap();
    assert!(on_disk.contains("from-a"));
    assert!(on_disk.contains("from-b"));
}

#[tokio::test]
async fn mutations_persist_across_reopen() {
    let dir = tempdir().unwrap();
    {
        let store = Arc::new(JsonStore::new(dir.path()));
        let collection: Collection<Item> = Collection::open(store, "widgets");
        collection.mutate(|items| items.push(item("kept", 7))).await;
    }

    let store = Arc::new(JsonStore::new(dir.path()));
    let collection: Collection<Item> = Collection::open(store, "widgets");
    let loaded = collection.read(|items| items.to_vec()).await;
    assert_eq!(loaded, vec![item("kept", 7)]);
}
