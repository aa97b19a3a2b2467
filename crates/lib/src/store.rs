//! # JSON Record Store
//!
//! Persistence for the flat-file collections: one JSON array-of-objects file
//! per collection under the data directory. [`JsonStore`] is the raw
//! load/save layer; [`Collection`] wraps one collection with an in-memory
//! copy behind a lock so every read and mutation goes through a single owner.
//!
//! A mutation applies a closure to the full in-memory array and then rewrites
//! the whole file. That load-array, scan, mutate, write-everything-back cycle
//! is the store's one idiom; the lock serializes it per collection, so two
//! concurrent mutations of the same collection cannot drop each other's
//! writes. Persistence failures are logged and otherwise invisible to
//! callers: the in-memory state stays authoritative for the process lifetime.

use crate::migrate;
use crate::types::{
    CodeSnippet, CourseDocument, LearningPath, SharedSnippet, SkillAssessment, User, UserCourse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Raw load/save of named JSON collections under one directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Loads a collection. A missing file is created containing the
    /// serialized `default`; an unreadable or unparsable file yields the
    /// `default` after logging. Never fails to the caller.
    pub fn load<T>(&self, name: &str, default: Vec<T>) -> Vec<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let path = self.file_path(name);
        if !path.exists() {
            info!(file = %path.display(), "collection file not found, creating");
            self.save(name, &default);
            return default;
        }
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) => {
                error!(file = %path.display(), "failed to read collection file: {e}");
                return default;
            }
        };
        match serde_json::from_str(&data) {
            Ok(items) => items,
            Err(e) => {
                error!(file = %path.display(), "failed to parse collection file: {e}");
                default
            }
        }
    }

    /// Loads a collection without deserializing into record types. Used by
    /// the startup migration pass, which has to see legacy field names.
    pub fn load_raw(&self, name: &str) -> Vec<Value> {
        self.load(name, Vec::new())
    }

    /// Overwrites the whole collection file with 2-space-indented JSON,
    /// creating the parent directory if needed. Returns `false` (after
    /// logging) on any error instead of propagating it.
    pub fn save<T: Serialize>(&self, name: &str, items: &[T]) -> bool {
        let path = self.file_path(name);
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!(dir = %parent.display(), "failed to create data directory: {e}");
                return false;
            }
        }
        let json = match serde_json::to_string_pretty(items) {
            Ok(json) => json,
            Err(e) => {
                error!(file = %path.display(), "failed to serialize collection: {e}");
                return false;
            }
        };
        match fs::write(&path, json) {
            Ok(()) => true,
            Err(e) => {
                error!(file = %path.display(), "failed to write collection file: {e}");
                false
            }
        }
    }
}

/// One collection with its in-memory copy. All access goes through
/// [`Collection::read`] and [`Collection::mutate`]; the latter rewrites the
/// backing file after applying the closure.
pub struct Collection<T> {
    name: String,
    store: Arc<JsonStore>,
    items: Mutex<Vec<T>>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn open(store: Arc<JsonStore>, name: &str) -> Self {
        let items = store.load(name, Vec::new());
        Self {
            name: name.to_string(),
            store,
            items: Mutex::new(items),
        }
    }

    /// Opens a collection after running a migration over its raw JSON. The
    /// migration returns `true` when it changed anything, in which case the
    /// normalized data is written back once before deserialization.
    pub fn open_migrated(
        store: Arc<JsonStore>,
        name: &str,
        migration: fn(&mut Vec<Value>) -> bool,
    ) -> Self {
        let mut raw = store.load_raw(name);
        if migration(&mut raw) {
            info!(collection = name, "startup migration updated records");
            store.save(name, &raw);
        }
        let items = match serde_json::from_value(Value::Array(raw)) {
            Ok(items) => items,
            Err(e) => {
                error!(collection = name, "failed to deserialize records: {e}");
                Vec::new()
            }
        };
        Self {
            name: name.to_string(),
            store,
            items: Mutex::new(items),
        }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let items = self.items.lock().await;
        f(&items)
    }

    /// Applies `f` to the full collection and rewrites the backing file.
    /// A failed write is logged; the in-memory mutation stands regardless.
    pub async fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut items = self.items.lock().await;
        let result = f(&mut items);
        if !self.store.save(&self.name, &items) {
            warn!(collection = %self.name, "mutation not persisted, continuing with in-memory state");
        }
        result
    }
}

/// Every collection of the platform, opened once at startup. The one-time
/// migration pass runs here for the collections whose schema drifted.
pub struct Repositories {
    pub users: Collection<User>,
    pub courses: Collection<CourseDocument>,
    pub user_courses: Collection<UserCourse>,
    pub learning_paths: Collection<LearningPath>,
    pub skill_assessments: Collection<SkillAssessment>,
    pub code_snippets: Collection<CodeSnippet>,
    pub shared_snippets: Collection<SharedSnippet>,
}

impl Repositories {
    pub fn open(store: JsonStore) -> Self {
        let store = Arc::new(store);
        Self {
            users: Collection::open_migrated(store.clone(), "users", migrate::users),
            courses: Collection::open(store.clone(), "courses"),
            user_courses: Collection::open_migrated(
                store.clone(),
                "userCourses",
                migrate::user_courses,
            ),
            learning_paths: Collection::open(store.clone(), "learningPaths"),
            skill_assessments: Collection::open(store.clone(), "skillAssessments"),
            code_snippets: Collection::open(store.clone(), "codeSnippets"),
            shared_snippets: Collection::open(store, "sharedCode"),
        }
    }
}
