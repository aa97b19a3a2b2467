//! # Startup Data Migration
//!
//! A one-time normalization pass over the raw collection JSON, run when the
//! repositories are opened. Handles the schema drift accumulated by older
//! deployments: missing timestamps, the legacy `favorite` flag, and progress
//! values stored as strings.

use serde_json::Value;

fn now_iso() -> Value {
    Value::String(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}

/// Ensures every user record carries a `createdAt`. Returns `true` when any
/// record changed.
pub fn users(records: &mut Vec<Value>) -> bool {
    let mut modified = false;
    for record in records.iter_mut() {
        let Some(user) = record.as_object_mut() else {
            continue;
        };
        if !user.contains_key("createdAt") {
            user.insert("createdAt".to_string(), now_iso());
            modified = true;
        }
    }
    modified
}

/// Normalizes user-course records: converts the legacy `favorite` flag to
/// `liked`, coerces non-numeric `progress` to a number, and fills a missing
/// `updatedAt` from `createdAt`. Returns `true` when any record changed.
pub fn user_courses(records: &mut Vec<Value>) -> bool {
    let mut modified = false;
    for record in records.iter_mut() {
        let Some(course) = record.as_object_mut() else {
            continue;
        };

        if !course.contains_key("liked") {
            if let Some(favorite) = course.remove("favorite") {
                course.insert("liked".to_string(), favorite);
                modified = true;
            }
        }

        let progress_ok = course.get("progress").map(Value::is_u64).unwrap_or(false);
        if !progress_ok {
            let coerced = course
                .get("progress")
                .and_then(|p| match p {
                    Value::Number(n) => n.as_f64().map(|f| f.max(0.0) as u64),
                    Value::String(s) => s.trim().parse::<u64>().ok(),
                    _ => None,
                })
                .unwrap_or(0);
            course.insert("progress".to_string(), Value::from(coerced));
            modified = true;
        }

        if !course.contains_key("updatedAt") {
            let updated = course.get("createdAt").cloned().unwrap_or_else(now_iso);
            course.insert("updatedAt".to_string(), updated);
            modified = true;
        }
    }
    modified
}
