//! # Identifier Generation
//!
//! Three id styles coexist in the stored data, one per collection family, and
//! each collection keeps its historical format:
//!
//! - users: epoch milliseconds as a decimal string,
//! - courses: a `course_` prefixed composite with a random base-36 suffix,
//! - everything else: a UUID-shaped random hex string.
//!
//! There is no collision retry anywhere; at this application's request rate
//! the probability is negligible and collisions are an accepted risk.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

/// A user id: the current epoch milliseconds as a string. Not collision-safe
/// for two registrations within the same millisecond; registration is rare
/// enough that this matches the stored data's contract.
pub fn timestamp_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// A course id: `course_<epochMillis>_<9 random base-36 chars>`.
pub fn course_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..9)
        .map(|_| {
            let digit = rng.random_range(0..36u32);
            char::from_digit(digit, 36).unwrap_or('0')
        })
        .collect();
    format!("course_{}_{suffix}", Utc::now().timestamp_millis())
}

/// A UUID-shaped id for learning paths, assessments, and snippets.
pub fn record_id() -> String {
    Uuid::new_v4().to_string()
}
