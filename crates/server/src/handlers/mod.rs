//! # API Route Handlers
//!
//! All Axum route handlers, split into logical sub-modules and re-exported
//! under a single `handlers::` path for the router.

pub mod assessment_handlers;
pub mod auth_handlers;
pub mod course_handlers;
pub mod general;
pub mod learning_path_handlers;
pub mod snippet_handlers;

pub use assessment_handlers::*;
pub use auth_handlers::*;
pub use course_handlers::*;
pub use general::*;
pub use learning_path_handlers::*;
pub use snippet_handlers::*;
