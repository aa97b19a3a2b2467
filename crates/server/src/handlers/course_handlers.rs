//! # Course Route Handlers
//!
//! The predefined catalog, AI course generation, and the per-user course
//! library with progress tracking.

use crate::{auth::middleware::AuthenticatedUser, errors::AppError, state::AppState};
use apex::{
    ids,
    types::{CourseBody, UserCourse},
};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::info;

/// Study-time credit granted when a course is completed, in minutes.
const COURSE_STUDY_MINUTES: u32 = 25;

/// Per-module estimate used for dashboard study-time totals, in minutes.
const MODULE_STUDY_MINUTES: usize = 15;

// --- Predefined catalog ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCourse {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: &'static str,
    pub duration: &'static str,
    pub topics: Vec<&'static str>,
    pub color: &'static str,
}

fn predefined_courses() -> Vec<CatalogCourse> {
    vec![
        CatalogCourse {
            id: 1,
            title: "Data Structures & Algorithms",
            description: "Master fundamental DSA concepts",
            difficulty: "Intermediate",
            duration: "4 weeks",
            topics: vec!["Arrays", "Linked Lists", "Trees", "Graphs", "Sorting", "Searching"],
            color: "bg-gradient-to-r from-blue-500 to-purple-600",
        },
        CatalogCourse {
            id: 2,
            title: "Machine Learning Fundamentals",
            description: "Introduction to ML algorithms and concepts",
            difficulty: "Beginner",
            duration: "6 weeks",
            topics: vec![
                "Linear Regression",
                "Decision Trees",
                "Neural Networks",
                "Feature Engineering",
            ],
            color: "bg-gradient-to-r from-green-500 to-teal-600",
        },
        CatalogCourse {
            id: 3,
            title: "Web Development with React",
            description: "Build modern web applications",
            difficulty: "Intermediate",
            duration: "5 weeks",
            topics: vec![
                "Components",
                "State Management",
                "Hooks",
                "Router",
                "API Integration",
            ],
            color: "bg-gradient-to-r from-orange-500 to-red-600",
        },
        CatalogCourse {
            id: 4,
            title: "Database Design & SQL",
            description: "Master database concepts and SQL",
            difficulty: "Beginner",
            duration: "3 weeks",
            topics: vec!["ER Diagrams", "Normalization", "Queries", "Joins", "Optimization"],
            color: "bg-gradient-to-r from-indigo-500 to-blue-600",
        },
        CatalogCourse {
            id: 5,
            title: "System Design",
            description: "Design scalable distributed systems",
            difficulty: "Advanced",
            duration: "8 weeks",
            topics: vec![
                "Load Balancing",
                "Caching",
                "Microservices",
                "Databases",
                "Scalability",
            ],
            color: "bg-gradient-to-r from-purple-500 to-pink-600",
        },
        CatalogCourse {
            id: 6,
            title: "DevOps & Cloud Computing",
            description: "Learn deployment and cloud services",
            difficulty: "Intermediate",
            duration: "6 weeks",
            topics: vec!["Docker", "Kubernetes", "AWS", "CI/CD", "Monitoring"],
            color: "bg-gradient-to-r from-cyan-500 to-blue-600",
        },
    ]
}

/// `GET /api/courses`
pub async fn catalog_handler() -> Json<Vec<CatalogCourse>> {
    Json(predefined_courses())
}

/// `GET /api/courses/{id}`
pub async fn catalog_course_handler(
    Path(id): Path<String>,
) -> Result<Json<CatalogCourse>, AppError> {
    id.parse::<u32>()
        .ok()
        .and_then(|id| predefined_courses().into_iter().find(|c| c.id == id))
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
}

// --- Course generation ---

#[derive(Deserialize)]
pub struct GenerateCourseRequest {
    pub topic: Option<String>,
}

/// `POST /api/generate-course`
///
/// Runs the topic classifier first; a rejected topic gets a soft `200`
/// response with `nonEducational: true` rather than an error status. The
/// resolver then always produces a document (AI or fallback), which is
/// persisted both to the Courses history and as a new UserCourse.
pub async fn generate_course_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<GenerateCourseRequest>,
) -> Result<Json<Value>, AppError> {
    let topic = payload
        .topic
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Topic is required".to_string()))?;

    info!(email = %claims.email, topic, "course generation requested");

    if !state.resolver.is_educational(&topic) {
        return Ok(Json(json!({
            "nonEducational": true,
            "message": "This topic doesn't look like an engineering subject. Try something like \"data structures\" or \"circuit analysis\".",
        })));
    }

    let mut course = state.resolver.resolve(&topic).await;
    let course_id = ids::course_id();
    course.id = Some(course_id.clone());

    let now = Utc::now();
    let user_course = UserCourse {
        id: course_id,
        user_id: claims.user_id.clone(),
        topic: topic.clone(),
        course: course.clone(),
        created_at: now,
        updated_at: now,
        last_accessed_at: None,
        progress: 0,
        completed: false,
        liked: false,
    };

    state
        .repos
        .courses
        .mutate(|courses| courses.push(course.clone()))
        .await;
    state
        .repos
        .user_courses
        .mutate(|courses| courses.push(user_course))
        .await;

    info!(email = %claims.email, topic, "course generated and saved");
    Ok(Json(serde_json::to_value(course).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("course serialization failed: {e}"))
    })?))
}

// --- User course library ---

#[derive(Serialize)]
pub struct UserCoursesResponse {
    pub courses: Vec<UserCourse>,
    pub total: usize,
    pub completed: usize,
}

/// `GET /api/user/courses`
pub async fn user_courses_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Json<UserCoursesResponse> {
    let mut courses = state
        .repos
        .user_courses
        .read(|courses| {
            courses
                .iter()
                .filter(|c| c.user_id == claims.user_id)
                .cloned()
                .collect::<Vec<_>>()
        })
        .await;
    courses.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = courses.len();
    let completed = courses.iter().filter(|c| c.completed).count();
    Json(UserCoursesResponse {
        courses,
        total,
        completed,
    })
}

/// `GET /api/user/courses/{id}`
pub async fn user_course_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(course_id): Path<String>,
) -> Result<Json<UserCourse>, AppError> {
    state
        .repos
        .user_courses
        .read(|courses| {
            courses
                .iter()
                .find(|c| c.user_id == claims.user_id && c.id == course_id)
                .cloned()
        })
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
}

#[derive(Deserialize)]
pub struct UpdateProgressRequest {
    pub progress: Option<u8>,
    pub completed: Option<bool>,
}

#[derive(Serialize)]
pub struct CourseUpdateResponse {
    pub message: String,
    pub course: UserCourse,
}

/// `PUT /api/user/courses/{id}/progress`
///
/// On the first transition to completed, the owning user's stats are
/// incremented exactly once; re-completing an already-completed course does
/// not double-count.
pub async fn update_progress_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(course_id): Path<String>,
    Json(payload): Json<UpdateProgressRequest>,
) -> Result<Json<CourseUpdateResponse>, AppError> {
    let updated = state
        .repos
        .user_courses
        .mutate(|courses| {
            let course = courses
                .iter_mut()
                .find(|c| c.user_id == claims.user_id && c.id == course_id)?;
            let was_completed = course.completed;
            if let Some(progress) = payload.progress {
                course.progress = progress.min(100);
            }
            if let Some(completed) = payload.completed {
                course.completed = completed;
            }
            let now = Utc::now();
            course.last_accessed_at = Some(now);
            course.updated_at = now;
            Some((course.clone(), was_completed))
        })
        .await;

    let Some((course, was_completed)) = updated else {
        return Err(AppError::NotFound("Course not found".to_string()));
    };

    if course.completed && !was_completed {
        state
            .repos
            .users
            .mutate(|users| {
                if let Some(user) = users.iter_mut().find(|u| u.id == claims.user_id) {
                    user.courses_completed += 1;
                    user.total_study_time += COURSE_STUDY_MINUTES;
                }
            })
            .await;
    }

    Ok(Json(CourseUpdateResponse {
        message: "Progress updated".to_string(),
        course,
    }))
}

#[derive(Deserialize)]
pub struct LikeCourseRequest {
    pub liked: Option<bool>,
}

/// `PUT /api/user/courses/{id}/like`
///
/// Sets the flag when given, toggles it otherwise.
pub async fn like_course_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(course_id): Path<String>,
    Json(payload): Json<LikeCourseRequest>,
) -> Result<Json<CourseUpdateResponse>, AppError> {
    state
        .repos
        .user_courses
        .mutate(|courses| {
            let course = courses
                .iter_mut()
                .find(|c| c.user_id == claims.user_id && c.id == course_id)?;
            course.liked = payload.liked.unwrap_or(!course.liked);
            course.updated_at = Utc::now();
            Some(course.clone())
        })
        .await
        .map(|course| {
            Json(CourseUpdateResponse {
                message: "Course updated".to_string(),
                course,
            })
        })
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
}

/// `DELETE /api/user/courses/{id}`
pub async fn delete_user_course_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(course_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let removed = state
        .repos
        .user_courses
        .mutate(|courses| {
            let index = courses
                .iter()
                .position(|c| c.user_id == claims.user_id && c.id == course_id)?;
            courses.remove(index);
            Some(())
        })
        .await;

    match removed {
        Some(()) => Ok(Json(json!({ "message": "Course deleted successfully" }))),
        None => Err(AppError::NotFound("Course not found".to_string())),
    }
}

// --- Dashboard ---

/// `GET /api/user/dashboard`
pub async fn dashboard_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Json<Value> {
    let mut owned = state
        .repos
        .user_courses
        .read(|courses| {
            courses
                .iter()
                .filter(|c| c.user_id == claims.user_id)
                .cloned()
                .collect::<Vec<_>>()
        })
        .await;
    owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let completed = owned.iter().filter(|c| c.completed).count();
    let in_progress = owned
        .iter()
        .filter(|c| c.progress > 0 && !c.completed)
        .count();
    let total_study_time: usize = owned
        .iter()
        .filter(|c| c.progress > 0)
        .map(|c| match &c.course.body {
            CourseBody::Modular { modules } => modules.len() * MODULE_STUDY_MINUTES,
            CourseBody::Sectioned { .. } => 30,
        })
        .sum();
    let week_ago = Utc::now() - Duration::days(7);
    let courses_this_week = owned.iter().filter(|c| c.created_at > week_ago).count();
    let completion_rate = if owned.is_empty() {
        0
    } else {
        (completed as f64 / owned.len() as f64 * 100.0).round() as u32
    };

    let recent_activity: Vec<Value> = owned
        .iter()
        .take(5)
        .map(|c| {
            json!({
                "topic": c.course.title,
                "createdAt": c.created_at,
            })
        })
        .collect();

    let mut topic_counts: HashMap<String, usize> = HashMap::new();
    for course in &owned {
        *topic_counts.entry(course.topic.clone()).or_default() += 1;
    }
    let mut favorite_topics: Vec<(String, usize)> = topic_counts.into_iter().collect();
    favorite_topics.sort_by(|a, b| b.1.cmp(&a.1));
    let favorite_topics: Vec<Value> = favorite_topics
        .into_iter()
        .take(5)
        .map(|(topic, count)| json!({ "topic": topic, "count": count }))
        .collect();

    let achievements = json!([
        {
            "name": "First Course",
            "description": "Generated your first AI course",
            "unlocked": !owned.is_empty(),
        },
        {
            "name": "Course Collector",
            "description": "Generated 5 or more courses",
            "unlocked": owned.len() >= 5,
        },
        {
            "name": "Dedicated Learner",
            "description": "Completed 3 or more courses",
            "unlocked": completed >= 3,
        },
    ]);

    Json(json!({
        "user": { "userId": claims.user_id, "email": claims.email },
        "stats": {
            "totalCourses": owned.len(),
            "completedCourses": completed,
            "inProgressCourses": in_progress,
            "totalStudyTime": total_study_time,
            "coursesThisWeek": courses_this_week,
            "completionRate": completion_rate,
        },
        "recentActivity": recent_activity,
        "favoriteTopics": favorite_topics,
        "achievements": achievements,
    }))
}
