// src/api/mod.rs
//
// Course API boundary
//
// CRITICAL RULES:
// - The API is an external collaborator, reached only through CourseApi
// - Transport concerns (auth, retry, sessions) live behind the trait
// - Implementations map wire errors to user-facing messages
// - No domain mutation: payloads in, records out

pub mod course_api;
pub mod http_client;

pub use course_api::{Ack, CourseApi, CourseRecord, CourseSummary, DryRunCourseApi, LessonRecord};
pub use http_client::HttpCourseApi;

#[cfg(test)]
pub use course_api::MockCourseApi;
