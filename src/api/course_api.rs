// src/api/course_api.rs
//
// Course API contract and the local dry-run implementation

use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::dto::{CoursePayload, LessonAttachPayload};
use crate::error::{AppError, AppResult};

// ============================================================================
// WIRE TYPES
// ============================================================================

/// A persisted lesson as the backend returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub duration: String,
    pub video_url: String,
}

/// A persisted course as the backend returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub lessons: Vec<LessonRecord>,
}

/// One row of the course list view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub lesson_count: usize,
}

/// Acknowledgement of a delete/attach operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    pub deleted_id: Option<String>,
    pub message: Option<String>,
}

// ============================================================================
// CONTRACT
// ============================================================================

/// The external course API.
///
/// The wizard only ever calls `submit_course`; the remaining operations
/// serve the list/detail views and the standalone lesson attach flow.
/// Errors carry a human-readable message for the global notification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn submit_course(&self, payload: CoursePayload) -> AppResult<CourseRecord>;

    async fn list_courses(&self) -> AppResult<Vec<CourseSummary>>;

    async fn get_course_by_id(&self, course_id: &str) -> AppResult<CourseRecord>;

    async fn attach_lesson(&self, payload: LessonAttachPayload) -> AppResult<Ack>;

    async fn delete_lesson(&self, lesson_id: &str) -> AppResult<Ack>;

    async fn delete_course(&self, course_id: &str) -> AppResult<Ack>;
}

// ============================================================================
// DRY-RUN IMPLEMENTATION
// ============================================================================

/// In-memory course API.
///
/// Accepts every aggregate, keeps it in memory and logs what it received.
/// This is what the console did before the backend existed, and it is the
/// default collaborator when no API base URL is configured.
pub struct DryRunCourseApi {
    cursos: RwLock<Vec<CourseRecord>>,
}

impl DryRunCourseApi {
    pub fn new() -> Self {
        Self {
            cursos: RwLock::new(Vec::new()),
        }
    }
}

impl Default for DryRunCourseApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseApi for DryRunCourseApi {
    async fn submit_course(&self, payload: CoursePayload) -> AppResult<CourseRecord> {
        log::info!(
            "dry-run submit: '{}' with {} lessons",
            payload.title,
            payload.lessons.len()
        );

        let record = CourseRecord {
            id: Uuid::new_v4().to_string(),
            title: payload.title.clone(),
            description: payload.description.clone(),
            status: payload.status.clone(),
            lessons: payload
                .lessons
                .iter()
                .map(|aula| LessonRecord {
                    id: aula.id.clone(),
                    title: aula.title.clone(),
                    instructor: aula.instructor.clone(),
                    duration: aula.duration.clone(),
                    video_url: aula.content.video_url.clone(),
                })
                .collect(),
        };

        self.cursos.write().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_courses(&self) -> AppResult<Vec<CourseSummary>> {
        let cursos = self.cursos.read().unwrap();
        Ok(cursos
            .iter()
            .map(|curso| CourseSummary {
                id: curso.id.clone(),
                title: curso.title.clone(),
                description: curso.description.clone(),
                status: curso.status.clone(),
                lesson_count: curso.lessons.len(),
            })
            .collect())
    }

    async fn get_course_by_id(&self, course_id: &str) -> AppResult<CourseRecord> {
        let cursos = self.cursos.read().unwrap();
        cursos
            .iter()
            .find(|curso| curso.id == course_id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn attach_lesson(&self, payload: LessonAttachPayload) -> AppResult<Ack> {
        let mut cursos = self.cursos.write().unwrap();
        let curso = cursos
            .iter_mut()
            .find(|curso| curso.id == payload.course_id)
            .ok_or(AppError::NotFound)?;

        curso.lessons.push(LessonRecord {
            id: Uuid::new_v4().to_string(),
            title: payload.lesson_title.clone(),
            instructor: String::new(),
            duration: payload.lesson_duration.clone(),
            video_url: payload.youtube_url.clone(),
        });

        Ok(Ack {
            deleted_id: None,
            message: Some("Lesson added successfully!".to_string()),
        })
    }

    async fn delete_lesson(&self, lesson_id: &str) -> AppResult<Ack> {
        let mut cursos = self.cursos.write().unwrap();
        for curso in cursos.iter_mut() {
            let antes = curso.lessons.len();
            curso.lessons.retain(|aula| aula.id != lesson_id);
            if curso.lessons.len() < antes {
                return Ok(Ack {
                    deleted_id: Some(lesson_id.to_string()),
                    message: Some("Lesson deleted successfully!".to_string()),
                });
            }
        }
        Err(AppError::NotFound)
    }

    async fn delete_course(&self, course_id: &str) -> AppResult<Ack> {
        let mut cursos = self.cursos.write().unwrap();
        let antes = cursos.len();
        cursos.retain(|curso| curso.id != course_id);

        if cursos.len() < antes {
            Ok(Ack {
                deleted_id: Some(course_id.to_string()),
                message: Some("Course deleted successfully!".to_string()),
            })
        } else {
            Err(AppError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{LessonContentPayload, LessonPayload};

    fn payload_com_uma_aula() -> CoursePayload {
        CoursePayload {
            title: "React Basics".to_string(),
            description: "Learn the basics of React.".to_string(),
            thumbnail: None,
            status: "Active".to_string(),
            lessons: vec![LessonPayload {
                title: "Introduction".to_string(),
                id: "L1".to_string(),
                date: None,
                instructor: "John Doe".to_string(),
                thumbnail: None,
                duration: "45 min".to_string(),
                content: LessonContentPayload {
                    video_url: "https://youtube.com/example".to_string(),
                    video_duration: "45:00".to_string(),
                    resources: Vec::new(),
                    preview: true,
                },
            }],
        }
    }

    #[tokio::test]
    async fn test_dry_run_round_trip() {
        let api = DryRunCourseApi::new();

        let record = api.submit_course(payload_com_uma_aula()).await.unwrap();
        assert_eq!(record.lessons.len(), 1);

        let lista = api.list_courses().await.unwrap();
        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0].lesson_count, 1);

        let detalhe = api.get_course_by_id(&record.id).await.unwrap();
        assert_eq!(detalhe.title, "React Basics");
    }

    #[tokio::test]
    async fn test_dry_run_delete_lesson_then_course() {
        let api = DryRunCourseApi::new();
        let record = api.submit_course(payload_com_uma_aula()).await.unwrap();
        let lesson_id = record.lessons[0].id.clone();

        let ack = api.delete_lesson(&lesson_id).await.unwrap();
        assert_eq!(ack.deleted_id.as_deref(), Some(lesson_id.as_str()));

        let ack = api.delete_course(&record.id).await.unwrap();
        assert_eq!(ack.deleted_id.as_deref(), Some(record.id.as_str()));

        assert!(api.get_course_by_id(&record.id).await.is_err());
    }

    #[tokio::test]
    async fn test_dry_run_unknown_ids_are_not_found() {
        let api = DryRunCourseApi::new();
        assert!(api.delete_course("nope").await.is_err());
        assert!(api.delete_lesson("nope").await.is_err());
        assert!(api.get_course_by_id("nope").await.is_err());
    }
}
