// src/services/catalog_service.rs
//
// Course Catalog Service - List/Detail Plumbing
//
// CRITICAL RULES:
// - Read and delete only; course creation goes through the wizard
// - Never touches wizard drafts
// - Deletions are acknowledged by the backend before events fire

use std::sync::Arc;

use crate::api::{Ack, CourseApi, CourseRecord, CourseSummary};
use crate::error::AppResult;
use crate::events::{CourseDeleted, EventBus, LessonDeleted};

pub struct CourseCatalogService {
    api: Arc<dyn CourseApi>,
    event_bus: Arc<EventBus>,
}

impl CourseCatalogService {
    pub fn new(api: Arc<dyn CourseApi>, event_bus: Arc<EventBus>) -> Self {
        Self { api, event_bus }
    }

    /// Summaries for the course list view
    pub async fn list_courses(&self) -> AppResult<Vec<CourseSummary>> {
        self.api.list_courses().await
    }

    /// Full record for the details modal
    pub async fn get_course(&self, course_id: &str) -> AppResult<CourseRecord> {
        self.api.get_course_by_id(course_id).await
    }

    /// Delete a persisted course
    pub async fn delete_course(&self, course_id: &str) -> AppResult<Ack> {
        let ack = self.api.delete_course(course_id).await?;

        log::info!("course deleted: {}", course_id);
        self.event_bus.emit(CourseDeleted::new(course_id.to_string()));

        Ok(ack)
    }

    /// Delete a single persisted lesson (details modal action)
    pub async fn delete_lesson(&self, lesson_id: &str) -> AppResult<Ack> {
        let ack = self.api.delete_lesson(lesson_id).await?;

        log::info!("lesson deleted: {}", lesson_id);
        self.event_bus.emit(LessonDeleted::new(lesson_id.to_string()));

        Ok(ack)
    }
}
