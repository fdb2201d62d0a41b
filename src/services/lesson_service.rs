// src/services/lesson_service.rs
//
// Lesson Service - Standalone "add lesson to existing course" flow
//
// CRITICAL RULES:
// - Validation here BLOCKS: this form submits straight to the backend
// - YouTube locators are normalized to the bare video id before posting
// - Never touches wizard drafts

use std::sync::Arc;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::api::{Ack, CourseApi};
use crate::application::dto::LessonAttachPayload;
use crate::domain::FieldErrors;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, LessonAttached};

/// Request to attach one lesson to an already persisted course
#[derive(Debug, Clone)]
pub struct AttachLessonRequest {
    pub course_id: String,
    pub titulo: String,
    pub numero: i64,
    pub data: Option<NaiveDate>,
    pub url_youtube: String,
    pub url_miniatura: String,
    pub duracao: String,
}

pub struct LessonService {
    api: Arc<dyn CourseApi>,
    event_bus: Arc<EventBus>,
}

// Covers youtu.be, youtube.com/watch, youtube.com/embed, with or without
// extra params
fn youtube_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:youtu\.be/|youtube\.com/(?:embed/|v/|watch\?v=|watch\?.+&v=))([\w-]{11})")
            .expect("hardcoded YouTube id pattern is valid")
    })
}

/// Extract the 11-character video id from any valid YouTube URL.
/// Anything else passes through unchanged (trimmed).
pub fn extract_youtube_video_id(url: &str) -> String {
    let aparado = url.trim();
    match youtube_id_pattern().captures(aparado) {
        Some(capturas) => capturas[1].to_string(),
        None => aparado.to_string(),
    }
}

impl LessonService {
    pub fn new(api: Arc<dyn CourseApi>, event_bus: Arc<EventBus>) -> Self {
        Self { api, event_bus }
    }

    /// Blocking per-field validation of the attach form
    pub fn validate_request(request: &AttachLessonRequest) -> FieldErrors {
        let mut erros = FieldErrors::new();

        if request.course_id.trim().is_empty() {
            erros.insert("course_id", "Course selection is required");
        }
        if request.titulo.trim().is_empty() {
            erros.insert("titulo", "Lesson title is required");
        }
        if request.numero <= 0 {
            erros.insert("numero", "Lesson number must be a positive number");
        }
        if request.data.is_none() {
            erros.insert("data", "Lesson date is required");
        }
        if request.url_youtube.trim().is_empty() {
            erros.insert("url_youtube", "YouTube URL is required");
        }
        if request.url_miniatura.trim().is_empty() {
            erros.insert("url_miniatura", "Thumbnail URL is required");
        }
        if request.duracao.trim().is_empty() {
            erros.insert("duracao", "Lesson duration is required");
        }

        erros
    }

    /// Validate, normalize and post one lesson to an existing course
    pub async fn attach_lesson(&self, request: AttachLessonRequest) -> AppResult<Ack> {
        // 1. Validate (blocking)
        let erros = Self::validate_request(&request);
        if !erros.is_empty() {
            return Err(AppError::Validation(erros));
        }

        let data = request
            .data
            .ok_or_else(|| AppError::Other("lesson date missing after validation".to_string()))?;

        // 2. Normalize the locator
        let video_id = extract_youtube_video_id(&request.url_youtube);

        // 3. Hand off to the backend
        let payload = LessonAttachPayload {
            course_id: request.course_id.clone(),
            lesson_title: request.titulo.clone(),
            lesson_number: request.numero,
            lesson_date: data,
            youtube_url: video_id,
            thumbnail_url: request.url_miniatura.clone(),
            lesson_duration: request.duracao.clone(),
        };
        let ack = self.api.attach_lesson(payload).await?;

        // 4. Emit event
        log::info!(
            "lesson '{}' attached to course {}",
            request.titulo,
            request.course_id
        );
        self.event_bus
            .emit(LessonAttached::new(request.course_id, request.titulo));

        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_valida() -> AttachLessonRequest {
        AttachLessonRequest {
            course_id: "c-1".to_string(),
            titulo: "ES6 Syntax".to_string(),
            numero: 1,
            data: NaiveDate::from_ymd_opt(2025, 9, 1),
            url_youtube: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            url_miniatura: "https://example.com/thumbnail.jpg".to_string(),
            duracao: "60 min".to_string(),
        }
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        assert!(LessonService::validate_request(&request_valida()).is_empty());
    }

    #[test]
    fn test_every_missing_field_gets_a_message() {
        let request = AttachLessonRequest {
            course_id: String::new(),
            titulo: "  ".to_string(),
            numero: 0,
            data: None,
            url_youtube: String::new(),
            url_miniatura: String::new(),
            duracao: String::new(),
        };

        let erros = LessonService::validate_request(&request);
        assert_eq!(erros.len(), 7);
        assert_eq!(erros.get("course_id"), Some("Course selection is required"));
        assert_eq!(
            erros.get("numero"),
            Some("Lesson number must be a positive number")
        );
    }

    #[test]
    fn test_negative_lesson_number_is_rejected() {
        let mut request = request_valida();
        request.numero = -3;
        assert!(LessonService::validate_request(&request).get("numero").is_some());
    }

    #[test]
    fn test_youtube_id_extraction() {
        assert_eq!(
            extract_youtube_video_id("https://youtu.be/dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/watch?list=PL1&v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_youtube_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ?start=10"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_non_youtube_locators_pass_through() {
        assert_eq!(
            extract_youtube_video_id("  https://example.com/a  "),
            "https://example.com/a"
        );
        assert_eq!(extract_youtube_video_id("not a url"), "not a url");
    }
}
