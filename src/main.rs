// src/main.rs

use std::sync::Arc;

use chrono::NaiveDate;

use coursehub::api::{CourseApi, DryRunCourseApi, HttpCourseApi};
use coursehub::application::AppState;
use coursehub::events::{CourseSubmitted, LessonCommitted, WizardStepChanged};
use coursehub::services::{ContentField, CourseField, LessonField, WizardStep};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 1. COLLABORATOR
    // With COURSEHUB_API_URL set the console talks to the admin backend;
    // without it every submission is accepted locally and logged.
    let api: Arc<dyn CourseApi> = match std::env::var("COURSEHUB_API_URL") {
        Ok(base_url) => Arc::new(HttpCourseApi::new(base_url)?),
        Err(_) => Arc::new(DryRunCourseApi::new()),
    };

    // 2. APPLICATION STATE
    let state = AppState::new(api);

    // 3. EVENT HANDLER REGISTRATION (WIRING)
    state.event_bus.subscribe::<WizardStepChanged, _>(|event| {
        log::info!("[notify] step {} -> {}", event.de, event.para);
    });
    state.event_bus.subscribe::<LessonCommitted, _>(|event| {
        log::info!(
            "[notify] lesson {} '{}' committed at position {}",
            event.lesson_id,
            event.titulo,
            event.posicao
        );
    });
    state.event_bus.subscribe::<CourseSubmitted, _>(|event| {
        log::info!(
            "[notify] course '{}' persisted as {}",
            event.titulo,
            event.record_id
        );
    });

    // 4. AUTHORING SESSION
    let mut wizard = state.start_wizard();

    // Step 1: course info
    wizard.edit_course_field(CourseField::Titulo("React Basics".to_string()))?;
    wizard.edit_course_field(CourseField::Descricao(
        "Learn the basics of React.".to_string(),
    ))?;
    wizard.go_to_step(WizardStep::LessonEntry)?;

    // Step 2: lessons
    wizard.edit_draft_lesson_field(LessonField::Titulo("Introduction".to_string()))?;
    wizard.edit_draft_lesson_field(LessonField::Data("2025-08-30".parse::<NaiveDate>()?))?;
    wizard.edit_draft_lesson_field(LessonField::Instrutor("John Doe".to_string()))?;
    wizard.edit_draft_lesson_field(LessonField::Duracao("45 min".to_string()))?;
    wizard.commit_lesson()?;

    wizard.edit_draft_lesson_field(LessonField::Titulo("Components".to_string()))?;
    wizard.edit_draft_lesson_field(LessonField::Data("2025-08-31".parse::<NaiveDate>()?))?;
    wizard.edit_draft_lesson_field(LessonField::Instrutor("Jane Smith".to_string()))?;
    wizard.commit_lesson()?;

    // Step 3: content per lesson
    wizard.advance_to_content_review()?;
    wizard.edit_lesson_content_field(
        0,
        ContentField::UrlVideo("https://youtube.com/example".to_string()),
    )?;
    wizard.edit_lesson_content_field(0, ContentField::DuracaoVideo("45:00".to_string()))?;
    wizard.edit_lesson_content_field(1, ContentField::PermitePrevia(true))?;

    // Read-only aggregate preview
    wizard.request_preview()?;
    println!(
        "{}",
        serde_json::to_string_pretty(&wizard.preview_payload())?
    );
    wizard.close_preview()?;

    // Final submission
    let record = wizard.submit().await?;
    println!("Course created! id: {}", record.id);

    // 5. CATALOG READBACK
    for resumo in state.catalog_service.list_courses().await? {
        println!(
            "- {} ({}, {} lessons)",
            resumo.title, resumo.status, resumo.lesson_count
        );
    }

    Ok(())
}
