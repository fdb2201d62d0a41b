// src/services/wizard_service.rs
//
// Course Wizard - Authoring Workflow Controller
//
// CRITICAL RULES:
// - Owns one draft tree; never shared across workflows
// - All mutations go through the state machine in wizard_state
// - Emits an event after every observable mutation
// - Submission is the only async path; edits never block on it
// - Failures are messages, never panics; drafts survive every error

use std::sync::Arc;

use crate::api::{CourseApi, CourseRecord};
use crate::application::dto::CoursePayload;
use crate::domain::FieldErrors;
use crate::error::{AppError, AppResult};
use crate::events::{
    CourseSubmissionFailed, CourseSubmitted, EventBus, LessonCommitted, WizardReset,
    WizardStepChanged,
};
use crate::infrastructure::PreviewRegistry;
use crate::services::wizard_state::{
    Applied, ContentField, CourseField, LessonField, WizardEvent, WizardState, WizardStep,
};

pub struct CourseWizard {
    state: WizardState,
    previews: PreviewRegistry,
    api: Arc<dyn CourseApi>,
    event_bus: Arc<EventBus>,
}

impl CourseWizard {
    pub fn new(api: Arc<dyn CourseApi>, event_bus: Arc<EventBus>, previews: PreviewRegistry) -> Self {
        Self {
            state: WizardState::new(),
            previews,
            api,
            event_bus,
        }
    }

    /// Read access to the draft tree (the UI renders from this)
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The handle table backing asset previews
    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// Apply one user event and report what happened
    pub fn apply(&mut self, event: WizardEvent) -> AppResult<Applied> {
        let applied = self.state.apply(event, &self.previews)?;
        self.notify(&applied);
        Ok(applied)
    }

    fn notify(&self, applied: &Applied) {
        match applied {
            Applied::StepChanged { de, para } => {
                log::info!("wizard step: {} -> {}", de.label(), para.label());
                self.event_bus.emit(WizardStepChanged::new(
                    de.label().to_string(),
                    para.label().to_string(),
                ));
            }
            Applied::LessonCommitted { id, titulo, posicao } => {
                log::info!("lesson committed: {} '{}'", id, titulo);
                self.event_bus
                    .emit(LessonCommitted::new(id.clone(), titulo.clone(), *posicao));
            }
            Applied::WasReset { aulas_descartadas } => {
                log::info!("wizard reset, {} lessons discarded", aulas_descartadas);
                self.event_bus.emit(WizardReset::new(*aulas_descartadas));
            }
            _ => {}
        }
    }

    // ========================================================================
    // CONVENIENCE OPERATIONS (one per user action)
    // ========================================================================

    pub fn go_to_step(&mut self, para: WizardStep) -> AppResult<()> {
        self.apply(WizardEvent::GoToStep(para)).map(|_| ())
    }

    pub fn edit_course_field(&mut self, campo: CourseField) -> AppResult<()> {
        self.apply(WizardEvent::EditCourseField(campo)).map(|_| ())
    }

    pub fn edit_draft_lesson_field(&mut self, campo: LessonField) -> AppResult<()> {
        self.apply(WizardEvent::EditLessonField(campo)).map(|_| ())
    }

    /// Commit the draft lesson; returns the assigned identifier
    pub fn commit_lesson(&mut self) -> AppResult<String> {
        match self.apply(WizardEvent::CommitLesson)? {
            Applied::LessonCommitted { id, .. } => Ok(id),
            outro => Err(AppError::Other(format!(
                "unexpected transition result: {:?}",
                outro
            ))),
        }
    }

    pub fn advance_to_content_review(&mut self) -> AppResult<()> {
        self.apply(WizardEvent::AdvanceToContentReview).map(|_| ())
    }

    pub fn edit_lesson_content_field(&mut self, indice: usize, campo: ContentField) -> AppResult<()> {
        self.apply(WizardEvent::EditContentField { indice, campo })
            .map(|_| ())
    }

    pub fn request_preview(&mut self) -> AppResult<()> {
        self.apply(WizardEvent::RequestPreview).map(|_| ())
    }

    pub fn close_preview(&mut self) -> AppResult<()> {
        self.apply(WizardEvent::ClosePreview).map(|_| ())
    }

    /// Discard all drafts and release every outstanding preview handle
    pub fn reset(&mut self) -> AppResult<()> {
        self.apply(WizardEvent::Reset).map(|_| ())
    }

    /// Render the full draft aggregate for the read-only preview modal.
    /// Does not mutate anything.
    pub fn preview_payload(&self) -> CoursePayload {
        CoursePayload::from(&self.state.curso)
    }

    // ========================================================================
    // ADVISORY VALIDATION PASSTHROUGH
    // ========================================================================

    pub fn course_field_errors(&self) -> FieldErrors {
        self.state.course_field_errors()
    }

    pub fn lesson_field_errors(&self) -> FieldErrors {
        self.state.lesson_field_errors()
    }

    pub fn content_field_errors(&self, indice: usize) -> AppResult<FieldErrors> {
        self.state.content_field_errors(indice)
    }

    // ========================================================================
    // SUBMISSION
    // ========================================================================

    /// Check the guards, flag the in-flight state and take the payload
    /// snapshot. Edits made after this point are NOT in the snapshot; a
    /// new submission must be triggered to pick them up.
    pub fn begin_submission(&mut self) -> AppResult<CoursePayload> {
        self.state.begin_submission().map_err(|erro| {
            log::warn!("submission rejected locally: {}", erro);
            erro
        })?;
        Ok(CoursePayload::from(&self.state.curso))
    }

    /// Record the collaborator's verdict and re-enable the submit
    /// affordance. On rejection the drafts are untouched so the user can
    /// retry without re-entering data.
    pub fn finish_submission(&mut self, outcome: Result<&CourseRecord, &AppError>) {
        match outcome {
            Ok(record) => {
                log::info!("course submitted: '{}' (id {})", record.title, record.id);
                self.event_bus.emit(CourseSubmitted::new(
                    record.id.clone(),
                    record.title.clone(),
                    record.lessons.len(),
                ));
            }
            Err(erro) => {
                log::warn!("course submission failed: {}", erro);
                self.event_bus
                    .emit(CourseSubmissionFailed::new(erro.to_string()));
            }
        }
        self.state.finish_submission();
    }

    /// Assemble the aggregate and hand it to the course API.
    /// Single attempt, no retry: transport policy belongs to the
    /// collaborator.
    pub async fn submit(&mut self) -> AppResult<CourseRecord> {
        let payload = self.begin_submission()?;
        let resultado = self.api.submit_course(payload).await;
        self.finish_submission(resultado.as_ref());
        resultado
    }
}
