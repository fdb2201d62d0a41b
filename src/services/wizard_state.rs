// src/services/wizard_state.rs
//
// Wizard State Machine - Types and Transitions
//
// CRITICAL RULES:
// - Transitions mutate the state struct and nothing else (no I/O)
// - The committed lesson list only ever grows, and only through commit
// - Identifiers are assigned exactly once, at commit
// - Every transition is recoverable; nothing here is fatal

use chrono::NaiveDate;

use crate::domain::{
    validate_course, validate_course_for_submission, validate_lesson, validate_lesson_content,
    AssetRef, AssetSource, Course, CourseStatus, DomainError, FieldErrors, Lesson,
};
use crate::error::AppResult;
use crate::infrastructure::PreviewRegistry;

// ============================================================================
// STEPS AND EVENTS
// ============================================================================

/// The three authoring screens. The stepper allows free jumps between
/// them; only the data dependency is linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    CourseInfo,
    LessonEntry,
    ContentReview,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::CourseInfo => "course_info",
            WizardStep::LessonEntry => "lesson_entry",
            WizardStep::ContentReview => "content_review",
        }
    }
}

/// Scalar or thumbnail edit on the course draft
#[derive(Debug)]
pub enum CourseField {
    Titulo(String),
    Descricao(String),
    Status(CourseStatus),
    Miniatura(AssetSource),
}

/// Scalar or thumbnail edit on the draft lesson
#[derive(Debug)]
pub enum LessonField {
    Titulo(String),
    Data(NaiveDate),
    Instrutor(String),
    Duracao(String),
    Miniatura(AssetSource),
}

/// Edit on one committed lesson's content. File-input changes replace the
/// resources list wholesale; they are never additive.
#[derive(Debug)]
pub enum ContentField {
    UrlVideo(String),
    DuracaoVideo(String),
    Recursos(Vec<AssetSource>),
    PermitePrevia(bool),
}

/// Everything the user can do to the wizard, as data
#[derive(Debug)]
pub enum WizardEvent {
    GoToStep(WizardStep),
    EditCourseField(CourseField),
    EditLessonField(LessonField),
    CommitLesson,
    AdvanceToContentReview,
    EditContentField { indice: usize, campo: ContentField },
    RequestPreview,
    ClosePreview,
    Reset,
}

/// What a transition did, for the controller to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    StepChanged { de: WizardStep, para: WizardStep },
    CourseEdited,
    LessonEdited,
    ContentEdited { indice: usize },
    LessonCommitted { id: String, titulo: String, posicao: usize },
    PreviewToggled { aberto: bool },
    WasReset { aulas_descartadas: usize },
    NoChange,
}

// ============================================================================
// STATE
// ============================================================================

/// The wizard's entire draft tree.
///
/// One instance per course-creation workflow; nothing is shared between
/// workflows. The committed lesson list lives on the course aggregate, so
/// assembling the submission payload is a read of this struct.
#[derive(Debug)]
pub struct WizardState {
    /// Current screen
    pub step: WizardStep,

    /// The course aggregate under construction (owns committed lessons)
    pub curso: Course,

    /// The lesson draft being edited on the lesson-entry step
    pub aula_atual: Lesson,

    /// Whether the read-only aggregate preview modal is open
    pub mostrar_previa: bool,

    /// Whether a submission is in flight (resubmission disabled)
    pub enviando: bool,
}

impl WizardState {
    /// Defaults for a freshly mounted wizard
    pub fn new() -> Self {
        Self {
            step: WizardStep::CourseInfo,
            curso: Course::new(),
            aula_atual: Lesson::new(),
            mostrar_previa: false,
            enviando: false,
        }
    }

    /// Apply one user event. This is the single entry point the
    /// controller dispatches through.
    pub fn apply(&mut self, event: WizardEvent, previews: &PreviewRegistry) -> AppResult<Applied> {
        match event {
            WizardEvent::GoToStep(para) => Ok(self.go_to_step(para)),
            WizardEvent::EditCourseField(campo) => {
                self.edit_course_field(campo, previews);
                Ok(Applied::CourseEdited)
            }
            WizardEvent::EditLessonField(campo) => {
                self.edit_lesson_field(campo, previews);
                Ok(Applied::LessonEdited)
            }
            WizardEvent::CommitLesson => Ok(self.commit_lesson()),
            WizardEvent::AdvanceToContentReview => Ok(self.advance_to_content_review()),
            WizardEvent::EditContentField { indice, campo } => {
                self.edit_content_field(indice, campo)?;
                Ok(Applied::ContentEdited { indice })
            }
            WizardEvent::RequestPreview => Ok(self.set_preview(true)),
            WizardEvent::ClosePreview => Ok(self.set_preview(false)),
            WizardEvent::Reset => Ok(self.reset()),
        }
    }

    /// Jump to any step. The stepper has no linear gate.
    pub fn go_to_step(&mut self, para: WizardStep) -> Applied {
        if para == self.step {
            return Applied::NoChange;
        }
        let de = self.step;
        self.step = para;
        Applied::StepChanged { de, para }
    }

    /// Last-write-wins edit of a course field. A thumbnail edit attaches
    /// the selection and computes its preview for display; the previous
    /// reference (and its handle) is dropped.
    pub fn edit_course_field(&mut self, campo: CourseField, previews: &PreviewRegistry) {
        match campo {
            CourseField::Titulo(valor) => self.curso.titulo = valor,
            CourseField::Descricao(valor) => self.curso.descricao = valor,
            CourseField::Status(valor) => self.curso.status = valor,
            CourseField::Miniatura(origem) => {
                let mut asset = AssetRef::new(origem);
                asset.preview(previews);
                self.curso.miniatura = Some(asset);
            }
        }
    }

    /// Last-write-wins edit of the draft lesson
    pub fn edit_lesson_field(&mut self, campo: LessonField, previews: &PreviewRegistry) {
        match campo {
            LessonField::Titulo(valor) => self.aula_atual.titulo = valor,
            LessonField::Data(valor) => self.aula_atual.data = Some(valor),
            LessonField::Instrutor(valor) => self.aula_atual.instrutor = valor,
            LessonField::Duracao(valor) => self.aula_atual.duracao = valor,
            LessonField::Miniatura(origem) => {
                let mut asset = AssetRef::new(origem);
                asset.preview(previews);
                self.aula_atual.miniatura = Some(asset);
            }
        }
    }

    /// Move the draft into the committed list, assigning `L<n>` where n is
    /// the 1-based position after append. Sole growth path of the list;
    /// there is no removal, which is what keeps these identifiers unique.
    /// The draft resets to defaults with a fresh content model.
    pub fn commit_lesson(&mut self) -> Applied {
        let mut aula = std::mem::take(&mut self.aula_atual);
        let posicao = self.curso.aulas.len() + 1;
        aula.id = format!("L{}", posicao);

        let id = aula.id.clone();
        let titulo = aula.titulo.clone();
        self.curso.aulas.push(aula);

        Applied::LessonCommitted { id, titulo, posicao }
    }

    /// Enter the content review step. Valid for any list size; a
    /// zero-lesson course can reach the step but cannot submit.
    pub fn advance_to_content_review(&mut self) -> Applied {
        self.go_to_step(WizardStep::ContentReview)
    }

    /// Mutate one committed lesson's content in place
    pub fn edit_content_field(&mut self, indice: usize, campo: ContentField) -> AppResult<()> {
        let aula = self
            .curso
            .aulas
            .get_mut(indice)
            .ok_or_else(|| DomainError::NotFound(format!("lesson at index {}", indice)))?;

        match campo {
            ContentField::UrlVideo(valor) => aula.conteudo.url_video = valor,
            ContentField::DuracaoVideo(valor) => aula.conteudo.duracao_video = valor,
            ContentField::Recursos(origens) => {
                aula.conteudo.recursos = origens.into_iter().map(AssetRef::new).collect();
            }
            ContentField::PermitePrevia(valor) => aula.conteudo.permite_previa = valor,
        }
        Ok(())
    }

    /// Idempotent toggle of the read-only aggregate preview modal
    pub fn set_preview(&mut self, aberto: bool) -> Applied {
        if self.mostrar_previa == aberto {
            return Applied::NoChange;
        }
        self.mostrar_previa = aberto;
        Applied::PreviewToggled { aberto }
    }

    /// Discard every draft. Dropping the old tree releases all
    /// outstanding preview handles.
    pub fn reset(&mut self) -> Applied {
        let aulas_descartadas = self.curso.aulas.len();
        *self = WizardState::new();
        Applied::WasReset { aulas_descartadas }
    }

    // ========================================================================
    // SUBMISSION GUARDS
    // ========================================================================

    /// Check the submission guards and flag the in-flight state.
    /// The payload snapshot is taken by the controller right after this.
    pub fn begin_submission(&mut self) -> AppResult<()> {
        if self.enviando {
            return Err(DomainError::InvalidStateTransition(
                "a submission is already in flight".to_string(),
            )
            .into());
        }
        validate_course_for_submission(&self.curso)?;
        self.enviando = true;
        Ok(())
    }

    /// Re-enable the submit affordance after the collaborator resolved
    pub fn finish_submission(&mut self) {
        self.enviando = false;
    }

    // ========================================================================
    // ADVISORY VALIDATION
    // ========================================================================

    /// Per-field messages for the course form (step 1)
    pub fn course_field_errors(&self) -> FieldErrors {
        validate_course(&self.curso)
    }

    /// Per-field messages for the draft lesson form (step 2)
    pub fn lesson_field_errors(&self) -> FieldErrors {
        validate_lesson(&self.aula_atual)
    }

    /// Per-field messages for one committed lesson's content (step 3)
    pub fn content_field_errors(&self, indice: usize) -> AppResult<FieldErrors> {
        let aula = self
            .curso
            .aulas
            .get(indice)
            .ok_or_else(|| DomainError::NotFound(format!("lesson at index {}", indice)))?;
        Ok(validate_lesson_content(&aula.conteudo))
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origem(nome: &str, byte: u8) -> AssetSource {
        AssetSource::from_bytes(nome, vec![byte; 8])
    }

    #[test]
    fn test_course_fields_are_last_write_wins() {
        let previews = PreviewRegistry::new();
        let mut state = WizardState::new();

        state.edit_course_field(CourseField::Titulo("First".to_string()), &previews);
        state.edit_course_field(CourseField::Titulo("Second".to_string()), &previews);
        state.edit_course_field(CourseField::Descricao("About".to_string()), &previews);
        state.edit_course_field(CourseField::Status(CourseStatus::Inativo), &previews);

        assert_eq!(state.curso.titulo, "Second");
        assert_eq!(state.curso.descricao, "About");
        assert_eq!(state.curso.status, CourseStatus::Inativo);
    }

    #[test]
    fn test_commit_assigns_sequential_ids_and_resets_draft() {
        let previews = PreviewRegistry::new();
        let mut state = WizardState::new();

        for n in 1..=3 {
            state.edit_lesson_field(LessonField::Titulo(format!("Lesson {}", n)), &previews);
            state.edit_lesson_field(LessonField::Instrutor("Jane Smith".to_string()), &previews);
            let applied = state.commit_lesson();

            assert_eq!(
                applied,
                Applied::LessonCommitted {
                    id: format!("L{}", n),
                    titulo: format!("Lesson {}", n),
                    posicao: n,
                }
            );

            // Draft is back to defaults after every commit
            assert_eq!(state.aula_atual.titulo, "");
            assert_eq!(state.aula_atual.id, "");
            assert_eq!(state.aula_atual.instrutor, "");
            assert!(state.aula_atual.data.is_none());
            assert!(state.aula_atual.miniatura.is_none());
            assert_eq!(state.aula_atual.conteudo.url_video, "");
            assert!(state.aula_atual.conteudo.recursos.is_empty());
            assert!(!state.aula_atual.conteudo.permite_previa);
        }

        let ids: Vec<&str> = state.curso.aulas.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["L1", "L2", "L3"]);
    }

    #[test]
    fn test_stepper_allows_free_jumps() {
        let mut state = WizardState::new();

        assert_eq!(
            state.go_to_step(WizardStep::ContentReview),
            Applied::StepChanged {
                de: WizardStep::CourseInfo,
                para: WizardStep::ContentReview,
            }
        );
        assert_eq!(state.go_to_step(WizardStep::ContentReview), Applied::NoChange);

        assert_eq!(
            state.go_to_step(WizardStep::LessonEntry),
            Applied::StepChanged {
                de: WizardStep::ContentReview,
                para: WizardStep::LessonEntry,
            }
        );
    }

    #[test]
    fn test_zero_lesson_course_reaches_review_but_cannot_submit() {
        let mut state = WizardState::new();

        state.advance_to_content_review();
        assert_eq!(state.step, WizardStep::ContentReview);

        let erro = state.begin_submission().unwrap_err();
        assert!(erro.to_string().contains("No lessons added"));
        assert!(state.curso.aulas.is_empty());
        assert!(!state.enviando);
    }

    #[test]
    fn test_begin_submission_blocks_while_in_flight() {
        let mut state = WizardState::new();
        state.commit_lesson();

        state.begin_submission().unwrap();
        assert!(state.enviando);

        let erro = state.begin_submission().unwrap_err();
        assert!(erro.to_string().contains("already in flight"));

        state.finish_submission();
        assert!(state.begin_submission().is_ok());
    }

    #[test]
    fn test_replacing_thumbnail_keeps_one_live_handle() {
        let previews = PreviewRegistry::new();
        let mut state = WizardState::new();

        state.edit_lesson_field(LessonField::Miniatura(origem("a.png", 1)), &previews);
        assert_eq!(previews.live_count(), 1);

        state.edit_lesson_field(LessonField::Miniatura(origem("b.png", 2)), &previews);
        assert_eq!(previews.live_count(), 1);

        let url = state.aula_atual.miniatura.as_ref().unwrap().preview_url();
        assert!(url.is_some());
    }

    #[test]
    fn test_resources_are_replaced_wholesale() {
        let previews = PreviewRegistry::new();
        let mut state = WizardState::new();
        state.commit_lesson();

        state
            .edit_content_field(
                0,
                ContentField::Recursos(vec![origem("a.pdf", 1), origem("b.pdf", 2)]),
            )
            .unwrap();
        assert_eq!(state.curso.aulas[0].conteudo.recursos.len(), 2);

        // A new file selection replaces the whole list, it does not append
        state
            .edit_content_field(0, ContentField::Recursos(vec![origem("c.pdf", 3)]))
            .unwrap();
        let recursos = &state.curso.aulas[0].conteudo.recursos;
        assert_eq!(recursos.len(), 1);
        assert_eq!(recursos[0].nome, "c.pdf");
    }

    #[test]
    fn test_duplicate_resources_are_allowed() {
        let mut state = WizardState::new();
        state.commit_lesson();

        state
            .edit_content_field(
                0,
                ContentField::Recursos(vec![origem("same.pdf", 9), origem("same.pdf", 9)]),
            )
            .unwrap();

        let recursos = &state.curso.aulas[0].conteudo.recursos;
        assert_eq!(recursos.len(), 2);
        assert_eq!(recursos[0].id, recursos[1].id);
    }

    #[test]
    fn test_content_edit_out_of_bounds_is_not_found() {
        let mut state = WizardState::new();
        let erro = state
            .edit_content_field(5, ContentField::PermitePrevia(true))
            .unwrap_err();
        assert!(erro.to_string().contains("lesson at index 5"));
    }

    #[test]
    fn test_preview_modal_toggle_is_idempotent() {
        let mut state = WizardState::new();

        assert_eq!(state.set_preview(true), Applied::PreviewToggled { aberto: true });
        assert_eq!(state.set_preview(true), Applied::NoChange);
        assert_eq!(state.set_preview(false), Applied::PreviewToggled { aberto: false });
        assert_eq!(state.set_preview(false), Applied::NoChange);
    }

    #[test]
    fn test_reset_discards_drafts_and_releases_handles() {
        let previews = PreviewRegistry::new();
        let mut state = WizardState::new();

        state.edit_course_field(CourseField::Miniatura(origem("capa.png", 1)), &previews);
        state.edit_lesson_field(LessonField::Miniatura(origem("aula.png", 2)), &previews);
        state.commit_lesson();
        state
            .edit_content_field(0, ContentField::Recursos(vec![origem("r.pdf", 3)]))
            .unwrap();
        assert_eq!(previews.live_count(), 2);

        let applied = state.reset();

        assert_eq!(applied, Applied::WasReset { aulas_descartadas: 1 });
        assert_eq!(previews.live_count(), 0);
        assert_eq!(state.step, WizardStep::CourseInfo);
        assert!(state.curso.aulas.is_empty());
        assert_eq!(state.curso.titulo, "");
    }

    #[test]
    fn test_advisory_validation_reports_without_blocking() {
        let mut state = WizardState::new();

        assert!(!state.course_field_errors().is_empty());
        assert!(!state.lesson_field_errors().is_empty());

        // Commit goes through regardless: the messages are for the UI
        state.commit_lesson();
        assert_eq!(state.curso.aulas.len(), 1);

        let erros = state.content_field_errors(0).unwrap();
        assert!(erros.get("url_video").is_some());

        state
            .edit_content_field(0, ContentField::UrlVideo("https://example.com/a".to_string()))
            .unwrap();
        assert!(state.content_field_errors(0).unwrap().is_empty());
    }
}
