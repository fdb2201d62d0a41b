use super::content::LessonContent;
use super::entity::Lesson;
use crate::domain::FieldErrors;

/// Required-field checks for a lesson draft.
/// Advisory in the wizard: the messages are surfaced per field, the
/// stepper never blocks on them.
pub fn validate_lesson(aula: &Lesson) -> FieldErrors {
    let mut erros = FieldErrors::new();

    if aula.titulo.trim().is_empty() {
        erros.insert("titulo", "Lesson title is required");
    }
    if aula.data.is_none() {
        erros.insert("data", "Lesson date is required");
    }
    if aula.instrutor.trim().is_empty() {
        erros.insert("instrutor", "Instructor name is required");
    }

    erros
}

/// Required-field checks for a lesson's content, applied on the final step
pub fn validate_lesson_content(conteudo: &LessonContent) -> FieldErrors {
    let mut erros = FieldErrors::new();

    if conteudo.url_video.trim().is_empty() {
        erros.insert("url_video", "Video URL is required");
    }

    erros
}
