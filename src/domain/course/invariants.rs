use super::entity::Course;
use crate::domain::{DomainError, DomainResult, FieldErrors};

/// Required-field checks for the course draft.
/// Advisory: surfaced per field, never blocks the stepper.
pub fn validate_course(curso: &Course) -> FieldErrors {
    let mut erros = FieldErrors::new();

    if curso.titulo.trim().is_empty() {
        erros.insert("titulo", "Course title is required");
    }
    if curso.descricao.trim().is_empty() {
        erros.insert("descricao", "Short description is required");
    }

    erros
}

/// The one hard invariant of the aggregate: a course cannot be submitted
/// without lessons.
pub fn validate_course_for_submission(curso: &Course) -> DomainResult<()> {
    if curso.aulas.is_empty() {
        return Err(DomainError::InvariantViolation(
            "No lessons added. Go back and add lessons first.".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Course domain:
///
/// 1. A course draft can exist without lessons; a submitted one cannot
/// 2. Lesson identifiers are assigned exactly once, at commit
/// 3. Identifiers are L1..LN in commit order and unique because the
///    wizard has no lesson-removal path
/// 4. Lesson ordering never changes after commit
/// 5. Each lesson owns exactly one content model, never shared

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lesson::Lesson;

    #[test]
    fn test_blank_course_reports_required_fields() {
        let erros = validate_course(&Course::new());
        assert!(erros.get("titulo").is_some());
        assert!(erros.get("descricao").is_some());
    }

    #[test]
    fn test_filled_course_is_clean() {
        let mut curso = Course::new();
        curso.titulo = "React Basics".to_string();
        curso.descricao = "Learn the basics of React.".to_string();

        assert!(validate_course(&curso).is_empty());
    }

    #[test]
    fn test_submission_requires_lessons() {
        let mut curso = Course::new();
        assert!(validate_course_for_submission(&curso).is_err());

        curso.aulas.push(Lesson::new());
        assert!(validate_course_for_submission(&curso).is_ok());
    }

    #[test]
    fn test_status_labels_round_trip() {
        use crate::domain::course::CourseStatus;

        assert_eq!(CourseStatus::default(), CourseStatus::Ativo);
        assert_eq!(CourseStatus::Ativo.to_string(), "Active");
        assert_eq!(CourseStatus::from_label("Inactive"), Some(CourseStatus::Inativo));
        assert_eq!(CourseStatus::from_label("archived"), None);
    }
}
