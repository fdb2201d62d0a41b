// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are the wire/UI representation of the draft aggregate
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)
//
// Field names are camelCase on the wire, matching the admin backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{AssetRef, Course, Lesson, LessonContent};

// ============================================================================
// ASSET DTOs
// ============================================================================

/// Wire representation of an attached asset: metadata plus the transient
/// preview URL (if one is live). The bytes themselves never travel in the
/// JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetaDto {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub hash: String,
    pub preview_url: Option<String>,
}

impl From<&AssetRef> for AssetMetaDto {
    fn from(asset: &AssetRef) -> Self {
        Self {
            name: asset.nome.clone(),
            media_type: asset.tipo.to_string(),
            size: asset.tamanho,
            hash: asset.hash.clone(),
            preview_url: asset.preview_url().map(str::to_string),
        }
    }
}

// ============================================================================
// COURSE SUBMISSION PAYLOAD
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContentPayload {
    pub video_url: String,
    pub video_duration: String,
    pub resources: Vec<AssetMetaDto>,
    pub preview: bool,
}

impl From<&LessonContent> for LessonContentPayload {
    fn from(conteudo: &LessonContent) -> Self {
        Self {
            video_url: conteudo.url_video.clone(),
            video_duration: conteudo.duracao_video.clone(),
            resources: conteudo.recursos.iter().map(AssetMetaDto::from).collect(),
            preview: conteudo.permite_previa,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPayload {
    pub title: String,
    pub id: String,
    pub date: Option<NaiveDate>,
    pub instructor: String,
    pub thumbnail: Option<AssetMetaDto>,
    pub duration: String,
    pub content: LessonContentPayload,
}

impl From<&Lesson> for LessonPayload {
    fn from(aula: &Lesson) -> Self {
        Self {
            title: aula.titulo.clone(),
            id: aula.id.clone(),
            date: aula.data,
            instructor: aula.instrutor.clone(),
            thumbnail: aula.miniatura.as_ref().map(AssetMetaDto::from),
            duration: aula.duracao.clone(),
            content: LessonContentPayload::from(&aula.conteudo),
        }
    }
}

/// The assembled aggregate handed to the course API. Building one is a
/// snapshot: later draft edits do not change an already-built payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub title: String,
    pub description: String,
    pub thumbnail: Option<AssetMetaDto>,
    pub status: String,
    pub lessons: Vec<LessonPayload>,
}

impl From<&Course> for CoursePayload {
    fn from(curso: &Course) -> Self {
        Self {
            title: curso.titulo.clone(),
            description: curso.descricao.clone(),
            thumbnail: curso.miniatura.as_ref().map(AssetMetaDto::from),
            status: curso.status.to_string(),
            lessons: curso.aulas.iter().map(LessonPayload::from).collect(),
        }
    }
}

// ============================================================================
// LESSON ATTACH PAYLOAD
// ============================================================================

/// Payload of the standalone "add lesson to an existing course" form.
/// Keys mirror the admin backend's form fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonAttachPayload {
    pub course_id: String,
    pub lesson_title: String,
    pub lesson_number: i64,
    pub lesson_date: NaiveDate,
    pub youtube_url: String,
    pub thumbnail_url: String,
    pub lesson_duration: String,
}
