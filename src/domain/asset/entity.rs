use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::AppResult;
use crate::infrastructure::{PreviewHandle, PreviewRegistry};

/// A binary selected by the user, before it becomes an attached reference.
/// Selection failures (unreadable file) surface here; callers treat them
/// as "no attachment".
#[derive(Debug, Clone)]
pub struct AssetSource {
    pub nome: String,
    pub dados: Vec<u8>,
}

impl AssetSource {
    pub fn from_bytes(nome: impl Into<String>, dados: Vec<u8>) -> Self {
        Self {
            nome: nome.into(),
            dados,
        }
    }

    /// Read a local file as a selection
    pub fn from_path(caminho: &Path) -> AppResult<Self> {
        let dados = std::fs::read(caminho)?;
        let nome = caminho
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("arquivo")
            .to_string();
        Ok(Self { nome, dados })
    }
}

/// Kind of media based on the selected file's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Imagem,
    Video,
    Documento,
    Outro,
}

impl MediaKind {
    /// Infer the media kind from a display name.
    /// There is no allow-list: anything unrecognized is Outro.
    pub fn from_nome(nome: &str) -> Self {
        let extensao = nome.rsplit('.').next().map(|e| e.to_ascii_lowercase());
        match extensao.as_deref() {
            Some("jpg") | Some("jpeg") | Some("png") | Some("webp") | Some("gif") => {
                MediaKind::Imagem
            }
            Some("mkv") | Some("mp4") | Some("avi") | Some("webm") | Some("mov") => {
                MediaKind::Video
            }
            Some("pdf") | Some("doc") | Some("docx") | Some("ppt") | Some("pptx")
            | Some("txt") => MediaKind::Documento,
            _ => MediaKind::Outro,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Imagem => write!(f, "imagem"),
            MediaKind::Video => write!(f, "video"),
            MediaKind::Documento => write!(f, "documento"),
            MediaKind::Outro => write!(f, "outro"),
        }
    }
}

/// Represents a user-selected binary asset attached to a draft.
///
/// The bytes are owned exclusively by the reference. The preview handle is
/// acquired lazily on first display and travels with the reference: when
/// the reference is replaced or discarded, the handle drops and the
/// registry entry is released.
#[derive(Debug)]
pub struct AssetRef {
    /// Content-derived identifier (stable for identical bytes)
    pub id: Uuid,

    /// Display name from the selection
    pub nome: String,

    /// Media kind inferred from the name
    pub tipo: MediaKind,

    /// Size in bytes
    pub tamanho: u64,

    /// SHA256 of the content, hex encoded
    pub hash: String,

    /// The raw content
    pub dados: Vec<u8>,

    previa: Option<PreviewHandle>,
}

impl AssetRef {
    /// Attach a selected binary, hashing its content.
    /// No preview exists yet; it is acquired on first display.
    pub fn new(origem: AssetSource) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(&origem.dados);
        let hash = format!("{:x}", hasher.finalize());

        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, hash.as_bytes()),
            tipo: MediaKind::from_nome(&origem.nome),
            tamanho: origem.dados.len() as u64,
            hash,
            nome: origem.nome,
            dados: origem.dados,
            previa: None,
        }
    }

    /// The preview handle, acquiring it on first call.
    /// Subsequent calls return the same handle until the reference is
    /// replaced or `discard_preview` is called.
    pub fn preview(&mut self, registry: &PreviewRegistry) -> &PreviewHandle {
        if self.previa.is_none() {
            self.previa = Some(registry.acquire(self.id, &self.nome));
        }
        self.previa.as_ref().unwrap()
    }

    /// The preview URL, if a preview has been acquired
    pub fn preview_url(&self) -> Option<&str> {
        self.previa.as_ref().map(PreviewHandle::url)
    }

    /// Release the preview handle. Any surface holding the old URL is
    /// stale and must re-request a preview.
    pub fn discard_preview(&mut self) {
        self.previa = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_attach_hashes_content() {
        let a = AssetRef::new(AssetSource::from_bytes("thumb.png", vec![1, 2, 3]));
        let b = AssetRef::new(AssetSource::from_bytes("other.png", vec![1, 2, 3]));

        assert_eq!(a.hash, b.hash);
        assert_eq!(a.id, b.id); // content-derived identity
        assert_eq!(a.tamanho, 3);
        assert!(a.preview_url().is_none());
    }

    #[test]
    fn test_media_kind_from_nome() {
        assert_eq!(MediaKind::from_nome("capa.PNG"), MediaKind::Imagem);
        assert_eq!(MediaKind::from_nome("aula.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_nome("apostila.pdf"), MediaKind::Documento);
        assert_eq!(MediaKind::from_nome("arquivo.xyz"), MediaKind::Outro);
        assert_eq!(MediaKind::from_nome("sem_extensao"), MediaKind::Outro);
    }

    #[test]
    fn test_preview_is_stable_until_discard() {
        let registry = PreviewRegistry::new();
        let mut asset = AssetRef::new(AssetSource::from_bytes("thumb.png", vec![7]));

        let primeiro = asset.preview(&registry).id();
        let segundo = asset.preview(&registry).id();
        assert_eq!(primeiro, segundo);
        assert_eq!(registry.live_count(), 1);

        asset.discard_preview();
        assert_eq!(registry.live_count(), 0);
        assert!(asset.preview_url().is_none());

        // A new display acquires a fresh handle
        let terceiro = asset.preview(&registry).id();
        assert_ne!(primeiro, terceiro);
    }

    #[test]
    fn test_dropping_asset_releases_preview() {
        let registry = PreviewRegistry::new();
        let mut asset = AssetRef::new(AssetSource::from_bytes("thumb.png", vec![7]));
        asset.preview(&registry);
        assert_eq!(registry.live_count(), 1);

        drop(asset);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_from_path_reads_selected_file() {
        let mut arquivo = tempfile::NamedTempFile::with_suffix(".png").unwrap();
        arquivo.write_all(b"conteudo").unwrap();

        let origem = AssetSource::from_path(arquivo.path()).unwrap();
        assert_eq!(origem.dados, b"conteudo");
        assert!(origem.nome.ends_with(".png"));

        let asset = AssetRef::new(origem);
        assert_eq!(asset.tipo, MediaKind::Imagem);
    }

    #[test]
    fn test_unreadable_path_is_an_error_not_a_panic() {
        let resultado = AssetSource::from_path(Path::new("/nao/existe/arquivo.png"));
        assert!(resultado.is_err());
    }
}
