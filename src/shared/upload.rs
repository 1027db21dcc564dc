use std::path::Path;

/// A file picked by the user, ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing the content type from its extension.
    /// Unknown extensions are sent as `application/octet-stream`.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("Arquivo vazio")]
    EmptyFile,

    #[error("Arquivo muito grande: {actual} bytes (máximo {max} bytes)")]
    TooLarge { max: u64, actual: u64 },

    #[error("Tipo de arquivo não permitido: {0}")]
    UnsupportedType(String),
}

/// Client-side checks run by callers before an upload is issued.
/// `ApiService` itself never validates files.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const IMAGE_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/svg+xml"];
    pub const MEDIA_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/png",
        "image/webp",
        "video/mp4",
        "video/webm",
    ];
    pub const DOCUMENT_MIME_TYPES: &'static [&'static str] = &[
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ];

    /// Logos, banners and background images.
    pub fn image() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            allowed_mime_types: Self::IMAGE_MIME_TYPES,
        }
    }

    /// Testimonial media (image or video).
    pub fn media() -> Self {
        Self {
            max_file_size_bytes: 50 * 1024 * 1024,
            allowed_mime_types: Self::MEDIA_MIME_TYPES,
        }
    }

    /// CVs attached to job applications.
    pub fn document() -> Self {
        Self {
            max_file_size_bytes: 10 * 1024 * 1024,
            allowed_mime_types: Self::DOCUMENT_MIME_TYPES,
        }
    }

    pub fn check(&self, file: &UploadFile) -> Result<(), UploadPolicyError> {
        if file.bytes.is_empty() {
            return Err(UploadPolicyError::EmptyFile);
        }

        if file.size() > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge {
                max: self.max_file_size_bytes,
                actual: file.size(),
            });
        }

        let content_type = file.content_type.to_ascii_lowercase();
        if !self
            .allowed_mime_types
            .iter()
            .any(|allowed| *allowed == content_type)
        {
            return Err(UploadPolicyError::UnsupportedType(file.content_type.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(content_type: &str, size: usize) -> UploadFile {
        UploadFile::new("logo.png", content_type, vec![0u8; size])
    }

    #[test]
    fn accepts_small_images() {
        assert!(UploadPolicy::image().check(&file("image/png", 1024)).is_ok());
    }

    #[test]
    fn rejects_oversized_files() {
        let result = UploadPolicy::image().check(&file("image/png", 5 * 1024 * 1024 + 1));
        assert!(matches!(result, Err(UploadPolicyError::TooLarge { .. })));
    }

    #[test]
    fn rejects_disallowed_types() {
        let result = UploadPolicy::image().check(&file("video/mp4", 10));
        assert_eq!(
            result,
            Err(UploadPolicyError::UnsupportedType("video/mp4".to_string()))
        );
    }

    #[test]
    fn rejects_empty_files() {
        let result = UploadPolicy::document().check(&file("application/pdf", 0));
        assert_eq!(result, Err(UploadPolicyError::EmptyFile));
    }

    #[test]
    fn media_policy_allows_video() {
        assert!(UploadPolicy::media().check(&file("video/mp4", 2048)).is_ok());
    }

    #[test]
    fn from_path_guesses_content_type_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let cases = [
            ("CV.PDF", "application/pdf"),
            ("photo.jpeg", "image/jpeg"),
            ("README", "application/octet-stream"),
        ];

        for (name, expected) in cases {
            let path = dir.path().join(name);
            std::fs::write(&path, b"x").unwrap();

            let upload = UploadFile::from_path(&path).unwrap();

            assert_eq!(upload.content_type, expected, "content type for {}", name);
        }
    }

    #[test]
    fn from_path_reads_bytes_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.webp");
        std::fs::write(&path, b"RIFF").unwrap();

        let upload = UploadFile::from_path(&path).unwrap();

        assert_eq!(upload.file_name, "banner.webp");
        assert_eq!(upload.content_type, "image/webp");
        assert_eq!(upload.size(), 4);
    }
}
