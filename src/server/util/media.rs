//! Image storage for train and crew photos.
//!
//! Uploads are recognised by their leading bytes rather than by the client-supplied file
//! name or content type, then written below `MEDIA_ROOT/uploads/`. The stored path is
//! relative to the media root and is served under `/media`.

use std::path::{Path, PathBuf};

use rand::{distr::Alphanumeric, Rng};

use crate::server::error::{validation::ValidationError, AppError};

/// URL prefix under which the media root is served.
pub const MEDIA_URL: &str = "/media";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
}

impl ImageFormat {
    /// Detects the format from the file signature.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(Self::Png),
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some(Self::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(Self::WebP),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::WebP => "webp",
        }
    }
}

/// Which entity an image belongs to; selects the upload directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Train,
    Crew,
}

impl MediaKind {
    fn directory(self) -> &'static str {
        match self {
            Self::Train => "trains",
            Self::Crew => "crew",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validates and writes an uploaded image.
    ///
    /// # Arguments
    /// - `kind` - Entity the image belongs to
    /// - `name` - Display name of the entity, used to build a readable file name
    /// - `bytes` - Raw upload
    ///
    /// # Returns
    /// - `Ok(String)` - Path of the stored file relative to the media root
    /// - `Err(AppError::ValidationErr(InvalidImage))` - Upload is empty or not a supported image
    /// - `Err(AppError::IoErr)` - Failed to create the directory or write the file
    pub async fn save_image(
        &self,
        kind: MediaKind,
        name: &str,
        bytes: &[u8],
    ) -> Result<String, AppError> {
        if bytes.is_empty() {
            return Err(ValidationError::InvalidImage("The submitted file is empty.".to_string()).into());
        }

        let format = ImageFormat::detect(bytes).ok_or_else(|| {
            ValidationError::InvalidImage(
                "The file you uploaded was either not an image or a corrupted image.".to_string(),
            )
        })?;

        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();

        let relative = format!(
            "uploads/{}/{}-{}.{}",
            kind.directory(),
            slugify(name),
            suffix.to_lowercase(),
            format.extension()
        );

        let path = self.root.join(&relative);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        tracing::debug!("Stored {:?} image at {}", format, path.display());

        Ok(relative)
    }

    /// Deletes a previously stored file. A file that is already gone is not an error.
    pub async fn remove(&self, relative: &str) -> Result<(), AppError> {
        match tokio::fs::remove_file(self.root.join(relative)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a freshly stored file after the write that referenced it failed.
    ///
    /// Returns `cause` unchanged; a failed removal is only logged.
    pub async fn discard(&self, relative: &str, cause: AppError) -> AppError {
        if let Err(e) = self.remove(relative).await {
            tracing::warn!("Failed to remove orphaned image {}: {}", relative, e);
        }

        cause
    }
}

/// Public URL of a stored media path.
pub fn public_url(relative: &str) -> String {
    format!("{}/{}", MEDIA_URL, relative)
}

/// Lowercase ASCII slug: alphanumerics kept, every other run collapsed into one `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "image".to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn detects_supported_formats() {
        assert_eq!(ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::detect(PNG_HEADER), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::detect(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::detect(b"RIFF\x10\0\0\0WEBPVP8 "), Some(ImageFormat::WebP));
    }

    #[test]
    fn rejects_non_images() {
        assert_eq!(ImageFormat::detect(b"not an image"), None);
        assert_eq!(ImageFormat::detect(&[]), None);
    }

    #[test]
    fn slugifies_names() {
        assert_eq!(slugify("Intercity+ 743"), "intercity-743");
        assert_eq!(slugify("  John  Doe "), "john-doe");
        assert_eq!(slugify("***"), "image");
    }

    #[tokio::test]
    async fn saves_image_below_kind_directory() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = MediaStore::new(dir.path());

        let relative = store.save_image(MediaKind::Train, "Hyundai Rotem", PNG_HEADER).await?;

        assert!(relative.starts_with("uploads/trains/hyundai-rotem-"));
        assert!(relative.ends_with(".png"));
        assert_eq!(tokio::fs::read(dir.path().join(&relative)).await?, PNG_HEADER);

        store.remove(&relative).await?;
        assert!(!dir.path().join(&relative).exists());

        // Removing twice is fine.
        store.remove(&relative).await?;

        Ok(())
    }

    #[tokio::test]
    async fn discard_keeps_the_original_error_when_cleanup_fails() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = MediaStore::new(dir.path());
        // A directory in place of the file makes `remove_file` fail.
        let relative = "uploads/trains/stuck.png";
        tokio::fs::create_dir_all(dir.path().join(relative)).await?;

        let err = store
            .discard(relative, AppError::NotFound("Train not found".to_string()))
            .await;

        assert!(matches!(err, AppError::NotFound(message) if message == "Train not found"));
        assert!(store.remove(relative).await.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn refuses_to_store_text_files() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = MediaStore::new(dir.path());

        let result = store.save_image(MediaKind::Crew, "John", b"hello").await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::InvalidImage(_)))
        ));
        Ok(())
    }
}
