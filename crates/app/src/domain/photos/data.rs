//! Photo data.

use crate::domain::photos::errors::PhotosError;

/// Image formats accepted for profile photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoContentType {
    Jpeg,
    Png,
    Webp,
}

impl PhotoContentType {
    /// Recognise an uploaded file's MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`PhotosError::UnsupportedContentType`] for anything but
    /// JPEG, PNG or WebP.
    pub fn from_mime(mime: &str) -> Result<Self, PhotosError> {
        let essence = mime.split(';').next().unwrap_or_default().trim();

        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            "image/webp" => Ok(Self::Webp),
            _ => Err(PhotosError::UnsupportedContentType(mime.to_owned())),
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }
}

/// New Photo
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A photo written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPhoto {
    pub file_name: String,

    /// Public path to store in a profile's `photo_ref`.
    pub photo_ref: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_types() {
        assert_eq!(PhotoContentType::from_mime("image/jpeg").ok(), Some(PhotoContentType::Jpeg));
        assert_eq!(PhotoContentType::from_mime("image/jpg").ok(), Some(PhotoContentType::Jpeg));
        assert_eq!(PhotoContentType::from_mime("IMAGE/PNG").ok(), Some(PhotoContentType::Png));
        assert_eq!(
            PhotoContentType::from_mime("image/webp; charset=binary").ok(),
            Some(PhotoContentType::Webp)
        );
    }

    #[test]
    fn rejects_other_types() {
        for mime in ["image/gif", "application/pdf", "text/plain", ""] {
            assert!(
                matches!(
                    PhotoContentType::from_mime(mime),
                    Err(PhotosError::UnsupportedContentType(_))
                ),
                "{mime:?} should be rejected"
            );
        }
    }
}
