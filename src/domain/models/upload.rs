#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;

use std::path;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    Image,
}

impl UploadKind {
    pub fn form_field(&self) -> &'static str {
        match self {
            UploadKind::Pdf => return "pdf",
            UploadKind::Image => return "image",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            UploadKind::Pdf => return "document",
            UploadKind::Image => return "image",
        }
    }
}

/// A file selected for upload. Exists only between selection and request
/// completion.
#[derive(Clone, Debug)]
pub struct PendingUpload {
    pub path: path::PathBuf,
    pub user_message: Option<String>,
}

impl PendingUpload {
    pub fn new(path: &str, user_message: Option<String>) -> PendingUpload {
        return PendingUpload {
            path: path::PathBuf::from(path),
            user_message,
        };
    }

    pub fn file_name(&self) -> String {
        return self
            .path
            .file_name()
            .map(|e| return e.to_string_lossy().to_string())
            .unwrap_or_default();
    }

    fn extension(&self) -> String {
        return self
            .path
            .extension()
            .map(|e| return e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
    }

    pub fn kind(&self) -> UploadKind {
        if IMAGE_EXTENSIONS.contains(&self.extension().as_str()) {
            return UploadKind::Image;
        }
        return UploadKind::Pdf;
    }

    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_str() {
            "jpg" | "jpeg" => return "image/jpeg",
            "png" => return "image/png",
            "gif" => return "image/gif",
            "bmp" => return "image/bmp",
            "webp" => return "image/webp",
            _ => return "application/pdf",
        }
    }
}
