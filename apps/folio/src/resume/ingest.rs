use std::path::Path;

use tracing::{debug, info};

use crate::errors::AppError;

/// Loads resume text from disk. PDFs go through `pdf-extract`; anything else is read as UTF-8.
pub fn load_resume_text(path: &Path) -> Result<String, AppError> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    let text = if is_pdf {
        info!("Extracting resume text from PDF {}", path.display());
        pdf_extract::extract_text(path).map_err(|e| {
            AppError::InvalidInput(format!(
                "could not extract text from {}: {e:?}",
                path.display()
            ))
        })?
    } else {
        std::fs::read_to_string(path)?
    };

    debug!("Loaded resume: {} chars", text.chars().count());
    Ok(text)
}
