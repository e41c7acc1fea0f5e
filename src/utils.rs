// src/utils.rs
use anyhow::Result;
use std::path::Path;

use crate::core::FsOps;

/// Extensions accepted for resume files
pub const RESUME_EXTENSIONS: &[&str] = &["txt", "md", "text"];

/// Outcome of validating resume text before analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCheck {
    Ok,
    /// Analysis proceeds but the result is unreliable
    TooShort { chars: usize, threshold: usize },
}

/// Reject empty text and flag text shorter than `threshold` characters.
///
/// Returns the trimmed text that should be analysed.
pub fn validate_resume_text(text: &str, threshold: usize) -> Result<(&str, TextCheck)> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Please enter or upload resume text");
    }

    let chars = trimmed.chars().count();
    let check = if chars < threshold {
        TextCheck::TooShort { chars, threshold }
    } else {
        TextCheck::Ok
    };
    Ok((trimmed, check))
}

/// Validate file extension against allowed types
pub fn validate_file_extension(path: &Path, allowed: &[&str]) -> Result<()> {
    let ext = FsOps::get_extension(path)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", path.display()))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}

/// Pad or cut `value` to exactly `width` characters for table output
pub fn fit_column(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count > width {
        let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", value, " ".repeat(width - count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_resume_text_rejects_blank() {
        assert!(validate_resume_text("", 100).is_err());
        let err = validate_resume_text("  \n\t ", 100).unwrap_err();
        assert_eq!(err.to_string(), "Please enter or upload resume text");
    }

    #[test]
    fn test_validate_resume_text_warns_when_short() {
        let (text, check) = validate_resume_text("  Senior engineer \n", 100).unwrap();
        assert_eq!(text, "Senior engineer");
        assert_eq!(
            check,
            TextCheck::TooShort {
                chars: 15,
                threshold: 100
            }
        );
    }

    #[test]
    fn test_validate_resume_text_accepts_long_text() {
        let long = "a".repeat(100);
        let (_, check) = validate_resume_text(&long, 100).unwrap();
        assert_eq!(check, TextCheck::Ok);
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.txt"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("CV.MD"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("cv.pdf"), RESUME_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("noext"), RESUME_EXTENSIONS).is_err());
    }

    #[test]
    fn test_fit_column() {
        assert_eq!(fit_column("Tech", 6), "Tech  ");
        assert_eq!(fit_column("Emotional Stability", 10), "Emotional…");
        assert_eq!(fit_column("", 2), "  ");
    }
}
