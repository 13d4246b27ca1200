use regex::Regex;

use crate::errors::{AppError, AppResult};

pub struct InputValidator;

impl InputValidator {
    /// A URL extracted from a hosting-service response must look like a real
    /// public http(s) URL before it is shown to the user.
    pub fn validate_public_url(url: &str) -> AppResult<()> {
        let trimmed = url.trim();

        if trimmed.is_empty() {
            return Err(AppError::validation("url", "URL cannot be empty"));
        }

        if trimmed.len() > 2048 {
            return Err(AppError::validation("url", "URL too long"));
        }

        let url_pattern =
            Regex::new(r"^https?://[A-Za-z0-9][A-Za-z0-9\.\-]*(?::\d{1,5})?(?:/\S*)?$").unwrap();

        if !url_pattern.is_match(trimmed) {
            return Err(AppError::validation("url", "Not a valid http(s) URL"));
        }

        Ok(())
    }

    pub fn sanitize_filename(filename: &str) -> String {
        // Remove or replace unsafe characters in filenames
        let unsafe_chars = Regex::new(r#"[<>:"/\\|?*\x00-\x1f]"#).unwrap();
        let sanitized = unsafe_chars.replace_all(filename.trim(), "_");

        // Limit length
        if sanitized.len() > 255 {
            format!("{}...", &sanitized[..252])
        } else {
            sanitized.to_string()
        }
    }

    /// Escape text interpolated into notices; the templates carry HTML markup
    /// that the chat client renders.
    pub fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_public_url_accepts_hosting_urls() {
        assert!(InputValidator::validate_public_url("https://files.catbox.moe/abc123.txt").is_ok());
        assert!(InputValidator::validate_public_url("https://kappa.lol/x7Yz").is_ok());
        assert!(InputValidator::validate_public_url("http://127.0.0.1:8080/file.bin").is_ok());
        assert!(InputValidator::validate_public_url("  https://0x0.st/abc.png \n").is_ok());
    }

    #[test]
    fn test_validate_public_url_rejects_garbage() {
        assert!(InputValidator::validate_public_url("").is_err());
        assert!(InputValidator::validate_public_url("No files given").is_err());
        assert!(InputValidator::validate_public_url("ftp://example.com/file").is_err());
        assert!(InputValidator::validate_public_url("https://").is_err());
        assert!(InputValidator::validate_public_url("https://host with spaces/x").is_err());
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(
            InputValidator::sanitize_filename("my report.pdf"),
            "my report.pdf"
        );
        let sanitized = InputValidator::sanitize_filename("bad<name>:\"with/chars\\|?*.txt");
        assert!(!sanitized.contains('<'));
        assert!(!sanitized.contains('/'));
        assert!(!sanitized.contains('\\'));

        let long_name = "a".repeat(300);
        assert!(InputValidator::sanitize_filename(&long_name).len() <= 255);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            InputValidator::escape_html("error sending request for url (<secret>)"),
            "error sending request for url (&lt;secret&gt;)"
        );
        assert_eq!(InputValidator::escape_html("a&b"), "a&amp;b");
        assert_eq!(
            InputValidator::escape_html("https://x0.at/abc"),
            "https://x0.at/abc"
        );
    }
}
