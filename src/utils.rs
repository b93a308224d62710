//! Utility functions for presentation, logging, and file system checks.
//!
//! - Section-name abbreviation used when rendering articles
//! - String truncation for log fields
//! - Output directory validation for the JSON export

use std::borrow::Cow;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Marker that triggers abbreviation of a section name.
const GUARDIAN_KEYWORD: &str = "Guardian ";

/// Abbreviate the "Guardian" word in a section name.
///
/// If `section` contains `"Guardian "`, the result is `"G. "` followed by
/// everything after the first occurrence; text before the keyword is dropped.
/// Names without the keyword are returned unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(abbreviate_section_name("Guardian Technology"), "G. Technology");
/// assert_eq!(abbreviate_section_name("Sport"), "Sport");
/// ```
pub fn abbreviate_section_name(section: &str) -> Cow<'_, str> {
    match section.split_once(GUARDIAN_KEYWORD) {
        Some((_, rest)) => Cow::Owned(format!("G. {rest}")),
        None => Cow::Borrowed(section),
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a character boundary) with
/// an ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
