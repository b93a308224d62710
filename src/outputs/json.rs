//! JSON export of a fetched article list.
//!
//! Files are organized by date, one file per run named after the local time:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     └── 08-00-00.json
//! ```

use crate::models::Headlines;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`Headlines`] export under `json_output_dir`.
///
/// The file path is `{json_output_dir}/{local_date}/{HH-MM-SS}.json`, taken
/// from the first eight characters of `local_time` with `:` replaced.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns an error if serialization, directory creation or the write fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_headlines(
    headlines: &Headlines,
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(headlines)?;

    let full_json_dir = PathBuf::from(json_output_dir).join(&headlines.local_date);
    info!(full_json_dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(full_json_dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let stamp: String = headlines
        .local_time
        .chars()
        .take(8)
        .map(|c| if c == ':' { '-' } else { c })
        .collect();
    let output_json_filename = full_json_dir.join(format!("{stamp}.json"));

    fs::write(&output_json_filename, json).await?;
    info!(
        path = %output_json_filename.display(),
        count = headlines.articles.len(),
        "Wrote JSON export"
    );

    Ok(output_json_filename)
}
