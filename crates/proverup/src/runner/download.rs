use std::{fs::File, path::Path};

use log::{debug, info};

use super::RunnerError;

/// Fetch `url` into `dest`, unless `dest` already exists.
///
/// The presence of the file is the only idempotence signal: there is no
/// checksum and no freshness check, so an interrupted run can leave a
/// truncated file behind that later runs will trust.
///
/// Returns `true` if a request was actually made.
pub fn conditional_download(url: &str, dest: &Path) -> Result<bool, RunnerError> {
    if dest.is_file() {
        debug!("{dest:?} is already there, not downloading");
        return Ok(false);
    }

    info!("downloading {url} -> {dest:?}");
    let mut response = reqwest::blocking::get(url).map_err(|source| RunnerError::Download {
        url: url.to_string(),
        source,
    })?;

    if !response.status().is_success() {
        return Err(RunnerError::DownloadStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let mut file = File::create(dest)?;
    response
        .copy_to(&mut file)
        .map_err(|source| RunnerError::Download {
            url: url.to_string(),
            source,
        })?;
    debug!("downloaded {url}");
    Ok(true)
}
