//! Camera device enumeration.

use nokhwa::query;
use nokhwa::utils::ApiBackend;

use super::types::{CameraError, CameraInfo};

/// List all available camera devices on the system.
///
/// If no cameras are found, returns an empty vector (not an error).
pub fn list_devices() -> Result<Vec<CameraInfo>, CameraError> {
    let devices = query(ApiBackend::Auto).map_err(|e| CameraError::QueryFailed(e.to_string()))?;
    log::debug!("Found {} camera device(s)", devices.len());

    Ok(devices
        .into_iter()
        .filter_map(|d| {
            // Skip devices addressed by path/string only; the CLI selects by number.
            let index = d.index().as_index().ok()?;
            Some(CameraInfo {
                index,
                name: d.human_name(),
                description: d.description().to_string(),
            })
        })
        .collect())
}
