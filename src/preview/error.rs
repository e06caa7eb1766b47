//! Preview loop error types.

use std::io;

use crate::camera::CameraError;

/// Exit status when the camera cannot be opened.
pub const EXIT_DEVICE_UNAVAILABLE: i32 = -1;
/// Exit status for every other fatal error.
pub const EXIT_FAILURE: i32 = 1;

/// Fatal outcomes of a preview run.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The camera could not be opened; nothing was acquired
    #[error(transparent)]
    DeviceUnavailable(#[from] CameraError),
    /// The open device stopped delivering frames
    #[error("Camera stopped delivering frames after {rendered} frame(s)")]
    FrameRead { rendered: u64 },
    /// Drawing to the display or polling for input failed
    #[error("Display error: {0}")]
    Display(#[from] io::Error),
}

impl PreviewError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PreviewError::DeviceUnavailable(_) => EXIT_DEVICE_UNAVAILABLE,
            PreviewError::FrameRead { .. } | PreviewError::Display(_) => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = PreviewError::from(CameraError::DeviceUnavailable {
            index: 0,
            reason: "not found".to_string(),
        });
        assert_eq!(err.exit_code(), -1);
        assert_eq!(PreviewError::FrameRead { rendered: 5 }.exit_code(), 1);
        let err = PreviewError::from(io::Error::other("broken pipe"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_device_unavailable_message_is_transparent() {
        let err = PreviewError::from(CameraError::DeviceUnavailable {
            index: 0,
            reason: "not found".to_string(),
        });
        assert_eq!(err.to_string(), "Camera device 0 is unavailable: not found");
    }

    #[test]
    fn test_frame_read_message() {
        assert_eq!(
            PreviewError::FrameRead { rendered: 5 }.to_string(),
            "Camera stopped delivering frames after 5 frame(s)"
        );
    }
}
