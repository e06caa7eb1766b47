//! Capture session: an open, streaming connection to one camera device.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::{Buffer, Camera};

use super::types::{CameraError, Frame};
use crate::preview::FrameSource;

/// An open camera stream.
///
/// The device is released exactly once: by [`CaptureSession::close`], or by
/// `Drop` if the session is abandoned without being closed.
pub struct CaptureSession {
    camera: Camera,
    device_index: u32,
    /// Sequence number of the last frame handed out
    sequence: u64,
    released: bool,
}

impl std::fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("device_index", &self.device_index)
            .field("sequence", &self.sequence)
            .field("released", &self.released)
            .finish_non_exhaustive()
    }
}

impl CaptureSession {
    /// Open the camera at `device_index` and start its stream.
    ///
    /// # Errors
    /// * `CameraError::DeviceUnavailable` - the device is missing, busy, or access was denied
    pub fn open(device_index: u32) -> Result<Self, CameraError> {
        let index = CameraIndex::Index(device_index);
        let mut camera = open_camera_with_fallback(&index, device_index)?;

        camera
            .open_stream()
            .map_err(|e| unavailable(device_index, &e.to_string()))?;

        let res = camera.resolution();
        log::info!(
            "Opened camera {} ({}) at {}x{} @ {} fps",
            device_index,
            camera.info().human_name(),
            res.width(),
            res.height(),
            camera.frame_rate()
        );

        Ok(Self {
            camera,
            device_index,
            sequence: 0,
            released: false,
        })
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(e) = self.camera.stop_stream() {
            log::warn!("Failed to stop camera {} stream: {}", self.device_index, e);
        }
        log::info!(
            "Released camera {} after {} frame(s)",
            self.device_index,
            self.sequence
        );
    }
}

impl FrameSource for CaptureSession {
    fn is_open(&self) -> bool {
        !self.released && self.camera.is_stream_open()
    }

    fn next_frame(&mut self) -> Option<Frame> {
        if !self.is_open() {
            return None;
        }

        let buffer = match self.camera.frame() {
            Ok(buffer) => buffer,
            Err(e) => {
                log::warn!("Camera {} frame read failed: {}", self.device_index, e);
                return None;
            }
        };

        let frame = convert_to_rgb(&buffer, self.sequence + 1);
        if frame.is_some() {
            self.sequence += 1;
        } else {
            log::warn!(
                "Camera {} delivered a frame that could not be decoded ({:?})",
                self.device_index,
                buffer.source_frame_format()
            );
        }
        frame
    }

    fn close(mut self) {
        self.release();
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.release();
    }
}

/// Decode a nokhwa buffer (MJPEG, YUYV, NV12, ...) into an RGB [`Frame`].
fn convert_to_rgb(buffer: &Buffer, sequence: u64) -> Option<Frame> {
    let decoded = buffer.decode_image::<RgbFormat>().ok()?;
    let (width, height) = (decoded.width(), decoded.height());
    Frame::from_rgb(decoded.into_raw(), width, height, sequence)
}

/// Try to open a camera with format fallbacks.
///
/// The device's own default format comes first so frames arrive as captured
/// natively; the other strategies only matter for drivers that refuse it.
fn open_camera_with_fallback(index: &CameraIndex, device_index: u32) -> Result<Camera, CameraError> {
    let format_attempts = [
        RequestedFormatType::None,
        RequestedFormatType::AbsoluteHighestFrameRate,
        RequestedFormatType::AbsoluteHighestResolution,
    ];

    let mut last_error = String::from("no format accepted");

    for attempt in format_attempts {
        match Camera::new(index.clone(), RequestedFormat::new::<RgbFormat>(attempt)) {
            Ok(cam) => return Ok(cam),
            Err(e) => {
                log::debug!("Camera {} rejected {:?}: {}", device_index, attempt, e);
                last_error = e.to_string();
            }
        }
    }

    Err(unavailable(device_index, &last_error))
}

/// Classify a backend error message as a `DeviceUnavailable` reason.
fn unavailable(device_index: u32, message: &str) -> CameraError {
    CameraError::DeviceUnavailable {
        index: device_index,
        reason: classify_reason(message),
    }
}

fn classify_reason(message: &str) -> String {
    let msg = message.to_lowercase();
    if msg.contains("permission")
        || msg.contains("denied")
        || msg.contains("authorization")
        || msg.contains("access")
    {
        "permission denied".to_string()
    } else if msg.contains("busy") || msg.contains("in use") {
        format!("device busy ({})", message)
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_errors() {
        assert_eq!(classify_reason("Access Denied by OS"), "permission denied");
        assert_eq!(
            classify_reason("camera authorization not determined"),
            "permission denied"
        );
    }

    #[test]
    fn test_classify_busy_errors() {
        assert_eq!(
            classify_reason("Device or resource busy"),
            "device busy (Device or resource busy)"
        );
    }

    #[test]
    fn test_classify_passes_other_messages_through() {
        assert_eq!(classify_reason("no such device"), "no such device");
    }
}
