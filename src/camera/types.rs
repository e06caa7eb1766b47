//! Camera types and data structures.

use std::fmt;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// A captured camera frame.
///
/// Pixel data is always tightly packed RGB, row-major, at the resolution
/// the device delivered.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data in RGB format
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Position of this frame in its session's capture order, starting at 1
    pub sequence: u64,
}

impl Frame {
    /// Bytes per pixel in `data`.
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Build a frame from packed RGB data.
    ///
    /// Returns `None` when `data` is shorter than `width * height * 3`.
    pub fn from_rgb(data: Vec<u8>, width: u32, height: u32, sequence: u64) -> Option<Self> {
        let expected = width as usize * height as usize * Self::BYTES_PER_PIXEL;
        if data.len() < expected {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
            sequence,
        })
    }

    /// Whether the frame holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }

    /// RGB triple at (x, y), or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        self.data
            .get(idx..idx + Self::BYTES_PER_PIXEL)
            .map(|p| [p[0], p[1], p[2]])
    }
}

/// Errors that can occur during camera operations.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    /// The device could not be opened: not present, in use, or access denied
    #[error("Camera device {index} is unavailable: {reason}")]
    DeviceUnavailable { index: u32, reason: String },
    /// Failed to query camera devices
    #[error("Failed to query cameras: {0}")]
    QueryFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_info_display() {
        let info = CameraInfo {
            index: 0,
            name: "Test Camera".to_string(),
            description: "Built-in".to_string(),
        };
        assert_eq!(format!("{}", info), "[0] Test Camera (Built-in)");
    }

    #[test]
    fn test_frame_from_rgb_rejects_short_buffer() {
        assert!(Frame::from_rgb(vec![0; 5], 2, 1, 1).is_none());
        assert!(Frame::from_rgb(vec![0; 6], 2, 1, 1).is_some());
    }

    #[test]
    fn test_frame_pixel_lookup() {
        let frame = Frame::from_rgb(vec![1, 2, 3, 4, 5, 6], 2, 1, 7).unwrap();
        assert_eq!(frame.pixel(0, 0), Some([1, 2, 3]));
        assert_eq!(frame.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(frame.pixel(2, 0), None);
        assert_eq!(frame.pixel(0, 1), None);
        assert_eq!(frame.sequence, 7);
    }

    #[test]
    fn test_frame_is_empty() {
        let frame = Frame::from_rgb(Vec::new(), 0, 0, 1).unwrap();
        assert!(frame.is_empty());
    }

    #[test]
    fn test_camera_error_display() {
        let err = CameraError::DeviceUnavailable {
            index: 3,
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Camera device 3 is unavailable: permission denied"
        );

        let err = CameraError::QueryFailed("backend missing".to_string());
        assert_eq!(err.to_string(), "Failed to query cameras: backend missing");
    }
}
