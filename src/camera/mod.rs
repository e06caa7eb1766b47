//! Camera access: device enumeration and capture sessions.
//!
//! - Device enumeration via [`list_devices`]
//! - Frame capture via [`CaptureSession`]

mod device;
mod session;
mod types;

pub use device::list_devices;
pub use session::CaptureSession;
pub use types::{CameraError, CameraInfo, Frame};
