//! The camera interface and backend selection.

use crate::config::{Backend, ViewerConfig};
use crate::error::Result;
use crate::frame::{FrameReady, FrameSet};
use crate::mapper::SpacePoint;

/// Width and height of a sensor stream in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}
impl Resolution {
    pub const fn new(w: u32, h: u32) -> Self {
        Self {
            width: w,
            height: h,
        }
    }
    pub const fn width(&self) -> u32 {
        self.width
    }
    pub const fn height(&self) -> u32 {
        self.height
    }
    pub fn to_array(&self) -> [u32; 2] {
        [self.width, self.height]
    }
    pub fn to_tuple(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    pub const fn to_pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
    /// Resolution multiplied by `factor`, for display windows.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            (self.width as f32 * factor).round() as u32,
            (self.height as f32 * factor).round() as u32,
        )
    }
}

/// Stream geometry and depth measuring range of an opened device.
#[derive(Debug, Clone)]
pub struct SensorInfo {
    pub color: Resolution,
    pub color_bytes_per_pixel: u32,
    pub depth: Resolution,
    /// Reliable measuring range of the depth sensor in mm.
    pub min_depth_mm: u16,
    pub max_depth_mm: u16,
    pub serial: String,
}

/// An RGB-D camera delivering color and depth frames plus the calibrated
/// mapping between the two camera spaces.
pub trait DepthCamera {
    /// Stream dimensions and depth range of the opened device.
    fn info(&self) -> &SensorInfo;

    /// Copies the latest frames into `frames` without blocking. Returns which
    /// streams delivered a new frame; polling faster than the sensor frame
    /// rate is normal and simply yields no new data.
    fn acquire_latest(&mut self, frames: &mut FrameSet) -> Result<FrameReady>;

    /// Computes, for every depth pixel, where it lands in the color image.
    /// `depth` is the current depth frame and `out` has one entry per depth
    /// pixel. Pixels without a depth reading or outside the color sensor's
    /// view are set to `SpacePoint::INVALID`.
    fn map_depth_to_color(&self, depth: &[u16], out: &mut [SpacePoint]) -> Result<()>;

    /// Computes, for every color pixel, where it samples in the depth image.
    /// `depth` is the current depth frame and `out` has one entry per color
    /// pixel. Unmappable pixels are set to `SpacePoint::INVALID`.
    fn map_color_to_depth(&self, depth: &[u16], out: &mut [SpacePoint]) -> Result<()>;

    /// Stops the streams and releases the device.
    fn shut_down(&mut self);
}

/// Opens the camera selected in `config`. When the hardware backend was not
/// compiled in, the synthetic camera is used instead.
pub fn open_camera(config: &ViewerConfig) -> Result<Box<dyn DepthCamera>> {
    match config.backend {
        Backend::Sim => Ok(Box::new(crate::sim::SimCamera::new())),
        #[cfg(feature = "hardware")]
        Backend::K4a => Ok(Box::new(crate::k4a::device::K4aCamera::open_default()?)),
        #[cfg(not(feature = "hardware"))]
        Backend::K4a => {
            tracing::warn!("built without the `hardware` feature, using the synthetic camera");
            Ok(Box::new(crate::sim::SimCamera::new()))
        }
    }
}
