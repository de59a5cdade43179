//! Frame buffers and depth conversions.

use std::iter::zip;

use crate::device::{Resolution, SensorInfo};
use crate::error::{Error, Result};

/// One 8-bit BGRA color frame.
#[derive(Debug, Clone)]
pub struct ColorFrame {
    pub resolution: Resolution,
    pub bytes_per_pixel: u32,
    pub data: Vec<u8>,
}
impl ColorFrame {
    /// Allocates a zeroed buffer matching `resolution`.
    pub fn new(resolution: Resolution, bytes_per_pixel: u32) -> Self {
        let len = resolution.to_pixel_count() * bytes_per_pixel as usize;
        Self {
            resolution,
            bytes_per_pixel,
            data: vec![0; len],
        }
    }

    pub fn expected_len(&self) -> usize {
        self.resolution.to_pixel_count() * self.bytes_per_pixel as usize
    }

    pub(crate) fn check_len(&self) -> Result<()> {
        if self.data.len() != self.expected_len() {
            return Err(Error::BufferSize {
                expected: self.expected_len(),
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

/// One 16-bit depth frame, samples in mm.
#[derive(Debug, Clone)]
pub struct DepthFrame {
    pub resolution: Resolution,
    pub data: Vec<u16>,
}
impl DepthFrame {
    /// Allocates a zeroed buffer matching `resolution`.
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            data: vec![0; resolution.to_pixel_count()],
        }
    }

    pub(crate) fn check_len(&self) -> Result<()> {
        let expected = self.resolution.to_pixel_count();
        if self.data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

/// Caller-owned buffers one acquire copies into.
#[derive(Debug, Clone)]
pub struct FrameSet {
    pub color: ColorFrame,
    pub depth: DepthFrame,
}
impl FrameSet {
    /// Allocates buffers matching the device geometry in `info`.
    pub fn for_camera(info: &SensorInfo) -> Self {
        Self {
            color: ColorFrame::new(info.color, info.color_bytes_per_pixel),
            depth: DepthFrame::new(info.depth),
        }
    }
}

/// Which streams delivered a new frame during the last acquire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReady {
    pub color: bool,
    pub depth: bool,
}
impl FrameReady {
    pub const fn none() -> Self {
        Self {
            color: false,
            depth: false,
        }
    }
    pub const fn both() -> Self {
        Self {
            color: true,
            depth: true,
        }
    }
    pub fn any(&self) -> bool {
        self.color || self.depth
    }
}

/// Rescales one depth sample to 8 bit. Samples below `min_mm` map to 0,
/// samples at or above `max_mm` map to 255, values in between scale linearly.
pub fn normalize_sample(depth_mm: u16, min_mm: u16, max_mm: u16) -> u8 {
    if depth_mm < min_mm {
        0
    } else if depth_mm >= max_mm {
        255
    } else {
        let span = (max_mm - min_mm) as f32;
        ((depth_mm - min_mm) as f32 * 255.0 / span).floor() as u8
    }
}

/// Converts 16-bit depth samples into an 8-bit grayscale image using the
/// display range `min_mm..max_mm`.
pub fn normalize_depth(depth: &[u16], min_mm: u16, max_mm: u16, out: &mut [u8]) {
    for (oi, di) in zip(out, depth) {
        *oi = normalize_sample(*di, min_mm, max_mm);
    }
}

/// Creates u16 depth samples from the little-endian byte buffer delivered by
/// the sensor.
pub fn depth_from_le_bytes(bytes: &[u8], out: &mut [u16]) {
    for (oi, bi) in zip(out, bytes.chunks_exact(2)) {
        *oi = u16::from_le_bytes([bi[0], bi[1]]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Resolution;

    #[test]
    fn normalize_clamps_below_min() {
        assert_eq!(normalize_sample(100, 600, 3000), 0);
        assert_eq!(normalize_sample(599, 600, 3000), 0);
    }

    #[test]
    fn normalize_clamps_at_and_above_max() {
        assert_eq!(normalize_sample(3000, 600, 3000), 255);
        assert_eq!(normalize_sample(65535, 600, 3000), 255);
    }

    #[test]
    fn normalize_is_linear_in_between() {
        assert_eq!(normalize_sample(600, 600, 3000), 0);
        // midpoint of 600..3000 is 1800, (1200 * 255 / 2400) = 127.5
        assert_eq!(normalize_sample(1800, 600, 3000), 127);
        assert_eq!(normalize_sample(2999, 600, 3000), 254);
    }

    #[test]
    fn normalize_degenerate_range() {
        // min == max: everything is either below or at the far bound
        assert_eq!(normalize_sample(999, 1000, 1000), 0);
        assert_eq!(normalize_sample(1000, 1000, 1000), 255);
    }

    #[test]
    fn normalize_full_slice() {
        let depth = [0u16, 600, 1800, 3000, 5000];
        let mut out = [0u8; 5];
        normalize_depth(&depth, 600, 3000, &mut out);
        assert_eq!(out, [0, 0, 127, 255, 255]);
    }

    #[test]
    fn depth_samples_from_le_byte_pairs() {
        let bytes = [0x00, 0x00, 0x34, 0x12, 0xff, 0xff];
        let mut out = [0u16; 3];
        depth_from_le_bytes(&bytes, &mut out);
        assert_eq!(out, [0, 0x1234, 65535]);
    }

    #[test]
    fn frame_set_matches_geometry() {
        let info = SensorInfo {
            color: Resolution::new(4, 2),
            color_bytes_per_pixel: 4,
            depth: Resolution::new(2, 2),
            min_depth_mm: 500,
            max_depth_mm: 3860,
            serial: "test".into(),
        };
        let frames = FrameSet::for_camera(&info);
        assert_eq!(frames.color.data.len(), 4 * 2 * 4);
        assert_eq!(frames.depth.data.len(), 4);
        assert!(frames.color.check_len().is_ok());
        assert!(frames.depth.check_len().is_ok());
    }

    #[test]
    fn undersized_buffer_is_rejected() {
        let mut frame = DepthFrame::new(Resolution::new(4, 4));
        frame.data.truncate(3);
        assert!(frame.check_len().is_err());
    }
}
