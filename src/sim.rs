//! A deterministic synthetic camera for development and tests without a
//! physical device.
//!
//! The depth image is an animated ramp with a circular hole of missing
//! readings in the middle, the color image is a moving two-axis gradient.
//! The two grids are related by a fixed affine rig model standing in for a
//! real device calibration.

use std::time::{Duration, Instant};

use crate::device::{DepthCamera, Resolution, SensorInfo};
use crate::error::{Error, Result};
use crate::frame::{FrameReady, FrameSet};
use crate::mapper::SpacePoint;

pub const COLOR_RESOLUTION: Resolution = Resolution::new(1280, 720);
pub const DEPTH_RESOLUTION: Resolution = Resolution::new(640, 576);
/// Measuring range reported by the synthetic sensor, in mm.
pub const DEPTH_RANGE_MM: (u16, u16) = (500, 3860);

// the synthetic rig: color = depth * SCALE + PARALLAX (x only)
const SCALE_X: f32 = COLOR_RESOLUTION.width() as f32 / DEPTH_RESOLUTION.width() as f32;
const SCALE_Y: f32 = COLOR_RESOLUTION.height() as f32 / DEPTH_RESOLUTION.height() as f32;
const PARALLAX_PX: f32 = 16.0;

/// Radius of the zero-depth hole in the middle of the depth image.
const HOLE_RADIUS: i64 = 48;

pub struct SimCamera {
    info: SensorInfo,
    frame_interval: Duration,
    last_frame: Option<Instant>,
    tick: u32,
    closed: bool,
}

impl SimCamera {
    pub fn new() -> Self {
        Self::with_frame_interval(Duration::ZERO)
    }

    /// A camera that only delivers a new frame once per `frame_interval`;
    /// polls in between yield no new data, like a real sensor outpaced by
    /// the display loop.
    pub fn with_frame_interval(frame_interval: Duration) -> Self {
        Self {
            info: SensorInfo {
                color: COLOR_RESOLUTION,
                color_bytes_per_pixel: 4,
                depth: DEPTH_RESOLUTION,
                min_depth_mm: DEPTH_RANGE_MM.0,
                max_depth_mm: DEPTH_RANGE_MM.1,
                serial: "synthetic-0".to_string(),
            },
            frame_interval,
            last_frame: None,
            tick: 0,
            closed: false,
        }
    }

    fn depth_at(&self, x: u32, y: u32) -> u16 {
        let (w, h) = DEPTH_RESOLUTION.to_tuple();

        // no reading inside the hole
        let dx = x as i64 - w as i64 / 2;
        let dy = y as i64 - h as i64 / 2;
        if dx * dx + dy * dy < HOLE_RADIUS * HOLE_RADIUS {
            return 0;
        }

        let (min, max) = DEPTH_RANGE_MM;
        let span = (max - min) as u32;
        min + ((self.tick.wrapping_mul(4).wrapping_add(x) % w) * span / w) as u16
    }

    fn fill_frames(&self, frames: &mut FrameSet) {
        let (dw, _) = DEPTH_RESOLUTION.to_tuple();
        for (i, di) in frames.depth.data.iter_mut().enumerate() {
            *di = self.depth_at(i as u32 % dw, i as u32 / dw);
        }

        let (cw, ch) = COLOR_RESOLUTION.to_tuple();
        for (i, ci) in frames.color.data.chunks_exact_mut(4).enumerate() {
            let x = i as u32 % cw;
            let y = i as u32 / cw;
            ci[0] = ((self.tick.wrapping_add(x) % cw) * 255 / cw) as u8; // B
            ci[1] = (y * 255 / ch) as u8; // G
            ci[2] = (self.tick % 256) as u8; // R
            ci[3] = 255;
        }
    }

    fn check_map_buffers(depth: &[u16], out_len: usize, expected_out: usize) -> Result<()> {
        if depth.len() != DEPTH_RESOLUTION.to_pixel_count() {
            return Err(Error::BufferSize {
                expected: DEPTH_RESOLUTION.to_pixel_count(),
                actual: depth.len(),
            });
        }
        if out_len != expected_out {
            return Err(Error::BufferSize {
                expected: expected_out,
                actual: out_len,
            });
        }
        Ok(())
    }
}

impl Default for SimCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl DepthCamera for SimCamera {
    fn info(&self) -> &SensorInfo {
        &self.info
    }

    fn acquire_latest(&mut self, frames: &mut FrameSet) -> Result<FrameReady> {
        if self.closed {
            return Err(Error::Disconnected);
        }
        frames.color.check_len()?;
        frames.depth.check_len()?;

        if let Some(last) = self.last_frame {
            if last.elapsed() < self.frame_interval {
                return Ok(FrameReady::none());
            }
        }
        self.last_frame = Some(Instant::now());
        self.tick = self.tick.wrapping_add(1);

        self.fill_frames(frames);
        Ok(FrameReady::both())
    }

    fn map_depth_to_color(&self, depth: &[u16], out: &mut [SpacePoint]) -> Result<()> {
        Self::check_map_buffers(depth, out.len(), DEPTH_RESOLUTION.to_pixel_count())?;

        let (w, _) = DEPTH_RESOLUTION.to_tuple();
        for (i, (oi, di)) in std::iter::zip(out, depth).enumerate() {
            *oi = if *di == 0 {
                SpacePoint::INVALID
            } else {
                let x = (i as u32 % w) as f32;
                let y = (i as u32 / w) as f32;
                SpacePoint::new(x * SCALE_X + PARALLAX_PX, y * SCALE_Y)
            };
        }
        Ok(())
    }

    fn map_color_to_depth(&self, depth: &[u16], out: &mut [SpacePoint]) -> Result<()> {
        Self::check_map_buffers(depth, out.len(), COLOR_RESOLUTION.to_pixel_count())?;

        let (cw, _) = COLOR_RESOLUTION.to_tuple();
        for (i, oi) in out.iter_mut().enumerate() {
            let x = (i as u32 % cw) as f32;
            let y = (i as u32 / cw) as f32;
            let point = SpacePoint::new((x - PARALLAX_PX) / SCALE_X, y / SCALE_Y);

            // the mapping is only defined where the depth sensor has a reading
            *oi = match point.to_pixel(&DEPTH_RESOLUTION) {
                Some((dx, dy)) if depth[(dy * DEPTH_RESOLUTION.width() + dx) as usize] > 0 => point,
                _ => SpacePoint::INVALID,
            };
        }
        Ok(())
    }

    fn shut_down(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameSet;

    #[test]
    fn delivers_frames_with_matching_geometry() {
        let mut camera = SimCamera::new();
        let mut frames = FrameSet::for_camera(camera.info());
        let ready = camera.acquire_latest(&mut frames).unwrap();
        assert!(ready.color && ready.depth);
        assert_eq!(frames.depth.data.len(), DEPTH_RESOLUTION.to_pixel_count());
        assert_eq!(
            frames.color.data.len(),
            COLOR_RESOLUTION.to_pixel_count() * 4
        );
    }

    #[test]
    fn polling_faster_than_the_frame_rate_yields_nothing() {
        let mut camera = SimCamera::with_frame_interval(Duration::from_secs(3600));
        let mut frames = FrameSet::for_camera(camera.info());
        assert!(camera.acquire_latest(&mut frames).unwrap().any());
        assert_eq!(
            camera.acquire_latest(&mut frames).unwrap(),
            FrameReady::none()
        );
    }

    #[test]
    fn undersized_buffers_are_rejected() {
        let mut camera = SimCamera::new();
        let mut frames = FrameSet::for_camera(camera.info());
        frames.depth.data.truncate(10);
        assert!(camera.acquire_latest(&mut frames).is_err());
    }

    #[test]
    fn hole_pixels_have_no_reading_and_do_not_map() {
        let mut camera = SimCamera::new();
        let mut frames = FrameSet::for_camera(camera.info());
        camera.acquire_latest(&mut frames).unwrap();

        let (w, h) = DEPTH_RESOLUTION.to_tuple();
        let center = (h / 2 * w + w / 2) as usize;
        assert_eq!(frames.depth.data[center], 0);

        let mut points = vec![SpacePoint::INVALID; DEPTH_RESOLUTION.to_pixel_count()];
        camera
            .map_depth_to_color(&frames.depth.data, &mut points)
            .unwrap();
        assert!(!points[center].is_valid());
        // the ramp area maps fine
        assert!(points[0].is_valid());
    }

    #[test]
    fn rig_model_round_trips() {
        let mut camera = SimCamera::new();
        let mut frames = FrameSet::for_camera(camera.info());
        camera.acquire_latest(&mut frames).unwrap();

        let mut d2c = vec![SpacePoint::INVALID; DEPTH_RESOLUTION.to_pixel_count()];
        camera
            .map_depth_to_color(&frames.depth.data, &mut d2c)
            .unwrap();

        // a depth pixel with a reading projects into color space and back
        let (dw, _) = DEPTH_RESOLUTION.to_tuple();
        let (dx, dy) = (10u32, 20u32);
        let color_point = d2c[(dy * dw + dx) as usize];
        assert!(color_point.is_valid());

        let mut c2d = vec![SpacePoint::INVALID; COLOR_RESOLUTION.to_pixel_count()];
        camera
            .map_color_to_depth(&frames.depth.data, &mut c2d)
            .unwrap();
        let (cx, cy) = color_point.to_pixel(&COLOR_RESOLUTION).unwrap();
        let back = c2d[(cy * COLOR_RESOLUTION.width() + cx) as usize];
        assert!(back.is_valid());
        assert_eq!(back.to_pixel(&DEPTH_RESOLUTION), Some((dx, dy)));
    }

    #[test]
    fn acquire_after_shut_down_fails() {
        let mut camera = SimCamera::new();
        let mut frames = FrameSet::for_camera(camera.info());
        camera.shut_down();
        assert!(camera.acquire_latest(&mut frames).is_err());
    }
}
